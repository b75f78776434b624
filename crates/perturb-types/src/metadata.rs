//! Metadata values for dataset samples.
//!
//! Sample metadata is a string-keyed map of [`MetaValue`]s. Most values are
//! JSON-native scalars, lists and maps, but two variants deliberately are
//! not: [`MetaValue::Array`] holds an n-dimensional numeric array that must
//! be converted to nested plain lists before JSON export, and
//! [`MetaValue::Opaque`] marks a value that cannot be serialized at all and
//! fails export loudly.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::error::{Result, TypesError};

/// String-keyed metadata mapping attached to each sample.
pub type MetaMap = BTreeMap<String, MetaValue>;

/// One metadata value.
///
/// # Example
///
/// ```
/// use perturb_types::{MetaMap, MetaValue};
///
/// let mut meta = MetaMap::new();
/// meta.insert("blur".to_string(), MetaValue::Int(2));
/// meta.insert("kind".to_string(), MetaValue::from("gaussian"));
///
/// assert_eq!(format!("{}", meta["blur"]), "2");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    /// Absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Ordered list of values.
    List(Vec<MetaValue>),
    /// Nested string-keyed mapping.
    Map(MetaMap),
    /// N-dimensional numeric array; converted to nested lists at export.
    Array(NumericArray),
    /// Value with no JSON representation; the string describes it for
    /// error reporting. Export fails when one of these is encountered.
    Opaque(String),
}

impl MetaValue {
    /// Converts the value to JSON, recursively turning [`NumericArray`]s
    /// into shape-equivalent nested lists.
    ///
    /// # Errors
    ///
    /// Returns an error for [`MetaValue::Opaque`] values and non-finite
    /// floats, neither of which has a JSON representation.
    pub fn to_json(&self) -> Result<Value> {
        match self {
            Self::Null => Ok(Value::Null),
            Self::Bool(b) => Ok(Value::Bool(*b)),
            Self::Int(i) => Ok(Value::from(*i)),
            Self::Float(f) => number_to_json(*f),
            Self::Text(s) => Ok(Value::String(s.clone())),
            Self::List(items) => items.iter().map(Self::to_json).collect::<Result<Vec<_>>>().map(Value::Array),
            Self::Map(map) => map_to_json(map).map(Value::Object),
            Self::Array(array) => array.to_json(),
            Self::Opaque(desc) => Err(TypesError::not_serializable(desc.clone())),
        }
    }
}

impl fmt::Display for MetaValue {
    /// Deterministic string form used when encoding parameter values into
    /// sweep labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Self::Array(array) => write!(f, "array{:?}", array.shape()),
            Self::Opaque(desc) => write!(f, "{desc}"),
        }
    }
}

impl From<bool> for MetaValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for MetaValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for MetaValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NumericArray> for MetaValue {
    fn from(value: NumericArray) -> Self {
        Self::Array(value)
    }
}

/// Converts a metadata map to a JSON object.
///
/// # Errors
///
/// Returns an error if any contained value is not JSON-serializable.
pub fn map_to_json(map: &MetaMap) -> Result<serde_json::Map<String, Value>> {
    let mut object = serde_json::Map::new();
    for (key, value) in map {
        object.insert(key.clone(), value.to_json()?);
    }
    Ok(object)
}

fn number_to_json(value: f64) -> Result<Value> {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| TypesError::not_serializable(format!("non-finite float {value}")))
}

/// An n-dimensional numeric array in row-major order.
///
/// Not JSON-native: exporters call [`Self::to_json`] to obtain the
/// shape-equivalent nested-list form.
///
/// # Example
///
/// ```
/// use perturb_types::NumericArray;
///
/// let array = NumericArray::new(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let json = array.to_json().unwrap();
///
/// assert_eq!(json, serde_json::json!([[1.0, 2.0], [3.0, 4.0]]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumericArray {
    shape: Vec<usize>,
    data: Vec<f64>,
}

impl NumericArray {
    /// Creates an array from a shape and row-major data.
    ///
    /// An empty shape denotes a scalar (one element).
    ///
    /// # Errors
    ///
    /// Returns an error if `data.len()` does not equal the product of the
    /// shape's dimensions.
    pub fn new(shape: Vec<usize>, data: Vec<f64>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(TypesError::ArrayShapeMismatch {
                shape,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Creates a one-dimensional array.
    #[must_use]
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self {
            shape: vec![data.len()],
            data,
        }
    }

    /// Returns the array shape.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the row-major element data.
    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Converts the array to nested JSON lists matching its shape.
    ///
    /// # Errors
    ///
    /// Returns an error if any element is non-finite.
    pub fn to_json(&self) -> Result<Value> {
        nest(&self.shape, &self.data)
    }
}

fn nest(shape: &[usize], data: &[f64]) -> Result<Value> {
    match shape {
        [] => number_to_json(data[0]),
        [_] => data
            .iter()
            .map(|v| number_to_json(*v))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        [outer, rest @ ..] => {
            let chunk = rest.iter().product::<usize>();
            let mut rows = Vec::with_capacity(*outer);
            for i in 0..*outer {
                rows.push(nest(rest, &data[i * chunk..(i + 1) * chunk])?);
            }
            Ok(Value::Array(rows))
        }
    }
}
