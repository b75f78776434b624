//! Parameter axis normalization and enumeration.

use perturb_types::{MetaMap, MetaValue};

use crate::error::{Result, SweepError};
use crate::factory::ThetaValues;

/// Config key declaring several named axes.
pub const THETA_KEYS: &str = "theta_keys";

/// Config key declaring a single named axis.
pub const THETA_KEY: &str = "theta_key";

/// Normalized parameter space of a perturbation factory.
///
/// Factories declare their parameter space in one of two configuration
/// shapes (see [`ThetaValues`]); this enum is the single internal
/// representation both normalize to. Normalization happens in exactly one
/// place, [`Self::from_factory`], and fails fast on anything it does not
/// recognize.
///
/// # Example
///
/// ```
/// use perturb_sweep::{ParameterAxes, ThetaValues, THETA_KEY};
/// use perturb_types::{MetaMap, MetaValue};
///
/// let mut config = MetaMap::new();
/// config.insert(THETA_KEY.to_string(), MetaValue::from("blur"));
///
/// let thetas = ThetaValues::Flat(vec![
///     MetaValue::Int(1),
///     MetaValue::Int(2),
///     MetaValue::Int(3),
/// ]);
///
/// let axes = ParameterAxes::from_factory(&config, thetas).unwrap();
/// let combinations = axes.combinations();
///
/// assert_eq!(combinations.len(), 3);
/// assert_eq!(combinations[0].label(), "_blur-1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterAxes {
    /// One named axis with a flat value domain.
    Single {
        /// Axis name.
        key: String,
        /// Value domain.
        values: Vec<MetaValue>,
    },
    /// Several named axes, one value domain per axis, in key order.
    Multi {
        /// Axis names.
        keys: Vec<String>,
        /// Value domains, parallel to `keys`.
        domains: Vec<Vec<MetaValue>>,
    },
}

impl ParameterAxes {
    /// Normalizes a factory's configuration and value domains.
    ///
    /// Recognizes the two declared shapes: a `theta_keys` list entry paired
    /// with per-key domains, or a `theta_key` text entry paired with one
    /// flat domain. `theta_keys` takes precedence when both are present,
    /// matching the probe order factories rely on.
    ///
    /// # Errors
    ///
    /// Returns a validation error if neither entry is present, if an entry
    /// has the wrong value type, or if the domain shape does not match the
    /// declared keys.
    pub fn from_factory(config: &MetaMap, thetas: ThetaValues) -> Result<Self> {
        if let Some(value) = config.get(THETA_KEYS) {
            let keys = text_list(value)
                .ok_or_else(|| SweepError::malformed_config("theta_keys must be a list of axis names"))?;

            let ThetaValues::PerKey(domains) = thetas else {
                return Err(SweepError::malformed_config(
                    "theta_keys declared but thetas is a flat value list",
                ));
            };

            if keys.len() != domains.len() {
                return Err(SweepError::length_mismatch(
                    "theta_keys and theta domains",
                    keys.len(),
                    domains.len(),
                ));
            }

            return Ok(Self::Multi { keys, domains });
        }

        if let Some(value) = config.get(THETA_KEY) {
            let MetaValue::Text(key) = value else {
                return Err(SweepError::malformed_config("theta_key must be an axis name"));
            };

            let ThetaValues::Flat(values) = thetas else {
                return Err(SweepError::malformed_config(
                    "theta_key declared but thetas is a per-key list",
                ));
            };

            return Ok(Self::Single {
                key: key.clone(),
                values,
            });
        }

        Err(SweepError::malformed_config(
            "neither theta_keys nor theta_key present",
        ))
    }

    /// Returns the axis names in declaration order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        match self {
            Self::Single { key, .. } => vec![key.as_str()],
            Self::Multi { keys, .. } => keys.iter().map(String::as_str).collect(),
        }
    }

    /// Returns the number of combinations the axes expand to.
    #[must_use]
    pub fn combination_count(&self) -> usize {
        match self {
            Self::Single { values, .. } => values.len(),
            Self::Multi { domains, .. } => domains.iter().map(Vec::len).product(),
        }
    }

    /// Expands the axes into the cartesian product of their value domains,
    /// in key order.
    ///
    /// The order matches a conforming factory's operator iteration order:
    /// the last axis varies fastest.
    #[must_use]
    pub fn combinations(&self) -> Vec<ParamCombination> {
        let (keys, domains): (Vec<&str>, Vec<&[MetaValue]>) = match self {
            Self::Single { key, values } => (vec![key.as_str()], vec![values.as_slice()]),
            Self::Multi { keys, domains } => (
                keys.iter().map(String::as_str).collect(),
                domains.iter().map(Vec::as_slice).collect(),
            ),
        };

        let mut stems: Vec<Vec<MetaValue>> = vec![Vec::new()];
        for domain in &domains {
            let mut next = Vec::with_capacity(stems.len() * domain.len());
            for stem in &stems {
                for value in *domain {
                    let mut extended = stem.clone();
                    extended.push(value.clone());
                    next.push(extended);
                }
            }
            stems = next;
        }

        stems
            .into_iter()
            .map(|values| ParamCombination {
                pairs: keys
                    .iter()
                    .map(|k| (*k).to_string())
                    .zip(values)
                    .collect(),
            })
            .collect()
    }
}

/// One assignment of values to all declared parameter axes.
///
/// Pairs are stored in key order; the order is part of the combination's
/// identity because it determines the label.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamCombination {
    pairs: Vec<(String, MetaValue)>,
}

impl ParamCombination {
    /// Returns the `(key, value)` pairs in key order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, MetaValue)] {
        &self.pairs
    }

    /// Returns the value assigned to `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Encodes the combination as a deterministic label: `_{key}-{value}`
    /// concatenated per pair in key order.
    ///
    /// Distinct combinations produce distinct labels unless two values
    /// share a string form, a documented limitation that is not silently
    /// handled.
    #[must_use]
    pub fn label(&self) -> String {
        use std::fmt::Write;

        let mut label = String::new();
        for (key, value) in &self.pairs {
            // Writing to a String cannot fail.
            let _ = write!(label, "_{key}-{value}");
        }
        label
    }
}

fn text_list(value: &MetaValue) -> Option<Vec<String>> {
    let MetaValue::List(items) = value else {
        return None;
    };

    items
        .iter()
        .map(|item| match item {
            MetaValue::Text(s) => Some(s.clone()),
            _ => None,
        })
        .collect()
}
