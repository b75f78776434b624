//! Error types for the sweep pipeline.

use thiserror::Error;

use perturb_types::TypesError;

/// Boxed error produced by an external perturbation operator.
pub type OperatorError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while running or exporting a perturbation sweep.
#[derive(Debug, Error)]
pub enum SweepError {
    /// Two parallel sequences that must be index-aligned have different
    /// lengths.
    #[error("{context} length mismatch ({expected} != {actual})")]
    LengthMismatch {
        /// What was being aligned.
        context: String,
        /// Length of the reference sequence.
        expected: usize,
        /// Length of the mismatched sequence.
        actual: usize,
    },

    /// The factory configuration declares neither recognized axis shape.
    #[error("malformed factory configuration: {0}")]
    MalformedFactoryConfig(String),

    /// The enumerated parameter combinations do not match the operators the
    /// factory yields.
    #[error("combination count mismatch: enumerated {enumerated}, factory yielded {yielded}")]
    CombinationCountMismatch {
        /// Combinations obtained by expanding the declared axes.
        enumerated: usize,
        /// Operators the factory actually produced.
        yielded: usize,
    },

    /// A perturbation operator failed while being applied to a sample.
    /// Propagated as-is; no retry, no partial result.
    #[error("perturbation operator failed: {source}")]
    Operator {
        /// The operator's own error.
        #[source]
        source: OperatorError,
    },

    /// A metadata value could not be made JSON-serializable.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Filesystem failure during export.
    #[error("IO error: {0}")]
    Io(String),

    /// Other validation failure.
    #[error("validation error: {0}")]
    Validation(String),
}

impl SweepError {
    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Creates a malformed factory configuration error.
    #[must_use]
    pub fn malformed_config(reason: impl Into<String>) -> Self {
        Self::MalformedFactoryConfig(reason.into())
    }

    /// Creates a combination count mismatch error.
    #[must_use]
    pub const fn combination_count_mismatch(enumerated: usize, yielded: usize) -> Self {
        Self::CombinationCountMismatch {
            enumerated,
            yielded,
        }
    }

    /// Creates an operator failure from the operator's own error.
    #[must_use]
    pub fn operator(source: OperatorError) -> Self {
        Self::Operator { source }
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization(reason.into())
    }

    /// Creates an IO error.
    #[must_use]
    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }
}

impl From<std::io::Error> for SweepError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SweepError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<image::ImageError> for SweepError {
    fn from(err: image::ImageError) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<TypesError> for SweepError {
    fn from(err: TypesError) -> Self {
        match err {
            TypesError::NotSerializable(reason) => Self::Serialization(reason),
            other => Self::Validation(other.to_string()),
        }
    }
}

/// Result type for sweep operations.
pub type Result<T> = std::result::Result<T, SweepError>;
