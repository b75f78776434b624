//! Error types for perturb-types crate.

use thiserror::Error;

/// Errors that can occur when constructing or converting data model types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TypesError {
    /// Pixel buffer length does not match the declared dimensions.
    #[error("pixel buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch {
        /// Expected buffer length (width * height * channels).
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },

    /// Image dimensions are invalid (zero width, height or channels).
    #[error("invalid image dimensions: {width}x{height}x{channels}")]
    InvalidDimensions {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
        /// Channel count.
        channels: u32,
    },

    /// Bounding box and label sequences have different lengths.
    #[error("box/label length mismatch: {boxes} boxes, {labels} labels")]
    BoxLabelMismatch {
        /// Number of bounding boxes.
        boxes: usize,
        /// Number of labels.
        labels: usize,
    },

    /// Numeric array data length does not match its declared shape.
    #[error("array shape mismatch: shape {shape:?} implies {expected} elements, got {actual}")]
    ArrayShapeMismatch {
        /// Declared shape.
        shape: Vec<usize>,
        /// Element count implied by the shape.
        expected: usize,
        /// Actual element count.
        actual: usize,
    },

    /// A metadata value cannot be represented as JSON.
    #[error("metadata value is not JSON-serializable: {0}")]
    NotSerializable(String),
}

impl TypesError {
    /// Creates a buffer size mismatch error.
    #[must_use]
    pub const fn buffer_size_mismatch(expected: usize, actual: usize) -> Self {
        Self::BufferSizeMismatch { expected, actual }
    }

    /// Creates an invalid dimensions error.
    #[must_use]
    pub const fn invalid_dimensions(width: u32, height: u32, channels: u32) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            channels,
        }
    }

    /// Creates a box/label length mismatch error.
    #[must_use]
    pub const fn box_label_mismatch(boxes: usize, labels: usize) -> Self {
        Self::BoxLabelMismatch { boxes, labels }
    }

    /// Creates a not-serializable error.
    #[must_use]
    pub fn not_serializable(reason: impl Into<String>) -> Self {
        Self::NotSerializable(reason.into())
    }
}

/// Result type for perturb-types operations.
pub type Result<T> = std::result::Result<T, TypesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_buffer_size_mismatch() {
        let err = TypesError::buffer_size_mismatch(300, 299);
        assert!(err.to_string().contains("300"));
        assert!(err.to_string().contains("299"));
    }

    #[test]
    fn error_invalid_dimensions() {
        let err = TypesError::invalid_dimensions(0, 480, 3);
        assert!(err.to_string().contains("0x480x3"));
    }

    #[test]
    fn error_box_label_mismatch() {
        let err = TypesError::box_label_mismatch(2, 3);
        assert!(err.to_string().contains("2 boxes"));
        assert!(err.to_string().contains("3 labels"));
    }

    #[test]
    fn error_array_shape_mismatch() {
        let err = TypesError::ArrayShapeMismatch {
            shape: vec![2, 3],
            expected: 6,
            actual: 5,
        };
        assert!(err.to_string().contains("[2, 3]"));
        assert!(err.to_string().contains('6'));
        assert!(err.to_string().contains('5'));
    }

    #[test]
    fn error_not_serializable() {
        let err = TypesError::not_serializable("opaque handle");
        assert!(err.to_string().contains("opaque handle"));
    }
}
