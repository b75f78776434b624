//! Dataset sample type.

use crate::image::ImageBuffer;
use crate::metadata::MetaMap;

/// A single dataset sample: image, target and metadata.
///
/// The target type is generic: detection datasets use
/// [`Detections`](crate::Detections), classification datasets use
/// [`ClassTarget`](crate::ClassTarget). Samples are immutable once
/// constructed; the pipeline always builds new samples rather than
/// mutating existing ones.
///
/// # Example
///
/// ```
/// use perturb_types::{ClassTarget, ImageBuffer, MetaMap, Sample};
///
/// let sample = Sample::new(
///     ImageBuffer::rgb(2, 2, vec![0u8; 12]).unwrap(),
///     ClassTarget::single(1),
///     MetaMap::new(),
/// );
///
/// assert_eq!(sample.image.dimensions(), (2, 2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<T> {
    /// Pixel data.
    pub image: ImageBuffer,

    /// Ground-truth target.
    pub target: T,

    /// Per-sample metadata.
    pub metadata: MetaMap,
}

impl<T> Sample<T> {
    /// Creates a new sample.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn new(image: ImageBuffer, target: T, metadata: MetaMap) -> Self {
        Self {
            image,
            target,
            metadata,
        }
    }

    /// Splits the sample into its parts.
    #[must_use]
    pub fn into_parts(self) -> (ImageBuffer, T, MetaMap) {
        (self.image, self.target, self.metadata)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::label::ClassTarget;
    use crate::metadata::MetaValue;

    #[test]
    fn sample_new() {
        let mut meta = MetaMap::new();
        meta.insert("id".to_string(), MetaValue::Int(0));

        let sample = Sample::new(
            ImageBuffer::rgb(1, 1, vec![0, 0, 0]).unwrap(),
            ClassTarget::single(2),
            meta,
        );

        assert_eq!(sample.target.labels, vec![2]);
        assert_eq!(sample.metadata["id"], MetaValue::Int(0));
    }

    #[test]
    fn sample_into_parts() {
        let sample = Sample::new(
            ImageBuffer::rgb(1, 1, vec![1, 2, 3]).unwrap(),
            ClassTarget::single(0),
            MetaMap::new(),
        );

        let (image, target, metadata) = sample.into_parts();
        assert_eq!(image.as_bytes(), &[1, 2, 3]);
        assert_eq!(target.labels, vec![0]);
        assert!(metadata.is_empty());
    }
}
