//! Augmentation adapters applying one operator to one sample.

use perturb_types::{ClassTarget, Detections, MetaValue, Sample};

use crate::batch::SampleBatch;
use crate::error::{Result, SweepError};
use crate::factory::Perturber;

/// Reserved metadata key holding the operator configuration that produced
/// a transformed sample.
///
/// The value is the operator's own `config()` nested as a map, never the
/// sweep-level label, and never flattened into top-level keys.
pub const PROVENANCE_KEY: &str = "perturb::operator";

/// Metadata key for the post-transform image height (classification only).
pub const IMAGE_HEIGHT_KEY: &str = "image_height";

/// Metadata key for the post-transform image width (classification only).
pub const IMAGE_WIDTH_KEY: &str = "image_width";

/// An adapter applying one perturbation operator to batch-of-one samples.
///
/// Implementations never mutate the incoming sample's metadata; the
/// returned sample carries a freshly built mapping, so the source sample
/// stays safe to reuse across every combination of a sweep.
pub trait Augmentation<T> {
    /// Transforms the batch's single sample.
    ///
    /// # Errors
    ///
    /// Returns an operator failure if the wrapped perturbation fails; the
    /// error aborts the sweep.
    fn apply(&self, batch: SampleBatch<T>) -> Result<Sample<T>>;
}

/// Augmentation adapter for object-detection samples.
///
/// The operator transforms pixels only: bounding boxes and labels pass
/// through unchanged. Supporting operators that geometrically remap boxes
/// is a future extension.
pub struct DetectionAugmenter {
    perturber: Box<dyn Perturber>,
}

impl DetectionAugmenter {
    /// Creates an adapter bound to one operator.
    #[must_use]
    pub fn new(perturber: Box<dyn Perturber>) -> Self {
        Self { perturber }
    }
}

impl Augmentation<Detections> for DetectionAugmenter {
    fn apply(&self, batch: SampleBatch<Detections>) -> Result<Sample<Detections>> {
        let (image, target, metadata) = batch.into_sample().into_parts();

        let perturbed = self
            .perturber
            .apply(&image)
            .map_err(SweepError::operator)?;

        let mut enriched = metadata;
        enriched.insert(
            PROVENANCE_KEY.to_string(),
            MetaValue::Map(self.perturber.config()),
        );

        Ok(Sample::new(perturbed, target, enriched))
    }
}

/// Augmentation adapter for classification samples.
///
/// Labels pass through unchanged. Besides provenance, the adapter records
/// the post-transform image dimensions in metadata: the classification
/// pipeline does not otherwise track image size, and perturbations may
/// change it.
pub struct ClassificationAugmenter {
    perturber: Box<dyn Perturber>,
}

impl ClassificationAugmenter {
    /// Creates an adapter bound to one operator.
    #[must_use]
    pub fn new(perturber: Box<dyn Perturber>) -> Self {
        Self { perturber }
    }
}

impl Augmentation<ClassTarget> for ClassificationAugmenter {
    fn apply(&self, batch: SampleBatch<ClassTarget>) -> Result<Sample<ClassTarget>> {
        let (image, target, metadata) = batch.into_sample().into_parts();

        let perturbed = self
            .perturber
            .apply(&image)
            .map_err(SweepError::operator)?;

        let mut enriched = metadata;
        enriched.insert(
            PROVENANCE_KEY.to_string(),
            MetaValue::Map(self.perturber.config()),
        );
        enriched.insert(
            IMAGE_HEIGHT_KEY.to_string(),
            MetaValue::Int(i64::from(perturbed.height())),
        );
        enriched.insert(
            IMAGE_WIDTH_KEY.to_string(),
            MetaValue::Int(i64::from(perturbed.width())),
        );

        Ok(Sample::new(perturbed, target, enriched))
    }
}
