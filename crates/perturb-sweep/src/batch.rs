//! Batch-of-one sample wrapper.

use perturb_types::Sample;

/// A batch holding exactly one sample.
///
/// The augmentation adapters are batch-oriented, but the dataset access
/// pattern is single-sample, so every call crosses the boundary with a
/// batch of size one. Modeling that as a type (rather than wrapping a
/// sample in a one-element list at each call site) makes the "always
/// exactly one element" contract unbreakable.
///
/// # Example
///
/// ```
/// use perturb_sweep::SampleBatch;
/// use perturb_types::{ClassTarget, ImageBuffer, MetaMap, Sample};
///
/// let sample = Sample::new(
///     ImageBuffer::rgb(1, 1, vec![0, 0, 0]).unwrap(),
///     ClassTarget::single(1),
///     MetaMap::new(),
/// );
///
/// let batch = SampleBatch::of(sample);
/// assert_eq!(SampleBatch::<ClassTarget>::SIZE, 1);
/// assert_eq!(batch.sample().target.labels, vec![1]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBatch<T> {
    sample: Sample<T>,
}

impl<T> SampleBatch<T> {
    /// The fixed batch size.
    pub const SIZE: usize = 1;

    /// Wraps one sample as a batch.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn of(sample: Sample<T>) -> Self {
        Self { sample }
    }

    /// Returns the batch's single sample.
    #[must_use]
    pub const fn sample(&self) -> &Sample<T> {
        &self.sample
    }

    /// Unwraps the batch into its single sample.
    #[must_use]
    pub fn into_sample(self) -> Sample<T> {
        self.sample
    }
}

impl<T> From<Sample<T>> for SampleBatch<T> {
    fn from(sample: Sample<T>) -> Self {
        Self::of(sample)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use perturb_types::{ClassTarget, ImageBuffer, MetaMap};

    fn sample() -> Sample<ClassTarget> {
        Sample::new(
            ImageBuffer::rgb(1, 1, vec![9, 9, 9]).unwrap(),
            ClassTarget::single(3),
            MetaMap::new(),
        )
    }

    #[test]
    fn batch_round_trip() {
        let batch = SampleBatch::of(sample());
        assert_eq!(batch.sample(), &sample());
        assert_eq!(batch.into_sample(), sample());
    }

    #[test]
    fn batch_from_sample() {
        let batch: SampleBatch<ClassTarget> = sample().into();
        assert_eq!(batch.sample().target.labels, vec![3]);
    }
}
