//! Sweep engine: one transformed dataset per parameter combination.

use std::path::{Path, PathBuf};

use tracing::info;

use perturb_types::{Category, ClassTarget, Detections, ImageDataset};

use crate::assemble::AssembledDataset;
use crate::augment::{Augmentation, ClassificationAugmenter, DetectionAugmenter};
use crate::axes::ParameterAxes;
use crate::batch::SampleBatch;
use crate::error::{Result, SweepError};
use crate::export::write_coco;
use crate::factory::{Perturber, PerturberFactory};

/// One entry of a sweep's result: a transformed dataset tagged with the
/// label of the parameter combination that produced it.
///
/// Labels are pairwise distinct across a sweep (barring value formatting
/// collisions) and double as collision-free output directory names.
#[derive(Debug, Clone, PartialEq)]
pub struct PerturbedDataset<T> {
    /// Deterministic encoding of the parameter combination.
    pub label: String,

    /// The transformed dataset.
    pub dataset: AssembledDataset<T>,
}

/// Runs a perturbation sweep over an object-detection dataset.
///
/// Expands the factory's parameter space into discrete combinations,
/// applies the corresponding operator to every sample for each
/// combination, and assembles one new dataset per combination. The input
/// dataset is never mutated; its category taxonomy and image paths are
/// carried into every output dataset unchanged.
///
/// Sample order within a combination is strictly index-increasing;
/// combination order follows the factory's iteration order.
///
/// # Errors
///
/// Returns a validation error for a malformed factory configuration or a
/// combination/operator count mismatch, and propagates the first operator
/// failure as-is; no partial collection is ever returned.
pub fn run_detection_sweep<D>(
    dataset: &D,
    factory: &dyn PerturberFactory,
) -> Result<Vec<PerturbedDataset<Detections>>>
where
    D: ImageDataset<Target = Detections> + ?Sized,
{
    sweep_with(dataset, factory, DetectionAugmenter::new)
}

/// Runs a perturbation sweep over a classification dataset.
///
/// Identical contract to [`run_detection_sweep`], with the classification
/// augmentation adapter (labels pass through; post-transform image
/// dimensions are recorded in metadata).
///
/// # Errors
///
/// Same failure modes as [`run_detection_sweep`].
pub fn run_classification_sweep<D>(
    dataset: &D,
    factory: &dyn PerturberFactory,
) -> Result<Vec<PerturbedDataset<ClassTarget>>>
where
    D: ImageDataset<Target = ClassTarget> + ?Sized,
{
    sweep_with(dataset, factory, ClassificationAugmenter::new)
}

fn sweep_with<T, D, A, B>(
    dataset: &D,
    factory: &dyn PerturberFactory,
    build: B,
) -> Result<Vec<PerturbedDataset<T>>>
where
    T: Clone,
    D: ImageDataset<Target = T> + ?Sized,
    A: Augmentation<T>,
    B: Fn(Box<dyn Perturber>) -> A,
{
    let axes = ParameterAxes::from_factory(&factory.config(), factory.thetas())?;
    let combinations = axes.combinations();
    let perturbers = factory.perturbers();

    // The factory must yield operators in the enumerated cartesian order;
    // a count mismatch means the two sequences cannot be zipped safely.
    if combinations.len() != perturbers.len() {
        return Err(SweepError::combination_count_mismatch(
            combinations.len(),
            perturbers.len(),
        ));
    }

    info!(
        combinations = combinations.len(),
        samples = dataset.len(),
        "Starting perturbation sweep"
    );

    let mut entries = Vec::with_capacity(combinations.len());
    for (combination, perturber) in combinations.into_iter().zip(perturbers) {
        let label = combination.label();
        info!(label = %label, "Applying perturber combination");

        let augmenter = build(perturber);

        let mut images = Vec::with_capacity(dataset.len());
        let mut targets = Vec::with_capacity(dataset.len());
        let mut metadata = Vec::with_capacity(dataset.len());

        for index in 0..dataset.len() {
            let sample = dataset.sample(index).ok_or_else(|| {
                SweepError::validation(format!("dataset index {index} out of bounds"))
            })?;

            let augmented = augmenter.apply(SampleBatch::of(sample))?;
            let (image, target, meta) = augmented.into_parts();
            images.push(image);
            targets.push(target);
            metadata.push(meta);
        }

        let mut assembled = AssembledDataset::from_parts(images, targets, metadata)?;
        if let Some(categories) = dataset.categories() {
            assembled = assembled.with_categories(categories.to_vec());
        }
        if let Some(paths) = dataset.image_paths() {
            assembled = assembled.with_image_paths(paths.to_vec())?;
        }

        entries.push(PerturbedDataset {
            label,
            dataset: assembled,
        });
    }

    info!(datasets = entries.len(), "Perturbation sweep complete");
    Ok(entries)
}

/// Exports every sweep entry under `output_root/<label>/` in the
/// interchange layout, reusing `image_filenames` for each combination.
///
/// Returns the per-combination output directories in sweep order. Label
/// distinctness keeps the directories collision-free.
///
/// # Errors
///
/// Propagates the first export failure; already-written combinations are
/// left on disk.
pub fn export_sweep(
    entries: &[PerturbedDataset<Detections>],
    output_root: &Path,
    image_filenames: &[PathBuf],
    categories: &[Category],
) -> Result<Vec<PathBuf>> {
    let mut output_dirs = Vec::with_capacity(entries.len());

    for entry in entries {
        let output_dir = output_root.join(&entry.label);
        write_coco(&entry.dataset, &output_dir, image_filenames, categories)?;
        output_dirs.push(output_dir);
    }

    Ok(output_dirs)
}
