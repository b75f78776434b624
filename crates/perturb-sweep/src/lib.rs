//! Perturbation sweep pipeline.
//!
//! Applies a parameterized family of image perturbations to a labeled
//! dataset, producing one independent transformed dataset per parameter
//! combination and exporting each to a COCO-style interchange layout.
//!
//! # Pipeline
//!
//! - [`ParameterAxes`] - Normalized parameter space, expanded to combinations
//! - [`SampleBatch`] - Batch-of-one adapter between dataset and operator
//! - [`DetectionAugmenter`] / [`ClassificationAugmenter`] - Per-sample
//!   application of one operator, with provenance metadata
//! - [`AssembledDataset`] - Transformed dataset built from parallel lists
//! - [`write_coco`] / [`write_classification`] - Interchange export
//! - [`run_detection_sweep`] / [`run_classification_sweep`] - The sweep
//!
//! # External Protocols
//!
//! - [`Perturber`] - One configured perturbation operator
//! - [`PerturberFactory`] - Operator generator over a declared parameter space
//!
//! # Example
//!
//! ```
//! use perturb_sweep::{
//!     AssembledDataset, OperatorError, Perturber, PerturberFactory, THETA_KEY, ThetaValues,
//!     run_detection_sweep,
//! };
//! use perturb_types::{Detections, ImageBuffer, MetaMap, MetaValue};
//!
//! struct Identity;
//!
//! impl Perturber for Identity {
//!     fn apply(&self, image: &ImageBuffer) -> Result<ImageBuffer, OperatorError> {
//!         Ok(image.clone())
//!     }
//!
//!     fn config(&self) -> MetaMap {
//!         MetaMap::new()
//!     }
//! }
//!
//! struct OneAxis;
//!
//! impl PerturberFactory for OneAxis {
//!     fn config(&self) -> MetaMap {
//!         let mut config = MetaMap::new();
//!         config.insert(THETA_KEY.to_string(), MetaValue::from("blur"));
//!         config
//!     }
//!
//!     fn thetas(&self) -> ThetaValues {
//!         ThetaValues::Flat(vec![MetaValue::Int(1), MetaValue::Int(2)])
//!     }
//!
//!     fn perturbers(&self) -> Vec<Box<dyn Perturber>> {
//!         vec![Box::new(Identity), Box::new(Identity)]
//!     }
//! }
//!
//! let dataset = AssembledDataset::from_parts(
//!     vec![ImageBuffer::rgb(1, 1, vec![0, 0, 0]).unwrap()],
//!     vec![Detections::empty()],
//!     vec![MetaMap::new()],
//! )
//! .unwrap();
//!
//! let entries = run_detection_sweep(&dataset, &OneAxis).unwrap();
//!
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0].label, "_blur-1");
//! assert_eq!(entries[1].label, "_blur-2");
//! ```
//!
//! # Quality Standards
//!
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod assemble;
mod augment;
mod axes;
mod batch;
mod error;
mod export;
mod factory;
mod sweep;

// Re-export pipeline components
pub use assemble::AssembledDataset;
pub use augment::{
    Augmentation, ClassificationAugmenter, DetectionAugmenter, IMAGE_HEIGHT_KEY, IMAGE_WIDTH_KEY,
    PROVENANCE_KEY,
};
pub use axes::{ParamCombination, ParameterAxes, THETA_KEY, THETA_KEYS};
pub use batch::SampleBatch;
pub use export::{
    ANNOTATIONS_FILE, CocoAnnotation, CocoAnnotations, CocoImage, METADATA_FILE,
    write_classification, write_coco,
};
pub use sweep::{PerturbedDataset, export_sweep, run_classification_sweep, run_detection_sweep};

// Re-export external protocols
pub use factory::{Perturber, PerturberFactory, ThetaValues};

// Re-export error types
pub use error::{OperatorError, Result, SweepError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        AssembledDataset, Augmentation, ClassificationAugmenter, DetectionAugmenter,
        PROVENANCE_KEY, ParamCombination, ParameterAxes, Perturber, PerturberFactory,
        PerturbedDataset, SampleBatch, SweepError, ThetaValues, export_sweep,
        run_classification_sweep, run_detection_sweep, write_classification, write_coco,
    };
}
