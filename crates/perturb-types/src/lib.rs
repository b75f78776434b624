//! Data model for image perturbation sweeps.
//!
//! This crate provides the types shared by the sweep pipeline:
//!
//! # Sample Types
//!
//! - [`ImageBuffer`] - Interleaved HWC pixel buffer with per-sample dimensions
//! - [`Sample`] - One (image, target, metadata) triple
//! - [`BoundingBox`] - Pixel-space corner-format bounding box
//! - [`Detections`] - Object-detection target (boxes + parallel labels)
//! - [`ClassTarget`] - Classification target (label set)
//! - [`Category`] - One entry of a detection taxonomy
//!
//! # Metadata Types
//!
//! - [`MetaValue`] / [`MetaMap`] - Tagged metadata values and mappings
//! - [`NumericArray`] - N-dimensional numeric array, JSON-converted at export
//!
//! # Dataset Protocol
//!
//! - [`ImageDataset`] - Fixed-length, indexable dataset read protocol
//!
//! # Example
//!
//! ```
//! use perturb_types::{BoundingBox, Detections, ImageBuffer, MetaMap, Sample};
//!
//! let sample = Sample::new(
//!     ImageBuffer::rgb(4, 4, vec![0u8; 4 * 4 * 3]).unwrap(),
//!     Detections::new(vec![BoundingBox::new(0.0, 0.0, 2.0, 2.0)], vec![1]).unwrap(),
//!     MetaMap::new(),
//! );
//!
//! assert_eq!(sample.target.len(), 1);
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

mod bbox;
mod category;
mod dataset;
mod detection;
mod error;
mod image;
mod label;
mod metadata;
mod sample;

// Re-export sample types
pub use bbox::BoundingBox;
pub use category::Category;
pub use detection::Detections;
pub use image::ImageBuffer;
pub use label::ClassTarget;
pub use sample::Sample;

// Re-export metadata types
pub use metadata::{MetaMap, MetaValue, NumericArray, map_to_json};

// Re-export dataset protocol
pub use dataset::ImageDataset;

// Re-export error types
pub use error::{Result, TypesError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        BoundingBox, Category, ClassTarget, Detections, ImageBuffer, ImageDataset, MetaMap,
        MetaValue, NumericArray, Sample, TypesError,
    };
}
