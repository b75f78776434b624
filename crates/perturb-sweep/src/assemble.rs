//! In-memory dataset assembly from parallel per-sample lists.

use std::path::PathBuf;

use perturb_types::{Category, ImageBuffer, ImageDataset, MetaMap, Sample};

use crate::error::{Result, SweepError};

/// A fixed-length dataset materialized from parallel per-sample lists.
///
/// The sweep engine accumulates transformed images, targets and metadata
/// into separate lists (samples may have different image dimensions, so
/// there is no fixed tensor shape to stack into), then assembles them into
/// a dataset exposing the same read protocol as the input.
///
/// # Example
///
/// ```
/// use perturb_sweep::AssembledDataset;
/// use perturb_types::{ClassTarget, ImageBuffer, ImageDataset, MetaMap};
///
/// let dataset = AssembledDataset::from_parts(
///     vec![ImageBuffer::rgb(1, 1, vec![0, 0, 0]).unwrap()],
///     vec![ClassTarget::single(1)],
///     vec![MetaMap::new()],
/// ).unwrap();
///
/// assert_eq!(dataset.len(), 1);
/// assert!(dataset.categories().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledDataset<T> {
    images: Vec<ImageBuffer>,
    targets: Vec<T>,
    metadata: Vec<MetaMap>,
    image_paths: Option<Vec<PathBuf>>,
    categories: Option<Vec<Category>>,
}

impl<T: Clone> AssembledDataset<T> {
    /// Assembles a dataset from parallel lists of images, targets and
    /// metadata.
    ///
    /// The common list length becomes the dataset's length.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming both lengths if the lists are not
    /// equal-length; an unequal invocation is a programming error in the
    /// caller and must not silently truncate.
    pub fn from_parts(
        images: Vec<ImageBuffer>,
        targets: Vec<T>,
        metadata: Vec<MetaMap>,
    ) -> Result<Self> {
        if targets.len() != images.len() {
            return Err(SweepError::length_mismatch(
                "image and target",
                images.len(),
                targets.len(),
            ));
        }
        if metadata.len() != images.len() {
            return Err(SweepError::length_mismatch(
                "image and metadata",
                images.len(),
                metadata.len(),
            ));
        }

        Ok(Self {
            images,
            targets,
            metadata,
            image_paths: None,
            categories: None,
        })
    }

    /// Attaches the category taxonomy (detection datasets).
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Attaches the original image paths.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the path count does not match the
    /// dataset length; a silent mismatch would misattribute images.
    pub fn with_image_paths(mut self, paths: Vec<PathBuf>) -> Result<Self> {
        if paths.len() != self.images.len() {
            return Err(SweepError::length_mismatch(
                "image path and dataset",
                self.images.len(),
                paths.len(),
            ));
        }
        self.image_paths = Some(paths);
        Ok(self)
    }
}

impl<T: Clone> ImageDataset for AssembledDataset<T> {
    type Target = T;

    fn len(&self) -> usize {
        self.images.len()
    }

    fn sample(&self, index: usize) -> Option<Sample<T>> {
        Some(Sample::new(
            self.images.get(index)?.clone(),
            self.targets.get(index)?.clone(),
            self.metadata.get(index)?.clone(),
        ))
    }

    fn image_paths(&self) -> Option<&[PathBuf]> {
        self.image_paths.as_deref()
    }

    fn categories(&self) -> Option<&[Category]> {
        self.categories.as_deref()
    }
}
