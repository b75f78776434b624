//! Detection target type.

use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;
use crate::error::{Result, TypesError};

/// Ground-truth detections for one sample.
///
/// Holds an ordered sequence of bounding boxes with a parallel sequence of
/// category labels; position `i` of each sequence describes the same object.
///
/// # Example
///
/// ```
/// use perturb_types::{BoundingBox, Detections};
///
/// let dets = Detections::new(
///     vec![BoundingBox::new(0.0, 0.0, 10.0, 10.0)],
///     vec![2],
/// ).unwrap();
///
/// assert_eq!(dets.len(), 1);
/// assert_eq!(dets.labels[0], 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detections {
    /// Bounding boxes, in object order.
    pub boxes: Vec<BoundingBox>,

    /// Category labels, parallel to `boxes`.
    pub labels: Vec<i64>,
}

impl Detections {
    /// Creates a detection target from parallel box and label sequences.
    ///
    /// # Errors
    ///
    /// Returns an error if the two sequences have different lengths.
    pub fn new(boxes: Vec<BoundingBox>, labels: Vec<i64>) -> Result<Self> {
        if boxes.len() != labels.len() {
            return Err(TypesError::box_label_mismatch(boxes.len(), labels.len()));
        }
        Ok(Self { boxes, labels })
    }

    /// Creates an empty detection target (no objects).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            boxes: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// Returns the number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Checks if there are no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Iterates over `(box, label)` pairs in object order.
    pub fn iter(&self) -> impl Iterator<Item = (&BoundingBox, i64)> {
        self.boxes.iter().zip(self.labels.iter().copied())
    }
}

impl Default for Detections {
    fn default() -> Self {
        Self::empty()
    }
}
