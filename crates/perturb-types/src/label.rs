//! Classification target type.

use serde::{Deserialize, Serialize};

/// Ground-truth labels for one classification sample.
///
/// A sample carries a label set; single-label datasets use one-element
/// sets. Perturbations operate on pixels only, so labels pass through the
/// pipeline unchanged.
///
/// # Example
///
/// ```
/// use perturb_types::ClassTarget;
///
/// let target = ClassTarget::single(4);
/// assert_eq!(target.labels, vec![4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ClassTarget {
    /// Category labels for this sample.
    pub labels: Vec<i64>,
}

impl ClassTarget {
    /// Creates a classification target from a label set.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn new(labels: Vec<i64>) -> Self {
        Self { labels }
    }

    /// Creates a single-label target.
    #[must_use]
    pub fn single(label: i64) -> Self {
        Self {
            labels: vec![label],
        }
    }

    /// Returns the number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Checks if the label set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
