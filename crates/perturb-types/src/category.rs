//! Category taxonomy for detection datasets.

use serde::{Deserialize, Serialize};

/// One entry of a detection dataset's category taxonomy.
///
/// The taxonomy is an ordered list of categories carried by the dataset and
/// preserved unchanged through transformation and export.
///
/// # Example
///
/// ```
/// use perturb_types::Category;
///
/// let cat = Category::new(1, "dog", "animal");
/// assert_eq!(cat.id, 1);
/// assert_eq!(cat.name, "dog");
/// assert_eq!(cat.supercategory, "animal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier referenced by annotation `category_id`s.
    pub id: i64,

    /// Category name.
    pub name: String,

    /// Parent category name.
    pub supercategory: String,
}

impl Category {
    /// Creates a new category.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, supercategory: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            supercategory: supercategory.into(),
        }
    }
}
