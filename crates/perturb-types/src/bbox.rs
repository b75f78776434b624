//! Bounding box type for object detection targets.

use serde::{Deserialize, Serialize};

/// A pixel-space bounding box in corner format.
///
/// Coordinates are `(x1, y1)` top-left to `(x2, y2)` bottom-right, in
/// pixels. The interchange form stored on export is `[x, y, width, height]`
/// with `width = x2 - x1` and `height = y2 - y1`; see [`Self::to_xywh`].
///
/// # Example
///
/// ```
/// use perturb_types::BoundingBox;
///
/// let bbox = BoundingBox::new(10.0, 20.0, 50.0, 80.0);
///
/// assert!((bbox.width() - 40.0).abs() < 1e-9);
/// assert!((bbox.height() - 60.0).abs() < 1e-9);
/// assert_eq!(bbox.to_xywh(), [10.0, 20.0, 40.0, 60.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge (x1), in pixels.
    pub x1: f64,
    /// Top edge (y1), in pixels.
    pub y1: f64,
    /// Right edge (x2), in pixels.
    pub x2: f64,
    /// Bottom edge (y2), in pixels.
    pub y2: f64,
}

impl BoundingBox {
    /// Creates a new bounding box from corner coordinates.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Creates a bounding box from an array `[x1, y1, x2, y2]`.
    #[must_use]
    pub const fn from_array(coords: [f64; 4]) -> Self {
        Self {
            x1: coords[0],
            y1: coords[1],
            x2: coords[2],
            y2: coords[3],
        }
    }

    /// Returns the box as an array `[x1, y1, x2, y2]`.
    #[must_use]
    pub const fn as_array(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Returns the box width (`x2 - x1`).
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Returns the box height (`y2 - y1`).
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Returns the box area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Converts to the stored interchange form `[x, y, width, height]`.
    #[must_use]
    pub fn to_xywh(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2 - self.x1, self.y2 - self.y1]
    }

    /// Checks if the box coordinates are valid.
    ///
    /// Valid means: finite, non-negative, and `x1 <= x2`, `y1 <= y2`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let coords = self.as_array();
        coords.iter().all(|c| c.is_finite() && *c >= 0.0)
            && self.x1 <= self.x2
            && self.y1 <= self.y2
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}
