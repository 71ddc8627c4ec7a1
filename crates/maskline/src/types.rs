//! Shared types for the maskline outline extraction pipeline.

use serde::{Deserialize, Serialize};

/// A 2D point in mask coordinates, x first.
///
/// Generic over the coordinate type: edge extraction produces
/// `Point<usize>` grid positions, while [`crate::reduce::reduce_redundant`]
/// accepts any orderable numeric coordinate (integer or real).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point<T> {
    /// Horizontal position (cells from the left edge).
    pub x: T,
    /// Vertical position (cells from the top edge).
    pub y: T,
}

impl<T> Point<T> {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Selects which coordinate a reduction pass groups runs by.
///
/// Reducing along [`Y`](Self::Y) collapses horizontal runs (points
/// sharing a row); reducing along [`X`](Self::X) collapses vertical
/// runs. The default groups by `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Axis {
    /// Group runs by the `x` coordinate.
    X,
    /// Group runs by the `y` coordinate.
    #[default]
    Y,
}

impl Axis {
    /// The selected coordinate of `point`.
    #[must_use]
    pub const fn component<T: Copy>(self, point: Point<T>) -> T {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
        }
    }
}

/// An inclusive rectangular sub-region of a mask, restricting the
/// edge-extraction scan.
///
/// Both corners are part of the region: a box with `x_min == x_max`
/// spans one column. Corners are not validated against any particular
/// mask; cells of the box that fall outside the grid are simply never
/// true and contribute nothing to the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Leftmost column of the region.
    pub x_min: usize,
    /// Topmost row of the region.
    pub y_min: usize,
    /// Rightmost column of the region (inclusive).
    pub x_max: usize,
    /// Bottommost row of the region (inclusive).
    pub y_max: usize,
}

impl BoundingBox {
    /// Create a bounding box from its corner coordinates.
    #[must_use]
    pub const fn new(x_min: usize, y_min: usize, x_max: usize, y_max: usize) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }
}

/// Mask dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in cells.
    pub width: usize,
    /// Height in cells.
    pub height: usize,
}

/// Configuration for the outline extraction pipeline.
///
/// All fields are public with no construction-time validation; the
/// defaults run a full-grid scan followed by both collapse passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineConfig {
    /// Restrict the edge scan to this region of the mask.
    /// `None` scans the full grid.
    pub bbox: Option<BoundingBox>,

    /// Collapse horizontal runs (consecutive edge points sharing a `y`
    /// value) to their endpoints.
    pub collapse_rows: bool,

    /// Collapse vertical runs (consecutive edge points sharing an `x`
    /// value) to their endpoints.
    pub collapse_columns: bool,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            bbox: None,
            collapse_rows: true,
            collapse_columns: true,
        }
    }
}

/// Result of running the outline extraction pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineResult {
    /// The extracted (and, per config, collapsed) edge points.
    pub points: Vec<Point<usize>>,

    /// Dimensions of the source mask in cells.
    ///
    /// Downstream consumers use this to set coordinate spaces
    /// (e.g., a renderer's viewport).
    pub dimensions: Dimensions,
}

/// Errors that can occur while building masks or running the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum OutlineError {
    /// The mask has zero area (width or height of 0).
    #[error("mask has no cells")]
    EmptyMask,

    /// Edge extraction found no edge points.
    #[error("no edge points found in the mask")]
    NoEdges,

    /// `Mask::from_rows` was given rows of unequal length.
    #[error("ragged mask rows: row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of row 0, which all rows must match.
        expected: usize,
        /// Actual length of the offending row.
        actual: usize,
    },
}
