//! maskline: boundary outline extraction from binary masks (sans-IO).
//!
//! Turns a boolean membership grid into a compact list of boundary
//! coordinates through: edge extraction -> horizontal collapse ->
//! vertical collapse.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! grids and returns structured data. Producing the mask (e.g. from an
//! image-segmentation step) and consuming the outline (e.g. a polygon
//! renderer) are the caller's concern.

pub mod edge;
pub mod mask;
pub mod reduce;
pub mod types;

pub use edge::extract_edges;
pub use mask::Mask;
pub use reduce::reduce_redundant;
pub use types::{Axis, BoundingBox, Dimensions, OutlineConfig, OutlineError, OutlineResult, Point};

/// Run the full outline extraction pipeline.
///
/// Takes a binary [`Mask`] and a configuration, then produces an
/// [`OutlineResult`] containing the reduced edge points and the source
/// mask dimensions. The dimensions are needed by downstream consumers
/// to set coordinate spaces.
///
/// # Pipeline steps
///
/// 1. Edge extraction (8-connected boundary scan, optionally limited
///    to `config.bbox`)
/// 2. Optional horizontal collapse (runs sharing a `y` value)
/// 3. Optional vertical collapse (runs sharing an `x` value)
///
/// # Errors
///
/// Returns [`OutlineError::EmptyMask`] if `mask` has zero area.
/// Returns [`OutlineError::NoEdges`] if extraction finds no edge cells.
pub fn process(mask: &Mask, config: &OutlineConfig) -> Result<OutlineResult, OutlineError> {
    if mask.is_empty() {
        return Err(OutlineError::EmptyMask);
    }

    // 1. Edge extraction.
    let mut points = edge::extract_edges(mask, config.bbox);
    if points.is_empty() {
        return Err(OutlineError::NoEdges);
    }

    // 2. Collapse horizontal runs.
    if config.collapse_rows {
        points = reduce::reduce_redundant(&points, Axis::Y);
    }

    // 3. Collapse vertical runs.
    if config.collapse_columns {
        points = reduce::reduce_redundant(&points, Axis::X);
    }

    Ok(OutlineResult {
        points,
        dimensions: mask.dimensions(),
    })
}
