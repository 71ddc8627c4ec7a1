//! Edge extraction: find the boundary cells of a binary mask.
//!
//! A cell is an edge if it is true and at least one of its 8 neighbors
//! is false or lies outside the grid; the mask boundary counts as
//! outside. This is the first pipeline stage; its output feeds the
//! collapse passes in [`crate::reduce`].

use crate::mask::Mask;
use crate::types::{BoundingBox, Point};

/// The 8-connected neighborhood as `(row, column)` offsets.
///
/// Kept in the order the neighborhood is walked: the test for a cell
/// stops at the first offset whose lookup is false or off-grid.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Extract the edge cells of a binary mask.
///
/// Scans the mask row-major (top to bottom, left to right) and returns
/// the coordinates of every true cell with at least one false or
/// off-grid neighbor, as x-first [`Point`]s in scan order. Interior
/// cells (all 8 neighbors in-bounds and true) are skipped, as are
/// false cells.
///
/// When `bbox` is given, only cells inside the inclusive box are
/// scanned; neighbor lookups still consult the full mask, so a cell on
/// the box boundary but interior to the mask is not an edge. The box
/// is not validated; portions outside the grid read as empty and
/// contribute nothing.
///
/// Never panics; a mask with no true cells yields an empty list.
#[must_use = "returns the edge cell coordinates"]
pub fn extract_edges(mask: &Mask, bbox: Option<BoundingBox>) -> Vec<Point<usize>> {
    let (x_min, y_min, x_max, y_max) = match bbox {
        Some(b) => (b.x_min, b.y_min, b.x_max, b.y_max),
        None => {
            if mask.is_empty() {
                return Vec::new();
            }
            (0, 0, mask.width() - 1, mask.height() - 1)
        }
    };

    let mut edges = Vec::new();
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            if mask.get(x, y) != Some(true) {
                continue;
            }
            if is_boundary(mask, x, y) {
                edges.push(Point::new(x, y));
            }
        }
    }
    edges
}

/// Whether the true cell at `(x, y)` touches a false or off-grid
/// neighbor.
///
/// Short-circuits on the first such neighbor; an off-grid lookup
/// (`None`) counts the same as a false one.
fn is_boundary(mask: &Mask, x: usize, y: usize) -> bool {
    NEIGHBOR_OFFSETS.iter().any(|&(dy, dx)| {
        let neighbor = y
            .checked_add_signed(dy)
            .zip(x.checked_add_signed(dx))
            .and_then(|(ny, nx)| mask.get(nx, ny));
        neighbor != Some(true)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_true(width: usize, height: usize) -> Mask {
        Mask::from_fn(width, height, |_, _| true)
    }

    #[test]
    fn empty_mask_yields_no_edges() {
        assert!(extract_edges(&Mask::new(0, 0), None).is_empty());
        assert!(extract_edges(&Mask::new(5, 0), None).is_empty());
    }

    #[test]
    fn all_false_mask_yields_no_edges() {
        assert!(extract_edges(&Mask::new(4, 4), None).is_empty());
    }

    #[test]
    fn single_cell_mask_is_edge() {
        let mut mask = Mask::new(1, 1);
        mask.set(0, 0, true);
        assert_eq!(extract_edges(&mask, None), vec![Point::new(0, 0)]);
    }

    #[test]
    fn all_true_3x3_has_interior_center() {
        let edges = extract_edges(&all_true(3, 3), None);
        // Every ring cell is an edge; only the center is interior.
        assert_eq!(edges.len(), 8);
        assert!(!edges.contains(&Point::new(1, 1)));
    }

    #[test]
    fn all_true_4x4_has_four_interior_cells() {
        let edges = extract_edges(&all_true(4, 4), None);
        assert_eq!(edges.len(), 12);
        for x in 1..3 {
            for y in 1..3 {
                assert!(!edges.contains(&Point::new(x, y)));
            }
        }
    }

    #[test]
    fn cell_with_later_out_of_bounds_neighbor_is_edge() {
        // Bottom-middle cell of an all-true 3x3: the first neighbors
        // checked are in-bounds and true, but the row below the grid is
        // not, which still classifies the cell as an edge.
        let edges = extract_edges(&all_true(3, 3), None);
        assert!(edges.contains(&Point::new(1, 2)));
    }

    #[test]
    fn isolated_row_is_all_edges_in_scan_order() {
        // 5 wide, 3 tall, only row 1 true: every cell in that row has a
        // false vertical neighbor.
        let mask = Mask::from_fn(5, 3, |_, y| y == 1);
        let edges = extract_edges(&mask, None);
        assert_eq!(
            edges,
            vec![
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(3, 1),
                Point::new(4, 1),
            ]
        );
    }

    #[test]
    fn full_grid_bbox_matches_no_bbox() {
        let mask = Mask::from_fn(6, 5, |x, y| (x + y) % 3 != 0);
        let full = extract_edges(&mask, None);
        let boxed = extract_edges(&mask, Some(BoundingBox::new(0, 0, 5, 4)));
        assert_eq!(full, boxed);
    }

    #[test]
    fn bbox_restricts_scan_region() {
        // All-true 5x5: the only edges are the outer ring. A box over
        // the interior finds none of them.
        let mask = all_true(5, 5);
        let edges = extract_edges(&mask, Some(BoundingBox::new(1, 1, 3, 3)));
        assert!(edges.is_empty());

        // A box over the top row sees that part of the ring only.
        let top = extract_edges(&mask, Some(BoundingBox::new(0, 0, 4, 0)));
        assert_eq!(top.len(), 5);
        assert!(top.iter().all(|p| p.y == 0));
    }

    #[test]
    fn oversized_bbox_is_absorbed() {
        let mask = all_true(3, 3);
        let full = extract_edges(&mask, None);
        let oversized = extract_edges(&mask, Some(BoundingBox::new(0, 0, 10, 10)));
        assert_eq!(full, oversized);
    }

    #[test]
    fn neighbor_lookups_cross_bbox_boundary() {
        // Cells on the box edge but interior to the mask are not edges:
        // classification consults the full mask, not just the box.
        let mask = all_true(5, 5);
        let edges = extract_edges(&mask, Some(BoundingBox::new(1, 1, 3, 3)));
        assert!(!edges.contains(&Point::new(1, 1)));
    }

    #[test]
    fn hollow_shape_reports_inner_boundary() {
        // 5x5 true ring around a false center: all 8 ring-adjacent
        // cells of the hole are edges, plus the outer ring.
        let mask = Mask::from_fn(5, 5, |x, y| !(x == 2 && y == 2));
        let edges = extract_edges(&mask, None);
        // Every true cell is within one step of the hole or the mask
        // boundary, so all 24 true cells are edges.
        assert_eq!(edges.len(), 24);
        assert!(!edges.contains(&Point::new(2, 2)));
    }
}
