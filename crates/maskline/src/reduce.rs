//! Redundancy reduction: collapse collinear runs of edge points.
//!
//! After sorting by one axis, consecutive points sharing that axis's
//! coordinate form a run; every point of a run between its first and
//! last is redundant: dropping it does not change the straight-line
//! shape of the run. This is the second pipeline stage, typically
//! applied once per axis to the output of [`crate::edge`].

use std::cmp::Ordering;

use crate::types::{Axis, Point};

/// Collapse runs of points sharing a coordinate on `axis` to their
/// endpoints.
///
/// The input is sorted (stably) by the selected axis component, then
/// scanned for runs of equal values. Each run contributes its first
/// point, and (when the run has more than one point) its last; the
/// stable sort means "first" and "last" are decided by input order
/// within a run. The returned list is in ascending axis order, runs
/// back to back.
///
/// The trailing run is flushed after the scan, so the points of the
/// last run are always emitted.
///
/// The input is not mutated. Incomparable coordinate values (e.g. a
/// float NaN) compare equal for sorting purposes, so the function
/// never panics for any numeric type.
#[must_use = "returns the collapsed point list"]
pub fn reduce_redundant<T>(points: &[Point<T>], axis: Axis) -> Vec<Point<T>>
where
    T: Copy + PartialOrd,
{
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        axis.component(*a)
            .partial_cmp(&axis.component(*b))
            .unwrap_or(Ordering::Equal)
    });

    let mut reduced = Vec::new();
    let mut iter = sorted.into_iter();
    let Some(mut first) = iter.next() else {
        return reduced;
    };
    let mut last = first;
    let mut run_len = 1;

    for point in iter {
        if axis.component(point) == axis.component(first) {
            last = point;
            run_len += 1;
        } else {
            flush_run(&mut reduced, first, last, run_len);
            first = point;
            last = point;
            run_len = 1;
        }
    }
    // The loop only emits on an axis-value transition; the run still in
    // progress at the end is flushed here.
    flush_run(&mut reduced, first, last, run_len);

    reduced
}

/// Emit a completed run: its first point, and its last when the run
/// holds more than one point.
fn flush_run<T: Copy>(
    reduced: &mut Vec<Point<T>>,
    first: Point<T>,
    last: Point<T>,
    run_len: usize,
) {
    reduced.push(first);
    if run_len > 1 {
        reduced.push(last);
    }
}
