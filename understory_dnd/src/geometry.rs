// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure rectangle and point helpers on top of `kurbo`.
//!
//! Vector arithmetic (`add`, `subtract`, `negate`) is provided by `kurbo`'s
//! operator impls on [`Point`] and [`Vec2`]; this module only adds the few
//! queries the drag algorithms need beyond that.

use kurbo::{Point, Rect};

/// Returns an inclusive range test for `[lower, upper]`.
///
/// Every "has this edge passed that edge" comparison in the engine goes
/// through this, so landing exactly on a boundary counts as inside.
pub fn is_within(lower: f64, upper: f64) -> impl Fn(f64) -> bool {
    move |value| lower <= value && value <= upper
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).hypot()
}

/// Smallest distance from `target` to any of `candidates`.
///
/// Returns `f64::INFINITY` when there are no candidates.
pub fn closest(target: Point, candidates: impl IntoIterator<Item = Point>) -> f64 {
    candidates
        .into_iter()
        .map(|candidate| distance(target, candidate))
        .fold(f64::INFINITY, f64::min)
}

/// Strict axis-aligned overlap: touching edges do not overlap.
#[must_use]
pub fn has_overlap(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && a.x1 > b.x0 && a.y0 < b.y1 && a.y1 > b.y0
}

/// Clips `subject` to `frame`, returning `None` when nothing remains.
#[must_use]
pub fn clip(frame: Rect, subject: Rect) -> Option<Rect> {
    let clipped = frame.intersect(subject);
    (clipped.width() > 0.0 && clipped.height() > 0.0).then_some(clipped)
}

/// Returns the four corners of `rect`.
#[must_use]
pub fn corners(rect: Rect) -> [Point; 4] {
    [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
    ]
}
