// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Is a rectangle visible through a droppable's frame and the viewport?

use kurbo::Rect;

use crate::axis::Axis;
use crate::dimension::DroppableDimension;
use crate::geometry::is_within;

/// Which flavor of visibility to test.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VisibilityTest {
    /// Any part of the target shows.
    Partial,
    /// The whole target shows.
    Total,
    /// The whole target shows along the droppable's main axis.
    TotalOnAxis,
}

/// Whether any part of `target` shows through `frame`.
#[must_use]
pub fn is_partially_visible_through_frame(frame: Rect, target: Rect) -> bool {
    let within_vertical = is_within(frame.y0, frame.y1);
    let within_horizontal = is_within(frame.x0, frame.x1);

    let partially_vertical = within_vertical(target.y0) || within_vertical(target.y1);
    let partially_horizontal = within_horizontal(target.x0) || within_horizontal(target.x1);
    if partially_vertical && partially_horizontal {
        return true;
    }

    let bigger_vertical = target.y0 < frame.y0 && target.y1 > frame.y1;
    let bigger_horizontal = target.x0 < frame.x0 && target.x1 > frame.x1;
    if bigger_vertical && bigger_horizontal {
        return true;
    }
    (bigger_vertical && partially_horizontal) || (bigger_horizontal && partially_vertical)
}

/// Whether all of `target` shows through `frame`.
#[must_use]
pub fn is_totally_visible_through_frame(frame: Rect, target: Rect) -> bool {
    let within_vertical = is_within(frame.y0, frame.y1);
    let within_horizontal = is_within(frame.x0, frame.x1);
    within_vertical(target.y0)
        && within_vertical(target.y1)
        && within_horizontal(target.x0)
        && within_horizontal(target.x1)
}

/// Whether `target` spans no further than `frame` along `axis`.
#[must_use]
pub fn is_totally_visible_through_frame_on_axis(axis: Axis, frame: Rect, target: Rect) -> bool {
    let within = is_within(axis.start(frame), axis.end(frame));
    within(axis.start(target)) && within(axis.end(target))
}

impl VisibilityTest {
    fn through(self, axis: Axis, frame: Rect, target: Rect) -> bool {
        match self {
            Self::Partial => is_partially_visible_through_frame(frame, target),
            Self::Total => is_totally_visible_through_frame(frame, target),
            Self::TotalOnAxis => is_totally_visible_through_frame_on_axis(axis, frame, target),
        }
    }
}

/// Tests `target` against the destination's active subject and the viewport.
///
/// With `with_droppable_displacement`, `target` is in lift-time coordinates
/// and is first moved by the destination's scroll since lift. A destination
/// with no active subject shows nothing.
#[must_use]
pub fn is_visible(
    test: VisibilityTest,
    target: Rect,
    destination: &DroppableDimension,
    viewport: Rect,
    with_droppable_displacement: bool,
) -> bool {
    let target = if with_droppable_displacement {
        target + destination.scroll_displacement()
    } else {
        target
    };
    let Some(active) = destination.subject.active else {
        return false;
    };
    test.through(destination.axis, active, target)
        && test.through(destination.axis, viewport, target)
}
