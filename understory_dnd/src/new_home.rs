// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where the dragging item comes to rest for a given impact.
//!
//! Positions are computed by placing the dragging item's margin box flush
//! against a neighbor's margin box (or a list's content box) on the main
//! axis. On the cross axis the item aligns with the start of the box it is
//! placed against rather than its center, so lists of different widths do
//! not make the item jump sideways.

use kurbo::{Point, Rect};

use crate::axis::Axis;
use crate::box_model::BoxModel;
use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::impact::{AfterCritical, DragImpact, ImpactLocation};
use crate::list::ListContext;
use crate::registry::DimensionMap;

fn start_to_center(axis: Axis, moving: &BoxModel) -> f64 {
    axis.inset_start(moving.margin) + axis.size(moving.border_box) / 2.0
}

fn end_to_center(axis: Axis, moving: &BoxModel) -> f64 {
    axis.inset_end(moving.margin) + axis.size(moving.border_box) / 2.0
}

fn cross_axis_center(axis: Axis, target: Rect, moving: &BoxModel) -> f64 {
    axis.cross_start(target)
        + axis.cross().inset_start(moving.margin)
        + axis.cross_size(moving.border_box) / 2.0
}

/// Center of `moving` placed directly after `relative_to`.
#[must_use]
pub fn go_after(axis: Axis, relative_to: &BoxModel, moving: &BoxModel) -> Point {
    axis.point(
        axis.end(relative_to.margin_box) + start_to_center(axis, moving),
        cross_axis_center(axis, relative_to.margin_box, moving),
    )
}

/// Center of `moving` placed directly before `relative_to`.
#[must_use]
pub fn go_before(axis: Axis, relative_to: &BoxModel, moving: &BoxModel) -> Point {
    axis.point(
        axis.start(relative_to.margin_box) - end_to_center(axis, moving),
        cross_axis_center(axis, relative_to.margin_box, moving),
    )
}

/// Center of `moving` placed at the start of `into`'s content box.
#[must_use]
pub fn go_into_start(axis: Axis, into: &BoxModel, moving: &BoxModel) -> Point {
    axis.point(
        axis.start(into.content_box) + start_to_center(axis, moving),
        cross_axis_center(axis, into.content_box, moving),
    )
}

fn center_without_droppable_scroll(
    impact: &DragImpact,
    ctx: &ListContext<'_>,
    dimensions: &DimensionMap,
    after_critical: &AfterCritical,
) -> Point {
    let dragging = ctx.dragging;
    let original = dragging.center();
    let axis = ctx.axis();

    let Some(at) = impact.at else {
        return original;
    };

    if let ImpactLocation::Combine(combine) = at {
        let Some(target) = dimensions.draggable(combine.draggable_id) else {
            return original;
        };
        let mut center = target.center() + after_critical.resting_offset(target.id());
        if impact.displaced.contains(target.id()) {
            center += impact.displaced_by;
        }
        return center;
    }

    // Reorder: place relative to the closest displaced sibling if there is one.
    if let Some(closest) = impact
        .displaced
        .first()
        .and_then(|entry| dimensions.draggable(entry.draggable_id))
    {
        let visual = closest
            .page
            .offset(after_critical.resting_offset(closest.id()) + impact.displaced_by);
        return if axis.component(impact.displaced_by) > 0.0 {
            go_before(axis, &visual, &dragging.page)
        } else {
            go_after(axis, &visual, &dragging.page)
        };
    }

    let Some(last) = ctx.siblings.last() else {
        return if ctx.is_home() {
            original
        } else {
            go_into_start(axis, &ctx.droppable.page, &dragging.page)
        };
    };
    if ctx.home_index.is_some() {
        return original;
    }
    let resting = last.page.offset(after_critical.resting_offset(last.id()));
    go_after(axis, &resting, &dragging.page)
}

/// Page border box center of the dragging item for `impact`.
///
/// `destination` is the droppable the impact refers to; with no destination
/// (or no location) the item returns to where it was lifted from. The
/// destination's scroll since lift is applied so the result is in current
/// page coordinates.
#[must_use]
pub fn page_border_box_center_from_impact(
    impact: &DragImpact,
    draggable: &DraggableDimension,
    destination: Option<&DroppableDimension>,
    dimensions: &DimensionMap,
    after_critical: &AfterCritical,
) -> Point {
    let Some(destination) = destination else {
        return draggable.center();
    };
    if impact.at.is_none() {
        return draggable.center();
    }
    let ctx = ListContext::new(destination, draggable, dimensions);
    center_without_droppable_scroll(impact, &ctx, dimensions, after_critical)
        + destination.scroll_displacement()
}
