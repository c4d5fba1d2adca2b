// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use super::MoveResult;
use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::geometry::{closest, corners, distance, is_within};
use crate::impact::{AfterCritical, DragImpact, DraggableLocation, ImpactLocation};
use crate::list::ListContext;
use crate::new_home::page_border_box_center_from_impact;
use crate::registry::DimensionMap;
use crate::reorder::reorder_impact_at;
use crate::viewport::Viewport;
use crate::visibility::{VisibilityTest, is_partially_visible_through_frame, is_visible};

/// Finds the droppable to move into when jumping across lists.
///
/// Candidates are enabled droppables of the dragging item's type, other than
/// `source`, that are at least partly on screen, lie strictly beyond `source`
/// on the cross axis in the direction of travel, and share some of its
/// main-axis span. Only the nearest column (or row) of candidates is
/// considered. Within it, a unique candidate whose main-axis span contains
/// `page_border_box_center` wins, then the one with the closest corner, then
/// the one whose main-axis start comes first.
pub fn best_cross_axis_droppable<'a>(
    is_moving_forward: bool,
    page_border_box_center: Point,
    draggable: &DraggableDimension,
    source: &DroppableDimension,
    droppables: impl IntoIterator<Item = &'a DroppableDimension>,
    viewport: &Viewport,
) -> Option<&'a DroppableDimension> {
    let active = source.subject.active?;
    let axis = source.axis;
    let is_between_source = is_within(axis.start(active), axis.end(active));

    let mut candidates: Vec<(&DroppableDimension, Rect)> = droppables
        .into_iter()
        .filter(|droppable| {
            droppable.id() != source.id()
                && droppable.is_enabled
                && droppable.descriptor.drop_type == draggable.descriptor.drop_type
        })
        .filter_map(|droppable| Some((droppable, droppable.subject.active?)))
        .filter(|(_, target)| is_partially_visible_through_frame(viewport.frame, *target))
        .filter(|(_, target)| {
            if is_moving_forward {
                axis.cross_end(active) < axis.cross_end(*target)
            } else {
                axis.cross_start(*target) < axis.cross_start(active)
            }
        })
        .filter(|(_, target)| {
            let is_between_target = is_within(axis.start(*target), axis.end(*target));
            is_between_source(axis.start(*target))
                || is_between_source(axis.end(*target))
                || is_between_target(axis.start(active))
                || is_between_target(axis.end(active))
        })
        .collect();

    candidates.sort_by(|(_, a), (_, b)| {
        let (a, b) = (axis.cross_start(*a), axis.cross_start(*b));
        if is_moving_forward {
            a.total_cmp(&b)
        } else {
            b.total_cmp(&a)
        }
    });
    let nearest = axis.cross_start(candidates.first()?.1);
    candidates.retain(|(_, target)| axis.cross_start(*target) == nearest);

    if let [(only, _)] = candidates.as_slice() {
        return Some(*only);
    }

    let line = axis.line(page_border_box_center);
    let mut contains: Vec<_> = candidates
        .iter()
        .filter(|(_, target)| is_within(axis.start(*target), axis.end(*target))(line))
        .copied()
        .collect();
    if !contains.is_empty() {
        contains.sort_by(|(_, a), (_, b)| axis.start(*a).total_cmp(&axis.start(*b)));
        return contains.first().map(|(droppable, _)| *droppable);
    }

    candidates.sort_by(|(_, a), (_, b)| {
        let first = closest(page_border_box_center, corners(*a));
        let second = closest(page_border_box_center, corners(*b));
        first
            .total_cmp(&second)
            .then_with(|| axis.start(*a).total_cmp(&axis.start(*b)))
    });
    candidates.first().map(|(droppable, _)| *droppable)
}

/// The totally visible item in `inside` closest to `page_border_box_center`.
///
/// Items are measured where they currently rest, including the
/// destination's scroll. Equal distances go to the lower index.
pub fn closest_draggable<'a>(
    page_border_box_center: Point,
    viewport: &Viewport,
    destination: &DroppableDimension,
    inside: &[&'a DraggableDimension],
    after_critical: &AfterCritical,
) -> Option<&'a DraggableDimension> {
    let current = |item: &DraggableDimension| {
        item.page.border_box + after_critical.resting_offset(item.id())
    };
    let mut visible: Vec<(&'a DraggableDimension, f64)> = inside
        .iter()
        .copied()
        .filter(|item| {
            is_visible(
                VisibilityTest::Total,
                current(item),
                destination,
                viewport.frame,
                true,
            )
        })
        .map(|item| {
            let center = current(item).center() + destination.scroll_displacement();
            (item, distance(page_border_box_center, center))
        })
        .collect();
    visible.sort_by(|(a, da), (b, db)| {
        da.total_cmp(db)
            .then_with(|| a.descriptor.index.cmp(&b.descriptor.index))
    });
    visible.first().map(|(item, _)| *item)
}

fn move_to_new_droppable(
    args: &CrossAxisArgs<'_>,
    destination: &DroppableDimension,
    inside: &[&DraggableDimension],
    move_relative_to: Option<&DraggableDimension>,
) -> Option<DragImpact> {
    let CrossAxisArgs {
        previous_page_border_box_center,
        draggable,
        dimensions,
        viewport,
        after_critical,
        ..
    } = *args;
    let ctx = ListContext::new(destination, draggable, dimensions);

    let Some(relative) = move_relative_to else {
        if !inside.is_empty() {
            return None;
        }
        let proposed = DragImpact {
            at: Some(ImpactLocation::Reorder(DraggableLocation {
                droppable_id: destination.id(),
                index: 0,
            })),
            ..DragImpact::no_impact()
        };
        let center = page_border_box_center_from_impact(
            &proposed,
            draggable,
            Some(destination),
            dimensions,
            after_critical,
        );
        let with_placeholder = destination
            .with_placeholder(draggable, inside)
            .unwrap_or(*destination);
        let moved = Rect::from_center_size(center, draggable.page.border_box.size());
        return is_visible(
            VisibilityTest::TotalOnAxis,
            moved,
            &with_placeholder,
            viewport.frame,
            false,
        )
        .then_some(proposed);
    };

    let axis = destination.axis;
    let index = if relative.id() == draggable.id() {
        inside.iter().position(|item| item.id() == draggable.id())?
    } else {
        let position = ctx.position_of(relative.id())?;
        let is_going_before = axis.line(previous_page_border_box_center)
            <= axis.line(relative.page.border_box.center());
        if is_going_before {
            position
        } else {
            position + 1
        }
    };
    Some(reorder_impact_at(
        &ctx,
        index,
        &DragImpact::no_impact(),
        after_critical,
        viewport,
    ))
}

/// Inputs to [`move_cross_axis`].
#[derive(Clone, Copy, Debug)]
pub struct CrossAxisArgs<'a> {
    /// Move toward the end of the cross axis.
    pub is_moving_forward: bool,
    /// Current center, in page coordinates.
    pub previous_page_border_box_center: Point,
    /// The dragging item.
    pub draggable: &'a DraggableDimension,
    /// The droppable the dragging item is currently in.
    pub is_over: &'a DroppableDimension,
    /// The drag's dimension snapshot.
    pub dimensions: &'a DimensionMap,
    /// The window viewport.
    pub viewport: &'a Viewport,
    /// What lifting did to the home list.
    pub after_critical: &'a AfterCritical,
}

/// Moves into the adjacent droppable on the cross axis.
///
/// The dragging item lands before or after the closest visible item of the
/// new list, depending on which side of it the item currently is. An empty
/// list is entered at index 0 only if the item would be fully visible on the
/// main axis. Returns `None` when there is nowhere to go.
#[must_use]
pub fn move_cross_axis(args: &CrossAxisArgs<'_>) -> Option<MoveResult> {
    let destination = best_cross_axis_droppable(
        args.is_moving_forward,
        args.previous_page_border_box_center,
        args.draggable,
        args.is_over,
        args.dimensions.droppables(),
        args.viewport,
    )?;
    let inside = args.dimensions.draggables_inside(destination.id());
    let move_relative_to = closest_draggable(
        args.previous_page_border_box_center,
        args.viewport,
        destination,
        &inside,
        args.after_critical,
    );
    let impact = move_to_new_droppable(args, destination, &inside, move_relative_to)?;
    let center = page_border_box_center_from_impact(
        &impact,
        args.draggable,
        Some(destination),
        args.dimensions,
        args.after_critical,
    );

    #[cfg(feature = "tracing")]
    tracing::debug!(
        from = ?args.is_over.id(),
        to = ?destination.id(),
        destination = ?impact.destination(),
        "cross axis move"
    );

    Some(MoveResult {
        impact,
        page_border_box_center: center,
        scroll_jump_request: None,
    })
}
