// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which droppable is the dragging item over?
//!
//! Resolution runs in three steps:
//!
//! 1. Keep enabled droppables of a compatible type whose active subject
//!    overlaps the dragging border box.
//! 2. Of those, keep the ones the dragging item is "into" on their cross
//!    axis: it either spans the droppable's whole cross extent, or its
//!    leading cross edge has passed the droppable's cross center.
//! 3. One survivor wins outright. Several survivors (a very large dragging
//!    item) resolve to the one furthest from where the dragging item
//!    started. With no survivors, the first overlapping droppable whose
//!    active area contains the dragging center wins.
//!
//! Ties always go to the earlier registered droppable.

use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::geometry::{distance, has_overlap, is_within};
use crate::id::DroppableId;

/// Candidate droppables that survived the overlap filter.
type Candidates<'a> = SmallVec<[(&'a DroppableDimension, Rect); 4]>;

fn is_into_cross_axis(page_border_box: Rect, droppable: &DroppableDimension, active: Rect) -> bool {
    let axis = droppable.axis;
    let child_center = axis.cross_line(active.center());
    let cross_start = axis.cross_start(page_border_box);
    let cross_end = axis.cross_end(page_border_box);
    let is_contained = is_within(axis.cross_start(active), axis.cross_end(active));
    let is_start_contained = is_contained(cross_start);
    let is_end_contained = is_contained(cross_end);

    if !is_start_contained && !is_end_contained {
        return true;
    }
    if is_start_contained {
        return cross_start < child_center;
    }
    cross_end > child_center
}

fn furthest_away(
    page_border_box: Rect,
    draggable: &DraggableDimension,
    candidates: &Candidates<'_>,
) -> Option<DroppableId> {
    let origin = draggable.center();
    let center = page_border_box.center();
    let mut best: Option<(DroppableId, f64)> = None;
    for (droppable, _) in candidates {
        let axis = droppable.axis;
        let target: Point = axis.point(
            axis.line(center),
            axis.cross_line(droppable.page.border_box.center()),
        );
        let d = distance(origin, target);
        if best.is_none_or(|(_, current)| d > current) {
            best = Some((droppable.id(), d));
        }
    }
    best.map(|(id, _)| id)
}

/// Resolves the droppable under `page_border_box`.
///
/// `droppables` must be in registration order, which decides ties.
pub fn resolve_droppable_over<'a>(
    page_border_box: Rect,
    draggable: &DraggableDimension,
    droppables: impl IntoIterator<Item = &'a DroppableDimension>,
) -> Option<DroppableId> {
    let overlapping: Candidates<'a> = droppables
        .into_iter()
        .filter(|droppable| {
            droppable.is_enabled
                && droppable.descriptor.drop_type == draggable.descriptor.drop_type
        })
        .filter_map(|droppable| {
            let active = droppable.subject.active?;
            has_overlap(page_border_box, active).then_some((droppable, active))
        })
        .collect();
    if overlapping.is_empty() {
        return None;
    }

    let candidates: Candidates<'a> = overlapping
        .iter()
        .copied()
        .filter(|(droppable, active)| is_into_cross_axis(page_border_box, droppable, *active))
        .collect();

    let resolved = match candidates.len() {
        0 => {
            let center = page_border_box.center();
            overlapping
                .iter()
                .find(|(_, active)| {
                    is_within(active.x0, active.x1)(center.x)
                        && is_within(active.y0, active.y1)(center.y)
                })
                .map(|(droppable, _)| droppable.id())
        }
        1 => Some(candidates[0].0.id()),
        _ => furthest_away(page_border_box, draggable, &candidates),
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(
        overlapping = overlapping.len(),
        candidates = candidates.len(),
        resolved = ?resolved,
        "resolved droppable over"
    );

    resolved
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Vec2;

    use super::*;
    use crate::axis::Axis;
    use crate::box_model::BoxModel;
    use crate::dimension::{DraggableDescriptor, DroppableDescriptor, DroppableMode};
    use crate::id::{DraggableId, DropType};

    fn list(id: u32, rect: Rect) -> DroppableDimension {
        DroppableDimension::new(
            DroppableDescriptor {
                id: DroppableId(id),
                drop_type: DropType::DEFAULT,
                mode: DroppableMode::Standard,
            },
            Axis::Vertical,
            BoxModel::from_border_box(rect),
            Vec2::ZERO,
        )
    }

    fn dragging(rect: Rect) -> DraggableDimension {
        DraggableDimension::new(
            DraggableDescriptor {
                id: DraggableId(1),
                index: 0,
                droppable_id: DroppableId(1),
                drop_type: DropType::DEFAULT,
            },
            BoxModel::from_border_box(rect),
            Vec2::ZERO,
        )
    }

    #[test]
    fn nothing_overlapping_is_none() {
        let lists = [list(1, Rect::new(0.0, 0.0, 100.0, 100.0))];
        let item = dragging(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(
            resolve_droppable_over(Rect::new(200.0, 0.0, 210.0, 10.0), &item, &lists),
            None
        );
    }

    #[test]
    fn disabled_and_incompatible_are_skipped() {
        let mut other_type = list(2, Rect::new(0.0, 0.0, 100.0, 100.0));
        other_type.descriptor.drop_type = DropType(9);
        let lists = [
            list(1, Rect::new(0.0, 0.0, 100.0, 100.0)).with_enabled(false),
            other_type,
        ];
        let item = dragging(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(
            resolve_droppable_over(Rect::new(10.0, 10.0, 20.0, 20.0), &item, &lists),
            None
        );
    }

    #[test]
    fn leading_cross_edge_decides_between_neighbors() {
        let lists = [
            list(1, Rect::new(0.0, 0.0, 100.0, 500.0)),
            list(2, Rect::new(100.0, 0.0, 200.0, 500.0)),
        ];
        let item = dragging(Rect::new(0.0, 0.0, 100.0, 50.0));
        // Mostly into the second list: its end edge passed the second center.
        let over = resolve_droppable_over(Rect::new(60.0, 0.0, 160.0, 50.0), &item, &lists);
        assert_eq!(over, Some(DroppableId(2)));
        let over = resolve_droppable_over(Rect::new(20.0, 0.0, 120.0, 50.0), &item, &lists);
        assert_eq!(over, Some(DroppableId(1)));
    }

    #[test]
    fn large_item_prefers_furthest_list() {
        let lists: Vec<_> = (0..3)
            .map(|i| {
                let x = f64::from(i) * 100.0;
                list(i + 1, Rect::new(x, 0.0, x + 100.0, 500.0))
            })
            .collect();
        // Started over the first list, now covering all three.
        let item = dragging(Rect::new(0.0, 0.0, 100.0, 50.0));
        let over = resolve_droppable_over(Rect::new(-10.0, 0.0, 310.0, 50.0), &item, &lists);
        assert_eq!(over, Some(DroppableId(3)));
    }

    #[test]
    fn fully_scrolled_out_droppable_never_matches() {
        let mut hidden = list(1, Rect::new(0.0, 0.0, 100.0, 100.0));
        hidden.subject.active = None;
        let item = dragging(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(
            resolve_droppable_over(Rect::new(10.0, 10.0, 20.0, 20.0), &item, [&hidden]),
            None
        );
    }
}
