// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder impacts: which index does the dragging item occupy?

use kurbo::Rect;

use crate::dimension::DraggableDimension;
use crate::displacement::build_groups;
use crate::impact::{AfterCritical, DragImpact, DraggableLocation, ImpactLocation};
use crate::list::ListContext;
use crate::viewport::Viewport;

/// Index the dragging rectangle `target` occupies in the destination.
///
/// A sibling flips to displaced when the dragging edge that leads in the
/// direction of travel strictly passes its resting center. A sibling that is
/// already displaced flips back only when the trailing edge strictly passes
/// its displaced center. Sitting exactly on a boundary keeps the previous
/// state.
pub(crate) fn reorder_index(
    ctx: &ListContext<'_>,
    target: Rect,
    previous: &DragImpact,
    after_critical: &AfterCritical,
) -> usize {
    let axis = ctx.axis();
    let size = ctx.dragging_size();
    let start = axis.start(target);
    let end = axis.end(target);
    let center_of = |item: &DraggableDimension| {
        axis.line(ctx.resting_border_box(item, after_critical).center())
    };
    let was_displaced = |item: &DraggableDimension| previous.displaced.contains(item.id());

    let Some(origin) = ctx.home_index else {
        // Open regime: everything from the first sibling the dragging item is
        // before onward gets displaced forward.
        return ctx
            .siblings
            .iter()
            .position(|&item| {
                let center = center_of(item);
                if was_displaced(item) {
                    end <= center + size
                } else {
                    start < center
                }
            })
            .unwrap_or(ctx.max_index());
    };

    let original_center = axis.line(ctx.dragging.center());
    let current_center = axis.line(target.center());
    if current_center > original_center {
        let passed = ctx.siblings[origin..]
            .iter()
            .take_while(|&&item| {
                let center = center_of(item);
                if was_displaced(item) {
                    start >= center - size
                } else {
                    end > center
                }
            })
            .count();
        origin + passed
    } else if current_center < original_center {
        let passed = ctx.siblings[..origin]
            .iter()
            .rev()
            .take_while(|&&item| {
                let center = center_of(item);
                if was_displaced(item) {
                    end <= center + size
                } else {
                    start < center
                }
            })
            .count();
        origin - passed
    } else {
        origin
    }
}

/// A reorder impact landing at `index`.
///
/// Displacement entries carry their animation flag over from `previous`.
pub(crate) fn reorder_impact_at(
    ctx: &ListContext<'_>,
    index: usize,
    previous: &DragImpact,
    after_critical: &AfterCritical,
    viewport: &Viewport,
) -> DragImpact {
    let index = index.min(ctx.max_index());
    let displaced_by = ctx.displaced_by_for(index);
    let displaced = build_groups(
        ctx.displaced_at(index),
        displaced_by,
        ctx.droppable,
        previous,
        after_critical,
        viewport,
        None,
    );
    DragImpact {
        displaced,
        displaced_by,
        at: Some(ImpactLocation::Reorder(DraggableLocation {
            droppable_id: ctx.droppable.id(),
            index,
        })),
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Vec2};

    use super::*;
    use crate::axis::Axis;
    use crate::box_model::BoxModel;
    use crate::dimension::{
        DraggableDescriptor, DroppableDescriptor, DroppableDimension, DroppableMode,
    };
    use crate::id::{DraggableId, DropType, DroppableId};
    use crate::registry::DimensionMap;

    fn map() -> DimensionMap {
        let home = DroppableDimension::new(
            DroppableDescriptor {
                id: DroppableId(1),
                drop_type: DropType::DEFAULT,
                mode: DroppableMode::Standard,
            },
            Axis::Vertical,
            BoxModel::from_border_box(Rect::new(0.0, 0.0, 100.0, 400.0)),
            Vec2::ZERO,
        );
        let mut map = DimensionMap::new().with_droppable(home);
        for index in 0..4_u32 {
            let y = f64::from(index) * 50.0;
            map.insert_draggable(DraggableDimension::new(
                DraggableDescriptor {
                    id: DraggableId(index),
                    index: index as usize,
                    droppable_id: DroppableId(1),
                    drop_type: DropType::DEFAULT,
                },
                BoxModel::from_border_box(Rect::new(0.0, y, 100.0, y + 50.0)),
                Vec2::ZERO,
            ));
        }
        map
    }

    fn index_for(map: &DimensionMap, dy: f64, previous: &DragImpact) -> usize {
        let droppable = map.droppable(DroppableId(1)).unwrap();
        let dragging = map.draggable(DraggableId(1)).unwrap();
        let ctx = ListContext::new(droppable, dragging, map);
        let target = dragging.page.border_box + Vec2::new(0.0, dy);
        reorder_index(&ctx, target, previous, &AfterCritical::default())
    }

    #[test]
    fn forward_needs_end_strictly_past_center() {
        let map = map();
        let none = DragImpact::no_impact();
        // End edge at 125 sits exactly on the next sibling's center.
        assert_eq!(index_for(&map, 25.0, &none), 1);
        assert_eq!(index_for(&map, 26.0, &none), 2);
        assert_eq!(index_for(&map, 80.0, &none), 3);
    }

    #[test]
    fn backward_needs_start_strictly_before_center() {
        let map = map();
        let none = DragImpact::no_impact();
        assert_eq!(index_for(&map, -25.0, &none), 1);
        assert_eq!(index_for(&map, -26.0, &none), 0);
    }

    #[test]
    fn displaced_sibling_has_hysteresis() {
        let map = map();
        let droppable = map.droppable(DroppableId(1)).unwrap();
        let dragging = map.draggable(DraggableId(1)).unwrap();
        let ctx = ListContext::new(droppable, dragging, &map);
        let viewport = Viewport::new(Rect::new(0.0, 0.0, 1000.0, 1000.0), Vec2::ZERO);
        let after = AfterCritical::default();
        let previous = reorder_impact_at(&ctx, 2, &DragImpact::no_impact(), &after, &viewport);
        assert_eq!(previous.displaced.ids().next(), Some(DraggableId(2)));

        // Moving back a little: start is 76, displaced center is 75.
        assert_eq!(index_for(&map, 26.0, &previous), 2);
        // Start exactly on the displaced center still holds.
        assert_eq!(index_for(&map, 25.0, &previous), 2);
        assert_eq!(index_for(&map, 24.0, &previous), 1);
    }
}
