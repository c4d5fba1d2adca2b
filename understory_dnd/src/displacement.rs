// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building the ordered displacement list for a candidate impact.

use kurbo::{Rect, Vec2};

use crate::axis::Axis;
use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::impact::{AfterCritical, DisplacedGroups, Displacement, DragImpact};
use crate::registry::DimensionMap;
use crate::viewport::Viewport;
use crate::visibility::{VisibilityTest, is_visible};

/// Where a sibling's margin box ends up once moved by `displaced_by`.
fn displaced_margin_box(
    item: &DraggableDimension,
    displaced_by: Vec2,
    after_critical: &AfterCritical,
) -> Rect {
    item.page.margin_box + after_critical.resting_offset(item.id()) + displaced_by
}

/// Whether `item`, moved by `displaced_by`, can be seen in `destination`.
///
/// Only the displaced position counts: a sibling pushed out of view is not
/// visible even if it started in view.
pub(crate) fn is_displacement_visible(
    item: &DraggableDimension,
    displaced_by: Vec2,
    destination: &DroppableDimension,
    viewport: &Viewport,
    after_critical: &AfterCritical,
) -> bool {
    is_visible(
        VisibilityTest::Partial,
        displaced_margin_box(item, displaced_by, after_critical),
        destination,
        viewport.frame,
        true,
    )
}

/// Builds displacement entries for `items`, which must already be ordered
/// closest first.
///
/// `should_animate` is `force_should_animate` when given. Otherwise an item
/// that was displaced in `previous` keeps its previous value and a newly
/// displaced item animates.
pub(crate) fn build_groups<'a>(
    items: impl IntoIterator<Item = &'a DraggableDimension>,
    displaced_by: Vec2,
    destination: &DroppableDimension,
    previous: &DragImpact,
    after_critical: &AfterCritical,
    viewport: &Viewport,
    force_should_animate: Option<bool>,
) -> DisplacedGroups {
    items
        .into_iter()
        .map(|item| {
            let id = item.id();
            let should_animate = force_should_animate.unwrap_or_else(|| {
                previous
                    .displaced
                    .get(id)
                    .is_none_or(|last| last.should_animate)
            });
            Displacement {
                draggable_id: id,
                is_visible: is_displacement_visible(
                    item,
                    displaced_by,
                    destination,
                    viewport,
                    after_critical,
                ),
                should_animate,
            }
        })
        .collect()
}

/// Recomputes `is_visible` for every entry of `impact` after a scroll,
/// keeping order and animation flags. Entries whose draggable no longer
/// exists are dropped.
pub(crate) fn refresh_visibility(
    impact: &DragImpact,
    destination: &DroppableDimension,
    dimensions: &DimensionMap,
    after_critical: &AfterCritical,
    viewport: &Viewport,
) -> DragImpact {
    let displaced = impact
        .displaced
        .all()
        .iter()
        .filter_map(|entry| {
            let item = dimensions.draggable(entry.draggable_id)?;
            Some(Displacement {
                is_visible: is_displacement_visible(
                    item,
                    impact.displaced_by,
                    destination,
                    viewport,
                    after_critical,
                ),
                ..*entry
            })
        })
        .collect();
    DragImpact {
        displaced,
        ..impact.clone()
    }
}

/// Forces the entries closest to the dragging item visible, up to `buffer`
/// of accumulated main-axis size.
///
/// A discrete jump into a position the host still has to scroll to would
/// otherwise leave the siblings it passed snapping into place out of view.
/// Entries past the buffer keep their measured visibility, so siblings far
/// from the jump do not all appear at once.
pub(crate) fn force_visible_within_buffer(
    impact: &DragImpact,
    axis: Axis,
    dimensions: &DimensionMap,
    buffer: f64,
) -> DragImpact {
    let mut used = 0.0;
    let displaced = impact
        .displaced
        .all()
        .iter()
        .map(|entry| {
            let Some(item) = dimensions.draggable(entry.draggable_id) else {
                return *entry;
            };
            used += axis.size(item.page.margin_box);
            if used <= buffer {
                Displacement {
                    is_visible: true,
                    ..*entry
                }
            } else {
                *entry
            }
        })
        .collect();
    DragImpact {
        displaced,
        ..impact.clone()
    }
}
