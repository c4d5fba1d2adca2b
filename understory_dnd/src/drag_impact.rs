// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame impact computation for continuous movement.

use kurbo::{Rect, Vec2};

use crate::axis::UserDirection;
use crate::combine::combine_impact;
use crate::config::DragConfig;
use crate::dimension::DraggableDimension;
use crate::droppable_over::resolve_droppable_over;
use crate::impact::{AfterCritical, DragImpact};
use crate::list::ListContext;
use crate::registry::DimensionMap;
use crate::reorder::{reorder_impact_at, reorder_index};
use crate::viewport::Viewport;

/// Inputs to [`compute_impact`].
#[derive(Clone, Copy, Debug)]
pub struct ImpactArgs<'a> {
    /// How far the dragging item has moved from its lift position, in page
    /// coordinates.
    pub page_offset: Vec2,
    /// The dragging item, as measured at lift.
    pub draggable: &'a DraggableDimension,
    /// The drag's dimension snapshot.
    pub dimensions: &'a DimensionMap,
    /// The impact of the previous frame.
    pub previous_impact: &'a DragImpact,
    /// The window viewport.
    pub viewport: &'a Viewport,
    /// What lifting did to the home list.
    pub after_critical: &'a AfterCritical,
    /// Most recent pointer direction.
    pub user_direction: UserDirection,
    /// Tunables.
    pub config: &'a DragConfig,
}

/// The dragging item's page border box after moving by `page_offset`.
#[must_use]
pub fn page_border_box(draggable: &DraggableDimension, page_offset: Vec2) -> Rect {
    draggable.page.border_box + page_offset
}

/// Computes the impact for the current frame.
///
/// Not being over any droppable yields [`DragImpact::no_impact`]; every
/// displaced sibling is released immediately. Identical inputs always give
/// identical impacts.
#[must_use]
pub fn compute_impact(args: &ImpactArgs<'_>) -> DragImpact {
    let moved = page_border_box(args.draggable, args.page_offset);
    let Some(destination) = resolve_droppable_over(
        moved,
        args.draggable,
        args.dimensions.droppables(),
    )
    .and_then(|id| args.dimensions.droppable(id)) else {
        #[cfg(feature = "tracing")]
        tracing::debug!("not over any droppable");
        return DragImpact::no_impact();
    };

    let ctx = ListContext::new(destination, args.draggable, args.dimensions);
    // Siblings are measured at lift; bring the dragging item into that frame.
    let target = moved + destination.scroll_diff();

    let previous = args.previous_impact;
    let same_destination = previous.droppable_id() == Some(destination.id());
    let index = reorder_index(&ctx, target, previous, args.after_critical);
    let reorder = reorder_impact_at(&ctx, index, previous, args.after_critical, args.viewport);

    let base = if same_destination { previous } else { &reorder };
    let impact = combine_impact(
        &ctx,
        target,
        base,
        previous,
        args.after_critical,
        args.user_direction,
        args.config,
    )
    .unwrap_or(reorder);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        droppable = ?destination.id(),
        destination = ?impact.destination(),
        combine = ?impact.combine(),
        displaced = impact.displaced.len(),
        "computed drag impact"
    );

    impact
}
