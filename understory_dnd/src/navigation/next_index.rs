// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use super::MoveResult;
use crate::axis::Travel;
use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::displacement::force_visible_within_buffer;
use crate::error::DragError;
use crate::id::DraggableId;
use crate::impact::{AfterCritical, Combine, DragImpact, ImpactLocation};
use crate::list::ListContext;
use crate::new_home::page_border_box_center_from_impact;
use crate::registry::DimensionMap;
use crate::reorder::reorder_impact_at;
use crate::viewport::Viewport;
use crate::visibility::{VisibilityTest, is_visible};

/// Inputs to [`move_to_next_index`].
#[derive(Clone, Copy, Debug)]
pub struct NextIndexArgs<'a> {
    /// Step toward the end of the list.
    pub is_moving_forward: bool,
    /// The dragging item.
    pub draggable: &'a DraggableDimension,
    /// The droppable the previous impact refers to.
    pub destination: &'a DroppableDimension,
    /// The drag's dimension snapshot.
    pub dimensions: &'a DimensionMap,
    /// Impact before the step.
    pub previous_impact: &'a DragImpact,
    /// Center before the step, in page coordinates.
    pub previous_page_border_box_center: Point,
    /// The window viewport.
    pub viewport: &'a Viewport,
    /// What lifting did to the home list.
    pub after_critical: &'a AfterCritical,
}

enum Step {
    Reorder(usize),
    Combine { target: usize, when_entered: Travel },
}

fn next_step(
    ctx: &ListContext<'_>,
    previous: &DragImpact,
    is_moving_forward: bool,
) -> Result<Option<Step>, DragError> {
    let expected = ctx.droppable.id();
    let Some(at) = previous.at else {
        return Err(DragError::NoPreviousDestination);
    };
    match at {
        ImpactLocation::Reorder(location) => {
            if location.droppable_id != expected {
                return Err(DragError::DestinationMismatch {
                    expected,
                    found: location.droppable_id,
                });
            }
            let index = location.index;
            let max = ctx.max_index();
            let step = match (is_moving_forward, ctx.droppable.is_combine_enabled) {
                (true, true) => (index < max).then_some(Step::Combine {
                    target: index,
                    when_entered: Travel::Forward,
                }),
                (false, true) => index.checked_sub(1).map(|target| Step::Combine {
                    target,
                    when_entered: Travel::Backward,
                }),
                (true, false) => (index < max).then_some(Step::Reorder(index + 1)),
                (false, false) => index.checked_sub(1).map(Step::Reorder),
            };
            Ok(step)
        }
        ImpactLocation::Combine(combine) => {
            if combine.droppable_id != expected {
                return Err(DragError::DestinationMismatch {
                    expected,
                    found: combine.droppable_id,
                });
            }
            let target = ctx.position_of(combine.draggable_id).ok_or(
                DragError::CombineTargetNotInDestination {
                    draggable: combine.draggable_id,
                    droppable: expected,
                },
            )?;
            Ok(Some(Step::Reorder(if is_moving_forward {
                target + 1
            } else {
                target
            })))
        }
    }
}

/// The sibling a step moves past: the one whose displacement changed, or
/// the combine target entered or left.
fn passed_sibling(previous: &DragImpact, impact: &DragImpact) -> Option<DraggableId> {
    impact
        .displaced
        .ids()
        .find(|&id| !previous.displaced.contains(id))
        .or_else(|| {
            previous
                .displaced
                .ids()
                .find(|&id| !impact.displaced.contains(id))
        })
        .or_else(|| impact.combine().map(|combine| combine.draggable_id))
        .or_else(|| previous.combine().map(|combine| combine.draggable_id))
}

/// Moves one step forward or backward within the current destination.
///
/// Returns `Ok(None)` when the step would leave the list. A newly displaced
/// sibling is always animated and treated as visible, even when it sits
/// outside the frame; the host is about to scroll it into view.
///
/// When the new position would not be fully visible on the main axis, the
/// item stays at `previous_page_border_box_center` and the result carries a
/// scroll jump request for the distance to the new position. The displaced
/// siblings closest to the item are then forced visible, up to the size of
/// the passed sibling plus the size of the dragging item.
pub fn move_to_next_index(args: &NextIndexArgs<'_>) -> Result<Option<MoveResult>, DragError> {
    let ctx = ListContext::new(args.destination, args.draggable, args.dimensions);
    let previous = args.previous_impact;
    let Some(step) = next_step(&ctx, previous, args.is_moving_forward)? else {
        return Ok(None);
    };

    let mut impact = match step {
        Step::Reorder(index) => {
            reorder_impact_at(&ctx, index, previous, args.after_critical, args.viewport)
        }
        Step::Combine {
            target,
            when_entered,
        } => DragImpact {
            at: Some(ImpactLocation::Combine(Combine {
                draggable_id: ctx.siblings[target].id(),
                droppable_id: ctx.droppable.id(),
                when_entered,
            })),
            ..previous.clone()
        },
    };
    for entry in impact.displaced.all_mut() {
        if !previous.displaced.contains(entry.draggable_id) {
            entry.is_visible = true;
            entry.should_animate = true;
        }
    }

    let center = page_border_box_center_from_impact(
        &impact,
        args.draggable,
        Some(args.destination),
        args.dimensions,
        args.after_critical,
    );
    let moved = Rect::from_center_size(center, args.draggable.page.border_box.size());
    let is_visible_in_new_location = is_visible(
        VisibilityTest::TotalOnAxis,
        moved,
        args.destination,
        args.viewport.frame,
        false,
    );

    #[cfg(feature = "tracing")]
    tracing::debug!(
        forward = args.is_moving_forward,
        destination = ?impact.destination(),
        combine = ?impact.combine(),
        visible = is_visible_in_new_location,
        "keyboard step"
    );

    if is_visible_in_new_location {
        return Ok(Some(MoveResult {
            impact,
            page_border_box_center: center,
            scroll_jump_request: None,
        }));
    }

    let distance = center - args.previous_page_border_box_center;
    let axis = ctx.axis();
    let passed_size = passed_sibling(previous, &impact)
        .and_then(|id| args.dimensions.draggable(id))
        .map_or(0.0, |item| axis.size(item.page.margin_box));
    impact = force_visible_within_buffer(
        &impact,
        axis,
        args.dimensions,
        passed_size + ctx.dragging_size(),
    );
    Ok(Some(MoveResult {
        impact,
        page_border_box_center: args.previous_page_border_box_center,
        scroll_jump_request: Some(distance),
    }))
}
