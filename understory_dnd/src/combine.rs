// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Combine impacts: is the dragging item hovering the middle of a sibling?

use kurbo::Rect;

use crate::axis::{Travel, UserDirection};
use crate::config::DragConfig;
use crate::impact::{AfterCritical, Combine, DragImpact, ImpactLocation};
use crate::list::ListContext;

/// Looks for a sibling whose middle band contains the dragging item's
/// leading edge.
///
/// The leading edge is the end edge while moving forward and the start edge
/// while moving backward, so a band is reached before that edge passes the
/// sibling's center and reorders it. `base` supplies where siblings currently
/// sit (and is the displacement the combine impact keeps). `previous` decides
/// hysteresis: while already combined with a sibling, its band is tested
/// with the edge it was entered with, and the band widens back to the
/// sibling's own edge on the side it was entered from.
///
/// Returns `None` unless exactly one sibling matches.
pub(crate) fn combine_impact(
    ctx: &ListContext<'_>,
    target: Rect,
    base: &DragImpact,
    previous: &DragImpact,
    after_critical: &AfterCritical,
    user_direction: UserDirection,
    config: &DragConfig,
) -> Option<DragImpact> {
    if !ctx.droppable.is_combine_enabled {
        return None;
    }
    let axis = ctx.axis();
    let travel = user_direction.along(axis);
    let fraction = config.edge_fraction();
    let current = previous
        .combine()
        .filter(|combine| combine.droppable_id == ctx.droppable.id());

    let mut matches = ctx.siblings.iter().filter(|item| {
        let resting = ctx.resting_border_box(item, after_critical);
        let rect = if base.displaced.contains(item.id()) {
            resting + base.displaced_by
        } else {
            resting
        };
        let start = axis.start(rect);
        let end = axis.end(rect);
        let threshold = axis.size(rect) * fraction;
        match current {
            Some(combine) if combine.draggable_id == item.id() => {
                let edge = axis.edge(target, combine.when_entered.leading_edge());
                match combine.when_entered {
                    Travel::Forward => start <= edge && edge <= end - threshold,
                    Travel::Backward => start + threshold <= edge && edge <= end,
                }
            }
            _ => {
                let edge = axis.edge(target, travel.leading_edge());
                start + threshold < edge && edge < end - threshold
            }
        }
    });

    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }

    let when_entered = match current {
        Some(combine) if combine.draggable_id == first.id() => combine.when_entered,
        _ => travel,
    };
    Some(DragImpact {
        displaced: base.displaced.clone(),
        displaced_by: base.displaced_by,
        at: Some(ImpactLocation::Combine(Combine {
            draggable_id: first.id(),
            droppable_id: ctx.droppable.id(),
            when_entered,
        })),
    })
}
