// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The state right after an item is lifted.

use crate::displacement::build_groups;
use crate::error::DragError;
use crate::id::DraggableId;
use crate::impact::{AfterCritical, DisplacedGroups, DragImpact, DraggableLocation, ImpactLocation};
use crate::registry::DimensionMap;
use crate::viewport::Viewport;

/// The initial impact and the lift-time baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct LiftEffect {
    /// Impact for the first frame: reorder at the home location.
    pub impact: DragImpact,
    /// Which siblings were moved by the lift itself.
    pub after_critical: AfterCritical,
}

/// Computes the lift effect of picking up `draggable`.
///
/// In a virtual list the siblings after the lifted item collapse into its
/// space, so the first impact displaces them forward again with animation
/// off; they must not visibly slide on the first frame.
pub fn compute_lift_effect(
    draggable: DraggableId,
    dimensions: &DimensionMap,
    viewport: &Viewport,
) -> Result<LiftEffect, DragError> {
    let dragging = dimensions.try_draggable(draggable)?;
    let home_id = dragging.descriptor.droppable_id;
    let home = dimensions.try_droppable(home_id)?;
    let inside = dimensions.draggables_inside(home_id);
    let index = inside
        .iter()
        .position(|item| item.id() == draggable)
        .ok_or(DragError::NotInList {
            draggable,
            droppable: home_id,
        })?;
    let after = &inside[index + 1..];

    let after_critical = AfterCritical {
        in_virtual_list: home.is_virtual(),
        effected: after.iter().map(|item| item.id()).collect(),
        displaced_by: home.axis.patch(home.axis.component(dragging.displace_by), 0.0),
    };

    let displaced = if home.is_virtual() {
        build_groups(
            after.iter().copied(),
            after_critical.displaced_by,
            home,
            &DragImpact::no_impact(),
            &after_critical,
            viewport,
            Some(false),
        )
    } else {
        DisplacedGroups::new()
    };

    Ok(LiftEffect {
        impact: DragImpact {
            displaced,
            displaced_by: after_critical.displaced_by,
            at: Some(ImpactLocation::Reorder(DraggableLocation {
                droppable_id: home_id,
                index,
            })),
        },
        after_critical,
    })
}
