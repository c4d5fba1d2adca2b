// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete movement: keyboard steps within a list and jumps between lists.
//!
//! - [`move_to_next_index`]: one step forward or backward in the current
//!   destination, alternating with combine targets when the list allows it.
//! - [`move_cross_axis`]: move into the adjacent droppable on the cross axis,
//!   next to the closest visible item.
//!
//! Both return a [`MoveResult`] carrying the new impact and the page border
//! box center the dragging item should move to.

use kurbo::{Point, Vec2};

use crate::impact::DragImpact;

mod cross_axis;
mod next_index;

pub use cross_axis::{CrossAxisArgs, best_cross_axis_droppable, closest_draggable, move_cross_axis};
pub use next_index::{NextIndexArgs, move_to_next_index};

/// Outcome of a discrete move.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveResult {
    /// The impact after the move.
    pub impact: DragImpact,
    /// Where the dragging item's border box center should be, in page
    /// coordinates.
    pub page_border_box_center: Point,
    /// Set when the new position is not visible. The item stays where it was
    /// and the host is asked to scroll by this amount; once it has, the item
    /// will be in view at its new position.
    pub scroll_jump_request: Option<Vec2>,
}
