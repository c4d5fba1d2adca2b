// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contract violations reported by the engine.

use core::fmt;

use crate::id::{DraggableId, DroppableId};

/// A broken caller contract.
///
/// These are never "nothing to do" outcomes; those are expressed as `None`.
/// A `DragError` means the inputs describe a state the engine cannot reason
/// about, and the host should abandon the drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragError {
    /// A draggable id was not present in the dimension map.
    UnknownDraggable(DraggableId),
    /// A droppable id was not present in the dimension map.
    UnknownDroppable(DroppableId),
    /// A draggable could not be found in the ordered list of its droppable.
    NotInList {
        /// The draggable that was looked up.
        draggable: DraggableId,
        /// The droppable it was expected in.
        droppable: DroppableId,
    },
    /// A discrete move was requested without a previous destination.
    NoPreviousDestination,
    /// The previous impact points at a different droppable than the one given.
    DestinationMismatch {
        /// The droppable the caller supplied.
        expected: DroppableId,
        /// The droppable the previous impact refers to.
        found: DroppableId,
    },
    /// A combine target is not a member of the destination droppable.
    CombineTargetNotInDestination {
        /// The combine target.
        draggable: DraggableId,
        /// The destination the target was expected in.
        droppable: DroppableId,
    },
    /// A publish tried to remove the item that is being dragged.
    CannotRemoveDragging(DraggableId),
    /// A placeholder was requested for the dragging item's home droppable.
    PlaceholderInHome(DroppableId),
    /// A droppable already carries a placeholder.
    PlaceholderAlreadyAdded(DroppableId),
    /// A scroll update targeted a droppable without a scroll frame.
    NotScrollable(DroppableId),
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownDraggable(id) => write!(f, "unknown draggable {id:?}"),
            Self::UnknownDroppable(id) => write!(f, "unknown droppable {id:?}"),
            Self::NotInList {
                draggable,
                droppable,
            } => write!(f, "draggable {draggable:?} is not inside droppable {droppable:?}"),
            Self::NoPreviousDestination => {
                f.write_str("cannot move to the next index without a previous destination")
            }
            Self::DestinationMismatch { expected, found } => write!(
                f,
                "previous impact targets droppable {found:?}, expected {expected:?}"
            ),
            Self::CombineTargetNotInDestination {
                draggable,
                droppable,
            } => write!(
                f,
                "combine target {draggable:?} is not inside droppable {droppable:?}"
            ),
            Self::CannotRemoveDragging(id) => {
                write!(f, "cannot remove the dragging item {id:?} while it is being dragged")
            }
            Self::PlaceholderInHome(id) => {
                write!(f, "cannot add a placeholder to home droppable {id:?}")
            }
            Self::PlaceholderAlreadyAdded(id) => {
                write!(f, "droppable {id:?} already has a placeholder")
            }
            Self::NotScrollable(id) => write!(f, "droppable {id:?} has no scroll frame"),
        }
    }
}

impl core::error::Error for DragError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_names_the_offending_ids() {
        let err = DragError::NotInList {
            draggable: DraggableId(3),
            droppable: DroppableId(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("DraggableId(3)"), "{msg}");
        assert!(msg.contains("DroppableId(1)"), "{msg}");
    }
}
