// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identifiers for draggables, droppables and compatibility types.

/// Identifies a draggable item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DraggableId(pub u32);

/// Identifies a droppable container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DroppableId(pub u32);

/// Compatibility tag: a draggable can only enter droppables of the same type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DropType(pub u32);

impl DropType {
    /// The type every droppable gets unless told otherwise.
    pub const DEFAULT: Self = Self(0);
}
