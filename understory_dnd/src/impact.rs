// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The predicted outcome of a drag, recomputed every frame.

use hashbrown::HashSet;
use kurbo::Vec2;
use smallvec::SmallVec;

use crate::axis::Travel;
use crate::id::{DraggableId, DroppableId};

/// A slot in a droppable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DraggableLocation {
    /// The droppable.
    pub droppable_id: DroppableId,
    /// Zero-based index.
    pub index: usize,
}

/// A merge of the dragging item into a sibling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Combine {
    /// The sibling being merged into.
    pub draggable_id: DraggableId,
    /// The droppable containing that sibling.
    pub droppable_id: DroppableId,
    /// Direction of travel when the combine began. Fixes which edge band is
    /// kept while hovering.
    pub when_entered: Travel,
}

/// Where the dragging item would land if dropped now.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImpactLocation {
    /// Insert at a location.
    Reorder(DraggableLocation),
    /// Merge into a sibling.
    Combine(Combine),
}

/// One sibling moved out of the way.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Displacement {
    /// The moved sibling.
    pub draggable_id: DraggableId,
    /// Whether the move can be seen given scroll clipping.
    pub is_visible: bool,
    /// Whether the move should animate rather than snap.
    pub should_animate: bool,
}

/// Displaced siblings, closest to the dragging item first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplacedGroups {
    entries: SmallVec<[Displacement; 8]>,
}

impl DisplacedGroups {
    /// An empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry further from the dragging item than all others.
    pub fn push(&mut self, displacement: Displacement) {
        self.entries.push(displacement);
    }

    /// Inserts an entry closer to the dragging item than all others.
    pub fn push_front(&mut self, displacement: Displacement) {
        self.entries.insert(0, displacement);
    }

    /// Removes the closest entry.
    pub fn pop_front(&mut self) -> Option<Displacement> {
        (!self.entries.is_empty()).then(|| self.entries.remove(0))
    }

    /// Every entry, closest first.
    #[must_use]
    pub fn all(&self) -> &[Displacement] {
        &self.entries
    }

    /// Mutable access for visibility forcing.
    pub fn all_mut(&mut self) -> &mut [Displacement] {
        &mut self.entries
    }

    /// The entry for `id`, if displaced.
    #[must_use]
    pub fn get(&self, id: DraggableId) -> Option<&Displacement> {
        self.entries.iter().find(|entry| entry.draggable_id == id)
    }

    /// Whether `id` is displaced.
    #[must_use]
    pub fn contains(&self, id: DraggableId) -> bool {
        self.get(id).is_some()
    }

    /// Entries whose movement can be seen.
    pub fn visible(&self) -> impl Iterator<Item = &Displacement> + '_ {
        self.entries.iter().filter(|entry| entry.is_visible)
    }

    /// Entries that move out of sight.
    pub fn invisible(&self) -> impl Iterator<Item = &Displacement> + '_ {
        self.entries.iter().filter(|entry| !entry.is_visible)
    }

    /// Closest entry.
    #[must_use]
    pub fn first(&self) -> Option<&Displacement> {
        self.entries.first()
    }

    /// Number of displaced siblings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is displaced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids in closest-first order.
    pub fn ids(&self) -> impl Iterator<Item = DraggableId> + '_ {
        self.entries.iter().map(|entry| entry.draggable_id)
    }
}

impl FromIterator<Displacement> for DisplacedGroups {
    fn from_iter<I: IntoIterator<Item = Displacement>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// The result of one impact computation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragImpact {
    /// Siblings moved out of the way, closest first.
    pub displaced: DisplacedGroups,
    /// The vector every displaced sibling moves by.
    pub displaced_by: Vec2,
    /// Predicted landing, or `None` when not over any droppable.
    pub at: Option<ImpactLocation>,
}

impl DragImpact {
    /// Not over anything: nothing displaced, no location.
    #[must_use]
    pub fn no_impact() -> Self {
        Self::default()
    }

    /// The reorder destination, if reordering.
    #[must_use]
    pub fn destination(&self) -> Option<DraggableLocation> {
        match self.at {
            Some(ImpactLocation::Reorder(location)) => Some(location),
            _ => None,
        }
    }

    /// The combine target, if combining.
    #[must_use]
    pub fn combine(&self) -> Option<Combine> {
        match self.at {
            Some(ImpactLocation::Combine(combine)) => Some(combine),
            _ => None,
        }
    }

    /// The droppable the impact refers to, for either variant.
    #[must_use]
    pub fn droppable_id(&self) -> Option<DroppableId> {
        match self.at? {
            ImpactLocation::Reorder(location) => Some(location.droppable_id),
            ImpactLocation::Combine(combine) => Some(combine.droppable_id),
        }
    }
}

/// What lifting the dragging item did to its home list.
///
/// A standard list keeps a placeholder, so nothing moves at lift. A virtual
/// list unmounts the item and the siblings after it collapse back into its
/// space; those are `effected` and rest shifted by `-displaced_by`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AfterCritical {
    /// Whether the home list is virtual.
    pub in_virtual_list: bool,
    /// Siblings after the dragging item in its home list.
    pub effected: HashSet<DraggableId>,
    /// The dragging item's size along the home axis, as a positive vector.
    pub displaced_by: Vec2,
}

impl AfterCritical {
    /// Whether `id` comes after the dragging item in its home list.
    #[must_use]
    pub fn was_effected(&self, id: DraggableId) -> bool {
        self.effected.contains(&id)
    }

    /// Where `id` rests relative to its measured position when not displaced.
    #[must_use]
    pub fn resting_offset(&self, id: DraggableId) -> Vec2 {
        if self.in_virtual_list && self.was_effected(id) {
            -self.displaced_by
        } else {
            Vec2::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, is_visible: bool) -> Displacement {
        Displacement {
            draggable_id: DraggableId(id),
            is_visible,
            should_animate: true,
        }
    }

    #[test]
    fn groups_keep_order_and_partition() {
        let mut groups: DisplacedGroups = [entry(2, true), entry(3, false)].into_iter().collect();
        groups.push_front(entry(1, true));
        assert_eq!(
            groups.ids().collect::<alloc::vec::Vec<_>>(),
            [DraggableId(1), DraggableId(2), DraggableId(3)]
        );
        assert_eq!(groups.visible().count(), 2);
        assert_eq!(groups.invisible().count(), 1);
        assert!(groups.contains(DraggableId(3)));
        assert_eq!(groups.pop_front().map(|d| d.draggable_id), Some(DraggableId(1)));
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn impact_accessors_match_variant() {
        let location = DraggableLocation {
            droppable_id: DroppableId(1),
            index: 2,
        };
        let reorder = DragImpact {
            at: Some(ImpactLocation::Reorder(location)),
            ..DragImpact::no_impact()
        };
        assert_eq!(reorder.destination(), Some(location));
        assert_eq!(reorder.combine(), None);
        assert_eq!(reorder.droppable_id(), Some(DroppableId(1)));
        assert_eq!(DragImpact::no_impact().droppable_id(), None);
    }

    #[test]
    fn resting_offset_only_for_virtual_effected() {
        let mut after = AfterCritical {
            in_virtual_list: false,
            effected: [DraggableId(3)].into_iter().collect(),
            displaced_by: Vec2::new(0.0, 40.0),
        };
        assert_eq!(after.resting_offset(DraggableId(3)), Vec2::ZERO);
        after.in_virtual_list = true;
        assert_eq!(after.resting_offset(DraggableId(3)), Vec2::new(0.0, -40.0));
        assert_eq!(after.resting_offset(DraggableId(1)), Vec2::ZERO);
    }
}
