// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dimension snapshot for one drag, with ordered list membership.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::error::DragError;
use crate::id::{DraggableId, DroppableId};

/// Returns the draggables whose home is `droppable`, ordered by
/// `descriptor.index`.
///
/// Input order is irrelevant; the result is always sorted explicitly.
pub fn draggables_inside_droppable<'a>(
    droppable: DroppableId,
    draggables: impl IntoIterator<Item = &'a DraggableDimension>,
) -> Vec<&'a DraggableDimension> {
    let mut inside: Vec<_> = draggables
        .into_iter()
        .filter(|item| item.descriptor.droppable_id == droppable)
        .collect();
    inside.sort_by_key(|item| (item.descriptor.index, item.descriptor.id));
    inside
}

/// All measured draggables and droppables for a drag.
///
/// Droppables keep their registration order, which is the tie-break order
/// for target resolution. Membership lists are cached per droppable id and
/// rebuilt whenever draggables change; scrolling a droppable never touches
/// them.
#[derive(Clone, Debug, Default)]
pub struct DimensionMap {
    draggables: HashMap<DraggableId, DraggableDimension>,
    droppables: Vec<DroppableDimension>,
    droppable_slots: HashMap<DroppableId, usize>,
    members: HashMap<DroppableId, Vec<DraggableId>>,
}

impl DimensionMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a droppable. Re-registering an id replaces it in place.
    pub fn insert_droppable(&mut self, droppable: DroppableDimension) {
        let id = droppable.id();
        if let Some(&slot) = self.droppable_slots.get(&id) {
            self.droppables[slot] = droppable;
        } else {
            self.droppable_slots.insert(id, self.droppables.len());
            self.droppables.push(droppable);
        }
    }

    /// Builder form of [`Self::insert_droppable`].
    #[must_use]
    pub fn with_droppable(mut self, droppable: DroppableDimension) -> Self {
        self.insert_droppable(droppable);
        self
    }

    /// Registers a draggable, replacing any previous entry with the same id.
    pub fn insert_draggable(&mut self, draggable: DraggableDimension) {
        let previous = self.draggables.insert(draggable.id(), draggable);
        if let Some(previous) = previous
            && previous.descriptor.droppable_id != draggable.descriptor.droppable_id
        {
            self.rebuild_members(previous.descriptor.droppable_id);
        }
        self.rebuild_members(draggable.descriptor.droppable_id);
    }

    /// Registers many draggables, rebuilding each affected membership list
    /// once at the end rather than once per item.
    pub fn extend_draggables(&mut self, draggables: impl IntoIterator<Item = DraggableDimension>) {
        let mut touched = Vec::new();
        for draggable in draggables {
            touched.push(draggable.descriptor.droppable_id);
            if let Some(previous) = self.draggables.insert(draggable.id(), draggable) {
                touched.push(previous.descriptor.droppable_id);
            }
        }
        self.rebuild_all(touched);
    }

    /// Builder form of [`Self::insert_draggable`].
    #[must_use]
    pub fn with_draggable(mut self, draggable: DraggableDimension) -> Self {
        self.insert_draggable(draggable);
        self
    }

    /// Removes a draggable, returning it if present.
    pub fn remove_draggable(&mut self, id: DraggableId) -> Option<DraggableDimension> {
        let removed = self.draggables.remove(&id)?;
        self.rebuild_members(removed.descriptor.droppable_id);
        Some(removed)
    }

    /// Removes many draggables, rebuilding each affected membership list once.
    /// Unknown ids are ignored.
    pub fn remove_draggables(&mut self, ids: impl IntoIterator<Item = DraggableId>) {
        let touched = ids
            .into_iter()
            .filter_map(|id| self.draggables.remove(&id))
            .map(|removed| removed.descriptor.droppable_id)
            .collect();
        self.rebuild_all(touched);
    }

    /// Removes a droppable, returning it if present. Its draggables stay.
    pub fn remove_droppable(&mut self, id: DroppableId) -> Option<DroppableDimension> {
        let slot = self.droppable_slots.remove(&id)?;
        let removed = self.droppables.remove(slot);
        for (index, droppable) in self.droppables.iter().enumerate().skip(slot) {
            self.droppable_slots.insert(droppable.id(), index);
        }
        Some(removed)
    }

    /// Replaces a registered droppable without invalidating membership.
    ///
    /// Used for scroll and placeholder updates.
    pub fn update_droppable(&mut self, droppable: DroppableDimension) -> Result<(), DragError> {
        let slot = *self
            .droppable_slots
            .get(&droppable.id())
            .ok_or(DragError::UnknownDroppable(droppable.id()))?;
        self.droppables[slot] = droppable;
        Ok(())
    }

    /// Looks up a draggable.
    #[must_use]
    pub fn draggable(&self, id: DraggableId) -> Option<&DraggableDimension> {
        self.draggables.get(&id)
    }

    /// Looks up a draggable, reporting unknown ids as an error.
    pub fn try_draggable(&self, id: DraggableId) -> Result<&DraggableDimension, DragError> {
        self.draggable(id).ok_or(DragError::UnknownDraggable(id))
    }

    /// Looks up a droppable.
    #[must_use]
    pub fn droppable(&self, id: DroppableId) -> Option<&DroppableDimension> {
        self.droppable_slots
            .get(&id)
            .map(|&slot| &self.droppables[slot])
    }

    /// Looks up a droppable, reporting unknown ids as an error.
    pub fn try_droppable(&self, id: DroppableId) -> Result<&DroppableDimension, DragError> {
        self.droppable(id).ok_or(DragError::UnknownDroppable(id))
    }

    /// Droppables in registration order.
    pub fn droppables(&self) -> impl Iterator<Item = &DroppableDimension> + '_ {
        self.droppables.iter()
    }

    /// Draggables in no particular order.
    pub fn draggables(&self) -> impl Iterator<Item = &DraggableDimension> + '_ {
        self.draggables.values()
    }

    /// Number of registered draggables.
    #[must_use]
    pub fn draggable_count(&self) -> usize {
        self.draggables.len()
    }

    /// Ordered ids of the draggables inside `droppable`.
    #[must_use]
    pub fn member_ids(&self, droppable: DroppableId) -> &[DraggableId] {
        self.members
            .get(&droppable)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Ordered draggables inside `droppable`.
    #[must_use]
    pub fn draggables_inside(&self, droppable: DroppableId) -> Vec<&DraggableDimension> {
        self.member_ids(droppable)
            .iter()
            .filter_map(|id| self.draggables.get(id))
            .collect()
    }

    /// Drops every cached membership list and recomputes them.
    pub fn invalidate_membership(&mut self) {
        self.members.clear();
        let homes = self
            .draggables
            .values()
            .map(|item| item.descriptor.droppable_id)
            .collect();
        self.rebuild_all(homes);
    }

    fn rebuild_all(&mut self, mut droppables: Vec<DroppableId>) {
        droppables.sort_unstable();
        droppables.dedup();
        for droppable in droppables {
            self.rebuild_members(droppable);
        }
    }

    fn rebuild_members(&mut self, droppable: DroppableId) {
        let ids: Vec<DraggableId> = draggables_inside_droppable(droppable, self.draggables.values())
            .into_iter()
            .map(DraggableDimension::id)
            .collect();
        if ids.is_empty() {
            self.members.remove(&droppable);
        } else {
            self.members.insert(droppable, ids);
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Vec2};

    use super::*;
    use crate::axis::Axis;
    use crate::box_model::BoxModel;
    use crate::dimension::{DraggableDescriptor, DroppableDescriptor, DroppableMode};
    use crate::id::DropType;

    fn item(id: u32, index: usize, home: u32) -> DraggableDimension {
        let y = index as f64 * 10.0;
        DraggableDimension::new(
            DraggableDescriptor {
                id: DraggableId(id),
                index,
                droppable_id: DroppableId(home),
                drop_type: DropType::DEFAULT,
            },
            BoxModel::from_border_box(Rect::new(0.0, y, 10.0, y + 10.0)),
            Vec2::ZERO,
        )
    }

    fn list(id: u32, x: f64) -> DroppableDimension {
        DroppableDimension::new(
            DroppableDescriptor {
                id: DroppableId(id),
                drop_type: DropType::DEFAULT,
                mode: DroppableMode::Standard,
            },
            Axis::Vertical,
            BoxModel::from_border_box(Rect::new(x, 0.0, x + 10.0, 100.0)),
            Vec2::ZERO,
        )
    }

    #[test]
    fn inside_is_sorted_by_index_not_insertion() {
        let map = DimensionMap::new()
            .with_droppable(list(1, 0.0))
            .with_draggable(item(3, 2, 1))
            .with_draggable(item(1, 0, 1))
            .with_draggable(item(9, 0, 2))
            .with_draggable(item(2, 1, 1));
        assert_eq!(
            map.member_ids(DroppableId(1)),
            &[DraggableId(1), DraggableId(2), DraggableId(3)]
        );
        assert_eq!(map.draggables_inside(DroppableId(2)).len(), 1);
        assert!(map.draggables_inside(DroppableId(5)).is_empty());
    }

    #[test]
    fn free_function_sorts_explicitly() {
        let items = [item(3, 2, 1), item(1, 0, 1), item(2, 1, 1), item(4, 0, 2)];
        let ids: Vec<_> = draggables_inside_droppable(DroppableId(1), &items)
            .into_iter()
            .map(|item| item.id())
            .collect();
        assert_eq!(ids, [DraggableId(1), DraggableId(2), DraggableId(3)]);
    }

    #[test]
    fn droppables_keep_registration_order() {
        let mut map = DimensionMap::new()
            .with_droppable(list(5, 0.0))
            .with_droppable(list(2, 20.0))
            .with_droppable(list(9, 40.0));
        let order: Vec<_> = map.droppables().map(DroppableDimension::id).collect();
        assert_eq!(order, [DroppableId(5), DroppableId(2), DroppableId(9)]);

        map.remove_droppable(DroppableId(2));
        assert_eq!(map.droppable(DroppableId(9)).map(|d| d.id()), Some(DroppableId(9)));
        let order: Vec<_> = map.droppables().map(DroppableDimension::id).collect();
        assert_eq!(order, [DroppableId(5), DroppableId(9)]);
    }

    #[test]
    fn updating_a_droppable_keeps_membership() {
        let mut map = DimensionMap::new()
            .with_droppable(list(1, 0.0))
            .with_draggable(item(1, 0, 1));
        let disabled = list(1, 0.0).with_enabled(false);
        map.update_droppable(disabled).unwrap();
        assert!(!map.droppable(DroppableId(1)).unwrap().is_enabled);
        assert_eq!(map.member_ids(DroppableId(1)), &[DraggableId(1)]);

        assert_eq!(
            map.update_droppable(list(4, 0.0)),
            Err(DragError::UnknownDroppable(DroppableId(4)))
        );
    }

    #[test]
    fn batch_insert_matches_one_at_a_time() {
        let items = [item(4, 3, 1), item(2, 1, 1), item(7, 0, 2), item(1, 0, 1), item(3, 2, 1)];
        let mut batched = DimensionMap::new();
        batched.extend_draggables(items);
        let mut single = DimensionMap::new();
        for item in items {
            single.insert_draggable(item);
        }
        for home in [DroppableId(1), DroppableId(2)] {
            assert_eq!(batched.member_ids(home), single.member_ids(home));
        }
        assert_eq!(
            batched.member_ids(DroppableId(1)),
            &[DraggableId(1), DraggableId(2), DraggableId(3), DraggableId(4)]
        );

        // Moving items across homes in one batch rebuilds the homes they left.
        batched.extend_draggables([item(4, 1, 2), item(1, 2, 2)]);
        assert_eq!(
            batched.member_ids(DroppableId(1)),
            &[DraggableId(2), DraggableId(3)]
        );
        assert_eq!(
            batched.member_ids(DroppableId(2)),
            &[DraggableId(7), DraggableId(4), DraggableId(1)]
        );

        batched.remove_draggables([DraggableId(2), DraggableId(3), DraggableId(99)]);
        assert!(batched.member_ids(DroppableId(1)).is_empty());
        assert_eq!(batched.draggable_count(), 3);
    }

    #[test]
    fn moving_a_draggable_between_homes_updates_both_lists() {
        let mut map = DimensionMap::new()
            .with_draggable(item(1, 0, 1))
            .with_draggable(item(2, 1, 1));
        map.insert_draggable(item(2, 0, 2));
        assert_eq!(map.member_ids(DroppableId(1)), &[DraggableId(1)]);
        assert_eq!(map.member_ids(DroppableId(2)), &[DraggableId(2)]);

        map.remove_draggable(DraggableId(1));
        assert!(map.member_ids(DroppableId(1)).is_empty());
        map.invalidate_membership();
        assert_eq!(map.member_ids(DroppableId(2)), &[DraggableId(2)]);
    }
}
