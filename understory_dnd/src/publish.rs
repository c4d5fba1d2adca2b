// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mid-drag list mutations: reconcile a snapshot with added and removed items.
//!
//! Lists can change while an item is being dragged (a virtual list mounting a
//! new row, an item being deleted remotely). The collaborator that measures
//! the DOM publishes the delta and [`reconcile`] produces the next snapshot.
//!
//! Phases run in a fixed order:
//!
//! 1. Removed items are dropped and every later survivor is shifted back by
//!    the removed margin-box size.
//! 2. Additions are inserted at their target index among the survivors.
//! 3. Survivors are shifted forward by every addition placed before them.
//!
//! Shifts are accumulated per item and applied once, and indices are
//! rewritten to the final positions.

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::error::DragError;
use crate::id::{DraggableId, DroppableId};
use crate::registry::DimensionMap;

/// New dimensions published mid-drag.
#[derive(Clone, Debug, Default)]
pub struct Additions {
    /// Newly mounted draggables. `descriptor.index` is the target index.
    pub draggables: Vec<DraggableDimension>,
    /// Newly mounted droppables.
    pub droppables: Vec<DroppableDimension>,
}

/// Ids unmounted mid-drag.
#[derive(Clone, Debug, Default)]
pub struct Removals {
    /// Unmounted draggables.
    pub draggables: Vec<DraggableId>,
    /// Unmounted droppables.
    pub droppables: Vec<DroppableId>,
}

/// A batch of dimension changes.
#[derive(Clone, Debug, Default)]
pub struct Published {
    /// What was added.
    pub additions: Additions,
    /// What was removed.
    pub removals: Removals,
}

impl Published {
    /// Whether the batch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.additions.draggables.is_empty()
            && self.additions.droppables.is_empty()
            && self.removals.draggables.is_empty()
            && self.removals.droppables.is_empty()
    }
}

/// Applies `published` to `existing`, returning the reconciled snapshot.
///
/// `critical` is the item being dragged; removing it is a contract violation.
pub fn reconcile(
    existing: &DimensionMap,
    published: &Published,
    critical: Option<DraggableId>,
) -> Result<DimensionMap, DragError> {
    for &id in &published.removals.draggables {
        if Some(id) == critical {
            return Err(DragError::CannotRemoveDragging(id));
        }
        existing.try_draggable(id)?;
    }
    for &id in &published.removals.droppables {
        existing.try_droppable(id)?;
    }

    let mut next = existing.clone();
    for &id in &published.removals.droppables {
        next.remove_droppable(id);
    }
    for droppable in &published.additions.droppables {
        next.insert_droppable(*droppable);
    }

    let removed: HashSet<DraggableId> = published.removals.draggables.iter().copied().collect();
    let mut added_by_home: HashMap<DroppableId, Vec<DraggableDimension>> = HashMap::new();
    for item in &published.additions.draggables {
        added_by_home
            .entry(item.descriptor.droppable_id)
            .or_default()
            .push(*item);
    }

    let mut affected: Vec<DroppableId> = published
        .removals
        .draggables
        .iter()
        .filter_map(|id| existing.draggable(*id))
        .map(|item| item.descriptor.droppable_id)
        .chain(added_by_home.keys().copied())
        .collect();
    affected.sort_unstable();
    affected.dedup();

    let mut rewritten: Vec<DraggableDimension> = Vec::new();
    for home in affected {
        let mut additions = added_by_home.remove(&home).unwrap_or_default();
        additions.sort_by_key(|item| item.descriptor.index);
        let added_ids: HashSet<DraggableId> =
            additions.iter().map(DraggableDimension::id).collect();

        // Phase 1: removal shifts, measured against the original order.
        let mut survivors: Vec<(DraggableDimension, f64)> = Vec::new();
        let mut removed_before = 0.0;
        let before = existing.draggables_inside(home);
        let axis = match next.droppable(home) {
            Some(droppable) => droppable.axis,
            None if additions.is_empty()
                && before.iter().all(|item| removed.contains(&item.id())) =>
            {
                // The whole list went away with its droppable.
                continue;
            }
            None => return Err(DragError::UnknownDroppable(home)),
        };
        for item in before {
            if removed.contains(&item.id()) {
                removed_before += axis.size(item.page.margin_box);
            } else if !added_ids.contains(&item.id()) {
                survivors.push((*item, -removed_before));
            }
        }

        // Phase 2: place additions among the survivors.
        let mut merged: Vec<(DraggableDimension, Option<f64>)> =
            survivors.into_iter().map(|(item, shift)| (item, Some(shift))).collect();
        for item in additions {
            let at = item.descriptor.index.min(merged.len());
            merged.insert(at, (item, None));
        }

        // Phase 3: addition shifts, then apply everything once.
        let mut added_before = 0.0;
        for (index, (item, shift)) in merged.into_iter().enumerate() {
            let mut item = match shift {
                Some(shift) => item.offset(axis.patch(shift + added_before, 0.0)),
                None => {
                    added_before += axis.size(item.page.margin_box);
                    item
                }
            };
            item.descriptor.index = index;
            rewritten.push(item);
        }
    }

    next.remove_draggables(published.removals.draggables.iter().copied());
    next.extend_draggables(rewritten);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        added = published.additions.draggables.len(),
        removed = published.removals.draggables.len(),
        "reconciled published dimensions"
    );

    Ok(next)
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Rect, Vec2};

    use super::*;
    use crate::axis::Axis;
    use crate::box_model::BoxModel;
    use crate::dimension::{DraggableDescriptor, DroppableDescriptor, DroppableMode};
    use crate::id::DropType;

    fn item(id: u32, index: usize, y: f64, height: f64) -> DraggableDimension {
        DraggableDimension::new(
            DraggableDescriptor {
                id: DraggableId(id),
                index,
                droppable_id: DroppableId(1),
                drop_type: DropType::DEFAULT,
            },
            BoxModel::new(
                Rect::new(0.0, y, 100.0, y + height),
                Insets::new(0.0, 5.0, 0.0, 5.0),
                Insets::ZERO,
                Insets::ZERO,
            ),
            Vec2::ZERO,
        )
    }

    fn map() -> DimensionMap {
        let list = DroppableDimension::new(
            DroppableDescriptor {
                id: DroppableId(1),
                drop_type: DropType::DEFAULT,
                mode: DroppableMode::Virtual,
            },
            Axis::Vertical,
            BoxModel::from_border_box(Rect::new(0.0, 0.0, 100.0, 500.0)),
            Vec2::ZERO,
        );
        DimensionMap::new()
            .with_droppable(list)
            .with_draggable(item(0, 0, 5.0, 40.0))
            .with_draggable(item(1, 1, 55.0, 20.0))
            .with_draggable(item(2, 2, 85.0, 40.0))
    }

    fn top(map: &DimensionMap, id: u32) -> f64 {
        map.draggable(DraggableId(id)).unwrap().page.border_box.y0
    }

    #[test]
    fn removal_shifts_later_siblings_back() {
        let existing = map();
        let published = Published {
            removals: Removals {
                draggables: alloc::vec![DraggableId(1)],
                droppables: Vec::new(),
            },
            ..Published::default()
        };
        let next = reconcile(&existing, &published, Some(DraggableId(0))).unwrap();
        assert!(next.draggable(DraggableId(1)).is_none());
        assert_eq!(top(&next, 0), 5.0);
        // Removed margin box is 30 tall.
        assert_eq!(top(&next, 2), 55.0);
        assert_eq!(next.draggable(DraggableId(2)).unwrap().descriptor.index, 1);
    }

    #[test]
    fn addition_shifts_siblings_at_or_after_index() {
        let existing = map();
        let published = Published {
            additions: Additions {
                draggables: alloc::vec![item(7, 1, 55.0, 10.0)],
                droppables: Vec::new(),
            },
            ..Published::default()
        };
        let next = reconcile(&existing, &published, None).unwrap();
        assert_eq!(
            next.member_ids(DroppableId(1)),
            &[DraggableId(0), DraggableId(7), DraggableId(1), DraggableId(2)]
        );
        assert_eq!(top(&next, 0), 5.0);
        assert_eq!(top(&next, 7), 55.0);
        assert_eq!(top(&next, 1), 75.0);
        assert_eq!(top(&next, 2), 105.0);
    }

    #[test]
    fn removal_and_addition_accumulate() {
        let existing = map();
        let published = Published {
            additions: Additions {
                draggables: alloc::vec![item(7, 0, 5.0, 10.0)],
                droppables: Vec::new(),
            },
            removals: Removals {
                draggables: alloc::vec![DraggableId(0)],
                droppables: Vec::new(),
            },
        };
        let next = reconcile(&existing, &published, None).unwrap();
        assert_eq!(
            next.member_ids(DroppableId(1)),
            &[DraggableId(7), DraggableId(1), DraggableId(2)]
        );
        // -50 for the removal, +20 for the addition.
        assert_eq!(top(&next, 1), 25.0);
        assert_eq!(top(&next, 2), 55.0);
        assert_eq!(next.draggable(DraggableId(2)).unwrap().descriptor.index, 2);
    }

    #[test]
    fn contract_violations() {
        let existing = map();
        let removing_dragging = Published {
            removals: Removals {
                draggables: alloc::vec![DraggableId(2)],
                droppables: Vec::new(),
            },
            ..Published::default()
        };
        assert_eq!(
            reconcile(&existing, &removing_dragging, Some(DraggableId(2))).err(),
            Some(DragError::CannotRemoveDragging(DraggableId(2)))
        );

        let unknown = Published {
            removals: Removals {
                draggables: alloc::vec![DraggableId(40)],
                droppables: Vec::new(),
            },
            ..Published::default()
        };
        assert_eq!(
            reconcile(&existing, &unknown, None).err(),
            Some(DragError::UnknownDraggable(DraggableId(40)))
        );
    }

    #[test]
    fn empty_publish_is_identity() {
        let existing = map();
        let published = Published::default();
        assert!(published.is_empty());
        let next = reconcile(&existing, &published, None).unwrap();
        for id in 0..3 {
            assert_eq!(top(&next, id), top(&existing, id));
        }
    }
}
