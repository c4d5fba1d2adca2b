// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A destination droppable as seen from the dragging item.

use alloc::vec::Vec;

use kurbo::{Rect, Vec2};

use crate::axis::Axis;
use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::id::DraggableId;
use crate::impact::AfterCritical;
use crate::registry::DimensionMap;

/// The siblings of the dragging item inside a destination.
///
/// Two index regimes exist. A standard home list keeps a placeholder where
/// the dragging item was lifted from, so landing at index `k` displaces the
/// siblings between the original index and `k`. Any other list (foreign, or
/// a collapsed virtual home) has no gap, so landing at `k` displaces every
/// sibling from `k` onward. Both regimes index into `0..=siblings.len()`.
#[derive(Debug)]
pub(crate) struct ListContext<'a> {
    pub(crate) droppable: &'a DroppableDimension,
    pub(crate) dragging: &'a DraggableDimension,
    /// Draggables inside the destination, without the dragging item, in order.
    pub(crate) siblings: Vec<&'a DraggableDimension>,
    /// Original position of the dragging item when the destination is a
    /// standard home list.
    pub(crate) home_index: Option<usize>,
}

impl<'a> ListContext<'a> {
    pub(crate) fn new(
        droppable: &'a DroppableDimension,
        dragging: &'a DraggableDimension,
        dimensions: &'a DimensionMap,
    ) -> Self {
        let inside = dimensions.draggables_inside(droppable.id());
        let own = inside.iter().position(|item| item.id() == dragging.id());
        let siblings = inside
            .into_iter()
            .filter(|item| item.id() != dragging.id())
            .collect();
        let is_home = dragging.descriptor.droppable_id == droppable.id();
        let home_index = if is_home && !droppable.is_virtual() {
            own
        } else {
            None
        };
        Self {
            droppable,
            dragging,
            siblings,
            home_index,
        }
    }

    pub(crate) fn axis(&self) -> Axis {
        self.droppable.axis
    }

    pub(crate) fn is_home(&self) -> bool {
        self.dragging.descriptor.droppable_id == self.droppable.id()
    }

    /// Main-axis space the dragging item occupies.
    pub(crate) fn dragging_size(&self) -> f64 {
        self.axis().component(self.dragging.displace_by)
    }

    /// Highest reachable index.
    pub(crate) fn max_index(&self) -> usize {
        self.siblings.len()
    }

    /// Position of `id` among the siblings.
    pub(crate) fn position_of(&self, id: DraggableId) -> Option<usize> {
        self.siblings.iter().position(|item| item.id() == id)
    }

    /// The vector siblings move by when the dragging item lands at `index`.
    pub(crate) fn displaced_by_for(&self, index: usize) -> Vec2 {
        let size = self.dragging_size();
        match self.home_index {
            Some(origin) if index > origin => self.axis().patch(-size, 0.0),
            _ => self.axis().patch(size, 0.0),
        }
    }

    /// Siblings displaced when landing at `index`, closest first.
    pub(crate) fn displaced_at(&self, index: usize) -> Vec<&'a DraggableDimension> {
        let index = index.min(self.max_index());
        match self.home_index {
            Some(origin) if index > origin => {
                self.siblings[origin..index].iter().rev().copied().collect()
            }
            Some(origin) => self.siblings[index..origin].to_vec(),
            None => self.siblings[index..].to_vec(),
        }
    }

    /// Border box of a sibling where it rests when not displaced.
    pub(crate) fn resting_border_box(
        &self,
        item: &DraggableDimension,
        after_critical: &AfterCritical,
    ) -> Rect {
        item.page.border_box + after_critical.resting_offset(item.id())
    }
}
