// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for drag integration tests.

#![allow(
    missing_docs,
    dead_code,
    reason = "Integration-test helper module; each test binary uses a subset."
)]

use kurbo::{Rect, Vec2};
use understory_dnd::{
    Axis, BoxModel, DimensionMap, DraggableDescriptor, DraggableDimension, DraggableId, DropType,
    DroppableDescriptor, DroppableDimension, DroppableId, DroppableMode, Viewport,
};

/// Size of every fixture item along the main axis.
pub const ITEM_SIZE: f64 = 50.0;

pub fn droppable(id: u32, axis: Axis, border_box: Rect) -> DroppableDimension {
    DroppableDimension::new(
        DroppableDescriptor {
            id: DroppableId(id),
            drop_type: DropType::DEFAULT,
            mode: DroppableMode::Standard,
        },
        axis,
        BoxModel::from_border_box(border_box),
        Vec2::ZERO,
    )
}

pub fn draggable(id: u32, index: usize, droppable: u32, border_box: Rect) -> DraggableDimension {
    DraggableDimension::new(
        DraggableDescriptor {
            id: DraggableId(id),
            index,
            droppable_id: DroppableId(droppable),
            drop_type: DropType::DEFAULT,
        },
        BoxModel::from_border_box(border_box),
        Vec2::ZERO,
    )
}

/// Adds `count` stacked items of [`ITEM_SIZE`] to a vertical list at `x`.
///
/// Item ids start at `first_id` and follow the index.
pub fn fill_vertical(map: &mut DimensionMap, list: u32, x: f64, first_id: u32, count: u32) {
    for index in 0..count {
        let y = f64::from(index) * ITEM_SIZE;
        map.insert_draggable(draggable(
            first_id + index,
            index as usize,
            list,
            Rect::new(x, y, x + 100.0, y + ITEM_SIZE),
        ));
    }
}

/// One vertical list (id 1) at `x = 0` with `count` items (ids `0..count`).
pub fn home_list(count: u32) -> DimensionMap {
    let height = f64::from(count) * ITEM_SIZE;
    let mut map = DimensionMap::new().with_droppable(droppable(
        1,
        Axis::Vertical,
        Rect::new(0.0, 0.0, 100.0, height),
    ));
    fill_vertical(&mut map, 1, 0.0, 0, count);
    map
}

pub fn viewport() -> Viewport {
    Viewport::new(Rect::new(0.0, 0.0, 1000.0, 1000.0), Vec2::ZERO)
}
