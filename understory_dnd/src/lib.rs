// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory DnD: a headless drag-and-drop impact engine for reorderable lists.
//!
//! Given the measured geometry of draggable items and the droppable lists that
//! contain them, this crate answers the questions a list drag-and-drop UI asks
//! every frame:
//!
//! - Which droppable is the dragging item over? ([`droppable_over`])
//! - Where would it land, and which siblings must move out of the way?
//!   ([`drag_impact`])
//! - Is it hovering the middle of a sibling, asking to merge with it?
//! - Where exactly should it animate to when released? ([`new_home`])
//! - Where does a keyboard step or a jump to the next list take it?
//!   ([`navigation`])
//!
//! Every answer is a plain value ([`DragImpact`], a [`Point`](kurbo::Point),
//! a [`MoveResult`](navigation::MoveResult)) computed from an explicit
//! dimension snapshot ([`DimensionMap`]). Nothing is rendered, scrolled or
//! animated here; the host does that from the values it gets back.
//!
//! ## Model
//!
//! - A droppable has a main [`Axis`] and holds its draggables in index order.
//! - While dragging, siblings that the dragging item has passed are
//!   *displaced* by the dragging item's size. In the item's home list a
//!   placeholder keeps its original slot, so only the siblings between the
//!   original and the new index move. In any other list everything from the
//!   landing index onward moves.
//! - Positions are page coordinates measured at lift. Scrolling of the window
//!   or of a droppable's scroll container after lift is tracked separately
//!   ([`ScrollDetails`]) and applied when comparing.
//!
//! ## Usage
//!
//! [`DragSession`] wraps the individual computations for one drag:
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use understory_dnd::{
//!     Axis, BoxModel, DimensionMap, DragConfig, DragSession, DraggableDescriptor,
//!     DraggableDimension, DraggableId, DropType, DroppableDescriptor, DroppableDimension,
//!     DroppableId, DroppableMode, MovementMode, Viewport,
//! };
//!
//! let list = DroppableDimension::new(
//!     DroppableDescriptor {
//!         id: DroppableId(1),
//!         drop_type: DropType::DEFAULT,
//!         mode: DroppableMode::Standard,
//!     },
//!     Axis::Vertical,
//!     BoxModel::from_border_box(Rect::new(0.0, 0.0, 100.0, 150.0)),
//!     Vec2::ZERO,
//! );
//! let mut dimensions = DimensionMap::new().with_droppable(list);
//! for index in 0..3_u32 {
//!     let y = f64::from(index) * 50.0;
//!     dimensions.insert_draggable(DraggableDimension::new(
//!         DraggableDescriptor {
//!             id: DraggableId(index),
//!             index: index as usize,
//!             droppable_id: DroppableId(1),
//!             drop_type: DropType::DEFAULT,
//!         },
//!         BoxModel::from_border_box(Rect::new(0.0, y, 100.0, y + 50.0)),
//!         Vec2::ZERO,
//!     ));
//! }
//!
//! let viewport = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0), Vec2::ZERO);
//! let mut session = DragSession::lift(
//!     DraggableId(0),
//!     dimensions,
//!     viewport,
//!     Point::new(50.0, 25.0),
//!     MovementMode::Fluid,
//!     DragConfig::default(),
//! )?;
//!
//! // Dragging the first item down past the second item's center.
//! let impact = session.move_to(Point::new(50.0, 80.0))?;
//! assert_eq!(impact.destination().map(|d| d.index), Some(1));
//!
//! let result = session.drop()?;
//! assert_eq!(result.new_home_center, Point::new(50.0, 75.0));
//! # Ok::<(), understory_dnd::DragError>(())
//! ```
//!
//! The free functions ([`compute_impact`], [`compute_lift_effect`],
//! [`resolve_droppable_over`], [`navigation::move_to_next_index`],
//! [`navigation::move_cross_axis`], [`page_border_box_center_from_impact`])
//! can also be driven directly by hosts that keep their own drag state.
//!
//! ## Errors
//!
//! Inputs that break a contract (an unknown id, a keyboard step with no
//! previous destination, a combine target outside its list) produce a
//! [`DragError`]. Expected "nothing to do" outcomes, such as not being over
//! any droppable or stepping past the end of a list, are `None` or
//! [`DragImpact::no_impact`] instead.
//!
//! ## Features
//!
//! - `std` (default): use `std` for Kurbo's float math.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `tracing`: emit `tracing` events for impact transitions, keyboard moves
//!   and session lifecycle.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod axis;
pub mod box_model;
pub mod config;
pub mod dimension;
pub mod drag_impact;
pub mod droppable_over;
pub mod error;
pub mod geometry;
pub mod id;
pub mod impact;
pub mod lift;
pub mod navigation;
pub mod new_home;
pub mod publish;
pub mod registry;
pub mod scroll;
pub mod session;
pub mod viewport;
pub mod visibility;

mod combine;
mod displacement;
mod list;
mod reorder;

pub use axis::{Axis, Edge, HorizontalDirection, Travel, UserDirection, VerticalDirection};
pub use box_model::BoxModel;
pub use config::{DEFAULT_COMBINE_THRESHOLD, DragConfig};
pub use dimension::{
    DraggableDescriptor, DraggableDimension, DroppableDescriptor, DroppableDimension,
    DroppableMode, PlaceholderGrowth, ScrollFrame, Subject,
};
pub use drag_impact::{ImpactArgs, compute_impact, page_border_box};
pub use droppable_over::resolve_droppable_over;
pub use error::DragError;
pub use id::{DraggableId, DropType, DroppableId};
pub use impact::{
    AfterCritical, Combine, DisplacedGroups, Displacement, DragImpact, DraggableLocation,
    ImpactLocation,
};
pub use lift::{LiftEffect, compute_lift_effect};
pub use new_home::page_border_box_center_from_impact;
pub use publish::{Additions, Published, Removals, reconcile};
pub use registry::{DimensionMap, draggables_inside_droppable};
pub use scroll::{ScrollDetails, ScrollDiff};
pub use session::{DragSession, DropReason, DropResult, MovementMode};
pub use viewport::Viewport;
pub use visibility::VisibilityTest;
