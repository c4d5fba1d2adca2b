// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single drag from lift to drop.
//!
//! [`DragSession`] owns everything one drag needs: the dimension snapshot
//! taken at lift, the viewport, pointer tracking and the current impact.
//! Each input feeds the matching computation and stores its result, so the
//! session always holds a consistent impact and item position.
//!
//! ## Usage
//!
//! 1) Call [`DragSession::lift`] with the measured dimensions and the pointer
//!    position.
//! 2) Feed pointer moves to [`DragSession::move_to`], or keyboard commands to
//!    [`DragSession::move_by_keyboard`] and [`DragSession::move_cross_axis`].
//! 3) Report scrolls with [`DragSession::scroll_droppable`] and
//!    [`DragSession::scroll_viewport`], and list changes with
//!    [`DragSession::publish`].
//! 4) Finish with [`DragSession::drop`] or [`DragSession::cancel`].
//!
//! While over a foreign droppable, the session keeps a placeholder in that
//! droppable's dimensions so it grows to fit the dragging item.

use kurbo::{Point, Vec2};

use crate::axis::UserDirection;
use crate::config::DragConfig;
use crate::dimension::DraggableDimension;
use crate::displacement::refresh_visibility;
use crate::drag_impact::{ImpactArgs, compute_impact};
use crate::error::DragError;
use crate::id::{DraggableId, DroppableId};
use crate::impact::{AfterCritical, Combine, DragImpact, DraggableLocation};
use crate::lift::compute_lift_effect;
use crate::navigation::{
    CrossAxisArgs, MoveResult, NextIndexArgs, move_cross_axis, move_to_next_index,
};
use crate::new_home::page_border_box_center_from_impact;
use crate::publish::{Published, reconcile};
use crate::registry::DimensionMap;
use crate::viewport::Viewport;

/// How the dragging item follows input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MovementMode {
    /// Follows the pointer continuously.
    #[default]
    Fluid,
    /// Jumps between resting positions (keyboard dragging).
    Snap,
}

/// Why a drag ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DropReason {
    /// The user released the item.
    Drop,
    /// The drag was abandoned.
    Cancel,
}

/// Outcome of a finished drag.
#[derive(Clone, Debug, PartialEq)]
pub struct DropResult {
    /// Why the drag ended.
    pub reason: DropReason,
    /// Where the item lands when reordering.
    pub destination: Option<DraggableLocation>,
    /// The item it merges into when combining.
    pub combine: Option<Combine>,
    /// The final impact.
    pub impact: DragImpact,
    /// Page border box center the item animates to.
    pub new_home_center: Point,
    /// `new_home_center` relative to where the item was lifted from.
    pub offset_from_lift: Vec2,
}

/// Pointer positions for the current drag, in page coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
struct PointerTrack {
    start: Point,
    last: Point,
}

impl PointerTrack {
    fn start(pos: Point) -> Self {
        Self {
            start: pos,
            last: pos,
        }
    }

    /// Records `pos`, returning the movement since the last update.
    fn update(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last;
        self.last = pos;
        delta
    }

    fn total_offset(&self) -> Vec2 {
        self.last - self.start
    }
}

/// State of one drag.
#[derive(Clone, Debug)]
pub struct DragSession {
    critical: DraggableId,
    mode: MovementMode,
    dimensions: DimensionMap,
    viewport: Viewport,
    after_critical: AfterCritical,
    impact: DragImpact,
    config: DragConfig,
    pointer: PointerTrack,
    user_direction: UserDirection,
    page_border_box_center: Point,
    scroll_jump_request: Option<Vec2>,
}

impl DragSession {
    /// Starts dragging `critical` with the pointer at `pointer`.
    pub fn lift(
        critical: DraggableId,
        dimensions: DimensionMap,
        viewport: Viewport,
        pointer: Point,
        mode: MovementMode,
        config: DragConfig,
    ) -> Result<Self, DragError> {
        let effect = compute_lift_effect(critical, &dimensions, &viewport)?;
        let page_border_box_center = dimensions.try_draggable(critical)?.center();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            draggable = ?critical,
            home = ?effect.impact.droppable_id(),
            ?mode,
            "lift"
        );

        Ok(Self {
            critical,
            mode,
            dimensions,
            viewport,
            after_critical: effect.after_critical,
            impact: effect.impact,
            config,
            pointer: PointerTrack::start(pointer),
            user_direction: UserDirection::default(),
            page_border_box_center,
            scroll_jump_request: None,
        })
    }

    /// The item being dragged.
    #[must_use]
    pub fn critical(&self) -> DraggableId {
        self.critical
    }

    /// How the item follows input.
    #[must_use]
    pub fn mode(&self) -> MovementMode {
        self.mode
    }

    /// The current impact.
    #[must_use]
    pub fn impact(&self) -> &DragImpact {
        &self.impact
    }

    /// The current dimension snapshot, placeholder included.
    #[must_use]
    pub fn dimensions(&self) -> &DimensionMap {
        &self.dimensions
    }

    /// The current viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// What lifting did to the home list.
    #[must_use]
    pub fn after_critical(&self) -> &AfterCritical {
        &self.after_critical
    }

    /// Most recent pointer direction.
    #[must_use]
    pub fn user_direction(&self) -> UserDirection {
        self.user_direction
    }

    /// Where the dragging item's border box center currently is.
    #[must_use]
    pub fn page_border_box_center(&self) -> Point {
        self.page_border_box_center
    }

    /// Pending request for the host to scroll, from the last keyboard step.
    #[must_use]
    pub fn scroll_jump_request(&self) -> Option<Vec2> {
        self.scroll_jump_request
    }

    fn dragging(&self) -> Result<&DraggableDimension, DragError> {
        self.dimensions.try_draggable(self.critical)
    }

    fn home(&self) -> Result<DroppableId, DragError> {
        Ok(self.dragging()?.descriptor.droppable_id)
    }

    /// Offset of the item from where it was lifted, in lift-time page
    /// coordinates.
    fn page_offset(&self) -> Result<Vec2, DragError> {
        Ok(match self.mode {
            MovementMode::Fluid => self.pointer.total_offset(),
            MovementMode::Snap => self.page_border_box_center - self.dragging()?.center(),
        })
    }

    /// Moves the dragging item with the pointer.
    pub fn move_to(&mut self, pointer: Point) -> Result<&DragImpact, DragError> {
        let delta = self.pointer.update(pointer);
        self.user_direction = self.user_direction.updated(delta);
        self.recompute_fluid(&self.impact.clone())?;
        Ok(&self.impact)
    }

    fn recompute_fluid(&mut self, previous: &DragImpact) -> Result<(), DragError> {
        let page_offset = self.page_offset()?;
        let draggable = self.dragging()?;
        let impact = compute_impact(&ImpactArgs {
            page_offset,
            draggable,
            dimensions: &self.dimensions,
            previous_impact: previous,
            viewport: &self.viewport,
            after_critical: &self.after_critical,
            user_direction: self.user_direction,
            config: &self.config,
        });
        let center = draggable.center() + page_offset;
        let before = self.impact.droppable_id();
        self.impact = impact;
        self.page_border_box_center = center;
        self.scroll_jump_request = None;
        self.sync_placeholder(before)
    }

    /// Takes one keyboard step within the current list.
    ///
    /// Returns `false` when the item is already at the end of the list in
    /// that direction.
    pub fn move_by_keyboard(&mut self, is_moving_forward: bool) -> Result<bool, DragError> {
        let destination = self
            .impact
            .droppable_id()
            .ok_or(DragError::NoPreviousDestination)?;
        let result = move_to_next_index(&NextIndexArgs {
            is_moving_forward,
            draggable: self.dragging()?,
            destination: self.dimensions.try_droppable(destination)?,
            dimensions: &self.dimensions,
            previous_impact: &self.impact,
            previous_page_border_box_center: self.page_border_box_center,
            viewport: &self.viewport,
            after_critical: &self.after_critical,
        })?;
        self.apply(result)
    }

    /// Moves into the adjacent list on the cross axis.
    ///
    /// Returns `false` when there is no list to move into.
    pub fn move_cross_axis(&mut self, is_moving_forward: bool) -> Result<bool, DragError> {
        let is_over = self
            .impact
            .droppable_id()
            .ok_or(DragError::NoPreviousDestination)?;
        let result = move_cross_axis(&CrossAxisArgs {
            is_moving_forward,
            previous_page_border_box_center: self.page_border_box_center,
            draggable: self.dragging()?,
            is_over: self.dimensions.try_droppable(is_over)?,
            dimensions: &self.dimensions,
            viewport: &self.viewport,
            after_critical: &self.after_critical,
        });
        self.apply(result)
    }

    fn apply(&mut self, result: Option<MoveResult>) -> Result<bool, DragError> {
        let Some(result) = result else {
            return Ok(false);
        };
        let before = self.impact.droppable_id();
        self.impact = result.impact;
        self.page_border_box_center = result.page_border_box_center;
        self.scroll_jump_request = result.scroll_jump_request;
        self.sync_placeholder(before)?;
        Ok(true)
    }

    /// Records that droppable `id` scrolled to `current`.
    pub fn scroll_droppable(&mut self, id: DroppableId, current: Vec2) -> Result<(), DragError> {
        let scrolled = self.dimensions.try_droppable(id)?.scrolled(current)?;
        self.dimensions.update_droppable(scrolled)?;
        self.after_scroll()
    }

    /// Records that the window scrolled to `current`.
    ///
    /// While following the pointer, the pointer stays put on screen and so
    /// moves through the page by the scroll amount.
    pub fn scroll_viewport(&mut self, current: Vec2) -> Result<(), DragError> {
        let change = current - self.viewport.scroll.current;
        self.viewport = self.viewport.scrolled(current);
        if self.mode == MovementMode::Fluid {
            self.pointer.last += change;
        }
        self.after_scroll()
    }

    fn after_scroll(&mut self) -> Result<(), DragError> {
        match self.mode {
            MovementMode::Fluid => self.recompute_fluid(&self.impact.clone()),
            MovementMode::Snap => {
                self.refresh_snap();
                Ok(())
            }
        }
    }

    /// Keeps the location, but updates visibility and where the item rests
    /// now that something scrolled.
    fn refresh_snap(&mut self) {
        let Some(destination) = self
            .impact
            .droppable_id()
            .and_then(|id| self.dimensions.droppable(id))
        else {
            return;
        };
        let Some(draggable) = self.dimensions.draggable(self.critical) else {
            return;
        };
        let impact = refresh_visibility(
            &self.impact,
            destination,
            &self.dimensions,
            &self.after_critical,
            &self.viewport,
        );
        self.page_border_box_center = page_border_box_center_from_impact(
            &impact,
            draggable,
            Some(destination),
            &self.dimensions,
            &self.after_critical,
        );
        self.impact = impact;
        self.scroll_jump_request = None;
    }

    /// Applies dimension changes published while dragging.
    ///
    /// The lift effect is recomputed against the new dimensions and the
    /// impact is recomputed from the home location, since indices and
    /// positions in the previous impact may no longer hold.
    pub fn publish(&mut self, published: &Published) -> Result<(), DragError> {
        if published.is_empty() {
            return Ok(());
        }
        let before = self.impact.droppable_id();
        self.remove_placeholder(before)?;
        let page_offset = self.page_offset()?;

        self.dimensions = reconcile(&self.dimensions, published, Some(self.critical))?;
        let effect = compute_lift_effect(self.critical, &self.dimensions, &self.viewport)?;
        self.after_critical = effect.after_critical;

        let draggable = self.dimensions.try_draggable(self.critical)?;
        self.impact = compute_impact(&ImpactArgs {
            page_offset,
            draggable,
            dimensions: &self.dimensions,
            previous_impact: &effect.impact,
            viewport: &self.viewport,
            after_critical: &self.after_critical,
            user_direction: self.user_direction,
            config: &self.config,
        });
        if self.mode == MovementMode::Fluid {
            self.page_border_box_center = draggable.center() + page_offset;
        } else {
            let destination = self
                .impact
                .droppable_id()
                .and_then(|id| self.dimensions.droppable(id));
            self.page_border_box_center = page_border_box_center_from_impact(
                &self.impact,
                draggable,
                destination,
                &self.dimensions,
                &self.after_critical,
            );
        }
        self.scroll_jump_request = None;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            added = published.additions.draggables.len(),
            removed = published.removals.draggables.len(),
            destination = ?self.impact.destination(),
            "published dimensions while dragging"
        );

        self.sync_placeholder(None)
    }

    fn remove_placeholder(&mut self, from: Option<DroppableId>) -> Result<(), DragError> {
        let home = self.home()?;
        if let Some(id) = from.filter(|&id| id != home)
            && let Some(droppable) = self.dimensions.droppable(id)
        {
            let without = droppable.without_placeholder();
            self.dimensions.update_droppable(without)?;
        }
        Ok(())
    }

    /// Moves the placeholder from `before` to the current impact's droppable.
    fn sync_placeholder(&mut self, before: Option<DroppableId>) -> Result<(), DragError> {
        let after = self.impact.droppable_id();
        if before == after {
            return Ok(());
        }
        self.remove_placeholder(before)?;
        let home = self.home()?;
        let Some(id) = after.filter(|&id| id != home) else {
            return Ok(());
        };
        let droppable = self.dimensions.try_droppable(id)?;
        if droppable.subject.placeholder.is_some() {
            return Ok(());
        }
        let with = {
            let inside = self.dimensions.draggables_inside(id);
            droppable.with_placeholder(self.dragging()?, &inside)?
        };
        self.dimensions.update_droppable(with)
    }

    /// Ends the drag, landing the item according to the current impact.
    pub fn drop(self) -> Result<DropResult, DragError> {
        let draggable = self.dragging()?;
        let destination = self
            .impact
            .droppable_id()
            .and_then(|id| self.dimensions.droppable(id));
        let new_home_center = page_border_box_center_from_impact(
            &self.impact,
            draggable,
            destination,
            &self.dimensions,
            &self.after_critical,
        );
        let offset_from_lift = new_home_center - draggable.center();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            draggable = ?self.critical,
            destination = ?self.impact.destination(),
            combine = ?self.impact.combine(),
            "drop"
        );

        Ok(DropResult {
            reason: DropReason::Drop,
            destination: self.impact.destination(),
            combine: self.impact.combine(),
            new_home_center,
            offset_from_lift,
            impact: self.impact,
        })
    }

    /// Abandons the drag. The item always returns to where it was lifted.
    #[must_use]
    pub fn cancel(self) -> DropResult {
        let home_center = self
            .dimensions
            .draggable(self.critical)
            .map_or(self.page_border_box_center, DraggableDimension::center);

        #[cfg(feature = "tracing")]
        tracing::debug!(draggable = ?self.critical, "cancel");

        DropResult {
            reason: DropReason::Cancel,
            destination: None,
            combine: None,
            impact: DragImpact::no_impact(),
            new_home_center: home_center,
            offset_from_lift: Vec2::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::*;
    use crate::axis::Axis;
    use crate::box_model::BoxModel;
    use crate::dimension::{
        DraggableDescriptor, DroppableDescriptor, DroppableDimension, DroppableMode,
    };
    use crate::id::DropType;

    fn board() -> DimensionMap {
        let column = |id: u32, x: f64| {
            DroppableDimension::new(
                DroppableDescriptor {
                    id: DroppableId(id),
                    drop_type: DropType::DEFAULT,
                    mode: DroppableMode::Standard,
                },
                Axis::Vertical,
                BoxModel::from_border_box(Rect::new(x, 0.0, x + 100.0, 200.0)),
                Vec2::ZERO,
            )
        };
        let mut map = DimensionMap::new()
            .with_droppable(column(1, 0.0))
            .with_droppable(column(2, 200.0));
        for index in 0..3_u32 {
            let y = f64::from(index) * 50.0;
            map.insert_draggable(DraggableDimension::new(
                DraggableDescriptor {
                    id: DraggableId(index),
                    index: index as usize,
                    droppable_id: DroppableId(1),
                    drop_type: DropType::DEFAULT,
                },
                BoxModel::from_border_box(Rect::new(0.0, y, 100.0, y + 50.0)),
                Vec2::ZERO,
            ));
        }
        map
    }

    fn viewport() -> Viewport {
        Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0), Vec2::ZERO)
    }

    fn lift(mode: MovementMode) -> DragSession {
        DragSession::lift(
            DraggableId(0),
            board(),
            viewport(),
            Point::new(50.0, 25.0),
            mode,
            DragConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn pointer_drag_reorders_and_drops() {
        let mut session = lift(MovementMode::Fluid);
        let impact = session.move_to(Point::new(50.0, 80.0)).unwrap();
        assert_eq!(impact.destination().map(|d| d.index), Some(1));
        assert_eq!(session.page_border_box_center(), Point::new(50.0, 80.0));

        let result = session.drop().unwrap();
        assert_eq!(result.reason, DropReason::Drop);
        assert_eq!(result.new_home_center, Point::new(50.0, 75.0));
        assert_eq!(result.offset_from_lift, Vec2::new(0.0, 50.0));
    }

    #[test]
    fn foreign_list_gets_a_placeholder() {
        let mut session = lift(MovementMode::Fluid);
        session.move_to(Point::new(250.0, 25.0)).unwrap();
        assert_eq!(session.impact().droppable_id(), Some(DroppableId(2)));
        let foreign = session.dimensions().droppable(DroppableId(2)).unwrap();
        assert!(foreign.subject.placeholder.is_some());

        session.move_to(Point::new(50.0, 25.0)).unwrap();
        let foreign = session.dimensions().droppable(DroppableId(2)).unwrap();
        assert!(foreign.subject.placeholder.is_none());
    }

    #[test]
    fn keyboard_drag_moves_between_lists() {
        let mut session = lift(MovementMode::Snap);
        assert!(session.move_by_keyboard(true).unwrap());
        assert_eq!(session.page_border_box_center(), Point::new(50.0, 75.0));
        assert!(session.move_cross_axis(true).unwrap());
        assert_eq!(
            session.impact().destination(),
            Some(DraggableLocation {
                droppable_id: DroppableId(2),
                index: 0,
            })
        );
        assert_eq!(session.page_border_box_center(), Point::new(250.0, 25.0));
        assert!(!session.move_cross_axis(true).unwrap());
    }

    #[test]
    fn cancel_returns_home() {
        let mut session = lift(MovementMode::Fluid);
        session.move_to(Point::new(250.0, 125.0)).unwrap();
        let result = session.cancel();
        assert_eq!(result.reason, DropReason::Cancel);
        assert_eq!(result.destination, None);
        assert_eq!(result.new_home_center, Point::new(50.0, 25.0));
        assert_eq!(result.offset_from_lift, Vec2::ZERO);
    }

    #[test]
    fn window_scroll_moves_a_fluid_drag() {
        let mut session = lift(MovementMode::Fluid);
        session.scroll_viewport(Vec2::new(0.0, 60.0)).unwrap();
        assert_eq!(session.page_border_box_center(), Point::new(50.0, 85.0));
        assert_eq!(session.impact().destination().map(|d| d.index), Some(1));
    }
}
