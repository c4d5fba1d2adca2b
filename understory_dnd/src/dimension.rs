// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measured geometry of draggables and droppables.
//!
//! Dimensions are captured once at lift and treated as a snapshot for the rest
//! of the drag. The only mid-drag changes are scroll updates
//! ([`DroppableDimension::scrolled`]), placeholder growth
//! ([`DroppableDimension::with_placeholder`]) and publish reconciliation
//! (see [`crate::publish`]).

use kurbo::{Point, Rect, Vec2};

use crate::axis::Axis;
use crate::box_model::BoxModel;
use crate::error::DragError;
use crate::geometry::clip;
use crate::id::{DraggableId, DropType, DroppableId};
use crate::scroll::ScrollDetails;

/// Identity of a draggable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DraggableDescriptor {
    /// Stable id.
    pub id: DraggableId,
    /// Zero-based position inside the home droppable.
    pub index: usize,
    /// The droppable this item lives in.
    pub droppable_id: DroppableId,
    /// Compatibility tag.
    pub drop_type: DropType,
}

/// A measured draggable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DraggableDimension {
    /// Identity.
    pub descriptor: DraggableDescriptor,
    /// Viewport-relative boxes.
    pub client: BoxModel,
    /// Document-relative boxes.
    pub page: BoxModel,
    /// How far siblings move to make room for this item: the margin box size.
    pub displace_by: Vec2,
}

impl DraggableDimension {
    /// Builds a dimension from a viewport-relative measurement and the window
    /// scroll at the time of measurement.
    #[must_use]
    pub fn new(descriptor: DraggableDescriptor, client: BoxModel, window_scroll: Vec2) -> Self {
        Self {
            descriptor,
            client,
            page: client.with_scroll(window_scroll),
            displace_by: Vec2::new(client.margin_box.width(), client.margin_box.height()),
        }
    }

    /// Shorthand for the descriptor id.
    #[must_use]
    pub fn id(&self) -> DraggableId {
        self.descriptor.id
    }

    /// Center of the page border box.
    #[must_use]
    pub fn center(&self) -> Point {
        self.page.border_box.center()
    }

    /// Returns the dimension shifted by `by` in both coordinate spaces.
    #[must_use]
    pub fn offset(self, by: Vec2) -> Self {
        Self {
            client: self.client.offset(by),
            page: self.page.offset(by),
            ..self
        }
    }
}

/// How a droppable renders its items.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DroppableMode {
    /// Every item is mounted; the home list keeps a placeholder while dragging.
    #[default]
    Standard,
    /// Items are windowed; the dragging item is unmounted and the list collapses.
    Virtual,
}

/// Identity of a droppable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DroppableDescriptor {
    /// Stable id.
    pub id: DroppableId,
    /// Compatibility tag.
    pub drop_type: DropType,
    /// Rendering mode.
    pub mode: DroppableMode,
}

/// The closest scrolling ancestor of a droppable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollFrame {
    /// Page margin box of the scroll container.
    pub page_margin_box: Rect,
    /// Whether the container clips the droppable's visible area.
    pub should_clip_subject: bool,
    /// Scroll state of the container.
    pub scroll: ScrollDetails,
}

impl ScrollFrame {
    /// A clipping frame at `page_margin_box`.
    #[must_use]
    pub fn new(page_margin_box: Rect, scroll: ScrollDetails) -> Self {
        Self {
            page_margin_box,
            should_clip_subject: true,
            scroll,
        }
    }

    /// Sets whether the frame clips its droppable.
    #[must_use]
    pub fn with_clip_subject(mut self, should_clip_subject: bool) -> Self {
        self.should_clip_subject = should_clip_subject;
        self
    }
}

/// Room made in a foreign droppable for the dragging item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaceholderGrowth {
    /// Size of the placeholder.
    pub size: Vec2,
    /// How much the droppable had to grow to fit it. Zero if it already fit.
    pub increased_by: Vec2,
    /// Frame max scroll before the growth, restored on removal.
    pub old_frame_max_scroll: Option<Vec2>,
}

/// The region of a droppable that can currently be targeted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Subject {
    /// Page margin box of the droppable at lift.
    pub page_margin_box: Rect,
    /// Placeholder growth, if any.
    pub placeholder: Option<PlaceholderGrowth>,
    /// Visible area after scrolling, growth and clipping; `None` when fully
    /// scrolled out of its frame.
    pub active: Option<Rect>,
}

impl Subject {
    fn compute(
        page_margin_box: Rect,
        axis: Axis,
        frame: Option<&ScrollFrame>,
        placeholder: Option<PlaceholderGrowth>,
    ) -> Self {
        let displacement = frame.map_or(Vec2::ZERO, |frame| frame.scroll.diff.displacement);
        let mut target = page_margin_box + displacement;
        if let Some(growth) = placeholder {
            target = axis.extend_end(target, axis.component(growth.increased_by));
        }
        let active = match frame {
            Some(frame) if frame.should_clip_subject => clip(frame.page_margin_box, target),
            _ => Some(target),
        };
        Self {
            page_margin_box,
            placeholder,
            active,
        }
    }
}

/// A measured droppable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DroppableDimension {
    /// Identity.
    pub descriptor: DroppableDescriptor,
    /// Layout axis.
    pub axis: Axis,
    /// Disabled droppables are never targeted.
    pub is_enabled: bool,
    /// Whether items may be combined into siblings in this list.
    pub is_combine_enabled: bool,
    /// Viewport-relative boxes.
    pub client: BoxModel,
    /// Document-relative boxes.
    pub page: BoxModel,
    /// Closest scroll container, if any.
    pub frame: Option<ScrollFrame>,
    /// Currently targetable region.
    pub subject: Subject,
}

impl DroppableDimension {
    /// Builds an enabled, non-combining, unscrolled droppable.
    #[must_use]
    pub fn new(
        descriptor: DroppableDescriptor,
        axis: Axis,
        client: BoxModel,
        window_scroll: Vec2,
    ) -> Self {
        let page = client.with_scroll(window_scroll);
        Self {
            descriptor,
            axis,
            is_enabled: true,
            is_combine_enabled: false,
            client,
            page,
            frame: None,
            subject: Subject::compute(page.margin_box, axis, None, None),
        }
    }

    /// Attaches a scroll container.
    #[must_use]
    pub fn with_frame(mut self, frame: ScrollFrame) -> Self {
        self.frame = Some(frame);
        self.refresh_subject()
    }

    /// Sets whether the droppable can be targeted.
    #[must_use]
    pub fn with_enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = is_enabled;
        self
    }

    /// Sets whether combining is allowed.
    #[must_use]
    pub fn with_combine_enabled(mut self, is_combine_enabled: bool) -> Self {
        self.is_combine_enabled = is_combine_enabled;
        self
    }

    /// Shorthand for the descriptor id.
    #[must_use]
    pub fn id(&self) -> DroppableId {
        self.descriptor.id
    }

    /// Whether this is a virtual list.
    #[must_use]
    pub fn is_virtual(&self) -> bool {
        self.descriptor.mode == DroppableMode::Virtual
    }

    /// How far the frame has scrolled since lift.
    #[must_use]
    pub fn scroll_diff(&self) -> Vec2 {
        self.frame.map_or(Vec2::ZERO, |frame| frame.scroll.diff.value)
    }

    /// How far content has moved on screen because of the frame's scroll.
    #[must_use]
    pub fn scroll_displacement(&self) -> Vec2 {
        self.frame
            .map_or(Vec2::ZERO, |frame| frame.scroll.diff.displacement)
    }

    /// Returns the droppable with its frame scrolled to `current`.
    pub fn scrolled(&self, current: Vec2) -> Result<Self, DragError> {
        let Some(frame) = self.frame else {
            return Err(DragError::NotScrollable(self.id()));
        };
        let mut next = *self;
        next.frame = Some(ScrollFrame {
            scroll: frame.scroll.scrolled(current),
            ..frame
        });
        Ok(next.refresh_subject())
    }

    /// Grows a foreign droppable so the dragging item fits.
    ///
    /// `inside` is the ordered content of this droppable. Standard lists only
    /// grow by what their content box is missing; virtual lists always grow by
    /// the full placeholder size.
    pub fn with_placeholder(
        &self,
        dragging: &DraggableDimension,
        inside: &[&DraggableDimension],
    ) -> Result<Self, DragError> {
        if dragging.descriptor.droppable_id == self.id() {
            return Err(DragError::PlaceholderInHome(self.id()));
        }
        if self.subject.placeholder.is_some() {
            return Err(DragError::PlaceholderAlreadyAdded(self.id()));
        }
        let axis = self.axis;
        let size = dragging.displace_by;
        let increased_by = if self.is_virtual() {
            axis.only(size)
        } else {
            let available = axis.size(self.page.content_box);
            let used: f64 = inside
                .iter()
                .map(|item| axis.size(item.client.margin_box))
                .sum();
            let needed = used + axis.component(size) - available;
            if needed <= 0.0 {
                Vec2::ZERO
            } else {
                axis.patch(needed, 0.0)
            }
        };

        let mut next = *self;
        let old_frame_max_scroll = self.frame.map(|frame| frame.scroll.max);
        if let Some(frame) = &mut next.frame {
            frame.scroll = frame.scroll.with_max(frame.scroll.max + increased_by);
        }
        next.subject.placeholder = Some(PlaceholderGrowth {
            size,
            increased_by,
            old_frame_max_scroll,
        });
        Ok(next.refresh_subject())
    }

    /// Undoes [`Self::with_placeholder`]. A droppable without a placeholder is
    /// returned unchanged.
    #[must_use]
    pub fn without_placeholder(&self) -> Self {
        let mut next = *self;
        let Some(growth) = next.subject.placeholder.take() else {
            return next;
        };
        if let (Some(frame), Some(max)) = (&mut next.frame, growth.old_frame_max_scroll) {
            frame.scroll = frame.scroll.with_max(max);
        }
        next.refresh_subject()
    }

    fn refresh_subject(mut self) -> Self {
        self.subject = Subject::compute(
            self.subject.page_margin_box,
            self.axis,
            self.frame.as_ref(),
            self.subject.placeholder,
        );
        self
    }
}
