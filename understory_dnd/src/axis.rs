// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Main/cross axis descriptors and small direction enums.
//!
//! Almost every computation in this crate is one-dimensional along the main
//! axis of a droppable. [`Axis`] reads the relevant edge, size, or coordinate
//! out of `kurbo` values so that the algorithms can be written once for both
//! vertical and horizontal lists.

use kurbo::{Insets, Point, Rect, Vec2};

/// Layout axis of a droppable list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Items are stacked top to bottom.
    #[default]
    Vertical,
    /// Items are laid out left to right.
    Horizontal,
}

/// One of the two edges of a rectangle along an axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// The lower coordinate edge (top or left).
    Start,
    /// The higher coordinate edge (bottom or right).
    End,
}

/// Direction of travel along a main axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Travel {
    /// Toward larger coordinates (down or right).
    Forward,
    /// Toward smaller coordinates (up or left).
    Backward,
}

impl Travel {
    /// Returns the travel direction for a boolean "moving forward" flag.
    #[must_use]
    pub const fn from_forward(is_moving_forward: bool) -> Self {
        if is_moving_forward {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    /// Returns `true` for [`Travel::Forward`].
    #[must_use]
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    /// The edge of a moving rectangle that leads in this direction.
    #[must_use]
    pub const fn leading_edge(self) -> Edge {
        match self {
            Self::Forward => Edge::End,
            Self::Backward => Edge::Start,
        }
    }
}

impl Axis {
    /// Returns the perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// Returns the start edge of `rect` on this axis.
    #[must_use]
    pub fn start(self, rect: Rect) -> f64 {
        match self {
            Self::Vertical => rect.y0,
            Self::Horizontal => rect.x0,
        }
    }

    /// Returns the end edge of `rect` on this axis.
    #[must_use]
    pub fn end(self, rect: Rect) -> f64 {
        match self {
            Self::Vertical => rect.y1,
            Self::Horizontal => rect.x1,
        }
    }

    /// Returns the requested edge of `rect` on this axis.
    #[must_use]
    pub fn edge(self, rect: Rect, edge: Edge) -> f64 {
        match edge {
            Edge::Start => self.start(rect),
            Edge::End => self.end(rect),
        }
    }

    /// Returns the extent of `rect` on this axis.
    #[must_use]
    pub fn size(self, rect: Rect) -> f64 {
        match self {
            Self::Vertical => rect.height(),
            Self::Horizontal => rect.width(),
        }
    }

    /// Returns the start edge of `rect` on the cross axis.
    #[must_use]
    pub fn cross_start(self, rect: Rect) -> f64 {
        self.cross().start(rect)
    }

    /// Returns the end edge of `rect` on the cross axis.
    #[must_use]
    pub fn cross_end(self, rect: Rect) -> f64 {
        self.cross().end(rect)
    }

    /// Returns the extent of `rect` on the cross axis.
    #[must_use]
    pub fn cross_size(self, rect: Rect) -> f64 {
        self.cross().size(rect)
    }

    /// Returns the coordinate of `point` on this axis.
    #[must_use]
    pub fn line(self, point: Point) -> f64 {
        match self {
            Self::Vertical => point.y,
            Self::Horizontal => point.x,
        }
    }

    /// Returns the coordinate of `point` on the cross axis.
    #[must_use]
    pub fn cross_line(self, point: Point) -> f64 {
        self.cross().line(point)
    }

    /// Returns the component of `vec` on this axis.
    #[must_use]
    pub fn component(self, vec: Vec2) -> f64 {
        match self {
            Self::Vertical => vec.y,
            Self::Horizontal => vec.x,
        }
    }

    /// Builds a vector from a value on this axis and a value on the cross axis.
    #[must_use]
    pub fn patch(self, value: f64, other: f64) -> Vec2 {
        match self {
            Self::Vertical => Vec2::new(other, value),
            Self::Horizontal => Vec2::new(value, other),
        }
    }

    /// Builds a point from a value on this axis and a value on the cross axis.
    #[must_use]
    pub fn point(self, value: f64, other: f64) -> Point {
        self.patch(value, other).to_point()
    }

    /// Keeps only the component of `vec` on this axis.
    #[must_use]
    pub fn only(self, vec: Vec2) -> Vec2 {
        self.patch(self.component(vec), 0.0)
    }

    /// Moves the end edge of `rect` on this axis by `amount`.
    #[must_use]
    pub fn extend_end(self, rect: Rect, amount: f64) -> Rect {
        match self {
            Self::Vertical => Rect { y1: rect.y1 + amount, ..rect },
            Self::Horizontal => Rect { x1: rect.x1 + amount, ..rect },
        }
    }

    /// Returns the inset on the start side of this axis.
    #[must_use]
    pub fn inset_start(self, insets: Insets) -> f64 {
        match self {
            Self::Vertical => insets.y0,
            Self::Horizontal => insets.x0,
        }
    }

    /// Returns the inset on the end side of this axis.
    #[must_use]
    pub fn inset_end(self, insets: Insets) -> f64 {
        match self {
            Self::Vertical => insets.y1,
            Self::Horizontal => insets.x1,
        }
    }

    /// Returns the direction of `delta` along this axis, if it has one.
    #[must_use]
    pub fn travel_of(self, delta: f64) -> Option<Travel> {
        if delta > 0.0 {
            Some(Travel::Forward)
        } else if delta < 0.0 {
            Some(Travel::Backward)
        } else {
            None
        }
    }
}

/// Most recent vertical pointer direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalDirection {
    /// Toward the top of the page.
    Up,
    /// Toward the bottom of the page.
    #[default]
    Down,
}

/// Most recent horizontal pointer direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalDirection {
    /// Toward the left of the page.
    Left,
    /// Toward the right of the page.
    #[default]
    Right,
}

/// The direction the user most recently moved on each axis.
///
/// A movement with no change on an axis keeps the previous direction for that
/// axis, so a purely horizontal drag does not forget that the user was last
/// heading down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct UserDirection {
    /// Last vertical direction.
    pub vertical: VerticalDirection,
    /// Last horizontal direction.
    pub horizontal: HorizontalDirection,
}

impl UserDirection {
    /// Folds a pointer movement delta into the direction.
    #[must_use]
    pub fn updated(self, delta: Vec2) -> Self {
        let vertical = if delta.y > 0.0 {
            VerticalDirection::Down
        } else if delta.y < 0.0 {
            VerticalDirection::Up
        } else {
            self.vertical
        };
        let horizontal = if delta.x > 0.0 {
            HorizontalDirection::Right
        } else if delta.x < 0.0 {
            HorizontalDirection::Left
        } else {
            self.horizontal
        };
        Self {
            vertical,
            horizontal,
        }
    }

    /// Returns the direction of travel along `axis`.
    #[must_use]
    pub fn along(self, axis: Axis) -> Travel {
        match axis {
            Axis::Vertical => match self.vertical {
                VerticalDirection::Down => Travel::Forward,
                VerticalDirection::Up => Travel::Backward,
            },
            Axis::Horizontal => match self.horizontal {
                HorizontalDirection::Right => Travel::Forward,
                HorizontalDirection::Left => Travel::Backward,
            },
        }
    }
}
