// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The window viewport in page coordinates.

use kurbo::{Rect, Vec2};

use crate::scroll::ScrollDetails;

/// The visible part of the page.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Visible area in page coordinates. Its origin is the window scroll.
    pub frame: Rect,
    /// Window scroll state.
    pub scroll: ScrollDetails,
}

impl Viewport {
    /// A viewport showing `frame`, with the window scroll taken from its origin.
    #[must_use]
    pub fn new(frame: Rect, max_scroll: Vec2) -> Self {
        Self {
            frame,
            scroll: ScrollDetails::new(frame.origin().to_vec2(), max_scroll),
        }
    }

    /// Returns the viewport after the window scrolled to `current`.
    ///
    /// The offset is taken as given; callers that scroll past `max` get a
    /// frame past the end of the page.
    #[must_use]
    pub fn scrolled(self, current: Vec2) -> Self {
        Self {
            frame: Rect::from_origin_size(current.to_point(), self.frame.size()),
            scroll: self.scroll.scrolled(current),
        }
    }
}
