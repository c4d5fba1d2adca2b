// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll offsets captured at lift and tracked through the drag.

use kurbo::Vec2;

/// How far a scroll container has moved since the drag started.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollDiff {
    /// `current - initial`.
    pub value: Vec2,
    /// How far content moved on screen because of the scroll: `-value`.
    pub displacement: Vec2,
}

/// Scroll state of a window or scroll container.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollDetails {
    /// Scroll offset when the drag started.
    pub initial: Vec2,
    /// Scroll offset now.
    pub current: Vec2,
    /// Largest reachable scroll offset.
    pub max: Vec2,
    /// Derived from `initial` and `current`.
    pub diff: ScrollDiff,
}

impl ScrollDetails {
    /// Scroll state at lift time.
    #[must_use]
    pub fn new(initial: Vec2, max: Vec2) -> Self {
        Self {
            initial,
            current: initial,
            max,
            diff: ScrollDiff::default(),
        }
    }

    /// Returns the state after scrolling to `current`.
    #[must_use]
    pub fn scrolled(self, current: Vec2) -> Self {
        let value = current - self.initial;
        Self {
            current,
            diff: ScrollDiff {
                value,
                displacement: -value,
            },
            ..self
        }
    }

    /// Returns the state with a different maximum scroll.
    #[must_use]
    pub fn with_max(self, max: Vec2) -> Self {
        Self { max, ..self }
    }
}
