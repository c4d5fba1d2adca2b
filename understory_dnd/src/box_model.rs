// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS-style box model: margin, border, padding and content boxes.

use kurbo::{Insets, Rect, Vec2};

/// The nested boxes of a measured element.
///
/// The border box is the measured rectangle. The margin box grows it by
/// `margin`; the padding box shrinks it by `border`; the content box shrinks
/// the padding box by `padding`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxModel {
    /// Border box grown by the margin.
    pub margin_box: Rect,
    /// The measured rectangle.
    pub border_box: Rect,
    /// Border box shrunk by the border.
    pub padding_box: Rect,
    /// Padding box shrunk by the padding.
    pub content_box: Rect,
    /// Margin widths.
    pub margin: Insets,
    /// Border widths.
    pub border: Insets,
    /// Padding widths.
    pub padding: Insets,
}

impl BoxModel {
    /// Derives every box from a border box and its spacing.
    #[must_use]
    pub fn new(border_box: Rect, margin: Insets, border: Insets, padding: Insets) -> Self {
        let padding_box = border_box - border;
        Self {
            margin_box: border_box + margin,
            border_box,
            padding_box,
            content_box: padding_box - padding,
            margin,
            border,
            padding,
        }
    }

    /// A box model with no margin, border or padding.
    #[must_use]
    pub fn from_border_box(border_box: Rect) -> Self {
        Self::new(border_box, Insets::ZERO, Insets::ZERO, Insets::ZERO)
    }

    /// Returns the same box with a different margin.
    #[must_use]
    pub fn with_margin(self, margin: Insets) -> Self {
        Self::new(self.border_box, margin, self.border, self.padding)
    }

    /// Shifts every box by `by`.
    #[must_use]
    pub fn offset(self, by: Vec2) -> Self {
        Self {
            margin_box: self.margin_box + by,
            border_box: self.border_box + by,
            padding_box: self.padding_box + by,
            content_box: self.content_box + by,
            ..self
        }
    }

    /// Converts a viewport-relative box into a page-relative one given the
    /// window scroll offset.
    #[must_use]
    pub fn with_scroll(self, scroll: Vec2) -> Self {
        self.offset(scroll)
    }
}
