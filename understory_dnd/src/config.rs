// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-session tunables.

/// Fraction of a sibling's main-axis size reserved for reordering on each
/// edge. The remaining middle band triggers a combine.
pub const DEFAULT_COMBINE_THRESHOLD: f64 = 0.2;

/// Tunables for impact computation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragConfig {
    /// See [`DEFAULT_COMBINE_THRESHOLD`]. Values are clamped to `[0, 0.5]`
    /// when used.
    pub combine_threshold: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            combine_threshold: DEFAULT_COMBINE_THRESHOLD,
        }
    }
}

impl DragConfig {
    /// Sets the combine threshold.
    #[must_use]
    pub fn with_combine_threshold(mut self, combine_threshold: f64) -> Self {
        self.combine_threshold = combine_threshold;
        self
    }

    pub(crate) fn edge_fraction(&self) -> f64 {
        self.combine_threshold.clamp(0.0, 0.5)
    }
}
