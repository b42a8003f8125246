// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Handles the scrollable viewport state including bounds and scroll offset.

use crate::domain::carousel::Orientation;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Rectangle;

/// Manages viewport and scroll state
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Current viewport bounds
    pub bounds: Option<Rectangle>,

    /// Bounds of the scrolled content
    pub content_bounds: Option<Rectangle>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            bounds: None,
            content_bounds: None,
        }
    }
}

/// Offsets closer than this to a snap point count as aligned.
const ALIGNMENT_TOLERANCE: f32 = 0.5;

impl ViewportState {
    /// Records a new viewport report from the scrollable.
    pub fn update(&mut self, bounds: Rectangle, content_bounds: Rectangle, offset: AbsoluteOffset) {
        self.offset = offset;
        self.bounds = Some(bounds);
        self.content_bounds = Some(content_bounds);
    }

    /// Scroll offset along the carousel axis.
    #[must_use]
    pub fn offset_along(&self, orientation: Orientation) -> f32 {
        orientation.along(self.offset.x, self.offset.y)
    }

    /// Largest reachable offset along the carousel axis, once both the
    /// viewport and its content have been reported.
    #[must_use]
    pub fn max_offset_along(&self, orientation: Orientation) -> Option<f32> {
        let bounds = self.bounds?;
        let content = self.content_bounds?;
        let visible = orientation.along(bounds.width, bounds.height);
        let total = orientation.along(content.width, content.height);
        Some((total - visible).max(0.0))
    }

    /// Returns whether the current offset sits on `target`.
    #[must_use]
    pub fn is_aligned_with(&self, orientation: Orientation, target: f32) -> bool {
        (self.offset_along(orientation) - target).abs() < ALIGNMENT_TOLERANCE
    }
}
