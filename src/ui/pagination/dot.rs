// SPDX-License-Identifier: MPL-2.0
//! A single pagination dot.
//!
//! A dot has two resting widths, [`dot_width::INACTIVE`] and
//! [`dot_width::ACTIVE`]. Flipping its status retargets the width through a
//! spring; the width is never assigned directly after construction.

use crate::domain::carousel::dot_width;
use crate::ui::animation::{AnimatedValue, SpringConfig, Transition};
use std::time::{Duration, Instant};

/// Duration hint for the width spring.
pub const DOT_SPRING_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone)]
pub struct PaginationDot {
    active: bool,
    width: AnimatedValue,
}

impl PaginationDot {
    /// Creates a dot resting at the width matching `active`.
    #[must_use]
    pub fn new(active: bool) -> Self {
        Self {
            active,
            width: AnimatedValue::new(dot_width::for_status(active)),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Updates the status. Returns `true` when it flipped and a width
    /// transition was started.
    pub fn set_active(&mut self, active: bool, now: Instant) -> bool {
        if self.active == active {
            return false;
        }
        self.active = active;
        self.width.set_target(
            dot_width::for_status(active),
            Transition::Spring(SpringConfig::with_duration(DOT_SPRING_DURATION)),
            now,
        );
        true
    }

    /// Width at `now`.
    #[must_use]
    pub fn width(&self, now: Instant) -> f32 {
        self.width.value(now)
    }

    /// Width the dot is heading to.
    #[must_use]
    pub fn target_width(&self) -> f32 {
        self.width.target()
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.width.is_animating(now)
    }

    pub fn settle(&mut self, now: Instant) {
        self.width.settle(now);
    }
}
