// SPDX-License-Identifier: MPL-2.0
//! Time-based tween that glides a scroll offset onto a snap point.

use std::time::{Duration, Instant};

/// Default length of a snap glide. Short, so a released drag decelerates
/// quickly onto the nearest item.
pub const DEFAULT_SNAP_DURATION: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy)]
struct Glide {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

/// Eases a scroll offset toward a target with a quadratic ease-out.
#[derive(Debug, Clone, Default)]
pub struct SnapAnimator {
    glide: Option<Glide>,
}

impl SnapAnimator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.glide.is_some()
    }

    /// Target of the running glide, if any.
    #[must_use]
    pub fn target(&self) -> Option<f32> {
        self.glide.map(|glide| glide.to)
    }

    pub fn start(&mut self, from: f32, to: f32, now: Instant) {
        self.start_with_duration(from, to, DEFAULT_SNAP_DURATION, now);
    }

    pub fn start_with_duration(&mut self, from: f32, to: f32, duration: Duration, now: Instant) {
        self.glide = Some(Glide {
            from,
            to,
            started_at: now,
            duration,
        });
    }

    /// Returns the offset for `now` while gliding, or `None` when inactive.
    ///
    /// The final call of a glide returns exactly the target and deactivates
    /// the animator.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let glide = self.glide?;
        let elapsed = now.saturating_duration_since(glide.started_at);
        if elapsed >= glide.duration {
            self.glide = None;
            return Some(glide.to);
        }

        let t = (elapsed.as_secs_f32() / glide.duration.as_secs_f32()).clamp(0.0, 1.0);
        Some(glide.from + (glide.to - glide.from) * ease_out(t))
    }

    pub fn cancel(&mut self) {
        self.glide = None;
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}
