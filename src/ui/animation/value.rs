// SPDX-License-Identifier: MPL-2.0
//! Animated scalar values.

use super::spring::{Spring, SpringConfig};
use std::time::Instant;

/// How a value moves to a new target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Jump straight to the target.
    Immediate,
    /// Follow a damped spring from the current position and velocity.
    Spring(SpringConfig),
}

/// A value that is retargeted rather than assigned.
///
/// Setting a new target while a spring is still in flight supersedes it:
/// the new spring starts from the sampled position and velocity, so the
/// motion stays continuous.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    target: f32,
    motion: Option<Spring>,
}

impl AnimatedValue {
    /// Creates a value resting at `value`.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            target: value,
            motion: None,
        }
    }

    /// Retargets the value.
    pub fn set_target(&mut self, target: f32, transition: Transition, now: Instant) {
        match transition {
            Transition::Immediate => {
                self.motion = None;
            }
            Transition::Spring(config) => {
                let (position, velocity) = self.sample(now);
                self.motion = Some(Spring::new(config, position, target, velocity, now));
            }
        }
        self.target = target;
    }

    /// The value the motion is heading to.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Current value at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        self.sample(now).0
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.motion
            .as_ref()
            .is_some_and(|spring| !spring.is_settled(now))
    }

    /// Drops a spring that has come to rest.
    pub fn settle(&mut self, now: Instant) {
        if !self.is_animating(now) {
            self.motion = None;
        }
    }

    fn sample(&self, now: Instant) -> (f32, f32) {
        match &self.motion {
            Some(spring) if !spring.is_settled(now) => spring.sample(now),
            _ => (self.target, 0.0),
        }
    }
}
