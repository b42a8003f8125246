// SPDX-License-Identifier: MPL-2.0
//! Damped spring motion.
//!
//! A spring is evaluated in closed form from its start state, so sampling at
//! an arbitrary `Instant` is cheap and frame-rate independent.

use std::time::{Duration, Instant};

/// Damping ratio used when a spring is configured from a duration.
pub const DEFAULT_DAMPING_RATIO: f32 = 0.5;

/// `ln(1 / 0.001)`: the oscillation envelope has decayed to 0.1 % of the
/// initial displacement after the configured duration.
const ENVELOPE_DECAY: f64 = 6.907_755_278_982_137;

/// Displacement from the target below which a spring counts as settled.
const REST_DISPLACEMENT: f64 = 0.01;

/// Speed (units per second) below which a spring counts as settled.
const REST_VELOCITY: f64 = 0.5;

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    #[must_use]
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Derives a spring that visibly settles within `duration`.
    ///
    /// The duration is a hint: the motion is still purely physical, it just
    /// picks a stiffness so that the envelope is negligible by then.
    #[must_use]
    pub fn with_duration(duration: Duration) -> Self {
        Self::with_duration_and_ratio(duration, DEFAULT_DAMPING_RATIO)
    }

    /// Same as [`SpringConfig::with_duration`] with an explicit damping ratio.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn with_duration_and_ratio(duration: Duration, damping_ratio: f32) -> Self {
        let seconds = duration.as_secs_f64().max(f64::EPSILON);
        let ratio = f64::from(damping_ratio).max(f64::EPSILON);
        let omega = ENVELOPE_DECAY / (ratio * seconds);
        let mass = 1.0_f64;

        Self {
            stiffness: (omega * omega * mass) as f32,
            damping: (2.0 * ratio * omega * mass) as f32,
            mass: mass as f32,
        }
    }

    /// Undamped angular frequency, in radians per second.
    #[must_use]
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Ratio of the damping to critical damping.
    #[must_use]
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// A spring moving a value from a start state toward a target.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    config: SpringConfig,
    from: f32,
    target: f32,
    velocity: f32,
    started_at: Instant,
}

impl Spring {
    /// Starts a spring at `from` with an initial `velocity`.
    #[must_use]
    pub fn new(
        config: SpringConfig,
        from: f32,
        target: f32,
        velocity: f32,
        started_at: Instant,
    ) -> Self {
        Self {
            config,
            from,
            target,
            velocity,
            started_at,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns `(position, velocity)` at `now`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn sample(&self, now: Instant) -> (f32, f32) {
        let (displacement, velocity) = self.displacement_at(now);
        (
            self.target + displacement as f32,
            velocity as f32,
        )
    }

    /// Returns whether the motion has come to rest at `now`.
    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        let (displacement, velocity) = self.displacement_at(now);
        displacement.abs() < REST_DISPLACEMENT && velocity.abs() < REST_VELOCITY
    }

    /// Displacement from the target and velocity at `now`.
    fn displacement_at(&self, now: Instant) -> (f64, f64) {
        let t = now.saturating_duration_since(self.started_at).as_secs_f64();
        let x0 = f64::from(self.from - self.target);
        let v0 = f64::from(self.velocity);
        let omega = f64::from(self.config.natural_frequency());
        let zeta = f64::from(self.config.damping_ratio());

        if !omega.is_finite() || omega <= 0.0 {
            return (x0, v0);
        }

        if zeta < 1.0 - 1e-6 {
            // Underdamped: decaying oscillation.
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let a = x0;
            let b = (v0 + zeta * omega * a) / omega_d;
            let envelope = (-zeta * omega * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            let x = envelope * (a * cos + b * sin);
            let v = envelope
                * ((b * omega_d - zeta * omega * a) * cos - (a * omega_d + zeta * omega * b) * sin);
            (x, v)
        } else if zeta > 1.0 + 1e-6 {
            // Overdamped: sum of two decaying exponentials.
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        } else {
            // Critically damped.
            let b = v0 + omega * x0;
            let envelope = (-omega * t).exp();
            let x = (x0 + b * t) * envelope;
            let v = (b - omega * (x0 + b * t)) * envelope;
            (x, v)
        }
    }
}
