// SPDX-License-Identifier: MPL-2.0
//! Declarative animation primitives.
//!
//! Components never run their own timers. They declare a target through
//! [`AnimatedValue::set_target`] (or [`SnapAnimator::start`]) and sample the
//! current value at the `Instant` delivered by the frame subscription.

pub mod snap;
pub mod spring;
pub mod value;

pub use snap::SnapAnimator;
pub use spring::{Spring, SpringConfig};
pub use value::{AnimatedValue, Transition};
