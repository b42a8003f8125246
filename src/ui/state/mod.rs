// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Scroll bookkeeping shared by scrollable components, kept apart from the
//! components themselves so it can be tested without a running application.

pub mod sampler;
pub mod viewport;

pub use sampler::ScrollSampler;
pub use viewport::ViewportState;
