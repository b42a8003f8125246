// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Carousel**: Scroll sampling and snapping
//! - **Screen**: Fallback screen size used for item extents
//! - **Demo**: Demo application content

use std::time::Duration;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Minimum interval between two sampled scroll reports (~60 per second).
pub const SCROLL_EVENT_THROTTLE: Duration = Duration::from_millis(16);

/// Idle time after the last scroll report before the carousel snaps.
pub const SNAP_SETTLE_DELAY: Duration = Duration::from_millis(80);

/// Index the carousel starts at.
pub const DEFAULT_INDEX: i32 = 0;

// ==========================================================================
// Screen Defaults
// ==========================================================================

/// Screen width assumed until the window reports its size.
pub const DEFAULT_SCREEN_WIDTH: f32 = 800.0;

/// Screen height assumed until the window reports its size.
pub const DEFAULT_SCREEN_HEIGHT: f32 = 650.0;

// ==========================================================================
// Demo Defaults
// ==========================================================================

/// Number of cards shown by the demo application.
pub const DEFAULT_DEMO_ITEM_COUNT: usize = 5;

/// Card width used by the demo application when none is configured.
pub const DEFAULT_DEMO_ITEM_WIDTH: f32 = 300.0;

/// Maximum number of cards the demo application accepts.
pub const MAX_DEMO_ITEM_COUNT: usize = 200;
