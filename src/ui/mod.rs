// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`carousel`] - Swipeable carousel with snapping and pagination
//! - [`pagination`] - Pagination dots and their row view
//!
//! # Shared Infrastructure
//!
//! - [`animation`] - Spring physics and eased scroll glides
//! - [`state`] - Reusable state management (viewport, scroll sampling)
//! - [`styles`] - Centralized styling (containers, dots)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod animation;
pub mod carousel;
pub mod design_tokens;
pub mod pagination;
pub mod state;
pub mod styles;
pub mod theming;
