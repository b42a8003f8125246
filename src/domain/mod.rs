// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core carousel rules with ZERO external dependencies.
//!
//! This module contains pure value objects and the index arithmetic shared
//! by the carousel state and its tests. It depends on `std` only.
//!
//! # Modules
//!
//! - [`carousel`]: Carousel types ([`Orientation`](carousel::Orientation),
//!   [`ItemExtent`](carousel::ItemExtent), [`ActiveIndex`](carousel::ActiveIndex))

pub mod carousel;
