// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is a swipeable, snapping carousel widget for the Iced GUI
//! framework, with optional animated pagination dots.
//!
//! The widget lives in [`ui::carousel`]; [`app`] is a small demo built on it.

#![doc(html_root_url = "https://docs.rs/iced_carousel/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
