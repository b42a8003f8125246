// SPDX-License-Identifier: MPL-2.0
//! Swipeable carousel with optional pagination dots.
//!
//! The carousel follows the Elm-style "state down, messages up" pattern:
//!
//! - [`State`] owns the scrollable id, the active index, the snap animator
//!   and the pagination dots.
//! - [`Carousel`] builds the view from a `&State`, the caller's items and a
//!   rendering function.
//! - Scroll reports and frame ticks come back as [`Message`]s; the caller
//!   forwards them to [`State::update`], which returns an [`Effect`] telling
//!   the caller which item the carousel is on.
//!
//! ```ignore
//! let (carousel, task) = carousel::State::new(config, cards.len(), window_size);
//!
//! // view
//! Carousel::new(&self.carousel, &self.cards, |card, _| card_view(card), AppMessage::Carousel)
//!
//! // update
//! let (effect, task) = self.carousel.update(message);
//! if let carousel::Effect::SnapItem(index) = effect { /* ... */ }
//! ```

mod component;
mod view;

pub use component::{Effect, Message, State};
pub use view::Carousel;

use crate::config::defaults::DEFAULT_INDEX;
use crate::domain::carousel::Orientation;

/// Caller-supplied carousel settings.
///
/// Items, the rendering function and style overrides are given to the
/// [`Carousel`] view builder instead, since they are borrowed per view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub orientation: Orientation,
    /// Item width for horizontal carousels; the screen width when `None`.
    pub item_width: Option<f32>,
    /// Item height for vertical carousels; the screen height when `None`.
    pub item_height: Option<f32>,
    /// Index scrolled to when the carousel is mounted.
    pub default_index: i32,
    pub with_pagination: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            item_width: None,
            item_height: None,
            default_index: DEFAULT_INDEX,
            with_pagination: false,
        }
    }
}
