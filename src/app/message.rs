// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::domain::carousel::Orientation;
use crate::ui::carousel;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Carousel(carousel::Message),
    /// Append a card to the demo content.
    AddItem,
    /// Remove the last card.
    RemoveItem,
}

/// Runtime flags passed from the command line. Every flag overrides the
/// matching `settings.toml` value when present.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub orientation: Option<Orientation>,
    pub item_width: Option<f32>,
    pub item_height: Option<f32>,
    pub default_index: Option<i32>,
    /// Number of demo cards.
    pub items: Option<usize>,
    /// Forces the pagination dots on.
    pub pagination: bool,
    /// Optional config directory override (from `--config-dir`).
    pub config_dir: Option<String>,
}
