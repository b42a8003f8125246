// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a single carousel.
//!
//! The `App` struct loads `settings.toml`, lets command-line flags override
//! it, and forwards carousel messages to the carousel state. Snap reports
//! coming back as [`carousel::Effect`]s drive the status line.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{
    self, Config, DEFAULT_DEMO_ITEM_WIDTH, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH,
    MAX_DEMO_ITEM_COUNT,
};
use crate::ui::carousel;
use crate::ui::design_tokens::palette;
use crate::ui::theming::ThemeMode;
use iced::{window, Color, Element, Size, Subscription, Task, Theme};
use std::fmt;

/// Colors cycled through by the demo cards.
const CARD_COLORS: [Color; 4] = [
    palette::ACCENT_CORAL,
    palette::ACCENT_AMBER,
    palette::ACCENT_TEAL,
    palette::ACCENT_VIOLET,
];

pub const MIN_WINDOW_HEIGHT: f32 = 400.0;
pub const MIN_WINDOW_WIDTH: f32 = 400.0;

/// One demo card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Card {
    /// One-based number shown on the card.
    pub number: usize,
    pub color: Color,
}

/// Builds `count` numbered cards.
#[must_use]
pub fn demo_cards(count: usize) -> Vec<Card> {
    (0..count).map(card_at).collect()
}

fn card_at(index: usize) -> Card {
    Card {
        number: index + 1,
        color: CARD_COLORS[index % CARD_COLORS.len()],
    }
}

/// Applies command-line flags on top of the loaded configuration.
pub fn apply_flags(config: &mut Config, flags: &Flags) {
    let section = &mut config.carousel;
    if let Some(orientation) = flags.orientation {
        section.orientation = orientation;
    }
    section.item_width = flags
        .item_width
        .or(section.item_width)
        .or(Some(DEFAULT_DEMO_ITEM_WIDTH));
    if flags.item_height.is_some() {
        section.item_height = flags.item_height;
    }
    if let Some(index) = flags.default_index {
        section.default_index = index;
    }
    if flags.pagination {
        section.with_pagination = true;
    }
    if let Some(items) = flags.items {
        config.demo.item_count = items;
    }
    config.demo.item_count = config.demo.item_count.min(MAX_DEMO_ITEM_COUNT);
}

/// Root Iced application state.
pub struct App {
    carousel: carousel::State,
    cards: Vec<Card>,
    theme_mode: ThemeMode,
    /// Last item reported by the carousel.
    snapped: Option<i32>,
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("cards", &self.cards.len())
            .field("snapped", &self.snapped)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires Fn for boot; the flags are only consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        apply_flags(&mut config, &flags);
        Self::with_config(&config, config_warning)
    }

    /// Builds the application from an already resolved configuration.
    pub fn with_config(config: &Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let cards = demo_cards(config.demo.item_count);
        let screen = Size::new(DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT);
        let (carousel, task) = carousel::State::new((&config.carousel).into(), cards.len(), screen);

        let app = Self {
            carousel,
            cards,
            theme_mode: config.general.theme_mode,
            snapped: None,
            config_warning,
        };
        (app, task.map(Message::Carousel))
    }

    fn title(&self) -> String {
        match self.snapped {
            Some(index) => format!("Iced Carousel ({})", index + 1),
            None => "Iced Carousel".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.carousel)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Carousel(message) => {
                let (effect, task) = self.carousel.update(message);
                if let carousel::Effect::SnapItem(index) = effect {
                    self.snapped = Some(index);
                }
                task.map(Message::Carousel)
            }
            Message::AddItem => {
                if self.cards.len() < MAX_DEMO_ITEM_COUNT {
                    self.cards.push(card_at(self.cards.len()));
                }
                self.sync_cards()
            }
            Message::RemoveItem => {
                self.cards.pop();
                self.sync_cards()
            }
        }
    }

    fn sync_cards(&mut self) -> Task<Message> {
        self.carousel
            .sync_item_count(self.cards.len())
            .map(Message::Carousel)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            carousel: &self.carousel,
            cards: &self.cards,
            theme_mode: self.theme_mode,
            snapped: self.snapped,
            config_warning: self.config_warning.as_deref(),
        })
    }

    #[must_use]
    pub fn carousel(&self) -> &carousel::State {
        &self.carousel
    }

    #[must_use]
    pub fn snapped(&self) -> Option<i32> {
        self.snapped
    }
}
