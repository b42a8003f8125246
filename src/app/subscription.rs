// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::ui::carousel;
use iced::{event, window, Subscription};

/// Window resizes feed the carousel's fallback item extent; frames are
/// only requested while the carousel is moving.
pub fn create_subscription(carousel: &carousel::State) -> Subscription<Message> {
    let resize = event::listen_with(|event, _status, _window| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::Carousel(
            carousel::Message::ScreenResized(size),
        )),
        _ => None,
    });

    Subscription::batch([resize, carousel.subscription().map(Message::Carousel)])
}
