// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::radius;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Default carousel container: transparent, so the caller's items decide
/// what the carousel looks like.
pub fn carousel(_theme: &Theme) -> container::Style {
    container::Style::default()
}

/// Card surface used by the demo application for each carousel item.
///
/// The color is supplied by the caller; the border radius follows the
/// design tokens so cards look the same in light and dark modes.
pub fn card(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(Background::Color(color)),
            text_color: Some(palette.background.base.text),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
