// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::{Card, Message};
use crate::domain::carousel::{ActiveIndex, Orientation};
use crate::ui::carousel::{self, Carousel};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles::{self, DotStyle};
use crate::ui::theming::ThemeMode;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub carousel: &'a carousel::State,
    pub cards: &'a [Card],
    pub theme_mode: ThemeMode,
    pub snapped: Option<i32>,
    pub config_warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let orientation = ctx.carousel.config().orientation;
    let extent = ctx.carousel.item_extent().value();

    let carousel = Carousel::new(
        ctx.carousel,
        ctx.cards,
        move |card, _| card_view(card, orientation, extent),
        Message::Carousel,
    )
    .active_dot_style(DotStyle {
        color: Some(ctx.theme_mode.accent()),
        ..DotStyle::default()
    });

    let status = text(status_line(ctx.snapped, ctx.cards.len()));

    let controls = Row::new()
        .spacing(spacing::XS)
        .push(button(text("Add card")).on_press(Message::AddItem))
        .push(button(text("Remove card")).on_press_maybe(
            (!ctx.cards.is_empty()).then_some(Message::RemoveItem),
        ));

    let mut column = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(status)
        .push(carousel)
        .push(controls);

    if let Some(warning) = ctx.config_warning {
        column = column.push(text(warning).size(12));
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn card_view(card: &Card, orientation: Orientation, extent: f32) -> Element<'_, Message> {
    let (width, height) = match orientation {
        Orientation::Horizontal => (Length::Fixed(extent), Length::Fixed(sizing::CARD_CROSS)),
        Orientation::Vertical => (Length::Fill, Length::Fixed(extent)),
    };

    let face = Container::new(text(format!("Card {}", card.number)).size(28))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::card(card.color));

    Container::new(face)
        .width(width)
        .height(height)
        .padding(spacing::XS)
        .into()
}

fn status_line(snapped: Option<i32>, len: usize) -> String {
    match snapped.and_then(|index| ActiveIndex::new(index).position(len)) {
        Some(position) => format!("Item {} of {len}", position + 1),
        None if len == 0 => "No items".to_string(),
        None => format!("{len} items"),
    }
}
