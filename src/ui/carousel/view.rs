// SPDX-License-Identifier: MPL-2.0
//! Carousel view builder.

use super::{Message as CarouselMessage, State};
use crate::domain::carousel::Orientation;
use crate::ui::pagination::pagination_row;
use crate::ui::styles::{self, DotStyle, PaginationStyle};
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{container, Column, Container, Row, Scrollable};
use iced::{Element, Length, Theme};

type RenderItem<'a, T, Message> = Box<dyn Fn(&'a T, usize) -> Element<'a, Message> + 'a>;
type ContainerStyle<'a> = Box<dyn Fn(&Theme) -> container::Style + 'a>;

/// Builds the carousel view for a [`State`].
///
/// `render_item` receives each item with its index; `on_event` wraps
/// carousel messages into the caller's message type.
pub struct Carousel<'a, T, Message> {
    state: &'a State,
    data: &'a [T],
    render_item: RenderItem<'a, T, Message>,
    on_event: Box<dyn Fn(CarouselMessage) -> Message + 'a>,
    style: Option<ContainerStyle<'a>>,
    pagination_style: PaginationStyle,
    dot_style: Option<DotStyle>,
    active_dot_style: Option<DotStyle>,
}

impl<'a, T, Message: 'a> Carousel<'a, T, Message> {
    pub fn new(
        state: &'a State,
        data: &'a [T],
        render_item: impl Fn(&'a T, usize) -> Element<'a, Message> + 'a,
        on_event: impl Fn(CarouselMessage) -> Message + 'a,
    ) -> Self {
        Self {
            state,
            data,
            render_item: Box::new(render_item),
            on_event: Box::new(on_event),
            style: None,
            pagination_style: PaginationStyle::default(),
            dot_style: None,
            active_dot_style: None,
        }
    }

    /// Style of the outer container.
    #[must_use]
    pub fn style(mut self, style: impl Fn(&Theme) -> container::Style + 'a) -> Self {
        self.style = Some(Box::new(style));
        self
    }

    #[must_use]
    pub fn pagination_style(mut self, style: PaginationStyle) -> Self {
        self.pagination_style = style;
        self
    }

    /// Overrides applied to every dot.
    #[must_use]
    pub fn dot_style(mut self, style: DotStyle) -> Self {
        self.dot_style = Some(style);
        self
    }

    /// Overrides applied to the active dot, on top of [`Self::dot_style`].
    #[must_use]
    pub fn active_dot_style(mut self, style: DotStyle) -> Self {
        self.active_dot_style = Some(style);
        self
    }

    /// Whether the pagination row is part of the view.
    #[must_use]
    pub fn shows_pagination(&self) -> bool {
        self.state.config().with_pagination
    }

    fn into_element(self) -> Element<'a, Message> {
        let show_pagination = self.shows_pagination();
        let Self {
            state,
            data,
            render_item,
            on_event,
            style,
            pagination_style,
            dot_style,
            active_dot_style,
        } = self;

        let orientation = state.config().orientation;
        let items = data
            .iter()
            .enumerate()
            .map(|(index, item)| render_item(item, index));

        let (content, direction): (Element<'a, Message>, _) = match orientation {
            Orientation::Horizontal => (
                Row::with_children(items).into(),
                Direction::Horizontal(Scrollbar::hidden()),
            ),
            Orientation::Vertical => (
                Column::with_children(items).into(),
                Direction::Vertical(Scrollbar::hidden()),
            ),
        };

        let scrollable = Scrollable::with_direction(content, direction)
            .id(state.scrollable_id().clone())
            .width(Length::Fill)
            .height(match orientation {
                Orientation::Horizontal => Length::Shrink,
                Orientation::Vertical => Length::Fill,
            })
            .on_scroll(move |viewport: Viewport| {
                on_event(CarouselMessage::Scrolled {
                    bounds: viewport.bounds(),
                    content_bounds: viewport.content_bounds(),
                    offset: viewport.absolute_offset(),
                })
            });

        let mut column = Column::new().push(scrollable).width(Length::Fill);
        if show_pagination {
            column = column.push(pagination_row(
                state.pagination().dots(),
                state.active_index(),
                pagination_style,
                dot_style,
                active_dot_style,
                state.now(),
            ));
        }

        let container = Container::new(column).width(Length::Fill);
        match style {
            Some(style) => container.style(style).into(),
            None => container.style(styles::container::carousel).into(),
        }
    }
}

impl<'a, T, Message: 'a> From<Carousel<'a, T, Message>> for Element<'a, Message> {
    fn from(carousel: Carousel<'a, T, Message>) -> Self {
        carousel.into_element()
    }
}
