// SPDX-License-Identifier: MPL-2.0
//! Pagination row view.

use super::PaginationDot;
use crate::domain::carousel::ActiveIndex;
use crate::ui::styles::pagination::{self as styles, DotStyle, PaginationStyle};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Container, Row, Space};
use iced::{Element, Length, Padding};
use std::time::Instant;

/// Everything needed to draw one dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotSpec {
    pub active: bool,
    pub width: f32,
    pub style: DotStyle,
}

/// Computes the dots of the row in index order.
#[must_use]
pub fn dot_specs(
    dots: &[PaginationDot],
    active_index: ActiveIndex,
    dot_style: Option<DotStyle>,
    active_dot_style: Option<DotStyle>,
    now: Instant,
) -> Vec<DotSpec> {
    dots.iter()
        .enumerate()
        .map(|(position, dot)| {
            let active = active_index.is(position);
            DotSpec {
                active,
                width: dot.width(now),
                style: styles::resolve_dot(active, dot_style, active_dot_style),
            }
        })
        .collect()
}

/// Renders one dot per entry of `dots`, centered in a row.
pub fn pagination_row<'a, Message: 'a>(
    dots: &[PaginationDot],
    active_index: ActiveIndex,
    style: PaginationStyle,
    dot_style: Option<DotStyle>,
    active_dot_style: Option<DotStyle>,
    now: Instant,
) -> Element<'a, Message> {
    let children = dot_specs(dots, active_index, dot_style, active_dot_style, now)
        .into_iter()
        .map(|spec| -> Element<'a, Message> {
            Container::new(Space::new())
                .width(Length::Fixed(spec.width))
                .height(Length::Fixed(spec.style.resolved_height()))
                .style(styles::dot(spec.style))
                .into()
        });

    let row = Row::with_children(children)
        .spacing(style.spacing)
        .align_y(Vertical::Center);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(Padding {
            top: style.margin_top,
            ..Padding::ZERO
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::pagination::Pagination;
    use iced::Color;

    #[test]
    fn one_spec_per_dot_in_order() {
        let now = Instant::now();
        for len in [0, 1, 7] {
            let pagination = Pagination::new(len, ActiveIndex::new(0));
            let specs = dot_specs(pagination.dots(), ActiveIndex::new(0), None, None, now);
            assert_eq!(specs.len(), len);
        }
    }

    #[test]
    fn exactly_the_active_position_gets_active_style() {
        let now = Instant::now();
        let blue = Color::from_rgb(0.0, 0.0, 1.0);
        let active_style = DotStyle {
            color: Some(blue),
            ..DotStyle::default()
        };
        let pagination = Pagination::new(5, ActiveIndex::new(3));

        let specs = dot_specs(
            pagination.dots(),
            ActiveIndex::new(3),
            None,
            Some(active_style),
            now,
        );

        for (position, spec) in specs.iter().enumerate() {
            assert_eq!(spec.active, position == 3);
            if position == 3 {
                assert_eq!(spec.style.color, Some(blue));
                assert_abs_diff_eq!(spec.width, 20.0);
            } else {
                assert_eq!(spec.style, DotStyle::base());
                assert_abs_diff_eq!(spec.width, 12.5);
            }
        }
    }

    #[test]
    fn row_builds_for_empty_dots() {
        let _: Element<'_, ()> = pagination_row(
            &[],
            ActiveIndex::new(0),
            PaginationStyle::default(),
            None,
            None,
            Instant::now(),
        );
    }
}
