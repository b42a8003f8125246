// SPDX-License-Identifier: MPL-2.0
//! Pagination row and dot styles.
//!
//! Dot styles are partial: every field is optional and later layers win
//! field by field. The row resolves a dot as
//! `base ⊕ dot_style` or, for the active dot,
//! `base ⊕ dot_style ⊕ active_base ⊕ active_dot_style`.

use crate::ui::design_tokens::{radius, sizing, spacing};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Layout of the pagination row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaginationStyle {
    /// Gap between two dots.
    pub spacing: f32,
    /// Space between the scrollable region and the row.
    pub margin_top: f32,
}

impl Default for PaginationStyle {
    fn default() -> Self {
        Self {
            spacing: spacing::XS,
            margin_top: spacing::MD,
        }
    }
}

/// Partial style of a single dot. Width is not part of it: the dot's
/// animated width always wins.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DotStyle {
    pub color: Option<Color>,
    pub height: Option<f32>,
    pub radius: Option<f32>,
}

impl DotStyle {
    /// Base style shared by every dot.
    #[must_use]
    pub fn base() -> Self {
        Self {
            color: None,
            height: Some(sizing::DOT_HEIGHT),
            radius: Some(radius::FULL),
        }
    }

    /// Extra style applied to the active dot before the caller's override.
    /// Empty: by default only the width tells the active dot apart.
    #[must_use]
    pub fn active_base() -> Self {
        Self::default()
    }

    /// Layers `over` on top of `self`.
    #[must_use]
    pub fn merge(self, over: Self) -> Self {
        Self {
            color: over.color.or(self.color),
            height: over.height.or(self.height),
            radius: over.radius.or(self.radius),
        }
    }

    /// Height after falling back to the base style.
    #[must_use]
    pub fn resolved_height(&self) -> f32 {
        self.height.unwrap_or(sizing::DOT_HEIGHT)
    }
}

/// Resolves the layered style for the dot at a position.
#[must_use]
pub fn resolve_dot(
    is_active: bool,
    dot_style: Option<DotStyle>,
    active_dot_style: Option<DotStyle>,
) -> DotStyle {
    let style = DotStyle::base().merge(dot_style.unwrap_or_default());
    if is_active {
        style
            .merge(DotStyle::active_base())
            .merge(active_dot_style.unwrap_or_default())
    } else {
        style
    }
}

/// Turns a resolved dot style into a container style.
///
/// Dots without an explicit color use the theme's strong background color.
pub fn dot(style: DotStyle) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let color = style
            .color
            .unwrap_or_else(|| theme.extended_palette().background.strong.color);
        container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: style.radius.unwrap_or(radius::FULL).into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_row_layout_matches_tokens() {
        let style = PaginationStyle::default();
        assert_abs_diff_eq!(style.spacing, 8.0);
        assert_abs_diff_eq!(style.margin_top, 16.0);
    }

    #[test]
    fn merge_prefers_overriding_fields() {
        let red = Color::from_rgb(1.0, 0.0, 0.0);
        let merged = DotStyle::base().merge(DotStyle {
            color: Some(red),
            ..DotStyle::default()
        });
        assert_eq!(merged.color, Some(red));
        assert_eq!(merged.height, Some(sizing::DOT_HEIGHT));
        assert_eq!(merged.radius, Some(radius::FULL));
    }

    #[test]
    fn active_override_only_applies_to_active_dot() {
        let blue = Color::from_rgb(0.0, 0.0, 1.0);
        let active = DotStyle {
            color: Some(blue),
            ..DotStyle::default()
        };

        assert_eq!(resolve_dot(true, None, Some(active)).color, Some(blue));
        assert_eq!(resolve_dot(false, None, Some(active)).color, None);
    }

    #[test]
    fn active_override_layers_on_dot_style() {
        let gray = Color::from_rgb(0.5, 0.5, 0.5);
        let blue = Color::from_rgb(0.0, 0.0, 1.0);
        let dot_style = DotStyle {
            color: Some(gray),
            height: Some(8.0),
            radius: None,
        };
        let active = DotStyle {
            color: Some(blue),
            ..DotStyle::default()
        };

        let resolved = resolve_dot(true, Some(dot_style), Some(active));
        assert_eq!(resolved.color, Some(blue));
        assert_abs_diff_eq!(resolved.resolved_height(), 8.0);
    }

    #[test]
    fn unstyled_dot_takes_theme_color() {
        let style = dot(DotStyle::base())(&Theme::Dark);
        let expected = Theme::Dark.extended_palette().background.strong.color;
        assert_eq!(style.background, Some(Background::Color(expected)));
    }
}
