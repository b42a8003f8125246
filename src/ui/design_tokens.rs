// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the carousel's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Radius**: Border radii

## Examples

```
use iced_carousel::ui::design_tokens::{sizing, spacing};

// Pagination row layout
let gap = spacing::XS; // 8px between dots
let dot_height = sizing::DOT_HEIGHT; // 6px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7);

    // Demo card accents
    pub const ACCENT_CORAL: Color = Color::from_rgb(0.95, 0.45, 0.4);
    pub const ACCENT_AMBER: Color = Color::from_rgb(0.96, 0.7, 0.25);
    pub const ACCENT_TEAL: Color = Color::from_rgb(0.2, 0.7, 0.65);
    pub const ACCENT_VIOLET: Color = Color::from_rgb(0.55, 0.4, 0.85);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of a pagination dot.
    pub const DOT_HEIGHT: f32 = 6.0;

    /// Default demo card size along the cross axis.
    pub const CARD_CROSS: f32 = 240.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const LG: f32 = 12.0;
    /// Large enough to round any dot into a pill.
    pub const FULL: f32 = 100.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Radius must round a dot fully
    assert!(radius::FULL >= sizing::DOT_HEIGHT / 2.0);
};
