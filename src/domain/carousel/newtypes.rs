// SPDX-License-Identifier: MPL-2.0
//! Carousel newtypes.
//!
//! Small value objects that keep the carousel arithmetic readable at call
//! sites. None of them validate their input: a carousel with a zero extent
//! or an out-of-range index behaves however the arithmetic falls out.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// Orientation
// =============================================================================

/// Axis along which the carousel scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Picks the component of a `(width, height)` pair that lies on this axis.
    #[must_use]
    pub fn along(self, width: f32, height: f32) -> f32 {
        match self {
            Orientation::Horizontal => width,
            Orientation::Vertical => height,
        }
    }

    /// Builds an `(x, y)` pair with `value` on this axis and zero on the other.
    #[must_use]
    pub fn point(self, value: f32) -> (f32, f32) {
        match self {
            Orientation::Horizontal => (value, 0.0),
            Orientation::Vertical => (0.0, value),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            other => Err(format!("invalid orientation: {other}")),
        }
    }
}

// =============================================================================
// ItemExtent
// =============================================================================

/// Size of one item along the scroll axis, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemExtent(f32);

impl ItemExtent {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value)
    }

    /// Resolves the extent for `orientation`: the explicit item size on that
    /// axis when given, otherwise the full screen size on that axis.
    #[must_use]
    pub fn resolve(
        orientation: Orientation,
        item_width: Option<f32>,
        item_height: Option<f32>,
        screen_width: f32,
        screen_height: f32,
    ) -> Self {
        let value = match orientation {
            Orientation::Horizontal => item_width.unwrap_or(screen_width),
            Orientation::Vertical => item_height.unwrap_or(screen_height),
        };
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

// =============================================================================
// ActiveIndex
// =============================================================================

/// Index of the item currently considered centered.
///
/// Not clamped to the item range: overscrolling past either end yields an
/// index with no matching item, and no pagination dot is active then.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveIndex(i32);

impl ActiveIndex {
    #[must_use]
    pub fn new(index: i32) -> Self {
        Self(index)
    }

    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }

    /// Returns whether this index designates the item at `position`.
    #[must_use]
    pub fn is(self, position: usize) -> bool {
        usize::try_from(self.0).is_ok_and(|index| index == position)
    }

    /// Returns the index as a position within `len` items, if it is one.
    #[must_use]
    pub fn position(self, len: usize) -> Option<usize> {
        usize::try_from(self.0).ok().filter(|index| *index < len)
    }
}

// =============================================================================
// Dot widths
// =============================================================================

/// The two widths a pagination dot settles at.
pub mod dot_width {
    /// Width of the dot for the active item.
    pub const ACTIVE: f32 = 20.0;
    /// Width of every other dot.
    pub const INACTIVE: f32 = 12.5;

    /// Width a dot rests at for the given status.
    #[must_use]
    pub fn for_status(active: bool) -> f32 {
        if active {
            ACTIVE
        } else {
            INACTIVE
        }
    }
}
