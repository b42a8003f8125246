// SPDX-License-Identifier: MPL-2.0
//! Carousel domain types.
//!
//! Pure index arithmetic shared by the carousel widget and its pagination:
//! the scroll axis, the item extent along that axis, and the active index
//! derived from a scroll offset.

pub mod newtypes;

pub use newtypes::{dot_width, ActiveIndex, ItemExtent, Orientation};

/// Returns the index of the item nearest to `offset` along the scroll axis.
///
/// This is `round(offset / extent)`. A zero extent is not guarded: the
/// quotient is non-finite and the saturating float-to-int cast applies
/// (NaN becomes 0, infinities clamp to `i32::MIN`/`i32::MAX`).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn nearest_index(offset: f32, extent: ItemExtent) -> i32 {
    (offset / extent.value()).round() as i32
}

/// Returns the scroll offset at which item `index` starts.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn offset_for_index(index: i32, extent: ItemExtent) -> f32 {
    index as f32 * extent.value()
}
