// SPDX-License-Identifier: MPL-2.0
//! Pagination indicators for the carousel.
//!
//! [`Pagination`] owns one [`PaginationDot`] per item, identified by
//! position. The row itself ([`view::pagination_row`]) is a pure function
//! of the dots, the active index and the styles.

pub mod dot;
pub mod view;

pub use dot::PaginationDot;
pub use view::{dot_specs, pagination_row, DotSpec};

use crate::domain::carousel::ActiveIndex;
use std::time::Instant;

/// The dots of a carousel, kept at the same length as its items.
#[derive(Debug, Clone, Default)]
pub struct Pagination {
    dots: Vec<PaginationDot>,
}

impl Pagination {
    /// Creates `len` dots, the one at `active` resting at the active width.
    #[must_use]
    pub fn new(len: usize, active: ActiveIndex) -> Self {
        Self {
            dots: (0..len).map(|i| PaginationDot::new(active.is(i))).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    #[must_use]
    pub fn dots(&self) -> &[PaginationDot] {
        &self.dots
    }

    /// Grows or shrinks to `len` dots. Existing dots keep their state;
    /// new dots start at rest.
    pub fn resize(&mut self, len: usize, active: ActiveIndex) {
        if len < self.dots.len() {
            self.dots.truncate(len);
        } else {
            let start = self.dots.len();
            self.dots
                .extend((start..len).map(|i| PaginationDot::new(active.is(i))));
        }
    }

    /// Moves the active status to `active`. Only dots whose status flips
    /// start a transition.
    pub fn set_active(&mut self, active: ActiveIndex, now: Instant) {
        for (position, dot) in self.dots.iter_mut().enumerate() {
            dot.set_active(active.is(position), now);
        }
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.dots.iter().any(|dot| dot.is_animating(now))
    }

    pub fn settle(&mut self, now: Instant) {
        for dot in &mut self.dots {
            dot.settle(now);
        }
    }
}
