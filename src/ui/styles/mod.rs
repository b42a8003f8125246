// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the carousel and its pagination.

pub mod container;
pub mod pagination;

pub use pagination::{DotStyle, PaginationStyle};
