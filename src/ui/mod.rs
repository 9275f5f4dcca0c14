// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Follows the Elm-style "state down, messages up" pattern: views borrow
//! application state through a context struct and emit messages.
//!
//! - [`detail_view`] - Project detail screen with gallery navigation
//! - [`diagnostics_panel`] - Session log screen (F12)
//! - [`styles`] - Centralized widget styling
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod detail_view;
pub mod diagnostics_panel;
pub mod styles;
