// SPDX-License-Identifier: MPL-2.0
//! `portfolio_lens` shows portfolio projects with a navigable image gallery,
//! built with the Iced GUI framework.
//!
//! The core (catalog lookup, gallery ring navigation, detail composition) is
//! free of UI concerns and lives in [`domain`], [`catalog`] and
//! [`application`]. [`app`] and [`ui`] wire it to an Iced window.

pub mod app;
pub mod application;
pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
