// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `ViewContext`, a `Message` enum and a `view` function, and the
//! application routes their messages back into the board.
//!
//! # Components
//!
//! - [`grid`] - The card board with hover quick actions
//! - [`toolbar`] - Tally, favorite controls, help and hold-to-clear
//! - [`preview`] - Full-size portrait modal with fade transitions
//! - [`help`] - How-to-play modal
//!
//! # Shared Infrastructure
//!
//! - [`modal`] - Backdrop and event isolation for dialogs
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod grid;
pub mod help;
pub mod modal;
pub mod preview;
pub mod styles;
pub mod theming;
pub mod toolbar;
