// SPDX-License-Identifier: MPL-2.0
//! `guess_board` is a "Guess Who"-style card board built with the Iced GUI framework.
//!
//! Each character card carries a marker (in play, eliminated, kept) cycled by
//! clicking, one card can be picked as the favorite, and the whole board is
//! cleared by pressing and holding a dedicated control. Preferences are
//! stored in a `settings.toml`; board state lives only for the session.

#![doc(html_root_url = "https://docs.rs/guess_board/0.1.0")]

pub mod app;
pub mod assets;
pub mod board;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
