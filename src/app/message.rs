// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{grid, help, preview, toolbar};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Grid(grid::Message),
    Toolbar(toolbar::Message),
    Preview(preview::Message),
    Help(help::Message),
    /// Progress sample while the clear control is held.
    HoldTick(Instant),
    /// Animation frame while the preview is mid-transition.
    AnimationTick(Instant),
    Shortcut(Shortcut),
}

/// Keyboard shortcuts routed from the event subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Closes the preview, else the help modal, else leaves favorite mode.
    Escape,
    /// Opens the help modal.
    Help,
}

/// Runtime flags passed from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`).
    pub lang: Option<String>,
    /// Directory holding the character portraits. Wins over
    /// `board.characters_dir` from the settings file.
    pub characters_dir: Option<PathBuf>,
}
