// SPDX-License-Identifier: MPL-2.0
//! Board domain: characters, their markers and the gestures that change them.
//!
//! Nothing in this module knows about widgets. The application owns a single
//! [`Board`] and funnels every mutation through its named operations, while
//! [`overlay`] turns the resulting state into decorations for the view.
//!
//! # Modules
//!
//! - [`marker`] - The tri-state card marker and its cycle order
//! - [`store`] - The card state store ([`Board`])
//! - [`hold`] - Hold-to-clear confirmation gesture
//! - [`overlay`] - Pure marker → decoration mapping

pub mod hold;
pub mod marker;
pub mod overlay;
pub mod store;

pub use hold::{HoldOutcome, HoldProgress, HoldThreshold, HoldToClear, SampleInterval};
pub use marker::Marker;
pub use overlay::{CardDecoration, Glyph, Tint};
pub use store::{Board, ClickOutcome, Tally};

use iced::widget::image::Handle;

/// A named portrait on the board. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Character {
    name: String,
    image: Handle,
}

impl Character {
    /// Creates a character from its display name and image handle.
    pub fn new(name: impl Into<String>, image: Handle) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    /// Unique name, derived from the asset identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &Handle {
        &self.image
    }
}
