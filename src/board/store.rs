// SPDX-License-Identifier: MPL-2.0
//! Card state store.
//!
//! [`Board`] owns the roster and the one marker entry per character, plus the
//! favorite selection and the one-shot favorite mode. Every mutation goes
//! through a named operation so the invariants stay local:
//!
//! - every character has exactly one marker entry, created in [`Board::new`]
//!   and never removed;
//! - the favorite, when set, names a character on the board.
//!
//! Operations addressed to an unknown name are a caller bug. Debug builds
//! panic; release builds log a warning and leave the board untouched.

use super::{Character, Marker};
use std::collections::{HashMap, HashSet};

/// What a card click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Favorite mode was active; the card became the favorite.
    FavoriteSelected,
    /// The card's marker advanced to the contained value.
    Cycled(Marker),
    /// The name is not on the board.
    Ignored,
}

/// Number of cards per marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub neutral: usize,
    pub eliminated: usize,
    pub confirmed: usize,
}

impl Tally {
    /// Number of cards carrying `marker`.
    #[must_use]
    pub fn count(&self, marker: Marker) -> usize {
        match marker {
            Marker::Neutral => self.neutral,
            Marker::Eliminated => self.eliminated,
            Marker::Confirmed => self.confirmed,
        }
    }
}

/// The single board state owned by the application.
#[derive(Debug, Clone, Default)]
pub struct Board {
    characters: Vec<Character>,
    markers: HashMap<String, Marker>,
    favorite: Option<String>,
    favorite_mode: bool,
}

impl Board {
    /// Builds a board with every character set to [`Marker::Neutral`].
    ///
    /// Names are expected to be unique; a repeated name keeps its first
    /// occurrence.
    pub fn new(characters: Vec<Character>) -> Self {
        let mut seen = HashSet::with_capacity(characters.len());
        let characters: Vec<Character> = characters
            .into_iter()
            .filter(|character| {
                let fresh = seen.insert(character.name().to_owned());
                if !fresh {
                    tracing::warn!(name = character.name(), "duplicate character dropped");
                }
                fresh
            })
            .collect();

        let markers = characters
            .iter()
            .map(|character| (character.name().to_owned(), Marker::Neutral))
            .collect();

        Self {
            characters,
            markers,
            favorite: None,
            favorite_mode: false,
        }
    }

    /// Characters in display order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn character(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Current marker of `name`, or `None` if the name is not on the board.
    pub fn marker(&self, name: &str) -> Option<Marker> {
        self.markers.get(name).copied()
    }

    /// Name of the favorite card, if one was picked.
    pub fn favorite(&self) -> Option<&str> {
        self.favorite.as_deref()
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.favorite.as_deref() == Some(name)
    }

    /// Whether the next card click selects the favorite instead of cycling.
    pub fn favorite_mode(&self) -> bool {
        self.favorite_mode
    }

    pub fn toggle_favorite_mode(&mut self) {
        self.favorite_mode = !self.favorite_mode;
        tracing::debug!(active = self.favorite_mode, "favorite mode toggled");
    }

    pub fn exit_favorite_mode(&mut self) {
        self.favorite_mode = false;
    }

    /// Sets an explicit marker, bypassing the cycle.
    pub fn set_marker(&mut self, name: &str, value: Marker) {
        if let Some(marker) = self.marker_mut(name, "set_marker") {
            *marker = value;
            tracing::debug!(name, ?value, "marker set");
        }
    }

    /// Advances the marker of `name` one step and returns the new value.
    pub fn cycle_marker(&mut self, name: &str) -> Option<Marker> {
        let marker = self.marker_mut(name, "cycle_marker")?;
        *marker = marker.next();
        let value = *marker;
        tracing::debug!(name, ?value, "marker cycled");
        Some(value)
    }

    /// Handles a click on a card body.
    ///
    /// In favorite mode the click picks the favorite and leaves the mode;
    /// otherwise it cycles the card's marker.
    pub fn click(&mut self, name: &str) -> ClickOutcome {
        if !self.markers.contains_key(name) {
            self.report_unknown(name, "click");
            return ClickOutcome::Ignored;
        }

        if self.favorite_mode {
            self.favorite = Some(name.to_owned());
            self.favorite_mode = false;
            tracing::debug!(name, "favorite selected");
            ClickOutcome::FavoriteSelected
        } else {
            self.cycle_marker(name)
                .map_or(ClickOutcome::Ignored, ClickOutcome::Cycled)
        }
    }

    /// Returns every card to neutral and forgets the favorite.
    pub fn reset_all(&mut self) {
        for marker in self.markers.values_mut() {
            *marker = Marker::Neutral;
        }
        self.favorite = None;
        self.favorite_mode = false;
        tracing::info!(cards = self.characters.len(), "board cleared");
    }

    /// Counts cards per marker.
    pub fn tally(&self) -> Tally {
        self.markers
            .values()
            .fold(Tally::default(), |mut tally, marker| {
                match marker {
                    Marker::Neutral => tally.neutral += 1,
                    Marker::Eliminated => tally.eliminated += 1,
                    Marker::Confirmed => tally.confirmed += 1,
                }
                tally
            })
    }

    fn marker_mut(&mut self, name: &str, operation: &'static str) -> Option<&mut Marker> {
        if !self.markers.contains_key(name) {
            self.report_unknown(name, operation);
        }
        self.markers.get_mut(name)
    }

    fn report_unknown(&self, name: &str, operation: &'static str) {
        debug_assert!(
            self.markers.contains_key(name),
            "{operation} called with unknown character {name:?}"
        );
        tracing::warn!(name, operation, "unknown character ignored");
    }
}
