// SPDX-License-Identifier: MPL-2.0
//! Marker → card decoration mapping.
//!
//! A pure function of board state. The view turns the returned
//! [`CardDecoration`] into colors through the design tokens.

use super::{Board, Marker};

/// Glyph drawn over the portrait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Drawn on eliminated cards.
    Cross,
    /// Drawn on confirmed cards.
    Ring,
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Cross => "×",
            Glyph::Ring => "∘",
        }
    }
}

/// Card surface tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Plain,
    Danger,
    Success,
}

/// Everything the view needs to decorate one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDecoration {
    pub glyph: Option<Glyph>,
    pub tint: Tint,
    /// The card is the favorite.
    pub favorite_badge: bool,
    /// Favorite mode is waiting for a pick.
    pub prompt_highlight: bool,
}

/// Decoration for a card with the given marker and favorite flags.
#[must_use]
pub fn decoration(marker: Marker, is_favorite: bool, favorite_mode: bool) -> CardDecoration {
    let (glyph, tint) = match marker {
        Marker::Neutral => (None, Tint::Plain),
        Marker::Eliminated => (Some(Glyph::Cross), Tint::Danger),
        Marker::Confirmed => (Some(Glyph::Ring), Tint::Success),
    };

    CardDecoration {
        glyph,
        tint,
        favorite_badge: is_favorite,
        prompt_highlight: favorite_mode,
    }
}

/// Decoration for the card named `name` on `board`.
///
/// Unknown names render as neutral.
#[must_use]
pub fn for_card(board: &Board, name: &str) -> CardDecoration {
    decoration(
        board.marker(name).unwrap_or_default(),
        board.is_favorite(name),
        board.favorite_mode(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Character;
    use iced::widget::image::Handle;

    #[test]
    fn neutral_has_no_glyph() {
        let deco = decoration(Marker::Neutral, false, false);
        assert_eq!(deco.glyph, None);
        assert_eq!(deco.tint, Tint::Plain);
        assert!(!deco.favorite_badge);
        assert!(!deco.prompt_highlight);
    }

    #[test]
    fn eliminated_and_confirmed_differ() {
        let eliminated = decoration(Marker::Eliminated, false, false);
        let confirmed = decoration(Marker::Confirmed, false, false);

        assert_eq!(eliminated.glyph, Some(Glyph::Cross));
        assert_eq!(eliminated.tint, Tint::Danger);
        assert_eq!(confirmed.glyph, Some(Glyph::Ring));
        assert_eq!(confirmed.tint, Tint::Success);
        assert_ne!(eliminated, confirmed);
    }

    #[test]
    fn favorite_layers_over_marker() {
        let deco = decoration(Marker::Eliminated, true, false);
        assert_eq!(deco.glyph, Some(Glyph::Cross));
        assert!(deco.favorite_badge);
    }

    #[test]
    fn favorite_mode_highlights_every_card() {
        for marker in Marker::ALL {
            assert!(decoration(marker, false, true).prompt_highlight);
        }
    }

    #[test]
    fn for_card_reads_board_without_mutating() {
        let mut board = Board::new(vec![
            Character::new("Ann", Handle::from_path("ann.png")),
            Character::new("Bea", Handle::from_path("bea.png")),
        ]);
        board.set_marker("Ann", Marker::Confirmed);
        board.toggle_favorite_mode();
        board.click("Bea");

        let ann = for_card(&board, "Ann");
        let bea = for_card(&board, "Bea");

        assert_eq!(ann.glyph, Some(Glyph::Ring));
        assert!(!ann.favorite_badge);
        assert!(bea.favorite_badge);
        assert_eq!(bea.glyph, None);
        assert_eq!(board.marker("Ann"), Some(Marker::Confirmed));
    }

    #[test]
    fn glyph_symbols() {
        assert_eq!(Glyph::Cross.symbol(), "×");
        assert_eq!(Glyph::Ring.symbol(), "∘");
    }
}
