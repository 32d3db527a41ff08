// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::board::{CardDecoration, Tint};
use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface color of a card face.
///
/// Plain cards follow the theme background; eliminated and confirmed cards
/// carry a red or green tint whatever the theme.
pub fn card_surface(tint: Tint, theme: &Theme) -> Color {
    match tint {
        Tint::Plain => theme.extended_palette().background.weak.color,
        Tint::Danger => Color {
            a: opacity::CARD_TINT,
            ..palette::ERROR_500
        },
        Tint::Success => Color {
            a: opacity::CARD_TINT,
            ..palette::SUCCESS_500
        },
    }
}

/// Card border: favorite first, then the favorite-mode prompt.
pub fn card_border(decoration: CardDecoration) -> Border {
    let (color, width) = if decoration.favorite_badge {
        (palette::FAVORITE, 3.0)
    } else if decoration.prompt_highlight {
        (palette::PRIMARY_400, 2.0)
    } else {
        (Color::TRANSPARENT, 0.0)
    };

    Border {
        color,
        width,
        radius: radius::MD.into(),
    }
}

/// Style of one card on the board.
pub fn card(decoration: CardDecoration) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(card_surface(decoration.tint, theme))),
        border: card_border(decoration),
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Neutral box behind a portrait so letterboxing stays visible.
pub fn portrait(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.strong.color,
        )),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Board background. Dimmed while favorite mode waits for a pick.
pub fn board(favorite_mode: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;
        let background = if favorite_mode {
            Color {
                r: base.r * 0.8,
                g: base.g * 0.8,
                b: base.b * 0.8,
                a: base.a,
            }
        } else {
            base
        };

        container::Style {
            background: Some(Background::Color(background)),
            ..Default::default()
        }
    }
}

/// Toolbar strip at the top of the window.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Dialog surface, faded by `alpha`.
pub fn dialog(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let base = palette.background.base.color;
        let text = palette.background.base.text;
        container::Style {
            background: Some(Background::Color(Color { a: alpha, ..base })),
            text_color: Some(Color { a: alpha, ..text }),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{overlay, Marker};

    #[test]
    fn tinted_surfaces_ignore_theme() {
        assert_eq!(
            card_surface(Tint::Danger, &Theme::Light),
            card_surface(Tint::Danger, &Theme::Dark)
        );
        assert_ne!(
            card_surface(Tint::Danger, &Theme::Light),
            card_surface(Tint::Success, &Theme::Light)
        );
    }

    #[test]
    fn favorite_border_wins_over_prompt() {
        let deco = overlay::decoration(Marker::Neutral, true, true);
        assert_eq!(card_border(deco).color, palette::FAVORITE);

        let prompt = overlay::decoration(Marker::Neutral, false, true);
        assert_eq!(card_border(prompt).color, palette::PRIMARY_400);

        let plain = overlay::decoration(Marker::Neutral, false, false);
        assert_eq!(card_border(plain).width, 0.0);
    }
}
