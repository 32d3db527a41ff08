// SPDX-License-Identifier: MPL-2.0
//! Overlay styles: modal backdrops and card glyphs.

use crate::board::Glyph;
use crate::ui::design_tokens::{opacity, palette};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Dark translucent layer behind a modal dialog, scaled by `alpha` (0.0–1.0)
/// so it fades with the dialog.
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG * alpha.clamp(0.0, 1.0),
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Color of a glyph drawn over a portrait.
#[must_use]
pub fn glyph_color(glyph: Glyph) -> Color {
    match glyph {
        Glyph::Cross => palette::ERROR_700,
        Glyph::Ring => palette::SUCCESS_700,
    }
}
