// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.

use crate::ui::design_tokens::{palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Element, Theme};

/// Tooltip bubble, inverted against the theme so it stands out from cards.
pub fn bubble(theme: &Theme) -> container::Style {
    let (background, text) = if theme.extended_palette().is_dark {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_900, palette::GRAY_100)
    };

    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Wraps `content` with a short text tip.
pub fn labeled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: String,
    position: tooltip::Position,
) -> Element<'a, Message> {
    let tip = Container::new(Text::new(tip).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(bubble);

    tooltip(content, tip, position).gap(spacing::XXS).into()
}
