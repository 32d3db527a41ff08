// SPDX-License-Identifier: MPL-2.0
//! Card grid.
//!
//! Renders the roster as rows of `columns` cards. Each card is a portrait with
//! its decoration layered on top (glyph, favorite badge) and, while hovered, a
//! strip of quick-action buttons. The quick actions capture their own presses,
//! so the card's click handler never sees them.

use crate::board::{overlay, Board, Character, Glyph, Marker};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{
        button, mouse_area, tooltip, Column, Container, Image, Row, Scrollable, Stack, Text,
    },
    Color, ContentFit, Element, Length,
};

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub board: &'a Board,
    /// Name of the card under the pointer, if any.
    pub hovered: Option<&'a str>,
    pub columns: u16,
    /// Startup warnings as i18n keys.
    pub warnings: &'a [String],
}

/// Messages emitted by the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    CardClicked(String),
    CardEntered(String),
    CardExited(String),
    QuickAction(String, Marker),
    OpenPreview(String),
}

/// Render the board.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    for key in ctx.warnings {
        content = content.push(
            Text::new(ctx.i18n.tr(key))
                .size(typography::BODY)
                .color(palette::WARNING_500),
        );
    }

    if ctx.board.favorite_mode() {
        content = content.push(
            Text::new(ctx.i18n.tr("favorite-mode-prompt"))
                .size(typography::BODY_LG)
                .color(palette::PRIMARY_400),
        );
    }

    let body: Element<'a, Message> = if ctx.board.is_empty() {
        empty_state(ctx.i18n)
    } else {
        let columns = usize::from(ctx.columns.max(1));
        let rows = ctx.board.characters().chunks(columns).map(|chunk| {
            Row::with_children(chunk.iter().map(|character| card(&ctx, character)))
                .spacing(spacing::MD)
                .into()
        });
        Column::with_children(rows).spacing(spacing::MD).into()
    };
    content = content.push(body);

    Container::new(Scrollable::new(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::board(ctx.board.favorite_mode()))
        .into()
}

fn empty_state<'a>(i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .max_width(sizing::HELP_WIDTH)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("board-empty-title")).size(typography::TITLE_MD))
        .push(Text::new(i18n.tr("board-empty-hint")).size(typography::BODY))
        .into()
}

fn card<'a>(ctx: &ViewContext<'a>, character: &'a Character) -> Element<'a, Message> {
    let name = character.name();
    let decoration = overlay::for_card(ctx.board, name);

    let portrait = Container::new(
        Image::new(character.image().clone())
            .width(sizing::PORTRAIT)
            .height(sizing::PORTRAIT)
            .content_fit(ContentFit::Contain),
    )
    .style(styles::container::portrait);

    let mut layers = Stack::new().push(portrait);

    if let Some(glyph) = decoration.glyph {
        let size = match glyph {
            Glyph::Cross => sizing::GLYPH_CROSS,
            Glyph::Ring => sizing::GLYPH_RING,
        };
        layers = layers.push(
            Container::new(
                Text::new(glyph.symbol())
                    .size(size)
                    .color(styles::overlay::glyph_color(glyph)),
            )
            .center(Length::Fill),
        );
    }

    if decoration.favorite_badge {
        layers = layers.push(
            Container::new(
                Text::new("★")
                    .size(sizing::FAVORITE_BADGE)
                    .color(palette::FAVORITE),
            )
            .width(Length::Fill)
            .padding(spacing::XXS)
            .align_x(Horizontal::Right),
        );
    }

    if ctx.hovered == Some(name) {
        layers = layers.push(
            Container::new(quick_actions(ctx.i18n, name))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Vertical::Bottom),
        );
    }

    let face = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(layers)
        .push(Text::new(name).size(typography::BODY));

    let body = Container::new(face)
        .width(sizing::CARD_WIDTH)
        .padding(spacing::XS)
        .align_x(Horizontal::Center)
        .style(styles::container::card(decoration));

    mouse_area(body)
        .on_press(Message::CardClicked(name.to_owned()))
        .on_enter(Message::CardEntered(name.to_owned()))
        .on_exit(Message::CardExited(name.to_owned()))
        .into()
}

fn quick_actions<'a>(i18n: &I18n, name: &str) -> Element<'a, Message> {
    let actions = [
        (
            "×",
            "card-action-eliminate",
            palette::ERROR_500,
            Message::QuickAction(name.to_owned(), Marker::Eliminated),
        ),
        (
            "∘",
            "card-action-confirm",
            palette::SUCCESS_500,
            Message::QuickAction(name.to_owned(), Marker::Confirmed),
        ),
        (
            "↺",
            "card-action-reset",
            palette::WHITE,
            Message::QuickAction(name.to_owned(), Marker::Neutral),
        ),
        (
            "⤢",
            "card-action-preview",
            palette::PRIMARY_400,
            Message::OpenPreview(name.to_owned()),
        ),
    ];

    Row::with_children(actions.into_iter().map(|(symbol, key, accent, message)| {
        quick_action(symbol, i18n.tr(key), accent, message)
    }))
    .spacing(spacing::XXS)
    .padding(spacing::XXS)
    .into()
}

fn quick_action<'a>(
    symbol: &'a str,
    label: String,
    accent: Color,
    message: Message,
) -> Element<'a, Message> {
    let control = button(
        Container::new(Text::new(symbol).size(typography::BODY_LG)).center_x(Length::Fill),
    )
    .width(Length::Fill)
    .height(sizing::QUICK_ACTION_HEIGHT)
    .padding(0)
    .style(styles::button::quick_action(accent))
    .on_press(message);

    styles::tooltip::labeled(control, label, tooltip::Position::Top)
}
