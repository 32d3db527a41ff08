// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The toolbar sits above the board; open modals are stacked on top in
//! order help, then preview.

use super::Message;
use crate::board::{Board, HoldToClear};
use crate::i18n::fluent::I18n;
use crate::ui::{grid, help, preview, toolbar};
use iced::{
    widget::{Column, Stack},
    Element, Length,
};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub board: &'a Board,
    pub hold: &'a HoldToClear,
    pub preview: &'a preview::State,
    pub help: help::State,
    pub hovered: Option<&'a str>,
    pub columns: u16,
    pub warnings: &'a [String],
    pub now: Instant,
}

/// Renders the board, the toolbar and any open modal.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let toolbar = toolbar::view(toolbar::ViewContext {
        i18n: ctx.i18n,
        board: ctx.board,
        holding: ctx.hold.is_holding(),
        progress: ctx.hold.progress(),
    })
    .map(Message::Toolbar);

    let board = grid::view(grid::ViewContext {
        i18n: ctx.i18n,
        board: ctx.board,
        hovered: ctx.hovered,
        columns: ctx.columns,
        warnings: ctx.warnings,
    })
    .map(Message::Grid);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Column::new().push(toolbar).push(board));

    if ctx.help.is_open() {
        layers = layers.push(help::view(help::ViewContext { i18n: ctx.i18n }).map(Message::Help));
    }

    if let Some(overlay) = preview::view(preview::ViewContext {
        i18n: ctx.i18n,
        state: ctx.preview,
        now: ctx.now,
    }) {
        layers = layers.push(overlay.map(Message::Preview));
    }

    layers.into()
}
