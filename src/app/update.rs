// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers take the current instant from the caller so gesture and
//! transition timing can be driven from tests.

use super::{Message, Shortcut};
use crate::board::{Board, ClickOutcome, HoldOutcome, HoldToClear};
use crate::ui::help::{self, Event as HelpEvent};
use crate::ui::{grid, preview, toolbar};
use iced::Task;
use std::time::Instant;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub board: &'a mut Board,
    pub hold: &'a mut HoldToClear,
    pub preview: &'a mut preview::State,
    pub help: &'a mut help::State,
    pub hovered: &'a mut Option<String>,
}

/// Routes one message at `now`.
pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message, now: Instant) -> Task<Message> {
    match message {
        Message::Grid(message) => handle_grid_message(ctx, message),
        Message::Toolbar(message) => handle_toolbar_message(ctx, message, now),
        Message::Preview(preview::Message::Close) => {
            ctx.preview.close(now);
            Task::none()
        }
        Message::Help(message) => handle_help_message(ctx, message),
        Message::HoldTick(at) => handle_hold_tick(ctx, at),
        Message::AnimationTick(at) => {
            ctx.preview.tick(at);
            Task::none()
        }
        Message::Shortcut(shortcut) => handle_shortcut(ctx, shortcut, now),
    }
}

fn handle_grid_message(ctx: &mut UpdateContext<'_>, message: grid::Message) -> Task<Message> {
    match message {
        grid::Message::CardClicked(name) => {
            if ctx.board.click(&name) == ClickOutcome::FavoriteSelected {
                tracing::info!(name = %name, "favorite picked");
            }
        }
        grid::Message::CardEntered(name) => *ctx.hovered = Some(name),
        grid::Message::CardExited(name) => {
            if ctx.hovered.as_deref() == Some(name.as_str()) {
                *ctx.hovered = None;
            }
        }
        grid::Message::QuickAction(name, marker) => ctx.board.set_marker(&name, marker),
        grid::Message::OpenPreview(name) => {
            if let Some(character) = ctx.board.character(&name) {
                ctx.preview.open(character.clone());
            } else {
                tracing::warn!(name = %name, "preview requested for unknown character");
            }
        }
    }
    Task::none()
}

fn handle_toolbar_message(
    ctx: &mut UpdateContext<'_>,
    message: toolbar::Message,
    now: Instant,
) -> Task<Message> {
    match message {
        toolbar::Message::ToggleFavoriteMode => ctx.board.toggle_favorite_mode(),
        toolbar::Message::OpenHelp => {
            help::update(ctx.help, help::Message::Open);
        }
        toolbar::Message::ClearPressed => ctx.hold.press(now),
        toolbar::Message::ClearReleased | toolbar::Message::ClearExited => {
            ctx.hold.cancel();
        }
    }
    Task::none()
}

fn handle_help_message(ctx: &mut UpdateContext<'_>, message: help::Message) -> Task<Message> {
    match help::update(ctx.help, message) {
        HelpEvent::Opened => tracing::debug!("help opened"),
        HelpEvent::Closed => tracing::debug!("help closed"),
        HelpEvent::None => {}
    }
    Task::none()
}

fn handle_hold_tick(ctx: &mut UpdateContext<'_>, at: Instant) -> Task<Message> {
    if ctx.hold.tick(at) == HoldOutcome::Fired {
        ctx.board.reset_all();
    }
    Task::none()
}

fn handle_shortcut(ctx: &mut UpdateContext<'_>, shortcut: Shortcut, now: Instant) -> Task<Message> {
    match shortcut {
        Shortcut::Escape => {
            if ctx.preview.is_open() {
                ctx.preview.close(now);
            } else if ctx.help.is_open() {
                help::update(ctx.help, help::Message::Close);
            } else if ctx.board.favorite_mode() {
                ctx.board.exit_favorite_mode();
            }
        }
        Shortcut::Help => {
            help::update(ctx.help, help::Message::Open);
        }
    }
    Task::none()
}
