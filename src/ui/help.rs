// SPDX-License-Identifier: MPL-2.0
//! Help modal explaining how to play.
//!
//! Static localized content grouped by topic. Closed by its close button or a
//! press on the backdrop.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::modal::modal;
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    font::Weight,
    widget::{button, Column, Container, Scrollable, Text},
    Element, Font, Length,
};

/// Topics in display order, as `(title key, body key)`.
const TOPICS: [(&str, &str); 5] = [
    ("help-cards-title", "help-cards-body"),
    ("help-quick-title", "help-quick-body"),
    ("help-favorite-title", "help-favorite-body"),
    ("help-clear-title", "help-clear-body"),
    ("help-keys-title", "help-keys-body"),
];

/// State for the help modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    open: bool,
}

impl State {
    pub fn is_open(self) -> bool {
        self.open
    }
}

/// Contextual data needed to render the help modal.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the help modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open,
    Close,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Opened,
    Closed,
}

/// Process a help message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match (message, state.open) {
        (Message::Open, false) => {
            state.open = true;
            Event::Opened
        }
        (Message::Close, true) => {
            state.open = false;
            Event::Closed
        }
        _ => Event::None,
    }
}

/// Render the help modal.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("help-title")).size(typography::TITLE_LG);

    let topics = TOPICS.iter().map(|(title_key, body_key)| {
        Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(ctx.i18n.tr(title_key))
                    .size(typography::TITLE_SM)
                    .font(Font {
                        weight: Weight::Bold,
                        ..Font::default()
                    }),
            )
            .push(Text::new(ctx.i18n.tr(body_key)).size(typography::BODY))
            .into()
    });

    let close = button(Text::new(ctx.i18n.tr("help-close")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected)
        .on_press(Message::Close);

    let content = Column::new()
        .spacing(spacing::MD)
        .width(sizing::HELP_WIDTH)
        .push(title)
        .push(Scrollable::new(Column::with_children(topics).spacing(spacing::MD)))
        .push(
            Container::new(close)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        );

    modal(content, Message::Close, 1.0)
}
