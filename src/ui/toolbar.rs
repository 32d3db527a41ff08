// SPDX-License-Identifier: MPL-2.0
//! Top toolbar: tally, favorite controls, help and the hold-to-clear control.

use crate::board::{Board, HoldProgress, Marker, Tally};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, mouse_area, progress_bar, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub board: &'a Board,
    pub holding: bool,
    pub progress: HoldProgress,
}

/// Messages emitted by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleFavoriteMode,
    OpenHelp,
    /// Pointer pressed on the clear control.
    ClearPressed,
    /// Pointer released over the clear control.
    ClearReleased,
    /// Pointer left the clear control.
    ClearExited,
}

/// Render the toolbar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_SM);

    let tally = Text::new(tally_label(ctx.i18n, ctx.board.tally())).size(typography::BODY_SM);

    let favorite_label = match ctx.board.favorite() {
        Some(name) => Text::new(ctx.i18n.tr_with_args("toolbar-favorite-label", &[("name", name)]))
            .size(typography::BODY)
            .color(palette::FAVORITE),
        None => Text::new(ctx.i18n.tr("toolbar-favorite-none")).size(typography::BODY),
    };

    let favorite_toggle = if ctx.board.favorite_mode() {
        button(Text::new(ctx.i18n.tr("toolbar-favorite-mode-active")).size(typography::BODY))
            .style(styles::button::selected)
    } else {
        button(Text::new(ctx.i18n.tr("toolbar-favorite-mode")).size(typography::BODY))
            .style(styles::button::unselected)
    }
    .padding([spacing::XXS, spacing::SM])
    .on_press(Message::ToggleFavoriteMode);

    let help = button(Text::new(ctx.i18n.tr("toolbar-help")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected)
        .on_press(Message::OpenHelp);

    Container::new(
        Row::new()
            .spacing(spacing::MD)
            .padding([spacing::XS, spacing::MD])
            .align_y(Vertical::Center)
            .push(title)
            .push(tally)
            .push(Space::new().width(Length::Fill))
            .push(favorite_label)
            .push(favorite_toggle)
            .push(help)
            .push(clear_control(&ctx)),
    )
    .width(Length::Fill)
    .height(sizing::TOOLBAR_HEIGHT)
    .align_y(Vertical::Center)
    .style(styles::container::toolbar)
    .into()
}

/// Per-marker counts in cycle order, e.g. `3 in play · 1 out · 0 kept`.
fn tally_label(i18n: &I18n, tally: Tally) -> String {
    Marker::ALL
        .iter()
        .map(|&marker| {
            let count = tally.count(marker).to_string();
            i18n.tr_with_args(marker.i18n_key(), &[("count", count.as_str())])
        })
        .collect::<Vec<_>>()
        .join(" · ")
}

/// The press-and-hold clear control with its progress bar.
///
/// The inner button has no press handler so the surrounding mouse area sees
/// press, release and exit.
fn clear_control<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let holding = ctx.holding;
    let face = button(Text::new(ctx.i18n.tr("toolbar-clear-hold")).size(typography::BODY))
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::SM])
        .style(move |theme, _status| {
            styles::button::clear_hold(holding)(theme, button::Status::Active)
        });

    let bar = Container::new(progress_bar(0.0..=100.0, ctx.progress.value()))
        .width(Length::Fill)
        .height(sizing::CLEAR_PROGRESS_HEIGHT);

    let control = Column::new()
        .width(sizing::CLEAR_CONTROL_WIDTH)
        .spacing(spacing::XXS)
        .push(face)
        .push(bar);

    mouse_area(control)
        .on_press(Message::ClearPressed)
        .on_release(Message::ClearReleased)
        .on_exit(Message::ClearExited)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn tally(neutral: usize, eliminated: usize, confirmed: usize) -> Tally {
        Tally {
            neutral,
            eliminated,
            confirmed,
        }
    }

    #[test]
    fn tally_label_lists_markers_in_cycle_order() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(
            tally_label(&i18n, tally(3, 1, 0)),
            "3 in play · 1 out · 0 kept"
        );
    }

    #[test]
    fn tally_label_is_translated() {
        let i18n = I18n::new(Some("fr".to_string()), &Config::default());
        let label = tally_label(&i18n, tally(2, 0, 4));
        assert_eq!(label, "2 en jeu · 0 éliminés · 4 gardés");
        assert!(!label.contains("MISSING"));
    }
}
