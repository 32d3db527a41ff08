// SPDX-License-Identifier: MPL-2.0
//! Shared modal scaffolding.
//!
//! A dialog is laid over a full-window backdrop. The backdrop turns a press
//! into `on_dismiss`; the dialog is wrapped in [`opaque`] so presses inside it
//! stop there instead of reaching the backdrop or the board underneath.

use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{center, mouse_area, opaque, Container};
use iced::{Element, Length};

/// Wraps `dialog` in a dismissible backdrop, faded by `alpha` (0.0–1.0).
pub fn modal<'a, Message>(
    dialog: impl Into<Element<'a, Message>>,
    on_dismiss: Message,
    alpha: f32,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let dialog = Container::new(dialog)
        .padding(spacing::LG)
        .style(styles::container::dialog(alpha));

    let backdrop = Container::new(center(opaque(dialog)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::overlay::backdrop(alpha));

    opaque(mouse_area(backdrop).on_press(on_dismiss))
}
