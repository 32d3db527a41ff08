// SPDX-License-Identifier: MPL-2.0
//! Full-size portrait preview.
//!
//! Showing is two-phase: [`State::open`] mounts the modal at zero opacity and
//! the next animation tick makes it visible, so the fade-in has a frame to
//! start from. Closing fades out and only drops the image once the exit
//! transition has elapsed; opening a card during that fade replaces the image
//! and cancels the pending clear.
//!
//! Every transition takes an explicit `Instant`, so tests drive the modal with
//! virtual time.

use crate::board::Character;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::modal::modal;
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, image::Handle, Column, Image, Text},
    ContentFit, Element, Length,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    /// In the tree, not yet visible.
    Mounted,
    FadingIn { since: Instant },
    Shown,
    /// Hidden; the image is dropped once the transition elapses.
    Leaving { since: Instant },
}

/// Preview modal state.
#[derive(Debug, Clone)]
pub struct State {
    phase: Phase,
    character: Option<Character>,
    transition: Duration,
}

impl State {
    #[must_use]
    pub fn new(transition: Duration) -> Self {
        Self {
            phase: Phase::Closed,
            character: None,
            transition,
        }
    }

    /// Shows `character`. Replaces whatever is currently displayed.
    pub fn open(&mut self, character: Character) {
        tracing::debug!(name = character.name(), "preview opened");
        self.character = Some(character);
        self.phase = match self.phase {
            Phase::Closed | Phase::Leaving { .. } => Phase::Mounted,
            other => other,
        };
    }

    /// Hides the modal. The image reference survives until the exit
    /// transition completes.
    pub fn close(&mut self, now: Instant) {
        match self.phase {
            Phase::Closed | Phase::Leaving { .. } => {}
            Phase::Mounted => self.clear(),
            Phase::FadingIn { .. } | Phase::Shown => {
                tracing::debug!("preview closing");
                self.phase = Phase::Leaving { since: now };
                if self.transition.is_zero() {
                    self.clear();
                }
            }
        }
    }

    /// Advances the transition at `now`.
    pub fn tick(&mut self, now: Instant) {
        match self.phase {
            Phase::Mounted => {
                self.phase = if self.transition.is_zero() {
                    Phase::Shown
                } else {
                    Phase::FadingIn { since: now }
                };
            }
            Phase::FadingIn { since } if self.elapsed(since, now) => {
                self.phase = Phase::Shown;
            }
            Phase::Leaving { since } if self.elapsed(since, now) => self.clear(),
            _ => {}
        }
    }

    /// The modal is visible, or fading in.
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::FadingIn { .. } | Phase::Shown)
    }

    /// The modal is showing or about to show; closing it has an effect.
    pub fn is_open(&self) -> bool {
        matches!(
            self.phase,
            Phase::Mounted | Phase::FadingIn { .. } | Phase::Shown
        )
    }

    /// The modal needs animation ticks.
    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            Phase::Mounted | Phase::FadingIn { .. } | Phase::Leaving { .. }
        )
    }

    /// The modal is part of the view, visible or not.
    pub fn is_mounted(&self) -> bool {
        self.character.is_some()
    }

    /// Current opacity between 0.0 and 1.0.
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Closed | Phase::Mounted => 0.0,
            Phase::Shown => 1.0,
            Phase::FadingIn { since } => self.fraction(since, now),
            Phase::Leaving { since } => 1.0 - self.fraction(since, now),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.character.as_ref().map(Character::name)
    }

    pub fn image(&self) -> Option<&Handle> {
        self.character.as_ref().map(Character::image)
    }

    fn clear(&mut self) {
        self.phase = Phase::Closed;
        self.character = None;
        tracing::debug!("preview cleared");
    }

    fn elapsed(&self, since: Instant, now: Instant) -> bool {
        now.saturating_duration_since(since) >= self.transition
    }

    fn fraction(&self, since: Instant, now: Instant) -> f32 {
        if self.transition.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(since).as_secs_f32();
        (elapsed / self.transition.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Contextual data needed to render the preview.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub now: Instant,
}

/// Messages emitted by the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close,
}

/// Render the preview overlay, or `None` when nothing is mounted.
pub fn view<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    let character = ctx.state.character.as_ref()?;
    let alpha = ctx.state.opacity(ctx.now);

    let portrait = Image::new(character.image().clone())
        .width(Length::Shrink)
        .height(Length::Shrink)
        .content_fit(ContentFit::Contain)
        .opacity(alpha);

    let close = button(Text::new(ctx.i18n.tr("preview-close")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected)
        .on_press_maybe(ctx.state.is_visible().then_some(Message::Close));

    let content = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::PREVIEW_MAX)
        .align_x(Horizontal::Center)
        .push(Text::new(character.name()).size(typography::TITLE_MD))
        .push(portrait)
        .push(close);

    Some(modal(content, Message::Close, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn character(name: &str) -> Character {
        Character::new(name, Handle::from_path(format!("{name}.png")))
    }

    fn state() -> State {
        State::new(ms(200))
    }

    #[test]
    fn open_mounts_before_showing() {
        let t0 = Instant::now();
        let mut preview = state();
        preview.open(character("Anita"));

        assert!(preview.is_mounted());
        assert!(preview.is_open());
        assert!(!preview.is_visible());
        assert_eq!(preview.opacity(t0), 0.0);

        preview.tick(t0 + ms(16));
        assert!(preview.is_visible());
        assert_eq!(preview.name(), Some("Anita"));
        assert!(preview.image().is_some());
    }

    #[test]
    fn fade_in_settles_and_stops_animating() {
        let t0 = Instant::now();
        let mut preview = state();
        preview.open(character("Anita"));
        preview.tick(t0);
        assert!(preview.opacity(t0 + ms(100)) > 0.4);

        preview.tick(t0 + ms(200));
        assert!(!preview.is_animating());
        assert_eq!(preview.opacity(t0 + ms(300)), 1.0);
    }

    #[test]
    fn close_keeps_image_until_transition_elapses() {
        let t0 = Instant::now();
        let mut preview = state();
        preview.open(character("Bernard"));
        preview.tick(t0);
        preview.tick(t0 + ms(200));

        preview.close(t0 + ms(1000));
        assert!(!preview.is_visible());
        assert!(!preview.is_open());
        assert_eq!(preview.name(), Some("Bernard"));

        preview.tick(t0 + ms(1100));
        assert!(preview.image().is_some());

        preview.tick(t0 + ms(1200));
        assert!(preview.image().is_none());
        assert!(!preview.is_mounted());
        assert!(!preview.is_animating());
    }

    #[test]
    fn reopening_during_exit_cancels_clear() {
        let t0 = Instant::now();
        let mut preview = state();
        preview.open(character("Bernard"));
        preview.tick(t0);
        preview.close(t0 + ms(50));

        preview.open(character("Claire"));
        preview.tick(t0 + ms(300));
        preview.tick(t0 + ms(600));

        assert!(preview.is_visible());
        assert_eq!(preview.name(), Some("Claire"));
    }

    #[test]
    fn close_before_first_tick_clears_at_once() {
        let t0 = Instant::now();
        let mut preview = state();
        preview.open(character("Anita"));
        preview.close(t0);

        assert!(!preview.is_mounted());
        assert!(!preview.is_animating());
    }

    #[test]
    fn zero_transition_skips_fades() {
        let t0 = Instant::now();
        let mut preview = State::new(Duration::ZERO);
        preview.open(character("Anita"));
        preview.tick(t0);
        assert_eq!(preview.opacity(t0), 1.0);

        preview.close(t0);
        assert!(preview.image().is_none());
    }

    #[test]
    fn closing_an_idle_preview_is_a_no_op() {
        let mut preview = state();
        preview.close(Instant::now());
        preview.tick(Instant::now());
        assert!(!preview.is_mounted());
    }
}
