// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the board and its modals.
//!
//! The `App` struct owns the single [`Board`], the hold-to-clear gesture and
//! the modal states, and routes component messages into them. Startup
//! problems (unreadable settings, missing portraits) never stop the app: it
//! comes up with defaults or an empty board and lists the problems as
//! localized warnings above the grid.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Shortcut};

use crate::assets;
use crate::board::{Board, Character, HoldToClear};
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::{help, preview};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    board: Board,
    hold: HoldToClear,
    preview: preview::State,
    help: help::State,
    /// Card under the pointer; its quick actions are shown.
    hovered: Option<String>,
    columns: u16,
    /// Resolved once at startup; `System` queries the desktop.
    theme: Theme,
    /// Startup warnings as i18n keys.
    warnings: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("characters", &self.board.len())
            .field("favorite", &self.board.favorite())
            .field("holding", &self.hold.is_holding())
            .field("help_open", &self.help.is_open())
            .field("preview_mounted", &self.preview.is_mounted())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot; the flags are consumed by the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_roster(Vec::new(), &Config::default(), I18n::default(), Vec::new())
    }
}

impl App {
    /// Builds an app around an already loaded roster.
    pub fn with_roster(
        characters: Vec<Character>,
        config: &Config,
        i18n: I18n,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            i18n,
            board: Board::new(characters),
            hold: HoldToClear::new(config.hold_threshold(), config.sample_interval()),
            preview: preview::State::new(config.preview_transition()),
            help: help::State::default(),
            hovered: None,
            columns: config.columns(),
            theme: config.general.theme_mode.to_theme(),
            warnings,
        }
    }

    /// Initializes state from settings and the characters directory.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut warnings: Vec<String> = config_warning.into_iter().collect();

        let characters_dir = flags
            .characters_dir
            .or_else(|| config.board.characters_dir.clone());
        let characters = match characters_dir {
            Some(dir) => assets::load_characters(&dir).unwrap_or_else(|err| {
                tracing::warn!(directory = %dir.display(), error = %err, "starting with an empty board");
                warnings.push(err.i18n_key().to_string());
                Vec::new()
            }),
            None => {
                tracing::info!("no characters directory configured");
                Vec::new()
            }
        };

        tracing::info!(
            characters = characters.len(),
            locale = %i18n.current_locale(),
            "board ready"
        );

        (
            Self::with_roster(characters, &config, i18n, warnings),
            Task::none(),
        )
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hold(&self) -> &HoldToClear {
        &self.hold
    }

    pub fn preview(&self) -> &preview::State {
        &self.preview
    }

    pub fn help(&self) -> help::State {
        self.help
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.board.favorite() {
            Some(name) => format!("{app_name} - {name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_hold_subscription(&self.hold),
            subscription::create_animation_subscription(self.preview.is_animating()),
        ])
    }

    /// Handles a message at the current instant.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.update_at(message, Instant::now())
    }

    /// Handles a message as if it arrived at `now`.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            board: &mut self.board,
            hold: &mut self.hold,
            preview: &mut self.preview,
            help: &mut self.help,
            hovered: &mut self.hovered,
        };
        update::handle_message(&mut ctx, message, now)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            board: &self.board,
            hold: &self.hold,
            preview: &self.preview,
            help: self.help,
            hovered: self.hovered.as_deref(),
            columns: self.columns,
            warnings: &self.warnings,
            now: Instant::now(),
        })
    }
}
