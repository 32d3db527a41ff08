// SPDX-License-Identifier: MPL-2.0
use guess_board::app::{App, Message};
use guess_board::assets;
use guess_board::board::{Board, HoldOutcome, HoldThreshold, HoldToClear, Marker, SampleInterval};
use guess_board::config::{self, Config};
use guess_board::error::{AssetError, Error};
use guess_board::i18n::fluent::I18n;
use guess_board::ui::{grid, toolbar};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn portraits(dir: &Path, files: &[&str]) {
    for file in files {
        fs::write(dir.join(file), b"portrait").expect("Failed to write portrait fixture");
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    fs::write(&path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // CLI wins over the file
    let i18n_cli = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n_cli.current_locale().to_string(), "en-US");
}

#[test]
fn test_board_from_portrait_directory() {
    let dir = tempdir().expect("Failed to create temporary directory");
    portraits(
        dir.path(),
        &["Claire.png", "anita.jpg", "Bernard.webp", "anita.png", "notes.txt"],
    );

    let characters = assets::load_characters(dir.path()).expect("Failed to load characters");
    let mut board = Board::new(characters);

    let names: Vec<&str> = board.characters().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["anita", "Bernard", "Claire"]);
    assert_eq!(board.tally().neutral, 3);

    board.cycle_marker("anita");
    board.set_marker("Claire", Marker::Confirmed);
    let tally = board.tally();
    assert_eq!((tally.neutral, tally.eliminated, tally.confirmed), (1, 1, 1));

    board.reset_all();
    assert_eq!(board.tally().neutral, 3);
}

#[test]
fn test_missing_directory_degrades_to_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let missing = dir.path().join("nowhere");

    let err = assets::load_characters(&missing).expect_err("missing directory must fail");
    assert!(matches!(err, Error::Assets(AssetError::NotADirectory(_))));

    let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    let message = i18n.tr(err.i18n_key());
    assert!(!message.starts_with("MISSING"), "{message}");
}

#[test]
fn test_empty_directory_reports_empty() {
    let dir = tempdir().expect("Failed to create temporary directory");
    portraits(dir.path(), &["readme.md"]);

    let err = assets::load_characters(dir.path()).expect_err("no portraits must fail");
    assert_eq!(err.i18n_key(), "board-warning-characters-dir-empty");
}

#[test]
fn test_hold_gesture_with_configured_threshold() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "[hold]\nclear_hold_ms = 400\nprogress_interval_ms = 100\n")
        .expect("Failed to write config");
    let config = config::load_from_path(&path).expect("Failed to load config");

    let mut hold = HoldToClear::new(config.hold_threshold(), config.sample_interval());
    assert_eq!(hold.threshold(), HoldThreshold::new(400));
    assert_eq!(hold.interval(), SampleInterval::new(100));

    let t0 = Instant::now();
    hold.press(t0);
    let outcomes: Vec<HoldOutcome> = (1..=4)
        .map(|step| hold.tick(t0 + Duration::from_millis(step * 100)))
        .collect();

    assert!(matches!(outcomes[0], HoldOutcome::Holding(_)));
    assert_eq!(outcomes[3], HoldOutcome::Fired);
    assert_eq!(hold.tick(t0 + Duration::from_millis(500)), HoldOutcome::Idle);
}

#[test]
fn test_app_round_of_play() {
    let dir = tempdir().expect("Failed to create temporary directory");
    portraits(dir.path(), &["Anita.png", "Bernard.png", "Claire.png", "David.png"]);
    let characters = assets::load_characters(dir.path()).expect("Failed to load characters");

    let mut app = App::with_roster(characters, &Config::default(), I18n::default(), Vec::new());
    let t0 = Instant::now();
    let send = |app: &mut App, message: Message, at: u64| {
        let _ = app.update_at(message, t0 + Duration::from_millis(at));
    };

    send(&mut app, Message::Toolbar(toolbar::Message::ToggleFavoriteMode), 0);
    send(&mut app, Message::Grid(grid::Message::CardClicked("David".into())), 10);
    send(&mut app, Message::Grid(grid::Message::CardClicked("Anita".into())), 20);
    send(&mut app, Message::Grid(grid::Message::CardClicked("Bernard".into())), 30);
    send(&mut app, Message::Grid(grid::Message::CardClicked("Bernard".into())), 40);
    send(
        &mut app,
        Message::Grid(grid::Message::QuickAction("Claire".into(), Marker::Eliminated)),
        50,
    );

    assert_eq!(app.board().favorite(), Some("David"));
    assert_eq!(app.board().marker("Anita"), Some(Marker::Eliminated));
    assert_eq!(app.board().marker("Bernard"), Some(Marker::Confirmed));
    assert_eq!(app.board().marker("Claire"), Some(Marker::Eliminated));

    send(&mut app, Message::Toolbar(toolbar::Message::ClearPressed), 100);
    for at in (150..=1100).step_by(50) {
        send(&mut app, Message::HoldTick(t0 + Duration::from_millis(at)), at);
    }

    assert_eq!(app.board().tally().neutral, 4);
    assert_eq!(app.board().favorite(), None);
    assert!(!app.hold().is_holding());
}
