//! Config-supplied answers feeding the locking policy.

use std::fs;

use cubist_config::CubistConfig;
use cubist_core::{NeutralParity, PersistenceGateway};
use cubist_store::MemoryStore;
use cubist_tui::{App, UiOptions};
use tempfile::tempdir;

use crate::common::{cubie, pos};

#[test]
fn configured_answer_drives_completion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    // Goal: the solved cube with UFR twisted once.
    let mut answer: Vec<String> = (0..20).map(|i| i.to_string()).collect();
    answer.extend((0..20).map(|i| if i == 12 { "2" } else { "0" }.to_string()));
    fs::write(
        &path,
        format!(
            "[app]\nascii_only = true\n\n[puzzle]\nanswer = [{}]\n",
            answer.join(", ")
        ),
    )
    .unwrap();

    let config = CubistConfig::load_from(&path).unwrap().unwrap();
    let answer = config.answer().unwrap();
    assert_eq!(answer.state().orientation_at(pos("UFR")), 2);

    let mut app = App::new(
        answer,
        Box::new(NeutralParity),
        PersistenceGateway::new(MemoryStore::new()),
        UiOptions {
            ascii_only: config.ascii_only(),
            high_contrast: config.high_contrast(),
        },
    );

    app.save();
    assert!(!app.controller().is_complete());
    assert!(!app.controller().is_locked(cubie("UFR")));
    assert!(app.controller().is_locked(cubie("DBR")));

    app.move_cursor(1, 0);
    assert_eq!(app.cursor(), cubie("UFR"));
    app.select_cursor();
    app.rotate_selected();
    app.save();
    assert!(app.controller().is_complete());
}

#[test]
fn malformed_answer_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[puzzle]\nanswer = [1, 1]\n").unwrap();
    let config = CubistConfig::load_from(&path).unwrap().unwrap();
    assert!(config.answer().is_err());
}
