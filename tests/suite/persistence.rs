//! Save and load through the on-disk store.

use std::fs;

use cubist_core::{
    AssignmentController, ORIENTATION_KEY, PERMUTATION_KEY, PersistError, PersistenceGateway,
};
use cubist_store::JsonFileStore;
use cubist_types::{AnswerState, SlotValue};
use tempfile::tempdir;

use crate::common::{EmptySlotParity, RecordingObserver, controller, cubie, pos};

#[test]
fn save_then_load_in_a_new_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut first = controller();
    first.select(cubie("FL"));
    first.rotate(cubie("FL")).unwrap();
    first.select(cubie("DFL"));
    first.erase(cubie("DFL")).unwrap();
    let mut gateway = PersistenceGateway::new(JsonFileStore::open(&path).unwrap());
    first.save(&mut gateway).unwrap();

    let mut second = AssignmentController::new(
        AnswerState::identity(),
        EmptySlotParity::default(),
        RecordingObserver::default(),
    );
    let gateway = PersistenceGateway::new(JsonFileStore::open(&path).unwrap());
    second.load(&gateway).unwrap();

    assert_eq!(second.state(), first.state());
    assert_eq!(second.stickers(), first.stickers());
    assert_eq!(second.stickers().get(cubie("FL")), "LF");
    assert_eq!(second.state().slot(pos("DFL")), SlotValue::Empty);
    assert_eq!(second.parity().edge, 1);

    // Untouched and saved correctly: locked. Edited: still open.
    assert!(second.is_locked(cubie("UF")));
    assert!(!second.is_locked(cubie("FL")));
    assert!(!second.is_locked(cubie("DFL")));
}

#[test]
fn file_layout_is_flat_string_map() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut c = controller();
    c.select(cubie("UB"));
    c.erase(cubie("UB")).unwrap();
    let mut gateway = PersistenceGateway::new(JsonFileStore::open(&path).unwrap());
    c.save(&mut gateway).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let object = raw.as_object().unwrap();
    assert_eq!(object.len(), 28);
    assert_eq!(object["UB"], "");
    assert_eq!(object["U"], "U");
    assert!(object.values().all(serde_json::Value::is_string));

    let permutation: Vec<i32> =
        serde_json::from_str(object[PERMUTATION_KEY].as_str().unwrap()).unwrap();
    assert_eq!(permutation[2], -1);
    assert_eq!(permutation.len(), 20);
    let orientation: Vec<i32> =
        serde_json::from_str(object[ORIENTATION_KEY].as_str().unwrap()).unwrap();
    assert_eq!(orientation, vec![0; 20]);
}

#[test]
fn missing_key_fails_and_keeps_live_state() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut c = controller();
    let mut gateway = PersistenceGateway::new(JsonFileStore::open(&path).unwrap());
    c.save(&mut gateway).unwrap();

    let mut raw: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    raw.remove(ORIENTATION_KEY);
    fs::write(&path, serde_json::to_string(&raw).unwrap()).unwrap();

    let mut live = controller();
    live.select(cubie("BR"));
    live.rotate(cubie("BR")).unwrap();
    let before = live.state().clone();

    let gateway = PersistenceGateway::new(JsonFileStore::open(&path).unwrap());
    let err = live.load(&gateway).unwrap_err();
    assert!(matches!(err, PersistError::MissingKey(ref key) if key == ORIENTATION_KEY));
    assert_eq!(live.state(), &before);
    assert!(live.snapshot().is_none());
    assert_eq!(live.selection().cubie(), Some(cubie("BR")));
}

#[test]
fn failed_save_is_not_adopted_by_a_later_load() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("sub");
    let mut gateway =
        PersistenceGateway::new(JsonFileStore::open(blocker.join("state.json")).unwrap());
    fs::write(&blocker, "not a directory").unwrap();

    let mut c = controller();
    c.select(cubie("UB"));
    c.rotate(cubie("UB")).unwrap();
    let err = c.save(&mut gateway).unwrap_err();
    assert!(matches!(err, PersistError::Store(_)));
    assert!(c.snapshot().is_none());
    assert!(!blocker.join("state.json").exists());

    // The store still holds nothing committed, so a load finds no keys.
    let err = c.load(&gateway).unwrap_err();
    assert!(matches!(err, PersistError::MissingKey(_)));
    assert!(c.snapshot().is_none());
    assert!(!c.is_locked(cubie("UF")));
    assert!(!c.is_complete());
    assert_eq!(c.stickers().get(cubie("UB")), "BU");
}
