//! Editing behavior seen through the public controller API.

use cubist_core::{EditError, PickerView, Selection};
use cubist_types::{AnswerState, Cubie, SlotValue, Snapshot, StateVector, catalog};

use crate::common::{assert_well_formed, controller, controller_with_answer, cubie, pos};

#[test]
fn catalog_lookups() {
    assert_eq!(catalog::index("UF"), Some(0));
    assert_eq!(catalog::index("UFR"), Some(12));
    assert_eq!(catalog::index("DBR"), Some(19));
    assert_eq!(catalog::index(""), None);
    assert_eq!(catalog::index("U"), None);
}

#[test]
fn occupied_piece_cannot_be_placed_twice() {
    let mut c = controller();

    // Free edge slot 5 (DR) and move the DR piece into DF.
    c.select(cubie("DR"));
    c.erase(cubie("DR")).unwrap();
    c.select(cubie("DF"));
    c.erase(cubie("DF")).unwrap();
    c.assign(cubie("DF"), pos("DR")).unwrap();

    c.select(cubie("DR"));
    let before = c.state().permutation().to_owned();
    let err = c.assign(cubie("DR"), pos("DR")).unwrap_err();
    assert_eq!(
        err,
        EditError::PieceInUse {
            piece: pos("DR"),
            holder: pos("DF"),
        }
    );
    assert_eq!(c.state().permutation(), &before);
    assert_eq!(c.state().slot(pos("DR")), SlotValue::Empty);
}

#[test]
fn long_edit_session_keeps_invariants() {
    let mut c = controller();
    let script = [
        ("UF", 'e'),
        ("UR", 'e'),
        ("UF", 'a'),
        ("UFR", 'r'),
        ("UFR", 'r'),
        ("DLB", 'e'),
        ("DBR", 'e'),
        ("DLB", 'a'),
        ("BL", 'r'),
        ("UR", 'a'),
        ("DBR", 'a'),
    ];
    for (name, op) in script {
        let target = cubie(name);
        if c.selection().cubie() != Some(target) {
            c.select(target);
        }
        let result = match op {
            'e' => c.erase(target),
            'r' => c.rotate(target).map(|_| ()),
            _ => match c.picker() {
                PickerView::Candidates { entries, .. } => {
                    match entries.iter().find(|e| e.available) {
                        Some(free) => c.assign(target, free.piece),
                        None => Ok(()),
                    }
                }
                _ => Ok(()),
            },
        };
        assert!(result.is_ok(), "{name} {op}: {result:?}");
        assert_well_formed(c.state());
    }

    assert!(c.state().permutation().iter().all(|slot| !slot.is_empty()));
    assert!(c.parity().is_consistent());
    // Each step mutated once and reported parity once.
    assert_eq!(c.observer().parity.len(), script.len());
    assert_eq!(c.oracle().runs.get(), script.len() + 1);
}

#[test]
fn solved_snapshot_blocks_every_edit() {
    let mut c = controller().with_snapshot(Snapshot::new(StateVector::identity()));
    assert!(c.is_complete());
    for target in Cubie::visible() {
        let selection = c.select(target);
        assert!(matches!(selection, Selection::Selected { locked: true, .. }));
        assert!(c.erase(target).is_err());
        assert!(c.rotate(target).is_err());
        if let Some(slot) = target.position() {
            assert!(c.assign(target, slot).is_err());
        }
        c.deselect();
    }
    assert_eq!(c.state(), &StateVector::identity());
}

#[test]
fn non_identity_answer_changes_what_locks() {
    let mut goal = StateVector::identity();
    goal.rotate(pos("UF"));
    let answer = AnswerState::new(goal.clone());

    let c = controller_with_answer(answer.clone()).with_snapshot(Snapshot::new(goal));
    assert!(c.is_locked(cubie("UF")));
    assert!(c.is_complete());

    let c = controller_with_answer(answer).with_snapshot(Snapshot::new(StateVector::identity()));
    assert!(!c.is_locked(cubie("UF")));
    assert!(c.is_locked(cubie("UR")));
    assert!(!c.is_complete());
}
