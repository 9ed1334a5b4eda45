//! Which cubies may be edited.

use cubist_types::{AnswerState, Cubie, Position, Snapshot};

/// A cubie is locked when it is not tracked (a center or the core) or when
/// the last persisted state already had the goal piece and orientation in
/// its slot.
///
/// Without a snapshot nothing tracked is locked: progress only counts once
/// it has been saved or loaded.
#[must_use]
pub fn is_locked(cubie: Cubie, snapshot: Option<&Snapshot>, answer: &AnswerState) -> bool {
    match cubie.position() {
        None => true,
        Some(position) => slot_confirmed(position, snapshot, answer),
    }
}

#[must_use]
pub fn slot_confirmed(
    position: Position,
    snapshot: Option<&Snapshot>,
    answer: &AnswerState,
) -> bool {
    snapshot.is_some_and(|snapshot| snapshot.confirms(answer, position))
}
