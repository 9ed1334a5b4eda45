//! The assignment state machine.
//!
//! # States
//!
//! ```text
//! Idle --select(c)--> Selected(c, locked)
//! Selected(c, _) --select(c)--> Idle
//! Selected(c, _) --select(d)--> Selected(d, locked)
//! ```
//!
//! `assign`, `erase` and `rotate` are only accepted in `Selected(c, false)`
//! for the same cubie `c`. A rejected operation returns an [`EditError`] and
//! leaves every piece of state untouched. An accepted one mutates the state
//! vector and stickers, then re-runs the parity oracle and notifies the
//! observer.

use thiserror::Error;
use tracing::debug;

use cubist_types::{
    AnswerState, Category, Cubie, ParityReport, Position, Snapshot, StateError, StateVector,
    Stickers,
};

use crate::locking;
use crate::observer::{EditorObserver, Selection};
use crate::oracle::ParityOracle;
use crate::persist::{KeyValueStore, PersistError, PersistenceGateway, SavedState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no cubie is selected")]
    NothingSelected,
    #[error("{requested} is not the selected cubie ({selected} is)")]
    NotSelected { requested: Cubie, selected: Cubie },
    #[error("{0} is a fixed piece")]
    Fixed(Cubie),
    #[error("{0} is already solved and locked")]
    Locked(Cubie),
    #[error(
        "{piece} is a {} piece and cannot go in {} slot {slot}",
        .piece.category(),
        .slot.category()
    )]
    CategoryMismatch { slot: Position, piece: Position },
    #[error("{piece} is already placed at {holder}")]
    PieceInUse { piece: Position, holder: Position },
    #[error(transparent)]
    State(#[from] StateError),
}

/// One entry in a picker list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub piece: Position,
    pub available: bool,
}

/// What a picker should display for the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerView {
    /// Nothing selected.
    Hidden,
    /// Selected but not editable. Every control disabled.
    Locked { cubie: Cubie },
    Candidates {
        cubie: Cubie,
        category: Category,
        entries: Vec<Candidate>,
    },
}

#[derive(Debug)]
pub struct AssignmentController<O, V> {
    state: StateVector,
    stickers: Stickers,
    answer: AnswerState,
    snapshot: Option<Snapshot>,
    selection: Selection,
    parity: ParityReport,
    oracle: O,
    observer: V,
}

impl<O: ParityOracle, V: EditorObserver> AssignmentController<O, V> {
    /// Start from the solved cube with nothing persisted yet.
    pub fn new(answer: AnswerState, oracle: O, observer: V) -> Self {
        let state = StateVector::identity();
        let parity = oracle.report(&state);
        Self {
            state,
            stickers: Stickers::solved(),
            answer,
            snapshot: None,
            selection: Selection::Idle,
            parity,
            oracle,
            observer,
        }
    }

    #[must_use]
    pub fn with_snapshot(mut self, snapshot: Snapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    pub fn state(&self) -> &StateVector {
        &self.state
    }

    pub fn stickers(&self) -> &Stickers {
        &self.stickers
    }

    pub fn answer(&self) -> &AnswerState {
        &self.answer
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Residues from the most recent parity check.
    pub fn parity(&self) -> ParityReport {
        self.parity
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn observer(&self) -> &V {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut V {
        &mut self.observer
    }

    pub fn is_locked(&self, cubie: Cubie) -> bool {
        locking::is_locked(cubie, self.snapshot.as_ref(), &self.answer)
    }

    /// True once the persisted state matches the answer in every slot.
    pub fn is_complete(&self) -> bool {
        self.snapshot.is_some()
            && Position::all()
                .all(|p| locking::slot_confirmed(p, self.snapshot.as_ref(), &self.answer))
    }

    /// Toggle selection of `cubie`.
    pub fn select(&mut self, cubie: Cubie) -> Selection {
        self.selection = match self.selection {
            Selection::Selected { cubie: current, .. } if current == cubie => Selection::Idle,
            _ => Selection::Selected {
                cubie,
                locked: self.is_locked(cubie),
            },
        };
        debug!(cubie = %cubie, selection = ?self.selection, "Selection changed");
        self.observer.selection_changed(self.selection);
        self.selection
    }

    pub fn deselect(&mut self) {
        if self.selection != Selection::Idle {
            self.selection = Selection::Idle;
            self.observer.selection_changed(self.selection);
        }
    }

    /// Place `piece` in the selected slot with orientation 0.
    pub fn assign(&mut self, cubie: Cubie, piece: Position) -> Result<(), EditError> {
        let slot = self.editable_slot(cubie)?;
        if piece.category() != slot.category() {
            return Err(EditError::CategoryMismatch { slot, piece });
        }
        self.state.assign(slot, piece).map_err(|e| match e {
            StateError::DuplicatePiece { first, .. } => EditError::PieceInUse {
                piece,
                holder: first,
            },
            other => EditError::State(other),
        })?;
        self.stickers.paint(cubie, piece);
        debug!(slot = %slot, piece = %piece, "Assigned piece");
        self.after_edit(cubie);
        Ok(())
    }

    /// Empty the selected slot.
    pub fn erase(&mut self, cubie: Cubie) -> Result<(), EditError> {
        let slot = self.editable_slot(cubie)?;
        self.state.erase(slot);
        self.stickers.erase(cubie);
        debug!(slot = %slot, "Erased slot");
        self.after_edit(cubie);
        Ok(())
    }

    /// Turn the selected slot's piece one step. Returns the new orientation.
    pub fn rotate(&mut self, cubie: Cubie) -> Result<u8, EditError> {
        let slot = self.editable_slot(cubie)?;
        let orientation = self.state.rotate(slot);
        self.stickers.rotate(cubie);
        debug!(slot = %slot, orientation, "Rotated slot");
        self.after_edit(cubie);
        Ok(orientation)
    }

    /// Picker contents for the current selection, with availability
    /// computed from the live permutation.
    pub fn picker(&self) -> PickerView {
        let (cubie, locked) = match self.selection {
            Selection::Idle => return PickerView::Hidden,
            Selection::Selected { cubie, locked } => (cubie, locked),
        };
        let category = match cubie.category() {
            Some(category) if !locked => category,
            _ => return PickerView::Locked { cubie },
        };
        let entries = category
            .picker_order()
            .iter()
            .map(|&piece| Candidate {
                piece,
                available: !self.state.is_active(piece),
            })
            .collect();
        PickerView::Candidates {
            cubie,
            category,
            entries,
        }
    }

    /// Persist the live state and make it the new locking snapshot.
    pub fn save<S: KeyValueStore>(
        &mut self,
        gateway: &mut PersistenceGateway<S>,
    ) -> Result<(), PersistError> {
        let saved = SavedState {
            state: self.state.clone(),
            stickers: self.stickers.clone(),
        };
        gateway.save(&saved)?;
        self.snapshot = Some(Snapshot::new(saved.state));
        if let Selection::Selected { cubie, locked } = self.selection {
            let now_locked = self.is_locked(cubie);
            if now_locked != locked {
                self.selection = Selection::Selected {
                    cubie,
                    locked: now_locked,
                };
                self.observer.selection_changed(self.selection);
            }
        }
        debug!(complete = self.is_complete(), "Snapshot refreshed after save");
        Ok(())
    }

    /// Replace the live state with the persisted one.
    ///
    /// On failure nothing changes.
    pub fn load<S: KeyValueStore>(
        &mut self,
        gateway: &PersistenceGateway<S>,
    ) -> Result<(), PersistError> {
        let SavedState { state, stickers } = gateway.load()?;
        self.snapshot = Some(Snapshot::new(state.clone()));
        self.state = state;
        self.stickers = stickers;
        self.deselect();
        for cubie in Cubie::visible() {
            self.observer.stickers_changed(cubie, self.stickers.get(cubie));
        }
        self.refresh_parity();
        debug!(complete = self.is_complete(), "Snapshot refreshed after load");
        Ok(())
    }

    fn editable_slot(&self, cubie: Cubie) -> Result<Position, EditError> {
        match self.selection {
            Selection::Idle => Err(EditError::NothingSelected),
            Selection::Selected { cubie: selected, .. } if selected != cubie => {
                Err(EditError::NotSelected {
                    requested: cubie,
                    selected,
                })
            }
            Selection::Selected { locked, .. } => match cubie.position() {
                None => Err(EditError::Fixed(cubie)),
                Some(_) if locked => Err(EditError::Locked(cubie)),
                Some(slot) => Ok(slot),
            },
        }
    }

    fn after_edit(&mut self, cubie: Cubie) {
        self.observer.stickers_changed(cubie, self.stickers.get(cubie));
        self.refresh_parity();
    }

    fn refresh_parity(&mut self) {
        self.parity = self.oracle.report(&self.state);
        if !self.parity.is_consistent() {
            debug!(parity = %self.parity, "State is not solvable as is");
        }
        self.observer.parity_changed(self.parity);
    }
}
