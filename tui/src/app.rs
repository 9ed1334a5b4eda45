//! Front-end state wrapped around the assignment controller.

use tracing::{info, warn};

use cubist_core::{
    AssignmentController, EditError, EditorObserver, KeyValueStore, ParityOracle,
    PersistenceGateway, PickerView,
};
use cubist_types::{AnswerState, Cubie};

use crate::board::BoardLayout;
use crate::pointer::PickGesture;
use crate::theme::UiOptions;
use crate::view::ViewModel;

pub type Controller = AssignmentController<Box<dyn ParityOracle>, ViewModel>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

pub struct App<S> {
    controller: Controller,
    gateway: PersistenceGateway<S>,
    options: UiOptions,
    cursor: (i8, i8, i8),
    picker_index: usize,
    status: Option<Status>,
    board: Option<BoardLayout>,
    gesture: PickGesture,
    should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(
        answer: AnswerState,
        oracle: Box<dyn ParityOracle>,
        gateway: PersistenceGateway<S>,
        options: UiOptions,
    ) -> Self {
        let mut controller = AssignmentController::new(answer, oracle, ViewModel::default());
        let parity = controller.parity();
        controller.observer_mut().parity_changed(parity);
        Self {
            controller,
            gateway,
            options,
            cursor: (0, 1, 1),
            picker_index: 0,
            status: None,
            board: None,
            gesture: PickGesture::default(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    #[must_use]
    pub fn gateway(&self) -> &PersistenceGateway<S> {
        &self.gateway
    }

    #[must_use]
    pub fn options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn cursor(&self) -> Cubie {
        let (x, y, z) = self.cursor;
        Cubie::at(x, y, z).unwrap_or(Cubie::core())
    }

    #[must_use]
    pub fn picker_index(&self) -> usize {
        self.picker_index
    }

    #[must_use]
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn board(&self) -> Option<BoardLayout> {
        self.board
    }

    /// Record where the board was last drawn so pointer picks can be mapped.
    pub fn set_board(&mut self, board: BoardLayout) {
        self.board = Some(board);
    }

    pub fn gesture_mut(&mut self) -> &mut PickGesture {
        &mut self.gesture
    }

    #[must_use]
    pub fn pointer_held(&self) -> bool {
        self.gesture.is_held()
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mark_dirty(&mut self) {
        self.controller.observer_mut().mark_dirty();
    }

    /// True if anything changed since the last frame was drawn.
    pub fn take_redraw(&mut self) -> bool {
        self.controller.observer_mut().take_dirty()
    }

    /// Move the cursor within the current layer, clamped to the grid.
    pub fn move_cursor(&mut self, dx: i8, dz: i8) {
        let (x, y, z) = self.cursor;
        self.cursor = ((x + dx).clamp(-1, 1), y, (z + dz).clamp(-1, 1));
        self.controller.observer_mut().mark_dirty();
    }

    /// Move the cursor up (`dy > 0`) or down a layer.
    pub fn change_layer(&mut self, dy: i8) {
        let (x, y, z) = self.cursor;
        self.cursor = (x, (y + dy).clamp(-1, 1), z);
        self.controller.observer_mut().mark_dirty();
    }

    /// Toggle selection of the cubie under the cursor.
    pub fn select_cursor(&mut self) {
        self.select(self.cursor());
    }

    /// Map a terminal cell to a cubie and select it. Returns false when the
    /// point is not over a visible cubie.
    pub fn pick_at(&mut self, column: u16, row: u16) -> bool {
        let Some(cubie) = self.board.and_then(|board| board.pick(column, row)) else {
            return false;
        };
        self.cursor = cubie.coords();
        self.select(cubie);
        true
    }

    fn select(&mut self, cubie: Cubie) {
        if self.controller.is_complete() {
            self.set_status(StatusKind::Info, "Solved. Nothing left to edit.");
            return;
        }
        self.controller.select(cubie);
        self.picker_index = match self.controller.picker() {
            PickerView::Candidates { entries, .. } => {
                entries.iter().position(|e| e.available).unwrap_or(0)
            }
            PickerView::Hidden | PickerView::Locked { .. } => 0,
        };
        self.status = None;
    }

    /// Step the picker highlight, wrapping around the list.
    pub fn cycle_picker(&mut self, step: isize) {
        if let PickerView::Candidates { entries, .. } = self.controller.picker() {
            let len = entries.len() as isize;
            self.picker_index = (self.picker_index as isize + step).rem_euclid(len) as usize;
            self.controller.observer_mut().mark_dirty();
        }
    }

    /// Assign the highlighted picker entry to the selected slot.
    pub fn assign_highlighted(&mut self) {
        let (cubie, candidate) = match self.controller.picker() {
            PickerView::Candidates { cubie, entries, .. } => {
                match entries.get(self.picker_index) {
                    Some(candidate) => (cubie, *candidate),
                    None => return,
                }
            }
            PickerView::Locked { cubie } => {
                self.report(&EditError::Locked(cubie));
                return;
            }
            PickerView::Hidden => {
                self.report(&EditError::NothingSelected);
                return;
            }
        };
        if !candidate.available {
            self.set_status(
                StatusKind::Warning,
                format!("{} is already placed", candidate.piece),
            );
            return;
        }
        match self.controller.assign(cubie, candidate.piece) {
            Ok(()) => self.set_status(
                StatusKind::Info,
                format!("{} placed at {cubie}", candidate.piece),
            ),
            Err(e) => self.report(&e),
        }
    }

    pub fn erase_selected(&mut self) {
        let Some(cubie) = self.selected() else {
            return;
        };
        match self.controller.erase(cubie) {
            Ok(()) => self.set_status(StatusKind::Info, format!("{cubie} erased")),
            Err(e) => self.report(&e),
        }
    }

    pub fn rotate_selected(&mut self) {
        let Some(cubie) = self.selected() else {
            return;
        };
        match self.controller.rotate(cubie) {
            Ok(orientation) => self.set_status(
                StatusKind::Info,
                format!("{cubie} turned to orientation {orientation}"),
            ),
            Err(e) => self.report(&e),
        }
    }

    pub fn save(&mut self) {
        match self.controller.save(&mut self.gateway) {
            Ok(()) => {
                info!("Saved cube state");
                let text = if self.controller.is_complete() {
                    "Saved. Solved!"
                } else {
                    "Saved"
                };
                self.set_status(StatusKind::Info, text);
            }
            Err(e) => {
                warn!("Failed to save cube state: {e}");
                self.set_status(StatusKind::Error, format!("Save failed: {e}"));
            }
        }
    }

    pub fn load(&mut self) {
        match self.controller.load(&self.gateway) {
            Ok(()) => {
                info!("Loaded cube state");
                self.set_status(StatusKind::Info, "Loaded");
            }
            Err(e) => {
                warn!("Failed to load cube state: {e}");
                self.set_status(StatusKind::Error, format!("Load failed: {e}"));
            }
        }
    }

    fn selected(&mut self) -> Option<Cubie> {
        let cubie = self.controller.selection().cubie();
        if cubie.is_none() {
            self.report(&EditError::NothingSelected);
        }
        cubie
    }

    fn report(&mut self, error: &EditError) {
        let kind = match error {
            EditError::Fixed(_) | EditError::Locked(_) => StatusKind::Info,
            _ => StatusKind::Warning,
        };
        self.set_status(kind, error.to_string());
    }

    fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(Status {
            kind,
            text: text.into(),
        });
        self.controller.observer_mut().mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use cubist_core::{NeutralParity, PersistenceGateway, PickerView};
    use cubist_store::MemoryStore;
    use cubist_types::{AnswerState, Cubie, Position, SlotValue};
    use ratatui::layout::Rect;

    use super::{App, StatusKind};
    use crate::board::{BOARD_WIDTH, BoardLayout};
    use crate::theme::UiOptions;

    fn app() -> App<MemoryStore> {
        App::new(
            AnswerState::identity(),
            Box::new(NeutralParity),
            PersistenceGateway::new(MemoryStore::new()),
            UiOptions::default(),
        )
    }

    fn cubie(name: &str) -> Cubie {
        Cubie::from_name(name).unwrap()
    }

    #[test]
    fn cursor_starts_at_uf_and_clamps() {
        let mut app = app();
        assert_eq!(app.cursor(), cubie("UF"));
        app.move_cursor(1, 1);
        assert_eq!(app.cursor(), cubie("UFR"));
        app.change_layer(1);
        assert_eq!(app.cursor(), cubie("UFR"));
        app.change_layer(-2);
        assert_eq!(app.cursor(), cubie("DRF"));
    }

    #[test]
    fn erase_assign_through_picker() {
        let mut app = app();
        app.select_cursor();
        app.erase_selected();
        let uf = Position::from_name("UF").unwrap();
        assert_eq!(app.controller().state().slot(uf), SlotValue::Empty);

        // Re-selecting resets the picker to the only free piece.
        app.select_cursor();
        app.select_cursor();
        let PickerView::Candidates { entries, .. } = app.controller().picker() else {
            panic!("expected candidates");
        };
        assert_eq!(entries[app.picker_index()].piece, uf);

        app.assign_highlighted();
        assert_eq!(app.controller().state().slot(uf), SlotValue::Assigned(uf));
    }

    #[test]
    fn unavailable_candidate_is_refused() {
        let mut app = app();
        app.select_cursor();
        app.cycle_picker(1);
        let before = app.controller().state().clone();
        app.assign_highlighted();
        assert_eq!(app.controller().state(), &before);
        assert_eq!(app.status().unwrap().kind, StatusKind::Warning);
    }

    #[test]
    fn cycle_picker_wraps() {
        let mut app = app();
        app.select_cursor();
        app.cycle_picker(-1);
        assert_eq!(app.picker_index(), 11);
        app.cycle_picker(1);
        assert_eq!(app.picker_index(), 0);
    }

    #[test]
    fn edits_without_selection_report() {
        let mut app = app();
        app.rotate_selected();
        assert!(app.status().unwrap().text.contains("no cubie"));
    }

    #[test]
    fn saving_solved_cube_stops_picks() {
        let mut app = app();
        app.save();
        assert!(app.controller().is_complete());
        app.select_cursor();
        assert_eq!(app.controller().selection().cubie(), None);
        assert!(app.status().unwrap().text.contains("Solved"));
    }

    #[test]
    fn load_failure_is_reported_not_fatal() {
        let mut app = app();
        app.load();
        assert_eq!(app.status().unwrap().kind, StatusKind::Error);
        assert!(app.controller().snapshot().is_none());
    }

    #[test]
    fn pick_maps_through_last_board() {
        let mut app = app();
        assert!(!app.pick_at(5, 5));
        let board = BoardLayout::new(Rect::new(0, 0, BOARD_WIDTH, 11));
        app.set_board(board);
        let dl = board.cell_rect(cubie("DL"));
        assert!(app.pick_at(dl.x + 1, dl.y + 1));
        assert_eq!(app.controller().selection().cubie(), Some(cubie("DL")));
        assert_eq!(app.cursor(), cubie("DL"));
    }
}
