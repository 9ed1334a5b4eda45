//! Keyboard and mouse handling.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use tracing::debug;

use cubist_core::KeyValueStore;

use crate::app::App;
use crate::pointer::{PointerRelease, frame_interval};

const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Wait up to one frame for input, then drain whatever is queued.
pub fn handle_events<S: KeyValueStore>(app: &mut App<S>) -> Result<()> {
    if !event::poll(frame_interval(app.pointer_held()))? {
        return Ok(());
    }
    for _ in 0..MAX_EVENTS_PER_FRAME {
        let event = event::read()?;
        handle_event(app, &event);
        if app.should_quit() || !event::poll(Duration::ZERO)? {
            break;
        }
    }
    Ok(())
}

pub fn handle_event<S: KeyValueStore>(app: &mut App<S>, event: &Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, *key),
        Event::Mouse(mouse) => handle_mouse(app, *mouse),
        Event::Resize(..) => app.mark_dirty(),
        _ => {}
    }
}

fn handle_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            app.request_quit();
        }
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Left => app.move_cursor(-1, 0),
        KeyCode::Right => app.move_cursor(1, 0),
        KeyCode::Up => app.move_cursor(0, -1),
        KeyCode::Down => app.move_cursor(0, 1),
        KeyCode::PageUp => app.change_layer(1),
        KeyCode::PageDown => app.change_layer(-1),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_cursor(),
        KeyCode::Tab => app.cycle_picker(1),
        KeyCode::BackTab => app.cycle_picker(-1),
        KeyCode::Char('a') => app.assign_highlighted(),
        KeyCode::Char('e') | KeyCode::Delete | KeyCode::Backspace => app.erase_selected(),
        KeyCode::Char('r') => app.rotate_selected(),
        KeyCode::Char('s') => app.save(),
        KeyCode::Char('l') => app.load(),
        _ => {}
    }
}

fn handle_mouse<S: KeyValueStore>(app: &mut App<S>, mouse: MouseEvent) {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.gesture_mut().press(column, row),
        MouseEventKind::Up(MouseButton::Left) => match app.gesture_mut().release(column, row) {
            PointerRelease::Pick { column, row } => {
                if !app.pick_at(column, row) {
                    debug!(column, row, "Pick missed the board");
                }
            }
            PointerRelease::Drag | PointerRelease::Stray => {}
        },
        _ => {}
    }
}
