//! Pointer gestures and frame pacing.

use std::time::Duration;

/// Frame interval while nothing is held.
pub const IDLE_FRAME: Duration = Duration::from_millis(100);
/// Frame interval while a pointer button is down (~120 FPS).
pub const ACTIVE_FRAME: Duration = Duration::from_millis(8);

/// Farthest a press may travel, in cells, and still count as a pick.
const PICK_SLOP: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerRelease {
    /// Press and release landed close together.
    Pick { column: u16, row: u16 },
    /// The pointer moved too far between press and release.
    Drag,
    /// Release without a tracked press.
    Stray,
}

/// Tells a click on a cubie apart from a drag.
#[derive(Debug, Clone, Copy, Default)]
pub struct PickGesture {
    pressed_at: Option<(u16, u16)>,
}

impl PickGesture {
    pub fn press(&mut self, column: u16, row: u16) {
        self.pressed_at = Some((column, row));
    }

    pub fn release(&mut self, column: u16, row: u16) -> PointerRelease {
        match self.pressed_at.take() {
            None => PointerRelease::Stray,
            Some((x, y)) if travel_squared((x, y), (column, row)) > PICK_SLOP * PICK_SLOP => {
                PointerRelease::Drag
            }
            Some((x, y)) => PointerRelease::Pick { column: x, row: y },
        }
    }

    #[must_use]
    pub fn is_held(&self) -> bool {
        self.pressed_at.is_some()
    }
}

fn travel_squared(from: (u16, u16), to: (u16, u16)) -> u32 {
    let dx = u32::from(from.0.abs_diff(to.0));
    let dy = u32::from(from.1.abs_diff(to.1));
    dx * dx + dy * dy
}

/// How long to wait for input before drawing the next frame.
#[must_use]
pub fn frame_interval(pointer_held: bool) -> Duration {
    if pointer_held { ACTIVE_FRAME } else { IDLE_FRAME }
}

#[cfg(test)]
mod tests {
    use super::{ACTIVE_FRAME, IDLE_FRAME, PickGesture, PointerRelease, frame_interval};

    #[test]
    fn small_movement_is_a_pick_at_press_point() {
        let mut gesture = PickGesture::default();
        gesture.press(10, 4);
        assert!(gesture.is_held());
        assert_eq!(
            gesture.release(11, 4),
            PointerRelease::Pick { column: 10, row: 4 }
        );
        assert!(!gesture.is_held());
        gesture.press(10, 4);
        assert_eq!(
            gesture.release(10, 3),
            PointerRelease::Pick { column: 10, row: 4 }
        );
    }

    #[test]
    fn large_movement_is_a_drag() {
        let mut gesture = PickGesture::default();
        gesture.press(10, 4);
        assert_eq!(gesture.release(12, 4), PointerRelease::Drag);
        gesture.press(10, 4);
        assert_eq!(gesture.release(10, 1), PointerRelease::Drag);
    }

    #[test]
    fn diagonal_step_is_a_drag() {
        let mut gesture = PickGesture::default();
        gesture.press(10, 4);
        assert_eq!(gesture.release(11, 5), PointerRelease::Drag);
        gesture.press(10, 4);
        assert_eq!(gesture.release(9, 3), PointerRelease::Drag);
    }

    #[test]
    fn release_without_press_is_stray() {
        let mut gesture = PickGesture::default();
        assert_eq!(gesture.release(0, 0), PointerRelease::Stray);
    }

    #[test]
    fn cadence_speeds_up_while_held() {
        assert_eq!(frame_interval(false), IDLE_FRAME);
        assert_eq!(frame_interval(true), ACTIVE_FRAME);
        assert!(ACTIVE_FRAME < IDLE_FRAME);
    }
}
