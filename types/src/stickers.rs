//! Per-cubie sticker strings.
//!
//! A cubie's stickers are the face letters painted on it, one letter per
//! visible side, in the same side order as the cubie's own name. The empty
//! string is a blank (erased) cubie.

use thiserror::Error;

use crate::catalog::Position;
use crate::layout::{Cubie, Face};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StickerError {
    #[error("stickers for {cubie} must have {expected} letters (got {value:?})")]
    WrongSideCount {
        cubie: Cubie,
        expected: usize,
        value: String,
    },
    #[error("stickers for {cubie} contain {letter:?}, which is not a face")]
    UnknownFace { cubie: Cubie, letter: char },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stickers {
    by_cubie: Vec<String>,
}

impl Stickers {
    /// Every cubie painted with its own name.
    #[must_use]
    pub fn solved() -> Self {
        Self {
            by_cubie: Cubie::all().map(|cubie| cubie.name().to_string()).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, cubie: Cubie) -> &str {
        &self.by_cubie[cubie.index()]
    }

    /// Replace a cubie's stickers after checking they fit it.
    pub fn set(&mut self, cubie: Cubie, value: &str) -> Result<(), StickerError> {
        let value = validate(cubie, value)?;
        self.by_cubie[cubie.index()] = value;
        Ok(())
    }

    /// Paint a tracked cubie with the colors of `piece`.
    pub fn paint(&mut self, cubie: Cubie, piece: Position) {
        self.by_cubie[cubie.index()] = piece.name().to_string();
    }

    pub fn erase(&mut self, cubie: Cubie) {
        self.by_cubie[cubie.index()].clear();
    }

    /// Cycle the letters one step so each moves to the previous side.
    pub fn rotate(&mut self, cubie: Cubie) {
        let stickers = &mut self.by_cubie[cubie.index()];
        if stickers.len() > 1 {
            let first = stickers.remove(0);
            stickers.push(first);
        }
    }

    /// Visible cubies paired with their stickers.
    pub fn iter(&self) -> impl Iterator<Item = (Cubie, &str)> {
        Cubie::visible().map(|cubie| (cubie, self.get(cubie)))
    }
}

impl Default for Stickers {
    fn default() -> Self {
        Self::solved()
    }
}

fn validate(cubie: Cubie, value: &str) -> Result<String, StickerError> {
    let expected = cubie.name().len();
    let sides = value.chars().count();
    if sides != 0 && sides != expected {
        return Err(StickerError::WrongSideCount {
            cubie,
            expected,
            value: value.to_string(),
        });
    }
    if let Some(letter) = value.chars().find(|c| Face::from_letter(*c).is_none()) {
        return Err(StickerError::UnknownFace { cubie, letter });
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::{StickerError, Stickers};
    use crate::catalog::Position;
    use crate::layout::Cubie;

    fn cubie(name: &str) -> Cubie {
        Cubie::from_name(name).unwrap()
    }

    #[test]
    fn solved_paints_own_names() {
        let stickers = Stickers::solved();
        assert_eq!(stickers.get(cubie("UFR")), "UFR");
        assert_eq!(stickers.get(cubie("F")), "F");
        assert_eq!(stickers.iter().count(), 26);
    }

    #[test]
    fn rotate_cycles_letters() {
        let mut stickers = Stickers::solved();
        stickers.rotate(cubie("UFR"));
        assert_eq!(stickers.get(cubie("UFR")), "FRU");
        stickers.rotate(cubie("UFR"));
        stickers.rotate(cubie("UFR"));
        assert_eq!(stickers.get(cubie("UFR")), "UFR");

        stickers.rotate(cubie("DL"));
        assert_eq!(stickers.get(cubie("DL")), "LD");
    }

    #[test]
    fn paint_and_erase() {
        let mut stickers = Stickers::solved();
        stickers.paint(cubie("UF"), Position::from_name("BR").unwrap());
        assert_eq!(stickers.get(cubie("UF")), "BR");
        stickers.erase(cubie("UF"));
        assert_eq!(stickers.get(cubie("UF")), "");
        stickers.rotate(cubie("UF"));
        assert_eq!(stickers.get(cubie("UF")), "");
    }

    #[test]
    fn set_validates() {
        let mut stickers = Stickers::solved();
        assert!(stickers.set(cubie("UF"), "RB").is_ok());
        assert!(stickers.set(cubie("UF"), "").is_ok());
        assert!(matches!(
            stickers.set(cubie("UF"), "RBU"),
            Err(StickerError::WrongSideCount { expected: 2, .. })
        ));
        assert!(matches!(
            stickers.set(cubie("UF"), "RX"),
            Err(StickerError::UnknownFace { letter: 'X', .. })
        ));
        assert_eq!(stickers.get(cubie("UF")), "");
    }
}
