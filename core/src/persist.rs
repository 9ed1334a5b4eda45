//! Persistence gateway over a key-value store.
//!
//! Layout of the store:
//!
//! - one key per visible cubie name (`"UF"`, `"U"`, ...) holding its sticker
//!   string
//! - `"permutation"`: JSON array of 20 integers, `-1` for empty slots
//! - `"orientation"`: JSON array of 20 integers
//!
//! `save` writes every key unconditionally. `load` requires every key to be
//! present; nothing is defaulted.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use cubist_types::{Cubie, StateError, StateVector, StickerError, Stickers};

pub const PERMUTATION_KEY: &str = "permutation";
pub const ORIENTATION_KEY: &str = "orientation";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("store file {path} is not a JSON object of strings: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("saved state has no {0:?} entry")]
    MissingKey(String),
    #[error("saved {key:?} entry is not an integer array: {source}")]
    Decode {
        key: &'static str,
        source: serde_json::Error,
    },
    #[error("saved state is invalid: {0}")]
    State(#[from] StateError),
    #[error("saved stickers are invalid: {0}")]
    Stickers(#[from] StickerError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// String key to string value storage with an explicit flush point.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;

    /// Make every `set` since the last commit durable.
    fn commit(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Everything written by a save: the state vector and the painted stickers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SavedState {
    pub state: StateVector,
    pub stickers: Stickers,
}

#[derive(Debug)]
pub struct PersistenceGateway<S> {
    store: S,
}

impl<S: KeyValueStore> PersistenceGateway<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&mut self, saved: &SavedState) -> Result<(), PersistError> {
        for (cubie, stickers) in saved.stickers.iter() {
            self.store.set(cubie.name(), stickers.to_string())?;
        }
        let raw = saved.state.to_raw();
        self.store.set(PERMUTATION_KEY, encode_array(&raw.permutation))?;
        self.store.set(ORIENTATION_KEY, encode_array(&raw.orientation))?;
        self.store.commit()?;
        debug!("Saved cube state");
        Ok(())
    }

    pub fn load(&self) -> Result<SavedState, PersistError> {
        let mut stickers = Stickers::solved();
        for cubie in Cubie::visible() {
            let value = self.require(cubie.name())?;
            stickers.set(cubie, &value)?;
        }
        let permutation = decode_array(PERMUTATION_KEY, &self.require(PERMUTATION_KEY)?)?;
        let orientation = decode_array(ORIENTATION_KEY, &self.require(ORIENTATION_KEY)?)?;
        let state = StateVector::from_raw(&permutation, &orientation)?;
        debug!("Loaded cube state");
        Ok(SavedState { state, stickers })
    }

    fn require(&self, key: &str) -> Result<String, PersistError> {
        self.store
            .get(key)?
            .ok_or_else(|| PersistError::MissingKey(key.to_string()))
    }
}

fn encode_array(values: &[i32]) -> String {
    // Serializing a slice of integers cannot fail.
    serde_json::to_string(values).unwrap_or_else(|_| String::from("[]"))
}

fn decode_array(key: &'static str, raw: &str) -> Result<Vec<i32>, PersistError> {
    serde_json::from_str(raw).map_err(|source| PersistError::Decode { key, source })
}
