//! Shared infrastructure for cubist crates that touch the filesystem.
//!
//! - **`atomic_write`**: crash-safe file replacement (temp + rename, with a
//!   `.bak` fallback when the platform refuses to rename over a file)

pub mod atomic_write;

pub use atomic_write::{atomic_write, backup_path, recover_bak_file};
