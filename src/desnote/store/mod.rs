//! # Storage Layer
//!
//! Desnote mirrors its in-memory state to a key-value store on every
//! mutation. The [`StorageBackend`] trait abstracts the store so the engine
//! can run against the filesystem in production and plain memory in tests.
//!
//! ## Persisted layout
//!
//! Two independent entries, both JSON:
//!
//! ```text
//! desnote_folders_v7  # array of Folder (each nesting its notes)
//! desnote_root_v7     # array of root-level Note
//! ```
//!
//! ## Resilience policy
//!
//! Loading never fails the application: a missing key, corrupt JSON, or a
//! payload of the wrong shape falls back to the seed dataset for that key.
//! Saving is best-effort; callers log the error and keep the in-memory
//! state as the source of truth for the session.

use log::warn;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::model::{Folder, Note};
use crate::state::Workspace;

pub mod fs;
pub mod memory;
pub mod seed;

/// Storage key for the folder collection.
pub const FOLDERS_KEY: &str = "desnote_folders_v7";
/// Storage key for the root note collection.
pub const ROOT_NOTES_KEY: &str = "desnote_root_v7";

/// Abstract interface over synchronous string-keyed storage.
///
/// Implementations must be durable across process restarts (except the
/// in-memory test backend) and may reject oversized writes with an error.
pub trait StorageBackend {
    /// Read the value for a key, `None` if the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write the value for a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Serializes both collections under their fixed keys.
pub fn save<S: StorageBackend>(backend: &mut S, ws: &Workspace) -> Result<()> {
    backend.set(FOLDERS_KEY, &serde_json::to_string(&ws.folders)?)?;
    backend.set(ROOT_NOTES_KEY, &serde_json::to_string(&ws.root_notes)?)?;
    Ok(())
}

/// Loads the workspace, seeding each collection independently when its key
/// is absent or unreadable. Never fails: a corrupted local store must not
/// prevent startup.
pub fn load<S: StorageBackend>(backend: &S) -> Workspace {
    let folders: Vec<Folder> = load_key(backend, FOLDERS_KEY).unwrap_or_else(seed::folders);
    let root_notes: Vec<Note> = load_key(backend, ROOT_NOTES_KEY).unwrap_or_else(seed::root_notes);
    Workspace::new(folders, root_notes)
}

fn load_key<S: StorageBackend, T: DeserializeOwned>(backend: &S, key: &str) -> Option<T> {
    let raw = match backend.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("failed to read {}: {}; using seed data", key, e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("corrupt payload under {}: {}; using seed data", key, e);
            None
        }
    }
}
