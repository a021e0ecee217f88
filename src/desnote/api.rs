//! # API Facade
//!
//! The single entry point for all Desnote operations. The facade owns the
//! workspace state, the selection set, and the storage backend; every
//! mutation is applied through a command and then mirrored to storage.
//!
//! ## Persistence is fire-and-forget
//!
//! A failed write never fails the operation: the in-memory state remains
//! the source of truth for the session. The failure is logged and kept in
//! [`DesnoteApi::last_persist_error`] for callers that want to surface it.
//!
//! ## Generic over StorageBackend
//!
//! - Production: `DesnoteApi<FileBackend>`
//! - Testing: `DesnoteApi<MemoryBackend>`

use log::warn;

use crate::backup::{self, BackupContents};
use crate::commands;
use crate::error::Result;
use crate::model::Location;
use crate::selection::{SelectedId, Selection};
use crate::state::Workspace;
use crate::store::{self, StorageBackend};

pub struct DesnoteApi<S: StorageBackend> {
    backend: S,
    workspace: Workspace,
    selection: Selection,
    last_persist_error: Option<String>,
}

impl<S: StorageBackend> DesnoteApi<S> {
    /// Loads the workspace from storage, seeding defaults when the store is
    /// empty or unreadable. Startup never fails on bad data.
    pub fn load(backend: S) -> Self {
        let workspace = store::load(&backend);
        Self {
            backend,
            workspace,
            selection: Selection::new(),
            last_persist_error: None,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The error from the most recent failed persistence write, cleared on
    /// the next successful one.
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    fn persist(&mut self) {
        match store::save(&mut self.backend, &self.workspace) {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                warn!("failed to persist workspace: {}", e);
                self.last_persist_error = Some(e.to_string());
            }
        }
    }

    // --- Mutation engine ---

    pub fn create_folder(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::create::folder(&mut self.workspace, name)?;
        self.persist();
        Ok(result)
    }

    pub fn create_note(&mut self, title: &str, location: &Location) -> Result<CmdResult> {
        let result = commands::create::note(&mut self.workspace, title, location)?;
        self.persist();
        Ok(result)
    }

    pub fn delete_note(&mut self, note_id: &str, location: &Location) -> Result<CmdResult> {
        let result = commands::delete::note(&mut self.workspace, note_id, location)?;
        self.persist();
        Ok(result)
    }

    pub fn delete_folder(&mut self, folder_id: &str) -> Result<CmdResult> {
        let result = commands::delete::folder(&mut self.workspace, folder_id)?;
        self.persist();
        Ok(result)
    }

    pub fn move_note(
        &mut self,
        note_id: &str,
        from: &Location,
        to: &Location,
    ) -> Result<CmdResult> {
        let result = commands::move_note::run(&mut self.workspace, note_id, from, to)?;
        self.persist();
        Ok(result)
    }

    pub fn toggle_peek(&mut self, note_id: &str, location: &Location) -> Result<CmdResult> {
        let result = commands::toggles::peek(&mut self.workspace, note_id, location)?;
        self.persist();
        Ok(result)
    }

    pub fn toggle_folder_expanded(&mut self, folder_id: &str) -> Result<CmdResult> {
        let result = commands::toggles::folder_expanded(&mut self.workspace, folder_id)?;
        self.persist();
        Ok(result)
    }

    pub fn edit_note_content(
        &mut self,
        note_id: &str,
        location: &Location,
        new_content: &str,
    ) -> Result<CmdResult> {
        let result =
            commands::edit::set_content(&mut self.workspace, note_id, location, new_content)?;
        self.persist();
        Ok(result)
    }

    // --- Selection ---

    /// Toggles one entry; returns whether it is selected afterwards.
    pub fn toggle_select(&mut self, entry: SelectedId) -> bool {
        self.selection.toggle(entry)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Derived on read: true iff the selection is non-empty and free of
    /// folders. Callers gate [`Self::bulk_move`] on this.
    pub fn can_bulk_move(&self) -> bool {
        self.selection.can_bulk_move()
    }

    pub fn bulk_delete(&mut self) -> Result<CmdResult> {
        let result = commands::bulk::delete(&mut self.workspace, &self.selection)?;
        self.selection.clear();
        self.persist();
        Ok(result)
    }

    pub fn bulk_move(&mut self, target: &Location) -> Result<CmdResult> {
        let result = commands::bulk::move_to(&mut self.workspace, &self.selection, target)?;
        self.selection.clear();
        self.persist();
        Ok(result)
    }

    // --- Backup ---

    pub fn export_all(&self) -> Result<String> {
        backup::export_all(&self.workspace.folders, &self.workspace.root_notes)
    }

    /// Parses and validates a backup without touching any state. The caller
    /// shows the preview, asks for confirmation, and only then commits.
    pub fn preview_import(&self, raw: &str) -> Result<BackupContents> {
        backup::import_all(raw)
    }

    /// Replaces the whole workspace with the imported contents. Destructive:
    /// full overwrite, no merge. The selection is reset.
    pub fn commit_import(&mut self, contents: BackupContents) -> CmdResult {
        let note_count = contents.root_notes.len()
            + contents
                .folders
                .iter()
                .map(|f| f.notes.len())
                .sum::<usize>();
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Restored {} folders and {} notes.",
            contents.folders.len(),
            note_count
        )));

        self.workspace = Workspace::new(contents.folders, contents.root_notes);
        self.selection.clear();
        self.persist();
        result
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
