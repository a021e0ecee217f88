//! Selector resolution shared by the API and CLI handlers.
//!
//! Users address notes and folders by full id, by a unique id prefix of at
//! least [`MIN_PREFIX_LEN`] characters, or by exact title/name. Containers
//! are addressed the same way, with the literal `root` naming the root
//! collection. Everything is resolved to stable ids before any mutation.

use crate::error::{DesnoteError, Result};
use crate::model::Location;
use crate::selection::SelectedId;
use crate::state::Workspace;

const MIN_PREFIX_LEN: usize = 4;

fn matches_selector(id: &str, name: &str, selector: &str) -> bool {
    id == selector
        || name == selector
        || (selector.len() >= MIN_PREFIX_LEN && id.starts_with(selector))
}

/// Resolves a folder selector to its id.
pub fn resolve_folder(ws: &Workspace, selector: &str) -> Result<String> {
    let matches: Vec<&str> = ws
        .folders
        .iter()
        .filter(|f| matches_selector(&f.id, &f.name, selector))
        .map(|f| f.id.as_str())
        .collect();
    match matches.as_slice() {
        [id] => Ok(id.to_string()),
        [] => Err(DesnoteError::FolderNotFound(selector.to_string())),
        _ => Err(DesnoteError::Api(format!(
            "Folder selector is ambiguous: {}",
            selector
        ))),
    }
}

/// Resolves a container selector: `root` or a folder.
pub fn resolve_container(ws: &Workspace, selector: &str) -> Result<Location> {
    if selector.eq_ignore_ascii_case("root") {
        return Ok(Location::Root);
    }
    resolve_folder(ws, selector).map(Location::InFolder)
}

/// Resolves a note selector across every container.
pub fn resolve_note(ws: &Workspace, selector: &str) -> Result<(Location, String)> {
    let mut matches: Vec<(Location, String)> = Vec::new();

    for note in &ws.root_notes {
        if matches_selector(&note.id, &note.title, selector) {
            matches.push((Location::Root, note.id.clone()));
        }
    }
    for folder in &ws.folders {
        for note in &folder.notes {
            if matches_selector(&note.id, &note.title, selector) {
                matches.push((Location::InFolder(folder.id.clone()), note.id.clone()));
            }
        }
    }

    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => Err(DesnoteError::NoteNotFound(selector.to_string())),
        _ => Err(DesnoteError::Api(format!(
            "Note selector is ambiguous: {}",
            selector
        ))),
    }
}

/// Resolves a selector that may name a note or a folder, tagging the result
/// by kind. A selector matching both kinds is rejected as ambiguous.
pub fn resolve_entry(ws: &Workspace, selector: &str) -> Result<SelectedId> {
    let note = resolve_note(ws, selector);
    let folder = resolve_folder(ws, selector);
    match (note, folder) {
        (Ok(_), Ok(_)) => Err(DesnoteError::Api(format!(
            "Selector matches both a note and a folder: {}",
            selector
        ))),
        (Ok((_, id)), Err(_)) => Ok(SelectedId::Note(id)),
        (Err(_), Ok(id)) => Ok(SelectedId::Folder(id)),
        (Err(DesnoteError::Api(msg)), _) | (_, Err(DesnoteError::Api(msg))) => {
            Err(DesnoteError::Api(msg))
        }
        (Err(_), Err(_)) => Err(DesnoteError::NoteNotFound(selector.to_string())),
    }
}
