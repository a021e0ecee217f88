use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Location;
use crate::state::Workspace;

/// Flips the peek flag on exactly one note. Siblings are never touched; a
/// missing note or container is a silent no-op.
pub fn peek(ws: &mut Workspace, note_id: &str, location: &Location) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if let Some(notes) = ws.notes_in_mut(location) {
        if let Some(note) = notes.iter_mut().find(|n| n.id == note_id) {
            note.is_peeked = !note.is_peeked;
            let state = if note.is_peeked { "opened" } else { "closed" };
            result.add_message(CmdMessage::info(format!("Peek {}: {}", state, note.title)));
            result.affected_notes.push(note.clone());
        }
    }
    Ok(result)
}

/// Flips the expanded flag on exactly one folder.
pub fn folder_expanded(ws: &mut Workspace, folder_id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if let Some(folder) = ws.folder_mut(folder_id) {
        folder.is_expanded = !folder.is_expanded;
        let state = if folder.is_expanded {
            "expanded"
        } else {
            "collapsed"
        };
        result.add_message(CmdMessage::info(format!("Folder {}: {}", state, folder.name)));
        result.affected_folders.push(folder.clone());
    }
    Ok(result)
}
