use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Location;
use crate::state::Workspace;

/// Removes a note from the given container.
///
/// Idempotent: a note (or container) that is already gone is a no-op, so a
/// double-click delete or a stale reference never errors.
pub fn note(ws: &mut Workspace, note_id: &str, location: &Location) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(notes) = ws.notes_in_mut(location) else {
        result.add_message(CmdMessage::info("Nothing to delete."));
        return Ok(result);
    };

    match notes.iter().position(|n| n.id == note_id) {
        Some(pos) => {
            let removed = notes.remove(pos);
            result.add_message(CmdMessage::success(format!(
                "Note deleted: {}",
                removed.title
            )));
            result.affected_notes.push(removed);
        }
        None => result.add_message(CmdMessage::info("Nothing to delete.")),
    }
    Ok(result)
}

/// Removes a folder and everything in it. Deleting a folder cascades: its
/// notes go with it, never orphaned into root.
pub fn folder(ws: &mut Workspace, folder_id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match ws.folders.iter().position(|f| f.id == folder_id) {
        Some(pos) => {
            let removed = ws.folders.remove(pos);
            result.add_message(CmdMessage::success(format!(
                "Folder deleted: {} ({} notes)",
                removed.name,
                removed.notes.len()
            )));
            result.affected_folders.push(removed);
        }
        None => result.add_message(CmdMessage::info("Nothing to delete.")),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;

    fn workspace_with_folder_note() -> (Workspace, String, String) {
        let mut ws = Workspace::default();
        create::folder(&mut ws, "work").unwrap();
        let folder_id = ws.folders[0].id.clone();
        create::note(&mut ws, "inside", &Location::InFolder(folder_id.clone())).unwrap();
        let note_id = ws.folders[0].notes[0].id.clone();
        (ws, folder_id, note_id)
    }

    #[test]
    fn deletes_root_note() {
        let mut ws = Workspace::default();
        create::note(&mut ws, "loose", &Location::Root).unwrap();
        let id = ws.root_notes[0].id.clone();
        note(&mut ws, &id, &Location::Root).unwrap();
        assert!(ws.root_notes.is_empty());
    }

    #[test]
    fn deletes_note_inside_folder() {
        let (mut ws, folder_id, note_id) = workspace_with_folder_note();
        note(&mut ws, &note_id, &Location::InFolder(folder_id)).unwrap();
        assert!(ws.folders[0].notes.is_empty());
        assert_eq!(ws.folders.len(), 1);
    }

    #[test]
    fn delete_note_is_idempotent() {
        let (mut ws, folder_id, note_id) = workspace_with_folder_note();
        let loc = Location::InFolder(folder_id);
        note(&mut ws, &note_id, &loc).unwrap();
        let after_first = ws.clone();
        note(&mut ws, &note_id, &loc).unwrap();
        assert_eq!(ws, after_first);
    }

    #[test]
    fn delete_in_unknown_container_is_a_no_op() {
        let (mut ws, _, note_id) = workspace_with_folder_note();
        let before = ws.clone();
        note(&mut ws, &note_id, &Location::InFolder("ghost".into())).unwrap();
        assert_eq!(ws, before);
    }

    #[test]
    fn folder_delete_cascades() {
        let (mut ws, folder_id, note_id) = workspace_with_folder_note();
        create::note(&mut ws, "loose", &Location::Root).unwrap();

        folder(&mut ws, &folder_id).unwrap();
        assert!(ws.folders.is_empty());
        assert!(ws.find_note(&note_id).is_none());
        // Root notes are untouched.
        assert_eq!(ws.root_notes.len(), 1);
    }

    #[test]
    fn deleting_missing_folder_is_a_no_op() {
        let (mut ws, folder_id, _) = workspace_with_folder_note();
        folder(&mut ws, &folder_id).unwrap();
        let before = ws.clone();
        folder(&mut ws, &folder_id).unwrap();
        assert_eq!(ws, before);
    }
}
