use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Folder, Location, Note};
use crate::state::Workspace;

/// Creates a folder at the end of the folder collection.
///
/// A name that is empty after trimming is a no-op, reported as a warning.
pub fn folder(ws: &mut Workspace, name: &str) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::warning("Folder name cannot be empty.")));
    }

    let folder = Folder::new(name.to_string());
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Folder created: {}", name)));
    result.affected_folders.push(folder.clone());
    ws.folders.push(folder);
    Ok(result)
}

/// Creates a note in the given container with empty content.
///
/// The destination is validated up front: an unknown folder id is an error,
/// never a silently dropped note. An empty title is a no-op.
pub fn note(ws: &mut Workspace, title: &str, location: &Location) -> Result<CmdResult> {
    let title = title.trim();
    if title.is_empty() {
        return Ok(
            CmdResult::default().with_message(CmdMessage::warning("Note title cannot be empty."))
        );
    }

    ws.ensure_location(location)?;

    let note = Note::new(title.to_string());
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note created: {}", title)));
    result.affected_notes.push(note.clone());

    // ensure_location guarantees the container exists.
    if let Some(notes) = ws.notes_in_mut(location) {
        notes.push(note);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DesnoteError;

    #[test]
    fn creates_folder_expanded_and_empty() {
        let mut ws = Workspace::default();
        folder(&mut ws, "work").unwrap();
        assert_eq!(ws.folders.len(), 1);
        assert_eq!(ws.folders[0].name, "work");
        assert!(ws.folders[0].is_expanded);
        assert!(ws.folders[0].notes.is_empty());
    }

    #[test]
    fn trims_names_and_ignores_blank_ones() {
        let mut ws = Workspace::default();
        folder(&mut ws, "  padded  ").unwrap();
        assert_eq!(ws.folders[0].name, "padded");

        let res = folder(&mut ws, "   ").unwrap();
        assert_eq!(ws.folders.len(), 1);
        assert!(matches!(
            res.messages[0].level,
            crate::commands::MessageLevel::Warning
        ));
    }

    #[test]
    fn creates_note_in_root() {
        let mut ws = Workspace::default();
        note(&mut ws, "shopping", &Location::Root).unwrap();
        assert_eq!(ws.root_notes.len(), 1);
        assert_eq!(ws.root_notes[0].title, "shopping");
        assert_eq!(ws.root_notes[0].content, "");
        assert!(!ws.root_notes[0].is_peeked);
    }

    #[test]
    fn creates_note_in_folder() {
        let mut ws = Workspace::default();
        folder(&mut ws, "work").unwrap();
        let folder_id = ws.folders[0].id.clone();
        note(&mut ws, "todo", &Location::InFolder(folder_id)).unwrap();
        assert_eq!(ws.folders[0].notes.len(), 1);
        assert!(ws.root_notes.is_empty());
    }

    #[test]
    fn rejects_unknown_target_folder() {
        let mut ws = Workspace::default();
        let err = note(&mut ws, "todo", &Location::InFolder("ghost".into())).unwrap_err();
        assert!(matches!(err, DesnoteError::FolderNotFound(_)));
        assert_eq!(ws.note_count(), 0);
    }

    #[test]
    fn blank_title_is_a_no_op() {
        let mut ws = Workspace::default();
        note(&mut ws, "  ", &Location::Root).unwrap();
        assert!(ws.root_notes.is_empty());
    }

    #[test]
    fn ids_stay_unique_across_containers() {
        let mut ws = Workspace::default();
        folder(&mut ws, "a").unwrap();
        let folder_id = ws.folders[0].id.clone();
        for i in 0..10 {
            note(&mut ws, &format!("root {}", i), &Location::Root).unwrap();
            note(
                &mut ws,
                &format!("nested {}", i),
                &Location::InFolder(folder_id.clone()),
            )
            .unwrap();
        }
        let mut ids: Vec<String> = ws.root_notes.iter().map(|n| n.id.clone()).collect();
        ids.extend(ws.folders[0].notes.iter().map(|n| n.id.clone()));
        ids.push(folder_id);
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }
}
