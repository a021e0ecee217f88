use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Location;
use crate::state::Workspace;

/// Moves one note between containers: remove from source, append to
/// destination. The moved note's peek flag is reset so stale preview state
/// does not follow it into a new context.
///
/// The destination is validated before the source is touched, so a bad
/// target id can never drop a note. A missing source or note is a no-op.
pub fn run(
    ws: &mut Workspace,
    note_id: &str,
    from: &Location,
    to: &Location,
) -> Result<CmdResult> {
    // 1. Validate destination first.
    ws.ensure_location(to)?;

    let mut result = CmdResult::default();

    // 2. Remove from source.
    let Some(source) = ws.notes_in_mut(from) else {
        result.add_message(CmdMessage::info("Nothing to move."));
        return Ok(result);
    };
    let Some(pos) = source.iter().position(|n| n.id == note_id) else {
        result.add_message(CmdMessage::info("Nothing to move."));
        return Ok(result);
    };
    let mut note = source.remove(pos);
    note.is_peeked = false;

    // 3. Append to destination.
    result.add_message(CmdMessage::success(format!(
        "Moved {} to {}",
        note.title, to
    )));
    result.affected_notes.push(note.clone());
    if let Some(dest) = ws.notes_in_mut(to) {
        dest.push(note);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, toggles};
    use crate::error::DesnoteError;

    fn two_folders() -> (Workspace, String, String) {
        let mut ws = Workspace::default();
        create::folder(&mut ws, "a").unwrap();
        create::folder(&mut ws, "b").unwrap();
        let a = ws.folders[0].id.clone();
        let b = ws.folders[1].id.clone();
        (ws, a, b)
    }

    #[test]
    fn moves_root_note_into_folder() {
        let (mut ws, a, _) = two_folders();
        create::note(&mut ws, "shopping", &Location::Root).unwrap();
        let note_id = ws.root_notes[0].id.clone();

        run(&mut ws, &note_id, &Location::Root, &Location::InFolder(a)).unwrap();

        assert!(ws.root_notes.is_empty());
        assert_eq!(ws.folders[0].notes.len(), 1);
        assert_eq!(ws.folders[0].notes[0].title, "shopping");
    }

    #[test]
    fn moves_between_folders_and_back_to_root() {
        let (mut ws, a, b) = two_folders();
        create::note(&mut ws, "n", &Location::InFolder(a.clone())).unwrap();
        let note_id = ws.folders[0].notes[0].id.clone();

        run(
            &mut ws,
            &note_id,
            &Location::InFolder(a.clone()),
            &Location::InFolder(b.clone()),
        )
        .unwrap();
        assert!(ws.folders[0].notes.is_empty());
        assert_eq!(ws.folders[1].notes.len(), 1);

        run(&mut ws, &note_id, &Location::InFolder(b), &Location::Root).unwrap();
        assert_eq!(ws.root_notes.len(), 1);
        assert_eq!(ws.note_count(), 1);
    }

    #[test]
    fn move_resets_peek_flag() {
        let (mut ws, a, _) = two_folders();
        create::note(&mut ws, "n", &Location::Root).unwrap();
        let note_id = ws.root_notes[0].id.clone();
        toggles::peek(&mut ws, &note_id, &Location::Root).unwrap();
        assert!(ws.root_notes[0].is_peeked);

        run(&mut ws, &note_id, &Location::Root, &Location::InFolder(a)).unwrap();
        assert!(!ws.folders[0].notes[0].is_peeked);
    }

    #[test]
    fn unknown_destination_errors_without_data_loss() {
        let (mut ws, _, _) = two_folders();
        create::note(&mut ws, "keep me", &Location::Root).unwrap();
        let note_id = ws.root_notes[0].id.clone();
        let before = ws.clone();

        let err = run(
            &mut ws,
            &note_id,
            &Location::Root,
            &Location::InFolder("ghost".into()),
        )
        .unwrap_err();
        assert!(matches!(err, DesnoteError::FolderNotFound(_)));
        assert_eq!(ws, before);
    }

    #[test]
    fn missing_note_or_source_is_a_no_op() {
        let (mut ws, a, b) = two_folders();
        create::note(&mut ws, "n", &Location::InFolder(a.clone())).unwrap();
        let before = ws.clone();

        run(
            &mut ws,
            "missing",
            &Location::InFolder(a),
            &Location::InFolder(b.clone()),
        )
        .unwrap();
        assert_eq!(ws, before);

        run(
            &mut ws,
            "whatever",
            &Location::InFolder("gone".into()),
            &Location::InFolder(b),
        )
        .unwrap();
        assert_eq!(ws, before);
    }

    #[test]
    fn siblings_are_untouched_by_a_move() {
        let (mut ws, a, _) = two_folders();
        create::note(&mut ws, "first", &Location::Root).unwrap();
        create::note(&mut ws, "second", &Location::Root).unwrap();
        create::note(&mut ws, "resident", &Location::InFolder(a.clone())).unwrap();
        let first_id = ws.root_notes[0].id.clone();
        let resident = ws.folders[0].notes[0].clone();

        run(&mut ws, &first_id, &Location::Root, &Location::InFolder(a)).unwrap();

        assert_eq!(ws.root_notes.len(), 1);
        assert_eq!(ws.root_notes[0].title, "second");
        // Destination keeps its existing note ahead of the appended one.
        assert_eq!(ws.folders[0].notes[0], resident);
        assert_eq!(ws.folders[0].notes[1].title, "first");
    }
}
