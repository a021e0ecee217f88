use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Location, Note};
use crate::selection::Selection;
use crate::state::Workspace;

/// Deletes every selected entity in one state transition.
///
/// Selected root notes and selected folders (with all their notes, selected
/// or not) vanish; selected notes inside surviving folders are removed too.
pub fn delete(ws: &mut Workspace, selection: &Selection) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if selection.is_empty() {
        result.add_message(CmdMessage::info("Nothing selected."));
        return Ok(result);
    }

    // 1. Root notes.
    let mut removed_notes = 0;
    ws.root_notes.retain(|n| {
        let keep = !selection.contains_note(&n.id);
        if !keep {
            removed_notes += 1;
        }
        keep
    });

    // 2. Folders (cascade).
    let mut removed_folders = 0;
    ws.folders.retain(|f| {
        let keep = !selection.contains_folder(&f.id);
        if !keep {
            removed_folders += 1;
        }
        keep
    });

    // 3. Notes inside surviving folders.
    for folder in &mut ws.folders {
        folder.notes.retain(|n| {
            let keep = !selection.contains_note(&n.id);
            if !keep {
                removed_notes += 1;
            }
            keep
        });
    }

    result.add_message(CmdMessage::success(format!(
        "Deleted {} notes and {} folders.",
        removed_notes, removed_folders
    )));
    Ok(result)
}

/// Moves every selected note to the target container in one transition.
///
/// Operates on notes only; folder entries in the selection are ignored.
/// Callers gate this on [`Selection::can_bulk_move`]. The target is
/// validated before anything is removed.
pub fn move_to(ws: &mut Workspace, selection: &Selection, target: &Location) -> Result<CmdResult> {
    ws.ensure_location(target)?;

    let mut result = CmdResult::default();
    if selection.is_empty() {
        result.add_message(CmdMessage::info("Nothing selected."));
        return Ok(result);
    }

    // Collect in encounter order: root first, then folders in display order.
    let mut moved: Vec<Note> = Vec::new();
    let mut drain = |notes: &mut Vec<Note>| {
        notes.retain_mut(|n| {
            if selection.contains_note(&n.id) {
                let mut taken = n.clone();
                taken.is_peeked = false;
                moved.push(taken);
                false
            } else {
                true
            }
        });
    };
    drain(&mut ws.root_notes);
    for folder in &mut ws.folders {
        drain(&mut folder.notes);
    }

    if moved.is_empty() {
        result.add_message(CmdMessage::info("No selected notes found."));
        return Ok(result);
    }

    result.add_message(CmdMessage::success(format!(
        "Moved {} notes to {}.",
        moved.len(),
        target
    )));
    result.affected_notes = moved.clone();
    if let Some(dest) = ws.notes_in_mut(target) {
        dest.append(&mut moved);
    }
    Ok(result)
}
