use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Location;
use crate::state::Workspace;

/// Replaces a note's content wholesale. The model imposes no length limit.
/// A missing note or container is a silent no-op.
pub fn set_content(
    ws: &mut Workspace,
    note_id: &str,
    location: &Location,
    new_content: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if let Some(notes) = ws.notes_in_mut(location) {
        if let Some(note) = notes.iter_mut().find(|n| n.id == note_id) {
            note.content = new_content.to_string();
            result.add_message(CmdMessage::success(format!("Note saved: {}", note.title)));
            result.affected_notes.push(note.clone());
        }
    }
    Ok(result)
}
