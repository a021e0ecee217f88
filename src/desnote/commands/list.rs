use crate::commands::CmdResult;
use crate::state::Workspace;

/// Produces the dashboard listing: folders first, then root notes, in
/// insertion order. An optional query filters folders by name and root
/// notes by title or content, case-insensitively.
pub fn run(ws: &Workspace, query: Option<&str>) -> CmdResult {
    let mut result = CmdResult::default();

    match query.map(|q| q.to_lowercase()) {
        None => {
            result.listed_folders = ws.folders.clone();
            result.listed_notes = ws.root_notes.clone();
        }
        Some(q) => {
            result.listed_folders = ws
                .folders
                .iter()
                .filter(|f| f.name.to_lowercase().contains(&q))
                .cloned()
                .collect();
            result.listed_notes = ws
                .root_notes
                .iter()
                .filter(|n| {
                    n.title.to_lowercase().contains(&q) || n.content.to_lowercase().contains(&q)
                })
                .cloned()
                .collect();
        }
    }
    result
}
