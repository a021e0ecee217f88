use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a fresh opaque id.
///
/// Ids are plain strings rather than typed UUIDs: backups written by earlier
/// releases carry hand-rolled ids like `folder-1`, and import accepts them
/// verbatim. New entities always get a UUIDv4.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_peeked: bool,
}

impl Note {
    pub fn new(title: String) -> Self {
        Self {
            id: new_id(),
            title,
            content: String::new(),
            is_peeked: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_expanded: bool,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Folder {
    /// Explicitly created folders start empty and expanded.
    pub fn new(name: String) -> Self {
        Self {
            id: new_id(),
            name,
            is_expanded: true,
            notes: Vec::new(),
        }
    }
}

/// Where a note lives: the root collection or exactly one folder.
///
/// Replaces the `'ROOT'` sentinel string the original storage format used as
/// a pseudo folder id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Root,
    InFolder(String),
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::Root => write!(f, "root"),
            Location::InFolder(id) => write!(f, "folder {}", id),
        }
    }
}
