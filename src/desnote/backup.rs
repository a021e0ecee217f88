//! # Backup Codec
//!
//! Serializes the whole workspace into a versioned JSON envelope and
//! validates/restores it on import. The envelope is a full structural
//! snapshot (nested notes, `isExpanded`, `isPeeked` flags included), so an
//! export followed by an import reproduces the exact state.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{DesnoteError, Result};
use crate::model::{Folder, Note};

/// Schema tag written into every backup.
pub const BACKUP_VERSION: &str = "v7";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BackupEnvelope<'a> {
    version: &'a str,
    timestamp: DateTime<Utc>,
    folders: &'a [Folder],
    root_notes: &'a [Note],
}

/// Parsed contents of a backup file, not yet committed to any state.
#[derive(Debug, Clone, PartialEq)]
pub struct BackupContents {
    pub folders: Vec<Folder>,
    pub root_notes: Vec<Note>,
    pub version: Option<String>,
    pub timestamp: Option<String>,
}

/// Serializes the current collections into a backup envelope.
pub fn export_all(folders: &[Folder], root_notes: &[Note]) -> Result<String> {
    let envelope = BackupEnvelope {
        version: BACKUP_VERSION,
        timestamp: Utc::now(),
        folders,
        root_notes,
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// Parses and validates a backup payload.
///
/// Rejects the file when `folders` or `rootNotes` is missing or not an
/// array; nothing is applied anywhere on failure. `version` and `timestamp`
/// are carried through for display but never validated.
pub fn import_all(raw: &str) -> Result<BackupContents> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| DesnoteError::Validation(format!("not valid JSON: {}", e)))?;

    let folders_value = match value.get("folders") {
        Some(v) if v.is_array() => v.clone(),
        _ => {
            return Err(DesnoteError::Validation(
                "missing or non-array `folders` field".to_string(),
            ))
        }
    };
    let root_value = match value.get("rootNotes") {
        Some(v) if v.is_array() => v.clone(),
        _ => {
            return Err(DesnoteError::Validation(
                "missing or non-array `rootNotes` field".to_string(),
            ))
        }
    };

    let folders: Vec<Folder> = serde_json::from_value(folders_value)
        .map_err(|e| DesnoteError::Validation(format!("malformed folder entry: {}", e)))?;
    let root_notes: Vec<Note> = serde_json::from_value(root_value)
        .map_err(|e| DesnoteError::Validation(format!("malformed note entry: {}", e)))?;

    Ok(BackupContents {
        folders,
        root_notes,
        version: value
            .get("version")
            .and_then(|v| v.as_str())
            .map(String::from),
        timestamp: value
            .get("timestamp")
            .and_then(|v| v.as_str())
            .map(String::from),
    })
}
