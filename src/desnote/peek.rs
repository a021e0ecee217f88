//! # Peek Preview Logic
//!
//! Formats note content for the inline "peek" view: a short preview shown
//! without opening the full editor.

/// Maximum characters shown in a peek preview.
pub const PEEK_PREVIEW_CHARS: usize = 150;

/// Formats raw note content into a peek preview.
///
/// Rules:
/// 1. Empty content renders as a placeholder.
/// 2. Content up to [`PEEK_PREVIEW_CHARS`] characters is shown verbatim.
/// 3. Longer content is cut at the character limit with an ellipsis.
pub fn preview(content: &str) -> String {
    if content.is_empty() {
        return "Empty...".to_string();
    }
    if content.chars().count() <= PEEK_PREVIEW_CHARS {
        return content.to_string();
    }
    let head: String = content.chars().take(PEEK_PREVIEW_CHARS).collect();
    format!("{}...", head)
}
