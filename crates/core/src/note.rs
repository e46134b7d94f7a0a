//! Note entity and its create/update projections.

use serde::{Deserialize, Serialize};

use crate::types::{NoteId, Timestamp};

/// A single stored note.
///
/// `id` and both timestamps are assigned by the repository at creation time
/// and never supplied by callers. Serialized field names match the wire and
/// blob formats: camelCase keys with `createdAt`/`updatedAt` as RFC 3339
/// strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub category: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Note {
    /// Merge a patch onto this note and stamp `updated_at`.
    ///
    /// Supplied fields overwrite, absent fields keep their current values,
    /// and `created_at` is never touched.
    pub fn apply(&mut self, patch: &NoteUpdate, now: Timestamp) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(content) = &patch.content {
            self.content = content.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        self.updated_at = now;
    }
}

/// DTO for creating a note. The repository assigns the id and timestamps.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: String,
}

/// Partial patch for an existing note.
///
/// Any subset of the three caller-writable fields; unknown fields in the
/// incoming JSON are silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
}
