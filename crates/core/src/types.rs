/// Note identifiers are opaque unique strings assigned by the repository.
pub type NoteId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
