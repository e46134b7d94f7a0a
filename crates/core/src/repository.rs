//! Storage abstraction implemented by every note backend.

use crate::error::CoreError;
use crate::note::{NewNote, Note, NoteUpdate};

/// Contract shared by all note storage backends.
///
/// Absence of a record is an expected outcome, not an error: `find_by_id`
/// and `update` return `None` and `delete` returns `false` for unknown ids,
/// so transport code can map them to a 404 without unwinding. `CoreError`
/// is reserved for outright storage failure and must propagate untouched.
pub trait NoteRepository: Send + Sync {
    /// All notes in insertion order.
    ///
    /// Returns owned copies, so callers mutating the result cannot corrupt
    /// repository state. An empty store yields an empty vec, never an error.
    fn find_all(&self) -> Result<Vec<Note>, CoreError>;

    /// Look up a single note by id.
    fn find_by_id(&self, id: &str) -> Result<Option<Note>, CoreError>;

    /// Store a new note: assigns a fresh unique id, stamps both timestamps
    /// to now (equal), appends to the collection, and returns the stored
    /// record.
    fn create(&self, input: &NewNote) -> Result<Note, CoreError>;

    /// Shallow-merge the supplied fields onto an existing note and bump
    /// `updated_at`. Returns `None` and mutates nothing when the id is
    /// unknown.
    fn update(&self, id: &str, patch: &NoteUpdate) -> Result<Option<Note>, CoreError>;

    /// Remove a note. `true` if a record with that id existed and was
    /// removed.
    fn delete(&self, id: &str) -> Result<bool, CoreError>;
}
