//! Ephemeral in-process note store.

use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use scrawl_core::error::CoreError;
use scrawl_core::note::{NewNote, Note, NoteUpdate};
use scrawl_core::repository::NoteRepository;

/// Keeps all notes in an ordered in-memory collection scoped to the process
/// lifetime.
///
/// The mutex exists so one instance can serve every handler task; each
/// operation is a single run-to-completion critical section, so there are
/// no intermediate states for callers to observe.
#[derive(Default)]
pub struct MemoryNoteRepo {
    notes: Mutex<Vec<Note>>,
}

impl MemoryNoteRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteRepository for MemoryNoteRepo {
    fn find_all(&self) -> Result<Vec<Note>, CoreError> {
        Ok(self.notes.lock().expect("note store mutex poisoned").clone())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Note>, CoreError> {
        let notes = self.notes.lock().expect("note store mutex poisoned");
        Ok(notes.iter().find(|n| n.id == id).cloned())
    }

    fn create(&self, input: &NewNote) -> Result<Note, CoreError> {
        let now = Utc::now();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            title: input.title.clone(),
            content: input.content.clone(),
            category: input.category.clone(),
            created_at: now,
            updated_at: now,
        };

        let mut notes = self.notes.lock().expect("note store mutex poisoned");
        notes.push(note.clone());
        Ok(note)
    }

    fn update(&self, id: &str, patch: &NoteUpdate) -> Result<Option<Note>, CoreError> {
        let mut notes = self.notes.lock().expect("note store mutex poisoned");
        let Some(note) = notes.iter_mut().find(|n| n.id == id) else {
            return Ok(None);
        };
        note.apply(patch, Utc::now());
        Ok(Some(note.clone()))
    }

    fn delete(&self, id: &str) -> Result<bool, CoreError> {
        let mut notes = self.notes.lock().expect("note store mutex poisoned");
        let before = notes.len();
        notes.retain(|n| n.id != id);
        Ok(notes.len() < before)
    }
}
