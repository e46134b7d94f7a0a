//! One-operation use cases binding a repository to each CRUD action.
//!
//! These façades add no behavior of their own; they give the transport
//! layer a narrow, mockable seam that is independent of which storage
//! backend is wired in. No validation and no error translation happens
//! here.

use std::sync::Arc;

use crate::error::CoreError;
use crate::note::{NewNote, Note, NoteUpdate};
use crate::repository::NoteRepository;

/// List every stored note in insertion order.
pub struct ListNotes {
    repo: Arc<dyn NoteRepository>,
}

impl ListNotes {
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }

    pub fn execute(&self) -> Result<Vec<Note>, CoreError> {
        self.repo.find_all()
    }
}

/// Fetch a single note by id.
pub struct GetNoteById {
    repo: Arc<dyn NoteRepository>,
}

impl GetNoteById {
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }

    pub fn execute(&self, id: &str) -> Result<Option<Note>, CoreError> {
        self.repo.find_by_id(id)
    }
}

/// Store a new note.
pub struct CreateNote {
    repo: Arc<dyn NoteRepository>,
}

impl CreateNote {
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }

    pub fn execute(&self, input: &NewNote) -> Result<Note, CoreError> {
        self.repo.create(input)
    }
}

/// Patch an existing note.
pub struct UpdateNote {
    repo: Arc<dyn NoteRepository>,
}

impl UpdateNote {
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }

    pub fn execute(&self, id: &str, patch: &NoteUpdate) -> Result<Option<Note>, CoreError> {
        self.repo.update(id, patch)
    }
}

/// Remove a note.
pub struct DeleteNote {
    repo: Arc<dyn NoteRepository>,
}

impl DeleteNote {
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }

    pub fn execute(&self, id: &str) -> Result<bool, CoreError> {
        self.repo.delete(id)
    }
}

/// The five use cases wired to one repository.
///
/// Constructed once at application start and passed down to every consumer;
/// tests construct a fresh instance per case instead of sharing a global.
pub struct NoteUseCases {
    pub list: ListNotes,
    pub get: GetNoteById,
    pub create: CreateNote,
    pub update: UpdateNote,
    pub delete: DeleteNote,
}

impl NoteUseCases {
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self {
            list: ListNotes::new(Arc::clone(&repo)),
            get: GetNoteById::new(Arc::clone(&repo)),
            create: CreateNote::new(Arc::clone(&repo)),
            update: UpdateNote::new(Arc::clone(&repo)),
            delete: DeleteNote::new(repo),
        }
    }
}
