//! Durable local note store: one JSON blob under a fixed storage key.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use rand::Rng;

use scrawl_core::error::CoreError;
use scrawl_core::note::{NewNote, Note, NoteUpdate};
use scrawl_core::repository::NoteRepository;

/// Fixed storage key the whole collection lives under.
pub const STORAGE_KEY: &str = "scrawl.notes";

/// Persists the entire note collection as a single JSON array in one file
/// named after [`STORAGE_KEY`] inside the configured directory.
///
/// Every mutation is a full read-modify-write of the blob; there is no
/// partial update at the storage layer. Concurrent writers from other
/// processes are last-write-wins: the repository does no locking,
/// versioning, or conflict detection. Timestamps are stored as RFC 3339
/// strings and parsed back into `DateTime<Utc>` values on every read.
pub struct LocalNoteRepo {
    path: PathBuf,
}

impl LocalNoteRepo {
    /// Open (or create) a store rooted at `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, CoreError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        Ok(Self {
            path: dir.join(format!("{STORAGE_KEY}.json")),
        })
    }

    /// Read and deserialize the whole collection.
    ///
    /// An absent blob is an empty collection; a malformed blob is a storage
    /// failure that propagates to the caller.
    fn load(&self) -> Result<Vec<Note>, CoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    /// Serialize the collection and overwrite the blob.
    fn save(&self, notes: &[Note]) -> Result<(), CoreError> {
        let raw = serde_json::to_string(notes)?;
        fs::write(&self.path, raw)?;
        tracing::debug!(count = notes.len(), "Rewrote note blob");
        Ok(())
    }

    /// Collision-resistant id for single-client scale: millisecond
    /// timestamp plus a random hex suffix. No coordination with anything.
    fn next_id() -> String {
        let suffix: u32 = rand::rng().random_range(0..0x0100_0000);
        format!("{}-{suffix:06x}", Utc::now().timestamp_millis())
    }
}

impl NoteRepository for LocalNoteRepo {
    fn find_all(&self) -> Result<Vec<Note>, CoreError> {
        self.load()
    }

    fn find_by_id(&self, id: &str) -> Result<Option<Note>, CoreError> {
        let notes = self.load()?;
        Ok(notes.into_iter().find(|n| n.id == id))
    }

    fn create(&self, input: &NewNote) -> Result<Note, CoreError> {
        let now = Utc::now();
        let note = Note {
            id: Self::next_id(),
            title: input.title.clone(),
            content: input.content.clone(),
            category: input.category.clone(),
            created_at: now,
            updated_at: now,
        };

        let mut notes = self.load()?;
        notes.push(note.clone());
        self.save(&notes)?;
        Ok(note)
    }

    fn update(&self, id: &str, patch: &NoteUpdate) -> Result<Option<Note>, CoreError> {
        let mut notes = self.load()?;
        let Some(note) = notes.iter_mut().find(|n| n.id == id) else {
            return Ok(None);
        };
        note.apply(patch, Utc::now());
        let updated = note.clone();
        self.save(&notes)?;
        Ok(Some(updated))
    }

    fn delete(&self, id: &str) -> Result<bool, CoreError> {
        let mut notes = self.load()?;
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Ok(false);
        }
        self.save(&notes)?;
        Ok(true)
    }
}
