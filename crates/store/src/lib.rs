//! Storage backends for the scrawl note service.
//!
//! Two interchangeable implementations of
//! [`NoteRepository`](scrawl_core::repository::NoteRepository):
//!
//! - [`MemoryNoteRepo`] keeps the collection in process memory; contents
//!   are lost on restart and never shared across processes.
//! - [`LocalNoteRepo`] persists the whole collection as one JSON blob under
//!   a fixed storage key on local disk.

pub mod local;
pub mod memory;

pub use local::LocalNoteRepo;
pub use memory::MemoryNoteRepo;
