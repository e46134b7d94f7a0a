//! Domain layer for the scrawl note service.
//!
//! Holds the [`Note`](note::Note) entity and its DTOs, the repository
//! abstraction every storage backend implements, and the one-operation use
//! cases the transport layer is wired against. Concrete backends live in
//! `scrawl-store`; the HTTP surface lives in `scrawl-api`.

pub mod error;
pub mod note;
pub mod repository;
pub mod types;
pub mod usecase;
pub mod validation;
