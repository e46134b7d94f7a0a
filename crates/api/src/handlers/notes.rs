//! Handlers for the note CRUD endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use scrawl_core::note::{NewNote, NoteUpdate};
use scrawl_core::validation::{validate_content, validate_title};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Incoming body for note creation.
///
/// `title` and `content` are optional at the serde level so a missing field
/// becomes a 400 with a useful message instead of a deserialization
/// rejection. `category` genuinely is optional and defaults to empty.
#[derive(Debug, Deserialize)]
pub struct CreateNoteBody {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
}

/// GET /notes
///
/// List all notes in insertion order.
pub async fn list_notes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let notes = state.notes.list.execute()?;
    Ok(Json(notes))
}

/// GET /notes/{id}
///
/// Get a single note by id.
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let note = state
        .notes
        .get
        .execute(&id)?
        .ok_or_else(|| AppError::NotFound { entity: "Note", id })?;

    Ok(Json(note))
}

/// POST /notes
///
/// Create a note. Missing or blank `title`/`content` is rejected here,
/// before the repository is touched.
pub async fn create_note(
    State(state): State<AppState>,
    Json(body): Json<CreateNoteBody>,
) -> AppResult<impl IntoResponse> {
    let title = body.title.unwrap_or_default();
    let content = body.content.unwrap_or_default();
    validate_title(&title).map_err(AppError::BadRequest)?;
    validate_content(&content).map_err(AppError::BadRequest)?;

    let input = NewNote {
        title,
        content,
        category: body.category.unwrap_or_default(),
    };
    let note = state.notes.create.execute(&input)?;

    tracing::info!(note_id = %note.id, title = %note.title, "Note created");

    Ok((StatusCode::CREATED, Json(note)))
}

/// PUT /notes/{id}
///
/// Merge the supplied subset of fields onto an existing note.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<NoteUpdate>,
) -> AppResult<impl IntoResponse> {
    let note = state
        .notes
        .update
        .execute(&id, &patch)?
        .ok_or_else(|| AppError::NotFound { entity: "Note", id })?;

    tracing::info!(note_id = %note.id, "Note updated");

    Ok(Json(note))
}

/// DELETE /notes/{id}
///
/// Delete a note.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.notes.delete.execute(&id)?;

    if !deleted {
        return Err(AppError::NotFound { entity: "Note", id });
    }

    tracing::info!(note_id = %id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}
