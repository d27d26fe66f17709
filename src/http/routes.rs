//! Axum handlers for the `/notes` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use super::error::{ApiResult, ErrorBody};
use super::openapi::ApiDoc;
use super::NotesServer;
use crate::entity::{Note, NoteCreate, NoteUpdate};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
}

/// GET / - liveness check
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    summary = "Health check",
    responses(
        (status = 200, description = "Service is responding", body = HealthResponse),
    ),
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Healthy".to_string(),
    })
}

/// GET /openapi.json - the generated API description
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /notes - every note, in stored order
#[utoipa::path(
    get,
    path = "/notes",
    tag = "Notes",
    summary = "List all notes",
    responses(
        (status = 200, description = "All notes", body = Vec<Note>),
        (status = 500, description = "Notes file unreadable", body = ErrorBody),
    ),
)]
pub async fn list_notes(State(server): State<NotesServer>) -> ApiResult<Json<Vec<Note>>> {
    let notes = server.with_store(|store| store.list()).await?;
    Ok(Json(notes))
}

/// GET /notes/{id}
#[utoipa::path(
    get,
    path = "/notes/{id}",
    tag = "Notes",
    summary = "Get a note by ID",
    params(("id" = u64, Path, description = "The ID of the note to retrieve")),
    responses(
        (status = 200, description = "The note", body = Note),
        (status = 404, description = "Note not found", body = ErrorBody),
        (status = 422, description = "Invalid ID", body = ErrorBody),
    ),
)]
pub async fn get_note(
    State(server): State<NotesServer>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Note>> {
    let Path(id) = id?;
    let note = server.with_store(move |store| store.get(id)).await?;
    Ok(Json(note))
}

/// POST /notes - create a note, 201 with the stored note
#[utoipa::path(
    post,
    path = "/notes",
    tag = "Notes",
    summary = "Create a new note",
    request_body = NoteCreate,
    responses(
        (status = 201, description = "Note created", body = Note),
        (status = 422, description = "Missing or malformed field", body = ErrorBody),
    ),
)]
pub async fn create_note(
    State(server): State<NotesServer>,
    body: Result<Json<NoteCreate>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let Json(input) = body?;
    let note = server.with_store(move |store| store.create(input)).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// PUT /notes/{id} - replace the fields present in the body
#[utoipa::path(
    put,
    path = "/notes/{id}",
    tag = "Notes",
    summary = "Update an existing note",
    params(("id" = u64, Path, description = "The ID of the note to update")),
    request_body = NoteUpdate,
    responses(
        (status = 200, description = "Updated note", body = Note),
        (status = 404, description = "Note not found", body = ErrorBody),
        (status = 422, description = "Invalid ID or body", body = ErrorBody),
    ),
)]
pub async fn update_note(
    State(server): State<NotesServer>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<NoteUpdate>, JsonRejection>,
) -> ApiResult<Json<Note>> {
    let Path(id) = id?;
    let Json(update) = body?;
    let note = server
        .with_store(move |store| store.update(id, update))
        .await?;
    Ok(Json(note))
}

/// DELETE /notes/{id} - 204 on success
#[utoipa::path(
    delete,
    path = "/notes/{id}",
    tag = "Notes",
    summary = "Delete a note",
    params(("id" = u64, Path, description = "The ID of the note to delete")),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 404, description = "Note not found", body = ErrorBody),
    ),
)]
pub async fn delete_note(
    State(server): State<NotesServer>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    server.with_store(move |store| store.delete(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
