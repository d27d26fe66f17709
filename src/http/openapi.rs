//! OpenAPI document for the notes API, served at `/openapi.json`.

use utoipa::OpenApi;

use super::error::ErrorBody;
use super::routes;
use super::routes::HealthResponse;
use crate::entity::{Note, NoteCreate, NoteUpdate};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notes Backend API",
        version = "1.0.0",
        description = "CRUD API for short text notes with file-based persistence."
    ),
    paths(
        routes::health,
        routes::list_notes,
        routes::get_note,
        routes::create_note,
        routes::update_note,
        routes::delete_note,
    ),
    components(schemas(Note, NoteCreate, NoteUpdate, ErrorBody, HealthResponse)),
    tags(
        (name = "Notes", description = "Operations on notes"),
        (name = "Health", description = "Service liveness")
    )
)]
pub struct ApiDoc;
