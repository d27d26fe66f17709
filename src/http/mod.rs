//! HTTP server exposing the note store as a small REST API.
//!
//! | Method | Path          | Success           |
//! |--------|---------------|-------------------|
//! | GET    | `/`           | 200 health        |
//! | GET    | `/notes`      | 200 list          |
//! | GET    | `/notes/{id}` | 200 note / 404    |
//! | POST   | `/notes`      | 201 created note  |
//! | PUT    | `/notes/{id}` | 200 note / 404    |
//! | DELETE | `/notes/{id}` | 204 / 404         |
//! | GET    | `/openapi.json` | 200 OpenAPI doc |

pub mod error;
pub mod openapi;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::{NotesError, Result};
use crate::storage::NoteStore;

pub use error::{ApiError, ApiResult, ErrorBody};
pub use openapi::ApiDoc;

/// Shared state handed to every handler.
///
/// The store sits behind one async mutex: a request holds it for its whole
/// load/modify/save cycle, so writers in this process never interleave.
/// Store calls run on the blocking pool via [`NotesServer::with_store`].
#[derive(Clone)]
pub struct NotesServer {
    pub store: Arc<Mutex<NoteStore>>,
}

impl NotesServer {
    pub fn new(store: NoteStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `op` on the blocking thread pool while holding the store lock.
    pub async fn with_store<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut NoteStore) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let mut store = self.store.clone().lock_owned().await;
        tokio::task::spawn_blocking(move || op(&mut store))
            .await
            .map_err(|e| NotesError::Server(format!("store task failed: {}", e)))?
    }

    /// Build the axum router with tracing and permissive CORS.
    pub fn router(self) -> Router {
        Router::new()
            .route("/", get(routes::health))
            .route("/openapi.json", get(routes::openapi))
            .route("/notes", get(routes::list_notes).post(routes::create_note))
            .route(
                "/notes/{id}",
                get(routes::get_note)
                    .put(routes::update_note)
                    .delete(routes::delete_note),
            )
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(cors_layer()),
            )
            .with_state(self)
    }

    /// Listen on `addr` until Ctrl-C.
    pub async fn serve(self, addr: SocketAddr) -> Result<()> {
        let data_file = self.store.lock().await.path().display().to_string();
        let listener = TcpListener::bind(addr).await?;
        info!(%addr, %data_file, "notes server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("notes server stopped");
        Ok(())
    }
}

// Credentials stay off: browsers reject them alongside wildcard origins.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
