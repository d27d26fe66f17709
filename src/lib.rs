pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod http;
pub mod storage;

pub use config::ServerConfig;
pub use entity::{Note, NoteCreate, NoteUpdate};
pub use error::{NotesError, Result};
pub use http::NotesServer;
pub use storage::NoteStore;
