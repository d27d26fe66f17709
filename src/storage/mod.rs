mod json_store;

pub use json_store::{find_by_id, load_all, next_id, save_all, NoteStore, DEFAULT_DATA_FILE};
