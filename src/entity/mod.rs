mod note;

pub use note::{Note, NoteCreate, NoteUpdate};
