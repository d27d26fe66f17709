use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::entity::{Note, NoteCreate, NoteUpdate};
use crate::error::{NotesError, Result};

pub const DEFAULT_DATA_FILE: &str = "notes_data.json";

/// Load every note from `path`, in file order.
///
/// A missing file is an empty collection. A file that exists but does not
/// parse as a list of notes is reported as [`NotesError::StorageCorrupt`].
pub fn load_all(path: &Path) -> Result<Vec<Note>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "notes file missing, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let notes: Vec<Note> =
        serde_json::from_slice(&bytes).map_err(|source| NotesError::StorageCorrupt {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = %path.display(), count = notes.len(), "loaded notes");
    Ok(notes)
}

/// Overwrite `path` with `notes`.
///
/// The collection is written to a sibling temp file first and then renamed
/// into place, so the target always holds either the old or the new contents.
pub fn save_all(path: &Path, notes: &[Note]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut bytes = serde_json::to_vec_pretty(notes)?;
    bytes.push(b'\n');

    let tmp = temp_path(path);
    fs::write(&tmp, &bytes)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    debug!(path = %path.display(), count = notes.len(), "saved notes");
    Ok(())
}

/// Next id to assign: one past the largest id present, or 1 when empty.
///
/// Fails with [`NotesError::IdSpaceExhausted`] once the largest id is `u64::MAX`.
pub fn next_id(notes: &[Note]) -> Result<u64> {
    match notes.iter().map(|n| n.id).max() {
        None => Ok(1),
        Some(max_id) => max_id
            .checked_add(1)
            .ok_or(NotesError::IdSpaceExhausted { max_id }),
    }
}

/// First note with the given id. Linear scan.
pub fn find_by_id(notes: &[Note], id: u64) -> Option<&Note> {
    notes.iter().find(|n| n.id == id)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| "notes".as_ref()));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Note collection backed by a single JSON file.
///
/// Every call re-reads the file; nothing is cached between calls. Mutating
/// operations take `&mut self` so a shared store has to sit behind a lock,
/// which keeps each load/modify/save cycle whole within one process.
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list(&self) -> Result<Vec<Note>> {
        load_all(&self.path)
    }

    pub fn get(&self, id: u64) -> Result<Note> {
        let notes = load_all(&self.path)?;
        find_by_id(&notes, id)
            .cloned()
            .ok_or(NotesError::NotFound(id))
    }

    pub fn create(&mut self, input: NoteCreate) -> Result<Note> {
        let mut notes = load_all(&self.path)?;
        let note = Note::new(next_id(&notes)?, input);
        notes.push(note.clone());
        save_all(&self.path, &notes)?;

        info!(id = note.id, "created note");
        Ok(note)
    }

    pub fn update(&mut self, id: u64, update: NoteUpdate) -> Result<Note> {
        let mut notes = load_all(&self.path)?;
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(NotesError::NotFound(id))?;
        note.apply(update);
        let updated = note.clone();
        save_all(&self.path, &notes)?;

        info!(id, "updated note");
        Ok(updated)
    }

    pub fn delete(&mut self, id: u64) -> Result<()> {
        let mut notes = load_all(&self.path)?;
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Err(NotesError::NotFound(id));
        }
        save_all(&self.path, &notes)?;

        info!(id, "deleted note");
        Ok(())
    }
}
