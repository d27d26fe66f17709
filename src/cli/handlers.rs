use std::io::{self, Read};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::entity::{Note, NoteCreate, NoteUpdate};
use crate::error::Result;
use crate::http::NotesServer;
use crate::storage::NoteStore;

const DEFAULT_LOG_FILTER: &str = "notes_backend=info,tower_http=info";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

pub fn handle_serve(data_file: PathBuf, host: String, port: u16) -> Result<()> {
    init_tracing();

    let config = ServerConfig::new(data_file, host, port);
    let addr = config.bind_addr()?;
    let server = NotesServer::new(NoteStore::open(config.data_file));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server.serve(addr))
}

pub fn handle_list(data_file: PathBuf, json: bool) -> Result<()> {
    let store = NoteStore::open(data_file);
    let notes = store.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&notes)?);
        return Ok(());
    }

    if notes.is_empty() {
        println!("No notes found.");
        return Ok(());
    }

    for note in &notes {
        println!(
            "{:>4}  {}  {}",
            note.id,
            note.created_at.format("%Y-%m-%d %H:%M"),
            note.title
        );
    }

    Ok(())
}

pub fn handle_get(data_file: PathBuf, id: u64, json: bool) -> Result<()> {
    let store = NoteStore::open(data_file);
    let note = store.get(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        print_note(&note);
    }

    Ok(())
}

pub fn handle_add(
    data_file: PathBuf,
    title: String,
    content: String,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let content = if stdin {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        content
    };

    let input = NoteCreate { title, content };
    let mut store = NoteStore::open(data_file);
    let note = store.create(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Created note {} - {}", note.id, note.title);
    }

    Ok(())
}

pub fn handle_update(
    data_file: PathBuf,
    id: u64,
    title: Option<String>,
    content: Option<String>,
    json: bool,
) -> Result<()> {
    let update = NoteUpdate { title, content };
    if update.is_empty() {
        eprintln!("Warning: nothing to update, pass --title and/or --content");
    }

    let mut store = NoteStore::open(data_file);
    let note = store.update(id, update)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!("Updated note {} - {}", note.id, note.title);
    }

    Ok(())
}

pub fn handle_delete(data_file: PathBuf, id: u64) -> Result<()> {
    let mut store = NoteStore::open(data_file);
    store.delete(id)?;

    println!("Deleted note {}", id);
    Ok(())
}

fn print_note(note: &Note) {
    println!("Note {}: {}", note.id, note.title);
    println!("Created: {}", note.created_at.to_rfc3339());
    if !note.content.is_empty() {
        println!();
        println!("{}", note.content);
    }
}
