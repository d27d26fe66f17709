use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_HOST, DEFAULT_PORT};
use crate::storage::DEFAULT_DATA_FILE;

#[derive(Parser, Debug)]
#[command(name = "notes")]
#[command(version, about = "Short text notes over HTTP, stored in one JSON file")]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON file holding the notes
    #[arg(
        long,
        global = true,
        env = "NOTES_DATA_FILE",
        default_value = DEFAULT_DATA_FILE,
        value_name = "PATH"
    )]
    pub data_file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, env = "NOTES_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(long, env = "NOTES_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// List all notes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    Get {
        /// Note ID
        id: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a note
    Add {
        /// Note title
        title: String,

        /// Note body
        #[arg(long, short = 'c', default_value = "")]
        content: String,

        /// Read the body from stdin
        #[arg(long, conflicts_with = "content")]
        stdin: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change the title and/or content of a note
    Update {
        /// Note ID
        id: u64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New content
        #[arg(long, short = 'c')]
        content: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a note
    Delete {
        /// Note ID
        id: u64,
    },
}
