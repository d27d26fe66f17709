use clap::Parser;
use notes_backend::cli::{
    handle_add, handle_delete, handle_get, handle_list, handle_serve, handle_update, Cli, Commands,
};

fn main() {
    // Values already in the environment win over `.env`.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let data_file = cli.data_file;

    let result = match cli.command {
        Commands::Serve { host, port } => handle_serve(data_file, host, port),
        Commands::List { json } => handle_list(data_file, json),
        Commands::Get { id, json } => handle_get(data_file, id, json),
        Commands::Add {
            title,
            content,
            stdin,
            json,
        } => handle_add(data_file, title, content, stdin, json),
        Commands::Update {
            id,
            title,
            content,
            json,
        } => handle_update(data_file, id, title, content, json),
        Commands::Delete { id } => handle_delete(data_file, id),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
