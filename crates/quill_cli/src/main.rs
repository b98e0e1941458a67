//! Command-line front end for `quill_core`.
//!
//! # Responsibility
//! - Wire configuration, logging and the engine together outside any server.
//! - Print one query result as pretty JSON for quick local checks.

use clap::{Parser, Subcommand};
use log::info;
use quill_core::db::open_db;
use quill_core::{
    init_logging, seed_demo_data, CoreConfig, Engine, EntityReader, EntityRepository,
    MemoryEntityRepository, Request, SqliteEntityRepository, StoreBackend,
};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "quill", version, about = "Query the people/posts/comments graph")]
struct Cli {
    /// Seed the demo dataset when the store is empty.
    #[arg(long)]
    seed: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print health-check and version info.
    Ping,
    /// List people, optionally filtered by name.
    People { query: Option<String> },
    /// List posts, optionally filtered by title or body.
    Posts { query: Option<String> },
    /// List every comment.
    Comments,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("quill: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = CoreConfig::from_env().map_err(|err| err.to_string())?;
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(config.log_level, log_dir).map_err(|err| err.to_string())?;
    }

    let request = match cli.command {
        Command::Ping => {
            println!("quill_core ping={}", quill_core::ping());
            println!("quill_core version={}", quill_core::core_version());
            return Ok(());
        }
        Command::People { query } => Request::ListPeople { query },
        Command::Posts { query } => Request::ListPosts { query },
        Command::Comments => Request::ListComments,
    };
    let seed = cli.seed || config.seed_demo;

    match &config.store {
        StoreBackend::Memory => serve(MemoryEntityRepository::new(), seed, request),
        StoreBackend::Sqlite(path) => {
            let conn = open_db(path).map_err(|err| format!("open {}: {err}", path.display()))?;
            let repo = SqliteEntityRepository::try_new(conn).map_err(|err| err.to_string())?;
            serve(repo, seed, request)
        }
    }
}

fn serve<R: EntityRepository>(mut repo: R, seed: bool, request: Request) -> Result<(), String> {
    if seed && repo.people().map_err(|err| err.to_string())?.is_empty() {
        seed_demo_data(&mut repo).map_err(|err| err.to_string())?;
    }

    let engine = Engine::new(repo);
    info!("event=cli_request module=cli status=start op={}", request.name());
    let response = engine.execute(request).map_err(|err| err.to_string())?;
    let rendered = serde_json::to_string_pretty(&response).map_err(|err| err.to_string())?;
    println!("{rendered}");
    Ok(())
}
