//! `history` subcommands: list, remove, clear, export.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Subcommand};
use tracing::warn;
use uuid::Uuid;

use love_alchemy_storage::{ExportError, HistoryRecord, HistoryStore, JsonFileBackend};

use crate::error::CliExitCode;

use super::AppContext;

#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    /// Print the saved calculations, most recent first
    List,
    /// Delete one entry by its id
    Remove(RemoveArgs),
    /// Delete every entry
    Clear,
    /// Write the history as a text artifact
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Entry id, as shown by `history list`
    pub id: Uuid,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Destination file; stdout when omitted
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(ctx: &AppContext, action: HistoryCommands) -> CliExitCode {
    let store = match ctx.open_history() {
        Ok(store) => store,
        Err(e) => {
            warn!("history store unavailable: {e}");
            eprintln!("history is unavailable right now, please retry");
            return CliExitCode::from(&e);
        }
    };

    match action {
        HistoryCommands::List => list(&store),
        HistoryCommands::Remove(args) => remove(&store, args.id),
        HistoryCommands::Clear => clear(&store),
        HistoryCommands::Export(args) => export(&store, args.output),
    }
}

fn list(store: &HistoryStore<JsonFileBackend>) -> CliExitCode {
    let records = match store.list() {
        Ok(records) => records,
        Err(e) => {
            eprintln!("history is unavailable: {e}");
            return CliExitCode::from(&e);
        }
    };
    if records.is_empty() {
        println!("No history yet — calculate something romantic!");
        return CliExitCode::Success;
    }
    for record in &records {
        print_record(record);
    }
    CliExitCode::Success
}

fn print_record(record: &HistoryRecord) {
    println!(
        "{}  {} ❤️ {}  {}%  [{}]",
        record.recorded_at.format("%Y-%m-%d %H:%M"),
        record.left,
        record.right,
        record.percent,
        record.mood,
    );
    println!("    {}", record.message);
    println!("    id: {}", record.id);
}

fn remove(store: &HistoryStore<JsonFileBackend>, id: Uuid) -> CliExitCode {
    match store.remove_by_id(id) {
        Ok(true) => {
            println!("Entry deleted!");
            CliExitCode::Success
        }
        Ok(false) => {
            println!("No entry with id {id}");
            CliExitCode::Success
        }
        Err(e) => {
            eprintln!("could not delete the entry: {e}");
            CliExitCode::from(&e)
        }
    }
}

fn clear(store: &HistoryStore<JsonFileBackend>) -> CliExitCode {
    match store.clear() {
        Ok(()) => {
            println!("History cleared!");
            CliExitCode::Success
        }
        Err(e) => {
            eprintln!("could not clear the history: {e}");
            CliExitCode::from(&e)
        }
    }
}

fn export(store: &HistoryStore<JsonFileBackend>, output: Option<PathBuf>) -> CliExitCode {
    let text = match store.export_text() {
        Ok(text) => text,
        Err(ExportError::NothingToExport) => {
            println!("No history to export!");
            return CliExitCode::Success;
        }
        Err(ExportError::Storage(e)) => {
            eprintln!("could not read the history: {e}");
            return CliExitCode::from(&e);
        }
    };

    match output {
        None => {
            print!("{text}");
            CliExitCode::Success
        }
        Some(path) => match write_artifact(&path, &text) {
            Ok(()) => {
                println!("History exported to {}", path.display());
                CliExitCode::Success
            }
            Err(e) => {
                eprintln!("export failed: {e:#}");
                CliExitCode::Warning
            }
        },
    }
}

fn write_artifact(path: &PathBuf, text: &str) -> anyhow::Result<()> {
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}
