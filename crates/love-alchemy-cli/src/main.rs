//! Love Alchemy CLI
//!
//! Frontend for the scoring engines and the local history/feedback
//! stores.
//!
//! # Commands
//!
//! - `match`: numerology compatibility for two names
//! - `zodiac`: element compatibility for two signs
//! - `history list|remove|clear|export`: the calculation log
//! - `feedback add|list`: validated user feedback
//! - `letter`: render a love letter from a template

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

use commands::AppContext;

/// Love Alchemy - compatibility scoring and history
#[derive(Parser)]
#[command(name = "love-alchemy")]
#[command(version)]
#[command(about = "Deterministic love compatibility scoring with a local history")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding the history and feedback stores
    #[arg(long, global = true, env = "LOVE_ALCHEMY_DATA_DIR")]
    data_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a numerology match for two names
    Match(commands::matching::MatchArgs),
    /// Compute zodiac compatibility for two signs
    Zodiac(commands::zodiac::ZodiacArgs),
    /// Inspect or edit the calculation history
    History {
        #[command(subcommand)]
        action: commands::history::HistoryCommands,
    },
    /// Leave or read feedback
    Feedback {
        #[command(subcommand)]
        action: commands::feedback::FeedbackCommands,
    },
    /// Render a love letter from a template
    Letter(commands::letter::LetterArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logging to stderr, louder with each -v
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let ctx = AppContext::new(cli.data_dir);

    let exit_code = match cli.command {
        Commands::Match(args) => commands::matching::run(&ctx, args),
        Commands::Zodiac(args) => commands::zodiac::run(args),
        Commands::History { action } => commands::history::run(&ctx, action),
        Commands::Feedback { action } => commands::feedback::run(&ctx, action),
        Commands::Letter(args) => commands::letter::run(args),
    };

    std::process::exit(exit_code.into());
}
