//! `feedback` subcommands: add, list.

use clap::{Args, Subcommand};
use tracing::warn;

use love_alchemy_storage::{FeedbackError, FeedbackSubmission};

use crate::error::CliExitCode;

use super::AppContext;

#[derive(Subcommand, Debug)]
pub enum FeedbackCommands {
    /// Leave feedback with a star rating
    Add(AddArgs),
    /// Print stored feedback, most recent first
    List,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Your name
    #[arg(long, default_value = "Anonymous")]
    pub name: String,

    /// Contact email (optional)
    #[arg(long)]
    pub email: Option<String>,

    /// Star rating, 1 to 5
    #[arg(long)]
    pub rating: u8,

    /// The feedback itself
    #[arg(long)]
    pub message: String,
}

pub fn run(ctx: &AppContext, action: FeedbackCommands) -> CliExitCode {
    let store = match ctx.open_feedback() {
        Ok(store) => store,
        Err(e) => {
            warn!("feedback store unavailable: {e}");
            eprintln!("feedback is unavailable right now, please retry");
            return CliExitCode::from(&e);
        }
    };

    match action {
        FeedbackCommands::Add(args) => {
            let submission = FeedbackSubmission {
                name: args.name,
                email: args.email,
                rating: args.rating,
                message: args.message,
            };
            match store.submit(submission) {
                Ok(record) => {
                    println!(
                        "Thank you for your feedback! {} {}",
                        "⭐".repeat(record.rating as usize),
                        record.name
                    );
                    CliExitCode::Success
                }
                Err(FeedbackError::Invalid(e)) => {
                    eprintln!("{e}");
                    CliExitCode::Warning
                }
                Err(FeedbackError::Storage(e)) => {
                    eprintln!("could not save your feedback: {e}");
                    CliExitCode::from(&e)
                }
            }
        }
        FeedbackCommands::List => {
            let records = match store.list() {
                Ok(records) => records,
                Err(e) => {
                    eprintln!("feedback is unavailable: {e}");
                    return CliExitCode::from(&e);
                }
            };
            if records.is_empty() {
                println!("No feedback yet. Be the first!");
                return CliExitCode::Success;
            }
            for record in &records {
                println!(
                    "{}  {}  {}",
                    record.submitted_at.format("%Y-%m-%d %H:%M"),
                    record.name,
                    "⭐".repeat(record.rating as usize),
                );
                println!("    {}", record.message);
                if let Some(email) = &record.email {
                    println!("    {email}");
                }
            }
            CliExitCode::Success
        }
    }
}
