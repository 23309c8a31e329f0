//! `match` command: the numerology pipeline end to end.

use clap::Args;
use tracing::warn;
use url::Url;

use love_alchemy_core::numerology::{self, jittered_percent};
use love_alchemy_core::{mood, share};
use love_alchemy_storage::NewHistoryEntry;

use crate::error::CliExitCode;

use super::AppContext;

#[derive(Args, Debug)]
pub struct MatchArgs {
    /// First name
    pub name1: String,
    /// Second name
    pub name2: String,

    /// Add a small random offset to the score, for surprise
    #[arg(long)]
    pub jitter: bool,

    /// Reduce master numbers (11, 22, 33) like any other number
    #[arg(long)]
    pub plain_digits: bool,

    /// Compute only; leave the history untouched
    #[arg(long)]
    pub no_save: bool,

    /// Base URL to build a shareable link from
    #[arg(long)]
    pub share_base: Option<Url>,
}

pub fn run(ctx: &AppContext, args: MatchArgs) -> CliExitCode {
    let outcome = match numerology::calculate(&args.name1, &args.name2, !args.plain_digits) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{e}");
            return CliExitCode::Warning;
        }
    };

    let mut rng = rand::thread_rng();
    let percent = if args.jitter {
        jittered_percent(outcome.percent, &mut rng)
    } else {
        outcome.percent
    };

    let mood = love_alchemy_core::Mood::for_percent(percent);
    let message = mood::message_for_percent(percent);
    let tip = mood::random_tip(mood, &mut rng);
    let oracle = mood::oracle_message(mood, &mut rng);

    println!("💘 {} + {}", outcome.name1, outcome.name2);
    println!(
        "   digits: {} + {} → {}",
        outcome.digit1, outcome.digit2, outcome.combined
    );
    println!("   score: {percent}%");
    println!("   {message}");
    println!("   mood: {} {}", mood.icon(), mood.label());
    println!("   tip: {tip}");
    println!("   oracle: {oracle}");

    if let Some(base) = &args.share_base {
        let link = share::share_url(base, &outcome.name1, &outcome.name2, percent);
        println!("   share: {link}");
    }

    if args.no_save {
        return CliExitCode::Success;
    }

    let store = match ctx.open_history() {
        Ok(store) => store,
        Err(e) => {
            warn!("history store unavailable: {e}");
            eprintln!("note: history is unavailable, this match was not saved");
            return CliExitCode::from(&e);
        }
    };
    match store.append(NewHistoryEntry {
        left: outcome.name1,
        right: outcome.name2,
        percent,
        mood: mood.label().to_string(),
        message: message.to_string(),
    }) {
        Ok(_) => CliExitCode::Success,
        Err(e) => {
            warn!("failed to save match: {e}");
            eprintln!("note: this match could not be saved to history");
            CliExitCode::from(&e)
        }
    }
}
