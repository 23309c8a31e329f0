//! `zodiac` command: element compatibility with breakdown.

use clap::Args;

use love_alchemy_core::zodiac::{compatibility_for_names, element_tip, CompatibilityBand};

use crate::error::CliExitCode;

#[derive(Args, Debug)]
pub struct ZodiacArgs {
    /// First sign (e.g. Leo)
    pub sign_a: String,
    /// Second sign (e.g. Libra)
    pub sign_b: String,
}

pub fn run(args: ZodiacArgs) -> CliExitCode {
    let result = match compatibility_for_names(&args.sign_a, &args.sign_b) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{e}");
            return CliExitCode::Warning;
        }
    };

    let band = CompatibilityBand::for_score(result.score);
    println!("♥ {} + {}", result.sign_a, result.sign_b);
    println!("   score: {}%", result.score);
    println!(
        "   base {} / same-sign +{} / jitter +{}",
        result.breakdown.base, result.breakdown.same_sign_bonus, result.breakdown.jitter
    );
    println!("   {} — {}", band.label(), band.text());
    println!("   {}", element_tip(result.sign_a, result.sign_b));
    CliExitCode::Success
}
