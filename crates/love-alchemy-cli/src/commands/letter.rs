//! `letter` command: template presets with overrides.

use chrono::Local;
use clap::{Args, ValueEnum};

use love_alchemy_core::letter::{self, BodyBudget, Letter, LetterTemplate};

use crate::error::CliExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TemplateArg {
    Romantic,
    Cute,
    Poetic,
    Funny,
}

impl From<TemplateArg> for LetterTemplate {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Romantic => LetterTemplate::Romantic,
            TemplateArg::Cute => LetterTemplate::Cute,
            TemplateArg::Poetic => LetterTemplate::Poetic,
            TemplateArg::Funny => LetterTemplate::Funny,
        }
    }
}

#[derive(Args, Debug)]
pub struct LetterArgs {
    /// Letter style
    #[arg(long, value_enum, default_value = "romantic")]
    pub template: TemplateArg,

    /// Recipient line, overriding the template preset
    #[arg(long)]
    pub to: Option<String>,

    /// Signature line, overriding the template preset
    #[arg(long)]
    pub from: Option<String>,

    /// Body text, overriding the template preset
    #[arg(long)]
    pub body: Option<String>,

    /// Date line; today's date when omitted
    #[arg(long)]
    pub date: Option<String>,
}

pub fn run(args: LetterArgs) -> CliExitCode {
    let date = args
        .date
        .unwrap_or_else(|| Local::now().format("%B %-d, %Y").to_string());

    let template = LetterTemplate::from(args.template);
    let mut letter: Letter = template.preset(&date);
    if let Some(to) = args.to {
        letter.recipient = to;
    }
    if let Some(from) = args.from {
        letter.sender = from;
    }
    if let Some(body) = args.body {
        letter.body = body;
    }

    match letter::body_budget(&letter.body) {
        BodyBudget::Ok => {}
        BodyBudget::Warning => eprintln!("note: the letter body is getting long"),
        BodyBudget::Danger => eprintln!(
            "note: the letter body is close to the {}-character limit",
            letter::BODY_LIMIT
        ),
    }

    println!("{}", letter::compose(&letter));
    println!("\n{}", template.emoji());
    CliExitCode::Success
}
