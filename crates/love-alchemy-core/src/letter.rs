//! Love-letter templates and plain-text composition.

use serde::{Deserialize, Serialize};

/// Soft budget for the letter body, in characters.
pub const BODY_LIMIT: usize = 800;

/// The four bundled letter styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterTemplate {
    Romantic,
    Cute,
    Poetic,
    Funny,
}

/// A letter ready to compose. `date` is a preformatted display string so
/// composition stays pure; the frontend decides locale and clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letter {
    pub recipient: String,
    pub sender: String,
    pub date: String,
    pub body: String,
}

impl LetterTemplate {
    /// Preset recipient/sender/body for this style.
    pub fn preset(self, date: &str) -> Letter {
        let (recipient, sender, body) = match self {
            LetterTemplate::Romantic => (
                "My Beloved",
                "Your Devoted Admirer",
                "My Dearest,\n\nEvery moment without you feels like a game paused forever. My heart races every time I see you, like the ultimate power-up.\n\nI treasure every pixel of our memories together and dream of creating new adventures hand in hand.\n\nWith all my love,",
            ),
            LetterTemplate::Cute => (
                "Sweetest Honeybun",
                "Your Snuggle Bear",
                "Hi Cutie!\n\nJust wanted to send you a little love in pixels. You make my days brighter than a full-screen rainbow in a retro game!\n\nHugs, kisses, and endless giggles for you.\n\nAlways yours,",
            ),
            LetterTemplate::Poetic => (
                "My Muse",
                "Your Poet",
                "Dearest Soul,\n\nThrough the flicker of pixelated stars, my thoughts drift to you. Every line of code I write carries whispers of your name.\n\nTogether, we script an endless story of love and wonder.\n\nYours in rhyme and reason,",
            ),
            LetterTemplate::Funny => (
                "Player Two",
                "Your Console Buddy",
                "Hey Player Two,\n\nLife without you is like a game without cheat codes: challenging and full of bugs. Thanks for being my ultimate co-op partner.\n\nLet's keep leveling up together!\n\nGame over? Never!",
            ),
        };
        Letter {
            recipient: recipient.to_string(),
            sender: sender.to_string(),
            date: date.to_string(),
            body: body.to_string(),
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            LetterTemplate::Romantic => "❤️",
            LetterTemplate::Cute => "🐻",
            LetterTemplate::Poetic => "✨",
            LetterTemplate::Funny => "😆",
        }
    }
}

/// Render the letter as plain text, with placeholder fallbacks for a
/// blank recipient or sender.
pub fn compose(letter: &Letter) -> String {
    let recipient = non_blank(&letter.recipient, "My Dearest [Recipient],");
    let sender = non_blank(&letter.sender, "[Your Name]");
    format!(
        "{}\n\n{}\n\n{}\n\nWith all my love,\n{}",
        letter.date, recipient, letter.body, sender
    )
}

fn non_blank<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

/// Warning tier for the body length counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyBudget {
    Ok,
    Warning,
    Danger,
}

pub fn body_budget(body: &str) -> BodyBudget {
    match body.chars().count() {
        0..=500 => BodyBudget::Ok,
        501..=700 => BodyBudget::Warning,
        _ => BodyBudget::Danger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_joins_the_sections() {
        let letter = Letter {
            recipient: "My Sweetheart".into(),
            sender: "Your Secret Admirer".into(),
            date: "August 5, 2026".into(),
            body: "You are the best.".into(),
        };
        let text = compose(&letter);
        assert_eq!(
            text,
            "August 5, 2026\n\nMy Sweetheart\n\nYou are the best.\n\nWith all my love,\nYour Secret Admirer"
        );
    }

    #[test]
    fn blank_fields_fall_back_to_placeholders() {
        let letter = Letter {
            recipient: "  ".into(),
            sender: String::new(),
            date: "today".into(),
            body: "hi".into(),
        };
        let text = compose(&letter);
        assert!(text.contains("My Dearest [Recipient],"));
        assert!(text.ends_with("[Your Name]"));
    }

    #[test]
    fn presets_fill_every_field() {
        for template in [
            LetterTemplate::Romantic,
            LetterTemplate::Cute,
            LetterTemplate::Poetic,
            LetterTemplate::Funny,
        ] {
            let letter = template.preset("June 1, 2026");
            assert!(!letter.recipient.is_empty());
            assert!(!letter.sender.is_empty());
            assert!(!letter.body.is_empty());
            assert!(letter.body.chars().count() <= BODY_LIMIT);
        }
    }

    #[test]
    fn body_budget_tiers() {
        assert_eq!(body_budget(""), BodyBudget::Ok);
        assert_eq!(body_budget(&"x".repeat(500)), BodyBudget::Ok);
        assert_eq!(body_budget(&"x".repeat(501)), BodyBudget::Warning);
        assert_eq!(body_budget(&"x".repeat(701)), BodyBudget::Danger);
    }
}
