//! Name-numerology scoring pipeline.
//!
//! Two names are reduced to numerology digits via the Pythagorean letter
//! table, the digits are combined and reduced again, and the combined
//! number is mapped to a compatibility percentage. Master numbers
//! (11, 22, 33) are optionally exempt from reduction.
//!
//! The pipeline is exposed both as composable steps
//! ([`sanitize_name`] → [`name_to_number`] → [`combine_numbers`] →
//! [`map_to_percent`]) and as the validated [`calculate`] entry point.

use rand::Rng;

use crate::error::ValidationError;
use crate::mood::{self, Mood};
use crate::validate::validate_name;

/// The three values exempt from digit-sum reduction when master-number
/// support is on.
const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Strip everything but ASCII letters and uppercase the rest.
///
/// An empty result is valid here; callers that feed the scoring steps
/// must reject empty canonical names themselves (see [`calculate`]),
/// otherwise the pipeline quietly produces a 0-based score.
pub fn sanitize_name(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Pythagorean letter table: 1-9 assigned cyclically to A-I, J-R, S-Z.
fn letter_value(ch: char) -> u32 {
    match ch {
        'A' | 'J' | 'S' => 1,
        'B' | 'K' | 'T' => 2,
        'C' | 'L' | 'U' => 3,
        'D' | 'M' | 'V' => 4,
        'E' | 'N' | 'W' => 5,
        'F' | 'O' | 'X' => 6,
        'G' | 'P' | 'Y' => 7,
        'H' | 'Q' | 'Z' => 8,
        'I' | 'R' => 9,
        _ => 0,
    }
}

fn is_master(value: u32) -> bool {
    MASTER_NUMBERS.contains(&value)
}

fn digit_sum(mut value: u32) -> u32 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}

/// Collapse `value` to a single digit by repeated decimal digit-summing.
///
/// With `preserve_master` set, reduction stops as soon as the running
/// value lands on 11, 22 or 33, including when the initial value already
/// is one.
fn reduce(mut value: u32, preserve_master: bool) -> u32 {
    while value > 9 && !(preserve_master && is_master(value)) {
        value = digit_sum(value);
    }
    value
}

/// Reduce a name to its numerology digit.
///
/// Returns a value in {1..9, 11, 22, 33}, or 0 when the sanitized name
/// is empty.
pub fn name_to_number(name: &str, preserve_master: bool) -> u32 {
    let sum: u32 = sanitize_name(name).chars().map(letter_value).sum();
    if sum == 0 {
        return 0;
    }
    reduce(sum, preserve_master)
}

/// Combine two numerology digits with the same reduction rule.
pub fn combine_numbers(n1: u32, n2: u32, preserve_master: bool) -> u32 {
    reduce(n1 + n2, preserve_master)
}

/// Map a combined number (plus the two source digits) to a percentage
/// in [1, 100].
///
/// Base is 95 for combined 11, 99 for 22/33, otherwise `30 + combined*7`.
/// Self-resonance (n1 == n2 != 0) and master influence (either digit a
/// master number) each add 6 and stack. The combined==1 reset runs after
/// those bonuses and overwrites them; combined==7 adds 10 on top. Keep
/// this ordering: downstream scores depend on it.
pub fn map_to_percent(combined: u32, n1: u32, n2: u32) -> u8 {
    let mut base: i32 = match combined {
        11 => 95,
        22 | 33 => 99,
        n => 30 + n as i32 * 7,
    };

    if n1 == n2 && n1 != 0 {
        base += 6;
    }
    if is_master(n1) || is_master(n2) {
        base += 6;
    }

    // combined == 1 discards whatever the bonuses added above.
    if combined == 1 {
        base = 92;
    }
    if combined == 7 {
        base += 10;
    }

    base.clamp(1, 100) as u8
}

/// Apply a uniform offset in [-5, +5] and re-clamp to [1, 100].
///
/// Cosmetic only. The deterministic pipeline never calls this; the
/// frontend opts in per calculation.
pub fn jittered_percent<R: Rng>(percent: u8, rng: &mut R) -> u8 {
    let offset: i32 = rng.gen_range(-5..=5);
    (i32::from(percent) + offset).clamp(1, 100) as u8
}

/// Everything a frontend needs to render one numerology match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// First name, as entered (trimmed).
    pub name1: String,
    /// Second name, as entered (trimmed).
    pub name2: String,
    /// Numerology digit of the first name.
    pub digit1: u32,
    /// Numerology digit of the second name.
    pub digit2: u32,
    /// Combined and re-reduced number.
    pub combined: u32,
    /// Compatibility percentage in [1, 100].
    pub percent: u8,
    /// Verdict line for the percentage tier.
    pub message: &'static str,
    /// Mood bucket for the percentage.
    pub mood: Mood,
}

/// Validate both names and run the full pipeline.
///
/// # Errors
///
/// [`ValidationError::EmptyName`] when a name trims to nothing,
/// [`ValidationError::InvalidName`] when it contains anything besides
/// letters and spaces.
pub fn calculate(
    name1: &str,
    name2: &str,
    preserve_master: bool,
) -> Result<MatchOutcome, ValidationError> {
    let name1 = name1.trim();
    let name2 = name2.trim();
    validate_name(name1)?;
    validate_name(name2)?;

    let digit1 = name_to_number(name1, preserve_master);
    let digit2 = name_to_number(name2, preserve_master);
    let combined = combine_numbers(digit1, digit2, preserve_master);
    let percent = map_to_percent(combined, digit1, digit2);

    Ok(MatchOutcome {
        name1: name1.to_string(),
        name2: name2.to_string(),
        digit1,
        digit2,
        combined,
        percent,
        message: mood::message_for_percent(percent),
        mood: Mood::for_percent(percent),
    })
}
