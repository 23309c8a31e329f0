//! Zodiac element-compatibility pipeline.
//!
//! Scores are a symmetric element-pair base, a same-sign bonus and a
//! deterministic hash-derived jitter, capped at 98. The jitter hash is
//! a wrapping 32-bit fold so the same pair of signs scores identically
//! on every platform and every run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The twelve signs, in wheel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All signs, for iteration and option lists.
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

/// The four classical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl ZodiacSign {
    /// Element membership, three signs per element.
    pub fn element(self) -> Element {
        use ZodiacSign::*;
        match self {
            Aries | Leo | Sagittarius => Element::Fire,
            Taurus | Virgo | Capricorn => Element::Earth,
            Gemini | Libra | Aquarius => Element::Air,
            Cancer | Scorpio | Pisces => Element::Water,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ZodiacSign {
    type Err = ValidationError;

    /// Case-insensitive match on the English sign name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_SIGNS
            .into_iter()
            .find(|sign| sign.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValidationError::UnknownSign(needle.to_string()))
    }
}

/// Element-pair baseline. Symmetric in its arguments.
pub fn base_score(a: ZodiacSign, b: ZodiacSign) -> u8 {
    if a == b {
        return 88;
    }
    use Element::*;
    match (a.element(), b.element()) {
        (x, y) if x == y => 84,
        (Fire, Air) | (Air, Fire) => 78,
        (Earth, Water) | (Water, Earth) => 78,
        (Fire, Earth) | (Earth, Fire) => 56,
        (Air, Water) | (Water, Air) => 54,
        _ => 48,
    }
}

/// Deterministic jitter in [0, 6] from the two sign names.
///
/// Folds `"{a}|{b}"` lowercased through `h = h*31 + byte` over a
/// wrapping u32, then takes it mod 7. Wrapping arithmetic keeps the
/// value identical across platforms.
pub fn small_hash(a: &str, b: &str) -> u32 {
    let joined = format!("{a}|{b}").to_lowercase();
    let mut h: u32 = 0;
    for byte in joined.bytes() {
        h = h.wrapping_mul(31).wrapping_add(u32::from(byte));
    }
    h % 7
}

/// Component breakdown of a zodiac score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: u8,
    pub same_sign_bonus: u8,
    pub jitter: u8,
}

/// A scored pairing with its breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZodiacCompatibility {
    pub sign_a: ZodiacSign,
    pub sign_b: ZodiacSign,
    /// Final score in [1, 98].
    pub score: u8,
    pub breakdown: ScoreBreakdown,
}

/// Score a pair of signs: base + same-sign bonus + jitter, capped at 98.
pub fn compute_compatibility(a: ZodiacSign, b: ZodiacSign) -> ZodiacCompatibility {
    let base = base_score(a, b);
    let same_sign_bonus = if a == b { 4 } else { 0 };
    let jitter = small_hash(a.name(), b.name()) as u8;
    let score = (base as u32 + same_sign_bonus as u32 + jitter as u32).min(98) as u8;
    ZodiacCompatibility {
        sign_a: a,
        sign_b: b,
        score,
        breakdown: ScoreBreakdown {
            base,
            same_sign_bonus,
            jitter,
        },
    }
}

/// Parse two sign names and score them.
///
/// # Errors
///
/// [`ValidationError::UnknownSign`] when either input is not one of the
/// twelve signs.
pub fn compatibility_for_names(a: &str, b: &str) -> Result<ZodiacCompatibility, ValidationError> {
    Ok(compute_compatibility(a.parse()?, b.parse()?))
}

/// High / Medium / Low verdict band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompatibilityBand {
    High,
    Medium,
    Low,
}

impl CompatibilityBand {
    pub fn for_score(score: u8) -> Self {
        match score {
            81..=u8::MAX => CompatibilityBand::High,
            61..=80 => CompatibilityBand::Medium,
            _ => CompatibilityBand::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompatibilityBand::High => "High",
            CompatibilityBand::Medium => "Medium",
            CompatibilityBand::Low => "Low",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            CompatibilityBand::High => {
                "Strong chemistry! ✨ You two connect easily and bring out the best in each other."
            }
            CompatibilityBand::Medium => {
                "Good potential. ❤ With understanding and effort this pairing can grow nicely."
            }
            CompatibilityBand::Low => {
                "Challenging match. 💡 Differences are real — communication and patience are key."
            }
        }
    }
}

/// Fixed pairing advice per element combination.
pub fn element_tip(a: ZodiacSign, b: ZodiacSign) -> &'static str {
    use Element::*;
    match (a.element(), b.element()) {
        (Fire, Fire) => "Both Fire signs — you likely share similar drives and rhythms.",
        (Earth, Earth) => "Both Earth signs — you likely share similar drives and rhythms.",
        (Air, Air) => "Both Air signs — you likely share similar drives and rhythms.",
        (Water, Water) => "Both Water signs — you likely share similar drives and rhythms.",
        (Fire, Air) | (Air, Fire) => {
            "Fire + Air: energetic and talkative — lots of spark and curiosity."
        }
        (Earth, Water) | (Water, Earth) => {
            "Earth + Water: grounded and nurturing — stable emotional support."
        }
        (Fire, Earth) | (Earth, Fire) => {
            "Fire + Earth: ambition meets practicality — balance action with planning."
        }
        (Air, Water) | (Water, Air) => {
            "Air + Water: ideas meet feelings — practice clear emotional communication."
        }
        (Fire, Water) | (Water, Fire) | (Earth, Air) | (Air, Earth) => {
            "Opposing elements — you may approach things differently; patience bridges the gap."
        }
    }
}
