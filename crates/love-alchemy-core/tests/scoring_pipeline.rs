//! End-to-end checks over the public scoring API.

use love_alchemy_core::numerology::{self, MatchOutcome};
use love_alchemy_core::share;
use love_alchemy_core::zodiac::{self, CompatibilityBand, ALL_SIGNS};
use love_alchemy_core::Mood;
use url::Url;

#[test]
fn numerology_pipeline_is_deterministic() {
    let a: MatchOutcome = numerology::calculate("John", "Mary", true).unwrap();
    let b = numerology::calculate("John", "Mary", true).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.digit1, 2);
    assert_eq!(a.digit2, 3);
    // 2 + 3 = 5, base 30 + 35 = 65.
    assert_eq!(a.combined, 5);
    assert_eq!(a.percent, 65);
    assert_eq!(a.mood, Mood::Flirty);
}

#[test]
fn noisy_input_matches_clean_input() {
    let clean = numerology::calculate("Romeo", "Juliet", true).unwrap();
    let noisy = numerology::calculate("  Romeo ", "Juliet  ", true).unwrap();
    assert_eq!(clean.percent, noisy.percent);
}

#[test]
fn zodiac_scores_are_symmetric_and_capped() {
    for a in ALL_SIGNS {
        for b in ALL_SIGNS {
            let fwd = zodiac::compute_compatibility(a, b);
            let rev = zodiac::compute_compatibility(b, a);
            assert_eq!(fwd.breakdown.base, rev.breakdown.base, "{a} vs {b}");
            assert!(fwd.score <= 98);
        }
    }
}

#[test]
fn computed_match_survives_a_share_link() {
    let outcome = numerology::calculate("Romeo", "Juliet", true).unwrap();
    let base = Url::parse("https://example.org/").unwrap();
    let link = share::share_url(&base, &outcome.name1, &outcome.name2, outcome.percent);
    let restored = share::parse_share_url(&link).unwrap();
    assert_eq!(restored.name1, "Romeo");
    assert_eq!(restored.percent, 86);
}

#[test]
fn band_labels_match_published_copy() {
    let leo = zodiac::compute_compatibility(zodiac::ZodiacSign::Leo, zodiac::ZodiacSign::Leo);
    assert_eq!(leo.score, 93);
    assert_eq!(CompatibilityBand::for_score(leo.score).label(), "High");
}
