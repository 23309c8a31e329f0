//! Love Alchemy core library.
//!
//! Deterministic compatibility scoring: a name-numerology pipeline and a
//! zodiac element pipeline, plus the message/mood mapping, letter
//! templating and share-link handling that sit directly on top of the
//! scores.
//!
//! Everything in this crate is pure and synchronous. The only
//! nondeterminism (cosmetic jitter, tip selection) is funneled through a
//! caller-supplied [`rand::Rng`], so the scoring contract itself stays
//! reproducible and testable.
//!
//! # Example
//!
//! ```
//! use love_alchemy_core::numerology;
//!
//! let outcome = numerology::calculate("Romeo", "Juliet", true).unwrap();
//! assert_eq!(outcome.percent, 86);
//! ```

pub mod error;
pub mod letter;
pub mod mood;
pub mod numerology;
pub mod share;
pub mod validate;
pub mod zodiac;

pub use error::ValidationError;
pub use mood::Mood;
pub use zodiac::{Element, ZodiacSign};
