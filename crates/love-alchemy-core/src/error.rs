//! Input-validation errors.
//!
//! Every variant carries a message fit for direct display to the user.
//! Validation failures are never fatal and are never logged as system
//! errors; persistence problems live in the storage crate's error type.

use thiserror::Error;

/// A problem with user-supplied input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A name field was empty (or became empty after trimming).
    #[error("please enter both names")]
    EmptyName,

    /// A name contained something other than letters and spaces.
    #[error("'{input}' is not a valid name: letters and spaces only")]
    InvalidName {
        /// The rejected input, echoed back for the error banner.
        input: String,
    },

    /// A zodiac sign string did not match any of the twelve signs.
    #[error("unrecognized zodiac sign '{0}'")]
    UnknownSign(String),

    /// A feedback rating outside the 1-5 star range.
    #[error("rating must be between 1 and 5 stars, got {0}")]
    RatingOutOfRange(u8),

    /// Feedback submitted without a message body.
    #[error("please enter your feedback message")]
    EmptyMessage,

    /// Feedback submitted without a name.
    #[error("please tell us your name")]
    EmptyFeedbackName,

    /// An email address that does not look like one.
    #[error("'{0}' does not look like an email address")]
    InvalidEmail(String),
}
