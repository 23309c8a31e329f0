//! CLI exit codes.
//!
//! - 0: success
//! - 1: recoverable error (bad input, storage hiccup)
//! - 2: corruption detected in the backing store

use love_alchemy_storage::StorageError;

/// Exit codes for command handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    /// Success
    Success = 0,
    /// Recoverable error; the command printed what it could
    Warning = 1,
    /// Stored data is damaged; manual attention needed
    Corrupt = 2,
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}

impl From<&StorageError> for CliExitCode {
    fn from(err: &StorageError) -> Self {
        if err.is_corruption() {
            CliExitCode::Corrupt
        } else {
            CliExitCode::Warning
        }
    }
}
