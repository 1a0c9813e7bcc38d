//! Error types for input validation.

use thiserror::Error;

/// A rejected piece of raw user input.
///
/// These are the only errors the engine produces: recoverable,
/// user-facing, and resolved by re-prompting. Valid-but-unmatched input
/// is not an error; an empty result set triggers suggestion lookup
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidateError {
    #[error("Account number cannot contain letters.")]
    AccountNumberHasLetters,

    #[error("Phone number cannot contain letters.")]
    PhoneNumberHasLetters,

    #[error("Balance must be a valid number.")]
    BalanceNotNumeric,

    #[error("Date cannot be later than today.")]
    DateInFuture,

    #[error("Start date cannot be later than the end date.")]
    StartAfterEnd,

    #[error("End date cannot be earlier than the start date.")]
    EndBeforeStart,
}

/// Result type for validation checks.
pub type Result<T> = std::result::Result<T, ValidateError>;
