//! Syntactic validation of raw user-entered search input.
//!
//! All checks are pure: they inspect the given strings and return a
//! verdict, nothing else. Surfacing the error message is the caller's
//! job. Empty input is always valid (an empty field is simply not
//! searched).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ValidateError};
use crate::record::AccountField;

// Digits with an optional single decimal point; no sign.
static BALANCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("balance pattern is valid"));

/// Checks one raw search input against its field's syntactic rules.
///
/// - Account numbers may not contain alphabetic characters.
/// - Phone numbers are stripped of whitespace, hyphens, and parentheses
///   first; no alphabetic character may remain.
/// - Balance values must be a non-negative decimal number.
/// - Email and other text fields accept anything; partial substrings
///   are searchable.
pub fn validate_search_input(field: AccountField, raw: &str) -> Result<()> {
    if raw.is_empty() {
        return Ok(());
    }
    match field {
        AccountField::AccountNumber => {
            if raw.chars().any(|c| c.is_alphabetic()) {
                Err(ValidateError::AccountNumberHasLetters)
            } else {
                Ok(())
            }
        }
        AccountField::PhoneNumber => {
            let leftover_letters = raw
                .chars()
                .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
                .any(|c| c.is_alphabetic());
            if leftover_letters {
                Err(ValidateError::PhoneNumberHasLetters)
            } else {
                Ok(())
            }
        }
        AccountField::Balance => {
            if BALANCE_PATTERN.is_match(raw) {
                Ok(())
            } else {
                Err(ValidateError::BalanceNotNumeric)
            }
        }
        _ => Ok(()),
    }
}

/// Which end of a date range a candidate value is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

/// Checks a candidate date bound.
///
/// `other` is the opposite bound if one is already set; `today` is the
/// reference date, passed explicitly so the check stays pure. All dates
/// are ISO `YYYY-MM-DD` strings, compared lexically.
///
/// A candidate later than `today` is rejected; a start bound later than
/// the existing end (or an end bound earlier than the existing start)
/// is rejected with a direction-appropriate message.
pub fn validate_date_bound(
    bound: DateBound,
    candidate: &str,
    other: Option<&str>,
    today: &str,
) -> Result<()> {
    if candidate.is_empty() {
        return Ok(());
    }
    if candidate > today {
        return Err(ValidateError::DateInFuture);
    }
    match (bound, other) {
        (DateBound::Start, Some(end)) if candidate > end => Err(ValidateError::StartAfterEnd),
        (DateBound::End, Some(start)) if candidate < start => Err(ValidateError::EndBeforeStart),
        _ => Ok(()),
    }
}
