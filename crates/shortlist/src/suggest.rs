//! Approximate matching for "did you mean" suggestions.
//!
//! When a query comes back empty, each active search term is scored
//! against every record's value for that field and the best few
//! near-misses are offered back. The score is additive over several
//! signals (exact/prefix/substring hits, an ordered-subsequence scan, a
//! character-overlap ratio, per-word hits) minus a length-difference
//! penalty. All comparisons are case-insensitive.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::record::{Account, AccountField};

/// Maximum number of suggestions returned per field.
pub const MAX_SUGGESTIONS: usize = 5;

/// Scores how closely `value` resembles `term`. Higher is better; a
/// score of zero or below means "not worth suggesting".
pub fn similarity_score(term: &str, value: &str) -> f64 {
    let term = term.to_lowercase();
    let value = value.to_lowercase();
    let term_chars: Vec<char> = term.chars().collect();
    let value_chars: Vec<char> = value.chars().collect();
    if term_chars.is_empty() {
        return 0.0;
    }

    let mut score = 0.0;

    if value == term {
        score += 1000.0;
    }
    if value.starts_with(term.as_str()) {
        score += 500.0;
    }
    if value.contains(term.as_str()) {
        score += 200.0;
    }

    // Ordered-subsequence scan. Walk the value once, consuming term
    // characters in order; the consecutive-run counter resets on any
    // non-matching value character. The scan stops as soon as the term
    // is exhausted, so trailing value characters are never examined.
    let mut next = 0;
    let mut run = 0;
    let mut longest_run = 0;
    for &c in &value_chars {
        if next >= term_chars.len() {
            break;
        }
        if c == term_chars[next] {
            next += 1;
            run += 1;
            if run > longest_run {
                longest_run = run;
            }
        } else {
            run = 0;
        }
    }
    if next == term_chars.len() {
        score += 150.0 + 20.0 * longest_run as f64;
    }

    // Character overlap: value characters drawn from the term's
    // character set, scaled by term length.
    let term_set: HashSet<char> = term_chars.iter().copied().collect();
    let overlap = value_chars.iter().filter(|c| term_set.contains(c)).count();
    score += 50.0 * overlap as f64 / term_chars.len() as f64;

    // Per-word hits; a word that starts with the term also contains it,
    // so both bonuses can apply to the same word.
    for word in value.split_whitespace() {
        if word.starts_with(term.as_str()) {
            score += 100.0;
        }
        if word.contains(term.as_str()) {
            score += 50.0;
        }
    }

    // Length-difference penalty, doubled once the gap exceeds ten
    // characters.
    let diff = value_chars.len().abs_diff(term_chars.len());
    score -= if diff > 10 {
        2.0 * diff as f64
    } else {
        diff as f64
    };

    score
}

/// Returns up to [`MAX_SUGGESTIONS`] records whose `field` value best
/// resembles `term`, ranked by score.
///
/// Candidates scoring zero or below are dropped. Results are
/// deduplicated on the trimmed, case-folded field value, keeping the
/// best-scored occurrence; score ties keep collection order.
pub fn find_closest_matches<'a>(
    term: &str,
    accounts: &'a [Account],
    field: AccountField,
) -> Vec<&'a Account> {
    if term.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &Account)> = accounts
        .iter()
        .map(|account| {
            (
                similarity_score(term, account.field_text(field).as_ref()),
                account,
            )
        })
        .collect();
    // Stable sort, score descending; ties preserve collection order.
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    let mut seen = HashSet::new();
    let mut suggestions = Vec::new();
    for (score, account) in scored {
        if score <= 0.0 {
            break;
        }
        let key = account.field_text(field).trim().to_lowercase();
        if seen.insert(key) {
            suggestions.push(account);
            if suggestions.len() == MAX_SUGGESTIONS {
                break;
            }
        }
    }
    suggestions
}
