//! Query orchestration: gates, ordering, and the suggestion fallback.
//!
//! [`evaluate_query`] is the single entry point a caller needs: it runs
//! the advanced-filter chain, the simple search, and the status gate
//! over every record, sorts the survivors, and, when nothing matched
//! but the user actually asked for something, looks up near-miss
//! suggestions for each searched field.

use std::collections::BTreeMap;

use crate::condition::{evaluate_chain, FilterCondition};
use crate::record::{Account, AccountField};
use crate::search::SimpleSearch;
use crate::sort::compare_by_field;
use crate::suggest::find_closest_matches;

/// The outcome of one query evaluation.
///
/// `suggestions` is `Some` only when the result set is empty and at
/// least one search term or filter operand was populated; it maps each
/// searched field to its closest-value records (at most five per field,
/// possibly none). An empty result with no query input at all carries
/// no suggestions, and neither does any non-empty result.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome<'a> {
    pub results: Vec<&'a Account>,
    pub suggestions: Option<BTreeMap<AccountField, Vec<&'a Account>>>,
}

/// Evaluates one query over the collection.
///
/// A record is included only when all three gates pass: the
/// advanced-filter chain fold, the simple search terms, and the status
/// selection. Survivors are stable-sorted by `sort` (per-field fixed
/// direction) when given; otherwise they keep collection order. Inputs
/// are read-only snapshots; the collection is never mutated.
pub fn evaluate_query<'a>(
    accounts: &'a [Account],
    search: &SimpleSearch,
    filters: &[FilterCondition],
    sort: Option<AccountField>,
) -> QueryOutcome<'a> {
    let mut results: Vec<&'a Account> = accounts
        .iter()
        .filter(|account| evaluate_chain(filters, account) && search.matches(account))
        .collect();

    if let Some(field) = sort {
        results.sort_by(|a, b| compare_by_field(a, b, field));
    }

    let suggestions = if results.is_empty() && has_query_input(search, filters) {
        let mut per_field = BTreeMap::new();
        for (field, term) in search.terms() {
            if term.is_active() {
                per_field.insert(field, find_closest_matches(&term.term, accounts, field));
            }
        }
        Some(per_field)
    } else {
        None
    };

    QueryOutcome {
        results,
        suggestions,
    }
}

/// Whether the caller supplied anything worth suggesting against: a
/// populated search term, or a filter condition that is not inert.
fn has_query_input(search: &SimpleSearch, filters: &[FilterCondition]) -> bool {
    search.terms().iter().any(|(_, term)| term.is_active())
        || filters.iter().any(|condition| !condition.is_inert())
}
