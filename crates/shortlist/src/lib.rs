//! Shortlist - query engine for narrowing account collections.
//!
//! Shortlist evaluates queries against an in-memory collection of
//! account records. It covers the full narrowing workflow:
//!
//! - Per-field validation of raw search input
//! - Simple free-text search with per-field case-sensitivity
//! - Advanced filter chains combined left-to-right with AND/OR
//! - Per-field sorting with fixed, field-appropriate directions
//! - "Did you mean" suggestions when a query comes back empty
//!
//! # Quick Start
//!
//! ```rust
//! use shortlist::{
//!     evaluate_query, Account, AccountField, AccountStatus, FilterCondition, FilterOp,
//!     SimpleSearch,
//! };
//!
//! let accounts = vec![
//!     Account {
//!         id: "a-1".into(),
//!         account_number: "10042".into(),
//!         company_name: "Acme Corp".into(),
//!         contact_name: "Dana Reyes".into(),
//!         phone_number: "(555) 123-4567".into(),
//!         email: "dana@acme.example".into(),
//!         status: AccountStatus::Open,
//!         balance: 5000,
//!         date_added: "2024-03-18".into(),
//!     },
//!     Account {
//!         id: "a-2".into(),
//!         account_number: "10043".into(),
//!         company_name: "Zenith Ltd".into(),
//!         contact_name: "Ben Okafor".into(),
//!         phone_number: "555-0002".into(),
//!         email: "ben@zenith.example".into(),
//!         status: AccountStatus::Closed,
//!         balance: -200,
//!         date_added: "2023-11-02".into(),
//!     },
//! ];
//!
//! let search = SimpleSearch::new().term(AccountField::CompanyName, "acme");
//! let filters = vec![FilterCondition::new(AccountField::Balance, FilterOp::Gt).value("0")];
//!
//! let outcome = evaluate_query(&accounts, &search, &filters, Some(AccountField::Balance));
//! assert_eq!(outcome.results.len(), 1);
//! assert_eq!(outcome.results[0].id, "a-1");
//! assert!(outcome.suggestions.is_none());
//! ```
//!
//! # Query Semantics
//!
//! A record is included only when all three gates pass:
//!
//! ```text
//! match = (advanced filter chain, folded left-to-right)
//!       ∧ (every populated search term matches)
//!       ∧ (status is among the selected statuses, or none selected)
//! ```
//!
//! The filter fold has **no operator precedence**: each condition's
//! AND/OR tag joins it to the running result of everything before it,
//! so `A; OR B; AND C` means `(A OR B) AND C`.
//!
//! When a query yields nothing and at least one search term or filter
//! operand was populated, [`evaluate_query`] scores every record
//! against each searched field and returns up to five near-miss
//! suggestions per field.
//!
//! The engine is a pure function of its inputs: no shared state between
//! calls, no mutation of the collection or the query objects.

mod condition;
mod engine;
mod error;
mod op;
mod record;
mod search;
mod sort;
mod suggest;
mod validate;

// Re-export public API
pub use condition::{evaluate_chain, FilterCondition, Logic};
pub use engine::{evaluate_query, QueryOutcome};
pub use error::{Result, ValidateError};
pub use op::FilterOp;
pub use record::{Account, AccountField, AccountStatus, FieldKind};
pub use search::{FieldTerm, SimpleSearch};
pub use sort::{compare_by_field, sort_by_field};
pub use suggest::{find_closest_matches, similarity_score, MAX_SUGGESTIONS};
pub use validate::{validate_date_bound, validate_search_input, DateBound};
