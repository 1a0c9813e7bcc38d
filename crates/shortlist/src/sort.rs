//! Field comparators and the stable sorter.
//!
//! Sort direction is fixed per field, not user-toggleable:
//!
//! | Field | Order |
//! |-------|-------|
//! | account number | ascending numeric (`"9"` before `"10"`) |
//! | phone number | ascending numeric, formatting stripped |
//! | balance | descending numeric (highest first) |
//! | date added | descending chronological (most recent first) |
//! | company, contact, email | ascending, collated text |
//! | anything else | stable no-op |
//!
//! Sorting is stable throughout: equal keys preserve input order.

use std::cmp::Ordering;

use deunicode::deunicode;

use crate::record::{Account, AccountField};

/// Returns a freshly ordered copy of `accounts`, sorted by `field` with
/// that field's fixed direction. The input is never mutated.
pub fn sort_by_field(accounts: &[Account], field: AccountField) -> Vec<Account> {
    let mut sorted = accounts.to_vec();
    sorted.sort_by(|a, b| compare_by_field(a, b, field));
    sorted
}

/// The per-field comparator table.
///
/// Fields without a defined ordering compare as equal, which under a
/// stable sort preserves their relative input order.
pub fn compare_by_field(a: &Account, b: &Account, field: AccountField) -> Ordering {
    match field {
        AccountField::AccountNumber => {
            numeric_key(&a.account_number).total_cmp(&numeric_key(&b.account_number))
        }
        AccountField::PhoneNumber => {
            digits_key(&a.phone_number).total_cmp(&digits_key(&b.phone_number))
        }
        AccountField::Balance => b.balance.cmp(&a.balance),
        AccountField::DateAdded => b.date_added.cmp(&a.date_added),
        AccountField::CompanyName => collation_key(&a.company_name).cmp(&collation_key(&b.company_name)),
        AccountField::ContactName => collation_key(&a.contact_name).cmp(&collation_key(&b.contact_name)),
        AccountField::Email => collation_key(&a.email).cmp(&collation_key(&b.email)),
        _ => Ordering::Equal,
    }
}

fn numeric_key(s: &str) -> f64 {
    s.trim().parse().unwrap_or(f64::INFINITY)
}

fn digits_key(s: &str) -> f64 {
    let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0.0)
}

/// Collation key for natural-language ordering: accents are
/// transliterated to their base forms, then the text is casefolded, so
/// "Électro" sorts with "Electro" rather than after "Z".
fn collation_key(s: &str) -> String {
    deunicode(s).to_lowercase()
}
