//! Simple per-field text search with case-sensitivity control.
//!
//! A [`SimpleSearch`] holds one raw term per free-text field (empty term
//! means the field is not searched), a case-sensitivity flag per field,
//! and an optional status gate. A record matches when every populated
//! field term matches and its status passes the gate.

use crate::record::{Account, AccountField, AccountStatus};

/// Search term plus matching mode for one free-text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTerm {
    pub term: String,
    pub case_sensitive: bool,
}

impl FieldTerm {
    /// Returns `true` if this field is being searched at all.
    pub fn is_active(&self) -> bool {
        !self.term.is_empty()
    }

    /// Tests one field value against this term.
    ///
    /// Case-sensitive mode anchors to the start of the value when the
    /// term leads with a letter or digit, and falls back to containment
    /// for terms leading with punctuation (e.g. `"("` against a
    /// formatted phone number). Case-insensitive mode is always
    /// containment over lowercased text.
    pub fn matches(&self, value: &str) -> bool {
        if !self.is_active() {
            return true;
        }
        if self.case_sensitive {
            let anchored = self
                .term
                .chars()
                .next()
                .is_some_and(|c| c.is_alphanumeric());
            if anchored {
                value.starts_with(self.term.as_str())
            } else {
                value.contains(self.term.as_str())
            }
        } else {
            value.to_lowercase().contains(&self.term.to_lowercase())
        }
    }
}

/// The simple search set: one [`FieldTerm`] per free-text field plus an
/// optional set of accepted statuses (empty set = all statuses pass).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleSearch {
    pub account_number: FieldTerm,
    pub company_name: FieldTerm,
    pub contact_name: FieldTerm,
    pub phone_number: FieldTerm,
    pub email: FieldTerm,
    pub statuses: Vec<AccountStatus>,
}

impl SimpleSearch {
    /// Creates an empty search set that matches every record.
    pub fn new() -> Self {
        SimpleSearch::default()
    }

    /// Sets the search term for one of the five free-text fields.
    /// Terms for non-search fields are ignored.
    pub fn term(mut self, field: AccountField, term: impl Into<String>) -> Self {
        if let Some(entry) = self.entry_mut(field) {
            entry.term = term.into();
        }
        self
    }

    /// Sets the case-sensitivity flag for one of the free-text fields.
    pub fn case_sensitive(mut self, field: AccountField, on: bool) -> Self {
        if let Some(entry) = self.entry_mut(field) {
            entry.case_sensitive = on;
        }
        self
    }

    /// Adds an accepted status to the status gate.
    pub fn status(mut self, status: AccountStatus) -> Self {
        self.statuses.push(status);
        self
    }

    /// Returns the five field terms, paired with their fields.
    pub fn terms(&self) -> [(AccountField, &FieldTerm); 5] {
        [
            (AccountField::AccountNumber, &self.account_number),
            (AccountField::CompanyName, &self.company_name),
            (AccountField::ContactName, &self.contact_name),
            (AccountField::PhoneNumber, &self.phone_number),
            (AccountField::Email, &self.email),
        ]
    }

    /// Returns `true` if no term is populated and no status is selected.
    pub fn is_empty(&self) -> bool {
        self.terms().iter().all(|(_, term)| !term.is_active()) && self.statuses.is_empty()
    }

    /// Decides whether one record satisfies every populated term and the
    /// status gate.
    pub fn matches(&self, account: &Account) -> bool {
        for (field, term) in self.terms() {
            if term.is_active() && !term.matches(account.field_text(field).as_ref()) {
                return false;
            }
        }
        self.statuses.is_empty() || self.statuses.contains(&account.status)
    }

    fn entry_mut(&mut self, field: AccountField) -> Option<&mut FieldTerm> {
        match field {
            AccountField::AccountNumber => Some(&mut self.account_number),
            AccountField::CompanyName => Some(&mut self.company_name),
            AccountField::ContactName => Some(&mut self.contact_name),
            AccountField::PhoneNumber => Some(&mut self.phone_number),
            AccountField::Email => Some(&mut self.email),
            _ => None,
        }
    }
}
