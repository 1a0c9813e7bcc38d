//! Account records and the per-field strategy table.
//!
//! [`Account`] is the entity being searched, filtered, and sorted. The
//! engine never mutates an account; it reads fields, reorders, and copies.
//! [`AccountField`] identifies one field and carries the fixed per-field
//! behavior (value kind, operator set, search eligibility) so that the
//! sorter, validator, and predicate evaluator dispatch over documented
//! data instead of scattered conditionals.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::op::FilterOp;

/// Lifecycle status of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountStatus {
    Open,
    Closed,
    Collections,
    Suspended,
}

impl AccountStatus {
    /// All statuses, in display order.
    pub const ALL: [AccountStatus; 4] = [
        AccountStatus::Open,
        AccountStatus::Closed,
        AccountStatus::Collections,
        AccountStatus::Suspended,
    ];

    /// Returns the display name of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            AccountStatus::Open => "Open",
            AccountStatus::Closed => "Closed",
            AccountStatus::Collections => "Collections",
            AccountStatus::Suspended => "Suspended",
        }
    }

    /// Parses a status name, case-insensitively.
    pub fn parse(s: &str) -> Option<AccountStatus> {
        AccountStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One account entity.
///
/// `date_added` is an ISO `YYYY-MM-DD` string, so lexical order is
/// chronological order. `balance` is a signed whole-currency amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub account_number: String,
    pub company_name: String,
    pub contact_name: String,
    pub phone_number: String,
    pub email: String,
    pub status: AccountStatus,
    pub balance: i64,
    pub date_added: String,
}

impl Account {
    /// Returns the textual form of a field, as consumed by predicate
    /// evaluation and fuzzy matching.
    pub fn field_text(&self, field: AccountField) -> Cow<'_, str> {
        match field {
            AccountField::Id => Cow::Borrowed(self.id.as_str()),
            AccountField::AccountNumber => Cow::Borrowed(self.account_number.as_str()),
            AccountField::CompanyName => Cow::Borrowed(self.company_name.as_str()),
            AccountField::ContactName => Cow::Borrowed(self.contact_name.as_str()),
            AccountField::PhoneNumber => Cow::Borrowed(self.phone_number.as_str()),
            AccountField::Email => Cow::Borrowed(self.email.as_str()),
            AccountField::Status => Cow::Borrowed(self.status.as_str()),
            AccountField::Balance => Cow::Owned(self.balance.to_string()),
            AccountField::DateAdded => Cow::Borrowed(self.date_added.as_str()),
        }
    }
}

/// How a field's values behave under comparison and validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text; string operators, collation ordering.
    Text,
    /// Numeric content (possibly formatted); numeric operators and order.
    Numeric,
    /// ISO date string; range bounds and before/after.
    Date,
    /// Enumerated status; exact membership only.
    Status,
}

/// Identifier for one [`Account`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccountField {
    Id,
    AccountNumber,
    CompanyName,
    ContactName,
    PhoneNumber,
    Email,
    Status,
    Balance,
    DateAdded,
}

impl AccountField {
    /// The five free-text fields reachable by simple search.
    pub const SEARCH_FIELDS: [AccountField; 5] = [
        AccountField::AccountNumber,
        AccountField::CompanyName,
        AccountField::ContactName,
        AccountField::PhoneNumber,
        AccountField::Email,
    ];

    /// Returns the value kind of this field.
    pub fn kind(self) -> FieldKind {
        match self {
            AccountField::Id
            | AccountField::CompanyName
            | AccountField::ContactName
            | AccountField::Email => FieldKind::Text,
            AccountField::AccountNumber | AccountField::PhoneNumber | AccountField::Balance => {
                FieldKind::Numeric
            }
            AccountField::Status => FieldKind::Status,
            AccountField::DateAdded => FieldKind::Date,
        }
    }

    /// Returns the operators that make sense for this field.
    ///
    /// This is advisory metadata for callers building filter UIs; the
    /// evaluator itself stays total over every operator.
    pub fn operators(self) -> &'static [FilterOp] {
        const TEXT: &[FilterOp] = &[
            FilterOp::Is,
            FilterOp::Contains,
            FilterOp::NotContains,
            FilterOp::StartsWith,
        ];
        const NUMERIC: &[FilterOp] = &[
            FilterOp::Is,
            FilterOp::Gt,
            FilterOp::Lt,
            FilterOp::Gte,
            FilterOp::Lte,
        ];
        const DATE: &[FilterOp] = &[FilterOp::Before, FilterOp::After];
        const STATUS: &[FilterOp] = &[FilterOp::Is];
        match self.kind() {
            FieldKind::Text => TEXT,
            FieldKind::Numeric => NUMERIC,
            FieldKind::Date => DATE,
            FieldKind::Status => STATUS,
        }
    }

    /// Returns `true` if this field participates in simple search.
    pub fn is_search_field(self) -> bool {
        AccountField::SEARCH_FIELDS.contains(&self)
    }

    /// Returns the wire/display name of this field.
    pub fn as_str(self) -> &'static str {
        match self {
            AccountField::Id => "id",
            AccountField::AccountNumber => "accountNumber",
            AccountField::CompanyName => "companyName",
            AccountField::ContactName => "contactName",
            AccountField::PhoneNumber => "phoneNumber",
            AccountField::Email => "email",
            AccountField::Status => "status",
            AccountField::Balance => "balance",
            AccountField::DateAdded => "dateAdded",
        }
    }

    /// Parses a field name as produced by [`AccountField::as_str`],
    /// case-insensitively.
    pub fn parse(s: &str) -> Option<AccountField> {
        const ALL: [AccountField; 9] = [
            AccountField::Id,
            AccountField::AccountNumber,
            AccountField::CompanyName,
            AccountField::ContactName,
            AccountField::PhoneNumber,
            AccountField::Email,
            AccountField::Status,
            AccountField::Balance,
            AccountField::DateAdded,
        ];
        ALL.into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for AccountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Account {
        Account {
            id: "a-1".to_string(),
            account_number: "10042".to_string(),
            company_name: "Acme Corp".to_string(),
            contact_name: "Dana Reyes".to_string(),
            phone_number: "(555) 123-4567".to_string(),
            email: "dana@acme.example".to_string(),
            status: AccountStatus::Open,
            balance: 1500,
            date_added: "2024-03-18".to_string(),
        }
    }

    #[test]
    fn field_text_covers_every_field() {
        let account = sample();
        assert_eq!(account.field_text(AccountField::Id), "a-1");
        assert_eq!(account.field_text(AccountField::AccountNumber), "10042");
        assert_eq!(account.field_text(AccountField::CompanyName), "Acme Corp");
        assert_eq!(account.field_text(AccountField::ContactName), "Dana Reyes");
        assert_eq!(
            account.field_text(AccountField::PhoneNumber),
            "(555) 123-4567"
        );
        assert_eq!(
            account.field_text(AccountField::Email),
            "dana@acme.example"
        );
        assert_eq!(account.field_text(AccountField::Status), "Open");
        assert_eq!(account.field_text(AccountField::Balance), "1500");
        assert_eq!(account.field_text(AccountField::DateAdded), "2024-03-18");
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(AccountStatus::parse("open"), Some(AccountStatus::Open));
        assert_eq!(
            AccountStatus::parse(" COLLECTIONS "),
            Some(AccountStatus::Collections)
        );
        assert_eq!(AccountStatus::parse("archived"), None);
    }

    #[test]
    fn field_parse_round_trips() {
        for field in [
            AccountField::Id,
            AccountField::AccountNumber,
            AccountField::CompanyName,
            AccountField::ContactName,
            AccountField::PhoneNumber,
            AccountField::Email,
            AccountField::Status,
            AccountField::Balance,
            AccountField::DateAdded,
        ] {
            assert_eq!(AccountField::parse(field.as_str()), Some(field));
        }
        assert_eq!(AccountField::parse("ACCOUNTNUMBER"), Some(AccountField::AccountNumber));
        assert_eq!(AccountField::parse("nope"), None);
    }

    #[test]
    fn field_kinds() {
        assert_eq!(AccountField::CompanyName.kind(), FieldKind::Text);
        assert_eq!(AccountField::Balance.kind(), FieldKind::Numeric);
        assert_eq!(AccountField::PhoneNumber.kind(), FieldKind::Numeric);
        assert_eq!(AccountField::DateAdded.kind(), FieldKind::Date);
        assert_eq!(AccountField::Status.kind(), FieldKind::Status);
    }

    #[test]
    fn search_fields_are_the_five_text_inputs() {
        assert!(AccountField::CompanyName.is_search_field());
        assert!(AccountField::PhoneNumber.is_search_field());
        assert!(!AccountField::Status.is_search_field());
        assert!(!AccountField::Balance.is_search_field());
        assert!(!AccountField::DateAdded.is_search_field());
    }

    #[test]
    fn operator_sets_follow_field_kind() {
        assert!(AccountField::CompanyName
            .operators()
            .contains(&FilterOp::NotContains));
        assert!(AccountField::Balance.operators().contains(&FilterOp::Gt));
        assert!(!AccountField::Balance
            .operators()
            .contains(&FilterOp::Contains));
        assert_eq!(AccountField::Status.operators(), &[FilterOp::Is]);
        assert_eq!(
            AccountField::DateAdded.operators(),
            &[FilterOp::Before, FilterOp::After]
        );
    }

    #[test]
    fn account_serde_uses_camel_case() {
        let account = sample();
        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains("\"accountNumber\":\"10042\""));
        assert!(json.contains("\"dateAdded\":\"2024-03-18\""));
        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(back, account);
    }
}
