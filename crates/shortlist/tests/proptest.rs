//! Property-based tests using proptest.

use proptest::prelude::*;
use shortlist::{
    evaluate_chain, evaluate_query, find_closest_matches, sort_by_field, Account, AccountField,
    AccountStatus, FilterCondition, FilterOp, SimpleSearch, MAX_SUGGESTIONS,
};

// ============================================================================
// Strategies
// ============================================================================

fn status_strategy() -> impl Strategy<Value = AccountStatus> {
    prop::sample::select(vec![
        AccountStatus::Open,
        AccountStatus::Closed,
        AccountStatus::Collections,
        AccountStatus::Suspended,
    ])
}

fn date_strategy() -> impl Strategy<Value = String> {
    "20[0-2][0-9]-(0[1-9]|1[0-2])-(0[1-9]|1[0-9]|2[0-8])".prop_map(String::from)
}

fn account_strategy() -> impl Strategy<Value = Account> {
    (
        "[a-z0-9]{1,8}",
        "[0-9]{1,7}",
        "[A-Za-z ]{0,12}",
        "[A-Za-z ]{0,12}",
        "[0-9() -]{0,12}",
        "[a-z@.]{0,14}",
        status_strategy(),
        any::<i32>(),
        date_strategy(),
    )
        .prop_map(
            |(id, account_number, company, contact, phone, email, status, balance, date)| {
                Account {
                    id,
                    account_number,
                    company_name: company,
                    contact_name: contact,
                    phone_number: phone,
                    email,
                    status,
                    balance: balance as i64,
                    date_added: date,
                }
            },
        )
}

fn accounts_strategy(max: usize) -> impl Strategy<Value = Vec<Account>> {
    prop::collection::vec(account_strategy(), 0..max)
}

fn sortable_field_strategy() -> impl Strategy<Value = AccountField> {
    prop::sample::select(vec![
        AccountField::AccountNumber,
        AccountField::CompanyName,
        AccountField::ContactName,
        AccountField::PhoneNumber,
        AccountField::Email,
        AccountField::Status,
        AccountField::Balance,
        AccountField::DateAdded,
    ])
}

fn text_condition_strategy() -> impl Strategy<Value = FilterCondition> {
    (
        prop::sample::select(vec![
            AccountField::CompanyName,
            AccountField::ContactName,
            AccountField::Email,
        ]),
        prop::sample::select(vec![
            FilterOp::Is,
            FilterOp::Contains,
            FilterOp::StartsWith,
            FilterOp::NotContains,
        ]),
        prop::collection::vec("[A-Za-z]{1,4}", 1..3),
    )
        .prop_map(|(field, op, values)| {
            let mut condition = FilterCondition::new(field, op);
            for value in values {
                condition = condition.value(value);
            }
            condition
        })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Sorting is a pure function: same input, same output, input intact.
    #[test]
    fn sort_is_deterministic_and_never_mutates(
        accounts in accounts_strategy(40),
        field in sortable_field_strategy(),
    ) {
        let snapshot = accounts.clone();
        let once = sort_by_field(&accounts, field);
        let twice = sort_by_field(&accounts, field);

        prop_assert_eq!(&accounts, &snapshot);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.len(), accounts.len());
    }

    /// Sorting an already-sorted list changes nothing (stability).
    #[test]
    fn sort_is_idempotent(
        accounts in accounts_strategy(40),
        field in sortable_field_strategy(),
    ) {
        let once = sort_by_field(&accounts, field);
        let again = sort_by_field(&once, field);
        prop_assert_eq!(once, again);
    }

    /// Balance sort is descending at every adjacent pair.
    #[test]
    fn balance_sort_descends(accounts in accounts_strategy(40)) {
        let sorted = sort_by_field(&accounts, AccountField::Balance);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].balance >= pair[1].balance);
        }
    }

    /// Date-added sort is descending chronologically (lexical ISO order).
    #[test]
    fn date_sort_descends(accounts in accounts_strategy(40)) {
        let sorted = sort_by_field(&accounts, AccountField::DateAdded);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].date_added >= pair[1].date_added);
        }
    }

    /// Account-number sort is ascending numerically, not lexically.
    #[test]
    fn account_number_sort_ascends_numerically(accounts in accounts_strategy(40)) {
        let sorted = sort_by_field(&accounts, AccountField::AccountNumber);
        for pair in sorted.windows(2) {
            let left: f64 = pair[0].account_number.parse().unwrap();
            let right: f64 = pair[1].account_number.parse().unwrap();
            prop_assert!(left <= right);
        }
    }

    /// Two AND-joined conditions commute within a pure-AND run.
    #[test]
    fn and_run_is_commutative(
        accounts in accounts_strategy(20),
        first in text_condition_strategy(),
        second in text_condition_strategy(),
    ) {
        for account in &accounts {
            let forward = evaluate_chain(&[first.clone(), second.clone()], account);
            let reversed = evaluate_chain(&[second.clone(), first.clone()], account);
            prop_assert_eq!(forward, reversed);
        }
    }

    /// A condition with no operands and no bounds matches every record.
    #[test]
    fn inert_condition_matches_everything(
        accounts in accounts_strategy(20),
        field in sortable_field_strategy(),
    ) {
        let vacuous = FilterCondition::new(field, FilterOp::Gt);
        for account in &accounts {
            prop_assert!(vacuous.matches(account));
        }
    }

    /// With no query input at all, every record comes back.
    #[test]
    fn empty_query_returns_the_whole_collection(accounts in accounts_strategy(30)) {
        let outcome = evaluate_query(&accounts, &SimpleSearch::new(), &[], None);
        prop_assert_eq!(outcome.results.len(), accounts.len());
        prop_assert!(outcome.suggestions.is_none());
    }

    /// Suggestion lists are capped at five and value-distinct.
    #[test]
    fn suggestions_capped_and_distinct(
        accounts in accounts_strategy(60),
        term in "[a-z]{1,6}",
    ) {
        let suggestions = find_closest_matches(&term, &accounts, AccountField::CompanyName);
        prop_assert!(suggestions.len() <= MAX_SUGGESTIONS);

        let mut keys: Vec<String> = suggestions
            .iter()
            .map(|a| a.company_name.trim().to_lowercase())
            .collect();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), suggestions.len());
    }

    /// Filtering never grows the collection, and every survivor
    /// satisfies the chain.
    #[test]
    fn filtered_results_satisfy_the_chain(
        accounts in accounts_strategy(30),
        condition in text_condition_strategy(),
    ) {
        let filters = vec![condition.clone()];
        let outcome = evaluate_query(&accounts, &SimpleSearch::new(), &filters, None);
        prop_assert!(outcome.results.len() <= accounts.len());
        for account in &outcome.results {
            prop_assert!(condition.matches(account));
        }
    }
}
