//! Advanced filter conditions and the chain fold.
//!
//! A [`FilterCondition`] is one field + operator + operand rule. A chain
//! of conditions is combined by [`evaluate_chain`]: a strict left-to-right
//! fold where each condition after the first joins the running result via
//! its own [`Logic`] tag. There is no operator precedence (`A; OR B;
//! AND C` evaluates as `(A OR B) AND C`) and no short-circuiting: every
//! condition is evaluated against the record before combination.

use crate::op::FilterOp;
use crate::record::{Account, AccountField, FieldKind};

/// Connective joining a condition to the running chain result.
///
/// The tag belongs to the condition that *follows* it in the chain; the
/// first condition's tag is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Logic {
    #[default]
    And,
    Or,
}

/// One field + operator + operand(s) rule in an advanced filter chain.
///
/// Date-field conditions may carry a start/end bound pair instead of a
/// value list; when either bound is set the condition is evaluated as an
/// inclusive range check, independent of `op`.
///
/// A condition with no operands and no bounds is *inert*: it matches
/// every record. Callers should refuse to chain a new condition onto an
/// inert one (see [`FilterCondition::is_inert`]) so vacuous chains don't
/// build up silently.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCondition {
    pub logic: Logic,
    pub field: AccountField,
    pub op: FilterOp,
    pub values: Vec<String>,
    pub date_start: Option<String>,
    pub date_end: Option<String>,
}

impl FilterCondition {
    /// Creates a condition with no operands yet, joined with AND.
    pub fn new(field: AccountField, op: FilterOp) -> Self {
        FilterCondition {
            logic: Logic::And,
            field,
            op,
            values: Vec::new(),
            date_start: None,
            date_end: None,
        }
    }

    /// Creates a date-range condition on a date field. Either bound may
    /// be `None`; with both unset the condition is inert.
    pub fn date_range(
        field: AccountField,
        start: Option<String>,
        end: Option<String>,
    ) -> Self {
        FilterCondition {
            logic: Logic::And,
            field,
            op: FilterOp::Is,
            values: Vec::new(),
            date_start: start,
            date_end: end,
        }
    }

    /// Sets the connective used when this condition joins a chain.
    pub fn with_logic(mut self, logic: Logic) -> Self {
        self.logic = logic;
        self
    }

    /// Appends one operand value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Sets the inclusive start bound (date fields).
    pub fn since(mut self, date: impl Into<String>) -> Self {
        self.date_start = Some(date.into());
        self
    }

    /// Sets the inclusive end bound (date fields).
    pub fn until(mut self, date: impl Into<String>) -> Self {
        self.date_end = Some(date.into());
        self
    }

    /// Returns `true` if this condition has no operands and no bounds,
    /// and therefore matches everything.
    pub fn is_inert(&self) -> bool {
        self.values.is_empty() && self.date_start.is_none() && self.date_end.is_none()
    }

    /// Decides whether one record satisfies this condition.
    pub fn matches(&self, account: &Account) -> bool {
        // Date bounds take priority over the operator/value-list path.
        if self.field.kind() == FieldKind::Date
            && (self.date_start.is_some() || self.date_end.is_some())
        {
            return self.in_date_range(&account.date_added);
        }

        // No operands: vacuous, matches everything.
        if self.values.is_empty() {
            return true;
        }

        let field_value = account.field_text(self.field);
        if self.op.any_operand() {
            self.values
                .iter()
                .any(|operand| self.operand_matches(&field_value, operand))
        } else {
            self.values
                .iter()
                .all(|operand| self.operand_matches(&field_value, operand))
        }
    }

    fn in_date_range(&self, date: &str) -> bool {
        match (self.date_start.as_deref(), self.date_end.as_deref()) {
            (Some(start), Some(end)) => start <= date && date <= end,
            (Some(start), None) => date >= start,
            (None, Some(end)) => date <= end,
            (None, None) => true,
        }
    }

    fn operand_matches(&self, field_value: &str, operand: &str) -> bool {
        match self.op {
            FilterOp::Is => field_value.to_lowercase() == operand.to_lowercase(),
            FilterOp::Contains => field_value
                .to_lowercase()
                .contains(&operand.to_lowercase()),
            FilterOp::NotContains => !field_value
                .to_lowercase()
                .contains(&operand.to_lowercase()),
            FilterOp::StartsWith => field_value
                .to_lowercase()
                .starts_with(&operand.to_lowercase()),
            FilterOp::Gt | FilterOp::Lt | FilterOp::Gte | FilterOp::Lte => {
                match (parse_number(field_value), parse_number(operand)) {
                    (Some(lhs), Some(rhs)) => numeric_test(self.op, lhs, rhs),
                    _ => false,
                }
            }
            FilterOp::Before => field_value < operand,
            FilterOp::After => field_value > operand,
        }
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse().ok()
}

fn numeric_test(op: FilterOp, lhs: f64, rhs: f64) -> bool {
    match op {
        FilterOp::Gt => lhs > rhs,
        FilterOp::Lt => lhs < rhs,
        FilterOp::Gte => lhs >= rhs,
        FilterOp::Lte => lhs <= rhs,
        // Not a numeric operator.
        _ => false,
    }
}

/// Folds a condition chain over one record, strictly left-to-right.
///
/// The first condition seeds the accumulator (its logic tag is ignored);
/// each later condition is evaluated and then joined via its own tag.
/// An empty chain matches everything.
pub fn evaluate_chain(conditions: &[FilterCondition], account: &Account) -> bool {
    let mut iter = conditions.iter();
    let first = match iter.next() {
        Some(condition) => condition,
        None => return true,
    };
    let mut acc = first.matches(account);
    for condition in iter {
        let matched = condition.matches(account);
        acc = match condition.logic {
            Logic::And => acc && matched,
            Logic::Or => acc || matched,
        };
    }
    acc
}
