//! Filter operators for advanced conditions.
//!
//! Multi-value semantics differ by operator: most operators accept a
//! record when *any* operand passes, while [`FilterOp::NotContains`]
//! means "contains none of these" and requires *every* operand to be
//! absent.

use std::fmt;

/// Comparison operator for an advanced filter condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOp {
    /// Exact match, case-insensitive.
    Is,
    /// Substring containment, case-insensitive.
    Contains,
    /// Substring absence; with multiple operands, all must be absent.
    NotContains,
    /// Prefix match, case-insensitive.
    StartsWith,
    /// Greater than, after numeric coercion of both sides.
    Gt,
    /// Less than.
    Lt,
    /// Greater than or equal.
    Gte,
    /// Less than or equal.
    Lte,
    /// Lexically earlier date string.
    Before,
    /// Lexically later date string.
    After,
}

impl FilterOp {
    /// Returns `true` if a multi-value condition passes when any single
    /// operand passes. `NotContains` is the one inversion: it requires
    /// every operand test to pass (each substring absent).
    pub fn any_operand(self) -> bool {
        !matches!(self, FilterOp::NotContains)
    }

    /// Returns `true` if this operator compares numerically.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            FilterOp::Gt | FilterOp::Lt | FilterOp::Gte | FilterOp::Lte
        )
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterOp::Is => "is",
            FilterOp::Contains => "contains",
            FilterOp::NotContains => "does-not-contain",
            FilterOp::StartsWith => "starts-with",
            FilterOp::Gt => ">",
            FilterOp::Lt => "<",
            FilterOp::Gte => ">=",
            FilterOp::Lte => "<=",
            FilterOp::Before => "before",
            FilterOp::After => "after",
        }
    }

    /// Parses an operator name as produced by [`FilterOp::as_str`].
    pub fn parse(s: &str) -> Option<FilterOp> {
        match s.trim().to_lowercase().as_str() {
            "is" => Some(FilterOp::Is),
            "contains" => Some(FilterOp::Contains),
            "does-not-contain" | "not-contains" => Some(FilterOp::NotContains),
            "starts-with" | "startswith" => Some(FilterOp::StartsWith),
            ">" | "gt" => Some(FilterOp::Gt),
            "<" | "lt" => Some(FilterOp::Lt),
            ">=" | "gte" => Some(FilterOp::Gte),
            "<=" | "lte" => Some(FilterOp::Lte),
            "before" => Some(FilterOp::Before),
            "after" => Some(FilterOp::After),
            _ => None,
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
