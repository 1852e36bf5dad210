//! Filter strategies that pick a subset of the ledger for highlighting.

use std::{fmt, str::FromStr};

use tracing::warn;

use crate::ledger::Transaction;

/// Selects the transactions matching a predicate, keeping their relative order.
///
/// Implementations must be pure: the input is never modified and the same input
/// always yields the same output.
pub trait TransactionFilter: fmt::Debug {
    fn filter(&self, transactions: &[Transaction]) -> Vec<Transaction>;
}

/// Matches transactions whose amount equals `target` exactly.
///
/// This is a plain `f64` equality check, so `0.1 + 0.2` will not match `0.3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountFilter {
    target: f64,
}

impl AmountFilter {
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    pub fn target(&self) -> f64 {
        self.target
    }
}

impl TransactionFilter for AmountFilter {
    fn filter(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|txn| txn.amount() == self.target)
            .cloned()
            .collect()
    }
}

/// Matches transactions whose category equals `target` (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    target: String,
}

impl CategoryFilter {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl TransactionFilter for CategoryFilter {
    fn filter(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|txn| txn.category() == self.target)
            .cloned()
            .collect()
    }
}

/// The strategy a user picked before supplying its parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSelection {
    Amount,
    Category,
}

impl FilterSelection {
    /// Builds the strategy for `parameter`.
    ///
    /// Amount input that does not parse as a number becomes `0.0`. Stored
    /// amounts are always positive, so such a filter matches nothing.
    pub fn build(self, parameter: &str) -> Box<dyn TransactionFilter> {
        match self {
            FilterSelection::Amount => Box::new(AmountFilter::new(parse_amount_filter(parameter))),
            FilterSelection::Category => Box::new(CategoryFilter::new(parameter.trim())),
        }
    }
}

impl FromStr for FilterSelection {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "amount" => Ok(FilterSelection::Amount),
            "category" => Ok(FilterSelection::Category),
            other => Err(format!("unknown filter `{other}` (expected `amount` or `category`)")),
        }
    }
}

fn parse_amount_filter(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) => value,
        Err(err) => {
            warn!(input = raw, %err, "amount filter input is not a number; using 0");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(50.0, "food"),
            Transaction::new(20.0, "transport"),
            Transaction::new(50.0, "bills"),
            Transaction::new(7.25, "food"),
        ]
    }

    #[test]
    fn amount_filter_keeps_exact_matches_in_order() {
        let transactions = sample();
        let matched = AmountFilter::new(50.0).filter(&transactions);
        assert_eq!(matched, vec![transactions[0].clone(), transactions[2].clone()]);
    }

    #[test]
    fn amount_filter_uses_exact_float_equality() {
        let transactions = vec![Transaction::new(0.1 + 0.2, "food")];
        assert!(AmountFilter::new(0.3).filter(&transactions).is_empty());
    }

    #[test]
    fn category_filter_is_case_sensitive() {
        let transactions = sample();
        let matched = CategoryFilter::new("food").filter(&transactions);
        assert_eq!(matched, vec![transactions[0].clone(), transactions[3].clone()]);
        assert!(CategoryFilter::new("Food").filter(&transactions).is_empty());
    }

    #[test]
    fn filters_leave_input_untouched() {
        let transactions = sample();
        let before = transactions.clone();
        let _ = CategoryFilter::new("bills").filter(&transactions);
        assert_eq!(transactions, before);
    }

    #[test]
    fn selection_builds_matching_strategy() {
        let transactions = sample();
        let amount = FilterSelection::Amount.build(" 20 ");
        assert_eq!(amount.filter(&transactions), vec![transactions[1].clone()]);

        let category = FilterSelection::Category.build("bills");
        assert_eq!(category.filter(&transactions), vec![transactions[2].clone()]);
    }

    #[test]
    fn unparseable_amount_falls_back_to_zero() {
        assert_eq!(parse_amount_filter("twelve"), 0.0);
        assert_eq!(parse_amount_filter(""), 0.0);
        let filter = FilterSelection::Amount.build("abc");
        assert!(filter.filter(&sample()).is_empty());
    }

    #[test]
    fn selection_parses_names() {
        assert_eq!("Amount".parse::<FilterSelection>(), Ok(FilterSelection::Amount));
        assert_eq!("category".parse::<FilterSelection>(), Ok(FilterSelection::Category));
        assert!("date".parse::<FilterSelection>().is_err());
    }
}
