//! Input checks applied before a transaction is created.

use tracing::warn;

use crate::errors::ValidationError;
use crate::ledger::CategoryPolicy;

pub fn validate_amount(amount: f64) -> Result<(), ValidationError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidAmount(amount))
    }
}

pub fn validate_category(policy: &CategoryPolicy, category: &str) -> Result<(), ValidationError> {
    if policy.allows(category) {
        Ok(())
    } else {
        Err(ValidationError::UnknownCategory(category.to_string()))
    }
}

/// Reads a raw amount field. Empty or non-numeric text reads as `0.0`, which
/// [`validate_amount`] rejects.
pub fn parse_amount_input(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or_else(|err| {
        warn!(input = raw, %err, "amount input is not a number");
        0.0
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_must_be_positive_and_finite() {
        assert!(validate_amount(0.01).is_ok());
        assert!(validate_amount(1_000_000.0).is_ok());
        assert_eq!(validate_amount(0.0), Err(ValidationError::InvalidAmount(0.0)));
        assert!(validate_amount(-3.0).is_err());
        assert!(validate_amount(f64::INFINITY).is_err());
        assert!(validate_amount(f64::NAN).is_err());
    }

    #[test]
    fn category_must_be_allowed() {
        let policy = CategoryPolicy::default();
        assert!(validate_category(&policy, "entertainment").is_ok());
        assert_eq!(
            validate_category(&policy, "gadgets"),
            Err(ValidationError::UnknownCategory("gadgets".into()))
        );
        assert!(validate_category(&policy, "").is_err());
    }

    #[test]
    fn amount_input_defaults_to_zero() {
        assert_eq!(parse_amount_input(""), 0.0);
        assert_eq!(parse_amount_input("   "), 0.0);
        assert_eq!(parse_amount_input("4,50"), 0.0);
        assert_eq!(parse_amount_input(" 12.75 "), 12.75);
    }
}
