use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Broad class of a [`FeeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The caller supplied an amount, term or parameter outside what is accepted.
    Validation,
    /// The knot tables or the resolver are inconsistent. Always a defect.
    Internal,
}

#[derive(Debug, Error)]
pub enum FeeError {
    #[error("The loan amount is too low: {amount} (minimum {minimum})")]
    AmountTooLow { amount: Decimal, minimum: Decimal },

    #[error("The loan amount is too high: {amount} (maximum {maximum})")]
    AmountTooHigh { amount: Decimal, maximum: Decimal },

    #[error("Invalid loan period provided: {term} months (supported: 12, 24)")]
    InvalidPeriod { term: u32 },

    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error(
        "Unresolved total for amount {amount}: interpolated total {total} has no valid \
         multiple of 5 within [{lower_total}, {upper_total}]"
    )]
    UnresolvedTotal {
        amount: Decimal,
        total: Decimal,
        lower_total: Decimal,
        upper_total: Decimal,
    },

    #[error("Missing knot {amount} in the {term}-month threshold table")]
    MissingKnot { term: u32, amount: Decimal },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl FeeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FeeError::UnresolvedTotal { .. } | FeeError::MissingKnot { .. } => ErrorKind::Internal,
            _ => ErrorKind::Validation,
        }
    }

    /// True when the error signals a programming defect rather than bad input.
    pub fn is_internal(&self) -> bool {
        self.kind() == ErrorKind::Internal
    }
}

impl From<serde_json::Error> for FeeError {
    fn from(e: serde_json::Error) -> Self {
        FeeError::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validation_errors_are_not_internal() {
        let errs = [
            FeeError::AmountTooLow {
                amount: dec!(999),
                minimum: dec!(1000),
            },
            FeeError::AmountTooHigh {
                amount: dec!(20001),
                maximum: dec!(20000),
            },
            FeeError::InvalidPeriod { term: 18 },
        ];
        for e in &errs {
            assert_eq!(e.kind(), ErrorKind::Validation);
            assert!(!e.is_internal());
        }
    }

    #[test]
    fn test_unresolved_total_is_internal() {
        let e = FeeError::UnresolvedTotal {
            amount: dec!(1500),
            total: dec!(1570),
            lower_total: dec!(1050),
            upper_total: dec!(2090),
        };
        assert!(e.is_internal());
        assert!(FeeError::MissingKnot {
            term: 12,
            amount: dec!(21000)
        }
        .is_internal());
    }

    #[test]
    fn test_messages() {
        let low = FeeError::AmountTooLow {
            amount: dec!(999),
            minimum: dec!(1000),
        };
        assert!(low.to_string().starts_with("The loan amount is too low"));
        let period = FeeError::InvalidPeriod { term: 18 };
        assert!(period.to_string().contains("18 months"));
    }
}
