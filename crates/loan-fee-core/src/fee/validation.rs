use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::FeeError;
use crate::types::Money;
use crate::FeeResult;

pub const MINIMUM_LOAN_AMOUNT: Decimal = dec!(1000);
pub const MAXIMUM_LOAN_AMOUNT: Decimal = dec!(20000);

/// Reject amounts outside `[MINIMUM_LOAN_AMOUNT, MAXIMUM_LOAN_AMOUNT]`.
///
/// The term is not checked here; it is validated when its table is selected,
/// which always happens after this check.
pub fn validate_amount(amount: Money) -> FeeResult<()> {
    if amount < MINIMUM_LOAN_AMOUNT {
        return Err(FeeError::AmountTooLow {
            amount,
            minimum: MINIMUM_LOAN_AMOUNT,
        });
    }
    if amount > MAXIMUM_LOAN_AMOUNT {
        return Err(FeeError::AmountTooHigh {
            amount,
            maximum: MAXIMUM_LOAN_AMOUNT,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(validate_amount(dec!(1000)).is_ok());
        assert!(validate_amount(dec!(20000)).is_ok());
        assert!(validate_amount(dec!(10500.25)).is_ok());
    }

    #[test]
    fn test_too_low() {
        for amount in [dec!(999.99), dec!(999), dec!(0), dec!(-5000)] {
            assert!(matches!(
                validate_amount(amount),
                Err(FeeError::AmountTooLow { .. })
            ));
        }
    }

    #[test]
    fn test_too_high() {
        for amount in [dec!(20000.01), dec!(20001), dec!(1000000)] {
            assert!(matches!(
                validate_amount(amount),
                Err(FeeError::AmountTooHigh { .. })
            ));
        }
    }
}
