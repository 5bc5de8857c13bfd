use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FeeError;
use crate::fee::calculator::calculate;
use crate::fee::validation::validate_amount;
use crate::types::*;
use crate::FeeResult;

const MAX_SWEEP_ROWS: usize = 10_000;

/// Amount range to price for a single term
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeSweepInput {
    pub term: u32,
    pub min_amount: Money,
    pub max_amount: Money,
    pub step: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepRow {
    pub amount: Money,
    pub fee: Money,
    pub total: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeSweepOutput {
    pub term: u32,
    pub rows: Vec<SweepRow>,
}

/// Amounts from min to max by step. The max is always included.
fn sweep_amounts(input: &FeeSweepInput) -> FeeResult<Vec<Money>> {
    if input.step <= Decimal::ZERO {
        return Err(FeeError::InvalidInput {
            field: "step".into(),
            reason: "Step must be positive".into(),
        });
    }
    if input.min_amount > input.max_amount {
        return Err(FeeError::InvalidInput {
            field: "min_amount".into(),
            reason: "Min must be <= max".into(),
        });
    }

    // Both ends must be quotable; this also keeps the arithmetic below in range.
    validate_amount(input.min_amount)?;
    validate_amount(input.max_amount)?;

    let span = input
        .max_amount
        .checked_sub(input.min_amount)
        .and_then(|width| width.checked_div(input.step));
    if span.map_or(true, |s| s >= Decimal::from(MAX_SWEEP_ROWS)) {
        return Err(FeeError::InvalidInput {
            field: "step".into(),
            reason: format!("Sweep would exceed {MAX_SWEEP_ROWS} rows"),
        });
    }

    let mut values = Vec::new();
    let mut current = Some(input.min_amount);
    while let Some(amount) = current.filter(|a| *a <= input.max_amount) {
        values.push(amount);
        current = amount.checked_add(input.step);
    }
    if let Some(&last) = values.last() {
        if last < input.max_amount {
            values.push(input.max_amount);
        }
    }

    Ok(values)
}

/// Price every amount in the sweep range. Any failing amount fails the sweep.
pub fn fee_sweep(input: &FeeSweepInput) -> FeeResult<ComputationOutput<FeeSweepOutput>> {
    let start = Instant::now();

    let rows = sweep_amounts(input)?
        .into_iter()
        .map(|amount| -> FeeResult<SweepRow> {
            let fee = calculate(input.term, amount)?;
            Ok(SweepRow {
                amount,
                fee,
                total: amount + fee,
            })
        })
        .collect::<FeeResult<Vec<_>>>()?;

    let output = FeeSweepOutput {
        term: input.term,
        rows,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fee sweep over an amount range",
        input,
        Vec::new(),
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(min: Decimal, max: Decimal, step: Decimal) -> FeeSweepInput {
        FeeSweepInput {
            term: 12,
            min_amount: min,
            max_amount: max,
            step,
        }
    }

    #[test]
    fn test_sweep_includes_max() {
        let amounts = sweep_amounts(&input(dec!(1000), dec!(2100), dec!(500))).unwrap();
        assert_eq!(amounts, vec![dec!(1000), dec!(1500), dec!(2000), dec!(2100)]);
    }

    #[test]
    fn test_sweep_single_point() {
        let amounts = sweep_amounts(&input(dec!(5000), dec!(5000), dec!(250))).unwrap();
        assert_eq!(amounts, vec![dec!(5000)]);
    }

    #[test]
    fn test_sweep_rejects_bad_step() {
        assert!(matches!(
            sweep_amounts(&input(dec!(1000), dec!(2000), dec!(0))),
            Err(FeeError::InvalidInput { .. })
        ));
        assert!(matches!(
            sweep_amounts(&input(dec!(1000), dec!(20000), dec!(0.5))),
            Err(FeeError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_sweep_rejects_inverted_range() {
        assert!(matches!(
            sweep_amounts(&input(dec!(3000), dec!(2000), dec!(100))),
            Err(FeeError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_sweep_rejects_step_too_small_to_count() {
        let tiny = Decimal::new(1, 28);
        let err = fee_sweep(&input(dec!(1000), dec!(20000), tiny)).unwrap_err();
        assert!(matches!(err, FeeError::InvalidInput { ref field, .. } if field == "step"));
    }

    #[test]
    fn test_sweep_rejects_amounts_at_decimal_max() {
        let err = fee_sweep(&input(Decimal::MAX, Decimal::MAX, dec!(1))).unwrap_err();
        assert!(matches!(err, FeeError::AmountTooHigh { .. }));
    }

    #[test]
    fn test_sweep_rejects_full_decimal_range() {
        let err = fee_sweep(&input(Decimal::MIN, Decimal::MAX, dec!(1))).unwrap_err();
        assert!(matches!(err, FeeError::AmountTooLow { .. }));
    }

    #[test]
    fn test_sweep_bounds_checked_before_row_cap() {
        let err = fee_sweep(&input(dec!(1000), dec!(25000), dec!(0.01))).unwrap_err();
        assert!(matches!(err, FeeError::AmountTooHigh { .. }));
    }

    #[test]
    fn test_sweep_fees() {
        let out = fee_sweep(&input(dec!(3000), dec!(5000), dec!(1000))).unwrap();
        let fees: Vec<_> = out.result.rows.iter().map(|r| r.fee).collect();
        assert_eq!(fees, vec![dec!(90), dec!(115), dec!(100)]);
    }

    #[test]
    fn test_sweep_propagates_validation_error() {
        let err = fee_sweep(&input(dec!(500), dec!(1500), dec!(500))).unwrap_err();
        assert!(matches!(err, FeeError::AmountTooLow { .. }));
    }
}
