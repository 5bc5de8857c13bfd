use loan_fee_core::fee;
use loan_fee_core::schedule::knots::fee_schedule;
use loan_fee_core::schedule::sweep::{fee_sweep, FeeSweepInput};
use loan_fee_core::{FeeError, LoanTerm};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

#[test]
fn test_schedule_matches_calculator() {
    for term in LoanTerm::ALL {
        let out = fee_schedule(term.months()).unwrap();
        assert_eq!(out.result.term, term);
        for row in &out.result.rows {
            assert_eq!(fee::calculate(term.months(), row.amount).unwrap(), row.fee);
            assert_eq!(row.total, row.amount + row.fee);
        }
    }
}

#[test]
fn test_twenty_four_month_schedule_serializes() {
    let out = fee_schedule(24).unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["result"]["term"], 24);
    assert_eq!(json["result"]["rows"][6]["fee"], "280");
    assert_eq!(json["assumptions"]["term_months"], 24);
}

#[test]
fn test_sweep_across_non_monotonic_span() {
    let input = FeeSweepInput {
        term: 12,
        min_amount: dec!(4000),
        max_amount: dec!(5000),
        step: dec!(200),
    };
    let out = fee_sweep(&input).unwrap();
    let amounts: Vec<_> = out.result.rows.iter().map(|r| r.amount).collect();
    assert_eq!(
        amounts,
        vec![dec!(4000), dec!(4200), dec!(4400), dec!(4600), dec!(4800), dec!(5000)]
    );
    let first = &out.result.rows[0];
    let last = &out.result.rows[5];
    assert_eq!(first.fee, dec!(115));
    assert_eq!(last.fee, dec!(100));
    assert_eq!(out.result.rows[3].fee, dec!(110));
    for row in &out.result.rows {
        assert!((row.total % dec!(5)).is_zero());
    }
}

#[test]
fn test_sweep_invalid_term() {
    let input = FeeSweepInput {
        term: 36,
        min_amount: dec!(1000),
        max_amount: dec!(2000),
        step: dec!(500),
    };
    assert!(matches!(
        fee_sweep(&input),
        Err(FeeError::InvalidPeriod { term: 36 })
    ));
}

#[test]
fn test_sweep_past_maximum() {
    let input = FeeSweepInput {
        term: 24,
        min_amount: dec!(19000),
        max_amount: dec!(21000),
        step: dec!(1000),
    };
    assert!(matches!(
        fee_sweep(&input),
        Err(FeeError::AmountTooHigh { .. })
    ));
}
