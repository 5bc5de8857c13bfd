use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FeeError;
use crate::types::{LoanTerm, Money};
use crate::FeeResult;

/// Distance between two adjacent knots.
pub const KNOT_SPACING: Decimal = dec!(1000);

/// Number of knots in every table.
pub const KNOT_COUNT: usize = 20;

/// A table entry pairing a loan amount with its authoritative fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Knot {
    pub amount: Money,
    pub fee: Money,
}

impl Knot {
    const fn new(amount: Money, fee: Money) -> Self {
        Self { amount, fee }
    }

    /// Amount plus fee at this knot.
    pub fn total(&self) -> Money {
        self.amount + self.fee
    }
}

/// Fixed fee schedule for one loan term, ordered by ascending amount.
#[derive(Debug)]
pub struct ThresholdTable {
    pub term: LoanTerm,
    knots: [Knot; KNOT_COUNT],
}

// Fees are not monotonic in amount (see 3000 -> 4000 -> 5000).
static TWELVE_MONTH_THRESHOLDS: ThresholdTable = ThresholdTable {
    term: LoanTerm::TwelveMonths,
    knots: [
        Knot::new(dec!(1000), dec!(50)),
        Knot::new(dec!(2000), dec!(90)),
        Knot::new(dec!(3000), dec!(90)),
        Knot::new(dec!(4000), dec!(115)),
        Knot::new(dec!(5000), dec!(100)),
        Knot::new(dec!(6000), dec!(120)),
        Knot::new(dec!(7000), dec!(140)),
        Knot::new(dec!(8000), dec!(160)),
        Knot::new(dec!(9000), dec!(180)),
        Knot::new(dec!(10000), dec!(200)),
        Knot::new(dec!(11000), dec!(220)),
        Knot::new(dec!(12000), dec!(240)),
        Knot::new(dec!(13000), dec!(260)),
        Knot::new(dec!(14000), dec!(280)),
        Knot::new(dec!(15000), dec!(300)),
        Knot::new(dec!(16000), dec!(320)),
        Knot::new(dec!(17000), dec!(340)),
        Knot::new(dec!(18000), dec!(360)),
        Knot::new(dec!(19000), dec!(380)),
        Knot::new(dec!(20000), dec!(400)),
    ],
};

static TWENTY_FOUR_MONTH_THRESHOLDS: ThresholdTable = ThresholdTable {
    term: LoanTerm::TwentyFourMonths,
    knots: [
        Knot::new(dec!(1000), dec!(70)),
        Knot::new(dec!(2000), dec!(100)),
        Knot::new(dec!(3000), dec!(120)),
        Knot::new(dec!(4000), dec!(160)),
        Knot::new(dec!(5000), dec!(200)),
        Knot::new(dec!(6000), dec!(240)),
        Knot::new(dec!(7000), dec!(280)),
        Knot::new(dec!(8000), dec!(320)),
        Knot::new(dec!(9000), dec!(360)),
        Knot::new(dec!(10000), dec!(400)),
        Knot::new(dec!(11000), dec!(440)),
        Knot::new(dec!(12000), dec!(480)),
        Knot::new(dec!(13000), dec!(520)),
        Knot::new(dec!(14000), dec!(560)),
        Knot::new(dec!(15000), dec!(600)),
        Knot::new(dec!(16000), dec!(640)),
        Knot::new(dec!(17000), dec!(680)),
        Knot::new(dec!(18000), dec!(720)),
        Knot::new(dec!(19000), dec!(760)),
        Knot::new(dec!(20000), dec!(800)),
    ],
};

impl ThresholdTable {
    pub fn for_term(term: LoanTerm) -> &'static ThresholdTable {
        match term {
            LoanTerm::TwelveMonths => &TWELVE_MONTH_THRESHOLDS,
            LoanTerm::TwentyFourMonths => &TWENTY_FOUR_MONTH_THRESHOLDS,
        }
    }

    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    /// Knot whose amount equals `amount` exactly, by decimal value
    /// (so `1000` and `1000.00` find the same knot).
    pub fn knot_at(&self, amount: Money) -> Option<&Knot> {
        self.knots.iter().find(|k| k.amount == amount)
    }

    /// Like [`knot_at`](Self::knot_at), but a miss is an internal defect.
    pub fn require_knot(&self, amount: Money) -> FeeResult<&Knot> {
        self.knot_at(amount).ok_or(FeeError::MissingKnot {
            term: self.term.months(),
            amount,
        })
    }
}

/// Select the threshold table for a term given in months.
///
/// This is the only place a term is validated.
pub fn table_for_period(term: u32) -> FeeResult<&'static ThresholdTable> {
    let term = LoanTerm::try_from(term)?;
    Ok(ThresholdTable::for_term(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_have_twenty_evenly_spaced_knots() {
        for term in LoanTerm::ALL {
            let table = ThresholdTable::for_term(term);
            assert_eq!(table.term, term);
            assert_eq!(table.knots().len(), KNOT_COUNT);
            for (i, knot) in table.knots().iter().enumerate() {
                let expected = KNOT_SPACING * Decimal::from(i as u64 + 1);
                assert_eq!(knot.amount, expected);
                assert!(knot.fee >= Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_knot_totals_strictly_increase() {
        // The resolver scans [lower total, upper total] ascending.
        for term in LoanTerm::ALL {
            let knots = ThresholdTable::for_term(term).knots();
            for pair in knots.windows(2) {
                assert!(pair[0].total() < pair[1].total());
            }
        }
    }

    #[test]
    fn test_knot_lookup_ignores_scale() {
        let table = ThresholdTable::for_term(LoanTerm::TwelveMonths);
        assert_eq!(table.knot_at(dec!(4000.00)).unwrap().fee, dec!(115));
        assert!(table.knot_at(dec!(4000.01)).is_none());
    }

    #[test]
    fn test_require_knot_missing() {
        let table = ThresholdTable::for_term(LoanTerm::TwentyFourMonths);
        let err = table.require_knot(dec!(21000)).unwrap_err();
        assert!(matches!(err, FeeError::MissingKnot { term: 24, .. }));
    }

    #[test]
    fn test_table_for_period() {
        assert_eq!(table_for_period(12).unwrap().term, LoanTerm::TwelveMonths);
        assert_eq!(
            table_for_period(24).unwrap().term,
            LoanTerm::TwentyFourMonths
        );
        for bad in [0, 6, 18, 36] {
            assert!(matches!(
                table_for_period(bad),
                Err(FeeError::InvalidPeriod { term }) if term == bad
            ));
        }
    }
}
