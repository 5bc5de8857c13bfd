use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::interpolation::{derive_fee, FeeDerivation, FeeMethod};
use super::thresholds::{table_for_period, Knot};
use super::validation::{validate_amount, MAXIMUM_LOAN_AMOUNT, MINIMUM_LOAN_AMOUNT};
use crate::types::*;
use crate::FeeResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeQuote {
    pub term: LoanTerm,
    pub amount: Money,
    /// Final fee, rounded to 2 dp half-up.
    pub fee: Money,
    /// Amount plus fee.
    pub total: Money,
    pub method: FeeMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_knot: Option<Knot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_knot: Option<Knot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolated_fee: Option<Money>,
}

/// Anything that can price a loan application.
pub trait FeeCalculator {
    fn calculate(&self, application: &LoanApplication) -> FeeResult<Money>;
}

/// Calculator backed by the fixed 12- and 24-month threshold tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFeeCalculator;

impl FeeCalculator for StandardFeeCalculator {
    fn calculate(&self, application: &LoanApplication) -> FeeResult<Money> {
        calculate(application.term(), application.amount())
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Round a fee to whole pence, halves rounded up.
pub fn round_fee(fee: Money) -> Money {
    fee.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Fee for a loan of `amount` repaid over `term` months.
///
/// Checks run in a fixed order: amount too low, amount too high, then the
/// term. Internal failures ([`FeeError::UnresolvedTotal`](crate::FeeError))
/// are returned as errors, never replaced by a default fee.
pub fn calculate(term: u32, amount: Money) -> FeeResult<Money> {
    let (_, derivation) = derive(term, amount)?;
    Ok(round_fee(derivation.fee))
}

/// Fee for an application, with the breakdown of how it was reached.
pub fn quote_fee(application: &LoanApplication) -> FeeResult<ComputationOutput<FeeQuote>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let amount = application.amount();
    let (term, derivation) = derive(application.term(), amount)?;

    if amount.normalize().scale() > 2 {
        warnings.push(format!(
            "Amount {amount} has more than 2 decimal places; after rounding the fee, \
             amount plus fee may not land on a multiple of 5"
        ));
    }

    let fee = round_fee(derivation.fee);
    let quote = FeeQuote {
        term,
        amount,
        fee,
        total: amount + fee,
        method: derivation.method,
        lower_knot: derivation.lower_knot,
        upper_knot: derivation.upper_knot,
        interpolated_fee: derivation.interpolated_fee,
    };

    let assumptions = serde_json::json!({
        "minimum_amount": MINIMUM_LOAN_AMOUNT.to_string(),
        "maximum_amount": MAXIMUM_LOAN_AMOUNT.to_string(),
        "total_multiple": super::resolver::TOTAL_MULTIPLE.to_string(),
        "rounding": "2dp, half up",
    });

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Knot-table linear interpolation with totals snapped to multiples of 5",
        &assumptions,
        warnings,
        elapsed,
        quote,
    ))
}

fn derive(term: u32, amount: Money) -> FeeResult<(LoanTerm, FeeDerivation)> {
    validate_amount(amount)?;
    let table = table_for_period(term)?;
    let derivation = derive_fee(table, amount)?;
    Ok((table.term, derivation))
}
