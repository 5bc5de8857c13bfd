use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::resolver::{is_valid_total, nearest_valid_total};
use super::thresholds::{Knot, ThresholdTable, KNOT_SPACING};
use crate::types::Money;
use crate::FeeResult;

const HALF_KNOT_SPACING: Decimal = dec!(500);

/// Which rule produced a fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeeMethod {
    /// The amount is a knot; its fee is used as is.
    ExactKnot,
    /// Both bounding knots carry the same fee.
    EqualFeeSpan,
    /// Linear interpolation already gave a total divisible by 5.
    Interpolated,
    /// The interpolated total was moved up to the next multiple of 5.
    ResolvedTotal,
}

impl std::fmt::Display for FeeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExactKnot => write!(f, "Exact knot"),
            Self::EqualFeeSpan => write!(f, "Equal-fee span"),
            Self::Interpolated => write!(f, "Linear interpolation"),
            Self::ResolvedTotal => write!(f, "Resolved to nearest valid total"),
        }
    }
}

/// Unrounded fee together with how it was derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeDerivation {
    pub method: FeeMethod,
    pub fee: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_knot: Option<Knot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_knot: Option<Knot>,
    /// Straight-line fee before any total resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolated_fee: Option<Money>,
}

/// Round to the nearest knot amount, halves away from zero.
fn round_to_knot(value: Money) -> Money {
    (value / KNOT_SPACING).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        * KNOT_SPACING
}

/// Amounts of the two knots bracketing `amount`.
///
/// An amount exactly halfway between knots (e.g. 1500) brackets to the knot
/// below and the knot above, never to itself.
pub fn bounding_amounts(amount: Money) -> (Money, Money) {
    (
        round_to_knot(amount - HALF_KNOT_SPACING),
        round_to_knot(amount + HALF_KNOT_SPACING),
    )
}

/// Derive the fee for an already validated amount from a table.
pub fn derive_fee(table: &ThresholdTable, amount: Money) -> FeeResult<FeeDerivation> {
    if let Some(knot) = table.knot_at(amount) {
        debug!(term = %table.term, %amount, fee = %knot.fee, "amount is a knot");
        return Ok(FeeDerivation {
            method: FeeMethod::ExactKnot,
            fee: knot.fee,
            lower_knot: None,
            upper_knot: None,
            interpolated_fee: None,
        });
    }

    let (lower_amount, upper_amount) = bounding_amounts(amount);
    let lower = *table.require_knot(lower_amount)?;
    let upper = *table.require_knot(upper_amount)?;

    // Tables are not monotonic, so equal neighbours are a real case.
    if lower.fee == upper.fee {
        debug!(term = %table.term, %amount, fee = %lower.fee, "equal fees on both knots");
        return Ok(FeeDerivation {
            method: FeeMethod::EqualFeeSpan,
            fee: lower.fee,
            lower_knot: Some(lower),
            upper_knot: Some(upper),
            interpolated_fee: None,
        });
    }

    let rate = (upper.fee - lower.fee) / (upper.amount - lower.amount);
    let interpolated = rate * (amount - lower.amount) + lower.fee;
    let total = amount + interpolated;

    if is_valid_total(total) {
        debug!(term = %table.term, %amount, fee = %interpolated, "interpolated total is valid");
        return Ok(FeeDerivation {
            method: FeeMethod::Interpolated,
            fee: interpolated,
            lower_knot: Some(lower),
            upper_knot: Some(upper),
            interpolated_fee: Some(interpolated),
        });
    }

    let valid_total = nearest_valid_total(amount, lower.total(), upper.total(), total)?;
    let fee = valid_total - amount;
    debug!(
        term = %table.term, %amount, %total, %valid_total, %fee,
        "resolved interpolated total"
    );

    Ok(FeeDerivation {
        method: FeeMethod::ResolvedTotal,
        fee,
        lower_knot: Some(lower),
        upper_knot: Some(upper),
        interpolated_fee: Some(interpolated),
    })
}
