//! Fee calculation from the fixed 12- and 24-month knot tables.
//!
//! Validation, then table selection, then interpolation between the two
//! knots bracketing the amount, with a fallback search that moves the total
//! (amount + fee) onto a multiple of 5.

pub mod calculator;
pub mod interpolation;
pub mod resolver;
pub mod thresholds;
pub mod validation;

pub use calculator::{
    calculate, quote_fee, round_fee, FeeCalculator, FeeQuote, StandardFeeCalculator,
};
pub use interpolation::FeeMethod;
pub use thresholds::{Knot, ThresholdTable};
pub use validation::{MAXIMUM_LOAN_AMOUNT, MINIMUM_LOAN_AMOUNT};
