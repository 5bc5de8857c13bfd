use napi::Result as NapiResult;
use napi_derive::napi;

use loan_fee_core::fee;
use loan_fee_core::schedule::{knots, sweep};
use loan_fee_core::LoanApplication;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Fees
// ---------------------------------------------------------------------------

/// Quote a fee from `{"term": 12, "amount": "3525"}`.
#[napi]
pub fn calculate_fee(input_json: String) -> NapiResult<String> {
    let input: LoanApplication = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fee::quote_fee(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Schedules
// ---------------------------------------------------------------------------

#[napi]
pub fn fee_schedule(term: u32) -> NapiResult<String> {
    let output = knots::fee_schedule(term).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn fee_sweep(input_json: String) -> NapiResult<String> {
    let input: sweep::FeeSweepInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = sweep::fee_sweep(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
