use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::fee::thresholds::table_for_period;
use crate::types::*;
use crate::FeeResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub amount: Money,
    pub fee: Money,
    pub total: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeScheduleOutput {
    pub term: LoanTerm,
    pub rows: Vec<ScheduleRow>,
}

/// List the knots of the threshold table for `term` months.
pub fn fee_schedule(term: u32) -> FeeResult<ComputationOutput<FeeScheduleOutput>> {
    let start = Instant::now();
    let table = table_for_period(term)?;

    let rows = table
        .knots()
        .iter()
        .map(|k| ScheduleRow {
            amount: k.amount,
            fee: k.fee,
            total: k.total(),
        })
        .collect();

    let output = FeeScheduleOutput {
        term: table.term,
        rows,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed threshold table",
        &serde_json::json!({ "term_months": term }),
        Vec::new(),
        elapsed,
        output,
    ))
}
