use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use loan_fee_core::fee;
use loan_fee_core::LoanApplication;

use crate::input;

/// Arguments for a single fee quote
#[derive(Args)]
pub struct FeeArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Repayment term in months (12 or 24)
    #[arg(long)]
    pub term: Option<u32>,

    /// Loan amount
    #[arg(long)]
    pub amount: Option<Decimal>,
}

pub fn run_fee(args: FeeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let application: LoanApplication = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        LoanApplication::new(
            args.term.ok_or("--term is required (or provide --input)")?,
            args.amount
                .ok_or("--amount is required (or provide --input)")?,
        )
    };

    debug!(term = application.term, amount = %application.amount, "quoting fee");
    let result = fee::quote_fee(&application)?;
    Ok(serde_json::to_value(result)?)
}
