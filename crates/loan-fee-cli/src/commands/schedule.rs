use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_fee_core::schedule::knots;
use loan_fee_core::schedule::sweep::{self, FeeSweepInput};

use crate::input;

/// Arguments for listing a fee table
#[derive(Args)]
pub struct ScheduleArgs {
    /// Repayment term in months (12 or 24)
    #[arg(long)]
    pub term: u32,
}

/// Arguments for a fee sweep
#[derive(Args)]
pub struct SweepArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Repayment term in months (12 or 24)
    #[arg(long)]
    pub term: Option<u32>,

    /// Range to sweep in format min:max:step (e.g. "1000:5000:250")
    #[arg(long)]
    pub range: Option<String>,
}

fn parse_range(range: &str) -> Result<(Decimal, Decimal, Decimal), Box<dyn std::error::Error>> {
    let parts: Vec<&str> = range.split(':').collect();
    if parts.len() != 3 {
        return Err(format!("Range must be min:max:step, got '{}'", range).into());
    }
    Ok((parts[0].parse()?, parts[1].parse()?, parts[2].parse()?))
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let result = knots::fee_schedule(args.term)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_sweep(args: SweepArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sweep_input: FeeSweepInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        let term = args.term.ok_or("--term is required (or provide --input)")?;
        let range = args
            .range
            .as_deref()
            .ok_or("--range is required (or provide --input)")?;
        let (min_amount, max_amount, step) = parse_range(range)?;
        FeeSweepInput {
            term,
            min_amount,
            max_amount,
            step,
        }
    };

    let result = sweep::fee_sweep(&sweep_input)?;
    Ok(serde_json::to_value(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        let (min, max, step) = parse_range("1000:5000:250").unwrap();
        assert_eq!(min, Decimal::from(1000));
        assert_eq!(max, Decimal::from(5000));
        assert_eq!(step, Decimal::from(250));
    }

    #[test]
    fn test_parse_range_rejects_malformed_range() {
        assert!(parse_range("1000:5000").is_err());
        assert!(parse_range("a:b:c").is_err());
    }
}
