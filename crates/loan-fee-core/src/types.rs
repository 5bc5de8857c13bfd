use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FeeError;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Repayment term of a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LoanTerm {
    TwelveMonths,
    TwentyFourMonths,
}

impl LoanTerm {
    pub const ALL: [LoanTerm; 2] = [LoanTerm::TwelveMonths, LoanTerm::TwentyFourMonths];

    pub fn months(self) -> u32 {
        match self {
            Self::TwelveMonths => 12,
            Self::TwentyFourMonths => 24,
        }
    }
}

impl TryFrom<u32> for LoanTerm {
    type Error = FeeError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        match months {
            12 => Ok(Self::TwelveMonths),
            24 => Ok(Self::TwentyFourMonths),
            term => Err(FeeError::InvalidPeriod { term }),
        }
    }
}

impl From<LoanTerm> for u32 {
    fn from(term: LoanTerm) -> Self {
        term.months()
    }
}

impl std::fmt::Display for LoanTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} months", self.months())
    }
}

/// A loan application as submitted by the caller.
///
/// The term is kept as raw months so that an unsupported term can still be
/// carried to the calculator and reported in validation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub term: u32,
    pub amount: Money,
}

impl LoanApplication {
    pub fn new(term: u32, amount: Money) -> Self {
        Self { term, amount }
    }

    pub fn term(&self) -> u32 {
        self.term
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
