pub mod error;
pub mod types;

#[cfg(feature = "fee")]
pub mod fee;

#[cfg(feature = "schedule")]
pub mod schedule;

pub use error::{ErrorKind, FeeError};
pub use types::*;

/// Standard result type for all loan-fee operations
pub type FeeResult<T> = Result<T, FeeError>;
