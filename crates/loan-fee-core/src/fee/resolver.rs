use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::error;

use crate::error::FeeError;
use crate::types::Money;
use crate::FeeResult;

/// Every realizable total (amount + fee) is a multiple of this.
pub const TOTAL_MULTIPLE: Decimal = dec!(5);

/// Exact fixed-point divisibility test; no float modulo.
pub fn is_valid_total(total: Money) -> bool {
    (total % TOTAL_MULTIPLE).is_zero()
}

/// Find the multiple of 5 immediately above `custom_total`, scanning upward
/// from `lower_total` and never past `upper_total`.
///
/// `lower_total` and `upper_total` are the totals at the two knots bounding
/// `amount`. A `custom_total` outside them, or sitting exactly on a multiple
/// of 5, has no answer and is reported as [`FeeError::UnresolvedTotal`].
pub fn nearest_valid_total(
    amount: Money,
    lower_total: Money,
    upper_total: Money,
    custom_total: Money,
) -> FeeResult<Money> {
    let unresolved = || FeeError::UnresolvedTotal {
        amount,
        total: custom_total,
        lower_total,
        upper_total,
    };

    if custom_total < lower_total || custom_total > upper_total {
        error!(
            %amount, %custom_total, %lower_total, %upper_total,
            "interpolated total lies outside its bounding knot totals"
        );
        return Err(unresolved());
    }

    let mut candidate = (lower_total / TOTAL_MULTIPLE).ceil() * TOTAL_MULTIPLE;
    while candidate <= upper_total {
        if candidate - TOTAL_MULTIPLE < custom_total && custom_total < candidate {
            return Ok(candidate);
        }
        candidate += TOTAL_MULTIPLE;
    }

    error!(
        %amount, %custom_total, %lower_total, %upper_total,
        "no multiple of 5 resolves the interpolated total"
    );
    Err(unresolved())
}
