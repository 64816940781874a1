// 💵 Exact Money Amounts
// Two-decimal amounts held as base-10 fixed point, never as binary floats

use crate::error::{ReceiptError, ReceiptResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;

/// Number of fractional digits every amount must carry.
pub const AMOUNT_SCALE: u32 = 2;

/// A non-negative amount with exactly two fractional digits (`\d+\.\d{2}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Parse a money string, rejecting anything outside `^\d+\.\d{2}$`.
    ///
    /// Values whose digits do not fit exactly in a 96-bit decimal are rejected
    /// rather than rounded.
    pub fn parse(raw: &str) -> ReceiptResult<Self> {
        if !has_money_shape(raw) {
            return Err(ReceiptError::InvalidReceipt);
        }

        let value = Decimal::from_str_exact(raw).map_err(|_| ReceiptError::InvalidReceipt)?;
        if value.scale() != AMOUNT_SCALE {
            return Err(ReceiptError::InvalidReceipt);
        }

        Ok(Amount(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// True when the cents part is `.00`.
    pub fn is_round_dollar(&self) -> bool {
        self.0.fract().is_zero()
    }

    /// True when the amount divides evenly by `step`. A zero step never matches.
    pub fn is_multiple_of(&self, step: Decimal) -> bool {
        self.0
            .checked_rem(step)
            .map(|rem| rem.is_zero())
            .unwrap_or(false)
    }

    /// `ceil(amount * factor)` in exact decimal arithmetic.
    ///
    /// Saturates at `u64::MAX` when the product does not fit.
    pub fn ceil_fraction(&self, factor: Decimal) -> u64 {
        self.0
            .checked_mul(factor)
            .and_then(|product| product.ceil().to_u64())
            .unwrap_or(u64::MAX)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ASCII digits, a single dot, then exactly two digits.
fn has_money_shape(raw: &str) -> bool {
    match raw.split_once('.') {
        Some((whole, cents)) => {
            !whole.is_empty()
                && whole.bytes().all(|b| b.is_ascii_digit())
                && cents.len() == 2
                && cents.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

// ============================================================================
// TESTS
// ============================================================================
