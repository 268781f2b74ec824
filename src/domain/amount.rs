use std::fmt;
use std::ops::{Add, Sub};

use super::error::DomainError;

/// Trait for the monetary type carried by wallets and wager operations.
///
/// Implementations are plain value types with fixed precision. Arithmetic
/// used for balance transitions goes through the checked methods so range
/// errors surface as domain errors instead of wrapping.
pub trait Amount:
    Copy + Ord + Add<Output = Self> + Sub<Output = Self> + Default + Send + Sync + fmt::Debug + 'static
{
    /// Parse from a decimal string (e.g., "1000" or "2.5000").
    fn from_decimal_str(s: &str) -> Result<Self, DomainError>;

    /// Format as a decimal string with full precision.
    fn to_decimal_string(&self) -> String;

    /// Checked addition, returns None on overflow.
    fn checked_add(&self, other: Self) -> Option<Self>;

    /// Checked subtraction, returns None on underflow.
    fn checked_sub(&self, other: Self) -> Option<Self>;

    /// Zero value.
    fn zero() -> Self;

    /// Whether the amount is strictly greater than zero. Wager operations
    /// only accept positive amounts.
    fn is_positive(&self) -> bool {
        *self > Self::zero()
    }
}

/// Fixed-point decimal stored as an i64 scaled by 10,000.
/// Represents amounts with 4 decimal places of precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct FixedPoint(i64);

impl FixedPoint {
    const SCALE: i64 = 10_000;

    /// Create from a raw scaled value.
    pub fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw scaled value.
    pub fn raw(&self) -> i64 {
        self.0
    }
}

impl Amount for FixedPoint {
    fn from_decimal_str(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();

        let (is_negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let (integer_part, decimal_part) = match s.split_once('.') {
            Some((int, dec)) => (int, dec),
            None => (s, ""),
        };

        // Max 4 decimal places, digits only; the fractional digits are
        // re-parsed after padding so a stray sign cannot hide in them.
        if decimal_part.len() > 4 || !decimal_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidAmount);
        }

        let integer: i64 = integer_part
            .parse()
            .map_err(|_| DomainError::InvalidAmount)?;

        let decimal: i64 = format!("{:0<4}", decimal_part)
            .parse()
            .map_err(|_| DomainError::InvalidAmount)?;

        let scaled = integer
            .checked_mul(Self::SCALE)
            .and_then(|v| v.checked_add(decimal))
            .ok_or(DomainError::Overflow)?;

        Ok(Self(if is_negative { -scaled } else { scaled }))
    }

    fn to_decimal_string(&self) -> String {
        let abs_value = self.0.abs();
        let integer_part = abs_value / Self::SCALE;
        let decimal_part = abs_value % Self::SCALE;

        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:04}", sign, integer_part, decimal_part)
    }

    fn checked_add(&self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    fn checked_sub(&self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    fn zero() -> Self {
        Self(0)
    }
}

impl Add for FixedPoint {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for FixedPoint {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl fmt::Display for FixedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal_string())
    }
}
