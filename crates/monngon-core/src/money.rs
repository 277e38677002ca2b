//! # Money Module
//!
//! Provides the `Money` type for handling prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  All prices are whole đồng (VND has no minor unit in circulation).     │
//! │                                                                         │
//! │    Phở Tái Lăn     65.000₫ × 2  = 130.000₫                             │
//! │    Quẩy Giòn        5.000₫ × 3  =  15.000₫                             │
//! │                                   ─────────                             │
//! │                                   145.000₫                              │
//! │                                                                         │
//! │  Integer math end to end: no rounding, no float drift.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use monngon_core::money::Money;
//!
//! let price = Money::from_minor(65_000);
//! let line = price * 2;
//! assert_eq!(line.minor(), 130_000);
//! assert_eq!(line.to_string(), "130.000₫");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A price in the smallest currency unit (đồng).
///
/// Signed so that subtraction never wraps, but catalog prices are always
/// non-negative (checked by [`crate::validation::validate_price`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from the smallest currency unit.
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in the smallest currency unit.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a cart quantity.
    ///
    /// ## Example
    /// ```rust
    /// use monngon_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(5_000);
    /// assert_eq!(unit_price.multiply_quantity(3).minor(), 15_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Vietnamese display format: dot-grouped thousands, trailing `₫`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}₫", sign, grouped)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_minor(0).to_string(), "0₫");
        assert_eq!(Money::from_minor(500).to_string(), "500₫");
        assert_eq!(Money::from_minor(5_000).to_string(), "5.000₫");
        assert_eq!(Money::from_minor(65_000).to_string(), "65.000₫");
        assert_eq!(Money::from_minor(1_250_000).to_string(), "1.250.000₫");
        assert_eq!(Money::from_minor(-70_000).to_string(), "-70.000₫");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(65_000);
        let b = Money::from_minor(5_000);

        assert_eq!((a + b).minor(), 70_000);
        assert_eq!((a * 2).minor(), 130_000);

        let mut running = Money::zero();
        running += a;
        running += b;
        assert_eq!(running, Money::from_minor(70_000));
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Money = Vec::<Money>::new().into_iter().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_sum_lines() {
        let total: Money = [Money::from_minor(130_000), Money::from_minor(15_000)]
            .into_iter()
            .sum();
        assert_eq!(total.minor(), 145_000);
    }
}
