//! # Calculator Numeric Traits
//!
//! `CalcNumeric` collects the capabilities the operation engine needs from a
//! number type: the `num_traits` fundamentals plus by-value checked helpers
//! whose failure modes line up with [`CalcError`](crate::CalcError).
//!
//! - Floats follow IEEE-754: sums, products and quotients never fail,
//!   `checked_power` fails only on a range error, rounding scales by
//!   `10^precision`.
//! - Signed integers use checked arithmetic; anything that would wrap is
//!   reported as `None` (an overflow). Rounding is the identity and square
//!   roots truncate toward zero.
//!
//! `CalcInteger` narrows this to the signed primitive integers, which is
//! what the integer-only calculator API (`gcd`, `lcm`) is written against.

use std::fmt::{Debug, Display};

use num_traits::{Num, NumCast, PrimInt, Signed};

/// Number types a [`Calculator`](crate::Calculator) can be instantiated with.
///
/// Implemented for `f32`, `f64`, `i8`, `i16`, `i32`, `i64` and `isize`.
///
/// # Examples
///
/// ```rust
/// use calc_ledger::numeric::CalcNumeric;
///
/// assert_eq!(2.0_f64.checked_power(10.0), Some(1024.0));
/// assert_eq!(10.0_f64.checked_power(400.0), None);
/// assert_eq!(i32::MAX.checked_sum(1), None);
/// assert_eq!(3.14159_f64.round_to_precision(2), 3.14);
/// ```
pub trait CalcNumeric:
    Num + NumCast + Copy + PartialOrd + Debug + Display + Send + Sync + 'static
{
    /// `self + rhs`, `None` if the result does not fit.
    fn checked_sum(self, rhs: Self) -> Option<Self>;

    /// `self - rhs`, `None` if the result does not fit.
    fn checked_difference(self, rhs: Self) -> Option<Self>;

    /// `self * rhs`, `None` if the result does not fit.
    fn checked_product(self, rhs: Self) -> Option<Self>;

    /// `self / rhs`. Callers reject a zero divisor before calling this;
    /// `None` only reports an unrepresentable quotient (`MIN / -1`).
    fn checked_quotient(self, rhs: Self) -> Option<Self>;

    /// `self % rhs`, same contract as [`checked_quotient`](Self::checked_quotient).
    fn checked_remainder(self, rhs: Self) -> Option<Self>;

    /// `self ^ exponent`, `None` on a range error.
    fn checked_power(self, exponent: Self) -> Option<Self>;

    /// Non-negative square root. Callers reject negative input first.
    fn square_root(self) -> Self;

    /// Round to `precision` decimal places.
    fn round_to_precision(self, precision: u32) -> Self;
}

/// Signed primitive integers usable with the integer-only calculator API.
pub trait CalcInteger: CalcNumeric + PrimInt + Signed {}

impl<T> CalcInteger for T where T: CalcNumeric + PrimInt + Signed {}

macro_rules! float_impl {
    ($t:ty, $integral:expr) => {
        impl CalcNumeric for $t {
            #[inline]
            fn checked_sum(self, rhs: $t) -> Option<$t> {
                Some(self + rhs)
            }

            #[inline]
            fn checked_difference(self, rhs: $t) -> Option<$t> {
                Some(self - rhs)
            }

            #[inline]
            fn checked_product(self, rhs: $t) -> Option<$t> {
                Some(self * rhs)
            }

            #[inline]
            fn checked_quotient(self, rhs: $t) -> Option<$t> {
                Some(self / rhs)
            }

            #[inline]
            fn checked_remainder(self, rhs: $t) -> Option<$t> {
                Some(self % rhs)
            }

            fn checked_power(self, exponent: $t) -> Option<$t> {
                let result = self.powf(exponent);
                // Infinite output from finite input is a range error.
                // NaN from a domain error (e.g. (-8)^(1/3)) is passed through.
                if result.is_infinite() && self.is_finite() && exponent.is_finite() {
                    None
                } else {
                    Some(result)
                }
            }

            #[inline]
            fn square_root(self) -> $t {
                self.sqrt()
            }

            fn round_to_precision(self, precision: u32) -> $t {
                let exponent = i32::try_from(precision).unwrap_or(i32::MAX);
                let factor = (10.0 as $t).powi(exponent);
                let scaled = self * factor;
                // Scaled values this large are already whole numbers.
                if !scaled.is_finite() || scaled.abs() >= $integral {
                    return self;
                }
                let units = scaled.round();
                let rounded = units / factor;
                if (rounded * factor).round() == units {
                    return rounded;
                }
                // Near the top of the mantissa the quotient can land one ulp
                // off the grid; take the neighbour that scales back to `units`.
                let bits = rounded.to_bits();
                [
                    <$t>::from_bits(bits.wrapping_sub(1)),
                    <$t>::from_bits(bits.wrapping_add(1)),
                ]
                .into_iter()
                .find(|candidate| (*candidate * factor).round() == units)
                .unwrap_or(rounded)
            }
        }
    };
}

float_impl!(f32, 8_388_608.0);
float_impl!(f64, 4_503_599_627_370_496.0);

macro_rules! int_impl {
    ($t:ty) => {
        impl CalcNumeric for $t {
            #[inline]
            fn checked_sum(self, rhs: $t) -> Option<$t> {
                <$t>::checked_add(self, rhs)
            }

            #[inline]
            fn checked_difference(self, rhs: $t) -> Option<$t> {
                <$t>::checked_sub(self, rhs)
            }

            #[inline]
            fn checked_product(self, rhs: $t) -> Option<$t> {
                <$t>::checked_mul(self, rhs)
            }

            #[inline]
            fn checked_quotient(self, rhs: $t) -> Option<$t> {
                <$t>::checked_div(self, rhs)
            }

            #[inline]
            fn checked_remainder(self, rhs: $t) -> Option<$t> {
                <$t>::checked_rem(self, rhs)
            }

            fn checked_power(self, exponent: $t) -> Option<$t> {
                // Negative exponents truncate the real-valued result toward zero.
                match self {
                    0 if exponent < 0 => None,
                    0 if exponent == 0 => Some(1),
                    0 => Some(0),
                    1 => Some(1),
                    -1 => Some(if exponent % 2 == 0 { 1 } else { -1 }),
                    _ if exponent < 0 => Some(0),
                    _ => u32::try_from(exponent)
                        .ok()
                        .and_then(|e| <$t>::checked_pow(self, e)),
                }
            }

            fn square_root(self) -> $t {
                if self <= 0 {
                    return 0;
                }
                let mut root = (self as f64).sqrt() as $t;
                while root.checked_mul(root).map_or(true, |sq| sq > self) {
                    root -= 1;
                }
                while (root + 1).checked_mul(root + 1).map_or(false, |sq| sq <= self) {
                    root += 1;
                }
                root
            }

            #[inline(always)]
            fn round_to_precision(self, _precision: u32) -> $t {
                self
            }
        }
    };
}

int_impl!(i8);
int_impl!(i16);
int_impl!(i32);
int_impl!(i64);
int_impl!(isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_rounding_scales_by_powers_of_ten() {
        assert_eq!(2.0_f64.round_to_precision(0), 2.0);
        assert_eq!(15.0_f64.round_to_precision(4), 15.0);
        assert_eq!(4.875_f64.round_to_precision(2), 4.88);
        assert_eq!((-1.23456_f64).round_to_precision(3), -1.235);
        assert_eq!((1.0_f64 / 3.0).round_to_precision(4), 0.3333);
    }

    #[test]
    fn float_rounding_covers_full_precision_range() {
        assert_eq!((4.0_f64 / 3.0).round_to_precision(15), 1.333333333333333);
        assert_eq!(
            (123456.0_f64 + 0.12345678912).round_to_precision(10),
            123456.1234567891
        );
        assert_eq!(1234.56789_f64.round_to_precision(12), 1234.56789);
        assert_eq!((2.0_f32 / 3.0).round_to_precision(6), 0.666667);
    }

    #[test]
    fn float_rounding_leaves_whole_scaled_values_alone() {
        let whole = 4_503_599_627_370_497.0_f64;
        assert_eq!(whole.round_to_precision(0), whole);
        assert_eq!(whole.round_to_precision(0).round_to_precision(0), whole);
    }

    #[test]
    fn float_rounding_leaves_huge_and_non_finite_values_alone() {
        assert_eq!(1.0e300_f64.round_to_precision(10), 1.0e300);
        assert!(f64::NAN.round_to_precision(2).is_nan());
        assert_eq!(f64::INFINITY.round_to_precision(2), f64::INFINITY);
        assert_eq!(0.5_f64.round_to_precision(u32::MAX), 0.5);
    }

    #[test]
    fn float_power_reports_range_errors_only() {
        assert_eq!(2.0_f64.checked_power(-1.0), Some(0.5));
        assert_eq!(9.0_f64.checked_power(0.5), Some(3.0));
        assert_eq!(10.0_f64.checked_power(400.0), None);
        assert_eq!(0.0_f64.checked_power(-1.0), None);
        assert!((-8.0_f64).checked_power(1.0 / 3.0).unwrap().is_nan());
        assert_eq!(f64::INFINITY.checked_power(2.0), Some(f64::INFINITY));
    }

    #[test]
    fn integer_arithmetic_is_checked() {
        assert_eq!(i64::MAX.checked_sum(1), None);
        assert_eq!(i64::MIN.checked_difference(1), None);
        assert_eq!(i32::MAX.checked_product(2), None);
        assert_eq!(i64::MIN.checked_quotient(-1), None);
        assert_eq!(17_i64.checked_remainder(5), Some(2));
    }

    #[test]
    fn integer_power_truncates_negative_exponents() {
        assert_eq!(2_i64.checked_power(10), Some(1024));
        assert_eq!(2_i64.checked_power(-1), Some(0));
        assert_eq!((-1_i64).checked_power(-3), Some(-1));
        assert_eq!((-1_i64).checked_power(4), Some(1));
        assert_eq!(0_i64.checked_power(0), Some(1));
        assert_eq!(0_i64.checked_power(-2), None);
        assert_eq!(2_i8.checked_power(7), None);
        assert_eq!(3_i64.checked_power(i64::MAX), None);
    }

    #[test]
    fn integer_square_root_truncates() {
        assert_eq!(16_i64.square_root(), 4);
        assert_eq!(17_i64.square_root(), 4);
        assert_eq!(0_i64.square_root(), 0);
        assert_eq!(i64::MAX.square_root(), 3_037_000_499);
        assert_eq!(i8::MAX.square_root(), 11);
    }

    #[test]
    fn integer_rounding_is_identity() {
        assert_eq!(42_i64.round_to_precision(4), 42);
    }
}
