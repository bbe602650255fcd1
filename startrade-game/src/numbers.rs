//! Integer math helpers centralizing the scaled multiplications used by the
//! pricing and worth formulas.

use num_traits::{PrimInt, SaturatingMul};

/// Multiply `value` by `numerator / denominator` with flooring division,
/// saturating instead of overflowing the intermediate product.
///
/// # Panics
///
/// Panics when `denominator` is zero; callers own that invariant.
#[must_use]
pub fn mul_div<T: PrimInt + SaturatingMul>(value: T, numerator: T, denominator: T) -> T {
    assert!(denominator != T::zero(), "mul_div denominator must be non-zero");
    value.checked_mul(&numerator).map_or_else(
        || (value / denominator).saturating_mul(&numerator),
        |scaled| scaled / denominator,
    )
}

/// Round a non-negative value down to a multiple of `granularity`.
#[must_use]
pub fn round_down_to<T: PrimInt>(value: T, granularity: T) -> T {
    if granularity <= T::one() {
        return value;
    }
    value - (value % granularity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_div_floors() {
        assert_eq!(mul_div(100_i64, 103, 100), 103);
        assert_eq!(mul_div(7_i64, 3, 4), 5);
        assert_eq!(mul_div(0_i64, 100, 90), 0);
    }

    #[test]
    fn mul_div_survives_large_products() {
        let near_max = i64::MAX / 2;
        let scaled = mul_div(near_max, 3, 4);
        assert!(scaled > 0);
        assert_eq!(mul_div(i64::MAX, 2, 1), i64::MAX);
    }

    #[test]
    fn round_down_handles_unit_granularity() {
        assert_eq!(round_down_to(1_234_i64, 1), 1_234);
        assert_eq!(round_down_to(1_234_i64, 10), 1_230);
        assert_eq!(round_down_to(49_i64, 50), 0);
    }
}
