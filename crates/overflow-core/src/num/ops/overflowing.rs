// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Overflowing Arithmetic
//!
//! The arithmetic core. Each operation computes the same bit pattern the
//! native wraparound instruction would produce and pairs it with a flag that
//! is `true` iff that pattern equals the exact mathematical result.
//!
//! Overflow is detected from the wrapped result alone, by comparing signs and
//! orderings of operands and result (and, for multiplication, by dividing the
//! product back). No operation widens its operands, so the checks are exact
//! for 64-bit shapes as well.
//!
//! Division by zero is reported through the same flag, with a zero quotient
//! and remainder; it never panics.

use crate::num::shape::Shape;

/// Adds two values, reporting whether the sum is exact.
///
/// The wrapped sum `c` is exact iff it moved away from `a` in the direction
/// of `b`: `c > a` when `b > 0`, and `c <= a` otherwise.
///
/// # Examples
///
/// ```rust
/// # use overflow_core::add;
/// assert_eq!(add(100_i8, 27), (127, true));
/// assert_eq!(add(127_i8, 1), (-128, false));
/// assert_eq!(add(200_u8, 100), (44, false));
/// ```
#[inline]
pub fn add<T>(a: T, b: T) -> (T, bool)
where
    T: Shape,
{
    let c = a.wrapping_add(&b);
    (c, (c > a) == (b > T::ZERO))
}

/// Subtracts `b` from `a`, reporting whether the difference is exact.
///
/// The wrapped difference `c` is exact iff `c < a` when `b > 0`, and
/// `c >= a` otherwise.
///
/// # Examples
///
/// ```rust
/// # use overflow_core::subtract;
/// assert_eq!(subtract(-100_i8, 28), (-128, true));
/// assert_eq!(subtract(-128_i8, 1), (127, false));
/// assert_eq!(subtract(0_u32, 1), (u32::MAX, false));
/// ```
#[inline]
pub fn subtract<T>(a: T, b: T) -> (T, bool)
where
    T: Shape,
{
    let c = a.wrapping_sub(&b);
    (c, (c < a) == (b > T::ZERO))
}

/// Multiplies two values, reporting whether the product is exact.
///
/// A zero operand short-circuits to `(0, true)`. Otherwise the wrapped
/// product must carry the expected sign (negative iff exactly one operand is
/// negative) and must divide back to `a`; wraparound can preserve the sign
/// by coincidence, so the sign check alone is not sufficient.
///
/// # Examples
///
/// ```rust
/// # use overflow_core::multiply;
/// assert_eq!(multiply(-16_i8, 8), (-128, true));
/// assert_eq!(multiply(-128_i8, -1), (-128, false));
/// assert_eq!(multiply(16_u8, 16), (0, false));
/// assert_eq!(multiply(0_i64, i64::MIN), (0, true));
/// ```
#[inline]
pub fn multiply<T>(a: T, b: T) -> (T, bool)
where
    T: Shape,
{
    if a == T::ZERO || b == T::ZERO {
        return (T::ZERO, true);
    }

    let c = a.wrapping_mul(&b);
    let sign_ok = c.is_negative() == (a.is_negative() != b.is_negative());
    // `b != 0` here, and `c == MIN && b == -1` implies `a == MIN`, which the
    // sign check has already rejected.
    (c, sign_ok && c.wrapping_div(b) == a)
}

/// Divides `a` by `b`, returning the truncated quotient, the remainder and
/// whether both are exact.
///
/// A zero divisor yields `(0, 0, false)`. Otherwise a non-zero quotient is
/// exact iff its sign is negative exactly when one operand is negative; the
/// only quotient violating this is `MIN / -1`, which wraps to `MIN`. A zero
/// quotient (`|a| < |b|`) is always exact.
///
/// # Examples
///
/// ```rust
/// # use overflow_core::divmod;
/// assert_eq!(divmod(100_i8, 3), (33, 1, true));
/// assert_eq!(divmod(-7_i8, 2), (-3, -1, true));
/// assert_eq!(divmod(-128_i8, -1), (-128, 0, false));
/// assert_eq!(divmod(1_i8, 0), (0, 0, false));
/// ```
#[inline]
pub fn divmod<T>(a: T, b: T) -> (T, T, bool)
where
    T: Shape,
{
    if b == T::ZERO {
        return (T::ZERO, T::ZERO, false);
    }

    let c = a.wrapping_div(b);
    let ok = c == T::ZERO || c.is_negative() == (a.is_negative() != b.is_negative());
    (c, a.wrapping_rem(b), ok)
}

/// Divides `a` by `b`, returning the truncated quotient and whether it is
/// exact. See [`divmod`].
///
/// # Examples
///
/// ```rust
/// # use overflow_core::divide;
/// assert_eq!(divide(7_u16, 2), (3, true));
/// assert_eq!(divide(i32::MIN, -1), (i32::MIN, false));
/// assert_eq!(divide(5_u64, 0), (0, false));
/// ```
#[inline]
pub fn divide<T>(a: T, b: T) -> (T, bool)
where
    T: Shape,
{
    let (q, _, ok) = divmod(a, b);
    (q, ok)
}

/// Returns the remainder of `a / b` and the success flag of the division.
/// See [`divmod`].
///
/// The flag describes the division as a whole: `remainder(MIN, -1)` is
/// `(0, false)` because the paired quotient is not representable.
///
/// # Examples
///
/// ```rust
/// # use overflow_core::remainder;
/// assert_eq!(remainder(-7_i8, 2), (-1, true));
/// assert_eq!(remainder(-128_i8, -1), (0, false));
/// assert_eq!(remainder(9_u8, 0), (0, false));
/// ```
#[inline]
pub fn remainder<T>(a: T, b: T) -> (T, bool)
where
    T: Shape,
{
    let (_, r, ok) = divmod(a, b);
    (r, ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::constants::MinusOne;
    use crate::num::shape::IntShape;
    use num_traits::AsPrimitive;
    use rand::distr::{Distribution, StandardUniform};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    /// Checks one operation result against an exact reference value.
    /// `None` stands for a result too large for the `i128` reference itself.
    fn assert_matches<T>(op: &str, a: T, b: T, got: (T, bool), exact: Option<i128>)
    where
        T: Shape + AsPrimitive<i128>,
    {
        let (value, ok) = got;
        let fits = exact.is_some_and(|e| IntShape::of::<T>().contains(e));
        assert_eq!(
            ok, fits,
            "{op}({a}, {b}) reported ok={ok}, exact result {exact:?} fits={fits}"
        );
        if ok {
            let wide: i128 = value.as_();
            assert_eq!(Some(wide), exact, "{op}({a}, {b}) returned {value}");
        }
    }

    /// Checks every operation on `(a, b)` against arithmetic in `i128`.
    fn cross_check<T>(a: T, b: T)
    where
        T: Shape + AsPrimitive<i128>,
    {
        let (wa, wb): (i128, i128) = (a.as_(), b.as_());

        assert_matches("add", a, b, add(a, b), wa.checked_add(wb));
        assert_matches("subtract", a, b, subtract(a, b), wa.checked_sub(wb));
        assert_matches("multiply", a, b, multiply(a, b), wa.checked_mul(wb));

        if wb == 0 {
            assert_eq!(divmod(a, b), (T::ZERO, T::ZERO, false));
            assert_eq!(remainder(a, b), (T::ZERO, false));
            return;
        }

        let (q, r, ok) = divmod(a, b);
        assert_matches("divide", a, b, (q, ok), Some(wa / wb));
        assert_eq!(divide(a, b), (q, ok));
        if ok {
            let wr: i128 = r.as_();
            assert_eq!(wr, wa % wb, "divmod({a}, {b}) remainder");
        }
        assert_eq!(remainder(a, b), (r, ok));
    }

    #[test]
    fn test_exhaustive_i8() {
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                cross_check(a, b);
            }
        }
    }

    #[test]
    fn test_exhaustive_u8() {
        for a in u8::MIN..=u8::MAX {
            for b in u8::MIN..=u8::MAX {
                cross_check(a, b);
            }
        }
    }

    /// Draws an operand, biased towards the edges of the shape.
    fn operand<T>(rng: &mut StdRng) -> T
    where
        T: Shape,
        StandardUniform: Distribution<T>,
    {
        let edges = [
            T::min_value(),
            T::min_value() + T::one(),
            T::max_value(),
            T::max_value() - T::one(),
            T::ZERO,
            T::one(),
        ];
        if rng.random_range(0..4) == 0 {
            edges[rng.random_range(0..edges.len())]
        } else {
            rng.random()
        }
    }

    fn randomized_cross_check<T>(seed: u64, rounds: usize)
    where
        T: Shape + AsPrimitive<i128>,
        StandardUniform: Distribution<T>,
    {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..rounds {
            let a = operand::<T>(&mut rng);
            let b = operand::<T>(&mut rng);
            cross_check(a, b);
        }
    }

    #[test]
    fn test_randomized_wide_shapes() {
        randomized_cross_check::<i16>(0x16, 50_000);
        randomized_cross_check::<u16>(0x16, 50_000);
        randomized_cross_check::<i32>(0x32, 100_000);
        randomized_cross_check::<u32>(0x32, 100_000);
        randomized_cross_check::<i64>(0x64, 200_000);
        randomized_cross_check::<u64>(0x64, 200_000);
    }

    #[test]
    fn test_unsigned_64bit_products_beyond_i128() {
        cross_check(u64::MAX, u64::MAX);
        cross_check(u64::MAX, 2);
        cross_check(1_u64 << 63, 1 << 63);
        assert_eq!(multiply(u64::MAX, u64::MAX), (1, false));
        assert_eq!(multiply(1_u64 << 32, (1 << 32) - 1), (u64::MAX - (1 << 32) + 1, true));
    }

    /// Cross-checks every pair drawn from `edges`.
    fn edge_grid<T>(edges: &[T])
    where
        T: Shape + AsPrimitive<i128>,
    {
        for &a in edges {
            for &b in edges {
                cross_check(a, b);
            }
        }
    }

    #[test]
    fn test_pointer_width_edge_grid() {
        edge_grid(&[
            isize::MIN,
            isize::MIN + 1,
            isize::MIN / 2,
            i32::MIN as isize,
            -3,
            -2,
            -1,
            0,
            1,
            2,
            3,
            i32::MAX as isize,
            isize::MAX / 2,
            isize::MAX - 1,
            isize::MAX,
        ]);
        edge_grid(&[
            0,
            1,
            2,
            3,
            u32::MAX as usize,
            usize::MAX / 2,
            usize::MAX / 2 + 1,
            usize::MAX - 1,
            usize::MAX,
        ]);
    }

    #[test]
    fn test_signed_8bit_boundaries() {
        assert_eq!(add(127_i8, 1), (-128, false));
        assert_eq!(subtract(-128_i8, 1), (127, false));
        assert_eq!(multiply(-128_i8, -1), (-128, false));
        assert_eq!(divmod(-128_i8, -1), (-128, 0, false));
        assert_eq!(divmod(100_i8, 3), (33, 1, true));
        assert_eq!(divmod(1_i8, 0), (0, 0, false));
    }

    #[test]
    fn test_unsigned_quotient() {
        assert_eq!(divmod(100_u8, 3), (33, 1, true));
        assert_eq!(divmod(1_u8, 0), (0, 0, false));
    }

    fn assert_min_over_minus_one_fails<T>()
    where
        T: Shape + MinusOne,
    {
        let min = T::min_value();
        assert_eq!(divmod(min, T::MINUS_ONE), (min, T::ZERO, false));
        assert_eq!(divide(min, T::MINUS_ONE), (min, false));
        assert_eq!(multiply(min, T::MINUS_ONE), (min, false));
        assert_eq!(multiply(T::MINUS_ONE, min), (min, false));
        assert!(divmod(min + T::one(), T::MINUS_ONE).2);
    }

    #[test]
    fn test_min_over_minus_one_every_signed_shape() {
        assert_min_over_minus_one_fails::<i8>();
        assert_min_over_minus_one_fails::<i16>();
        assert_min_over_minus_one_fails::<i32>();
        assert_min_over_minus_one_fails::<i64>();
        assert_min_over_minus_one_fails::<isize>();
    }

    #[test]
    fn test_zero_quotient_with_mixed_signs_is_exact() {
        assert_eq!(divmod(1_i8, -2), (0, 1, true));
        assert_eq!(divmod(-1_i64, 2), (0, -1, true));
        assert_eq!(divmod(0_i32, -5), (0, 0, true));
    }

    #[test]
    fn test_division_by_zero_every_shape() {
        assert_eq!(divmod(i64::MIN, 0), (0, 0, false));
        assert_eq!(divmod(u64::MAX, 0), (0, 0, false));
        assert_eq!(divide(0_i16, 0), (0, false));
        assert_eq!(remainder(7_usize, 0), (0, false));
        assert_eq!(divide(-7_isize, 0), (0, false));
    }

    #[test]
    fn test_multiply_zero_short_circuit() {
        assert_eq!(multiply(0_i64, i64::MIN), (0, true));
        assert_eq!(multiply(i64::MAX, 0), (0, true));
        assert_eq!(multiply(0_u64, u64::MAX), (0, true));
        assert_eq!(multiply(u8::MAX, 0), (0, true));
    }

    #[test]
    fn test_multiply_sign_preserving_wraparound() {
        // 0x4000_0001 * 4 wraps to 4, which keeps the expected positive sign.
        assert_eq!(multiply(0x4000_0001_i32, 4), (4, false));
        assert_eq!(multiply(i64::MAX, 3), (i64::MAX - 2, false));
        assert_eq!(multiply(u64::MAX, 2), (u64::MAX - 1, false));
        assert_eq!(multiply(-(1_i64 << 31), 1_i64 << 32), (i64::MIN, true));
    }

    #[test]
    fn test_add_subtract_at_64bit_edges() {
        assert_eq!(add(i64::MAX, 1), (i64::MIN, false));
        assert_eq!(add(i64::MIN, -1), (i64::MAX, false));
        assert_eq!(add(i64::MIN, i64::MAX), (-1, true));
        assert_eq!(add(u64::MAX, 0), (u64::MAX, true));
        assert_eq!(add(u64::MAX, 1), (0, false));
        assert_eq!(subtract(i64::MIN, 1), (i64::MAX, false));
        assert_eq!(subtract(0_i64, i64::MIN), (i64::MIN, false));
        assert_eq!(subtract(-1_i64, i64::MIN), (i64::MAX, true));
        assert_eq!(subtract(0_u64, 0), (0, true));
        assert_eq!(subtract(3_u64, 4), (u64::MAX, false));
    }

    #[test]
    fn test_pointer_width_shapes() {
        assert_eq!(add(usize::MAX, 1), (0, false));
        assert_eq!(subtract(isize::MIN, 1), (isize::MAX, false));
        assert_eq!(multiply(3_usize, 4), (12, true));
        assert_eq!(divmod(-9_isize, 4), (-2, -1, true));
    }
}
