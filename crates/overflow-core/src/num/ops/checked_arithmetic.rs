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

//! # Checked Arithmetic Traits
//!
//! By-value extension traits returning `Option<T>`, blanket-implemented for
//! every [`Shape`]. They let generic code name the capability it needs as a
//! trait bound, e.g. `T: CheckedMulVal + CheckedAddVal`, instead of the full
//! `Shape` bound.

use crate::num::ops::convert::convert;
use crate::num::ops::overflowing::{add, divmod, multiply, subtract};
use crate::num::shape::Shape;
use num_traits::AsPrimitive;

#[inline(always)]
fn exact<T>((value, ok): (T, bool)) -> Option<T> {
    ok.then_some(value)
}

/// A trait for types that support checked addition by value.
///
/// # Examples
///
/// ```rust
/// # use overflow_core::CheckedAddVal;
/// let a: u8 = 200;
/// assert_eq!(a.checked_add_val(100), None);
/// assert_eq!(a.checked_add_val(50), Some(250));
/// ```
pub trait CheckedAddVal: Sized {
    /// Performs checked addition by value, returning `None` on overflow.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use overflow_core::CheckedSubVal;
/// let a: i8 = -100;
/// assert_eq!(a.checked_sub_val(29), None);
/// assert_eq!(a.checked_sub_val(28), Some(-128));
/// ```
pub trait CheckedSubVal: Sized {
    /// Performs checked subtraction by value, returning `None` on overflow.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked multiplication by value.
///
/// # Examples
///
/// ```rust
/// # use overflow_core::CheckedMulVal;
/// let a: u8 = 20;
/// assert_eq!(a.checked_mul_val(10), Some(200));
/// assert_eq!(a.checked_mul_val(20), None);
/// ```
pub trait CheckedMulVal: Sized {
    /// Performs checked multiplication by value, returning `None` on overflow.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked division by value.
///
/// # Examples
///
/// ```rust
/// # use overflow_core::CheckedDivVal;
/// assert_eq!(100_u8.checked_div_val(0), None);
/// assert_eq!(100_u8.checked_div_val(4), Some(25));
/// assert_eq!(i8::MIN.checked_div_val(-1), None);
/// ```
pub trait CheckedDivVal: Sized {
    /// Performs checked division by value, returning `None` on a zero divisor
    /// or overflow.
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked remainder by value.
///
/// # Examples
///
/// ```rust
/// # use overflow_core::CheckedRemVal;
/// assert_eq!(10_u8.checked_rem_val(0), None);
/// assert_eq!(10_u8.checked_rem_val(3), Some(1));
/// ```
pub trait CheckedRemVal: Sized {
    /// Performs checked remainder by value, returning `None` on a zero divisor
    /// or when the paired quotient overflows.
    fn checked_rem_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that can be converted by value into the shape `U`,
/// returning `None` if the value does not survive the conversion.
///
/// # Examples
///
/// ```rust
/// # use overflow_core::CheckedConvertVal;
/// assert_eq!(CheckedConvertVal::<u8>::checked_convert_val(-1_i32), None);
/// assert_eq!(CheckedConvertVal::<u8>::checked_convert_val(255_i32), Some(255));
/// ```
pub trait CheckedConvertVal<U>: Sized {
    /// Performs a checked conversion by value.
    fn checked_convert_val(self) -> Option<U>;
}

impl<T> CheckedAddVal for T
where
    T: Shape,
{
    #[inline(always)]
    fn checked_add_val(self, v: Self) -> Option<Self> {
        exact(add(self, v))
    }
}

impl<T> CheckedSubVal for T
where
    T: Shape,
{
    #[inline(always)]
    fn checked_sub_val(self, v: Self) -> Option<Self> {
        exact(subtract(self, v))
    }
}

impl<T> CheckedMulVal for T
where
    T: Shape,
{
    #[inline(always)]
    fn checked_mul_val(self, v: Self) -> Option<Self> {
        exact(multiply(self, v))
    }
}

impl<T> CheckedDivVal for T
where
    T: Shape,
{
    #[inline(always)]
    fn checked_div_val(self, v: Self) -> Option<Self> {
        let (q, _, ok) = divmod(self, v);
        ok.then_some(q)
    }
}

impl<T> CheckedRemVal for T
where
    T: Shape,
{
    #[inline(always)]
    fn checked_rem_val(self, v: Self) -> Option<Self> {
        let (_, r, ok) = divmod(self, v);
        ok.then_some(r)
    }
}

impl<T, U> CheckedConvertVal<U> for T
where
    T: Shape + AsPrimitive<U>,
    U: Shape + AsPrimitive<T>,
{
    #[inline(always)]
    fn checked_convert_val(self) -> Option<U> {
        exact(convert::<T, U>(self))
    }
}
