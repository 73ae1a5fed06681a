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

//! # Fallible Arithmetic
//!
//! `Result`-returning forms of the overflowing operations. On success the
//! exact value is returned; on failure the wrapped value is discarded and an
//! [`OverflowError`] names the cause.
//!
//! ```rust
//! use overflow_core::{OverflowError, try_add, try_divide, try_multiply};
//!
//! fn area(w: u32, h: u32, scale: u32) -> overflow_core::Result<u32> {
//!     try_divide(try_multiply(w, h)?, scale)
//! }
//!
//! assert_eq!(area(6, 7, 2), Ok(21));
//! assert_eq!(area(6, 7, 0), Err(OverflowError::DivisionByZero));
//! assert_eq!(area(u32::MAX, 2, 1), Err(OverflowError::Overflow));
//! assert_eq!(try_add(i8::MAX, 1), Err(OverflowError::Overflow));
//! ```

use crate::error::{OverflowError, Result};
use crate::num::ops::convert::convert;
use crate::num::ops::overflowing::{add, divmod, multiply, subtract};
use crate::num::shape::Shape;
use num_traits::AsPrimitive;

#[inline(always)]
fn exact<T>((value, ok): (T, bool)) -> Result<T> {
    if ok {
        Ok(value)
    } else {
        Err(OverflowError::Overflow)
    }
}

/// Adds two values. See [`add`].
#[inline]
pub fn try_add<T>(a: T, b: T) -> Result<T>
where
    T: Shape,
{
    exact(add(a, b))
}

/// Subtracts `b` from `a`. See [`subtract`].
#[inline]
pub fn try_subtract<T>(a: T, b: T) -> Result<T>
where
    T: Shape,
{
    exact(subtract(a, b))
}

/// Multiplies two values. See [`multiply`].
#[inline]
pub fn try_multiply<T>(a: T, b: T) -> Result<T>
where
    T: Shape,
{
    exact(multiply(a, b))
}

/// Returns the quotient and remainder of `a / b`. See [`divmod`].
#[inline]
pub fn try_divmod<T>(a: T, b: T) -> Result<(T, T)>
where
    T: Shape,
{
    if b == T::ZERO {
        return Err(OverflowError::DivisionByZero);
    }
    match divmod(a, b) {
        (q, r, true) => Ok((q, r)),
        _ => Err(OverflowError::Overflow),
    }
}

/// Returns the quotient of `a / b`. See [`divmod`].
#[inline]
pub fn try_divide<T>(a: T, b: T) -> Result<T>
where
    T: Shape,
{
    try_divmod(a, b).map(|(q, _)| q)
}

/// Returns the remainder of `a / b`. See [`divmod`].
#[inline]
pub fn try_remainder<T>(a: T, b: T) -> Result<T>
where
    T: Shape,
{
    try_divmod(a, b).map(|(_, r)| r)
}

/// Converts `a` from shape `T` to shape `U`. See [`convert`].
#[inline]
pub fn try_convert<T, U>(a: T) -> Result<U>
where
    T: Shape + AsPrimitive<U>,
    U: Shape + AsPrimitive<T>,
{
    exact(convert::<T, U>(a))
}
