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

//! # Overflowing Conversion
//!
//! Conversion between any two shapes with the semantics of an `as` cast,
//! paired with a flag reporting whether the value survived unchanged.

use crate::num::shape::Shape;
use num_traits::AsPrimitive;

/// Converts `a` from shape `T` to shape `U`, reporting whether the value is
/// preserved exactly.
///
/// The returned value is the truncated (and possibly sign-reinterpreted) bit
/// pattern an `as` cast produces. It is exact iff casting it back yields `a`
/// *and* both values have the same sign. The round trip alone catches loss of
/// magnitude; the sign check catches reinterpretation between shapes of
/// differing signedness, where e.g. `-1_i8` becomes `255_u8` and casts back
/// to `-1_i8` unchanged.
///
/// # Examples
///
/// ```rust
/// # use overflow_core::convert;
/// assert_eq!(convert::<i32, i8>(-100), (-100, true));
/// assert_eq!(convert::<i32, i8>(300), (44, false));
/// assert_eq!(convert::<i8, u8>(-1), (255, false));
/// assert_eq!(convert::<u64, i64>(u64::MAX), (-1, false));
/// assert_eq!(convert::<u8, i64>(255), (255, true));
/// ```
#[inline]
pub fn convert<T, U>(a: T) -> (U, bool)
where
    T: Shape + AsPrimitive<U>,
    U: Shape + AsPrimitive<T>,
{
    let b: U = a.as_();
    let back: T = b.as_();
    (b, back == a && a.is_negative() == b.is_negative())
}
