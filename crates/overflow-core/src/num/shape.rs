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

//! # Integer Shapes
//!
//! A *shape* is a (signedness, bit width) pair identifying one fixed-width
//! two's-complement representation. The arithmetic in this crate is generic
//! over the closed set of shapes expressed by the sealed [`Shape`] trait:
//! `i8`, `i16`, `i32`, `i64`, `isize` and `u8`, `u16`, `u32`, `u64`, `usize`.
//!
//! 128-bit integers are not shapes: the overflow checks never
//! rely on a wider intermediate type, and 64 bits is the widest width the
//! checks are defined for.
//!
//! [`IntShape`] is the runtime counterpart, useful for diagnostics and for
//! range queries on values that have already been widened by the caller.

use crate::num::constants::Zero;
use core::fmt::{Debug, Display};
use num_traits::{PrimInt, WrappingAdd, WrappingMul, WrappingSub};

mod sealed {
    pub trait Sealed {}
}

/// Whether a shape can represent negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signedness {
    Signed,
    Unsigned,
}

/// Runtime descriptor of an integer shape.
///
/// # Examples
///
/// ```rust
/// # use overflow_core::{IntShape, Signedness};
/// let shape = IntShape::of::<i8>();
/// assert_eq!(shape.signedness(), Signedness::Signed);
/// assert_eq!(shape.bits(), 8);
/// assert_eq!(shape.min_value(), -128);
/// assert!(!shape.contains(128));
/// assert_eq!(shape.to_string(), "i8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntShape {
    signedness: Signedness,
    bits: u32,
}

impl IntShape {
    #[inline(always)]
    const fn new(signedness: Signedness, bits: u32) -> Self {
        Self { signedness, bits }
    }

    /// Returns the shape of the integer type `T`.
    #[inline(always)]
    pub const fn of<T>() -> Self
    where
        T: Shape,
    {
        T::SHAPE
    }

    /// Returns the signedness of the shape.
    #[inline(always)]
    pub const fn signedness(self) -> Signedness {
        self.signedness
    }

    /// Returns the width of the shape in bits.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Returns `true` if the shape can represent negative values.
    #[inline(always)]
    pub const fn is_signed(self) -> bool {
        matches!(self.signedness, Signedness::Signed)
    }

    /// Returns the smallest value representable by the shape.
    #[inline]
    pub const fn min_value(self) -> i128 {
        match self.signedness {
            Signedness::Signed => -(1_i128 << (self.bits - 1)),
            Signedness::Unsigned => 0,
        }
    }

    /// Returns the largest value representable by the shape.
    #[inline]
    pub const fn max_value(self) -> i128 {
        match self.signedness {
            Signedness::Signed => (1_i128 << (self.bits - 1)) - 1,
            Signedness::Unsigned => (1_i128 << self.bits) - 1,
        }
    }

    /// Returns `true` if `value` is representable by the shape.
    #[inline]
    pub const fn contains(self, value: i128) -> bool {
        self.min_value() <= value && value <= self.max_value()
    }
}

impl Display for IntShape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let prefix = match self.signedness {
            Signedness::Signed => 'i',
            Signedness::Unsigned => 'u',
        };
        write!(f, "{}{}", prefix, self.bits)
    }
}

/// A fixed-width integer type the overflow-aware operations are defined for.
///
/// The trait is sealed; it is implemented for `i8`, `i16`, `i32`, `i64`,
/// `isize`, `u8`, `u16`, `u32`, `u64` and `usize` only.
///
/// Arithmetic on a shape goes through the wrapping primitives so that a
/// debug build never panics on the intermediate result; the overflow checks
/// inspect that wrapped result afterwards.
pub trait Shape:
    sealed::Sealed
    + PrimInt
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + Zero
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// The runtime descriptor of this shape.
    const SHAPE: IntShape;

    /// Truncating division that yields `MIN` for `MIN / -1`.
    ///
    /// The caller must guarantee that `rhs` is not zero.
    fn wrapping_div(self, rhs: Self) -> Self;

    /// Remainder of truncating division that yields `0` for `MIN % -1`.
    ///
    /// The caller must guarantee that `rhs` is not zero.
    fn wrapping_rem(self, rhs: Self) -> Self;

    /// Returns `true` if the value is below zero. Always `false` for
    /// unsigned shapes.
    #[inline(always)]
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

macro_rules! impl_shape {
    ($signedness:ident => $($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Shape for $t {
                const SHAPE: IntShape = IntShape::new(Signedness::$signedness, <$t>::BITS);

                #[inline(always)]
                fn wrapping_div(self, rhs: Self) -> Self {
                    debug_assert!(rhs != 0, "called `Shape::wrapping_div` with a zero divisor");
                    <$t>::wrapping_div(self, rhs)
                }

                #[inline(always)]
                fn wrapping_rem(self, rhs: Self) -> Self {
                    debug_assert!(rhs != 0, "called `Shape::wrapping_rem` with a zero divisor");
                    <$t>::wrapping_rem(self, rhs)
                }
            }
        )*
    };
}

impl_shape!(Signed => i8, i16, i32, i64, isize);
impl_shape!(Unsigned => u8, u16, u32, u64, usize);
