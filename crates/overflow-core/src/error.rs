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

//! # Overflow Errors
//!
//! The typed failure channel used by the `try_*` operations. The overflowing
//! operations report every failure through a single boolean; this enum
//! additionally separates a zero divisor from a result that exists but does
//! not fit the shape.

use core::fmt::Display;

/// The reason an operation could not produce an exact result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverflowError {
    /// The exact result is not representable by the shape.
    Overflow,
    /// The divisor of a division or remainder was zero.
    DivisionByZero,
}

impl Display for OverflowError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Overflow => write!(f, "arithmetic overflow"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OverflowError {}

/// Result alias for the `try_*` operations.
pub type Result<T> = core::result::Result<T, OverflowError>;
