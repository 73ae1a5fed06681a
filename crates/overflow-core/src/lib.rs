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

//! # Overflow Core
//!
//! Fixed-width integer arithmetic that reports overflow instead of silently
//! wrapping. Every operation behaves like the native machine operation, but
//! returns a success flag next to the (possibly wrapped) value, so callers can
//! decide whether a failure is fatal, recoverable, or a reason to switch to a
//! wider computation path.
//!
//! ## Modules
//!
//! - `num`: The closed set of integer shapes (`i8`..`i64`, `u8`..`u64` and the
//!   pointer-width `isize`/`usize`), associated constants, and the operation
//!   families:
//!   - overflowing (`(value, ok)` pairs): `add`, `subtract`, `multiply`,
//!     `divide`, `divmod`, `remainder`, `convert`.
//!   - fallible (`Result<T, OverflowError>`): `try_add`, `try_subtract`, ...
//!   - checked (`Option<T>`): by-value extension traits like `CheckedAddVal`.
//! - `error`: The `OverflowError` kind used by the fallible family.
//!
//! ## Guarantees
//!
//! - No operation panics or traps, including `MIN / -1` and division by zero.
//! - No operation computes in a wider intermediate type; the checks hold
//!   at the widest shape (64 bits) exactly as they do at 8 bits.
//! - All operations are pure, allocation-free and `O(1)`.
//!
//! ```rust
//! use overflow_core::{add, divmod, convert};
//!
//! assert_eq!(add(127_i8, 1), (-128, false));
//! assert_eq!(divmod(100_i8, 3), (33, 1, true));
//! assert_eq!(convert::<i8, u8>(-1), (255, false));
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod error;
pub mod num;

pub use error::{OverflowError, Result};
pub use num::ops::checked_arithmetic::{
    CheckedAddVal, CheckedConvertVal, CheckedDivVal, CheckedMulVal, CheckedRemVal, CheckedSubVal,
};
pub use num::ops::convert::convert;
pub use num::ops::fallible::{
    try_add, try_convert, try_divide, try_divmod, try_multiply, try_remainder, try_subtract,
};
pub use num::ops::overflowing::{add, divide, divmod, multiply, remainder, subtract};
pub use num::shape::{IntShape, Shape, Signedness};
