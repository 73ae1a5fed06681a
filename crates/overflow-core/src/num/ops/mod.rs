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

//! # Overflow-Aware Operations
//!
//! Three families of by-value operations over every [`Shape`](crate::num::shape::Shape):
//!
//! ## Submodules
//!
//! - `overflowing`: The arithmetic core. `add`, `subtract`, `multiply`,
//!   `divide`, `divmod` and `remainder` return the native wraparound result
//!   together with a success flag.
//! - `convert`: Truncating conversion between any two shapes with a success
//!   flag.
//! - `fallible`: `try_*` wrappers that turn the success flag into
//!   `Result<T, OverflowError>`, distinguishing division by zero from overflow.
//! - `checked_arithmetic`: Extension traits like `CheckedAddVal` returning
//!   `Option<T>`, for generic code written against by-value trait bounds.
//!
//! The fallible and checked families never add logic of their own; every
//! decision is made by the overflowing core and `convert`.

pub mod checked_arithmetic;
pub mod convert;
pub mod fallible;
pub mod overflowing;
