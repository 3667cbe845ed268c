// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use num_traits::{Float, NumCast};

use std::fmt::Debug;

/// Floating-point coordinate type used throughout the crate.
///
/// IEEE semantics are relied upon: flat triangles produce an infinite
/// circumradius and `x / inf == 0`.
pub trait Scalar: Float + Debug + Send + Sync + 'static {
    fn half() -> Self {
        Self::from_num_den(1, 2)
    }

    fn from_num_den(num: i32, den: i32) -> Self {
        let n = <Self as NumCast>::from(num).unwrap_or_else(Self::nan);
        let d = <Self as NumCast>::from(den).unwrap_or_else(Self::nan);
        n / d
    }

    /// Lossy conversion from `f64`, used for user-facing thresholds.
    fn from_f64(v: f64) -> Self {
        <Self as NumCast>::from(v).unwrap_or_else(Self::nan)
    }
}

impl<T> Scalar for T where T: Float + Debug + Send + Sync + 'static {}
