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

//! Shape measures of a single triangle.

use crate::geometry::Point2;
use crate::numeric::scalar::Scalar;

/// Lengths of the sides `p0->p1`, `p1->p2`, `p2->p0`.
#[inline]
pub fn side_lengths<T: Scalar>(p0: &Point2<T>, p1: &Point2<T>, p2: &Point2<T>) -> [T; 3] {
    [(p1 - p0).norm(), (p2 - p1).norm(), (p0 - p2).norm()]
}

/// Incircle and circumcircle radii `(r, R)`.
///
/// A flat triangle (Heron product not strictly positive) has `R = +inf` and
/// `r = 0`; no NaN is produced, even when all three vertices coincide.
pub fn circle_radii<T: Scalar>(p0: &Point2<T>, p1: &Point2<T>, p2: &Point2<T>) -> (T, T) {
    let [a, b, c] = side_lengths(p0, p1, p2);
    let s = (a + b + c) * T::half();
    // Heron: s(s-a)(s-b)(s-c), written with the side sums.
    let prod = s * (a + b - s) * (a + c - s) * (b + c - s);
    let abc = a * b * c;
    let four = T::from_num_den(4, 1);

    // Round-off can push the product of a flat triangle slightly below zero.
    // NaN coordinates fall through and propagate.
    if prod <= T::zero() {
        return (T::zero(), T::infinity());
    }
    let circum_radius = abc / (four * prod.sqrt());
    let in_radius = abc / (four * circum_radius * s);
    (in_radius, circum_radius)
}

/// Ratio of the incircle radius over the circumcircle radius.
///
/// Lies in `[0, 0.5]`; `0.5` only for equilateral triangles, `0` for flat ones.
pub fn circle_ratio<T: Scalar>(p0: &Point2<T>, p1: &Point2<T>, p2: &Point2<T>) -> T {
    let (in_radius, circum_radius) = circle_radii(p0, p1, p2);
    in_radius / circum_radius
}
