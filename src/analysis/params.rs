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

/// Parameters for [`TriAnalyzer::flat_tri_mask`](crate::analysis::TriAnalyzer::flat_tri_mask).
///
/// # Example
///
/// ```
/// use tri_analyzer::analysis::FlatTriParams;
///
/// let params = FlatTriParams::default().with_min_circle_ratio(0.05);
/// assert!(params.rescale);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatTriParams {
    /// Border triangles with an incircle/circumcircle radius ratio below
    /// this value are removed.
    ///
    /// Default: `0.01`
    pub min_circle_ratio: f64,

    /// Rescale the unmasked triangles into a unit square before measuring,
    /// so that a difference of scale between the axes does not flatten
    /// every triangle.
    ///
    /// Default: `true`
    pub rescale: bool,
}

impl Default for FlatTriParams {
    fn default() -> Self {
        Self {
            min_circle_ratio: 0.01,
            rescale: true,
        }
    }
}

impl FlatTriParams {
    #[must_use]
    pub fn with_min_circle_ratio(mut self, min_circle_ratio: f64) -> Self {
        self.min_circle_ratio = min_circle_ratio;
        self
    }

    #[must_use]
    pub fn with_rescale(mut self, rescale: bool) -> Self {
        self.rescale = rescale;
        self
    }
}
