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

//! Error types for triangulation analysis.

use thiserror::Error;

/// Result type for triangulation operations.
pub type TriResult<T> = Result<T, TriError>;

/// Errors raised at the triangulation boundary or by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriError {
    /// The x and y coordinate arrays differ in length.
    #[error("x and y must have the same length (got {x_len} and {y_len})")]
    CoordinateLengthMismatch {
        /// Number of x coordinates.
        x_len: usize,
        /// Number of y coordinates.
        y_len: usize,
    },

    /// A triangle references a point that does not exist.
    #[error("triangle {triangle} references point {index} (triangulation has {point_count} points)")]
    InvalidPointIndex {
        /// Offending triangle.
        triangle: usize,
        /// The invalid point index.
        index: usize,
        /// Total number of points.
        point_count: usize,
    },

    /// The mask does not have one entry per triangle.
    #[error("mask length {actual} does not match the number of triangles {expected}")]
    MaskLengthMismatch {
        /// Number of triangles.
        expected: usize,
        /// Length of the supplied mask.
        actual: usize,
    },

    /// The neighbor table does not have one row per triangle.
    #[error("neighbors length {actual} does not match the number of triangles {expected}")]
    NeighborsLengthMismatch {
        /// Number of triangles.
        expected: usize,
        /// Rows in the supplied table.
        actual: usize,
    },

    /// A neighbor slot is neither -1 nor a valid triangle index.
    #[error("triangle {triangle} has invalid neighbor {neighbor} (valid range is -1..{triangle_count})")]
    InvalidNeighborIndex {
        /// Offending triangle.
        triangle: usize,
        /// The raw neighbor value.
        neighbor: i64,
        /// Total number of triangles.
        triangle_count: usize,
    },

    /// More than two unmasked triangles share an edge.
    #[error("edge ({0}, {1}) is shared by more than two triangles")]
    NonManifoldEdge(usize, usize),

    /// The operation needs the neighbor table, which was never set.
    #[error("triangulation has no neighbor information")]
    MissingNeighbors,

    /// Every triangle is masked, so no point is in use.
    #[error("triangulation has no unmasked triangles")]
    NoUnmaskedTriangles,
}
