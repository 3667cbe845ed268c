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

//! Analysis and repair of unstructured triangular grids for plotting.
//!
//! - [`geometry`]: points, bounds and per-triangle shape measures
//! - [`mesh`]: the [`Triangulation`] container, masks and neighbor tables
//! - [`analysis`]: [`TriAnalyzer`], which rescales a grid, measures triangle
//!   flatness, masks flat border triangles and compresses masked grids
//!
//! # Example
//!
//! ```
//! use tri_analyzer::{TriAnalyzer, Triangulation};
//!
//! // Unit square split along a diagonal.
//! let tri = Triangulation::<f64>::new(
//!     vec![0.0, 1.0, 1.0, 0.0],
//!     vec![0.0, 0.0, 1.0, 1.0],
//!     vec![[0, 1, 2], [0, 2, 3]],
//! )
//! .unwrap()
//! .with_computed_neighbors()
//! .unwrap();
//!
//! let analyzer = TriAnalyzer::new(&tri);
//! let ratios = analyzer.circle_ratios(true).unwrap();
//! assert!((ratios.data()[0] - 0.4142).abs() < 1e-4);
//!
//! let mask = analyzer.get_flat_tri_mask(0.6, true).unwrap();
//! assert_eq!(mask, vec![true, true]);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod analysis;
mod error;
pub mod geometry;
pub mod mesh;
pub mod numeric;

pub use analysis::{CompressedTriangulation, FlatTriParams, TriAnalyzer};
pub use error::{TriError, TriResult};
pub use geometry::Point2;
pub use mesh::{MaskedArray, Triangulation};
pub use numeric::Scalar;
