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

use crate::{
    error::{TriError, TriResult},
    geometry::Point2,
    mesh::neighbors::{NeighborRow, build_neighbors, neighbors_from_raw},
    numeric::scalar::Scalar,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NeighborSource {
    /// Given by the caller; kept when the mask changes.
    Supplied,
    /// Derived from connectivity and mask; dropped when the mask changes.
    Computed,
}

/// An unstructured triangular grid: points, index triples, an optional
/// per-triangle mask and an optional neighbor table.
///
/// Every constructor and setter checks shapes and indices, so a value of this
/// type always satisfies the mesh contract.
#[derive(Clone, Debug)]
pub struct Triangulation<T: Scalar> {
    points: Vec<Point2<T>>,
    triangles: Vec<[usize; 3]>,
    mask: Option<Vec<bool>>,
    neighbors: Option<(Vec<NeighborRow>, NeighborSource)>,
}

impl<T: Scalar> Triangulation<T> {
    pub fn new(x: Vec<T>, y: Vec<T>, triangles: Vec<[usize; 3]>) -> TriResult<Self> {
        if x.len() != y.len() {
            return Err(TriError::CoordinateLengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        let points = x
            .into_iter()
            .zip(y)
            .map(|(x, y)| Point2 { x, y })
            .collect();
        Self::from_points(points, triangles)
    }

    pub fn from_points(points: Vec<Point2<T>>, triangles: Vec<[usize; 3]>) -> TriResult<Self> {
        let point_count = points.len();
        for (ti, t) in triangles.iter().enumerate() {
            if let Some(&index) = t.iter().find(|&&v| v >= point_count) {
                return Err(TriError::InvalidPointIndex {
                    triangle: ti,
                    index,
                    point_count,
                });
            }
        }
        Ok(Self {
            points,
            triangles,
            mask: None,
            neighbors: None,
        })
    }

    pub fn with_mask(mut self, mask: Vec<bool>) -> TriResult<Self> {
        self.set_mask(Some(mask))?;
        Ok(self)
    }

    /// Replace the mask. Neighbors computed by [`Self::compute_neighbors`]
    /// depend on the mask and are discarded; supplied neighbors are kept.
    pub fn set_mask(&mut self, mask: Option<Vec<bool>>) -> TriResult<()> {
        if let Some(m) = &mask {
            if m.len() != self.triangles.len() {
                return Err(TriError::MaskLengthMismatch {
                    expected: self.triangles.len(),
                    actual: m.len(),
                });
            }
        }
        self.mask = mask;
        if matches!(self.neighbors, Some((_, NeighborSource::Computed))) {
            self.neighbors = None;
        }
        Ok(())
    }

    pub fn with_neighbors(mut self, neighbors: Vec<NeighborRow>) -> TriResult<Self> {
        self.set_neighbors(neighbors)?;
        Ok(self)
    }

    pub fn set_neighbors(&mut self, neighbors: Vec<NeighborRow>) -> TriResult<()> {
        let ntri = self.triangles.len();
        if neighbors.len() != ntri {
            return Err(TriError::NeighborsLengthMismatch {
                expected: ntri,
                actual: neighbors.len(),
            });
        }
        for (ti, row) in neighbors.iter().enumerate() {
            if let Some(&Some(n)) = row.iter().find(|n| n.is_some_and(|n| n >= ntri)) {
                return Err(TriError::InvalidNeighborIndex {
                    triangle: ti,
                    neighbor: n as i64,
                    triangle_count: ntri,
                });
            }
        }
        self.neighbors = Some((neighbors, NeighborSource::Supplied));
        Ok(())
    }

    /// Set neighbors from a table using `-1` for border edges.
    pub fn set_neighbors_raw(&mut self, raw: &[[i64; 3]]) -> TriResult<()> {
        let neighbors = neighbors_from_raw(raw, self.triangles.len())?;
        self.neighbors = Some((neighbors, NeighborSource::Supplied));
        Ok(())
    }

    /// Derive the neighbor table from the connectivity and current mask.
    pub fn compute_neighbors(&mut self) -> TriResult<()> {
        let neighbors = build_neighbors(&self.triangles, self.mask.as_deref())?;
        self.neighbors = Some((neighbors, NeighborSource::Computed));
        Ok(())
    }

    pub fn with_computed_neighbors(mut self) -> TriResult<Self> {
        self.compute_neighbors()?;
        Ok(self)
    }

    pub fn clear_neighbors(&mut self) {
        self.neighbors = None;
    }

    pub fn points(&self) -> &[Point2<T>] {
        &self.points
    }

    pub fn point(&self, i: usize) -> &Point2<T> {
        &self.points[i]
    }

    pub fn x(&self) -> Vec<T> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn y(&self) -> Vec<T> {
        self.points.iter().map(|p| p.y).collect()
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    pub fn triangle_points(&self, ti: usize) -> [&Point2<T>; 3] {
        self.triangles[ti].map(|v| &self.points[v])
    }

    pub fn mask(&self) -> Option<&[bool]> {
        self.mask.as_deref()
    }

    #[inline]
    pub fn is_masked(&self, ti: usize) -> bool {
        self.mask.as_ref().is_some_and(|m| m[ti])
    }

    pub fn neighbors(&self) -> Option<&[NeighborRow]> {
        self.neighbors.as_ref().map(|(n, _)| n.as_slice())
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Unmasked triangles, in order.
    pub fn masked_triangles(&self) -> Vec<[usize; 3]> {
        self.triangles
            .iter()
            .enumerate()
            .filter(|&(ti, _)| !self.is_masked(ti))
            .map(|(_, t)| *t)
            .collect()
    }

    /// How many unmasked triangles reference each point.
    pub fn point_usage(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.points.len()];
        for t in self.masked_triangles() {
            for v in t {
                counts[v] += 1;
            }
        }
        counts
    }
}
