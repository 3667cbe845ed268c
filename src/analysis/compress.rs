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
    error::TriResult,
    mesh::Triangulation,
    numeric::scalar::Scalar,
};

/// Minimal description of the unmasked part of a triangulation.
#[derive(Clone, Debug, PartialEq)]
pub struct CompressedTriangulation<T: Scalar> {
    /// Unmasked triangles, with point indices into `x`/`y`.
    pub triangles: Vec<[usize; 3]>,
    pub x: Vec<T>,
    pub y: Vec<T>,
    /// Original triangle index -> compressed index, `None` if masked.
    pub tri_renum: Vec<Option<usize>>,
    /// Original point index -> compressed index, `None` if unused.
    pub node_renum: Vec<Option<usize>>,
}

impl<T: Scalar> CompressedTriangulation<T> {
    pub(crate) fn from_triangulation(tri: &Triangulation<T>) -> Self {
        let tri_renum = total_to_compress_renum(tri.mask(), tri.num_triangles());

        let node_unused: Vec<bool> = tri.point_usage().iter().map(|&c| c == 0).collect();
        let node_renum = total_to_compress_renum(Some(node_unused.as_slice()), tri.num_points());

        let (x, y): (Vec<T>, Vec<T>) = tri
            .points()
            .iter()
            .zip(&node_unused)
            .filter(|&(_, &unused)| !unused)
            .map(|(p, _)| (p.x, p.y))
            .unzip();

        // Every point of an unmasked triangle is used.
        let triangles = tri
            .masked_triangles()
            .into_iter()
            .filter_map(|t| {
                let [a, b, c] = t.map(|v| node_renum[v]);
                Some([a?, b?, c?])
            })
            .collect();

        Self {
            triangles,
            x,
            y,
            tri_renum,
            node_renum,
        }
    }

    /// A fresh, unmasked triangulation over the kept points.
    pub fn to_triangulation(&self) -> TriResult<Triangulation<T>> {
        Triangulation::new(self.x.clone(), self.y.clone(), self.triangles.clone())
    }
}

/// Renumbering table from a full index range to the compressed one.
///
/// Excluded slots (`mask[i] == true`) map to `None`; the others map to their
/// rank among the kept slots. Without a mask this is the identity over `0..n`.
pub fn total_to_compress_renum(mask: Option<&[bool]>, n: usize) -> Vec<Option<usize>> {
    match mask {
        None => (0..n).map(Some).collect(),
        Some(mask) => {
            debug_assert_eq!(mask.len(), n);
            let mut next = 0usize;
            mask.iter()
                .map(|&excluded| {
                    if excluded {
                        None
                    } else {
                        next += 1;
                        Some(next - 1)
                    }
                })
                .collect()
        }
    }
}

/// Back to the `-1` sentinel form.
pub fn renum_to_raw(renum: &[Option<usize>]) -> Vec<i64> {
    renum.iter().map(|r| r.map_or(-1, |i| i as i64)).collect()
}
