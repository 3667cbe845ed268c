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

use ahash::AHashMap;
use tracing::debug;

use crate::error::{TriError, TriResult};

/// Neighbor slot `j` of a triangle refers to the triangle across the edge
/// `(t[j], t[(j + 1) % 3])`; `None` marks a border edge.
pub type NeighborRow = [Option<usize>; 3];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Edge(usize, usize);

impl Edge {
    #[inline]
    fn new(a: usize, b: usize) -> Self {
        if a < b { Edge(a, b) } else { Edge(b, a) }
    }
}

#[inline]
fn tri_edges(t: &[usize; 3]) -> [(usize, usize); 3] {
    [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])]
}

/// Build the neighbor table from connectivity alone.
///
/// Masked triangles get no neighbors and are nobody's neighbor.
pub fn build_neighbors(
    triangles: &[[usize; 3]],
    mask: Option<&[bool]>,
) -> TriResult<Vec<NeighborRow>> {
    let is_masked = |ti: usize| mask.is_some_and(|m| m[ti]);

    // undirected edge -> up to 2 (triangle, slot) uses
    let mut edge2tris: AHashMap<Edge, [Option<(usize, usize)>; 2]> =
        AHashMap::with_capacity(triangles.len() * 3);

    for (ti, t) in triangles.iter().enumerate() {
        if is_masked(ti) {
            continue;
        }
        for (slot, (u, v)) in tri_edges(t).into_iter().enumerate() {
            let e = Edge::new(u, v);
            let uses = edge2tris.entry(e).or_insert([None, None]);
            match *uses {
                [None, _] => uses[0] = Some((ti, slot)),
                [Some(_), None] => uses[1] = Some((ti, slot)),
                [Some(_), Some(_)] => return Err(TriError::NonManifoldEdge(e.0, e.1)),
            }
        }
    }

    let mut neighbors = vec![[None; 3]; triangles.len()];
    let mut boundary_edges = 0usize;
    for uses in edge2tris.values() {
        match *uses {
            [Some((ta, sa)), Some((tb, sb))] => {
                neighbors[ta][sa] = Some(tb);
                neighbors[tb][sb] = Some(ta);
            }
            _ => boundary_edges += 1,
        }
    }

    debug!(
        "Built neighbors for {} triangles: {} edges, {} on the border",
        triangles.len(),
        edge2tris.len(),
        boundary_edges
    );
    Ok(neighbors)
}

/// Validate a table using the `-1` sentinel and convert it.
pub fn neighbors_from_raw(raw: &[[i64; 3]], ntri: usize) -> TriResult<Vec<NeighborRow>> {
    if raw.len() != ntri {
        return Err(TriError::NeighborsLengthMismatch {
            expected: ntri,
            actual: raw.len(),
        });
    }
    raw.iter()
        .enumerate()
        .map(|(ti, row)| {
            let mut out = [None; 3];
            for (slot, &n) in row.iter().enumerate() {
                out[slot] = match n {
                    -1 => None,
                    n if n >= 0 && (n as u64) < ntri as u64 => Some(n as usize),
                    n => {
                        return Err(TriError::InvalidNeighborIndex {
                            triangle: ti,
                            neighbor: n,
                            triangle_count: ntri,
                        });
                    }
                };
            }
            Ok(out)
        })
        .collect()
}

/// Back to the `-1` sentinel form.
pub fn neighbors_to_raw(neighbors: &[NeighborRow]) -> Vec<[i64; 3]> {
    neighbors
        .iter()
        .map(|row| row.map(|n| n.map_or(-1, |t| t as i64)))
        .collect()
}
