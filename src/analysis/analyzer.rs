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

use tracing::{debug, info, warn};

use crate::{
    analysis::{compress::CompressedTriangulation, params::FlatTriParams},
    error::{TriError, TriResult},
    geometry::{Aabb2, Point2, triangle::circle_ratio},
    mesh::{MaskedArray, Triangulation},
    numeric::scalar::Scalar,
};

/// Analysis and improvement tools over a borrowed [`Triangulation`].
///
/// Nothing here mutates the triangulation; masks are returned for the caller
/// to apply with [`Triangulation::set_mask`].
#[derive(Clone, Copy, Debug)]
pub struct TriAnalyzer<'a, T: Scalar> {
    triangulation: &'a Triangulation<T>,
}

impl<'a, T: Scalar> TriAnalyzer<'a, T> {
    pub fn new(triangulation: &'a Triangulation<T>) -> Self {
        Self { triangulation }
    }

    pub fn triangulation(&self) -> &'a Triangulation<T> {
        self.triangulation
    }

    /// Factors `(kx, ky)` such that the points used by unmasked triangles,
    /// scaled by them, fit exactly in a unit square.
    ///
    /// An axis along which every used point shares the same coordinate gets
    /// an infinite factor; this is not reported as an error.
    ///
    /// # Errors
    ///
    /// [`TriError::NoUnmaskedTriangles`] when no point is in use.
    pub fn scale_factors(&self) -> TriResult<(T, T)> {
        let usage = self.triangulation.point_usage();
        let used = self
            .triangulation
            .points()
            .iter()
            .zip(&usage)
            .filter(|&(_, &count)| count != 0)
            .map(|(p, _)| p);
        let bounds = Aabb2::from_points(used).ok_or(TriError::NoUnmaskedTriangles)?;

        let kx = T::one() / bounds.extent(0);
        let ky = T::one() / bounds.extent(1);
        if !kx.is_finite() || !ky.is_finite() {
            warn!("Degenerate extent of used points, scale factors ({:?}, {:?})", kx, ky);
        }
        Ok((kx, ky))
    }

    /// Incircle over circumcircle radius, per triangle.
    ///
    /// The ratio is at most `0.5`, reached by equilateral triangles; flat
    /// triangles give `0`. Below `0.01` a triangle is very flat.
    ///
    /// With `rescale`, coordinates are first multiplied by
    /// [`Self::scale_factors`] so that a difference of scale between the axes
    /// does not make every triangle look flat. Masked triangles are masked in
    /// the result.
    pub fn circle_ratios(&self, rescale: bool) -> TriResult<MaskedArray<T>> {
        let (kx, ky) = if rescale {
            self.scale_factors()?
        } else {
            (T::one(), T::one())
        };
        let pts: Vec<Point2<T>> = self
            .triangulation
            .points()
            .iter()
            .map(|p| p.scaled(kx, ky))
            .collect();

        let ratios = self
            .triangulation
            .triangles()
            .iter()
            .map(|t| circle_ratio(&pts[t[0]], &pts[t[1]], &pts[t[2]]))
            .collect();

        MaskedArray::new(ratios, self.triangulation.mask().map(<[bool]>::to_vec))
    }

    /// Mask removing the excessively flat triangles at the mesh border.
    ///
    /// Triangles are peeled off one border layer per pass: a triangle is
    /// removed only if its circle ratio is below `min_circle_ratio` and it
    /// shares an edge with the current border, so no hole is ever punched in
    /// the interior. Every triangle masked on input stays masked.
    ///
    /// # Errors
    ///
    /// [`TriError::MissingNeighbors`] when the triangulation carries no
    /// neighbor table.
    pub fn get_flat_tri_mask(&self, min_circle_ratio: T, rescale: bool) -> TriResult<Vec<bool>> {
        let neighbors = self
            .triangulation
            .neighbors()
            .ok_or(TriError::MissingNeighbors)?;
        let ntri = self.triangulation.num_triangles();

        let mut current_mask = match self.triangulation.mask() {
            Some(mask) => mask.to_vec(),
            None => vec![false; ntri],
        };
        if current_mask.iter().all(|&masked| masked) {
            return Ok(current_mask);
        }

        let mask_bad_ratio = self
            .circle_ratios(rescale)?
            .map_unmasked(false, |&r| r < min_circle_ratio)
            .filled(false);

        // Edges shared with an input-masked triangle are border edges, even
        // when the neighbor table was supplied without regard to the mask.
        let mut renum: Vec<Option<usize>> = (0..ntri)
            .map(|ti| (!current_mask[ti]).then_some(ti))
            .collect();
        let mut valid_neighbors = neighbors.to_vec();
        for slot in valid_neighbors.iter_mut().flatten() {
            *slot = slot.and_then(|n| renum[n]);
        }
        let mut passes = 0usize;
        let mut total_added = 0usize;

        loop {
            // Wavefront: unmasked triangles with at least one border edge.
            let added: Vec<usize> = (0..ntri)
                .filter(|&ti| {
                    !current_mask[ti]
                        && mask_bad_ratio[ti]
                        && valid_neighbors[ti].iter().any(Option::is_none)
                })
                .collect();
            if added.is_empty() {
                break;
            }
            passes += 1;
            total_added += added.len();
            debug!("Pass {}: masking {} border triangles", passes, added.len());

            for &ti in &added {
                current_mask[ti] = true;
                valid_neighbors[ti] = [None; 3];
                renum[ti] = None;
            }
            for slot in valid_neighbors.iter_mut().flatten() {
                *slot = slot.and_then(|n| renum[n]);
            }
        }

        info!(
            "Masked {} flat border triangles in {} passes",
            total_added, passes
        );
        Ok(current_mask)
    }

    /// [`Self::get_flat_tri_mask`] driven by a parameter struct.
    pub fn flat_tri_mask(&self, params: &FlatTriParams) -> TriResult<Vec<bool>> {
        self.get_flat_tri_mask(T::from_f64(params.min_circle_ratio), params.rescale)
    }

    /// Compress the triangulation, dropping masked triangles and the points
    /// they alone used, and renumber what is left.
    pub fn compressed_triangulation(&self) -> CompressedTriangulation<T> {
        CompressedTriangulation::from_triangulation(self.triangulation)
    }
}
