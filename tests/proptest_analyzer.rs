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

//! Property-based tests over jittered grids and random masks.

mod common;

use common::jittered_grid;
use proptest::prelude::*;
use tri_analyzer::{TriAnalyzer, Triangulation};

/// Jittered grid between 2 x 2 and 6 x 6 points.
fn arb_grid() -> impl Strategy<Value = Triangulation<f64>> {
    (2usize..=6, 2usize..=6, any::<u64>())
        .prop_map(|(nx, ny, seed)| jittered_grid(nx, ny, 0.3, seed))
}

/// Jittered grid with a random mask.
fn arb_masked_grid() -> impl Strategy<Value = Triangulation<f64>> {
    arb_grid().prop_flat_map(|tri| {
        let ntri = tri.num_triangles();
        prop::collection::vec(any::<bool>(), ntri)
            .prop_map(move |mask| tri.clone().with_mask(mask).unwrap())
    })
}

proptest! {
    #[test]
    fn circle_ratios_are_bounded(tri in arb_grid(), rescale in any::<bool>()) {
        let ratios = TriAnalyzer::new(&tri).circle_ratios(rescale).unwrap();
        prop_assert_eq!(ratios.len(), tri.num_triangles());
        for r in ratios.data() {
            prop_assert!(*r >= 0.0 && *r <= 0.5 + 1e-12, "ratio {} out of range", r);
        }
    }

    #[test]
    fn circle_ratios_translation_invariant(
        tri in arb_grid(),
        dx in -100.0..100.0f64,
        dy in -100.0..100.0f64,
    ) {
        let moved = Triangulation::new(
            tri.x().iter().map(|v| v + dx).collect(),
            tri.y().iter().map(|v| v + dy).collect(),
            tri.triangles().to_vec(),
        )
        .unwrap();
        let a = TriAnalyzer::new(&tri).circle_ratios(true).unwrap();
        let b = TriAnalyzer::new(&moved).circle_ratios(true).unwrap();
        for (ra, rb) in a.data().iter().zip(b.data()) {
            prop_assert!((ra - rb).abs() < 1e-9);
        }
    }

    #[test]
    fn flat_tri_mask_extends_input_mask(
        tri in arb_masked_grid(),
        min_ratio in 0.0..0.6f64,
        rescale in any::<bool>(),
    ) {
        let tri = tri.with_computed_neighbors().unwrap();
        let mask = TriAnalyzer::new(&tri).get_flat_tri_mask(min_ratio, rescale).unwrap();
        prop_assert_eq!(mask.len(), tri.num_triangles());
        for (ti, &m) in mask.iter().enumerate() {
            if tri.is_masked(ti) {
                prop_assert!(m);
            }
        }
    }

    #[test]
    fn flat_tri_mask_is_idempotent(tri in arb_masked_grid(), min_ratio in 0.0..0.6f64) {
        let first = tri.clone().with_computed_neighbors().unwrap();
        let mask = TriAnalyzer::new(&first).get_flat_tri_mask(min_ratio, false).unwrap();

        let second = tri
            .with_mask(mask.clone())
            .unwrap()
            .with_computed_neighbors()
            .unwrap();
        let again = TriAnalyzer::new(&second).get_flat_tri_mask(min_ratio, false).unwrap();
        prop_assert_eq!(again, mask);
    }

    #[test]
    fn flat_tri_mask_only_removes_bad_triangles(
        tri in arb_masked_grid(),
        min_ratio in 0.0..0.6f64,
    ) {
        let tri = tri.with_computed_neighbors().unwrap();
        let analyzer = TriAnalyzer::new(&tri);
        let ratios = analyzer.circle_ratios(false).unwrap();
        let mask = analyzer.get_flat_tri_mask(min_ratio, false).unwrap();
        for (ti, &m) in mask.iter().enumerate() {
            if m && !tri.is_masked(ti) {
                prop_assert!(ratios.data()[ti] < min_ratio);
            }
        }
    }

    #[test]
    fn compression_round_trip(tri in arb_masked_grid()) {
        let c = TriAnalyzer::new(&tri).compressed_triangulation();
        prop_assert_eq!(c.triangles.len(), tri.masked_triangles().len());
        prop_assert_eq!(c.x.len(), c.y.len());

        for (ti, t) in tri.triangles().iter().enumerate() {
            match c.tri_renum[ti] {
                None => prop_assert!(tri.is_masked(ti)),
                Some(ci) => {
                    for k in 0..3 {
                        prop_assert_eq!(c.node_renum[t[k]], Some(c.triangles[ci][k]));
                    }
                }
            }
        }
        let used = c.node_renum.iter().filter(|r| r.is_some()).count();
        prop_assert_eq!(used, c.x.len());
    }
}
