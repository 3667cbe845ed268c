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

mod common;

use common::{grid_triangulation, square_with_inner_sliver};
use tri_analyzer::{
    TriAnalyzer,
    analysis::{renum_to_raw, total_to_compress_renum},
};

#[test]
fn test_renum_helper() {
    let mask = [false, true, false, true, false];
    assert_eq!(
        total_to_compress_renum(Some(&mask[..]), 5),
        vec![Some(0), None, Some(1), None, Some(2)]
    );
    assert_eq!(
        total_to_compress_renum(None, 3),
        vec![Some(0), Some(1), Some(2)]
    );
    assert_eq!(
        renum_to_raw(&total_to_compress_renum(Some(&mask[..]), 5)),
        vec![0, -1, 1, -1, 2]
    );
    assert!(total_to_compress_renum(Some(&[true, true][..]), 2).iter().all(Option::is_none));
}

#[test]
fn test_compress_unmasked_is_identity() {
    let tri = grid_triangulation(3, 3);
    let c = TriAnalyzer::new(&tri).compressed_triangulation();
    assert_eq!(c.triangles, tri.triangles().to_vec());
    assert_eq!(c.x, tri.x());
    assert_eq!(c.y, tri.y());
    assert!(c.tri_renum.iter().enumerate().all(|(i, r)| *r == Some(i)));
    assert!(c.node_renum.iter().enumerate().all(|(i, r)| *r == Some(i)));
}

#[test]
fn test_compress_drops_masked_cell() {
    // 3 x 2 grid, right cell masked: points 2 and 5 become unused.
    let tri = grid_triangulation(3, 2)
        .with_mask(vec![false, false, true, true])
        .unwrap();
    let c = TriAnalyzer::new(&tri).compressed_triangulation();

    assert_eq!(c.tri_renum, vec![Some(0), Some(1), None, None]);
    assert_eq!(
        c.node_renum,
        vec![Some(0), Some(1), None, Some(2), Some(3), None]
    );
    assert_eq!(c.triangles, vec![[0, 1, 3], [0, 3, 2]]);
    assert_eq!(c.x, vec![0.0, 1.0, 0.0, 1.0]);
    assert_eq!(c.y, vec![0.0, 0.0, 1.0, 1.0]);
}

#[test]
fn test_compress_keeps_points_shared_with_unmasked_triangles() {
    let mut mask = vec![false; 8];
    mask[0] = true;
    let tri = square_with_inner_sliver().with_mask(mask).unwrap();
    let c = TriAnalyzer::new(&tri).compressed_triangulation();

    assert_eq!(c.triangles.len(), 7);
    assert_eq!(c.x.len(), 7);
    assert_eq!(c.tri_renum[0], None);
    assert_eq!(c.tri_renum[7], Some(6));
    assert!(c.node_renum.iter().all(Option::is_some));
}

#[test]
fn test_compress_renumbering_is_consistent() {
    let mask = vec![true, false, false, true, false, true, false, false];
    let tri = square_with_inner_sliver().with_mask(mask).unwrap();
    let c = TriAnalyzer::new(&tri).compressed_triangulation();

    for (ti, t) in tri.triangles().iter().enumerate() {
        match c.tri_renum[ti] {
            None => assert!(tri.is_masked(ti)),
            Some(ci) => {
                let renumbered = t.map(|v| c.node_renum[v]);
                assert!(renumbered.iter().all(Option::is_some));
                assert_eq!(renumbered.map(|v| v.unwrap()), c.triangles[ci]);
                for k in 0..3 {
                    let p = tri.point(t[k]);
                    let q = c.triangles[ci][k];
                    assert_eq!((c.x[q], c.y[q]), (p.x, p.y));
                }
            }
        }
    }
}

#[test]
fn test_compressed_triangulation_measures_the_same() {
    let mut mask = vec![false; 8];
    mask[3] = true;
    mask[4] = true;
    let tri = square_with_inner_sliver().with_mask(mask).unwrap();
    let analyzer = TriAnalyzer::new(&tri);
    let c = analyzer.compressed_triangulation();
    let compact = c.to_triangulation().unwrap();
    assert!(compact.mask().is_none());

    let full = analyzer.circle_ratios(false).unwrap().compressed();
    let small = TriAnalyzer::new(&compact).circle_ratios(false).unwrap();
    assert_eq!(full, small.data().to_vec());
}
