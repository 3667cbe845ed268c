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

#![allow(dead_code)]

use rand::{Rng, SeedableRng, rngs::StdRng};
use tri_analyzer::Triangulation;

pub const TOL: f64 = 1e-12;

pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Regular `nx` by `ny` point grid, each cell split along its diagonal.
pub fn grid(nx: usize, ny: usize) -> (Vec<f64>, Vec<f64>, Vec<[usize; 3]>) {
    let mut x = Vec::with_capacity(nx * ny);
    let mut y = Vec::with_capacity(nx * ny);
    for j in 0..ny {
        for i in 0..nx {
            x.push(i as f64);
            y.push(j as f64);
        }
    }
    let mut triangles = Vec::new();
    for j in 0..ny - 1 {
        for i in 0..nx - 1 {
            let a = j * nx + i;
            let b = a + 1;
            let c = a + nx + 1;
            let d = a + nx;
            triangles.push([a, b, c]);
            triangles.push([a, c, d]);
        }
    }
    (x, y, triangles)
}

pub fn grid_triangulation(nx: usize, ny: usize) -> Triangulation<f64> {
    let (x, y, triangles) = grid(nx, ny);
    Triangulation::new(x, y, triangles).unwrap()
}

/// Grid with every point moved by up to `amount` along each axis.
pub fn jittered_grid(nx: usize, ny: usize, amount: f64, seed: u64) -> Triangulation<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (mut x, mut y, triangles) = grid(nx, ny);
    for v in x.iter_mut().chain(y.iter_mut()) {
        *v += rng.random_range(-amount..amount);
    }
    Triangulation::new(x, y, triangles).unwrap()
}

/// Square with a sliver triangle (index 0) fully inside it.
///
/// Points: 0..4 square corners, 4 = P, 5 = Q, 6 = R with R just above PQ.
pub fn square_with_inner_sliver() -> Triangulation<f64> {
    let x = vec![0.0, 4.0, 4.0, 0.0, 1.0, 3.0, 2.0];
    let y = vec![0.0, 0.0, 4.0, 4.0, 2.0, 2.0, 2.01];
    let triangles = vec![
        [4, 5, 6],
        [0, 1, 5],
        [0, 5, 4],
        [0, 4, 3],
        [1, 2, 5],
        [3, 4, 6],
        [6, 5, 2],
        [3, 6, 2],
    ];
    Triangulation::new(x, y, triangles).unwrap()
}
