mod boolean_sparse;
mod fill;
mod isosurface;
mod multibox;

use std::collections::HashSet;
use voxkit3d::math::{Point, Vector};
use voxkit3d::shape::DenseVoxels;

/// A grid where each cell is occupied with the given probability.
pub fn random_grid(rng: &mut oorandom::Rand32, shape: [usize; 3], density: f32) -> DenseVoxels {
    let data = (0..shape[0] * shape[1] * shape[2])
        .map(|_| rng.rand_float() < density)
        .collect();
    DenseVoxels::from_vec(shape, data).unwrap()
}

/// A random sparse voxel set with coordinates in `[min, min + extent)`.
pub fn random_sparse(
    rng: &mut oorandom::Rand32,
    len: usize,
    min: i64,
    extent: u32,
) -> Vec<Point<i64>> {
    (0..len)
        .map(|_| {
            Point::new(
                min + rng.rand_range(0..extent) as i64,
                min + rng.rand_range(0..extent) as i64,
                min + rng.rand_range(0..extent) as i64,
            )
        })
        .collect()
}

pub fn as_set(indices: &[Point<i64>]) -> HashSet<[i64; 3]> {
    indices.iter().map(|p| [p.x, p.y, p.z]).collect()
}

/// The surface voxels of a sphere: cells whose squared distance `d2` to `center`
/// satisfies `r² - r < d2 <= r² + r`.
pub fn sphere_shell(center: Point<i64>, radius: i64) -> Vec<Point<i64>> {
    ball_cells(center, radius, true)
}

/// The cells of a sphere, surface included: `d2 <= r² + r`.
pub fn sphere_solid(center: Point<i64>, radius: i64) -> Vec<Point<i64>> {
    ball_cells(center, radius, false)
}

fn ball_cells(center: Point<i64>, radius: i64, shell_only: bool) -> Vec<Point<i64>> {
    let r2 = radius * radius;
    let mut cells = vec![];

    for i in -radius - 1..=radius + 1 {
        for j in -radius - 1..=radius + 1 {
            for k in -radius - 1..=radius + 1 {
                let d2 = i * i + j * j + k * k;
                if d2 <= r2 + radius && (!shell_only || d2 > r2 - radius) {
                    cells.push(center + Vector::new(i, j, k));
                }
            }
        }
    }

    cells
}
