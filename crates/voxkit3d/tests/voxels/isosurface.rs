use crate::{random_grid, sphere_shell};
use voxkit3d::math::{Point, Real, Vector};
use voxkit3d::shape::{DenseVoxels, Pitch};
use voxkit3d::transformation::to_trimesh::{
    matrix_to_isosurface, points_to_isosurface, Isosurface, IsosurfaceExtractor, SurfaceNets,
};
use voxkit3d::transformation::voxelization::{
    fill_base, indices_to_points, sparse_to_matrix, VoxelizationError,
};

/// Runs surface nets but drops the normals and values.
struct NormalFree;

impl IsosurfaceExtractor for NormalFree {
    fn extract(
        &self,
        samples: &[f32],
        shape: [usize; 3],
        level: f32,
        spacing: &Vector<Real>,
    ) -> Result<Isosurface, VoxelizationError> {
        let surface = SurfaceNets.extract(samples, shape, level, spacing)?;
        Isosurface::from_parts(surface.vertices().to_vec(), surface.faces().to_vec(), None, None)
    }
}

/// Returns normals but no values.
struct ThreeParts;

impl IsosurfaceExtractor for ThreeParts {
    fn extract(
        &self,
        _: &[f32],
        _: [usize; 3],
        _: f32,
        _: &Vector<Real>,
    ) -> Result<Isosurface, VoxelizationError> {
        Isosurface::from_parts(vec![], vec![], Some(vec![]), None)
    }
}

#[test]
fn single_voxel_mesh_is_watertight() {
    let mut grid = DenseVoxels::new([1, 1, 1]);
    grid.set([0, 0, 0], true);

    let mesh = matrix_to_isosurface(&grid, Pitch::Uniform(1.0), &SurfaceNets).unwrap();
    assert!(mesh.num_vertices() > 0);
    assert!(mesh.num_triangles() > 0);
    assert!(mesh.boundary_edges().is_empty());
    assert!(mesh.is_watertight());
}

#[test]
fn random_grids_give_closed_meshes() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..20 {
        let grid = random_grid(&mut rng, [4, 5, 3], 0.4);
        let mesh = matrix_to_isosurface(&grid, Pitch::Uniform(0.5), &SurfaceNets).unwrap();

        if grid.num_occupied() == 0 {
            assert_eq!(mesh.num_triangles(), 0);
        } else {
            assert!(mesh.is_watertight());
            assert_eq!(mesh.vertex_normals().unwrap().len(), mesh.num_vertices());
        }
    }
}

#[test]
fn mesh_stays_close_to_voxels() {
    let pitch = Vector::new(0.5, 1.0, 2.0);
    let shell = sphere_shell(Point::new(4, 4, 4), 4);
    let solid = sparse_to_matrix(&fill_base(&shell).unwrap()).unwrap();
    let mesh = matrix_to_isosurface(&solid, Pitch::PerAxis(pitch), &SurfaceNets).unwrap();

    let centers = indices_to_points(&shell, Some(Pitch::PerAxis(pitch)), None).unwrap();
    let (mins, maxs) = mesh.aabb().unwrap();
    let (cmins, cmaxs) = centers
        .iter()
        .fold((centers[0], centers[0]), |(a, b), p| (a.inf(p), b.sup(p)));

    // The surface passes between the boundary voxel centers and their empty neighbors.
    for d in 0..3 {
        assert!(mins[d] < cmins[d] && mins[d] > cmins[d] - pitch[d]);
        assert!(maxs[d] > cmaxs[d] && maxs[d] < cmaxs[d] + pitch[d]);
    }
    assert!(mesh.is_watertight());
}

#[test]
fn point_cloud_mesh() {
    let points: Vec<_> = (0..10)
        .map(|i| Point::new(1.0 + i as Real * 0.25, -2.0, 5.0))
        .collect();
    let mesh = points_to_isosurface(&points, Pitch::Uniform(0.25), &SurfaceNets).unwrap();
    let (mins, maxs) = mesh.aabb().unwrap();

    assert!(mins.x > 0.75 && mins.x < 1.0);
    assert!(maxs.x > 3.25 && maxs.x < 3.5);
    assert!(mins.y > -2.125 && maxs.y < -1.875);
    assert!(mesh.is_watertight());
}

#[test]
fn legacy_results_have_no_normals() {
    let mut grid = DenseVoxels::new([2, 2, 2]);
    grid.set([1, 1, 0], true);

    let mesh = matrix_to_isosurface(&grid, Pitch::Uniform(1.0), &NormalFree).unwrap();
    let reference = matrix_to_isosurface(&grid, Pitch::Uniform(1.0), &SurfaceNets).unwrap();

    assert!(mesh.vertex_normals().is_none());
    assert_eq!(mesh.vertices(), reference.vertices());
    assert_eq!(mesh.indices(), reference.indices());
}

#[test]
fn unsupported_result_shape() {
    let grid = DenseVoxels::new([1, 1, 1]);
    assert_eq!(
        matrix_to_isosurface(&grid, Pitch::Uniform(1.0), &ThreeParts),
        Err(VoxelizationError::UnsupportedResultShape { parts: 3 })
    );
}

#[test]
fn invalid_pitch() {
    let grid = DenseVoxels::new([1, 1, 1]);
    assert_eq!(
        matrix_to_isosurface(&grid, Pitch::Uniform(Real::NAN), &SurfaceNets),
        Err(VoxelizationError::InvalidPitch)
    );
}
