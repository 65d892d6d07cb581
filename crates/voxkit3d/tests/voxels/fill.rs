use crate::{as_set, random_grid, random_sparse, sphere_shell, sphere_solid};
use voxkit3d::math::Point;
use voxkit3d::shape::DenseVoxels;
use voxkit3d::transformation::voxelization::{
    fill_base, fill_orthographic, fill_voxelization, sparse_to_matrix, VoxelizationError,
};

#[test]
fn fill_hollow_cube_center() {
    let mut shell = vec![];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                if [i, j, k] != [1, 1, 1] {
                    shell.push(Point::new(i, j, k));
                }
            }
        }
    }
    assert_eq!(shell.len(), 26);

    let filled = fill_base(&shell).unwrap();
    assert_eq!(filled.len(), 27);
    assert!(filled.contains(&Point::new(1, 1, 1)));
}

#[test]
fn fill_hollow_box() {
    let (a, b, c) = (4, 6, 5);
    let mut shell = vec![];
    for i in 0..a {
        for j in 0..b {
            for k in 0..c {
                if i == 0 || j == 0 || k == 0 || i == a - 1 || j == b - 1 || k == c - 1 {
                    shell.push(Point::new(i + 2, j, k + 7));
                }
            }
        }
    }

    let filled = fill_base(&shell).unwrap();
    assert_eq!(filled.len() as i64, a * b * c);
    assert!(as_set(&shell).is_subset(&as_set(&filled)));
}

#[test]
fn fill_sphere_shell() {
    for radius in [3, 5, 8] {
        let center = Point::new(radius, radius, radius);
        let shell = sphere_shell(center, radius);
        let filled = fill_voxelization(&shell).unwrap();

        assert!(filled.len() >= shell.len());
        assert!(as_set(&shell).is_subset(&as_set(&filled)));
        assert_eq!(as_set(&filled), as_set(&sphere_solid(center, radius)));
    }
}

#[test]
fn fill_never_removes_voxels() {
    let mut rng = oorandom::Rand32::new(3);

    for _ in 0..30 {
        let surface = random_sparse(&mut rng, 40, -1, 8);
        let filled = fill_base(&surface).unwrap();
        assert!(as_set(&surface).is_subset(&as_set(&filled)));
    }
}

#[test]
fn fill_output_is_sorted() {
    let shell = sphere_shell(Point::new(4, 4, 4), 4);
    let filled = fill_base(&shell).unwrap();
    assert!(filled
        .windows(2)
        .all(|w| [w[0].x, w[0].y, w[0].z] < [w[1].x, w[1].y, w[1].z]));
}

#[test]
fn fill_rejects_bad_inputs() {
    assert_eq!(fill_base(&[]), Err(VoxelizationError::EmptyInput));
    assert!(matches!(
        fill_base(&[Point::new(5, 5, -3)]),
        Err(VoxelizationError::NegativeIndex { .. })
    ));
}

#[test]
fn orthographic_fill_of_sphere_shell() {
    let center = Point::new(6, 6, 6);
    let shell = sparse_to_matrix(&sphere_shell(center, 6)).unwrap();
    let solid = sparse_to_matrix(&sphere_solid(center, 6)).unwrap();
    assert_eq!(fill_orthographic(&shell), solid);
}

#[test]
fn orthographic_fill_is_idempotent() {
    let mut rng = oorandom::Rand32::new(4);

    for _ in 0..50 {
        let grid = random_grid(&mut rng, [6, 5, 7], 0.2);
        let filled = fill_orthographic(&grid);
        assert_eq!(fill_orthographic(&filled), filled);

        for cell in grid.occupied() {
            assert!(filled.get(cell));
        }
    }

    let empty = DenseVoxels::new([3, 3, 3]);
    assert_eq!(fill_orthographic(&empty), empty);
}
