use crate::{as_set, random_sparse};
use voxkit3d::math::Point;
use voxkit3d::transformation::voxelization::{boolean_sparse, BooleanOp, VoxelizationError};

#[test]
fn set_algebra_properties() {
    let mut rng = oorandom::Rand32::new(5);

    for _ in 0..100 {
        let a = random_sparse(&mut rng, 30, -4, 6);
        let b = random_sparse(&mut rng, 30, -2, 6);
        let (set_a, set_b) = (as_set(&a), as_set(&b));

        let inter = as_set(&boolean_sparse(&a, &b, BooleanOp::Intersection).unwrap());
        let union = as_set(&boolean_sparse(&a, &b, BooleanOp::Union).unwrap());
        let diff = as_set(&boolean_sparse(&a, &b, BooleanOp::Difference).unwrap());

        assert!(inter.is_subset(&set_a) && inter.is_subset(&set_b));
        assert!(union.is_superset(&set_a) && union.is_superset(&set_b));
        assert_eq!(inter, &set_a & &set_b);
        assert_eq!(union, &set_a | &set_b);
        assert_eq!(diff, &set_a - &set_b);
    }
}

#[test]
fn self_intersection_is_identity() {
    let mut rng = oorandom::Rand32::new(6);
    let a = random_sparse(&mut rng, 50, -10, 20);

    let mut expected: Vec<_> = as_set(&a).into_iter().collect();
    expected.sort_unstable();

    let result: Vec<_> = boolean_sparse(&a, &a, BooleanOp::Intersection)
        .unwrap()
        .iter()
        .map(|p| [p.x, p.y, p.z])
        .collect();
    assert_eq!(result, expected);
}

#[test]
fn far_apart_sets_stay_sparse() {
    let a = [Point::new(i64::MIN / 4, 0, 0)];
    let b = [Point::new(i64::MAX / 4, 1, -1)];

    assert!(boolean_sparse(&a, &b, BooleanOp::Intersection)
        .unwrap()
        .is_empty());
    assert_eq!(
        boolean_sparse(&a, &b, BooleanOp::Union).unwrap(),
        vec![a[0], b[0]]
    );
}

#[test]
fn empty_operands_are_rejected() {
    let a = [Point::new(1, 2, 3)];
    for op in [BooleanOp::Intersection, BooleanOp::Union, BooleanOp::Difference] {
        assert_eq!(
            boolean_sparse(&a, &[], op),
            Err(VoxelizationError::EmptyInput)
        );
        assert_eq!(
            boolean_sparse(&[], &a, op),
            Err(VoxelizationError::EmptyInput)
        );
    }
}
