use voxkit3d::math::Point;
use voxkit3d::shape::Color;
use voxkit3d::transformation::to_trimesh::{multibox, MultiboxColors, BOX_FACES};
use voxkit3d::transformation::voxelization::VoxelizationError;

#[test]
fn two_red_boxes() {
    let centers = [Point::new(0.0, 0.0, 0.0), Point::new(2.0, 0.0, 0.0)];
    let colors = MultiboxColors::from(Color::from([1.0, 0.0, 0.0]));
    let mesh = multibox(&centers, Some(&colors)).unwrap();

    assert_eq!(mesh.num_vertices(), 16);
    assert_eq!(mesh.num_triangles(), 2 * BOX_FACES);
    let face_colors = mesh.face_colors().unwrap();
    assert_eq!(face_colors.len(), 24);
    assert!(face_colors.iter().all(|c| *c == Color::RED));

    let (mins, maxs) = mesh.aabb().unwrap();
    assert_eq!(mins, Point::new(-0.5, -0.5, -0.5));
    assert_eq!(maxs, Point::new(2.5, 0.5, 0.5));
}

#[test]
fn overlapping_boxes_keep_their_vertices() {
    let centers = [Point::new(0.0, 0.0, 0.0); 3];
    let mesh = multibox(&centers, None).unwrap();
    assert_eq!(mesh.num_vertices(), 24);
    assert_eq!(mesh.vertices()[0..8], mesh.vertices()[16..24]);
    assert!(mesh.is_watertight());
}

#[test]
fn per_box_color_count_must_match() {
    let centers = [Point::new(0.0, 0.0, 0.0)];
    let colors = MultiboxColors::PerBox(vec![Color::RED, Color::GREEN]);
    assert_eq!(
        multibox(&centers, Some(&colors)),
        Err(VoxelizationError::ShapeMismatch {
            expected: 1,
            found: 2
        })
    );
}

#[test]
fn off_export_of_boxes() {
    let mesh = multibox(&[Point::new(1.0, 1.0, 1.0)], None).unwrap();
    let off = mesh.to_off_string(3);
    let mut lines = off.lines();

    assert_eq!(lines.next(), Some("OFF"));
    assert_eq!(lines.next(), Some("8 12 0"));
    assert_eq!(lines.next(), Some("0.500 0.500 1.500"));
    assert_eq!(off.lines().filter(|l| l.starts_with("3 ")).count(), 12);
}
