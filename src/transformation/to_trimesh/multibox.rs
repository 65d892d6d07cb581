use crate::math::{Point, Real};
use crate::shape::{Color, TriMesh};
use crate::transformation::voxelization::VoxelizationError;
use alloc::vec::Vec;

/// Number of triangles of the box instantiated by [`multibox`].
pub const BOX_FACES: usize = 12;

/// Number of vertices of the box instantiated by [`multibox`].
pub const BOX_VERTICES: usize = 8;

/// The colors of the boxes generated by [`multibox`].
#[derive(Clone, Debug, PartialEq)]
pub enum MultiboxColors {
    /// The same color for every box.
    Uniform(Color),
    /// One color per box.
    PerBox(Vec<Color>),
}

impl From<Color> for MultiboxColors {
    fn from(color: Color) -> Self {
        Self::Uniform(color)
    }
}

impl From<Vec<Color>> for MultiboxColors {
    fn from(colors: Vec<Color>) -> Self {
        Self::PerBox(colors)
    }
}

/// Builds a single mesh made of one unit box centered at each of the given points.
///
/// The boxes are never merged: each one keeps its own 8 vertices, even if it overlaps
/// another box. If `colors` is given, each face of a box gets that box’s color.
///
/// Fails with [`VoxelizationError::ShapeMismatch`] if per-box colors are given and their
/// number differs from the number of centers.
pub fn multibox(
    centers: &[Point<Real>],
    colors: Option<&MultiboxColors>,
) -> Result<TriMesh, VoxelizationError> {
    let (box_vtx, box_idx) = unit_cuboid();
    let mut vertices = Vec::with_capacity(centers.len() * BOX_VERTICES);
    let mut indices = Vec::with_capacity(centers.len() * BOX_FACES);

    for (i, center) in centers.iter().enumerate() {
        let base_id = (i * BOX_VERTICES) as u32;
        vertices.extend(box_vtx.iter().map(|pt| center + pt.coords));
        indices.extend(box_idx.iter().map(|tri| tri.map(|id| id + base_id)));
    }

    let mesh = TriMesh::new(vertices, indices)?;

    let face_colors = match colors {
        None => return Ok(mesh),
        Some(MultiboxColors::Uniform(color)) => vec![*color; mesh.num_triangles()],
        Some(MultiboxColors::PerBox(colors)) => {
            if colors.len() != centers.len() {
                return Err(VoxelizationError::ShapeMismatch {
                    expected: centers.len(),
                    found: colors.len(),
                });
            }

            colors
                .iter()
                .flat_map(|color| core::iter::repeat(*color).take(BOX_FACES))
                .collect()
        }
    };

    Ok(mesh.with_face_colors(face_colors)?)
}

/**
 * Generates a cuboid shape with a split index buffer.
 *
 * The cuboid is centered at the origin, and has its half extents set to 0.5.
 */
fn unit_cuboid() -> ([Point<Real>; BOX_VERTICES], [[u32; 3]; BOX_FACES]) {
    let coords = [
        Point::new(-0.5, -0.5, 0.5),
        Point::new(-0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, 0.5),
        Point::new(-0.5, 0.5, 0.5),
        Point::new(-0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, 0.5),
    ];

    let faces = [
        [4, 5, 0],
        [5, 1, 0],
        [5, 6, 1],
        [6, 2, 1],
        [6, 7, 3],
        [2, 6, 3],
        [7, 4, 0],
        [3, 7, 0],
        [0, 1, 2],
        [3, 0, 2],
        [7, 6, 5],
        [4, 7, 5],
    ];

    (coords, faces)
}
