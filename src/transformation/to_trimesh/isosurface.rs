use crate::math::{Point, Real, Vector};
use crate::shape::DenseVoxels;
use crate::transformation::voxelization::VoxelizationError;
use alloc::vec::Vec;
use fast_surface_nets::ndshape::Shape;
use fast_surface_nets::{surface_nets, SurfaceNetsBuffer};

/// An algorithm extracting the level set of a sampled scalar field as a triangle mesh.
///
/// The samples are laid out in row-major order (the first axis varies slowest), like
/// the cells of a [`DenseVoxels`](crate::shape::DenseVoxels). Samples smaller than `level`
/// are inside the extracted surface. The returned vertices are expressed in the frame
/// where the sample `[i, j, k]` lies at `[i, j, k]` multiplied component-wise by `spacing`.
pub trait IsosurfaceExtractor {
    /// Extracts the `level` isosurface of the given volume.
    fn extract(
        &self,
        samples: &[f32],
        shape: [usize; 3],
        level: f32,
        spacing: &Vector<Real>,
    ) -> Result<Isosurface, VoxelizationError>;
}

/// The result of an isosurface extraction.
#[derive(Clone, Debug, PartialEq)]
pub enum Isosurface {
    /// Only the vertices and faces are known.
    ///
    /// Extractors returning this variant don’t guarantee that the surface is watertight.
    Legacy {
        /// The vertex buffer.
        vertices: Vec<Point<Real>>,
        /// The index buffer.
        faces: Vec<[u32; 3]>,
    },
    /// Vertices, faces, per-vertex normals, and per-vertex field values.
    WithNormals {
        /// The vertex buffer.
        vertices: Vec<Point<Real>>,
        /// The index buffer.
        faces: Vec<[u32; 3]>,
        /// One unit normal per vertex.
        normals: Vec<Vector<Real>>,
        /// One field value per vertex.
        values: Vec<f32>,
    },
}

impl Isosurface {
    /// Builds an isosurface from the parts returned by an extraction routine.
    ///
    /// Two parts (vertices and faces) make a [`Isosurface::Legacy`] result, four parts a
    /// [`Isosurface::WithNormals`] one. Any other combination is rejected with
    /// [`VoxelizationError::UnsupportedResultShape`].
    pub fn from_parts(
        vertices: Vec<Point<Real>>,
        faces: Vec<[u32; 3]>,
        normals: Option<Vec<Vector<Real>>>,
        values: Option<Vec<f32>>,
    ) -> Result<Self, VoxelizationError> {
        match (normals, values) {
            (None, None) => Ok(Self::Legacy { vertices, faces }),
            (Some(normals), Some(values)) => Ok(Self::WithNormals {
                vertices,
                faces,
                normals,
                values,
            }),
            _ => Err(VoxelizationError::UnsupportedResultShape { parts: 3 }),
        }
    }

    /// The vertices of this isosurface.
    pub fn vertices(&self) -> &[Point<Real>] {
        match self {
            Self::Legacy { vertices, .. } | Self::WithNormals { vertices, .. } => vertices,
        }
    }

    /// The faces of this isosurface.
    pub fn faces(&self) -> &[[u32; 3]] {
        match self {
            Self::Legacy { faces, .. } | Self::WithNormals { faces, .. } => faces,
        }
    }

    /// Is this a result without normals?
    pub fn is_legacy(&self) -> bool {
        matches!(self, Self::Legacy { .. })
    }
}

/// Isosurface extraction with the Surface Nets algorithm.
///
/// This places one vertex inside each cell crossed by the surface and connects the vertices
/// of the four cells around each crossed edge. Faces are never dropped at the boundary of
/// the volume: the volume is internally extended by one layer of samples copied from its
/// border. As a result, the surface is closed wherever it doesn’t cross the border of the
/// volume.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SurfaceNets;

/// Row-major lattice shape handed to `fast-surface-nets`.
#[derive(Copy, Clone, Debug)]
struct SampleShape {
    dims: [u32; 3],
}

impl Shape<3> for SampleShape {
    type Coord = u32;

    #[inline]
    fn as_array(&self) -> [u32; 3] {
        self.dims
    }

    fn size(&self) -> u32 {
        self.dims[0] * self.dims[1] * self.dims[2]
    }

    fn usize(&self) -> usize {
        self.size() as usize
    }

    fn linearize(&self, coords: [u32; 3]) -> u32 {
        let [x, y, z] = coords;
        (x * self.dims[1] + y) * self.dims[2] + z
    }

    fn delinearize(&self, i: u32) -> [u32; 3] {
        let z = i % self.dims[2];
        let xy = i / self.dims[2];
        [xy / self.dims[1], xy % self.dims[1], z]
    }
}

impl IsosurfaceExtractor for SurfaceNets {
    fn extract(
        &self,
        samples: &[f32],
        shape: [usize; 3],
        level: f32,
        spacing: &Vector<Real>,
    ) -> Result<Isosurface, VoxelizationError> {
        let expected = DenseVoxels::num_cells(shape)?;
        if samples.len() != expected {
            return Err(VoxelizationError::ShapeMismatch {
                expected,
                found: samples.len(),
            });
        }

        if expected == 0 {
            return Isosurface::from_parts(vec![], vec![], Some(vec![]), Some(vec![]));
        }

        let padded = shape.map(|e| e + 2);
        let cells = padded.iter().fold(1usize, |acc, e| acc.saturating_mul(*e));
        if cells > u32::MAX as usize {
            return Err(VoxelizationError::GridTooLarge { cells });
        }
        let grid = SampleShape {
            dims: padded.map(|e| e as u32),
        };

        // The signed field, with the border samples repeated once on every side.
        let mut sdf = Vec::with_capacity(cells);
        for i in 0..padded[0] {
            let si = i.saturating_sub(1).min(shape[0] - 1);
            for j in 0..padded[1] {
                let sj = j.saturating_sub(1).min(shape[1] - 1);
                for k in 0..padded[2] {
                    let sk = k.saturating_sub(1).min(shape[2] - 1);
                    sdf.push(samples[(si * shape[1] + sj) * shape[2] + sk] - level);
                }
            }
        }

        let mut buffer = SurfaceNetsBuffer::default();
        surface_nets(&sdf, &grid, [0; 3], grid.dims.map(|e| e - 1), &mut buffer);

        let to_vector =
            |v: &[f32; 3]| Vector::new(Real::from(v[0]), Real::from(v[1]), Real::from(v[2]));
        let vertices = buffer
            .positions
            .iter()
            .map(|p| Point::from((to_vector(p) - Vector::repeat(1.0)).component_mul(spacing)))
            .collect();
        // The gradients are computed in lattice space.
        let normals = buffer
            .normals
            .iter()
            .map(|n| {
                to_vector(n)
                    .component_div(spacing)
                    .try_normalize(0.0)
                    .unwrap_or_else(Vector::zeros)
            })
            .collect();
        let values = buffer
            .surface_points
            .iter()
            .map(|p| {
                (0..8u32)
                    .map(|c| {
                        let corner = [p[0] + (c & 1), p[1] + ((c >> 1) & 1), p[2] + (c >> 2)];
                        sdf[grid.linearize(corner) as usize]
                    })
                    .fold(f32::NEG_INFINITY, f32::max)
                    + level
            })
            .collect();
        let faces = buffer
            .indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
            .collect();

        Isosurface::from_parts(vertices, faces, Some(normals), Some(values))
    }
}
