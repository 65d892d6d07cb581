use crate::math::{Point, Real, Vector};
use crate::shape::Color;
use crate::utils::hashmap::HashMap;
use crate::utils::SortedPair;
use alloc::vec::Vec;

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle references a vertex that doesn’t exist.
    #[error("the triangle {triangle} references the vertex {index} but the mesh only has {num_vertices} vertices.")]
    IndexOutOfBounds {
        /// The offending triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        index: u32,
        /// The number of vertices of the mesh.
        num_vertices: u32,
    },
    /// A per-vertex or per-face attribute buffer has the wrong length.
    #[error("expected {expected} {attribute}, found {found}.")]
    AttributeCountMismatch {
        /// The name of the attribute.
        attribute: &'static str,
        /// The number of elements the attribute must have.
        expected: usize,
        /// The number of elements that were given.
        found: usize,
    },
}

/// A triangle mesh, with optional per-vertex normals and per-face or per-vertex colors.
///
/// This is the artifact produced by the meshing functions of this crate. The mesh owns its
/// buffers and nothing else: no acceleration structure or topology is maintained, so it
/// can be mutated or exported freely by the caller.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    vertex_normals: Option<Vec<Vector<Real>>>,
    face_colors: Option<Vec<Color>>,
    vertex_colors: Option<Vec<Color>>,
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    ///
    /// An empty mesh (without any triangle) is valid.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        let num_vertices = vertices.len() as u32;

        for (fid, idx) in indices.iter().enumerate() {
            if let Some(index) = idx.iter().find(|i| **i >= num_vertices) {
                return Err(TriMeshBuilderError::IndexOutOfBounds {
                    triangle: fid as u32,
                    index: *index,
                    num_vertices,
                });
            }
        }

        Ok(Self {
            vertices,
            indices,
            vertex_normals: None,
            face_colors: None,
            vertex_colors: None,
        })
    }

    /// Attaches one normal per vertex to this mesh.
    pub fn with_vertex_normals(
        mut self,
        normals: Vec<Vector<Real>>,
    ) -> Result<Self, TriMeshBuilderError> {
        check_count("vertex normals", self.vertices.len(), normals.len())?;
        self.vertex_normals = Some(normals);
        Ok(self)
    }

    /// Attaches one color per triangle to this mesh.
    ///
    /// Any per-vertex color previously set is discarded.
    pub fn with_face_colors(mut self, colors: Vec<Color>) -> Result<Self, TriMeshBuilderError> {
        check_count("face colors", self.indices.len(), colors.len())?;
        self.face_colors = Some(colors);
        self.vertex_colors = None;
        Ok(self)
    }

    /// Attaches one color per vertex to this mesh.
    ///
    /// Any per-face color previously set is discarded.
    pub fn with_vertex_colors(mut self, colors: Vec<Color>) -> Result<Self, TriMeshBuilderError> {
        check_count("vertex colors", self.vertices.len(), colors.len())?;
        self.vertex_colors = Some(colors);
        self.face_colors = None;
        Ok(self)
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of vertices of this mesh.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// The per-vertex normals, if any.
    #[inline]
    pub fn vertex_normals(&self) -> Option<&[Vector<Real>]> {
        self.vertex_normals.as_deref()
    }

    /// The per-face colors, if any.
    #[inline]
    pub fn face_colors(&self) -> Option<&[Color]> {
        self.face_colors.as_deref()
    }

    /// The per-vertex colors, if any.
    #[inline]
    pub fn vertex_colors(&self) -> Option<&[Color]> {
        self.vertex_colors.as_deref()
    }

    /// Decomposes this mesh into its vertex and index buffers.
    pub fn into_buffers(self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        (self.vertices, self.indices)
    }

    /// Translates every vertex of this mesh.
    pub fn translate(&mut self, shift: &Vector<Real>) {
        self.vertices.iter_mut().for_each(|pt| *pt += shift);
    }

    /// The smallest axis-aligned box `(mins, maxs)` containing every vertex.
    ///
    /// Returns `None` if this mesh has no vertex.
    pub fn aabb(&self) -> Option<(Point<Real>, Point<Real>)> {
        let first = self.vertices.first()?;
        Some(self.vertices[1..].iter().fold((*first, *first), |acc, pt| {
            (acc.0.inf(pt), acc.1.sup(pt))
        }))
    }

    /// The edges used by exactly one triangle.
    ///
    /// Each edge is given as the sorted pair of its vertex indices. Vertices are compared
    /// by index, not by position.
    pub fn boundary_edges(&self) -> Vec<SortedPair<u32>> {
        let mut edge_count: HashMap<SortedPair<u32>, u32> = HashMap::default();

        for idx in &self.indices {
            for k in 0..3 {
                let edge = SortedPair::new(idx[k], idx[(k + 1) % 3]);
                *edge_count.entry(edge).or_insert(0) += 1;
            }
        }

        let mut result: Vec<_> = edge_count
            .into_iter()
            .filter(|(_, count)| *count == 1)
            .map(|(edge, _)| edge)
            .collect();
        result.sort();
        result
    }

    /// Is this mesh non-empty and free of boundary edges?
    pub fn is_watertight(&self) -> bool {
        !self.indices.is_empty() && self.boundary_edges().is_empty()
    }
}

fn check_count(
    attribute: &'static str,
    expected: usize,
    found: usize,
) -> Result<(), TriMeshBuilderError> {
    if expected == found {
        Ok(())
    } else {
        Err(TriMeshBuilderError::AttributeCountMismatch {
            attribute,
            expected,
            found,
        })
    }
}
