//! Export of triangle meshes to Wavefront (`.obj`) files.

use crate::shape::TriMesh;
use alloc::{string::String, vec};
use obj::{Group, IndexTuple, ObjData, ObjError, Object, SimplePolygon};
use std::path::Path;

impl TriMesh {
    /// Outputs a Wavefront (`.obj`) file at the given path.
    ///
    /// Vertex normals are written too if this mesh has any. Colors are not exported.
    ///
    /// This function is enabled by the `wavefront` feature flag.
    pub fn to_obj_file(&self, path: impl AsRef<Path>) -> Result<(), ObjError> {
        let mut file = std::fs::File::create(path)?;
        let has_normals = self.vertex_normals().is_some();

        log::debug!(
            "Writing {} vertices and {} triangles as Wavefront OBJ.",
            self.num_vertices(),
            self.num_triangles()
        );

        ObjData {
            #[expect(clippy::unnecessary_cast)]
            position: self
                .vertices()
                .iter()
                .map(|v| [v.x as f32, v.y as f32, v.z as f32])
                .collect(),
            #[expect(clippy::unnecessary_cast)]
            normal: self
                .vertex_normals()
                .unwrap_or_default()
                .iter()
                .map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect(),
            objects: vec![Object {
                groups: vec![Group {
                    polys: self
                        .indices()
                        .iter()
                        .map(|tri| {
                            SimplePolygon(
                                tri.iter()
                                    .map(|id| {
                                        let id = *id as usize;
                                        IndexTuple(id, None, has_normals.then_some(id))
                                    })
                                    .collect(),
                            )
                        })
                        .collect(),
                    name: String::new(),
                    index: 0,
                    material: None,
                }],
                name: String::new(),
            }],
            ..Default::default()
        }
        .write_to_buf(&mut file)
    }
}
