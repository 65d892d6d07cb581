use crate::shape::TriMesh;
use alloc::string::{String, ToString};
use core::fmt;

/// Formats a triangle mesh as an Object File Format (`.off`) document.
///
/// Created by [`TriMesh::to_off`].
#[derive(Copy, Clone, Debug)]
pub struct OffDisplay<'a> {
    mesh: &'a TriMesh,
    digits: usize,
}

impl fmt::Display for OffDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.digits;

        writeln!(f, "OFF")?;
        writeln!(
            f,
            "{} {} 0",
            self.mesh.num_vertices(),
            self.mesh.num_triangles()
        )?;

        for pt in self.mesh.vertices() {
            writeln!(f, "{:.digits$} {:.digits$} {:.digits$}", pt.x, pt.y, pt.z)?;
        }

        for (i, tri) in self.mesh.indices().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "3 {} {} {}", tri[0], tri[1], tri[2])?;
        }

        Ok(())
    }
}

impl TriMesh {
    /// A displayable Object File Format (`.off`) representation of this mesh.
    ///
    /// Vertex coordinates are written with `digits` decimal places. Normals and colors
    /// are not exported.
    pub fn to_off(&self, digits: usize) -> OffDisplay<'_> {
        OffDisplay { mesh: self, digits }
    }

    /// This mesh as an Object File Format (`.off`) string.
    ///
    /// See [`TriMesh::to_off`] for details.
    pub fn to_off_string(&self, digits: usize) -> String {
        self.to_off(digits).to_string()
    }
}
