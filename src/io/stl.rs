use crate::triangulated::Triangulated3D;
use std::io::Cursor;

/// Export to ASCII STL
///
/// Convert `shape` to an **ASCII STL** string with the given solid `name`.
///
/// Facet normals come from each triangle's first vertex. Non-finite
/// coordinates are written as-is; STL consumers vary in how they treat them.
///
/// ```rust
/// # use supershape::{SuperShape, SurfaceMesh};
/// let mesh = SurfaceMesh::generate(&SuperShape::FLOWER, 8, 8).unwrap();
/// let text = mesh.to_stl_ascii("flower");
/// assert!(text.starts_with("solid flower"));
/// assert!(text.trim_end().ends_with("endsolid flower"));
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    shape.visit_triangles(|tri| {
        let n = tri[0].normal;
        out.push_str(&format!("  facet normal {:.6} {:.6} {:.6}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for v in &tri {
            let p = v.pos;
            out.push_str(&format!("      vertex {:.6} {:.6} {:.6}\n", p.x, p.y, p.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// Convert `shape` to a **binary STL** byte vector. The resulting `Vec<u8>`
/// can then be written to a file or handled in memory. Binary STL carries no
/// solid name, so `_name` is accepted only for signature symmetry with
/// [`to_stl_ascii`].
pub fn to_stl_binary<T: Triangulated3D>(shape: &T, _name: &str) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();

    shape.visit_triangles(|tri| {
        let n = tri[0].normal;
        #[allow(clippy::unnecessary_cast)]
        {
            triangles.push(Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri.map(|v| {
                    let p = v.pos;
                    Vertex::new([p.x as f32, p.y as f32, p.z as f32])
                }),
            });
        }
    });

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

impl crate::mesh::SurfaceMesh {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }

    pub fn to_stl_binary(&self, name: &str) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self, name)
    }
}
