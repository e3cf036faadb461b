//! PLY (Stanford polygon) export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::mesh::TriMesh;

/// Save a mesh to an ASCII PLY file.
///
/// # Example
///
/// ```no_run
/// use spherule::io::ply;
/// use spherule::primitives::icosahedron;
///
/// let mesh = icosahedron().unwrap();
/// ply::save(&mesh, "icosahedron.ply").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &TriMesh, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_ply(mesh, &mut writer)
}

/// Write ASCII PLY data to any writer.
pub fn write_ply<W: Write>(mesh: &TriMesh, writer: &mut W) -> Result<()> {
    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "element vertex {}", mesh.num_vertices())?;
    writeln!(writer, "property double x")?;
    writeln!(writer, "property double y")?;
    writeln!(writer, "property double z")?;
    writeln!(writer, "element face {}", mesh.num_faces())?;
    writeln!(writer, "property list uchar int vertex_indices")?;
    writeln!(writer, "end_header")?;

    for p in mesh.positions() {
        writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
    }

    for f in mesh.faces() {
        writeln!(writer, "3 {} {} {}", f[0], f[1], f[2])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::icosphere;

    #[test]
    fn test_ply_header_and_counts() {
        let mesh = icosphere(1).unwrap();
        let mut out = Vec::new();
        write_ply(&mesh, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("ply"));
        assert_eq!(lines.next(), Some("format ascii 1.0"));
        assert!(text.contains("element vertex 42"));
        assert!(text.contains("element face 80"));

        let body_start = text.find("end_header").unwrap();
        let body: Vec<&str> = text[body_start..].lines().skip(1).collect();
        assert_eq!(body.len(), 42 + 80);
        assert!(body[42].starts_with("3 "));
    }
}
