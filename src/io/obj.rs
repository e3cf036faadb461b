//! Wavefront OBJ export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::mesh::TriMesh;

/// Save a mesh to an OBJ file.
///
/// Writes vertex positions, area-weighted per-vertex normals, and faces in
/// `v//vn` form. OBJ indices are 1-based.
///
/// # Example
///
/// ```no_run
/// use spherule::io::obj;
/// use spherule::primitives::icosahedron;
///
/// let mesh = icosahedron().unwrap();
/// obj::save(&mesh, "icosahedron.obj").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &TriMesh, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_obj(mesh, &mut writer)
}

/// Write OBJ data to any writer.
pub fn write_obj<W: Write>(mesh: &TriMesh, writer: &mut W) -> Result<()> {
    for p in mesh.positions() {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }

    for n in mesh.vertex_normals() {
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    for f in mesh.faces() {
        writeln!(
            writer,
            "f {}//{} {}//{} {}//{}",
            f[0] + 1,
            f[0] + 1,
            f[1] + 1,
            f[1] + 1,
            f[2] + 1,
            f[2] + 1
        )?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::icosahedron;

    #[test]
    fn test_obj_line_counts() {
        let mesh = icosahedron().unwrap();
        let mut out = Vec::new();
        write_obj(&mesh, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 12);
        assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 12);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 20);
    }

    #[test]
    fn test_obj_faces_one_based() {
        let mesh = icosahedron().unwrap();
        let mut out = Vec::new();
        write_obj(&mesh, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        for line in text.lines().filter(|l| l.starts_with("f ")) {
            for token in line.split_whitespace().skip(1) {
                let index: usize = token.split("//").next().unwrap().parse().unwrap();
                assert!(index >= 1 && index <= 12);
            }
        }
    }
}
