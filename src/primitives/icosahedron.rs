//! The base icosahedron.

use nalgebra::Point3;

use crate::error::Result;
use crate::mesh::TriMesh;

use super::project_to_unit_sphere;

/// Vertex coordinates of the base icosahedron, one pole on each of ±Z and
/// two staggered pentagonal rings between them. Stored to three decimals;
/// [`Icosahedron::build`] renormalizes them onto the unit sphere.
pub(crate) const BASE_VERTICES: [[f64; 3]; 12] = [
    [0.000, 0.000, 1.000],
    [0.894, 0.000, 0.447],
    [0.276, 0.851, 0.447],
    [-0.724, 0.526, 0.447],
    [-0.724, -0.526, 0.447],
    [0.276, -0.851, 0.447],
    [0.724, 0.526, -0.447],
    [-0.276, 0.851, -0.447],
    [-0.894, 0.000, -0.447],
    [-0.276, -0.851, -0.447],
    [0.724, -0.526, -0.447],
    [0.000, 0.000, -1.000],
];

/// Face index triples of the base icosahedron, wound counter-clockwise
/// viewed from outside: a five-face cap around each pole and a ten-face
/// equatorial band.
pub(crate) const BASE_FACES: [[usize; 3]; 20] = [
    [0, 1, 2],
    [0, 2, 3],
    [0, 3, 4],
    [0, 4, 5],
    [0, 5, 1],
    [11, 7, 6],
    [11, 8, 7],
    [11, 9, 8],
    [11, 10, 9],
    [11, 6, 10],
    [1, 6, 2],
    [2, 7, 3],
    [3, 8, 4],
    [4, 9, 5],
    [5, 10, 1],
    [6, 7, 2],
    [7, 8, 3],
    [8, 9, 4],
    [9, 10, 5],
    [10, 6, 1],
];

/// Builder for the regular icosahedron inscribed in the unit sphere.
#[derive(Debug, Clone, Copy, Default)]
pub struct Icosahedron;

impl Icosahedron {
    /// Create an icosahedron builder.
    pub fn new() -> Self {
        Self
    }

    /// Build the 12-vertex, 20-face icosahedron with all vertices on the
    /// unit sphere.
    pub fn build(&self) -> Result<TriMesh> {
        let positions = BASE_VERTICES
            .iter()
            .map(|&[x, y, z]| project_to_unit_sphere(Point3::new(x, y, z)))
            .collect::<Result<Vec<_>>>()?;

        TriMesh::from_face_vertex(positions, BASE_FACES.to_vec())
    }
}

/// Build the unit icosahedron. Convenience for [`Icosahedron::build`].
pub fn icosahedron() -> Result<TriMesh> {
    Icosahedron::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mesh = icosahedron().unwrap();
        assert_eq!(mesh.num_vertices(), 12);
        assert_eq!(mesh.num_faces(), 20);
    }

    #[test]
    fn test_vertices_on_unit_sphere() {
        let mesh = icosahedron().unwrap();
        for p in mesh.positions() {
            assert!((p.coords.norm() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_closed_manifold() {
        let mesh = icosahedron().unwrap();
        assert!(mesh.is_closed_manifold());
        assert_eq!(mesh.euler_characteristic(), 2);
    }

    #[test]
    fn test_outward_winding() {
        // For a convex solid centered at the origin, each face normal must
        // point away from the origin
        let mesh = icosahedron().unwrap();
        for f in 0..mesh.num_faces() {
            let n = mesh.face_normal(f);
            let c = mesh.face_centroid(f);
            assert!(n.dot(&c.coords) > 0.0, "face {} winds inward", f);
        }
    }

    #[test]
    fn test_all_edges_equal_length() {
        let mesh = icosahedron().unwrap();
        let edge = |a: usize, b: usize| (mesh.position(a) - mesh.position(b)).norm();

        let reference = edge(0, 1);
        for face in mesh.faces() {
            for i in 0..3 {
                let len = edge(face[i], face[(i + 1) % 3]);
                // The base coordinates are stored to three decimals, so
                // edge lengths agree only to that precision
                assert!((len - reference).abs() < 2e-3);
            }
        }
    }
}
