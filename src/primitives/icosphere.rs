//! Icosphere generation by recursive midpoint subdivision.

use nalgebra::{center, Point3};

use crate::error::Result;
use crate::mesh::{TriMesh, VertexWelder};

use super::icosahedron::{BASE_FACES, BASE_VERTICES};
use super::project_to_unit_sphere;

/// Builder for a unit sphere approximated by subdividing an icosahedron.
///
/// Each subdivision round splits every face into four: the three edge
/// midpoints are computed, projected back onto the unit sphere (which is
/// what makes the refinement spherical rather than planar), and welded so
/// that a midpoint reached from both faces sharing an edge becomes a single
/// shared vertex. After `k` rounds the mesh has `20 * 4^k` faces and, by
/// Euler's formula for a closed triangulated sphere, `10 * 4^k + 2`
/// vertices.
///
/// Unlike Loop subdivision this scheme is interpolating: vertices never move
/// once placed, so positions from earlier rounds survive verbatim into the
/// final mesh.
///
/// # Example
///
/// ```
/// use spherule::primitives::Icosphere;
///
/// let mesh = Icosphere::new(1).build().unwrap();
/// assert_eq!(mesh.num_vertices(), 42);
/// assert_eq!(mesh.num_faces(), 80);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Icosphere {
    subdivisions: u32,
}

impl Icosphere {
    /// Create a builder for the given subdivision depth.
    ///
    /// Depth 0 is the base icosahedron. Face count grows as `4^k`, so
    /// useful depths are small; depth 6 is the deepest whose vertex count
    /// (40,962) still fits a 16-bit index buffer.
    pub fn new(subdivisions: u32) -> Self {
        Self { subdivisions }
    }

    /// Number of faces the built mesh will have.
    pub fn face_count(&self) -> usize {
        20 * 4_usize.pow(self.subdivisions)
    }

    /// Number of vertices the built mesh will have.
    pub fn vertex_count(&self) -> usize {
        self.face_count() / 2 + 2
    }

    /// Build the icosphere.
    pub fn build(&self) -> Result<TriMesh> {
        let mut welder = VertexWelder::new();
        for &[x, y, z] in &BASE_VERTICES {
            let p = project_to_unit_sphere(Point3::new(x, y, z))?;
            welder.insert_or_get(p);
        }

        let mut faces: Vec<[usize; 3]> = BASE_FACES.to_vec();

        for _ in 0..self.subdivisions {
            faces = refine_once(&mut welder, &faces)?;
        }

        TriMesh::from_face_vertex(welder.into_positions(), faces)
    }
}

/// Build an icosphere at the given subdivision depth. Convenience for
/// [`Icosphere::build`].
pub fn icosphere(subdivisions: u32) -> Result<TriMesh> {
    Icosphere::new(subdivisions).build()
}

/// One round of midpoint subdivision: every face is replaced by four.
///
/// Winding order carries through: each child triangle lists its vertices in
/// the same rotational sense as the parent, so outward normals stay outward.
fn refine_once(welder: &mut VertexWelder, faces: &[[usize; 3]]) -> Result<Vec<[usize; 3]>> {
    let mut next = Vec::with_capacity(faces.len() * 4);

    for &[v1, v2, v3] in faces {
        let p1 = *welder.position(v1);
        let p2 = *welder.position(v2);
        let p3 = *welder.position(v3);

        // Chord midpoints, projected back onto the sphere
        let a = project_to_unit_sphere(center(&p1, &p2))?;
        let b = project_to_unit_sphere(center(&p2, &p3))?;
        let c = project_to_unit_sphere(center(&p3, &p1))?;

        // The welder resolves midpoints already reached through the
        // neighboring face to their existing IDs
        let a_id = welder.insert_or_get(a);
        let b_id = welder.insert_or_get(b);
        let c_id = welder.insert_or_get(c);

        next.push([v1, a_id, c_id]);
        next.push([v2, b_id, a_id]);
        next.push([v3, c_id, b_id]);
        next.push([a_id, b_id, c_id]);
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::icosahedron;

    #[test]
    fn test_face_and_vertex_counts() {
        for k in 0..=4 {
            let mesh = icosphere(k).unwrap();
            let expected_faces = 20 * 4_usize.pow(k);
            assert_eq!(mesh.num_faces(), expected_faces, "faces at depth {}", k);
            assert_eq!(
                mesh.num_vertices(),
                expected_faces / 2 + 2,
                "vertices at depth {}",
                k
            );
        }
    }

    #[test]
    fn test_predicted_counts_match() {
        for k in 0..=3 {
            let builder = Icosphere::new(k);
            let mesh = builder.build().unwrap();
            assert_eq!(mesh.num_faces(), builder.face_count());
            assert_eq!(mesh.num_vertices(), builder.vertex_count());
        }
    }

    #[test]
    fn test_depth_one_is_42_vertices_80_faces() {
        let mesh = icosphere(1).unwrap();
        assert_eq!(mesh.num_vertices(), 42);
        assert_eq!(mesh.num_faces(), 80);
    }

    #[test]
    fn test_all_vertices_on_unit_sphere() {
        let mesh = icosphere(3).unwrap();
        for p in mesh.positions() {
            assert!((p.coords.norm() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_faces_reference_distinct_valid_vertices() {
        let mesh = icosphere(2).unwrap();
        for face in mesh.faces() {
            let [a, b, c] = *face;
            assert!(a != b && b != c && a != c);
            assert!(a < mesh.num_vertices());
            assert!(b < mesh.num_vertices());
            assert!(c < mesh.num_vertices());
        }
    }

    #[test]
    fn test_closed_manifold_at_every_depth() {
        for k in 0..=3 {
            let mesh = icosphere(k).unwrap();
            assert!(mesh.is_closed_manifold(), "depth {} not manifold", k);
            assert_eq!(mesh.euler_characteristic(), 2);
        }
    }

    #[test]
    fn test_depth_zero_matches_icosahedron() {
        let sphere = icosphere(0).unwrap();
        let base = icosahedron().unwrap();

        assert_eq!(sphere.num_vertices(), base.num_vertices());
        assert_eq!(sphere.faces(), base.faces());
        for (a, b) in sphere.positions().iter().zip(base.positions()) {
            assert!((a - b).norm() < 1e-12);
        }
    }

    #[test]
    fn test_fully_welded() {
        // No two vertices may represent the same geometric point: the
        // closest pair in a welded depth-3 icosphere is one edge apart
        let mesh = icosphere(3).unwrap();
        let positions = mesh.positions();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                assert!(
                    (positions[i] - positions[j]).norm() > 1e-3,
                    "vertices {} and {} coincide",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_winding_stays_outward() {
        let mesh = icosphere(2).unwrap();
        for f in 0..mesh.num_faces() {
            let n = mesh.face_normal(f);
            let c = mesh.face_centroid(f);
            assert!(n.dot(&c.coords) > 0.0, "face {} winds inward", f);
        }
    }

    #[test]
    fn test_surface_area_approaches_sphere() {
        // 4π ≈ 12.566; the approximation is strictly inscribed, so the area
        // increases with depth while staying below the limit
        let sphere_area = 4.0 * std::f64::consts::PI;
        let a2 = icosphere(2).unwrap().surface_area();
        let a4 = icosphere(4).unwrap().surface_area();
        assert!(a2 < a4);
        assert!(a4 < sphere_area);
        assert!(a4 > 0.99 * sphere_area);
    }
}
