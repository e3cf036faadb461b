//! Face-vertex triangle mesh.

use std::collections::HashMap;

use nalgebra::{Point3, Vector3};

use crate::error::{GeometryError, Result};

/// A shared-vertex triangle mesh.
///
/// Stores a vertex position array and a face array of `[usize; 3]` index
/// triples. Winding order is counter-clockwise when viewed from outside;
/// face normals follow from it.
///
/// The mesh is immutable after construction: generators build their vertex
/// and face lists, then freeze them into a `TriMesh` via
/// [`from_face_vertex`](TriMesh::from_face_vertex), which validates indices
/// and rejects degenerate faces.
#[derive(Debug, Clone)]
pub struct TriMesh {
    positions: Vec<Point3<f64>>,
    faces: Vec<[usize; 3]>,
}

impl TriMesh {
    /// Build a mesh from vertex positions and triangle faces.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::EmptyMesh`] if `faces` is empty
    /// - [`GeometryError::InvalidVertexIndex`] if a face references a vertex
    ///   index out of range
    /// - [`GeometryError::DegenerateFace`] if a face repeats a vertex index
    pub fn from_face_vertex(
        positions: Vec<Point3<f64>>,
        faces: Vec<[usize; 3]>,
    ) -> Result<Self> {
        if faces.is_empty() {
            return Err(GeometryError::EmptyMesh);
        }

        for (fi, face) in faces.iter().enumerate() {
            for &vi in face {
                if vi >= positions.len() {
                    return Err(GeometryError::InvalidVertexIndex { face: fi, vertex: vi });
                }
            }
            if face[0] == face[1] || face[1] == face[2] || face[0] == face[2] {
                return Err(GeometryError::DegenerateFace { face: fi });
            }
        }

        Ok(Self { positions, faces })
    }

    // ==================== Accessors ====================

    /// Get the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Get all vertex positions.
    #[inline]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Get all faces.
    #[inline]
    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Get the position of a vertex.
    #[inline]
    pub fn position(&self, v: usize) -> &Point3<f64> {
        &self.positions[v]
    }

    /// Get the positions of the three vertices of a face.
    pub fn face_positions(&self, f: usize) -> [Point3<f64>; 3] {
        let [v0, v1, v2] = self.faces[f];
        [self.positions[v0], self.positions[v1], self.positions[v2]]
    }

    // ==================== Geometry ====================

    /// Compute the normal of a face.
    pub fn face_normal(&self, f: usize) -> Vector3<f64> {
        let [p0, p1, p2] = self.face_positions(f);
        let e1 = p1 - p0;
        let e2 = p2 - p0;
        e1.cross(&e2).normalize()
    }

    /// Compute the area of a face.
    pub fn face_area(&self, f: usize) -> f64 {
        let [p0, p1, p2] = self.face_positions(f);
        let e1 = p1 - p0;
        let e2 = p2 - p0;
        0.5 * e1.cross(&e2).norm()
    }

    /// Compute the centroid of a face.
    pub fn face_centroid(&self, f: usize) -> Point3<f64> {
        let [p0, p1, p2] = self.face_positions(f);
        Point3::from((p0.coords + p1.coords + p2.coords) / 3.0)
    }

    /// Compute area-weighted normals for all vertices.
    ///
    /// Each face contributes its unnormalized cross product (twice its area
    /// times its unit normal) to its three corners; the accumulated vectors
    /// are normalized at the end. Vertices referenced by no face get a zero
    /// vector.
    pub fn vertex_normals(&self) -> Vec<Vector3<f64>> {
        let mut normals = vec![Vector3::zeros(); self.positions.len()];

        for face in &self.faces {
            let [p0, p1, p2] = [
                self.positions[face[0]],
                self.positions[face[1]],
                self.positions[face[2]],
            ];
            let weighted = (p1 - p0).cross(&(p2 - p0)); // Area-weighted (not normalized)
            for &v in face {
                normals[v] += weighted;
            }
        }

        for n in &mut normals {
            let len = n.norm();
            if len > 0.0 {
                *n /= len;
            }
        }

        normals
    }

    /// Compute the total surface area of the mesh.
    pub fn surface_area(&self) -> f64 {
        (0..self.faces.len()).map(|f| self.face_area(f)).sum()
    }

    /// Compute the bounding box of the mesh.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = self.positions.first()?;

        let mut min = *first;
        let mut max = *first;

        for p in &self.positions {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }

        Some((min, max))
    }

    // ==================== Topology ====================

    /// Compute the Euler characteristic `V - E + F`.
    ///
    /// Edges are counted as undirected vertex pairs. A closed triangulated
    /// sphere has characteristic 2.
    pub fn euler_characteristic(&self) -> i64 {
        let edges = self.undirected_edge_counts();
        self.num_vertices() as i64 - edges.len() as i64 + self.num_faces() as i64
    }

    /// Check that the mesh is a closed, consistently oriented manifold.
    ///
    /// Every undirected edge must be used by exactly two faces, once in each
    /// direction. Boundary edges (one face) or fans (three or more faces)
    /// fail the check, as do pairs of faces traversing an edge in the same
    /// direction (inconsistent winding).
    pub fn is_closed_manifold(&self) -> bool {
        // (forward uses, backward uses) per undirected edge
        let mut edges: HashMap<(usize, usize), (u32, u32)> = HashMap::new();

        for face in &self.faces {
            for i in 0..3 {
                let v0 = face[i];
                let v1 = face[(i + 1) % 3];
                let (key, forward) = if v0 < v1 { ((v0, v1), true) } else { ((v1, v0), false) };
                let entry = edges.entry(key).or_insert((0, 0));
                if forward {
                    entry.0 += 1;
                } else {
                    entry.1 += 1;
                }
            }
        }

        edges.values().all(|&(fwd, bwd)| fwd == 1 && bwd == 1)
    }

    fn undirected_edge_counts(&self) -> HashMap<(usize, usize), u32> {
        let mut edges: HashMap<(usize, usize), u32> = HashMap::new();
        for face in &self.faces {
            for i in 0..3 {
                let v0 = face[i];
                let v1 = face[(i + 1) % 3];
                let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                *edges.entry(key).or_insert(0) += 1;
            }
        }
        edges
    }
}
