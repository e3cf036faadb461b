//! Core mesh data structures.
//!
//! This module provides the shared-vertex triangle mesh representation and
//! the vertex welder used by the procedural generators.
//!
//! # Overview
//!
//! The primary type is [`TriMesh`], a face-vertex triangle mesh: a vertex
//! position array plus a face array of index triples. Faces reference
//! vertices by index, so vertices shared between adjacent triangles are
//! stored once (a welded mesh rather than a triangle soup).
//!
//! [`VertexWelder`] assigns stable vertex IDs to positions as they are
//! inserted, merging positions that quantize to the same spatial key. The
//! icosphere builder relies on it to resolve edge midpoints computed
//! independently from adjacent faces to a single shared vertex.
//!
//! # Construction
//!
//! Meshes are constructed from a face-vertex list, validated up front:
//!
//! ```
//! use spherule::mesh::TriMesh;
//! use nalgebra::Point3;
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let faces = vec![[0, 1, 2]];
//!
//! let mesh = TriMesh::from_face_vertex(positions, faces).unwrap();
//! assert_eq!(mesh.num_vertices(), 3);
//! ```

mod trimesh;
mod weld;

pub use trimesh::TriMesh;
pub use weld::{VertexWelder, WELD_EPSILON};
