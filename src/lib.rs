//! # Spherule
//!
//! Procedural generation of sphere and tube mesh primitives, with flat
//! GPU-ready buffer output for an external rendering backend.
//!
//! Spherule builds shared-vertex triangle meshes — icosahedron, subdivided
//! icosphere, latitude/longitude sphere, Möbius tube — and flattens them
//! into `f32` attribute arrays and 16-bit index buffers. The rendering
//! backend itself (buffer upload, shaders, input, timing) is deliberately
//! out of scope: this crate produces the data a backend consumes.
//!
//! ## Features
//!
//! - **Icosphere subdivision**: recursive midpoint refinement with welded
//!   vertices, so the result is a watertight mesh rather than a triangle
//!   soup
//! - **Quantized vertex welding**: midpoints recomputed from adjacent faces
//!   resolve to a single shared vertex ID via an exact integer spatial key
//! - **Flat buffers**: positions, normals, optional RGBA colors, and 16-bit
//!   indices with overflow checking, plus raw byte views for upload
//! - **Explicit camera**: a free-look camera struct replacing ad hoc global
//!   state, producing view/projection matrices
//!
//! ## Quick Start
//!
//! ```
//! use spherule::buffers::MeshBuffers;
//! use spherule::primitives::icosphere;
//!
//! // A depth-3 icosphere: 1280 faces, 642 vertices
//! let mesh = icosphere(3).unwrap();
//! assert_eq!(mesh.num_faces(), 1280);
//! assert!(mesh.is_closed_manifold());
//!
//! // Flatten for the rendering backend
//! let buffers = MeshBuffers::from_unit_sphere_mesh(&mesh).unwrap();
//! assert_eq!(buffers.indices().len(), 1280 * 3);
//! ```
//!
//! ## Driving a Render Loop
//!
//! ```
//! use spherule::camera::FlyCamera;
//!
//! let mut camera = FlyCamera::default();
//! // each frame: feed input deltas, then read the matrices
//! camera.look(4.0, -2.0, 0.016);
//! camera.advance(1.0, 0.016);
//! let view = camera.view_matrix();
//! let proj = camera.projection_matrix(16.0 / 9.0);
//! # let _ = (view, proj);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffers;
pub mod camera;
pub mod color;
pub mod error;
pub mod io;
pub mod mesh;
pub mod primitives;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use spherule::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffers::MeshBuffers;
    pub use crate::camera::FlyCamera;
    pub use crate::error::{GeometryError, Result};
    pub use crate::mesh::{TriMesh, VertexWelder};
    pub use crate::primitives::{
        icosahedron, icosphere, Icosahedron, Icosphere, MobiusTube, UvSphere,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_generate_and_flatten() {
        let mesh = icosphere(2).unwrap();

        assert_eq!(mesh.num_faces(), 320);
        assert_eq!(mesh.num_vertices(), 162);
        assert!(mesh.is_closed_manifold());

        let buffers = MeshBuffers::from_unit_sphere_mesh(&mesh)
            .unwrap()
            .with_rainbow_colors();
        assert_eq!(buffers.num_vertices(), 162);
        assert_eq!(buffers.colors().unwrap().len(), 162 * 4);
    }
}
