//! Flat GPU-ready vertex and index buffers.
//!
//! A [`TriMesh`] stores `f64` positions and `usize` face indices for
//! numerical headroom during construction. Rendering backends instead want
//! tightly packed `f32` attribute arrays and 16-bit index buffers. This
//! module performs that conversion, checking the 16-bit index contract
//! instead of silently wrapping.

use bytemuck::cast_slice;

use crate::color::rainbow_rgba;
use crate::error::{GeometryError, Result};
use crate::mesh::TriMesh;

/// Most vertices a 16-bit index buffer can address.
pub const MAX_INDEXABLE_VERTICES: usize = u16::MAX as usize + 1;

/// Flat vertex/index buffers for upload to a rendering backend.
///
/// Layout: positions and normals are `[x, y, z]` per vertex, indices are
/// three per triangle, colors (when present) are `[r, g, b, a]` per vertex.
/// All slices can be viewed as raw bytes for buffer upload.
///
/// # Example
///
/// ```
/// use spherule::buffers::MeshBuffers;
/// use spherule::primitives::icosphere;
///
/// let mesh = icosphere(2).unwrap();
/// let buffers = MeshBuffers::from_unit_sphere_mesh(&mesh).unwrap();
/// assert_eq!(buffers.positions().len(), mesh.num_vertices() * 3);
/// assert_eq!(buffers.indices().len(), mesh.num_faces() * 3);
/// ```
#[derive(Debug, Clone)]
pub struct MeshBuffers {
    positions: Vec<f32>,
    normals: Vec<f32>,
    indices: Vec<u16>,
    colors: Option<Vec<f32>>,
}

impl MeshBuffers {
    /// Flatten a mesh, deriving area-weighted per-vertex normals.
    ///
    /// # Errors
    ///
    /// [`GeometryError::IndexRangeExceeded`] if the mesh has more vertices
    /// than [`MAX_INDEXABLE_VERTICES`].
    pub fn from_mesh(mesh: &TriMesh) -> Result<Self> {
        let normals = mesh.vertex_normals();
        Self::build(mesh, normals.iter().flat_map(|n| [n.x as f32, n.y as f32, n.z as f32]))
    }

    /// Flatten a unit-sphere mesh, reusing positions as normals.
    ///
    /// On the unit sphere the outward normal at a vertex *is* the vertex
    /// position, so no normal derivation is needed.
    ///
    /// # Errors
    ///
    /// [`GeometryError::IndexRangeExceeded`] if the mesh has more vertices
    /// than [`MAX_INDEXABLE_VERTICES`].
    pub fn from_unit_sphere_mesh(mesh: &TriMesh) -> Result<Self> {
        Self::build(
            mesh,
            mesh.positions().iter().flat_map(|p| [p.x as f32, p.y as f32, p.z as f32]),
        )
    }

    fn build(mesh: &TriMesh, normals: impl Iterator<Item = f32>) -> Result<Self> {
        if mesh.num_vertices() > MAX_INDEXABLE_VERTICES {
            return Err(GeometryError::IndexRangeExceeded {
                vertices: mesh.num_vertices(),
                limit: MAX_INDEXABLE_VERTICES,
            });
        }

        let positions = mesh
            .positions()
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect();

        let indices = mesh
            .faces()
            .iter()
            .flat_map(|f| f.iter().map(|&v| v as u16))
            .collect();

        Ok(Self {
            positions,
            normals: normals.collect(),
            indices,
            colors: None,
        })
    }

    /// Attach a rainbow per-vertex RGBA color ramp, hue sweeping once
    /// across the vertex array.
    pub fn with_rainbow_colors(mut self) -> Self {
        self.colors = Some(rainbow_rgba(self.num_vertices()));
        self
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of indices (three per triangle).
    pub fn num_indices(&self) -> usize {
        self.indices.len()
    }

    /// Flat position array, three floats per vertex.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat normal array, three floats per vertex.
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Flat index array, three indices per triangle.
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Flat color array, four floats per vertex, if colors were attached.
    pub fn colors(&self) -> Option<&[f32]> {
        self.colors.as_deref()
    }

    /// Position array as raw bytes.
    pub fn position_bytes(&self) -> &[u8] {
        cast_slice(&self.positions)
    }

    /// Normal array as raw bytes.
    pub fn normal_bytes(&self) -> &[u8] {
        cast_slice(&self.normals)
    }

    /// Index array as raw bytes.
    pub fn index_bytes(&self) -> &[u8] {
        cast_slice(&self.indices)
    }

    /// Color array as raw bytes, if colors were attached.
    pub fn color_bytes(&self) -> Option<&[u8]> {
        self.colors.as_deref().map(cast_slice)
    }
}
