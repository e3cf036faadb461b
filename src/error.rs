//! Error types for spherule.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Errors that can occur while generating or exporting meshes.
#[derive(Error, Debug)]
pub enum GeometryError {
    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },

    /// A vector of (near-)zero length reached a normalization step.
    ///
    /// Normalizing such a vector would produce NaN coordinates, which would
    /// then propagate silently through the rest of the mesh.
    #[error("degenerate geometry: {details}")]
    DegenerateGeometry {
        /// Description of the degenerate input.
        details: String,
    },

    /// The mesh has more vertices than a 16-bit index buffer can address.
    #[error("mesh has {vertices} vertices, exceeding the 16-bit index limit of {limit}")]
    IndexRangeExceeded {
        /// Number of vertices in the mesh.
        vertices: usize,
        /// Maximum number of addressable vertices.
        limit: usize,
    },

    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A face has duplicate vertex indices (degenerate triangle).
    #[error("face {face} is degenerate (has duplicate vertices)")]
    DegenerateFace {
        /// The face index.
        face: usize,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error saving mesh to file.
    #[error("failed to save mesh to {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },
}

impl GeometryError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        GeometryError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
