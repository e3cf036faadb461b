//! Latitude/longitude sphere.

use std::f64::consts::{PI, TAU};

use nalgebra::Point3;

use crate::error::{GeometryError, Result};
use crate::mesh::TriMesh;

/// Builder for a unit sphere tessellated along latitude and longitude.
///
/// `slices` latitude bands run from the +Y pole to the -Y pole; each ring
/// carries `segments` vertices, with the longitude seam closed by index
/// wrap-around rather than duplicated vertices. Each quad cell is split into
/// two triangles.
///
/// The pole rings collapse geometrically to the pole points; their cells
/// degenerate to triangles of zero area, which is the usual (and harmless)
/// artifact of this tessellation.
#[derive(Debug, Clone, Copy)]
pub struct UvSphere {
    slices: usize,
    segments: usize,
}

impl Default for UvSphere {
    fn default() -> Self {
        Self { slices: 8, segments: 8 }
    }
}

impl UvSphere {
    /// Create a builder with the given resolution.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidParameter`] if `slices < 2` or
    /// `segments < 3`.
    pub fn new(slices: usize, segments: usize) -> Result<Self> {
        if slices < 2 {
            return Err(GeometryError::invalid_param("slices", slices, "must be at least 2"));
        }
        if segments < 3 {
            return Err(GeometryError::invalid_param("segments", segments, "must be at least 3"));
        }
        Ok(Self { slices, segments })
    }

    /// Build the sphere.
    pub fn build(&self) -> Result<TriMesh> {
        let mut positions = Vec::with_capacity((self.slices + 1) * self.segments);
        let mut faces = Vec::with_capacity(self.slices * self.segments * 2);

        for i in 0..=self.slices {
            let u = i as f64 * PI / self.slices as f64; // polar angle from +Y
            for j in 0..self.segments {
                let v = j as f64 * TAU / self.segments as f64;
                positions.push(Point3::new(
                    u.sin() * v.cos(),
                    u.cos(),
                    -u.sin() * v.sin(),
                ));
            }
        }

        for i in 0..self.slices {
            let ring = i * self.segments;
            for j in 0..self.segments {
                let next = (j + 1) % self.segments;
                let p0 = ring + j;
                let p1 = ring + j + self.segments;
                let p2 = ring + next + self.segments;
                let p3 = ring + next;
                faces.push([p0, p1, p2]);
                faces.push([p0, p2, p3]);
            }
        }

        TriMesh::from_face_vertex(positions, faces)
    }
}
