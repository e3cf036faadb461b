//! Möbius tube.

use std::f64::consts::TAU;

use nalgebra::Point3;

use crate::error::{GeometryError, Result};
use crate::mesh::TriMesh;

// Centerline radius and the cross-section exponent of the parametric
// surface. The 0.125/0.5 terms shape the flattened cross section that twists
// half a turn as u runs around the tube.
const R: f64 = 1.0;
const N: f64 = 2.0;

/// Builder for a tube whose flattened cross section makes a half twist per
/// revolution, a solid Möbius-band-like surface.
///
/// `u` runs around the centerline circle (`slices` steps, an extra closing
/// ring duplicated at `u = 2π`), `v` around the cross section (`segments`
/// steps, closed by index wrap-around). Quad cells are split into two
/// triangles.
#[derive(Debug, Clone, Copy)]
pub struct MobiusTube {
    slices: usize,
    segments: usize,
}

impl Default for MobiusTube {
    fn default() -> Self {
        Self { slices: 32, segments: 32 }
    }
}

impl MobiusTube {
    /// Create a builder with the given resolution.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidParameter`] if `slices < 3` or
    /// `segments < 3`.
    pub fn new(slices: usize, segments: usize) -> Result<Self> {
        if slices < 3 {
            return Err(GeometryError::invalid_param("slices", slices, "must be at least 3"));
        }
        if segments < 3 {
            return Err(GeometryError::invalid_param("segments", segments, "must be at least 3"));
        }
        Ok(Self { slices, segments })
    }

    /// Build the tube.
    pub fn build(&self) -> Result<TriMesh> {
        let mut positions = Vec::with_capacity((self.slices + 1) * self.segments);
        let mut faces = Vec::with_capacity(self.slices * self.segments * 2);

        for i in 0..=self.slices {
            let u = i as f64 * TAU / self.slices as f64;
            for j in 0..self.segments {
                let v = j as f64 * TAU / self.segments as f64;
                positions.push(surface_point(u, v));
            }
        }

        for i in 0..self.slices {
            let ring = i * self.segments;
            for j in 0..self.segments {
                let next = (j + 1) % self.segments;
                let f0 = ring + j;
                let f1 = ring + j + self.segments;
                let f2 = ring + next + self.segments;
                let f3 = ring + next;
                faces.push([f0, f1, f2]);
                faces.push([f0, f2, f3]);
            }
        }

        TriMesh::from_face_vertex(positions, faces)
    }
}

/// Evaluate the parametric surface at `(u, v)`.
fn surface_point(u: f64, v: f64) -> Point3<f64> {
    // signed |.|^(2/n) keeps the cross section symmetric in all quadrants
    let sv = v.sin().abs().powf(2.0 / N) * v.sin().signum();
    let cv = v.cos().abs().powf(2.0 / N) * v.cos().signum();

    let radial = R + 0.125 * (u / 2.0).sin() * sv + 0.5 * (u / 2.0).cos() * cv;

    Point3::new(
        radial * u.cos(),
        radial * u.sin(),
        -0.5 * (u / 2.0).sin() * cv + 0.125 * (u / 2.0).cos() * sv,
    )
}
