//! Procedural mesh generators.
//!
//! This module contains the primitive generators:
//!
//! - **Icosahedron**: the fixed 12-vertex, 20-face base solid
//! - **Icosphere**: recursive midpoint subdivision of the icosahedron with
//!   welded vertices
//! - **UV sphere**: latitude/longitude sphere
//! - **Möbius tube**: a closed parametric tube with a half twist
//!
//! Each generator validates its parameters up front and returns a frozen
//! [`TriMesh`](crate::mesh::TriMesh).
//!
//! # Example
//!
//! ```
//! use spherule::primitives::icosphere;
//!
//! let mesh = icosphere(2).unwrap();
//! assert_eq!(mesh.num_faces(), 20 * 4_usize.pow(2));
//! ```

mod icosahedron;
mod icosphere;
mod mobius;
mod uv_sphere;

pub use icosahedron::{icosahedron, Icosahedron};
pub use icosphere::{icosphere, Icosphere};
pub use mobius::MobiusTube;
pub use uv_sphere::UvSphere;

use nalgebra::Point3;

use crate::error::{GeometryError, Result};

/// Radially project a point onto the unit sphere.
///
/// Projection is idempotent: a point already on the unit sphere maps to
/// itself within floating-point tolerance.
///
/// # Errors
///
/// [`GeometryError::DegenerateGeometry`] if the point is too close to the
/// origin to have a meaningful direction. No NaN is ever produced.
pub fn project_to_unit_sphere(p: Point3<f64>) -> Result<Point3<f64>> {
    let len = p.coords.norm();
    if len < 1e-12 {
        return Err(GeometryError::DegenerateGeometry {
            details: format!("cannot project ({}, {}, {}) onto the unit sphere", p.x, p.y, p.z),
        });
    }
    Ok(Point3::from(p.coords / len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_produces_unit_length() {
        let p = project_to_unit_sphere(Point3::new(3.0, 4.0, 0.0)).unwrap();
        assert!((p.coords.norm() - 1.0).abs() < 1e-12);
        assert!((p - Point3::new(0.6, 0.8, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let once = project_to_unit_sphere(Point3::new(1.0, 2.0, -2.0)).unwrap();
        let twice = project_to_unit_sphere(once).unwrap();
        assert!((once - twice).norm() < 1e-15);
    }

    #[test]
    fn test_zero_vector_is_degenerate() {
        let result = project_to_unit_sphere(Point3::origin());
        assert!(matches!(result, Err(GeometryError::DegenerateGeometry { .. })));
    }
}
