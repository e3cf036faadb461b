//! First-person free-look camera.
//!
//! All camera state lives in one struct owned by the caller; the render
//! loop passes it by reference each frame and feeds the resulting matrices
//! to whatever backend it drives.

use std::f32::consts::PI;

use nalgebra::{Matrix4, Perspective3, Point3, Vector3};

/// A free-look camera: position plus yaw/pitch orientation.
///
/// Angles are radians; yaw 0 looks along +Z and π along -Z. Field of view
/// is stored in degrees and clamped to a sane range by [`zoom`](Self::zoom).
///
/// # Example
///
/// ```
/// use spherule::camera::FlyCamera;
///
/// let mut camera = FlyCamera::default();
/// camera.look(10.0, 0.0, 0.016);
/// camera.advance(1.0, 0.016);
/// let view = camera.view_matrix();
/// let proj = camera.projection_matrix(16.0 / 9.0);
/// # let _ = (view, proj);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FlyCamera {
    /// Eye position in world space.
    pub position: Point3<f32>,
    /// Horizontal angle in radians.
    pub yaw: f32,
    /// Vertical angle in radians, clamped short of straight up/down.
    pub pitch: f32,
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Look sensitivity in radians per pixel-second.
    pub sensitivity: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 10.0, 60.0),
            yaw: PI,
            pitch: 0.0,
            fov_deg: 45.0,
            near: 0.1,
            far: 500.0,
            speed: 50.0,
            sensitivity: 0.05,
        }
    }
}

impl FlyCamera {
    /// Create a camera at a position with the default orientation.
    pub fn new(position: Point3<f32>) -> Self {
        Self { position, ..Default::default() }
    }

    /// The unit view direction derived from yaw and pitch.
    pub fn direction(&self) -> Vector3<f32> {
        Vector3::new(
            self.pitch.cos() * self.yaw.sin(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.cos(),
        )
    }

    /// The unit right vector, horizontal regardless of pitch.
    pub fn right(&self) -> Vector3<f32> {
        Vector3::new((self.yaw - PI / 2.0).sin(), 0.0, (self.yaw - PI / 2.0).cos())
    }

    /// The camera-relative up vector.
    pub fn up(&self) -> Vector3<f32> {
        self.right().cross(&self.direction())
    }

    /// Apply a look delta (e.g. mouse movement in pixels) over `dt` seconds.
    pub fn look(&mut self, dx: f32, dy: f32, dt: f32) {
        self.yaw += self.sensitivity * dt * dx;
        self.pitch += self.sensitivity * dt * dy;

        // Clamp pitch to avoid flipping over the poles
        let limit = PI / 2.0 - 0.01;
        self.pitch = self.pitch.clamp(-limit, limit);
    }

    /// Move along the view direction; negative `amount` moves backward.
    pub fn advance(&mut self, amount: f32, dt: f32) {
        self.position += self.direction() * (amount * self.speed * dt);
    }

    /// Move along the right vector; negative `amount` strafes left.
    pub fn strafe(&mut self, amount: f32, dt: f32) {
        self.position += self.right() * (amount * self.speed * dt);
    }

    /// Adjust the field of view by `delta` degrees, clamped to (20, 120).
    pub fn zoom(&mut self, delta: f32) {
        self.fov_deg = (self.fov_deg + delta).clamp(21.0, 119.0);
    }

    /// The view matrix (world to camera).
    pub fn view_matrix(&self) -> Matrix4<f32> {
        let target = self.position + self.direction();
        Matrix4::look_at_rh(&self.position, &target, &self.up())
    }

    /// The perspective projection matrix for the given aspect ratio.
    pub fn projection_matrix(&self, aspect: f32) -> Matrix4<f32> {
        Perspective3::new(aspect, self.fov_deg.to_radians(), self.near, self.far)
            .to_homogeneous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_looks_down_negative_z() {
        let camera = FlyCamera::default();
        let d = camera.direction();
        assert!(d.x.abs() < 1e-6);
        assert!(d.y.abs() < 1e-6);
        assert!((d.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_direction_is_unit() {
        let mut camera = FlyCamera::default();
        camera.look(137.0, -42.0, 0.5);
        assert!((camera.direction().norm() - 1.0).abs() < 1e-6);
        assert!((camera.right().norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_basis_is_orthogonal() {
        let mut camera = FlyCamera::default();
        camera.look(300.0, 150.0, 0.2);
        assert!(camera.direction().dot(&camera.right()).abs() < 1e-6);
        assert!(camera.direction().dot(&camera.up()).abs() < 1e-6);
        assert!(camera.right().dot(&camera.up()).abs() < 1e-6);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut camera = FlyCamera::default();
        camera.look(0.0, 1e6, 1.0);
        assert!(camera.pitch < PI / 2.0);
        camera.look(0.0, -1e7, 1.0);
        assert!(camera.pitch > -PI / 2.0);
    }

    #[test]
    fn test_advance_moves_along_direction() {
        let mut camera = FlyCamera::default();
        let start = camera.position;
        camera.advance(1.0, 0.1); // speed 50 * 0.1 s = 5 units
        let moved = camera.position - start;
        assert!((moved.norm() - 5.0).abs() < 1e-4);
        assert!((moved.normalize() - camera.direction()).norm() < 1e-6);
    }

    #[test]
    fn test_zoom_clamped_to_working_range() {
        let mut camera = FlyCamera::default();
        camera.zoom(1000.0);
        assert_eq!(camera.fov_deg, 119.0);
        camera.zoom(-1000.0);
        assert_eq!(camera.fov_deg, 21.0);
    }

    #[test]
    fn test_view_matrix_centers_look_target() {
        let camera = FlyCamera::default();
        let view = camera.view_matrix();
        let target = camera.position + camera.direction() * 10.0;
        let in_view = view.transform_point(&target);

        // A point straight ahead lands on the view-space -Z axis
        assert!(in_view.x.abs() < 1e-4);
        assert!(in_view.y.abs() < 1e-4);
        assert!((in_view.z + 10.0).abs() < 1e-4);
    }
}
