//! Perspective camera and screen-to-world picking rays.
//!
//! These types avoid platform APIs so picking can be tested on the host. The
//! web frontend reads the cached matrices each frame to fill its uniforms.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_Y_DEG, CAMERA_NEAR, CAMERA_Z};
use crate::raycast::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Pixel coordinates (origin top-left) to normalized device coordinates.
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (x / self.width) * 2.0 - 1.0,
            -(y / self.height) * 2.0 + 1.0,
        )
    }
}

/// Right-handed perspective camera looking at `target`.
///
/// The projection matrix is cached; call [`update_projection_matrix`] after
/// changing `fov_y_deg`, `aspect`, `near` or `far`.
///
/// [`update_projection_matrix`]: PerspectiveCamera::update_projection_matrix
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut cam = Self {
            position: Vec3::ZERO,
            target: Vec3::NEG_Z,
            up: Vec3::Y,
            fov_y_deg,
            aspect,
            near,
            far,
            projection: Mat4::IDENTITY,
        };
        cam.update_projection_matrix();
        cam
    }

    /// Camera used by the hand viewer: 75° fov, placed on +Z looking at the
    /// origin.
    pub fn for_viewport(viewport: Viewport) -> Self {
        let mut cam = Self::new(CAMERA_FOV_Y_DEG, viewport.aspect(), CAMERA_NEAR, CAMERA_FAR);
        cam.position = Vec3::new(0.0, 0.0, CAMERA_Z);
        cam.target = Vec3::ZERO;
        cam
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection =
            Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }

    /// Ray from the camera through a point given in normalized device
    /// coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far = far.truncate() / far.w;
        Ray::new(self.position, far - self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_maps_corners_and_inverts_y() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.to_ndc(0.0, 0.0), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(vp.to_ndc(400.0, 300.0), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = PerspectiveCamera::for_viewport(Viewport::new(1024.0, 768.0));
        let ray = cam.ray_from_ndc(Vec2::ZERO);
        assert!((ray.origin - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-6);
        assert!((ray.direction - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn edge_ray_matches_half_fov() {
        let cam = PerspectiveCamera::for_viewport(Viewport::new(500.0, 500.0));
        let ray = cam.ray_from_ndc(Vec2::new(0.0, 1.0));
        let angle = ray.direction.angle_between(Vec3::NEG_Z).to_degrees();
        assert!((angle - 37.5).abs() < 0.05, "angle {angle}");
        assert!(ray.direction.y > 0.0);
    }
}
