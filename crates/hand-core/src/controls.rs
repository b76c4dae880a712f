//! Camera controllers: a damped orbit controller and a no-op stand-in used
//! when orbiting is unavailable.

use crate::camera::{PerspectiveCamera, Viewport};
use crate::constants::*;
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

pub trait CameraControls {
    /// Advance easing and write the resulting pose into `camera`.
    fn update(&mut self, camera: &mut PerspectiveCamera);
    fn enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);

    fn pointer_down(&mut self, _x: f32, _y: f32) {}
    fn pointer_move(&mut self, _x: f32, _y: f32, _viewport: Viewport) {}
    fn pointer_up(&mut self) {}
    fn wheel(&mut self, _delta_y: f32) {}
}

/// Controller with no behavior. `enabled` can be toggled but has no effect.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticControls {
    pub enabled: bool,
}

impl Default for StaticControls {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl CameraControls for StaticControls {
    fn update(&mut self, _camera: &mut PerspectiveCamera) {}

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Orbits the camera around `target` on a sphere (Y up).
///
/// Pointer drags and wheel steps accumulate into a pending spherical delta and
/// zoom scale; [`CameraControls::update`] applies them. With damping enabled
/// only `damping_factor` of the pending rotation is applied per update and the
/// rest decays geometrically, so the camera glides to rest.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enabled: bool,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    // pending (theta, phi) rotation
    delta: Vec2,
    scale: f32,
    drag_from: Option<Vec2>,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            enabled: true,
            enable_damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            delta: Vec2::ZERO,
            scale: 1.0,
            drag_from: None,
        }
    }
}

impl OrbitControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    /// Rotation still waiting to be applied, as (azimuth, polar) radians.
    pub fn pending_rotation(&self) -> Vec2 {
        self.delta
    }
}

impl CameraControls for OrbitControls {
    fn update(&mut self, camera: &mut PerspectiveCamera) {
        let offset = camera.position - self.target;
        let mut radius = offset.length();
        let (mut theta, mut phi) = if radius > 0.0 {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI / 2.0)
        };

        if self.enable_damping {
            theta += self.delta.x * self.damping_factor;
            phi += self.delta.y * self.damping_factor;
        } else {
            theta += self.delta.x;
            phi += self.delta.y;
        }
        phi = phi.clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);

        let (sin_p, cos_p) = phi.sin_cos();
        let (sin_t, cos_t) = theta.sin_cos();
        camera.position = self.target + Vec3::new(sin_p * sin_t, cos_p, sin_p * cos_t) * radius;
        camera.target = self.target;

        if self.enable_damping {
            self.delta *= 1.0 - self.damping_factor;
        } else {
            self.delta = Vec2::ZERO;
        }
        self.scale = 1.0;
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.drag_from = None;
        }
    }

    fn pointer_down(&mut self, x: f32, y: f32) {
        if self.enabled {
            self.drag_from = Some(Vec2::new(x, y));
        }
    }

    fn pointer_move(&mut self, x: f32, y: f32, viewport: Viewport) {
        if !self.enabled {
            return;
        }
        let Some(from) = self.drag_from else {
            return;
        };
        let to = Vec2::new(x, y);
        let d = (to - from) * self.rotate_speed;
        // both axes are normalised by height so horizontal and vertical drags
        // rotate at the same rate
        self.delta.x -= TAU * d.x / viewport.height;
        self.delta.y -= TAU * d.y / viewport.height;
        self.drag_from = Some(to);
    }

    fn pointer_up(&mut self) {
        self.drag_from = None;
    }

    fn wheel(&mut self, delta_y: f32) {
        if !self.enabled {
            return;
        }
        if delta_y < 0.0 {
            self.scale *= ORBIT_ZOOM_STEP;
        } else if delta_y > 0.0 {
            self.scale /= ORBIT_ZOOM_STEP;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::for_viewport(Viewport::new(800.0, 600.0))
    }

    #[test]
    fn idle_update_keeps_camera_in_place() {
        let mut cam = camera();
        let mut orbit = OrbitControls::new();
        orbit.update(&mut cam);
        assert!((cam.position - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);
    }

    #[test]
    fn drag_rotates_gradually_with_damping() {
        let mut cam = camera();
        let mut orbit = OrbitControls::new();
        let vp = Viewport::new(800.0, 600.0);
        orbit.pointer_down(400.0, 300.0);
        orbit.pointer_move(550.0, 300.0, vp);
        orbit.pointer_up();
        let pending = orbit.pending_rotation().x;
        assert!((pending + TAU * 150.0 / 600.0).abs() < 1e-5);

        orbit.update(&mut cam);
        let theta = cam.position.x.atan2(cam.position.z);
        assert!((theta - pending * ORBIT_DAMPING_FACTOR).abs() < 1e-4);
        assert!((cam.position.length() - 5.0).abs() < 1e-4);

        for _ in 0..500 {
            orbit.update(&mut cam);
        }
        let theta = cam.position.x.atan2(cam.position.z);
        assert!((theta - pending).abs() < 1e-3);
    }

    #[test]
    fn disabled_orbit_ignores_input() {
        let mut orbit = OrbitControls::new();
        orbit.set_enabled(false);
        orbit.pointer_down(0.0, 0.0);
        orbit.pointer_move(100.0, 100.0, Viewport::new(800.0, 600.0));
        orbit.wheel(-1.0);
        assert!(!orbit.is_dragging());
        assert_eq!(orbit.pending_rotation(), Vec2::ZERO);
    }

    #[test]
    fn wheel_zooms_within_limits() {
        let mut cam = camera();
        let mut orbit = OrbitControls::new();
        orbit.wheel(-100.0);
        orbit.update(&mut cam);
        assert!((cam.position.length() - 5.0 * ORBIT_ZOOM_STEP).abs() < 1e-4);
        for _ in 0..200 {
            orbit.wheel(1.0);
            orbit.update(&mut cam);
        }
        assert!((cam.position.length() - ORBIT_MAX_DISTANCE).abs() < 1e-2);
    }

    #[test]
    fn polar_angle_never_flips_over_the_pole() {
        let mut cam = camera();
        let mut orbit = OrbitControls::new();
        orbit.enable_damping = false;
        orbit.pointer_down(0.0, 0.0);
        orbit.pointer_move(0.0, 5000.0, Viewport::new(800.0, 600.0));
        orbit.update(&mut cam);
        assert!(cam.position.y > 4.99);
    }

    #[test]
    fn static_controls_toggle_without_effect() {
        let mut cam = camera();
        let before = cam.position;
        let mut stub = StaticControls::default();
        stub.set_enabled(false);
        assert!(!stub.enabled());
        stub.set_enabled(true);
        stub.pointer_down(10.0, 10.0);
        stub.pointer_move(200.0, 10.0, Viewport::new(800.0, 600.0));
        stub.wheel(-1.0);
        stub.update(&mut cam);
        assert_eq!(cam.position, before);
    }
}
