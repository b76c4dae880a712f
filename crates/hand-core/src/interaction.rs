use crate::camera::Viewport;
use crate::constants::{DRAG_ROTATION_SCALE, STATUS_IDLE};
use crate::hand::Finger;
use glam::{Vec2, Vec3};

/// Pointer session state. The only transitions are `Idle -> Dragging` on a
/// successful pick and `Dragging -> Idle` on pointer-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Finger),
}

impl DragState {
    pub fn active_finger(self) -> Option<Finger> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(f) => Some(f),
        }
    }

    pub fn status_text(self) -> String {
        match self {
            DragState::Idle => STATUS_IDLE.to_string(),
            DragState::Dragging(f) => format!("Currently moving: {} finger", f.label()),
        }
    }
}

/// Pointer movement (pixels) to rotation deltas, with Y inverted so dragging
/// up is positive.
#[inline]
pub fn drag_delta(movement_x: f32, movement_y: f32, viewport: Viewport) -> Vec2 {
    Vec2::new(
        movement_x / viewport.width * DRAG_ROTATION_SCALE,
        -movement_y / viewport.height * DRAG_ROTATION_SCALE,
    )
}

/// Accumulate a drag into a finger's Euler rotation. The thumb swings on Z and
/// Y to mimic opposition; the other fingers are hinges about X. No range of
/// motion limit is applied.
#[inline]
pub fn apply_drag(finger: Finger, rotation: &mut Vec3, delta: Vec2) {
    match finger {
        Finger::Thumb => {
            rotation.z += delta.x;
            rotation.y += delta.y;
        }
        _ => rotation.x += delta.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_finger_only_while_dragging() {
        assert_eq!(DragState::Idle.active_finger(), None);
        assert_eq!(DragState::default().active_finger(), None);
        assert_eq!(
            DragState::Dragging(Finger::Ring).active_finger(),
            Some(Finger::Ring)
        );
    }

    #[test]
    fn drag_delta_scales_by_viewport_and_inverts_y() {
        let d = drag_delta(80.0, 60.0, Viewport::new(800.0, 600.0));
        assert!((d.x - 0.5).abs() < 1e-6);
        assert!((d.y + 0.5).abs() < 1e-6);
    }

    #[test]
    fn hinge_fingers_only_bend_on_x() {
        let mut r = Vec3::ZERO;
        apply_drag(Finger::Middle, &mut r, Vec2::new(0.3, -0.2));
        assert_eq!(r, Vec3::new(-0.2, 0.0, 0.0));
    }

    #[test]
    fn thumb_swings_on_z_and_y() {
        let mut r = Vec3::new(-0.3, 0.1, 0.2);
        apply_drag(Finger::Thumb, &mut r, Vec2::new(0.5, 0.25));
        assert!((r - Vec3::new(-0.3, 0.35, 0.7)).length() < 1e-6);
    }

    #[test]
    fn status_text_capitalizes_finger() {
        assert_eq!(DragState::Idle.status_text(), "Click on a finger to move it");
        assert_eq!(
            DragState::Dragging(Finger::Pinky).status_text(),
            "Currently moving: Pinky finger"
        );
    }
}
