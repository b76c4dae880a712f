//! Application state for the hand viewer.
//!
//! `App` owns the scene, camera, hand and camera controls and implements the
//! pointer/resize/frame operations. The web frontend forwards browser events
//! here and reads back the scene for rendering, so everything below can be
//! exercised without a browser.

use crate::camera::{PerspectiveCamera, Viewport};
use crate::controls::CameraControls;
use crate::hand::{Finger, Hand};
use crate::interaction::{apply_drag, drag_delta, DragState};
use crate::scene::SceneGraph;
use crate::stage::Stage;

pub struct App {
    pub scene: SceneGraph,
    pub camera: PerspectiveCamera,
    pub stage: Stage,
    pub hand: Hand,
    controls: Box<dyn CameraControls>,
    drag: DragState,
    viewport: Viewport,
}

impl App {
    pub fn new(viewport: Viewport, controls: Box<dyn CameraControls>) -> Self {
        let mut scene = SceneGraph::new();
        let hand = Hand::create(&mut scene);
        Self {
            scene,
            camera: PerspectiveCamera::for_viewport(viewport),
            stage: Stage::default(),
            hand,
            controls,
            drag: DragState::Idle,
            viewport,
        }
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn controls(&self) -> &dyn CameraControls {
        self.controls.as_ref()
    }

    pub fn status_text(&self) -> String {
        self.drag.status_text()
    }

    /// Finger under the pixel position `(x, y)`, if any.
    pub fn pick(&self, x: f32, y: f32) -> Option<Finger> {
        let ray = self.camera.ray_from_ndc(self.viewport.to_ndc(x, y));
        self.hand.pick(&self.scene, &ray)
    }

    /// Start dragging the finger under the pointer. A miss is handed to the
    /// camera controls as the start of an orbit.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Option<Finger> {
        match self.pick(x, y) {
            Some(finger) => {
                self.drag = DragState::Dragging(finger);
                self.controls.set_enabled(false);
                log::info!("[pointer] dragging {} finger", finger.name());
                Some(finger)
            }
            None => {
                self.controls.pointer_down(x, y);
                None
            }
        }
    }

    /// `movement_x`/`movement_y` are the pixel deltas since the last move.
    pub fn pointer_move(&mut self, x: f32, y: f32, movement_x: f32, movement_y: f32) {
        let Some(finger) = self.drag.active_finger() else {
            self.controls.pointer_move(x, y, self.viewport);
            return;
        };
        let Some(node) = self.hand.finger(finger) else {
            return;
        };
        let delta = drag_delta(movement_x, movement_y, self.viewport);
        apply_drag(finger, &mut self.scene.transform_mut(node).rotation, delta);
    }

    pub fn pointer_up(&mut self) {
        self.drag = DragState::Idle;
        self.controls.set_enabled(true);
        self.controls.pointer_up();
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.controls.wheel(delta_y);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.camera.aspect = self.viewport.aspect();
        self.camera.update_projection_matrix();
    }

    /// Per-frame step: advance control easing.
    pub fn tick(&mut self) {
        self.controls.update(&mut self.camera);
    }
}
