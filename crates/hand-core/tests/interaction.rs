// Host-side tests for picking, finger dragging and camera control hand-off.

use glam::{Mat4, Vec3};
use hand_core::raycast::Ray;
use hand_core::{App, DragState, Finger, OrbitControls, StaticControls, Viewport};

const W: f32 = 800.0;
const H: f32 = 600.0;

fn orbit_app() -> App {
    App::new(Viewport::new(W, H), Box::new(OrbitControls::new()))
}

fn tip_center(app: &App, finger: Finger) -> Vec3 {
    let group = app.hand.finger(finger).unwrap();
    let name = format!("{}_segment_2", finger.name());
    let tip = app
        .scene
        .subtree(group)
        .into_iter()
        .find(|n| app.scene.node(*n).name == name)
        .unwrap();
    app.scene.world_matrix(tip).transform_point3(Vec3::ZERO)
}

fn to_screen(app: &App, p: Vec3) -> (f32, f32) {
    let clip = app.camera.view_projection() * p.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    let vp = app.viewport();
    ((ndc.x + 1.0) * 0.5 * vp.width, (1.0 - ndc.y) * 0.5 * vp.height)
}

#[test]
fn clicking_a_finger_starts_dragging_and_disables_orbit() {
    for finger in [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky] {
        let mut app = orbit_app();
        let (x, y) = to_screen(&app, tip_center(&app, finger));
        assert_eq!(app.pointer_down(x, y), Some(finger));
        assert_eq!(app.drag_state(), DragState::Dragging(finger));
        assert!(!app.controls().enabled());
        assert_eq!(
            app.status_text(),
            format!("Currently moving: {} finger", finger.label())
        );
    }
}

#[test]
fn thumb_is_picked_along_its_own_axis() {
    let app = orbit_app();
    let thumb = app.hand.finger(Finger::Thumb).unwrap();
    let world = app.scene.world_matrix(thumb);
    let beyond = world.transform_point3(Vec3::new(0.0, 0.0, 1.8));
    let ray = Ray::new(beyond, tip_center(&app, Finger::Thumb) - beyond);
    assert_eq!(app.hand.pick(&app.scene, &ray), Some(Finger::Thumb));
}

#[test]
fn clicking_empty_space_stays_idle() {
    let mut app = orbit_app();
    assert_eq!(app.pointer_down(5.0, 5.0), None);
    assert_eq!(app.drag_state(), DragState::Idle);
    assert!(app.controls().enabled());
    assert_eq!(app.status_text(), "Click on a finger to move it");
}

#[test]
fn dragging_a_hinge_finger_bends_about_x() {
    let mut app = orbit_app();
    let (x, y) = to_screen(&app, tip_center(&app, Finger::Index));
    app.pointer_down(x, y);
    let node = app.hand.finger(Finger::Index).unwrap();
    let before = app.scene.node(node).transform.rotation;

    app.pointer_move(x + 40.0, y + 60.0, 40.0, 60.0);
    let after = app.scene.node(node).transform.rotation;
    assert!((after.x - (before.x - 60.0 / H * 5.0)).abs() < 1e-6);
    assert_eq!(after.y, before.y);
    assert_eq!(after.z, before.z);
}

#[test]
fn dragging_the_thumb_swings_on_z_and_y() {
    let mut app = orbit_app();
    let node = app.hand.finger(Finger::Thumb).unwrap();
    let (x, y) = to_screen(&app, tip_center(&app, Finger::Thumb));
    // the thumb tip is in front of everything else from the default view
    assert_eq!(app.pointer_down(x, y), Some(Finger::Thumb));
    let before = app.scene.node(node).transform.rotation;

    app.pointer_move(x + 80.0, y - 30.0, 80.0, -30.0);
    let after = app.scene.node(node).transform.rotation;
    assert!((after.z - (before.z + 80.0 / W * 5.0)).abs() < 1e-6);
    assert!((after.y - (before.y + 30.0 / H * 5.0)).abs() < 1e-6);
    assert_eq!(after.x, before.x);
}

#[test]
fn rotation_accumulates_without_limit() {
    let mut app = orbit_app();
    let (x, y) = to_screen(&app, tip_center(&app, Finger::Ring));
    app.pointer_down(x, y);
    for _ in 0..100 {
        app.pointer_move(x, y, 0.0, -H);
    }
    let node = app.hand.finger(Finger::Ring).unwrap();
    assert!((app.scene.node(node).transform.rotation.x - 500.0).abs() < 1e-2);
}

#[test]
fn moving_while_idle_leaves_fingers_alone() {
    let mut app = orbit_app();
    let before: Vec<Vec3> = Finger::ALL
        .iter()
        .map(|f| app.scene.node(app.hand.finger(*f).unwrap()).transform.rotation)
        .collect();
    app.pointer_move(100.0, 100.0, 50.0, 50.0);
    let after: Vec<Vec3> = Finger::ALL
        .iter()
        .map(|f| app.scene.node(app.hand.finger(*f).unwrap()).transform.rotation)
        .collect();
    assert_eq!(before, after);
}

#[test]
fn pointer_up_always_returns_to_idle() {
    let mut app = orbit_app();
    app.pointer_up();
    assert_eq!(app.drag_state(), DragState::Idle);
    assert!(app.controls().enabled());

    let (x, y) = to_screen(&app, tip_center(&app, Finger::Middle));
    app.pointer_down(x, y);
    app.pointer_up();
    assert_eq!(app.drag_state(), DragState::Idle);
    assert!(app.controls().enabled());
    assert_eq!(app.status_text(), "Click on a finger to move it");
}

#[test]
fn orbit_drag_on_empty_space_moves_camera() {
    let mut app = orbit_app();
    app.pointer_down(5.0, 5.0);
    app.pointer_move(105.0, 5.0, 100.0, 0.0);
    app.pointer_up();
    app.tick();
    assert!(app.camera.position.x.abs() > 1e-3);
    assert!((app.camera.position.length() - 5.0).abs() < 1e-3);
}

#[test]
fn finger_drag_does_not_orbit() {
    let mut app = orbit_app();
    let (x, y) = to_screen(&app, tip_center(&app, Finger::Index));
    app.pointer_down(x, y);
    app.pointer_move(x + 200.0, y, 200.0, 0.0);
    app.tick();
    assert!((app.camera.position - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);
}

#[test]
fn resize_updates_aspect_and_projection() {
    let mut app = orbit_app();
    app.resize(1920.0, 1080.0);
    assert_eq!(app.viewport(), Viewport::new(1920.0, 1080.0));
    assert!((app.camera.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    let expected = Mat4::perspective_rh(75f32.to_radians(), 1920.0 / 1080.0, 0.1, 1000.0);
    assert!(app.camera.projection_matrix().abs_diff_eq(expected, 1e-6));
}

#[test]
fn static_controls_keep_the_app_working() {
    let mut app = App::new(Viewport::new(W, H), Box::new(StaticControls::default()));
    let (x, y) = to_screen(&app, tip_center(&app, Finger::Pinky));
    assert_eq!(app.pointer_down(x, y), Some(Finger::Pinky));
    assert!(!app.controls().enabled());
    app.pointer_up();
    assert!(app.controls().enabled());

    app.pointer_down(5.0, 5.0);
    app.pointer_move(300.0, 5.0, 295.0, 0.0);
    app.tick();
    assert_eq!(app.camera.position, Vec3::new(0.0, 0.0, 5.0));
}
