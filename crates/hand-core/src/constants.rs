use std::f32::consts::PI;

// Shared scene layout and interaction tuning used by the web frontend.

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0; // distance back along the view axis

// Scene colors (sRGB hex, converted to linear at upload)
pub const BACKGROUND_HEX: u32 = 0x050510;
pub const HAND_COLOR_HEX: u32 = 0xffe0d0;
pub const HAND_METALNESS: f32 = 0.1;
pub const HAND_ROUGHNESS: f32 = 0.5;

// Lights
pub const AMBIENT_HEX: u32 = 0x404040;
pub const AMBIENT_INTENSITY: f32 = 1.0;
pub const SUN_HEX: u32 = 0xffffff;
pub const SUN_INTENSITY: f32 = 1.0;
pub const SUN_POSITION: [f32; 3] = [5.0, 5.0, 5.0];
pub const ACCENT_LIGHTS: [(u32, f32, f32, [f32; 3]); 2] = [
    // (color, intensity, range, position)
    (0x0044ff, 1.0, 10.0, [-5.0, 2.0, 3.0]), // blue
    (0xff00ff, 1.0, 10.0, [5.0, -2.0, 3.0]), // pink
];

// Ground grid
pub const GRID_SIZE: f32 = 10.0;
pub const GRID_DIVISIONS: u32 = 10;
pub const GRID_CENTER_HEX: u32 = 0x888888;
pub const GRID_LINE_HEX: u32 = 0x444444;

// Hand body: (width, height, depth) and center
pub const PALM_SIZE: [f32; 3] = [1.5, 0.5, 2.0];
pub const PALM_POSITION: [f32; 3] = [0.0, 0.0, 0.0];
pub const WRIST_SIZE: [f32; 3] = [1.4, 0.4, 0.7];
pub const WRIST_POSITION: [f32; 3] = [0.0, 0.0, -1.35];

// Fingers
pub const SEGMENTS_PER_FINGER: usize = 3;
pub const JOINT_RADIUS_FACTOR: f32 = 0.6; // joint sphere radius relative to finger thickness
pub const JOINT_SPHERE_SEGMENTS: u32 = 8;
pub const THUMB_OPPOSITION: [f32; 2] = [PI / 4.0, -PI / 5.0]; // extra (y, z) rotation

// Interaction
pub const DRAG_ROTATION_SCALE: f32 = 5.0; // radians per full viewport of pointer travel
pub const STATUS_IDLE: &str = "Click on a finger to move it";

// Orbit controls
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95;
pub const ORBIT_MIN_DISTANCE: f32 = 0.5;
pub const ORBIT_MAX_DISTANCE: f32 = 100.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6;
