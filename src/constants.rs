// Page wiring and renderer tuning for the web frontend.

// Page elements (owned by index.html)
pub const ERROR_ELEMENT_ID: &str = "error";
pub const LOADING_ELEMENT_ID: &str = "loading";
pub const STATUS_ELEMENT_ID: &str = "status";
pub const CANVAS_ID: &str = "hand-canvas";

// Loading indicator is hidden this long after startup, whatever happens
pub const LOADING_HIDE_DELAY_MS: i32 = 1000;

// Messages
pub const MSG_NO_WEBGPU: &str =
    "WebGPU is not available. Please use a browser with WebGPU support and try again.";
pub const MSG_UNKNOWN_SETUP_ERROR: &str =
    "Unknown error occurred while initializing the 3D scene";

// Renderer
pub const MSAA_SAMPLES: u32 = 4;
pub const SHADOW_MAP_SIZE: u32 = 2048;
pub const SHADOW_EXTENT: f32 = 6.0; // half-size of the sun's orthographic frustum
pub const SHADOW_NEAR: f32 = 0.1;
pub const SHADOW_FAR: f32 = 30.0;
pub const SHADOW_DEPTH_BIAS: f32 = 0.002;

// Wheel deltas reported in lines/pages are scaled to pixels
pub const WHEEL_LINE_PX: f32 = 16.0;
pub const WHEEL_PAGE_PX: f32 = 800.0;
