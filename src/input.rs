// Pure pointer/viewport helpers. Kept free of web-sys types so they can be
// tested on the host.

use crate::constants::{WHEEL_LINE_PX, WHEEL_PAGE_PX};

/// Canvas backing-store size for a CSS size at the given device pixel ratio.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css_width * dpr).round() as u32;
    let h = (css_height * dpr).round() as u32;
    (w.max(1), h.max(1))
}

/// Wheel delta in pixels; `delta_mode` is the DOM `WheelEvent.deltaMode`
/// (0 = pixels, 1 = lines, 2 = pages).
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32) -> f32 {
    let scale = match delta_mode {
        1 => WHEEL_LINE_PX,
        2 => WHEEL_PAGE_PX,
        _ => 1.0,
    };
    delta_y as f32 * scale
}

/// Only the primary button starts a finger drag or an orbit.
#[inline]
pub fn is_primary_button(button: i16) -> bool {
    button == 0
}
