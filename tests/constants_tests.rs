// Host-side tests for page wiring and renderer constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use hand_core::constants as core_constants;

#[test]
fn page_element_ids_are_distinct() {
    let ids = [ERROR_ELEMENT_ID, LOADING_ELEMENT_ID, STATUS_ELEMENT_ID, CANVAS_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn user_facing_messages() {
    assert!(MSG_NO_WEBGPU.starts_with("WebGPU is not available"));
    assert!(!MSG_UNKNOWN_SETUP_ERROR.trim().is_empty());
    assert_eq!(LOADING_HIDE_DELAY_MS, 1000);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn msaa_sample_count_is_supported_by_webgpu() {
    // WebGPU only guarantees 1 and 4
    assert!(MSAA_SAMPLES == 1 || MSAA_SAMPLES == 4);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shadow_frustum_covers_the_sun_and_the_hand() {
    assert!(SHADOW_MAP_SIZE.is_power_of_two());
    assert!(SHADOW_NEAR > 0.0 && SHADOW_NEAR < SHADOW_FAR);
    let sun = glam::Vec3::from(core_constants::SUN_POSITION);
    // The frustum is aimed at the origin from the sun
    assert!(sun.length() > SHADOW_NEAR && sun.length() < SHADOW_FAR);
    // Palm and grid fit inside the orthographic extent
    assert!(core_constants::PALM_SIZE[2] < SHADOW_EXTENT);
    assert!(core_constants::GRID_SIZE * 0.5 <= SHADOW_EXTENT);
    assert!(SHADOW_DEPTH_BIAS > 0.0 && SHADOW_DEPTH_BIAS < 0.01);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn wheel_scales_are_ordered() {
    assert!(WHEEL_LINE_PX > 1.0);
    assert!(WHEEL_PAGE_PX > WHEEL_LINE_PX);
}
