// Host-side tests for swapchain format selection and frame error handling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod surface {
    include!("../src/render/surface.rs");
}

use surface::*;
use wgpu::TextureFormat as F;

#[test]
fn webgpu_canvas_formats_render_through_an_srgb_view() {
    // What a browser canvas reports: no sRGB entries
    let picked = pick_surface_formats(&[F::Bgra8Unorm, F::Rgba8Unorm, F::Rgba16Float]).unwrap();
    assert_eq!(picked.surface, F::Bgra8Unorm);
    assert_eq!(picked.view, F::Bgra8UnormSrgb);
    assert_eq!(picked.extra_view_formats(), vec![F::Bgra8UnormSrgb]);
}

#[test]
fn float_first_still_prefers_an_srgb_capable_format() {
    let picked = pick_surface_formats(&[F::Rgba16Float, F::Rgba8Unorm]).unwrap();
    assert_eq!(picked.surface, F::Rgba8Unorm);
    assert_eq!(picked.view, F::Rgba8UnormSrgb);
}

#[test]
fn native_srgb_surface_needs_no_extra_view() {
    let picked = pick_surface_formats(&[F::Bgra8Unorm, F::Bgra8UnormSrgb]).unwrap();
    assert_eq!(picked.surface, F::Bgra8UnormSrgb);
    assert_eq!(picked.view, F::Bgra8UnormSrgb);
    assert!(picked.extra_view_formats().is_empty());
}

#[test]
fn only_float_falls_back_to_it() {
    let picked = pick_surface_formats(&[F::Rgba16Float]).unwrap();
    assert_eq!(picked.surface, F::Rgba16Float);
    assert_eq!(picked.view, F::Rgba16Float);
    assert!(picked.extra_view_formats().is_empty());
}

#[test]
fn no_formats_is_none() {
    assert_eq!(pick_surface_formats(&[]), None);
}

#[test]
fn lost_and_outdated_surfaces_are_reconfigured() {
    assert_eq!(
        frame_recovery(&wgpu::SurfaceError::Lost),
        FrameRecovery::Reconfigure
    );
    assert_eq!(
        frame_recovery(&wgpu::SurfaceError::Outdated),
        FrameRecovery::Reconfigure
    );
    assert_eq!(frame_recovery(&wgpu::SurfaceError::Timeout), FrameRecovery::Skip);
    assert_eq!(
        frame_recovery(&wgpu::SurfaceError::OutOfMemory),
        FrameRecovery::Fatal
    );
}
