#![cfg(target_arch = "wasm32")]
use crate::constants::{LOADING_HIDE_DELAY_MS, MSG_NO_WEBGPU, MSG_UNKNOWN_SETUP_ERROR};
use crate::core::{App, CameraControls, SetupError};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

#[cfg(feature = "orbit-controls")]
fn camera_controls(_document: &web::Document) -> Box<dyn CameraControls> {
    Box::new(crate::core::OrbitControls::new())
}

/// Builds without the orbit controller report it and carry on with the stub.
#[cfg(not(feature = "orbit-controls"))]
fn camera_controls(document: &web::Document) -> Box<dyn CameraControls> {
    let err = SetupError::ControlsUnavailable;
    debug_assert!(err.is_recoverable());
    overlay::show_error(document, &err.to_string());
    Box::new(crate::core::StaticControls::default())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hand-web starting");

    // The loading indicator goes away on a timer whether or not setup succeeds.
    if let Some(window) = web::window() {
        dom::set_timeout(&window, LOADING_HIDE_DELAY_MS, || {
            if let Some(document) = dom::window_document() {
                overlay::hide_loading(&document);
            }
            log::info!("App loaded successfully");
        });
    }

    spawn_local(async move {
        if let Err(e) = init().await {
            let message = e.to_string();
            let message = if message.trim().is_empty() {
                MSG_UNKNOWN_SETUP_ERROR
            } else {
                message.as_str()
            };
            match dom::window_document() {
                Some(document) => overlay::show_error(&document, message),
                None => log::error!("init error: {}", message),
            }
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let started = Instant::now();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if !dom::has_webgpu(&window) {
        let err = SetupError::RendererUnavailable(MSG_NO_WEBGPU.to_string());
        overlay::show_error(&document, &err.to_string());
        return Ok(());
    }

    let canvas = dom::create_canvas(&document)?;
    let viewport = dom::viewport_size(&window);
    dom::sync_canvas_backing_size(&canvas, viewport);

    let controls = camera_controls(&document);
    let app = Rc::new(RefCell::new(App::new(viewport, controls)));
    overlay::set_status(&document, &app.borrow().status_text());

    events::wire_input_handlers(events::InputWiring {
        window: window.clone(),
        document: document.clone(),
        canvas: canvas.clone(),
        app: app.clone(),
    });
    events::wire_resize(&window, app.clone(), canvas.clone());

    let gpu = frame::init_gpu(&canvas, &app)
        .await
        .map_err(|e| SetupError::Gpu(e.to_string()))?;
    log::info!(
        "[gpu] ready in {:.0} ms",
        started.elapsed().as_secs_f64() * 1000.0
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app,
        canvas,
        gpu: Some(gpu),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
