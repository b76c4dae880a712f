use crate::core::App;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Keep the camera aspect and canvas size in step with the window. The GPU
/// surface follows the canvas size on the next frame.
pub fn wire_resize(window: &web::Window, app: Rc<RefCell<App>>, canvas: web::HtmlCanvasElement) {
    dom::add_listener(window, "resize", move |_ev: web::Event| {
        let Some(w) = web::window() else {
            return;
        };
        let viewport = dom::viewport_size(&w);
        app.borrow_mut().resize(viewport.width, viewport.height);
        dom::sync_canvas_backing_size(&canvas, viewport);
        log::debug!("[resize] {}x{}", viewport.width, viewport.height);
    });
}
