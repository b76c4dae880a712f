use crate::core::App;
use crate::dom;
use crate::input;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub app: Rc<RefCell<App>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.canvas, "pointerdown", move |ev: web::PointerEvent| {
        if !input::is_primary_button(ev.button()) {
            return;
        }
        let picked = w2
            .app
            .borrow_mut()
            .pointer_down(ev.client_x() as f32, ev.client_y() as f32);
        if picked.is_some() {
            let status = w2.app.borrow().status_text();
            overlay::set_status(&w2.document, &status);
        }
        ev.prevent_default();
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.window, "pointermove", move |ev: web::PointerEvent| {
        w2.app.borrow_mut().pointer_move(
            ev.client_x() as f32,
            ev.client_y() as f32,
            ev.movement_x() as f32,
            ev.movement_y() as f32,
        );
    });
}

fn wire_pointerup(w: &InputWiring) {
    for event in ["pointerup", "pointercancel"] {
        let w2 = w.clone();
        dom::add_listener(&w.window, event, move |_ev: web::PointerEvent| {
            let status = {
                let mut app = w2.app.borrow_mut();
                app.pointer_up();
                app.status_text()
            };
            overlay::set_status(&w2.document, &status);
        });
    }
}

fn wire_wheel(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_listener(&w.canvas, "wheel", move |ev: web::WheelEvent| {
        w2.app
            .borrow_mut()
            .wheel(input::wheel_delta_px(ev.delta_y(), ev.delta_mode()));
        ev.prevent_default();
    });
}
