use boxsplash_core::{BoxSplash, Command};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input;
use crate::panel;

/// Steer the world from horizontal pointer motion over the canvas.
pub fn wire_pointermove(canvas: &web::HtmlCanvasElement, app: Rc<RefCell<BoxSplash>>) {
    let canvas_for_listener = canvas.clone();
    let canvas = canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !app.borrow().world().is_running() {
            return;
        }
        let rect = canvas.get_bounding_client_rect();
        let x = input::pointer_world_x(ev.client_x() as f32, rect.left() as f32);
        panel::dispatch(&app, Command::PointerMoved { x });
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
