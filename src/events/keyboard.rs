use boxsplash_core::BoxSplash;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::input;
use crate::panel;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, app: &Rc<RefCell<BoxSplash>>) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    if let Some(command) = input::command_for_key(&key) {
        log::debug!("[keys] {:?} -> {:?}", key, command);
        panel::dispatch(app, command);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(app: Rc<RefCell<BoxSplash>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &app);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
