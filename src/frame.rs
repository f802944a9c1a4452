use boxsplash_core::{BoxSplash, Command};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::MAX_FRAME_DT_MS;
use crate::dom;
use crate::input;
use crate::panel;
use crate::render::CanvasRenderer;

pub struct FrameContext {
    pub app: Rc<RefCell<BoxSplash>>,
    pub canvas: web::HtmlCanvasElement,
    pub renderer: CanvasRenderer,
    pub last_instant: Instant,
    pub last_css_size: (f32, f32),
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_millis(MAX_FRAME_DT_MS));
        self.last_instant = now;

        let dpr = dom::device_pixel_ratio();
        let size = input::css_size(self.canvas.width(), self.canvas.height(), dpr);
        if size != self.last_css_size {
            self.last_css_size = size;
            panel::dispatch(
                &self.app,
                Command::Resize {
                    width: size.0,
                    height: size.1,
                },
            );
        }

        let ticks = self.app.borrow_mut().update(dt);
        if ticks > 0 {
            panel::refresh(&self.app);
        }
        self.renderer.draw(self.app.borrow().world(), dpr);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
