#![cfg(target_arch = "wasm32")]
use boxsplash_core::{BoxSplash, Command, ConfigProxy, DEFAULT_SEED};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod panel;
mod render;

/// Keep the canvas backing store in step with its CSS box; the frame loop
/// picks up the new size and forwards it to the world.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::fit_canvas_to_css(canvas);
    let Some(window) = web::window() else {
        return;
    };
    let canvas = canvas.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || dom::fit_canvas_to_css(&canvas));
    _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("boxsplash-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);
    let css_size = input::css_size(canvas.width(), canvas.height(), dom::device_pixel_ratio());

    // Fresh layout on every load, unlike the native host's fixed default seed
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64 ^ DEFAULT_SEED;
    let app = Rc::new(RefCell::new(BoxSplash::new(ConfigProxy::default(), seed)));
    app.borrow_mut().dispatch(Command::Resize {
        width: css_size.0,
        height: css_size.1,
    })?;
    app.borrow_mut().dispatch(Command::Startup)?;
    panel::build(&document, &app)?;
    panel::refresh(&app);

    events::wire_global_keydown(app.clone());
    events::wire_pointermove(&canvas, app.clone());

    let renderer = render::CanvasRenderer::new(&canvas)?;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app: app.clone(),
        canvas: canvas.clone(),
        renderer,
        last_instant: Instant::now(),
        last_css_size: css_size,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
