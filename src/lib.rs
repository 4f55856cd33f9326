#![cfg(target_arch = "wasm32")]
use crate::constants::DEFAULT_CANVAS_ID;
use crate::core::{AlertFlag, FieldParams, ResizeLatch, Subscription};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("trioll-field starting");
    Ok(())
}

/// Animated particle background bound to one canvas.
///
/// JS owns the handle: `new Background()` starts the animation, `free()` (or
/// `destroy()`) stops it and removes every listener it installed.
#[wasm_bindgen]
pub struct Background {
    ctx: Rc<RefCell<frame::FrameContext>>,
    frame_loop: frame::FrameLoop,
    alert: AlertFlag,
    listeners: Vec<dom::Listener>,
    subscriptions: Vec<Subscription>,
}

#[wasm_bindgen]
impl Background {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: Option<String>) -> Result<Background, JsValue> {
        Self::build(canvas_id, FieldParams::default()).map_err(to_js_error)
    }

    /// Same as the constructor with a lower particle cap, for small devices.
    pub fn with_max_particles(
        canvas_id: Option<String>,
        max_particles: usize,
    ) -> Result<Background, JsValue> {
        let params = FieldParams {
            max_particles,
            ..FieldParams::default()
        };
        Self::build(canvas_id, params).map_err(to_js_error)
    }

    pub fn set_alert(&self, value: bool) {
        if value != self.alert.get() {
            log::info!("[alert] {}", if value { "raised" } else { "cleared" });
        }
        self.alert.set(value);
    }

    pub fn alert(&self) -> bool {
        self.alert.get()
    }

    /// Call `callback(value)` on every `set_alert` until `destroy`.
    pub fn on_alert_change(&mut self, callback: js_sys::Function) {
        let sub = self.alert.subscribe(move |value| {
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_bool(value)) {
                log::warn!("[alert] subscriber threw: {:?}", e);
            }
        });
        self.subscriptions.push(sub);
    }

    pub fn stop(&self) {
        self.frame_loop.stop();
    }

    pub fn resume(&self) {
        self.frame_loop.resume();
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn destroy(&mut self) {
        self.frame_loop.stop();
        self.listeners.clear();
        self.subscriptions.clear();
    }

    pub fn particle_count(&self) -> usize {
        self.ctx.borrow().particle_count()
    }
}

impl Background {
    fn build(canvas_id: Option<String>, params: FieldParams) -> anyhow::Result<Background> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas_id = canvas_id.unwrap_or_else(|| DEFAULT_CANVAS_ID.to_string());
        let canvas = dom::ensure_canvas(&document, &canvas_id)?;

        let pointer = Rc::new(RefCell::new(input::PointerState::default()));
        let resize = ResizeLatch::new(true);
        let alert = AlertFlag::new(false);

        let mut listeners = vec![events::wire_resize(
            &window,
            &canvas,
            resize.clone(),
        )];
        listeners.extend(events::wire_pointer_handlers(
            &window,
            events::PointerWiring {
                canvas: canvas.clone(),
                pointer: pointer.clone(),
            },
        ));

        let ctx = Rc::new(RefCell::new(frame::FrameContext::new(
            canvas,
            params,
            pointer,
            alert.clone(),
            resize,
        )));
        let frame_loop = frame::FrameLoop::start(ctx.clone());
        listeners.push(events::wire_visibility(&document, frame_loop.clone()));

        log::info!("[background] running on #{}", canvas_id);
        Ok(Background {
            ctx,
            frame_loop,
            alert,
            listeners,
            subscriptions: Vec::new(),
        })
    }
}

impl Drop for Background {
    fn drop(&mut self) {
        self.frame_loop.stop();
    }
}

fn to_js_error(e: anyhow::Error) -> JsValue {
    log::error!("init error: {:?}", e);
    JsValue::from_str(&format!("{:#}", e))
}
