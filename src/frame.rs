use crate::core::{
    tick_and_paint, AlertFlag, FieldError, FieldParams, LoopAction, LoopState, ParticleField,
    ResizeLatch,
};
use crate::dom;
use crate::input;
use crate::render::CanvasSurface;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub surface: Option<CanvasSurface>,
    pub field: Option<ParticleField>,
    pub params: FieldParams,

    pub pointer: Rc<RefCell<input::PointerState>>,
    pub alert: AlertFlag,
    pub resize: ResizeLatch,

    pub last_instant: Instant,
    pub warned_no_context: bool,
}

impl FrameContext {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        params: FieldParams,
        pointer: Rc<RefCell<input::PointerState>>,
        alert: AlertFlag,
        resize: ResizeLatch,
    ) -> Self {
        Self {
            canvas,
            surface: None,
            field: None,
            params,
            pointer,
            alert,
            resize,
            last_instant: Instant::now(),
            warned_no_context: false,
        }
    }

    /// One Tick + Render pass. Without a 2d context both are skipped.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        if self.field.is_none() {
            self.resize.raise();
        }
        let latch = self.resize.clone();
        if let Some(Err(e)) = latch.service(|| self.reinit_field()) {
            log::debug!("[field] reinit deferred: {}", e);
        }

        if self.surface.is_none() {
            self.surface = CanvasSurface::from_canvas(&self.canvas);
            if self.surface.is_none() && !self.warned_no_context {
                log::warn!("2d context unavailable; skipping frames until it is");
                self.warned_no_context = true;
            }
        }
        let Some(field) = self.field.as_mut() else {
            return;
        };
        if let Some(surface) = &self.surface {
            surface.begin_frame(dom::device_pixel_ratio());
        }
        let pointer = self.pointer.borrow().position;
        tick_and_paint(
            field,
            self.surface.as_mut(),
            dt_sec,
            pointer,
            self.alert.get(),
        );
    }

    fn reinit_field(&mut self) -> Result<(), FieldError> {
        let size = dom::canvas_css_size(&self.canvas);
        if let Some(field) = self.field.as_mut() {
            field.resize(size.x, size.y)?;
        } else {
            let rng = StdRng::from_entropy();
            self.field = Some(ParticleField::new(size.x, size.y, self.params.clone(), rng)?);
        }
        log::info!(
            "[field] {} particles for {:.0}x{:.0}",
            self.particle_count(),
            size.x,
            size.y
        );
        Ok(())
    }

    /// Forget the previous frame time so a resumed loop starts with a small dt.
    pub fn reset_clock(&mut self) {
        self.last_instant = Instant::now();
    }

    pub fn particle_count(&self) -> usize {
        self.field.as_ref().map_or(0, ParticleField::len)
    }
}

struct LoopInner {
    ctx: Rc<RefCell<FrameContext>>,
    state: RefCell<LoopState>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopInner {
    fn request(&self) {
        let tick = self.tick.borrow();
        let (Some(tick), Some(w)) = (tick.as_ref(), web::window()) else {
            return;
        };
        match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(id) => self.state.borrow_mut().requested(id),
            Err(e) => log::warn!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn apply(&self, action: LoopAction) {
        match action {
            LoopAction::Request => {
                self.ctx.borrow_mut().reset_clock();
                self.request();
            }
            LoopAction::Cancel(id) => {
                if let Some(w) = web::window() {
                    _ = w.cancel_animation_frame(id);
                }
            }
            LoopAction::Keep => {}
        }
    }

    fn update(&self, change: impl FnOnce(&mut LoopState) -> LoopAction) {
        let action = change(&mut self.state.borrow_mut());
        self.apply(action);
    }
}

impl Drop for LoopInner {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.state.get_mut().take_pending(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
    }
}

/// requestAnimationFrame-driven loop. After `stop` (or while the page is
/// hidden) no further frame runs until `resume`.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    pub fn start(ctx: Rc<RefCell<FrameContext>>) -> Self {
        let inner = Rc::new(LoopInner {
            ctx,
            state: RefCell::new(LoopState::default()),
            tick: RefCell::new(None),
        });
        let weak: Weak<LoopInner> = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.state.borrow_mut().begin_frame() {
                return;
            }
            inner.ctx.borrow_mut().frame();
            if inner.state.borrow_mut().sync() == LoopAction::Request {
                inner.request();
            }
        }) as Box<dyn FnMut()>));
        inner.update(LoopState::sync);
        Self { inner }
    }

    pub fn stop(&self) {
        self.inner.update(|s| s.set_stopped(true));
    }

    pub fn resume(&self) {
        self.inner.update(|s| s.set_stopped(false));
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.inner.update(|s| s.set_hidden(hidden));
    }

    pub fn is_running(&self) -> bool {
        self.inner.state.borrow().pending().is_some()
    }
}
