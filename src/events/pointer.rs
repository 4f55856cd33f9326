use crate::dom::Listener;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<input::PointerState>>,
}

/// Track the pointer on the whole window; the canvas itself sits behind the
/// page and never receives events.
pub fn wire_pointer_handlers(window: &web::Window, w: PointerWiring) -> Vec<Listener> {
    let mut listeners = vec![
        wire_pointermove(window, &w),
        wire_touchmove(window, &w),
        wire_touchend(window, &w),
    ];
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        listeners.push(wire_pointerleave(&root, &w));
    }
    listeners
}

fn wire_pointermove(window: &web::Window, w: &PointerWiring) -> Listener {
    let w = w.clone();
    Listener::new(window, "pointermove", move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_css(&ev, &w.canvas);
        w.pointer.borrow_mut().position = Some(pos);
    })
}

fn wire_touchmove(window: &web::Window, w: &PointerWiring) -> Listener {
    let w = w.clone();
    Listener::passive(window, "touchmove", move |ev: web::TouchEvent| {
        if let Some(pos) = input::touch_canvas_css(&ev, &w.canvas) {
            w.pointer.borrow_mut().position = Some(pos);
        }
    })
}

fn wire_touchend(window: &web::Window, w: &PointerWiring) -> Listener {
    let w = w.clone();
    Listener::passive(window, "touchend", move |ev: web::TouchEvent| {
        if ev.touches().length() == 0 {
            w.pointer.borrow_mut().position = None;
        }
    })
}

fn wire_pointerleave(root: &web::Element, w: &PointerWiring) -> Listener {
    let w = w.clone();
    Listener::new(root, "pointerleave", move |_ev: web::PointerEvent| {
        w.pointer.borrow_mut().position = None;
    })
}
