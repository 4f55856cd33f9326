use crate::core::ResizeLatch;
use crate::dom::{self, Listener};
use crate::frame::FrameLoop;
use web_sys as web;

/// Keep the canvas backing store in step with its CSS size and flag the
/// field for reinitialization on the next frame.
pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    resize: ResizeLatch,
) -> Listener {
    dom::sync_canvas_backing_size(canvas);
    let canvas = canvas.clone();
    Listener::new(window, "resize", move |_ev: web::Event| {
        dom::sync_canvas_backing_size(&canvas);
        resize.raise();
    })
}

/// Suspend the animation chain while the tab is hidden.
pub fn wire_visibility(document: &web::Document, frame_loop: FrameLoop) -> Listener {
    frame_loop.set_hidden(document.hidden());
    let doc = document.clone();
    Listener::new(document, "visibilitychange", move |_ev: web::Event| {
        let hidden = doc.hidden();
        log::debug!("[visibility] hidden={}", hidden);
        frame_loop.set_hidden(hidden);
    })
}
