use crate::constants::{TRAIL_MARKER_RGB, TRAIL_MARKER_Z_INDEX, TRAIL_TRANSITION};
use crate::core::constants::{TRAIL_LENGTH, TRAIL_MARKER_SIZE_PX};
use crate::core::trail::{marker_opacity, CursorTrail};
use crate::core::PointerState;
use crate::dom;
use crate::error::{FxError, FxResult};
use crate::frame::{self, FrameTask};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct TrailAnimator {
    trail: CursorTrail,
    markers: Vec<web::HtmlElement>,
    pointer: Rc<RefCell<PointerState>>,
}

impl FrameTask for TrailAnimator {
    fn tick(&mut self) {
        let head = self.pointer.borrow().client;
        self.trail.tick(head);
        for (marker, pos) in self.markers.iter().zip(self.trail.positions()) {
            dom::set_style(marker, "left", &format!("{}px", pos.x));
            dom::set_style(marker, "top", &format!("{}px", pos.y));
        }
    }
}

fn create_marker(document: &web::Document, index: usize) -> FxResult<web::HtmlElement> {
    let marker = document
        .create_element("div")
        .map_err(dom::js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| FxError::WrongElementType("div"))?;
    let size = format!("{}px", TRAIL_MARKER_SIZE_PX);
    let alpha = marker_opacity(index, TRAIL_LENGTH);
    dom::set_style(&marker, "position", "fixed");
    dom::set_style(&marker, "width", &size);
    dom::set_style(&marker, "height", &size);
    dom::set_style(&marker, "border-radius", "50%");
    dom::set_style(
        &marker,
        "background",
        &format!("rgba({}, {})", TRAIL_MARKER_RGB, alpha),
    );
    dom::set_style(&marker, "pointer-events", "none");
    dom::set_style(&marker, "z-index", TRAIL_MARKER_Z_INDEX);
    dom::set_style(&marker, "transition", TRAIL_TRANSITION);
    Ok(marker)
}

pub fn wire_cursor_trail(pointer: Rc<RefCell<PointerState>>) -> FxResult<()> {
    let document = dom::window_document()?;
    let body = document.body().ok_or(FxError::MissingElement("body"))?;

    let mut markers = Vec::with_capacity(TRAIL_LENGTH);
    for i in 0..TRAIL_LENGTH {
        let marker = create_marker(&document, i)?;
        body.append_child(&marker).map_err(dom::js_err)?;
        markers.push(marker);
    }
    log::info!("[trail] {} markers", markers.len());

    frame::start_loop(TrailAnimator {
        trail: CursorTrail::new(TRAIL_LENGTH),
        markers,
        pointer,
    });
    Ok(())
}
