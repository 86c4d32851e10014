use crate::core::PointerState;
use crate::dom;
use crate::error::{FxError, FxResult};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Single `pointermove` listener feeding both the camera rig and the trail.
pub fn wire_pointer_tracker(pointer: Rc<RefCell<PointerState>>) -> FxResult<()> {
    let window = dom::window()?;
    let document = window.document().ok_or(FxError::NoDocument)?;

    dom::add_listener(&document, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (w, h) = dom::viewport_size(&window);
        pointer.borrow_mut().record(
            ev.client_x() as f32,
            ev.client_y() as f32,
            w as f32,
            h as f32,
        );
    })
}
