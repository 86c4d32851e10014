use crate::error::{FxError, FxResult};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window() -> FxResult<web::Window> {
    web::window().ok_or(FxError::NoWindow)
}

#[inline]
pub fn window_document() -> FxResult<web::Document> {
    window()?.document().ok_or(FxError::NoDocument)
}

pub fn js_err(v: JsValue) -> FxError {
    FxError::Js(format!("{:?}", v))
}

pub fn html_by_id(document: &web::Document, id: &'static str) -> FxResult<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or(FxError::MissingElement(id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| FxError::WrongElementType(id))
}

pub fn query_html(document: &web::Document, selector: &'static str) -> FxResult<web::HtmlElement> {
    document
        .query_selector(selector)
        .map_err(js_err)?
        .ok_or(FxError::MissingElement(selector))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| FxError::WrongElementType(selector))
}

/// All matches of `selector` in document order. Non-HTML nodes are skipped.
pub fn query_all_html(document: &web::Document, selector: &str) -> FxResult<Vec<web::HtmlElement>> {
    let list = document.query_selector_all(selector).map_err(js_err)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

/// Match the canvas backing store and CSS box to the window's inner size.
pub fn size_canvas_to_window(window: &web::Window, canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let (w, h) = viewport_size(window);
    let w_px = (w as u32).max(1);
    let h_px = (h as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    set_style(canvas, "width", &format!("{}px", w_px));
    set_style(canvas, "height", &format!("{}px", h_px));
    (w_px, h_px)
}

/// Register a listener for the lifetime of the page.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) -> FxResult<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

/// One-shot timer. The closure frees itself after it runs.
pub fn set_timeout(window: &web::Window, delay_ms: i32, f: impl FnOnce() + 'static) -> FxResult<i32> {
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
        .map_err(js_err)
}

/// Run `f` once the document is parsed; immediately if that already happened.
pub fn on_dom_ready(document: &web::Document, f: impl FnOnce() + 'static) -> FxResult<()> {
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let cb = Closure::once_into_js(f);
    document
        .add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref())
        .map_err(js_err)
}

/// Run `f` once every resource has loaded; immediately if that already happened.
pub fn on_window_load(
    window: &web::Window,
    document: &web::Document,
    f: impl FnOnce() + 'static,
) -> FxResult<()> {
    if document.ready_state() == "complete" {
        f();
        return Ok(());
    }
    let cb = Closure::once_into_js(f);
    window
        .add_event_listener_with_callback("load", cb.unchecked_ref())
        .map_err(js_err)
}
