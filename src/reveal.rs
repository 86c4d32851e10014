use crate::constants::{REVEAL_SELECTOR, REVEAL_TRANSITION};
use crate::core::reveal::{self, RevealSet, RevealStyle};
use crate::dom;
use crate::error::FxResult;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn apply_style(el: &web::HtmlElement, style: RevealStyle) {
    dom::set_style(el, "opacity", &style.opacity.to_string());
    dom::set_style(el, "transform", &style.transform());
}

/// Fade cards in the first time they scroll into view. Revealed elements
/// are unobserved, so they never revert.
pub fn wire_reveal_observer() -> FxResult<()> {
    let document = dom::window_document()?;
    let elements = dom::query_all_html(&document, REVEAL_SELECTOR)?;
    if elements.is_empty() {
        log::warn!("[reveal] no elements match `{}`", REVEAL_SELECTOR);
        return Ok(());
    }

    for el in &elements {
        apply_style(el, RevealStyle::HIDDEN);
        dom::set_style(el, "transition", REVEAL_TRANSITION);
    }

    let revealed = Rc::new(RefCell::new(RevealSet::new(elements.len())));
    let targets = elements.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(i) = targets.iter().position(|el| {
                    let el: &web::Element = el;
                    *el == target
                }) else {
                    continue;
                };
                if let Some(style) = revealed.borrow_mut().observe(i, entry.is_intersecting()) {
                    apply_style(&targets[i], style);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(reveal::threshold()));
    init.set_root_margin(&reveal::root_margin());
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(dom::js_err)?;
    callback.forget();

    for el in &elements {
        observer.observe(el);
    }
    log::info!("[reveal] observing {} elements", elements.len());
    Ok(())
}
