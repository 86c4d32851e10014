use crate::core::preloader::{BodyStyle, FadePhase};
use crate::dom;
use crate::error::{FxError, FxResult};
use web_sys as web;

fn apply_body_style(body: &web::HtmlElement, style: &BodyStyle) {
    match &style.transition {
        Some(t) => dom::set_style(body, "transition", t),
        None => {
            _ = body.style().remove_property("transition");
        }
    }
    dom::set_style(body, "opacity", &style.opacity.to_string());
}

fn enter_phase(body: web::HtmlElement, phase: FadePhase) {
    apply_body_style(&body, &phase.style());
    let Some((delay, next)) = phase.next() else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    if let Err(e) = dom::set_timeout(&window, delay, move || enter_phase(body, next)) {
        log::error!("[preloader] {}", e);
    }
}

/// Single fade-in of the whole page after every resource has loaded.
pub fn wire_preloader() -> FxResult<()> {
    let window = dom::window()?;
    let document = window.document().ok_or(FxError::NoDocument)?;
    let body = document.body().ok_or(FxError::MissingElement("body"))?;

    dom::on_window_load(&window, &document, move || {
        enter_phase(body, FadePhase::AT_LOAD)
    })
}
