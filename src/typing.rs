use crate::constants::TYPING_TARGET_SELECTOR;
use crate::core::typing::Typewriter;
use crate::dom;
use crate::error::{FxError, FxResult};
use web_sys as web;

pub fn wire_typing_effect() -> FxResult<()> {
    let window = dom::window()?;
    let document = window.document().ok_or(FxError::NoDocument)?;
    let doc = document.clone();
    dom::on_dom_ready(&document, move || {
        if let Err(e) = start_typing(&window, &doc) {
            log::error!("[typing] {}", e);
        }
    })
}

fn start_typing(window: &web::Window, document: &web::Document) -> FxResult<()> {
    let el = dom::query_html(document, TYPING_TARGET_SELECTOR)?;
    // capture before clearing
    let original = el.text_content().unwrap_or_default();
    el.set_text_content(Some(""));
    let writer = Typewriter::new(&original);
    let Some(delay) = writer.start_delay_ms() else {
        return Ok(());
    };
    log::info!("[typing] {} chars queued", writer.remaining());
    dom::set_timeout(window, delay, move || type_next(el, writer))?;
    Ok(())
}

fn type_next(el: web::HtmlElement, mut writer: Typewriter) {
    let Some(step) = writer.advance() else {
        return;
    };
    el.set_text_content(Some(step.text));
    let Some(delay) = step.next_delay_ms else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    if let Err(e) = dom::set_timeout(&window, delay, move || type_next(el, writer)) {
        log::error!("[typing] {}", e);
    }
}
