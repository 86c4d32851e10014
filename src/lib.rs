#![cfg(target_arch = "wasm32")]
use crate::error::FxResult;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod core;
mod dom;
mod error;
mod events;
mod frame;
mod preloader;
mod render;
mod reveal;
mod scene;
mod trail;
mod typing;

// Effects are wired independently; one failing leaves the rest running.
fn report(area: &str, result: FxResult<()>) {
    if let Err(e) = result {
        log::error!("[{}] {}", area, e);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-fx starting");

    let pointer = Rc::new(RefCell::new(core::PointerState::default()));

    report("pointer", events::pointer::wire_pointer_tracker(pointer.clone()));
    report("scroll", events::scroll::wire_scroll_effects());
    report("nav", events::nav::wire_smooth_scroll());
    report("reveal", reveal::wire_reveal_observer());
    report("trail", trail::wire_cursor_trail(pointer.clone()));
    report("typing", typing::wire_typing_effect());
    report("preloader", preloader::wire_preloader());

    // WebGPU setup is async; the scene joins once the device is ready.
    spawn_local(async move {
        if let Err(e) = scene::wire_scene(pointer).await {
            log::error!("[scene] init error: {:?}", e);
        }
    });
    Ok(())
}
