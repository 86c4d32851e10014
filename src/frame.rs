use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A unit of per-frame work driven by `requestAnimationFrame`.
pub trait FrameTask {
    fn tick(&mut self);
}

impl<T: FrameTask> FrameTask for Rc<RefCell<T>> {
    fn tick(&mut self) {
        self.borrow_mut().tick();
    }
}

/// Drive `task` once per display refresh until the page unloads.
///
/// Each task gets its own self-rescheduling callback, so independent loops
/// never wait on one another.
pub fn start_loop<T: FrameTask + 'static>(mut task: T) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        task.tick();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}
