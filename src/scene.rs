use crate::constants::SCENE_CONTAINER_ID;
use crate::core::{PointerState, SceneState};
use crate::dom;
use crate::error::FxError;
use crate::frame::{self, FrameTask};
use crate::render::GpuState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Background scene: retained state plus its GPU resources. Reads the
/// pointer, writes nothing outside itself.
pub struct SceneRenderer {
    state: SceneState,
    gpu: GpuState,
    pointer: Rc<RefCell<PointerState>>,
    started: Instant,
}

impl SceneRenderer {
    pub fn resize(&mut self, width: u32, height: u32) {
        self.state.resize(width, height);
        self.gpu.resize(width, height);
    }
}

impl FrameTask for SceneRenderer {
    fn tick(&mut self) {
        let ndc = self.pointer.borrow().ndc;
        self.state.tick(self.started.elapsed().as_secs_f32(), ndc);
        match self.gpu.render(&self.state) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => self.gpu.reconfigure(),
            Err(e) => log::error!("[scene] render error: {:?}", e),
        }
    }
}

pub async fn wire_scene(pointer: Rc<RefCell<PointerState>>) -> anyhow::Result<()> {
    let window = dom::window()?;
    let document = window.document().ok_or(FxError::NoDocument)?;
    let container = dom::html_by_id(&document, SCENE_CONTAINER_ID)?;

    let canvas = document
        .create_element("canvas")
        .map_err(dom::js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| FxError::WrongElementType("canvas"))?;
    container.append_child(&canvas).map_err(dom::js_err)?;
    let (width, height) = dom::size_canvas_to_window(&window, &canvas);

    let state = SceneState::new(&mut rand::thread_rng(), width, height);
    let gpu = GpuState::new(&canvas, &state).await?;
    log::info!(
        "[scene] {} particles, {} spheres at {}x{}",
        state.particles.positions.len(),
        state.spheres.len(),
        width,
        height
    );

    let renderer = Rc::new(RefCell::new(SceneRenderer {
        state,
        gpu,
        pointer,
        started: Instant::now(),
    }));

    let renderer_resize = renderer.clone();
    let window_resize = window.clone();
    dom::add_listener(&window, "resize", move |_| {
        let (w, h) = dom::size_canvas_to_window(&window_resize, &canvas);
        renderer_resize.borrow_mut().resize(w, h);
    })?;

    frame::start_loop(renderer);
    Ok(())
}
