pub mod constants;
pub mod mesh;
pub mod nav;
pub mod pointer;
pub mod preloader;
pub mod reveal;
pub mod scene;
pub mod scroll;
pub mod trail;
pub mod typing;

pub use pointer::PointerState;
pub use scene::SceneState;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
