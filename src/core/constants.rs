// Behavior tuning shared by the scene, scroll and cursor effects.
// Kept free of crate paths so host tests can `include!` it directly.

// Particle cloud
pub const PARTICLE_COUNT: usize = 3000;
pub const PARTICLE_CUBE_SIZE: f32 = 100.0; // positions span [-50, 50) on every axis
pub const PARTICLE_SPIN_X: f32 = 0.0003; // radians per frame
pub const PARTICLE_SPIN_Y: f32 = 0.0005;
pub const PARTICLE_COLOR: [f32; 4] = [0.0, 1.0, 0.529, 0.8]; // #00ff87 @ 0.8

// Spheres
pub const SPHERE_COUNT: usize = 5;
pub const SPHERE_SPREAD: f32 = 20.0;
pub const SPHERE_RADIUS: f32 = 1.0;
pub const SPHERE_SEGMENTS: u32 = 32;
pub const SPHERE_SPIN_X: f32 = 0.001; // multiplied by (index + 1)
pub const SPHERE_SPIN_Y: f32 = 0.002;
pub const SPHERE_BOB_AMPLITUDE: f32 = 2.0;
pub const SPHERE_COLORS: [[f32; 4]; 2] = [
    [0.0, 1.0, 0.529, 0.3],   // #00ff87
    [0.376, 0.937, 1.0, 0.3], // #60efff
];

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START_Z: f32 = 5.0;
pub const CAMERA_FOLLOW: f32 = 0.05; // fraction of remaining distance per frame
pub const CAMERA_POINTER_SCALE: f32 = 2.0;

// Scroll
pub const NAVBAR_HIDE_THRESHOLD_PX: f64 = 100.0;
pub const SECTION_TOP_OFFSET_PX: f64 = 100.0;
pub const PARALLAX_FACTOR: f64 = 0.3;

// Visibility reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_BOTTOM_MARGIN_PX: i32 = 100;
pub const REVEAL_OFFSET_PX: f64 = 50.0;

// Cursor trail
pub const TRAIL_LENGTH: usize = 20;
pub const TRAIL_MARKER_SIZE_PX: u32 = 6;

// Typing effect
pub const TYPING_START_DELAY_MS: i32 = 1500;
pub const TYPING_CHAR_INTERVAL_MS: i32 = 20;

// Preloader
pub const PRELOADER_DELAY_MS: i32 = 100;
pub const PRELOADER_FADE_MS: i32 = 1000;
