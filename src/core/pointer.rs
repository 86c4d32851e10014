use glam::Vec2;

/// Latest pointer position, captured without smoothing.
///
/// Two views of the same event are kept: `ndc` in the -1..1 range (y up) for
/// the camera rig, and `client` in raw CSS pixels for the cursor trail.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
    pub client: Vec2,
}

impl PointerState {
    pub fn record(&mut self, client_x: f32, client_y: f32, width: f32, height: f32) {
        self.client = Vec2::new(client_x, client_y);
        self.ndc = client_to_ndc(client_x, client_y, width, height);
    }
}

#[inline]
pub fn client_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new(x / w * 2.0 - 1.0, -(y / h * 2.0 - 1.0))
}
