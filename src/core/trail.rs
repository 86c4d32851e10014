use glam::Vec2;

/// Opacity of marker `index` in a trail of `len`: 1.0 at the head, falling
/// linearly to `1/len` at the tail.
#[inline]
pub fn marker_opacity(index: usize, len: usize) -> f32 {
    if len == 0 {
        return 0.0;
    }
    1.0 - index as f32 / len as f32
}

/// Ordered position snapshots for the cursor trail markers.
///
/// Each tick marker `i` takes the position marker `i - 1` held on the previous
/// tick and marker 0 jumps to the live pointer, so the tail lags one frame per
/// link.
#[derive(Clone, Debug)]
pub struct CursorTrail {
    positions: Vec<Vec2>,
}

impl CursorTrail {
    pub fn new(len: usize) -> Self {
        Self {
            positions: vec![Vec2::ZERO; len],
        }
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    pub fn tick(&mut self, pointer: Vec2) {
        if self.positions.is_empty() {
            return;
        }
        // back to front so every link reads last tick's value
        for i in (1..self.positions.len()).rev() {
            self.positions[i] = self.positions[i - 1];
        }
        self.positions[0] = pointer;
    }
}
