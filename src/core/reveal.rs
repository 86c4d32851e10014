use super::constants::{REVEAL_BOTTOM_MARGIN_PX, REVEAL_OFFSET_PX, REVEAL_THRESHOLD};

/// Inline style applied to a watched element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub offset_px: f64,
}

impl RevealStyle {
    pub const HIDDEN: RevealStyle = RevealStyle {
        opacity: 0.0,
        offset_px: REVEAL_OFFSET_PX,
    };
    pub const VISIBLE: RevealStyle = RevealStyle {
        opacity: 1.0,
        offset_px: 0.0,
    };

    pub fn transform(&self) -> String {
        if self.offset_px == 0.0 {
            "translateY(0)".to_string()
        } else {
            format!("translateY({}px)", self.offset_px)
        }
    }
}

/// Root margin passed to the intersection observer: fire 100px before the
/// element reaches the viewport's bottom edge.
pub fn root_margin() -> String {
    format!("0px 0px -{}px 0px", REVEAL_BOTTOM_MARGIN_PX)
}

#[inline]
pub fn threshold() -> f64 {
    REVEAL_THRESHOLD
}

/// One-way hidden → visible latch per watched element.
#[derive(Clone, Debug, Default)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    /// Feed one intersection entry. Returns the style to apply only on the
    /// first qualifying intersection of `index`; later entries are no-ops.
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> Option<RevealStyle> {
        let slot = self.revealed.get_mut(index)?;
        if !is_intersecting || *slot {
            return None;
        }
        *slot = true;
        Some(RevealStyle::VISIBLE)
    }
}
