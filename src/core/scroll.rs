use super::constants::{NAVBAR_HIDE_THRESHOLD_PX, PARALLAX_FACTOR, SECTION_TOP_OFFSET_PX};

/// Page geometry sampled on each scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

/// Width of the progress bar in percent, clamped to 0..=100.
/// A document that cannot scroll reports 0.
pub fn progress_percent(m: &ScrollMetrics) -> f64 {
    let scrollable = m.document_height - m.viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (m.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarVisibility {
    Shown,
    Hidden,
}

impl NavbarVisibility {
    pub fn transform(self) -> &'static str {
        match self {
            NavbarVisibility::Shown => "translateY(0)",
            NavbarVisibility::Hidden => "translateY(-100%)",
        }
    }
}

/// Hides the navbar while scrolling down past the threshold.
#[derive(Default, Clone, Copy, Debug)]
pub struct NavbarState {
    last_scroll: f64,
}

impl NavbarState {
    pub fn update(&mut self, current: f64) -> NavbarVisibility {
        let vis = if current > self.last_scroll && current > NAVBAR_HIDE_THRESHOLD_PX {
            NavbarVisibility::Hidden
        } else {
            NavbarVisibility::Shown
        };
        self.last_scroll = current;
        vis
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    /// Half-open activation range `[top - 100, top - 100 + height)`.
    pub fn contains(&self, scroll_y: f64) -> bool {
        let start = self.offset_top - SECTION_TOP_OFFSET_PX;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Index of the section whose activation range holds `scroll_y`.
/// With overlapping ranges the last match wins; with gaps this returns `None`.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<usize> {
    sections.iter().rposition(|s| s.contains(scroll_y))
}

#[inline]
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

/// Everything a single scroll tick writes back to the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollUpdate {
    pub progress_percent: f64,
    pub navbar: NavbarVisibility,
    pub active_section: Option<usize>,
    pub parallax_px: f64,
}

#[derive(Default, Debug)]
pub struct ScrollTracker {
    navbar: NavbarState,
}

impl ScrollTracker {
    pub fn update(&mut self, metrics: &ScrollMetrics, sections: &[SectionBounds]) -> ScrollUpdate {
        ScrollUpdate {
            progress_percent: progress_percent(metrics),
            navbar: self.navbar.update(metrics.scroll_y),
            active_section: active_section(sections, metrics.scroll_y),
            parallax_px: parallax_offset(metrics.scroll_y),
        }
    }
}
