// Host-side tests for scroll-driven effects.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use crate::core::scroll::*;

fn metrics(scroll_y: f64) -> ScrollMetrics {
    ScrollMetrics {
        scroll_y,
        document_height: 5000.0,
        viewport_height: 1000.0,
    }
}

// Contiguous sections: ranges [0, 800), [800, 1600), [1600, 4000)
fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds {
            offset_top: 100.0,
            height: 800.0,
        },
        SectionBounds {
            offset_top: 900.0,
            height: 800.0,
        },
        SectionBounds {
            offset_top: 1700.0,
            height: 2400.0,
        },
    ]
}

#[test]
fn progress_spans_zero_to_hundred() {
    assert_eq!(progress_percent(&metrics(0.0)), 0.0);
    assert_eq!(progress_percent(&metrics(4000.0)), 100.0);
    assert!((progress_percent(&metrics(1000.0)) - 25.0).abs() < 1e-9);
}

#[test]
fn progress_is_monotonic() {
    let mut prev = -1.0;
    let mut y = 0.0;
    while y <= 4000.0 {
        let p = progress_percent(&metrics(y));
        assert!(p >= prev, "progress dropped at {y}");
        prev = p;
        y += 13.0;
    }
}

#[test]
fn progress_on_unscrollable_page_is_zero() {
    let m = ScrollMetrics {
        scroll_y: 0.0,
        document_height: 800.0,
        viewport_height: 800.0,
    };
    assert_eq!(progress_percent(&m), 0.0);
}

#[test]
fn progress_clamps_overscroll() {
    assert_eq!(progress_percent(&metrics(-50.0)), 0.0);
    assert_eq!(progress_percent(&metrics(4200.0)), 100.0);
}

#[test]
fn navbar_hides_only_when_scrolling_down_past_threshold() {
    let mut nav = NavbarState::default();
    assert_eq!(nav.update(50.0), NavbarVisibility::Shown);
    assert_eq!(nav.update(100.0), NavbarVisibility::Shown);
    assert_eq!(nav.update(150.0), NavbarVisibility::Hidden);
    assert_eq!(nav.update(400.0), NavbarVisibility::Hidden);
    assert_eq!(nav.update(400.0), NavbarVisibility::Shown);
    assert_eq!(nav.update(300.0), NavbarVisibility::Shown);
    // last position is remembered: 350 is a downward move past the threshold
    assert_eq!(nav.update(350.0), NavbarVisibility::Hidden);
}

#[test]
fn navbar_transforms() {
    assert_eq!(NavbarVisibility::Hidden.transform(), "translateY(-100%)");
    assert_eq!(NavbarVisibility::Shown.transform(), "translateY(0)");
}

#[test]
fn exactly_one_section_is_active_for_every_position() {
    let s = sections();
    let mut y = 0.0;
    while y < 4000.0 {
        let hits = s.iter().filter(|b| b.contains(y)).count();
        assert_eq!(hits, 1, "scroll {y} matched {hits} sections");
        assert!(active_section(&s, y).is_some());
        y += 7.0;
    }
}

#[test]
fn section_ranges_are_half_open() {
    let s = sections();
    assert_eq!(active_section(&s, 0.0), Some(0));
    assert_eq!(active_section(&s, 799.9), Some(0));
    assert_eq!(active_section(&s, 800.0), Some(1));
    assert_eq!(active_section(&s, 1600.0), Some(2));
    assert_eq!(active_section(&s, 4000.0), None);
}

#[test]
fn gap_between_sections_has_no_active_section() {
    let s = vec![
        SectionBounds {
            offset_top: 100.0,
            height: 500.0,
        },
        SectionBounds {
            offset_top: 900.0,
            height: 500.0,
        },
    ];
    assert_eq!(active_section(&s, 650.0), None);
}

#[test]
fn parallax_is_thirty_percent_of_scroll() {
    assert_eq!(parallax_offset(0.0), 0.0);
    assert!((parallax_offset(1000.0) - 300.0).abs() < 1e-9);
}

#[test]
fn tracker_bundles_every_reaction() {
    let mut tracker = ScrollTracker::default();
    let s = sections();
    let first = tracker.update(&metrics(1000.0), &s);
    assert!((first.progress_percent - 25.0).abs() < 1e-9);
    assert_eq!(first.navbar, NavbarVisibility::Hidden);
    assert_eq!(first.active_section, Some(1));
    assert!((first.parallax_px - 300.0).abs() < 1e-9);

    let back_up = tracker.update(&metrics(500.0), &s);
    assert_eq!(back_up.navbar, NavbarVisibility::Shown);
    assert_eq!(back_up.active_section, Some(0));
}
