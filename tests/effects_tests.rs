// Host-side tests for the DOM effects' state machines.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod nav {
        include!("../src/core/nav.rs");
    }
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
    pub mod trail {
        include!("../src/core/trail.rs");
    }
}

use crate::core::constants::TRAIL_LENGTH;
use crate::core::nav::*;
use crate::core::pointer::*;
use crate::core::reveal::*;
use crate::core::trail::*;
use glam::Vec2;

// ---------------- Pointer ----------------

#[test]
fn pointer_maps_corners_and_center_to_ndc() {
    let mut p = PointerState::default();
    p.record(960.0, 540.0, 1920.0, 1080.0);
    assert_eq!(p.ndc, Vec2::ZERO);
    p.record(0.0, 0.0, 1920.0, 1080.0);
    assert_eq!(p.ndc, Vec2::new(-1.0, 1.0));
    p.record(1920.0, 1080.0, 1920.0, 1080.0);
    assert_eq!(p.ndc, Vec2::new(1.0, -1.0));
}

#[test]
fn pointer_keeps_raw_client_position() {
    let mut p = PointerState::default();
    p.record(123.0, 456.0, 800.0, 600.0);
    assert_eq!(p.client, Vec2::new(123.0, 456.0));
    // last write wins
    p.record(10.0, 20.0, 800.0, 600.0);
    assert_eq!(p.client, Vec2::new(10.0, 20.0));
}

#[test]
fn pointer_survives_zero_sized_viewport() {
    let ndc = client_to_ndc(5.0, 5.0, 0.0, 0.0);
    assert!(ndc.is_finite());
}

// ---------------- Smooth-scroll anchors ----------------

#[test]
fn anchor_target_resolves_in_page_ids() {
    assert_eq!(anchor_target_id("#about"), Some("about"));
    assert_eq!(anchor_target_id("#"), None);
    assert_eq!(anchor_target_id("https://example.com/#about"), None);
    assert_eq!(anchor_target_id(""), None);
}

#[test]
fn link_href_round_trips_section_id() {
    let href = link_href_for("projects");
    assert_eq!(href, "#projects");
    assert_eq!(anchor_target_id(&href), Some("projects"));
}

// ---------------- Visibility reveal ----------------

#[test]
fn reveal_observer_options() {
    assert_eq!(root_margin(), "0px 0px -100px 0px");
    assert!((threshold() - 0.1).abs() < 1e-12);
}

#[test]
fn reveal_styles() {
    assert_eq!(RevealStyle::HIDDEN.opacity, 0.0);
    assert_eq!(RevealStyle::HIDDEN.transform(), "translateY(50px)");
    assert_eq!(RevealStyle::VISIBLE.opacity, 1.0);
    assert_eq!(RevealStyle::VISIBLE.transform(), "translateY(0)");
}

#[test]
fn reveal_happens_once_per_element() {
    let mut set = RevealSet::new(3);
    assert_eq!(set.observe(1, false), None);
    assert_eq!(set.observe(1, true), Some(RevealStyle::VISIBLE));
    // repeated intersections change nothing
    assert_eq!(set.observe(1, true), None);
    assert_eq!(set.observe(1, false), None);
    // others still reveal on their own first intersection
    assert_eq!(set.observe(0, true), Some(RevealStyle::VISIBLE));
    assert_eq!(set.observe(2, true), Some(RevealStyle::VISIBLE));
}

#[test]
fn reveal_ignores_unknown_index() {
    let mut set = RevealSet::new(2);
    assert_eq!(set.observe(5, true), None);
    assert_eq!(set.observe(1, true), Some(RevealStyle::VISIBLE));
}

// ---------------- Cursor trail ----------------

#[test]
fn trail_opacity_is_non_increasing() {
    let mut prev = f32::MAX;
    for i in 0..TRAIL_LENGTH {
        let a = marker_opacity(i, TRAIL_LENGTH);
        assert!(a <= prev, "opacity rose at marker {i}");
        prev = a;
    }
    assert_eq!(marker_opacity(0, TRAIL_LENGTH), 1.0);
    assert!((marker_opacity(TRAIL_LENGTH - 1, TRAIL_LENGTH) - 0.05).abs() < 1e-6);
}

#[test]
fn trail_propagates_one_link_per_tick() {
    let mut trail = CursorTrail::new(TRAIL_LENGTH);
    let a = Vec2::new(10.0, 10.0);
    let b = Vec2::new(20.0, 30.0);

    trail.tick(a);
    assert_eq!(trail.positions()[0], a);
    assert_eq!(trail.positions()[1], Vec2::ZERO);

    trail.tick(b);
    assert_eq!(trail.positions()[0], b);
    assert_eq!(trail.positions()[1], a);
    assert_eq!(trail.positions()[2], Vec2::ZERO);
}

#[test]
fn trail_settles_on_still_pointer() {
    let mut trail = CursorTrail::new(TRAIL_LENGTH);
    let p = Vec2::new(300.0, 200.0);
    for _ in 0..TRAIL_LENGTH {
        trail.tick(p);
    }
    assert!(trail.positions().iter().all(|&q| q == p));
}

#[test]
fn empty_trail_is_a_no_op() {
    let mut trail = CursorTrail::new(0);
    trail.tick(Vec2::ONE);
    assert!(trail.positions().is_empty());
    assert_eq!(marker_opacity(0, 0), 0.0);
}
