// DOM contract: ids, selectors and CSS values the page markup must provide.

// Background scene
pub const SCENE_CONTAINER_ID: &str = "threejs-bg";

// Scroll effects
pub const SCROLL_PROGRESS_ID: &str = "scrollProgress";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const PARALLAX_SELECTOR: &str = ".hero-title, .hero-tagline, .hero-description";
pub const ACTIVE_CLASS: &str = "active";

// Smooth-scroll navigation
pub const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Visibility reveal
pub const REVEAL_SELECTOR: &str = ".skill-card, .project-card, .contact-card";
pub const REVEAL_TRANSITION: &str = "all 0.8s cubic-bezier(0.4, 0, 0.2, 1)";

// Cursor trail
pub const TRAIL_MARKER_RGB: &str = "0, 255, 135";
pub const TRAIL_MARKER_Z_INDEX: &str = "9998";
pub const TRAIL_TRANSITION: &str = "all 0.3s ease";

// Typing effect
pub const TYPING_TARGET_SELECTOR: &str = ".hero-description";
