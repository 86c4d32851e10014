use crate::constants::{
    ACTIVE_CLASS, NAVBAR_SELECTOR, NAV_LINK_SELECTOR, PARALLAX_SELECTOR, SCROLL_PROGRESS_ID,
    SECTION_SELECTOR,
};
use crate::core::nav::link_href_for;
use crate::core::scroll::{ScrollMetrics, ScrollTracker, ScrollUpdate, SectionBounds};
use crate::dom;
use crate::error::{FxError, FxResult};
use fnv::FnvHashMap;
use web_sys as web;

/// Elements the scroll handler writes to. Missing optional targets only
/// disable their own reaction.
struct ScrollTargets {
    progress: Option<web::HtmlElement>,
    navbar: Option<web::HtmlElement>,
    links: Vec<web::HtmlElement>,
    sections: Vec<web::HtmlElement>,
    // section index -> nav link index
    section_link: Vec<Option<usize>>,
    parallax: Vec<web::HtmlElement>,
}

impl ScrollTargets {
    fn collect(document: &web::Document) -> FxResult<Self> {
        let progress = optional(dom::html_by_id(document, SCROLL_PROGRESS_ID));
        let navbar = optional(dom::query_html(document, NAVBAR_SELECTOR));
        let links = dom::query_all_html(document, NAV_LINK_SELECTOR)?;
        let sections = dom::query_all_html(document, SECTION_SELECTOR)?;
        let parallax = dom::query_all_html(document, PARALLAX_SELECTOR)?;

        let link_by_href: FnvHashMap<String, usize> = links
            .iter()
            .enumerate()
            .filter_map(|(i, l)| l.get_attribute("href").map(|h| (h, i)))
            .collect();
        let section_link = sections
            .iter()
            .map(|s| link_by_href.get(&link_href_for(&s.id())).copied())
            .collect();

        Ok(Self {
            progress,
            navbar,
            links,
            sections,
            section_link,
            parallax,
        })
    }

    fn section_bounds(&self) -> Vec<SectionBounds> {
        self.sections
            .iter()
            .map(|s| SectionBounds {
                offset_top: s.offset_top() as f64,
                height: s.client_height() as f64,
            })
            .collect()
    }

    fn apply(&self, update: &ScrollUpdate) {
        if let Some(bar) = &self.progress {
            dom::set_style(bar, "width", &format!("{}%", update.progress_percent));
        }
        if let Some(nav) = &self.navbar {
            dom::set_style(nav, "transform", update.navbar.transform());
        }
        // No containing section: keep whichever link was active.
        if let Some(section) = update.active_section {
            let active_link = self.section_link.get(section).copied().flatten();
            for (i, link) in self.links.iter().enumerate() {
                let cl = link.class_list();
                if Some(i) == active_link {
                    _ = cl.add_1(ACTIVE_CLASS);
                } else {
                    _ = cl.remove_1(ACTIVE_CLASS);
                }
            }
        }
        let transform = format!("translateY({}px)", update.parallax_px);
        for el in &self.parallax {
            dom::set_style(el, "transform", &transform);
        }
    }
}

fn optional(found: FxResult<web::HtmlElement>) -> Option<web::HtmlElement> {
    match found {
        Ok(el) => Some(el),
        Err(e) => {
            log::warn!("[scroll] {}", e);
            None
        }
    }
}

fn metrics(window: &web::Window, document: &web::Document) -> ScrollMetrics {
    let (_, viewport_height) = dom::viewport_size(window);
    ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        document_height: document
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0),
        viewport_height,
    }
}

/// Progress bar, navbar hide/show, active nav link and hero parallax, all
/// recomputed on every scroll event.
pub fn wire_scroll_effects() -> FxResult<()> {
    let window = dom::window()?;
    let document = window.document().ok_or(FxError::NoDocument)?;
    let targets = ScrollTargets::collect(&document)?;
    log::info!(
        "[scroll] {} sections, {} nav links, {} parallax elements",
        targets.sections.len(),
        targets.links.len(),
        targets.parallax.len()
    );

    let mut tracker = ScrollTracker::default();
    let win = window.clone();
    dom::add_listener(&window, "scroll", move |_| {
        let m = metrics(&win, &document);
        let update = tracker.update(&m, &targets.section_bounds());
        targets.apply(&update);
    })
}
