use crate::constants::{ACTIVE_CLASS, IN_PAGE_ANCHOR_SELECTOR, NAV_LINK_SELECTOR};
use crate::core::nav::anchor_target_id;
use crate::dom;
use crate::error::FxResult;
use web_sys as web;

pub fn wire_smooth_scroll() -> FxResult<()> {
    let document = dom::window_document()?;
    let anchors = dom::query_all_html(&document, IN_PAGE_ANCHOR_SELECTOR)?;
    let count = anchors.len();

    for anchor in anchors {
        let doc = document.clone();
        let clicked = anchor.clone();
        dom::add_listener(&anchor, "click", move |ev: web::Event| {
            ev.prevent_default();
            let Some(href) = clicked.get_attribute("href") else {
                return;
            };
            let Some(target) = anchor_target_id(&href).and_then(|id| doc.get_element_by_id(id))
            else {
                return;
            };

            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            opts.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);

            if let Ok(links) = dom::query_all_html(&doc, NAV_LINK_SELECTOR) {
                for link in links {
                    _ = link.class_list().remove_1(ACTIVE_CLASS);
                }
            }
            _ = clicked.class_list().add_1(ACTIVE_CLASS);
        })?;
    }

    log::info!("[nav] smooth scroll wired on {} anchors", count);
    Ok(())
}
