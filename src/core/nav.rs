/// Element id referenced by an in-page anchor `href` (`"#about"` → `"about"`).
/// Returns `None` for external links and for a bare `#`.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

/// The `href` a nav link carries for section `id`.
#[inline]
pub fn link_href_for(id: &str) -> String {
    format!("#{}", id)
}
