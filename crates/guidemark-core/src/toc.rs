//! Table-of-contents rendering from collected headings.

use crate::document::Heading;
use crate::inline::escape_html;

/// Render headings as a `<ul class="toc__list">` of anchor links.
///
/// Returns `None` when there are no headings, so callers can hide the
/// navigation element entirely. Heading text is escaped here because
/// [`Heading::text`] carries the raw source text.
pub fn toc_html(headings: &[Heading]) -> Option<String> {
    if headings.is_empty() {
        return None;
    }

    let mut out = String::from("<ul class=\"toc__list\">");
    for heading in headings {
        out.push('\n');
        out.push_str(&format!(
            "<li><a href=\"#{}\">{}</a></li>",
            heading.id,
            escape_html(&heading.text)
        ));
    }
    out.push_str("\n</ul>");

    Some(out)
}
