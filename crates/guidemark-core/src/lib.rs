//! # guidemark-core
//!
//! Render a small Markdown subset to an HTML fragment, collecting heading
//! anchors along the way for table-of-contents construction.
//!
//! # Architecture
//!
//! ```text
//!                    ┌──────────────┐ ──▶ HTML fragment
//! Markdown text ───▶ │   Renderer   │
//!                    └──────────────┘ ──▶ [Heading { level, id, text }]
//! ```
//!
//! The renderer is line-oriented and single-pass: each line is classified as
//! a heading, list item, blank, or paragraph text, with no lookahead or
//! backtracking. Plain text passes through [`format_inline`], which escapes
//! the five reserved HTML characters before any span markup (bold, italic,
//! inline code, links) is substituted, so literal `<` or `&` in the source
//! can never become structural HTML.
//!
//! Supported subset: ATX headings, flat unordered/ordered lists, paragraphs,
//! and the four inline spans. There is no nesting, no code fences, no
//! blockquotes, and no raw HTML passthrough.
//!
//! # Example
//!
//! ```rust
//! use guidemark_core::parse;
//!
//! let doc = parse("# Hello\n\nSome *emphasis* and `code`.");
//! assert!(doc.html.contains("<h1 id=\"hello\">Hello</h1>"));
//! assert!(doc.html.contains("<em>emphasis</em>"));
//! assert_eq!(doc.headings[0].id, "hello");
//! ```

mod document;
mod inline;
mod options;
mod renderer;
mod slug;
mod toc;

pub use document::{Document, Heading};
pub use inline::{escape_html, format_inline};
pub use options::RenderOptions;
pub use renderer::Renderer;
pub use slug::{slugify, SlugCounter};
pub use toc::toc_html;

/// Render a Markdown document with default options.
///
/// Convenience for `Renderer::new().render(markdown)`. Never fails:
/// unrecognized syntax degrades to paragraph text, and empty input yields
/// the placeholder fragment from [`RenderOptions`].
pub fn parse(markdown: &str) -> Document {
    Renderer::new().render(markdown)
}
