//! Block-level rendering: line classification and HTML emission.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::{Document, Heading};
use crate::inline::format_inline;
use crate::options::RenderOptions;
use crate::slug::SlugCounter;

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#+)\s+(.*)$").unwrap());
static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*+]\s+(.*)$").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+(.*)$").unwrap());

/// The main service for rendering Markdown to HTML fragments.
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a new Renderer with default options.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
        }
    }

    /// Create a Renderer with custom options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Get the current options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Get mutable access to options.
    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }

    /// Render a Markdown document to an HTML fragment plus headings.
    ///
    /// Never fails: lines that match no structural pattern render as
    /// paragraph text, and empty or whitespace-only input yields the
    /// configured placeholder fragment with no headings. All state is
    /// local to the call, so a shared Renderer is safely reentrant.
    pub fn render(&self, markdown: &str) -> Document {
        if markdown.trim().is_empty() {
            return Document {
                html: self.options.placeholder.clone(),
                headings: Vec::new(),
            };
        }

        let normalized = markdown.replace("\r\n", "\n");
        let mut blocks = Blocks::new(&self.options);

        for line in normalized.split('\n') {
            blocks.push_line(line.trim());
        }

        blocks.finish()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Which list element is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    None,
    Unordered,
    Ordered,
}

/// Per-render accumulator for block emission.
///
/// Invariants: at most one list is open at a time, and an open list never
/// coexists with a non-empty paragraph buffer.
struct Blocks<'a> {
    options: &'a RenderOptions,
    fragments: Vec<String>,
    headings: Vec<Heading>,
    open_list: ListKind,
    paragraph: Vec<String>,
    slugs: SlugCounter,
}

impl<'a> Blocks<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            fragments: Vec::new(),
            headings: Vec::new(),
            open_list: ListKind::None,
            paragraph: Vec::new(),
            slugs: SlugCounter::new(),
        }
    }

    /// Classify one trimmed line and emit its block fragment(s).
    ///
    /// First match wins: blank, heading, unordered item, ordered item,
    /// paragraph text. No lookahead beyond the current line.
    fn push_line(&mut self, line: &str) {
        if line.is_empty() {
            self.flush_paragraph();
            self.close_list();
            return;
        }

        if let Some(caps) = HEADING.captures(line) {
            self.flush_paragraph();
            self.close_list();
            self.heading(caps[1].len(), caps[2].trim());
            return;
        }

        if let Some(caps) = UNORDERED_ITEM.captures(line) {
            self.flush_paragraph();
            self.list_item(ListKind::Unordered, &caps[1]);
            return;
        }

        if let Some(caps) = ORDERED_ITEM.captures(line) {
            self.flush_paragraph();
            self.list_item(ListKind::Ordered, &caps[1]);
            return;
        }

        self.close_list();
        self.paragraph.push(line.to_string());
    }

    fn heading(&mut self, hashes: usize, text: &str) {
        // A line of 7+ hashes still renders, capped at <h6>
        let level = hashes.min(6) as u8;
        let id = self.slugs.assign(text);

        self.fragments.push(format!(
            "<h{level} id=\"{id}\">{}</h{level}>",
            format_inline(text)
        ));

        if level <= self.options.toc_level_limit {
            self.headings.push(Heading {
                level,
                id,
                text: text.to_string(),
            });
        }
    }

    fn list_item(&mut self, kind: ListKind, content: &str) {
        if self.open_list != kind {
            self.close_list();
            self.fragments.push(match kind {
                ListKind::Unordered => {
                    open_tag("ul", self.options.unordered_list_class.as_deref())
                }
                ListKind::Ordered => {
                    open_tag("ol", self.options.ordered_list_class.as_deref())
                }
                ListKind::None => unreachable!("list items always carry a list kind"),
            });
            self.open_list = kind;
        }

        self.fragments
            .push(format!("<li>{}</li>", format_inline(content)));
    }

    /// Join buffered paragraph lines with a single space and emit one `<p>`.
    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }

        let text = self.paragraph.join(" ");
        self.paragraph.clear();

        let text = text.trim();
        if !text.is_empty() {
            self.fragments.push(format!("<p>{}</p>", format_inline(text)));
        }
    }

    fn close_list(&mut self) {
        match self.open_list {
            ListKind::Unordered => self.fragments.push("</ul>".to_string()),
            ListKind::Ordered => self.fragments.push("</ol>".to_string()),
            ListKind::None => {}
        }
        self.open_list = ListKind::None;
    }

    fn finish(mut self) -> Document {
        self.flush_paragraph();
        self.close_list();

        Document {
            html: self.fragments.join("\n"),
            headings: self.headings,
        }
    }
}

fn open_tag(tag: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => format!("<{tag} class=\"{class}\">"),
        None => format!("<{tag}>"),
    }
}
