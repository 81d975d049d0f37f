//! Configuration options for rendering.

/// Options for the [`Renderer`](crate::Renderer).
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// CSS class emitted on `<ul>` open tags, if any
    pub unordered_list_class: Option<String>,

    /// CSS class emitted on `<ol>` open tags, if any
    pub ordered_list_class: Option<String>,

    /// HTML fragment returned for empty or whitespace-only input
    pub placeholder: String,

    /// Headings up to this level are collected for the table of contents
    pub toc_level_limit: u8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            unordered_list_class: None,
            ordered_list_class: None,
            placeholder: "<p class=\"doc__placeholder\">Nothing to show here yet.</p>"
                .to_string(),
            toc_level_limit: 3,
        }
    }
}
