//! Rendered document types.

/// A heading collected during rendering.
///
/// Exposes `id` for building anchor links (`href="#{id}"`) and `text` for
/// the visible label. `text` is the raw heading text, before inline
/// formatting or escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    /// Heading level (1-6)
    pub level: u8,
    /// Anchor id, unique within one render
    pub id: String,
    /// Raw heading text
    pub text: String,
}

/// The result of rendering one Markdown document.
///
/// `html` is a fragment (no `<html>`/`<body>` wrapper) that is safe to
/// insert into a container element verbatim; escaping has already happened
/// during rendering. `headings` lists collected headings in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// Rendered HTML fragment
    pub html: String,
    /// Headings collected for table-of-contents construction
    pub headings: Vec<Heading>,
}
