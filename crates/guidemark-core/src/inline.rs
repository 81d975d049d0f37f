//! Inline span formatting: HTML escaping plus bold/italic/code/link markup.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap());

/// Escape the five reserved HTML characters.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

/// Format a run of plain text as inline HTML.
///
/// Escaping always happens first, so span markup is substituted over
/// already-escaped text and literal `<` or `&` from the source can never
/// inject structural HTML. The substitutions then run in fixed order:
/// bold, italic, inline code, link. Each is non-greedy and left-to-right;
/// later patterns scan the output of earlier ones, so a bold span's inner
/// text can still pick up code or link markup.
///
/// Bold runs before italic on purpose: after `**...**` pairs are consumed,
/// remaining single asterisks pair up best-effort. Text with odd asterisk
/// counts gets undefined grouping.
pub fn format_inline(text: &str) -> String {
    let escaped = escape_html(text);

    let text = BOLD.replace_all(&escaped, "<strong>$1</strong>");
    let text = ITALIC.replace_all(&text, "<em>$1</em>");
    let text = CODE.replace_all(&text, "<code>$1</code>");
    LINK.replace_all(&text, "<a href=\"$2\">$1</a>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(
            escape_html("Fish & \"chips\" 'n' <stuff>"),
            "Fish &amp; &quot;chips&quot; &#39;n&#39; &lt;stuff&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_bold() {
        assert_eq!(format_inline("**bold**"), "<strong>bold</strong>");
    }

    #[test]
    fn test_italic() {
        assert_eq!(format_inline("*italic*"), "<em>italic</em>");
    }

    #[test]
    fn test_code() {
        assert_eq!(format_inline("`code`"), "<code>code</code>");
    }

    #[test]
    fn test_link() {
        assert_eq!(
            format_inline("[go](http://x)"),
            "<a href=\"http://x\">go</a>"
        );
    }

    #[test]
    fn test_bold_before_italic() {
        assert_eq!(
            format_inline("**b** and *i*"),
            "<strong>b</strong> and <em>i</em>"
        );
    }

    #[test]
    fn test_spans_compose() {
        assert_eq!(
            format_inline("**bold `code`**"),
            "<strong>bold <code>code</code></strong>"
        );
    }

    #[test]
    fn test_multiple_spans_per_line() {
        assert_eq!(
            format_inline("**a** then **b**"),
            "<strong>a</strong> then <strong>b</strong>"
        );
    }

    #[test]
    fn test_escaping_precedes_substitution() {
        assert_eq!(
            format_inline("<b>*hi*</b>"),
            "&lt;b&gt;<em>hi</em>&lt;/b&gt;"
        );
    }

    #[test]
    fn test_link_url_is_entity_escaped() {
        assert_eq!(
            format_inline("[x](a&b)"),
            "<a href=\"a&amp;b\">x</a>"
        );
    }

    #[test]
    fn test_unmatched_markers_pass_through() {
        assert_eq!(format_inline("a * b"), "a * b");
        assert_eq!(format_inline("`open"), "`open");
        assert_eq!(format_inline("[label only]"), "[label only]");
    }
}
