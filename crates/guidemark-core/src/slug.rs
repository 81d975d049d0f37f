//! Heading slugs and per-render collision bookkeeping.

use indexmap::IndexMap;

/// Fallback slug for heading text with no ASCII-alphanumeric characters.
const FALLBACK_SLUG: &str = "section";

/// Derive a URL-safe anchor id from heading text.
///
/// Lowercases ASCII letters, collapses every run of other characters to a
/// single hyphen, and strips leading/trailing hyphens. Text that produces
/// an empty slug falls back to `"section"`.
///
/// # Example
///
/// ```rust
/// use guidemark_core::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("My **Big** Title"), "my-big-title");
/// assert_eq!(slugify("!!!"), "section");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Tracks slug occurrences within a single render so that repeated heading
/// text still yields unique ids.
///
/// The first occurrence of a base slug is used as-is; repeats get a `-2`,
/// `-3`, ... suffix. One counter is constructed per render invocation,
/// never shared across calls.
#[derive(Debug, Default)]
pub struct SlugCounter {
    counts: IndexMap<String, usize>,
}

impl SlugCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a unique id for the given heading text.
    pub fn assign(&mut self, text: &str) -> String {
        let base = slugify(text);
        let count = self.counts.entry(base.clone()).or_insert(0);
        *count += 1;

        if *count > 1 {
            format!("{}-{}", base, count)
        } else {
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_simple() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("My API (v2)"), "my-api-v2");
        assert_eq!(slugify("a   b"), "a-b");
    }

    #[test]
    fn test_slugify_strips_edges() {
        assert_eq!(slugify("  Spaced  Out  "), "spaced-out");
        assert_eq!(slugify("--dashes--"), "dashes");
    }

    #[test]
    fn test_slugify_markup_in_heading_text() {
        assert_eq!(slugify("My **Big** Title"), "my-big-title");
    }

    #[test]
    fn test_slugify_fallback() {
        assert_eq!(slugify(""), "section");
        assert_eq!(slugify("!!!"), "section");
        assert_eq!(slugify("???"), "section");
    }

    #[test]
    fn test_counter_disambiguates_repeats() {
        let mut counter = SlugCounter::new();
        assert_eq!(counter.assign("A"), "a");
        assert_eq!(counter.assign("A"), "a-2");
        assert_eq!(counter.assign("A"), "a-3");
    }

    #[test]
    fn test_counter_bases_are_independent() {
        let mut counter = SlugCounter::new();
        assert_eq!(counter.assign("One"), "one");
        assert_eq!(counter.assign("Two"), "two");
        assert_eq!(counter.assign("One"), "one-2");
    }

    #[test]
    fn test_counter_fallback_repeats() {
        let mut counter = SlugCounter::new();
        assert_eq!(counter.assign("!!!"), "section");
        assert_eq!(counter.assign("???"), "section-2");
    }
}
