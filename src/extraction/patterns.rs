//! Link patterns
//!
//! The URL grammar is permissive on purpose. It accepts unbalanced
//! parentheses because Markdown prose often wraps links in them; the
//! resolver in [`crate::extraction::resolver`] fixes the fallout.

use once_cell::sync::Lazy;
use regex::Regex;

/// `http://` or `https://` followed by letters, digits, the `$-_` range,
/// `@ . & + ! * ( ) ,` or percent-encoded bytes.
pub const URL_PATTERN: &str =
    r"(https?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\(\),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+)";

/// `[label](url)` with an optional ` "title"` before the closing paren.
pub static MARKDOWN_URL_PATTERN: Lazy<String> =
    Lazy::new(|| format!(r#"\[(?:[^\[]+)\]\({URL_PATTERN}(?: "(?:.+)")?\)"#));

/// Markdown link or bare URL. Group 1 holds the URL of a Markdown link,
/// group 2 a bare URL; the Markdown alternative is tried first.
pub static MARKDOWN_URL_OR_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("{}|{URL_PATTERN}", *MARKDOWN_URL_PATTERN))
        .expect("Failed to compile Markdown link pattern")
});

/// The URL grammar anchored at the start of the input.
pub static URL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{URL_PATTERN}")).expect("Failed to compile URL pattern")
});

/// Opening part of a Markdown link, possibly preceded by stray `(` from
/// the surrounding prose. The destination is scanned by hand so that
/// balanced parentheses inside it are kept.
pub static LINK_OPENING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(*\[([^\]]*)\]\(").expect("Failed to compile link opening pattern")
});

/// `href` attribute values of anchor tags: unquoted, single- or
/// double-quoted. Escaped markup inside code (`&lt;a href=...`) and
/// attributes like `data-href` do not match.
pub static HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<a\s(?:[^>]*?\s)?href\s*=\s*["']?([^"' >]+)"#)
        .expect("Failed to compile href pattern")
});

/// Does `text` begin with something the URL grammar accepts?
pub fn starts_with_url(text: &str) -> bool {
    URL_PREFIX.is_match(text)
}
