//! URL deduplication
//!
//! Two URLs are duplicates only when they are byte-for-byte equal. No
//! trailing-slash, case or percent-encoding normalisation happens here.

use indexmap::IndexSet;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// Canonical URLs of one document, each present once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UrlSet {
    urls: Vec<String>,
}

impl UrlSet {
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.iter().any(|candidate| candidate == url)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.urls.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.urls
    }

    /// Drop every URL for which `keep` returns false, preserving order.
    pub fn retain<F: FnMut(&String) -> bool>(&mut self, keep: F) {
        self.urls.retain(keep);
    }

    pub fn into_vec(self) -> Vec<String> {
        self.urls
    }
}

impl IntoIterator for UrlSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.urls.into_iter()
    }
}

impl<'a> IntoIterator for &'a UrlSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.urls.iter()
    }
}

/// Remove duplicate URLs.
///
/// With `keep_order` each URL stays at the position of its first
/// occurrence. Without it the order of the result is unspecified.
///
/// # Examples
/// ```
/// use mdlinkcheck::extraction::dedup::uniquify;
///
/// let urls = vec!["https://b.io".to_string(), "https://a.io".to_string(), "https://b.io".to_string()];
/// let set = uniquify(urls, true);
/// assert_eq!(set.as_slice(), ["https://b.io", "https://a.io"]);
/// ```
pub fn uniquify<I>(urls: I, keep_order: bool) -> UrlSet
where
    I: IntoIterator<Item = String>,
{
    let urls = if keep_order {
        urls.into_iter().collect::<IndexSet<String>>().into_iter().collect()
    } else {
        urls.into_iter().collect::<FxHashSet<String>>().into_iter().collect()
    };

    UrlSet { urls }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_uniquify__ordered_keeps_first_occurrence() {
        let urls = strings(&["https://b.io", "https://a.io", "https://b.io", "https://c.io", "https://a.io"]);

        let set = uniquify(urls, true);

        assert_eq!(set.as_slice(), ["https://b.io", "https://a.io", "https://c.io"]);
    }

    #[test]
    fn test_uniquify__unordered_returns_each_once() {
        let urls = strings(&["https://b.io", "https://a.io", "https://b.io", "https://b.io"]);

        let set = uniquify(urls, false);

        let mut sorted = set.into_vec();
        sorted.sort();
        assert_eq!(sorted, ["https://a.io", "https://b.io"]);
    }

    #[test]
    fn test_uniquify__exact_equality_only() {
        let urls = strings(&["https://a.io", "https://a.io/", "HTTPS://A.IO", "https://a.io/%7E", "https://a.io/~"]);

        let set = uniquify(urls, true);

        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_uniquify__empty() {
        let set = uniquify(Vec::new(), true);

        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_url_set__contains_and_retain() {
        let mut set = uniquify(strings(&["https://a.io", "https://b.io"]), true);

        assert!(set.contains("https://a.io"));
        set.retain(|url| url != "https://a.io");
        assert!(!set.contains("https://a.io"));
        assert_eq!(set.as_slice(), ["https://b.io"]);
    }

    #[test]
    fn test_url_set__serializes_as_list() {
        let set = uniquify(strings(&["https://a.io", "https://b.io"]), true);

        let json = serde_json::to_string(&set).unwrap();

        assert_eq!(json, r#"["https://a.io","https://b.io"]"#);
    }
}
