//! Property-based tests for mdlinkcheck using proptest
//!
//! These tests generate random Markdown and URL lists to check that the
//! extraction pipeline holds up on inputs nobody wrote by hand.

use mdlinkcheck::MarkdownDocument;
use mdlinkcheck::extraction::flatten::flatten;
use mdlinkcheck::extraction::{
    ExtractUrls, MatchToken, Strategy as ExtractionStrategy, extractor_for, resolve_trailing_parens, uniquify,
};
use mdlinkcheck::reporting::summary::{format_percentage, get_percentage};
use proptest::prelude::*;
use std::collections::HashSet;

/// Generate valid-ish URLs for testing
fn url_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::collection::vec("[a-z]{3,10}", 1..4)
            .prop_map(|parts| format!("https://{}.com", parts.join("."))),
        (r"[a-z]{3,8}", prop::collection::vec(r"[a-z0-9_]{1,8}", 0..4)).prop_map(
            |(domain, path_parts)| format!("http://{}.org/{}", domain, path_parts.join("/"))
        ),
        (r"[a-z]{3,8}", r"[a-z]{1,8}").prop_map(|(domain, page)| {
            format!("https://{domain}.io/wiki/{page}_(disambiguation)")
        }),
        (r"[a-z]{3,8}", r"[a-z]{1,8}", r"[a-z]{1,8}")
            .prop_map(|(domain, key, value)| format!("https://{domain}.net?{key}={value}")),
    ]
}

/// Markdown fragments mixing prose, links and markup
fn markdown_strategy() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        r"[a-zA-Z ,.!?]{0,30}",
        url_strategy(),
        (r"[a-zA-Z ]{1,12}", url_strategy()).prop_map(|(label, url)| format!("[{label}]({url})")),
        url_strategy().prop_map(|url| format!("({url})")),
        url_strategy().prop_map(|url| format!("<{url}>")),
        url_strategy().prop_map(|url| format!("<a href=\"{url}\">x</a>")),
        Just("\n\n".to_string()),
        Just("# Heading\n".to_string()),
        Just("```\ncode\n```\n".to_string()),
        Just("))((][".to_string()),
    ];
    prop::collection::vec(fragment, 0..12).prop_map(|parts| parts.join(" "))
}

fn match_token_strategy() -> impl Strategy<Value = MatchToken> {
    let leaf = r"[a-z:/.]{0,6}".prop_map(MatchToken::Single);
    leaf.prop_recursive(4, 32, 5, |inner| {
        prop::collection::vec(inner, 0..5).prop_map(MatchToken::Group)
    })
}

fn strategies() -> [ExtractionStrategy; 2] {
    [ExtractionStrategy::Render, ExtractionStrategy::Regex]
}

proptest! {
    #[test]
    fn test_uniquify__no_duplicates(urls in prop::collection::vec(url_strategy(), 0..20)) {
        for keep_order in [true, false] {
            let set = uniquify(urls.clone(), keep_order);
            let distinct: HashSet<&String> = urls.iter().collect();

            prop_assert_eq!(set.len(), distinct.len());
            for url in &urls {
                prop_assert!(set.contains(url));
            }
        }
    }

    #[test]
    fn test_uniquify__keeps_first_occurrence_order(urls in prop::collection::vec(url_strategy(), 0..20)) {
        let mut seen = HashSet::new();
        let expected: Vec<String> = urls
            .iter()
            .filter(|url| seen.insert(url.as_str()))
            .cloned()
            .collect();

        let set = uniquify(urls, true);

        prop_assert_eq!(set.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_flatten__never_yields_empty_tokens(tokens in prop::collection::vec(match_token_strategy(), 0..8)) {
        for token in flatten(&tokens) {
            prop_assert!(!token.is_empty());
        }
    }

    #[test]
    fn test_extract__yields_http_urls_only(markdown in markdown_strategy()) {
        let doc = MarkdownDocument::from_content("prop.md", markdown);
        for strategy in strategies() {
            let urls = extractor_for(strategy, true).extract(&doc);

            for url in &urls {
                prop_assert!(
                    url.starts_with("http://") || url.starts_with("https://"),
                    "{strategy} produced '{url}'"
                );
            }
        }
    }

    #[test]
    fn test_extract__never_panics_on_arbitrary_text(text in "\\PC{0,200}") {
        let doc = MarkdownDocument::from_content("prop.md", text);
        for strategy in strategies() {
            let _ = extractor_for(strategy, false).extract(&doc);
        }
    }

    #[test]
    fn test_extract__linked_url_is_found(label in r"[a-zA-Z]{1,10}", url in url_strategy()) {
        let doc = MarkdownDocument::from_content("prop.md", format!("See [{label}]({url}) here."));
        for strategy in strategies() {
            let urls = extractor_for(strategy, true).extract(&doc);

            prop_assert!(urls.contains(&url), "{strategy} missed '{url}' in {urls:?}");
        }
    }

    #[test]
    fn test_resolve_trailing_parens__preserves_length(
        markdown in markdown_strategy(),
        candidates in prop::collection::vec(url_strategy(), 0..10),
    ) {
        let mut resolved = candidates.clone();
        resolve_trailing_parens(&markdown, &mut resolved);

        prop_assert_eq!(resolved.len(), candidates.len());
        for (before, after) in candidates.iter().zip(&resolved) {
            if !before.ends_with(')') {
                prop_assert_eq!(before, after);
            }
            prop_assert!(after.contains(before.trim_end_matches(')')));
        }
    }

    #[test]
    fn test_get_percentage__within_unit_range(total in 0usize..10_000, part_seed in 0usize..10_000) {
        let part = if total == 0 { 0 } else { part_seed % (total + 1) };

        let fraction = get_percentage(part, total);

        prop_assert!((0.0..=1.0).contains(&fraction));
        prop_assert!(format_percentage(fraction).ends_with('%'));
    }
}
