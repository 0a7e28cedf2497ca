//! Markdown to HTML rendering
//!
//! Rendering goes through `pulldown-cmark`. CommonMark itself only links
//! `<https://...>` autolinks, so an extra pass turns bare URLs found in
//! plain text into links before the HTML is written.

use linkify::{LinkFinder, LinkKind};
use once_cell::sync::Lazy;
use pulldown_cmark::{CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream, html};

static LINK_FINDER: Lazy<LinkFinder> = Lazy::new(|| {
    let mut finder = LinkFinder::new();
    finder.kinds(&[LinkKind::Url]);
    finder
});

/// Renderer switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Turn bare URLs in text into anchors. Without it those URLs never
    /// reach the HTML as `href` values.
    pub autolink: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { autolink: true }
    }
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}

/// Render `markdown` to HTML.
pub fn render(markdown: &str, options: RenderOptions) -> String {
    let events = TextMergeStream::new(Parser::new_ext(markdown, parser_options()));
    let mut html_output = String::with_capacity(markdown.len() + markdown.len() / 2);

    if options.autolink {
        html::push_html(&mut html_output, autolink(events).into_iter());
    } else {
        html::push_html(&mut html_output, events);
    }

    html_output
}

/// Wrap bare URLs of text events in link events.
///
/// Text inside links, images and code blocks is left alone. Inline code
/// arrives as `Event::Code` and is never touched.
fn autolink<'a>(events: impl Iterator<Item = Event<'a>>) -> Vec<Event<'a>> {
    let mut output = Vec::new();
    let mut link_depth = 0usize;
    let mut in_code_block = false;

    for event in events {
        match &event {
            Event::Start(Tag::Link { .. }) | Event::Start(Tag::Image { .. }) => link_depth += 1,
            Event::End(TagEnd::Link) | Event::End(TagEnd::Image) => {
                link_depth = link_depth.saturating_sub(1)
            }
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Text(text) if link_depth == 0 && !in_code_block => {
                let spans: Vec<(usize, usize)> = LINK_FINDER
                    .links(text)
                    .map(|link| (link.start(), link.end()))
                    .collect();
                if !spans.is_empty() {
                    push_linked_text(text, &spans, &mut output);
                    continue;
                }
            }
            _ => {}
        }
        output.push(event);
    }

    output
}

fn push_linked_text<'a>(text: &str, spans: &[(usize, usize)], output: &mut Vec<Event<'a>>) {
    let mut cursor = 0;

    for &(start, end) in spans {
        if start > cursor {
            output.push(Event::Text(CowStr::from(text[cursor..start].to_string())));
        }
        let url = &text[start..end];
        output.push(Event::Start(Tag::Link {
            link_type: LinkType::Autolink,
            dest_url: CowStr::from(url.to_string()),
            title: CowStr::Borrowed(""),
            id: CowStr::Borrowed(""),
        }));
        output.push(Event::Text(CowStr::from(url.to_string())));
        output.push(Event::End(TagEnd::Link));
        cursor = end;
    }

    if cursor < text.len() {
        output.push(Event::Text(CowStr::from(text[cursor..].to_string())));
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn test_render__explicit_link() {
        let html = render("[label](https://example.com/a)", RenderOptions::default());

        assert!(html.contains(r#"<a href="https://example.com/a">label</a>"#));
    }

    #[test]
    fn test_render__bare_url_autolinked() {
        let html = render("visit https://example.com/a today", RenderOptions::default());

        assert!(html.contains(r#"<a href="https://example.com/a">https://example.com/a</a>"#));
    }

    #[test]
    fn test_render__bare_url_dropped_without_autolink() {
        let html = render(
            "visit https://example.com/a today",
            RenderOptions { autolink: false },
        );

        assert!(!html.contains("href"));
    }

    #[test]
    fn test_render__reference_link() {
        let markdown = "See [the docs][docs].\n\n[docs]: https://example.com/docs\n";

        let html = render(markdown, RenderOptions::default());

        assert!(html.contains(r#"href="https://example.com/docs""#));
    }

    #[test]
    fn test_render__link_text_not_relinked() {
        let html = render(
            "[https://example.com](https://example.com)",
            RenderOptions::default(),
        );

        assert_eq!(html.matches("href=").count(), 1);
    }

    #[test]
    fn test_render__code_not_autolinked() {
        let markdown = "`https://inline.example.com`\n\n```\nhttps://block.example.com\n```\n";

        let html = render(markdown, RenderOptions::default());

        assert!(!html.contains("href"));
    }

    #[test]
    fn test_render__url_in_table_cell() {
        let markdown = "| name | link |\n|------|------|\n| a | https://table.example.com |\n";

        let html = render(markdown, RenderOptions::default());

        assert!(html.contains(r#"href="https://table.example.com""#));
    }

    #[test]
    fn test_render__text_around_link_preserved() {
        let html = render("before https://example.com after", RenderOptions::default());

        assert!(html.contains("before "));
        assert!(html.contains(" after"));
    }
}
