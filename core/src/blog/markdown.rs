//! Markdown → HTML for post bodies
//!
//! Parsing is plain pulldown-cmark with GFM-style extensions. The event
//! stream is rewritten before HTML generation so that headings get stable
//! anchor ids, links and images get site classes, and tables scroll
//! horizontally on narrow screens.

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};

/// Average adult reading speed used for the estimate
const WORDS_PER_MINUTE: usize = 200;

/// Class on in-page anchor links; the front end attaches smooth scrolling
pub const ANCHOR_LINK_CLASS: &str = "md-anchor";

/// Estimated minutes to read `body`, rounded up. Never less than one
/// minute, even for an empty post.
pub fn reading_time(body: &str) -> usize {
    body.split_whitespace()
        .count()
        .div_ceil(WORDS_PER_MINUTE)
        .max(1)
}

/// Anchor id for a heading text.
///
/// Trims and lower-cases, drops everything that is not an ASCII word
/// character, whitespace or `-`, then turns each run of whitespace and `-`
/// into a single `-`. A run at either end is kept, so `"- Intro"` becomes
/// `"-intro"`.
///
/// ```
/// use folio_core::blog::heading_id;
///
/// assert_eq!(heading_id("  Getting Started!  "), "getting-started");
/// assert_eq!(heading_id("Rust & WASM -- Part 2"), "rust-wasm-part-2");
/// assert_eq!(heading_id("! Hello"), "-hello");
/// ```
pub fn heading_id(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let mut id = String::with_capacity(lowered.len());

    for c in lowered.chars() {
        if c.is_whitespace() || c == '-' {
            if !id.ends_with('-') {
                id.push('-');
            }
        } else if c.is_ascii_alphanumeric() || c == '_' {
            id.push(c);
        }
    }
    id
}

/// Syntax highlight stylesheet for a theme
pub fn highlight_theme(theme: crate::theme::Theme) -> &'static str {
    match theme {
        crate::theme::Theme::White => "atom-one-light",
        _ => "atom-one-dark",
    }
}

/// Render a post body to HTML
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;

    let events = rewrite(Parser::new_ext(markdown, options));
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Event rewriting
// ─────────────────────────────────────────────────────────────────────────────

struct PendingHeading<'a> {
    level: HeadingLevel,
    text: String,
    inner: Vec<Event<'a>>,
}

struct PendingImage {
    src: String,
    title: String,
    alt: String,
}

fn rewrite<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut out: Vec<Event<'a>> = Vec::new();
    let mut heading: Option<PendingHeading<'a>> = None;
    let mut image: Option<PendingImage> = None;

    for event in parser {
        // Image alt text arrives as child events; fold them into the tag
        if let Some(img) = image.as_mut() {
            match event {
                Event::End(TagEnd::Image) => {
                    let img = image.take().map(image_tag).unwrap_or_default();
                    push(&mut out, &mut heading, Event::Html(img.into()));
                }
                Event::Text(t) | Event::Code(t) => img.alt.push_str(&t),
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                heading = Some(PendingHeading {
                    level,
                    text: String::new(),
                    inner: Vec::new(),
                });
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(h) = heading.take() {
                    let tag = heading_tag(h.level);
                    out.push(Event::Html(
                        format!(
                            "<{tag} id=\"{}\" class=\"md-heading md-{tag}\">",
                            escape_attr(&heading_id(&h.text))
                        )
                        .into(),
                    ));
                    out.extend(h.inner);
                    out.push(Event::Html(format!("</{tag}>\n").into()));
                }
            }
            Event::Start(Tag::Link { dest_url, title, .. }) => {
                push(&mut out, &mut heading, Event::Html(link_open(&dest_url, &title).into()));
            }
            Event::End(TagEnd::Link) => {
                push(&mut out, &mut heading, Event::Html(CowStr::Borrowed("</a>")));
            }
            Event::Start(Tag::Image { dest_url, title, .. }) => {
                image = Some(PendingImage {
                    src: dest_url.to_string(),
                    title: title.to_string(),
                    alt: String::new(),
                });
            }
            Event::Code(code) => {
                if let Some(h) = heading.as_mut() {
                    h.text.push_str(&code);
                }
                push(
                    &mut out,
                    &mut heading,
                    Event::Html(
                        format!("<code class=\"md-inline-code\">{}</code>", escape_attr(&code)).into(),
                    ),
                );
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                let open = match kind {
                    CodeBlockKind::Fenced(lang) => {
                        let lang = lang.split_whitespace().next().unwrap_or_default();
                        if lang.is_empty() {
                            "<pre class=\"md-code-block\"><code>".to_string()
                        } else {
                            format!(
                                "<pre class=\"md-code-block\"><code class=\"language-{}\">",
                                escape_attr(lang)
                            )
                        }
                    }
                    CodeBlockKind::Indented => "<pre class=\"md-code-block\"><code>".to_string(),
                };
                out.push(Event::Html(open.into()));
            }
            Event::End(TagEnd::CodeBlock) => {
                out.push(Event::Html(CowStr::Borrowed("</code></pre>\n")));
            }
            Event::Start(Tag::Table(alignments)) => {
                out.push(Event::Html(CowStr::Borrowed("<div class=\"md-table-wrapper\">\n")));
                out.push(Event::Start(Tag::Table(alignments)));
            }
            Event::End(TagEnd::Table) => {
                out.push(Event::End(TagEnd::Table));
                out.push(Event::Html(CowStr::Borrowed("</div>\n")));
            }
            other => {
                if let (Some(h), Event::Text(t)) = (heading.as_mut(), &other) {
                    h.text.push_str(t);
                }
                push(&mut out, &mut heading, other);
            }
        }
    }
    out
}

/// Route an event into the open heading, if any
fn push<'a>(out: &mut Vec<Event<'a>>, heading: &mut Option<PendingHeading<'a>>, event: Event<'a>) {
    match heading {
        Some(h) => h.inner.push(event),
        None => out.push(event),
    }
}

fn heading_tag(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

fn link_open(dest: &str, title: &str) -> String {
    let title_attr = if title.is_empty() {
        String::new()
    } else {
        format!(" title=\"{}\"", escape_attr(title))
    };

    if let Some(anchor) = dest.strip_prefix('#') {
        format!(
            "<a href=\"#{}\" class=\"{ANCHOR_LINK_CLASS}\" data-anchor=\"{}\"{title_attr}>",
            escape_attr(anchor),
            escape_attr(anchor),
        )
    } else {
        format!(
            "<a href=\"{}\" class=\"md-link\" target=\"_blank\" rel=\"noopener noreferrer\"{title_attr}>",
            escape_attr(dest)
        )
    }
}

fn image_tag(img: PendingImage) -> String {
    let title_attr = if img.title.is_empty() {
        String::new()
    } else {
        format!(" title=\"{}\"", escape_attr(&img.title))
    };
    format!(
        "<img src=\"{}\" alt=\"{}\" class=\"md-image\" loading=\"lazy\"{title_attr} />",
        escape_attr(&img.src),
        escape_attr(&img.alt),
    )
}

fn escape_attr(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time(""), 1);
        assert_eq!(reading_time("  \n\t "), 1);
        assert_eq!(reading_time("one two three"), 1);
        assert_eq!(reading_time(&"word ".repeat(200)), 1);
        assert_eq!(reading_time(&"word ".repeat(201)), 2);
    }

    #[test]
    fn test_heading_id() {
        assert_eq!(heading_id("Hello World"), "hello-world");
        assert_eq!(heading_id("What's new in 2.0?"), "whats-new-in-20");
        assert_eq!(heading_id("a  --  b"), "a-b");
        assert_eq!(heading_id("snake_case stays"), "snake_case-stays");
        assert_eq!(heading_id("!!!"), "");
        assert_eq!(heading_id("- Intro"), "-intro");
        assert_eq!(heading_id("! Hello"), "-hello");
        assert_eq!(heading_id("Wrap up !"), "wrap-up-");
    }

    #[test]
    fn test_headings_get_ids_and_level_class() {
        let html = render_markdown("## Getting Started\n\n### With `cargo`");
        assert!(html.contains("<h2 id=\"getting-started\" class=\"md-heading md-h2\">Getting Started</h2>"));
        assert!(html.contains("<h3 id=\"with-cargo\" class=\"md-heading md-h3\">With <code class=\"md-inline-code\">cargo</code></h3>"));
    }

    #[test]
    fn test_anchor_and_external_links() {
        let html = render_markdown("[jump](#setup) and [docs](https://docs.rs)");
        assert!(html.contains("<a href=\"#setup\" class=\"md-anchor\" data-anchor=\"setup\">jump</a>"));
        assert!(html.contains(
            "<a href=\"https://docs.rs\" class=\"md-link\" target=\"_blank\" rel=\"noopener noreferrer\">docs</a>"
        ));
    }

    #[test]
    fn test_images_are_responsive() {
        let html = render_markdown("![A *diagram*](/img/a.png \"Arch\")");
        assert!(html.contains(
            "<img src=\"/img/a.png\" alt=\"A diagram\" class=\"md-image\" loading=\"lazy\" title=\"Arch\" />"
        ));
    }

    #[test]
    fn test_fenced_code_keeps_language() {
        let html = render_markdown("```rust\nfn main() { let a = 1 < 2; }\n```\n");
        assert!(html.contains("<pre class=\"md-code-block\"><code class=\"language-rust\">"));
        assert!(html.contains("1 &lt; 2"));
        assert!(html.contains("</code></pre>"));
    }

    #[test]
    fn test_tables_are_wrapped() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        let wrapper = html.find("<div class=\"md-table-wrapper\">").unwrap();
        let table = html.find("<table>").unwrap();
        assert!(wrapper < table);
        assert!(html.trim_end().ends_with("</div>"));
    }

    #[test]
    fn test_gfm_extensions() {
        let html = render_markdown("~~gone~~\n\n- [x] done\n");
        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("type=\"checkbox\""));
    }

    #[test]
    fn test_highlight_theme() {
        assert_eq!(highlight_theme(Theme::White), "atom-one-light");
        assert_eq!(highlight_theme(Theme::Github), "atom-one-dark");
        assert_eq!(highlight_theme(Theme::Dark), "atom-one-dark");
    }
}
