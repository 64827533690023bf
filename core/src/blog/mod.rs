//! Static blog: front matter parsing, catalog, filtering and markdown rendering
//!
//! Posts are plain markdown files with a YAML front matter block. They are
//! embedded into the binary at build time, so the catalog is built once from
//! `(file name, contents)` pairs and never changes afterwards.

mod catalog;
mod filter;
mod frontmatter;
mod markdown;

pub use catalog::BlogCatalog;
pub use filter::BlogFilter;
pub use frontmatter::{FrontMatter, parse_post, split_front_matter};
pub use markdown::{ANCHOR_LINK_CLASS, heading_id, highlight_theme, reading_time, render_markdown};

use chrono::{DateTime, NaiveDate};

/// Accepted `date` layouts, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y"];

/// A parsed blog post
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    /// File stem, lower-cased; the URL segment under `/blogs/`
    pub slug: String,
    pub title: String,
    /// Date as written in the front matter
    pub date: String,
    pub summary: String,
    pub tags: Vec<String>,
    /// Markdown after the front matter block
    pub body: String,
}

impl BlogPost {
    /// Publication date, if the front matter date is in a known layout
    pub fn published_on(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn reading_minutes(&self) -> usize {
        reading_time(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_dated(date: &str) -> BlogPost {
        BlogPost {
            slug: "p".to_string(),
            title: "P".to_string(),
            date: date.to_string(),
            summary: String::new(),
            tags: vec!["rust".to_string()],
            body: String::new(),
        }
    }

    #[test]
    fn test_published_on_layouts() {
        let expected = NaiveDate::from_ymd_opt(2025, 11, 23);
        assert_eq!(post_dated("2025-11-23").published_on(), expected);
        assert_eq!(post_dated("2025/11/23").published_on(), expected);
        assert_eq!(post_dated("November 23, 2025").published_on(), expected);
        assert_eq!(post_dated("2025-11-23T08:00:00Z").published_on(), expected);
        assert_eq!(post_dated("someday").published_on(), None);
    }

    #[test]
    fn test_has_tag_is_exact() {
        let post = post_dated("2025-01-01");
        assert!(post.has_tag("rust"));
        assert!(!post.has_tag("Rust"));
    }
}
