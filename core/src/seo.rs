//! Document head metadata and JSON-LD structured data

use folio_types::SeoConfig;
use serde_json::{Value, json};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// One `<meta>` tag. `is_property` selects `property=` (Open Graph) over
/// `name=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub key: &'static str,
    pub content: String,
    pub is_property: bool,
}

/// Page level head metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTags {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub image: String,
    pub url: String,
    pub kind: String,
    pub twitter_handle: String,
}

impl Default for MetaTags {
    fn default() -> Self {
        Self {
            title: "Portfolio | Software Engineer".to_string(),
            description: "Personal portfolio: skills, experience, projects and writing."
                .to_string(),
            keywords: "Software Engineer, Portfolio, Web Developer, Rust".to_string(),
            image: "/og-image.png".to_string(),
            url: "/".to_string(),
            kind: "website".to_string(),
            twitter_handle: String::new(),
        }
    }
}

impl MetaTags {
    /// Site defaults overlaid with whatever the document sets
    pub fn from_config(seo: &SeoConfig) -> Self {
        let defaults = Self::default();
        let pick = |value: &Option<String>, fallback: String| {
            value
                .as_ref()
                .filter(|v| !v.trim().is_empty())
                .cloned()
                .unwrap_or(fallback)
        };
        Self {
            title: pick(&seo.title, defaults.title),
            description: pick(&seo.description, defaults.description),
            keywords: pick(&seo.keywords, defaults.keywords),
            image: pick(&seo.image, defaults.image),
            url: pick(&seo.url, defaults.url),
            kind: pick(&seo.kind, defaults.kind),
            twitter_handle: pick(&seo.twitter_handle, defaults.twitter_handle),
        }
    }

    /// Override the title and description for a single page, such as a
    /// blog post
    pub fn for_page(mut self, title: &str, description: &str) -> Self {
        self.title = title.to_string();
        if !description.is_empty() {
            self.description = description.to_string();
        }
        self.kind = "article".to_string();
        self
    }

    /// All `<meta>` tags to upsert, in document order
    pub fn tags(&self) -> Vec<MetaTag> {
        let tag = |key, content: &str, is_property| MetaTag {
            key,
            content: content.to_string(),
            is_property,
        };
        vec![
            tag("description", &self.description, false),
            tag("keywords", &self.keywords, false),
            tag("og:title", &self.title, true),
            tag("og:description", &self.description, true),
            tag("og:image", &self.image, true),
            tag("og:url", &self.url, true),
            tag("og:type", &self.kind, true),
            tag("twitter:title", &self.title, false),
            tag("twitter:description", &self.description, false),
            tag("twitter:image", &self.image, false),
            tag("twitter:creator", &self.twitter_handle, false),
            tag("twitter:card", "summary_large_image", false),
        ]
    }

    pub fn canonical_url(&self) -> &str {
        &self.url
    }
}

/// `BreadcrumbList` schema from `(name, url)` pairs, positions starting at 1
pub fn breadcrumb_schema(items: &[(&str, &str)]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, (name, url))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": name,
                "item": url,
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

/// `FAQPage` schema from `(question, answer)` pairs
pub fn faq_schema(faqs: &[(&str, &str)]) -> Value {
    let entities: Vec<Value> = faqs
        .iter()
        .map(|(question, answer)| {
            json!({
                "@type": "Question",
                "name": question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": answer,
                },
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": entities,
    })
}

/// `BlogPosting` schema for a post detail page
pub fn article_schema(title: &str, summary: &str, date: &str, tags: &[String]) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BlogPosting",
        "headline": title,
        "description": summary,
        "datePublished": date,
        "keywords": tags.join(", "),
    })
}
