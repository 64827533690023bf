//! Posts embedded at build time from `blogs/*.md`

use std::sync::LazyLock;

use folio_core::BlogCatalog;

include!(concat!(env!("OUT_DIR"), "/blog_sources.rs"));

static CATALOG: LazyLock<BlogCatalog> =
    LazyLock::new(|| BlogCatalog::from_sources(BLOG_SOURCES.iter().copied()));

/// The parsed, sorted catalog. Parsed on first use.
pub fn catalog() -> &'static BlogCatalog {
    &CATALOG
}
