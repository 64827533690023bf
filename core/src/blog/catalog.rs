use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::{BlogPost, parse_post};

/// All posts, newest first
#[derive(Debug, Clone, Default)]
pub struct BlogCatalog {
    posts: Vec<BlogPost>,
}

impl BlogCatalog {
    /// Build the catalog from `(file name, contents)` pairs.
    ///
    /// Posts that fail to parse are logged and left out. Posts with a date
    /// in an unknown layout sort after every dated post.
    pub fn from_sources<'a, I>(sources: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut posts: Vec<BlogPost> = sources
            .into_iter()
            .filter_map(|(file_name, raw)| match parse_post(file_name, raw) {
                Ok(post) => Some(post),
                Err(e) => {
                    tracing::warn!(file = file_name, error = %e, "Skipping blog post");
                    None
                }
            })
            .collect();

        posts.sort_by(newest_first);
        tracing::debug!(count = posts.len(), "Blog catalog loaded");
        Self { posts }
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn by_slug(&self, slug: &str) -> Option<&BlogPost> {
        let slug = slug.to_lowercase();
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn by_tag(&self, tag: &str) -> Vec<&BlogPost> {
        self.posts.iter().filter(|p| p.has_tag(tag)).collect()
    }

    /// Every tag used by any post, unique and sorted
    pub fn all_tags(&self) -> Vec<&str> {
        self.posts
            .iter()
            .flat_map(|p| p.tags.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn newest_first(a: &BlogPost, b: &BlogPost) -> Ordering {
    match (a.published_on(), b.published_on()) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.slug.cmp(&b.slug))
}
