use std::collections::BTreeSet;

use super::BlogPost;

/// Search box text plus the set of selected tag badges.
///
/// A post passes when it matches the query (case-insensitive, against
/// title, summary or any tag) AND carries at least one selected tag. An
/// empty query or an empty tag set matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogFilter {
    pub query: String,
    pub selected_tags: BTreeSet<String>,
}

impl BlogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Select the tag if unselected, unselect it otherwise
    pub fn toggle_tag(&mut self, tag: &str) {
        if !self.selected_tags.remove(tag) {
            self.selected_tags.insert(tag.to_string());
        }
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected_tags.contains(tag)
    }

    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || !self.selected_tags.is_empty()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.selected_tags.clear();
    }

    pub fn matches(&self, post: &BlogPost) -> bool {
        self.matches_query(post) && self.matches_tags(post)
    }

    pub fn apply<'a>(&self, posts: &'a [BlogPost]) -> Vec<&'a BlogPost> {
        posts.iter().filter(|p| self.matches(p)).collect()
    }

    fn matches_query(&self, post: &BlogPost) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        post.title.to_lowercase().contains(&needle)
            || post.summary.to_lowercase().contains(&needle)
            || post.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }

    fn matches_tags(&self, post: &BlogPost) -> bool {
        self.selected_tags.is_empty() || post.tags.iter().any(|t| self.selected_tags.contains(t))
    }
}
