//! # Post Criteria and Slug Lookup
//!
//! The blog listing has a search box and, optionally, a category chip.
//! Article pages are routed as `/blog/:slug` and resolved by exact match
//! against the slug stored on each post.

use serde::{Deserialize, Serialize};

use jobboard_core::{slug, BlogPost, Category};

use crate::criteria::Criteria;
use crate::jobs::blank_as_none;
use crate::search::{PostField, TextSearch};

/// Active filters of the blog listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostCriteria {
    /// Free text matched against title, excerpt and category.
    pub search: TextSearch<PostField>,
    /// Exact category, if chosen. Free-text categories compare verbatim.
    #[serde(deserialize_with = "blank_as_none")]
    pub category: Option<Category>,
}

impl PostCriteria {
    /// No constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = TextSearch::new(query);
        self
    }

    /// Require a category.
    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Number of active filters.
    pub fn active_count(&self) -> usize {
        usize::from(Criteria::<BlogPost>::is_active(&self.search)) + usize::from(self.category.is_some())
    }
}

impl Criteria<BlogPost> for PostCriteria {
    fn matches(&self, post: &BlogPost) -> bool {
        self.search.matches(post)
            && self.category.as_ref().map_or(true, |c| post.category == *c)
    }

    fn is_active(&self) -> bool {
        self.active_count() > 0
    }
}

/// Resolve the `:slug` segment of `/blog/:slug`.
///
/// The segment is passed through the slug codec first, so a link typed with
/// different case or stray punctuation still resolves. Matching is exact
/// against [`BlogPost::routable_slug`]; no decoded-title comparison happens.
pub fn find_post_by_slug<'a>(posts: &'a [BlogPost], segment: &str) -> Option<&'a BlogPost> {
    let wanted = slug::encode(segment);
    if wanted.is_empty() {
        tracing::debug!(segment, "slug segment encodes to nothing");
        return None;
    }
    let found = posts
        .iter()
        .find(|post| post.routable_slug().as_str() == wanted);
    if found.is_none() {
        tracing::debug!(slug = %wanted, "no post with this slug");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::{PostId, Slug, Timestamp};

    fn post(id: &str, title: &str, slug: &str, category: &str) -> BlogPost {
        BlogPost {
            id: PostId::from_raw(id),
            title: title.to_string(),
            slug: Slug::from_title(slug),
            category: Category::from(category),
            excerpt: String::new(),
            content: String::new(),
            read_time_minutes: 5,
            created_at: Timestamp::now(),
        }
    }

    #[test]
    fn search_matches_category_text() {
        let c = PostCriteria::new().with_search("guide");
        assert!(c.matches(&post("1", "Ace it", "", "Interview Guide")));
        assert!(!c.matches(&post("2", "Ace it", "", "Workplace")));
    }

    #[test]
    fn category_is_exact() {
        let c = PostCriteria::new().with_category(Category::JobSearch);
        assert!(c.matches(&post("1", "a", "", "Job Search")));
        assert!(!c.matches(&post("2", "a", "", "job search")));
        let c = PostCriteria::new().with_category("Remote Life");
        assert!(c.matches(&post("3", "a", "", "Remote Life")));
    }

    #[test]
    fn active_count() {
        assert_eq!(PostCriteria::new().active_count(), 0);
        let c = PostCriteria::new().with_search("x").with_category("Workplace");
        assert_eq!(c.active_count(), 2);
        assert!(c.is_active());
    }

    #[test]
    fn deserializes_blank_category() {
        let c: PostCriteria = serde_json::from_str(r#"{"search": "", "category": ""}"#).unwrap();
        assert_eq!(c, PostCriteria::default());
        let c: PostCriteria = serde_json::from_str(r#"{"category": "Workplace"}"#).unwrap();
        assert_eq!(c.category, Some(Category::Workplace));
    }

    #[test]
    fn lookup_uses_stored_slug() {
        let posts = vec![
            post("1", "Renamed Title", "original-title", "Workplace"),
            post("2", "Second Post", "", "Workplace"),
        ];
        assert_eq!(find_post_by_slug(&posts, "original-title").map(|p| p.id.as_str()), Some("1"));
        assert!(find_post_by_slug(&posts, "renamed-title").is_none());
    }

    #[test]
    fn lookup_falls_back_to_title_slug() {
        let posts = vec![post("2", "Second Post!", "", "Workplace")];
        assert_eq!(find_post_by_slug(&posts, "second-post").map(|p| p.id.as_str()), Some("2"));
    }

    #[test]
    fn lookup_normalizes_segment() {
        let posts = vec![post("1", "t", "resume-tips", "Career Tips")];
        assert!(find_post_by_slug(&posts, "Resume-Tips").is_some());
        assert!(find_post_by_slug(&posts, "resume tips").is_some());
        assert!(find_post_by_slug(&posts, "").is_none());
        assert!(find_post_by_slug(&posts, "---").is_none());
    }
}
