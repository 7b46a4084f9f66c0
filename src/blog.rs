//! The blog list pipeline: pure functions from metadata to view lists.
//!
//! Stages run in a fixed order (published, tag, search, sort) but the tag
//! and search stages are independent set intersections, so applying them in
//! either order yields the same list.

use std::collections::BTreeSet;

use crate::content::PostMeta;

/// Active list filters. Not persisted; cleared on language switch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub active_tag: Option<String>,
    pub query: String,
}

impl PostFilter {
    pub fn is_empty(&self) -> bool {
        self.active_tag.is_none() && self.query.is_empty()
    }
}

/// Published posts matching the filter, newest first.
///
/// The search is a case-insensitive substring test over title and
/// description. The final sort is stable, so posts sharing a date keep
/// their incoming order.
pub fn filter_posts(posts: &[PostMeta], filter: &PostFilter) -> Vec<PostMeta> {
    let query = filter.query.to_lowercase();
    let mut matched: Vec<PostMeta> = posts
        .iter()
        .filter(|post| post.published)
        .filter(|post| {
            filter
                .active_tag
                .as_ref()
                .map_or(true, |tag| post.tags.iter().any(|t| t == tag))
        })
        .filter(|post| {
            query.is_empty()
                || post.title.to_lowercase().contains(&query)
                || post.description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect();
    matched.sort_by(|a, b| b.date.cmp(&a.date));
    matched
}

/// Every distinct tag across all metadata, published or not, alphabetical.
pub fn all_tags(posts: &[PostMeta]) -> Vec<String> {
    let tags: BTreeSet<&String> = posts.iter().flat_map(|post| post.tags.iter()).collect();
    tags.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, title: &str, date: &str, tags: &[&str], published: bool) -> PostMeta {
        PostMeta {
            slug: slug.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            description: format!("About {title}"),
            published,
        }
    }

    fn sample_posts() -> Vec<PostMeta> {
        vec![
            post("a", "Zero-copy parsing", "2024-03-01", &["rust", "perf"], true),
            post("b", "Kafka war stories", "2024-01-15", &["kafka"], true),
            post("c", "Hidden draft", "2024-06-01", &["rust", "draft"], false),
            post("d", "Terminal portfolio", "2023-11-20", &["rust", "tui"], true),
        ]
    }

    #[test]
    fn test_unpublished_posts_never_appear() {
        let filtered = filter_posts(&sample_posts(), &PostFilter::default());
        assert!(filtered.iter().all(|p| p.published));
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_tag_filter_is_exact_membership() {
        let filter = PostFilter {
            active_tag: Some("rust".to_string()),
            query: String::new(),
        };
        let filtered = filter_posts(&sample_posts(), &filter);
        let slugs: Vec<&str> = filtered.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "d"]);

        // "tu" is a substring of "tui" but not a tag.
        let filter = PostFilter {
            active_tag: Some("tu".to_string()),
            query: String::new(),
        };
        assert!(filter_posts(&sample_posts(), &filter).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let filter = PostFilter {
            active_tag: None,
            query: "KAFKA".to_string(),
        };
        let filtered = filter_posts(&sample_posts(), &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].slug, "b");

        // Matches descriptions too ("About Zero-copy parsing").
        let filter = PostFilter {
            active_tag: None,
            query: "about zero".to_string(),
        };
        let filtered = filter_posts(&sample_posts(), &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].slug, "a");
    }

    #[test]
    fn test_tag_and_search_stages_commute() {
        let posts = sample_posts();
        let combined = PostFilter {
            active_tag: Some("rust".to_string()),
            query: "terminal".to_string(),
        };
        let both = filter_posts(&posts, &combined);

        // Apply tag first, then search the intermediate result.
        let tag_only = filter_posts(
            &posts,
            &PostFilter {
                active_tag: Some("rust".to_string()),
                query: String::new(),
            },
        );
        let then_search = filter_posts(
            &tag_only,
            &PostFilter {
                active_tag: None,
                query: "terminal".to_string(),
            },
        );

        // And the other way round.
        let search_only = filter_posts(
            &posts,
            &PostFilter {
                active_tag: None,
                query: "terminal".to_string(),
            },
        );
        let then_tag = filter_posts(
            &search_only,
            &PostFilter {
                active_tag: Some("rust".to_string()),
                query: String::new(),
            },
        );

        assert_eq!(both, then_search);
        assert_eq!(both, then_tag);
    }

    #[test]
    fn test_result_is_newest_first() {
        let filtered = filter_posts(&sample_posts(), &PostFilter::default());
        let dates: Vec<&str> = filtered.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-01", "2024-01-15", "2023-11-20"]);
    }

    #[test]
    fn test_all_tags_distinct_sorted_includes_unpublished() {
        let tags = all_tags(&sample_posts());
        assert_eq!(tags, vec!["draft", "kafka", "perf", "rust", "tui"]);
    }

    #[test]
    fn test_empty_filter_is_identity_plus_published_and_sort() {
        let filter = PostFilter::default();
        assert!(filter.is_empty());
        let filtered = filter_posts(&[], &filter);
        assert!(filtered.is_empty());
    }
}
