//! Markdown content: document types, header parsing and the content source.
//!
//! A post is a markdown file with an optional `---` delimited header. The
//! parser is deliberately permissive (see [`frontmatter`]): a malformed
//! header can degrade what a post shows, never whether it renders.

pub mod frontmatter;
pub mod store;

use std::collections::BTreeMap;

use crate::content::frontmatter::FieldValue;
use crate::locale::Language;

pub use store::{ContentSource, DiskSource, DocumentRef, MemorySource};

/// Listing-level view of a post. Carries everything the blog list and the
/// filter layer need; the body stays on [`Post`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMeta {
    pub slug: String,
    pub title: String,
    /// ISO-style date string, compared lexically. Empty when absent.
    pub date: String,
    pub tags: Vec<String>,
    pub description: String,
    pub published: bool,
}

/// A fully loaded post: metadata plus the markdown body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub meta: PostMeta,
    pub body: String,
}

/// Identity of a post within one language's content set.
pub type PostKey = (Language, String);

impl PostMeta {
    /// Assemble metadata from parsed header fields, defaulting every hole:
    /// text fields to empty, tags to none, `published` to true. The slug
    /// falls back to the file stem when the header omits it or leaves it
    /// empty.
    pub fn from_fields(fields: &BTreeMap<String, FieldValue>, file_stem: &str) -> Self {
        let slug = match fields.get("slug") {
            Some(FieldValue::Text(s)) if !s.is_empty() => s.clone(),
            _ => file_stem.to_string(),
        };
        Self {
            slug,
            title: text_field(fields, "title"),
            date: text_field(fields, "date"),
            tags: match fields.get("tags") {
                Some(FieldValue::List(tags)) => tags.clone(),
                _ => Vec::new(),
            },
            description: text_field(fields, "description"),
            // Only an explicit boolean false unpublishes a post.
            published: !matches!(fields.get("published"), Some(FieldValue::Flag(false))),
        }
    }
}

fn text_field(fields: &BTreeMap<String, FieldValue>, key: &str) -> String {
    match fields.get(key) {
        Some(FieldValue::Text(s)) => s.clone(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::frontmatter;

    fn meta_for(raw: &str, file_stem: &str) -> PostMeta {
        let parsed = frontmatter::parse(raw);
        PostMeta::from_fields(&parsed.fields, file_stem)
    }

    #[test]
    fn test_all_fields_extracted() {
        let raw = "---\n\
                   title: Hello\n\
                   date: 2024-03-01\n\
                   tags: [\"rust\", \"tui\"]\n\
                   description: First post\n\
                   slug: hello-world\n\
                   published: true\n\
                   ---\n\
                   Body here.\n";
        let meta = meta_for(raw, "ignored");
        assert_eq!(meta.slug, "hello-world");
        assert_eq!(meta.title, "Hello");
        assert_eq!(meta.date, "2024-03-01");
        assert_eq!(meta.tags, vec!["rust", "tui"]);
        assert_eq!(meta.description, "First post");
        assert!(meta.published);
    }

    #[test]
    fn test_missing_fields_default() {
        let meta = meta_for("---\ntitle: Only a title\n---\nBody\n", "from-file");
        assert_eq!(meta.slug, "from-file");
        assert_eq!(meta.date, "");
        assert_eq!(meta.tags, Vec::<String>::new());
        assert_eq!(meta.description, "");
        assert!(meta.published, "published defaults to true");
    }

    #[test]
    fn test_empty_slug_falls_back_to_file_stem() {
        let meta = meta_for("---\nslug:\n---\nBody\n", "fallback-name");
        assert_eq!(meta.slug, "fallback-name");
    }

    #[test]
    fn test_only_boolean_false_unpublishes() {
        assert!(!meta_for("---\npublished: false\n---\n\n", "a").published);
        assert!(!meta_for("---\npublished: \"false\"\n---\n\n", "a").published);
        // Any other value keeps the default.
        assert!(meta_for("---\npublished: no\n---\n\n", "a").published);
        assert!(meta_for("---\npublished: true\n---\n\n", "a").published);
    }

    #[test]
    fn test_non_list_tags_are_dropped() {
        // A malformed array stays a literal string at the parse layer; the
        // typed view treats that as no tags.
        let meta = meta_for("---\ntags: [not, valid\n---\n\n", "a");
        assert_eq!(meta.tags, Vec::<String>::new());
    }
}
