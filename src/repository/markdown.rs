//! Markdown post repository with a process-lifetime full-post cache.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::content::{frontmatter, ContentSource, Post, PostKey, PostMeta};
use crate::error::Result;
use crate::locale::Language;
use crate::repository::Repository;

/// Posts from a [`ContentSource`].
///
/// `get_all` re-reads headers on every call and never caches; `get_by_id`
/// caches full posts by `(language, slug)` forever. The split mirrors how
/// the app uses them: listings are refreshed per language switch, opened
/// posts are immutable for the life of the process.
pub struct MarkdownRepository {
    source: Arc<dyn ContentSource>,
    cache: RwLock<HashMap<PostKey, Arc<Post>>>,
}

impl MarkdownRepository {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Drop every cached post. Exists for tests and has no user-facing
    /// trigger; the cache is otherwise unbounded by design.
    pub fn reset(&self) {
        self.cache.write().clear();
    }

    #[cfg(test)]
    fn cached_count(&self) -> usize {
        self.cache.read().len()
    }
}

#[async_trait]
impl Repository for MarkdownRepository {
    type Record = Arc<Post>;
    type Summary = PostMeta;

    async fn get_all(&self, language: Language) -> Result<Vec<PostMeta>> {
        let mut posts = Vec::new();
        for document in self.source.documents(language) {
            let raw = self.source.load(&document).await?;
            let parsed = frontmatter::parse(&raw);
            posts.push(PostMeta::from_fields(&parsed.fields, &document.file_stem));
        }
        // Newest first; ISO date strings order correctly as text. The sort
        // is stable so equal dates keep discovery order.
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    async fn get_by_id(&self, slug: &str, language: Language) -> Result<Option<Arc<Post>>> {
        let key: PostKey = (language, slug.to_string());
        if let Some(post) = self.cache.read().get(&key) {
            return Ok(Some(Arc::clone(post)));
        }

        for document in self.source.documents(language) {
            let raw = self.source.load(&document).await?;
            let parsed = frontmatter::parse(&raw);
            let meta = PostMeta::from_fields(&parsed.fields, &document.file_stem);
            if meta.slug == slug {
                let post = Arc::new(Post {
                    meta,
                    body: parsed.body,
                });
                // Overlapping loads of the same slug may both reach here;
                // the last insert wins and the posts are equivalent.
                self.cache.write().insert(key, Arc::clone(&post));
                return Ok(Some(post));
            }
        }
        Ok(None)
    }
}
