//! Read-side repositories.
//!
//! One trait, two backings: markdown documents loaded through a
//! [`crate::content::ContentSource`], and fixed in-memory records. Both are
//! constructed at startup and injected where needed; nothing here is global.

pub mod markdown;
pub mod static_data;

use async_trait::async_trait;

use crate::error::Result;
use crate::locale::Language;

pub use markdown::MarkdownRepository;
pub use static_data::{Identified, StaticRepository};

/// Generic read-only repository: list summaries, fetch one record by id.
///
/// `Summary` is the cheap listing view; `Record` the full fetch. Backings
/// that have no language dimension accept and ignore the argument.
#[async_trait]
pub trait Repository: Send + Sync {
    type Record;
    type Summary;

    async fn get_all(&self, language: Language) -> Result<Vec<Self::Summary>>;

    /// A miss is `Ok(None)`, never an error.
    async fn get_by_id(&self, id: &str, language: Language) -> Result<Option<Self::Record>>;
}
