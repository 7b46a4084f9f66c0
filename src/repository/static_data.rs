//! Repository over fixed in-memory records.

use async_trait::async_trait;

use crate::error::Result;
use crate::locale::Language;
use crate::profile::{Achievement, ExperienceEntry, Project};
use crate::repository::Repository;

/// Record with a stable string id.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Project {
    fn id(&self) -> &str {
        self.id
    }
}

impl Identified for Achievement {
    fn id(&self) -> &str {
        self.id
    }
}

impl Identified for ExperienceEntry {
    fn id(&self) -> &str {
        self.id
    }
}

/// Same read contract as the markdown repository, over data that never
/// changes and has no language dimension.
pub struct StaticRepository<T> {
    entries: Vec<T>,
}

impl<T> StaticRepository<T> {
    pub fn new(entries: Vec<T>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl<T> Repository for StaticRepository<T>
where
    T: Identified + Clone + Send + Sync,
{
    type Record = T;
    type Summary = T;

    async fn get_all(&self, _language: Language) -> Result<Vec<T>> {
        Ok(self.entries.clone())
    }

    async fn get_by_id(&self, id: &str, _language: Language) -> Result<Option<T>> {
        Ok(self.entries.iter().find(|entry| entry.id() == id).cloned())
    }
}
