//! Content discovery and loading.
//!
//! Documents live under `<root>/posts/<lang>/<name>.md`. Discovery walks the
//! tree once at startup; loading is async behind the [`ContentSource`] trait
//! so the repository can be tested against an in-memory source and so load
//! counting can verify cache behavior.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use walkdir::WalkDir;

use crate::error::{FolioError, Result};
use crate::locale::Language;

/// A discovered document: where it is, what stem names it, which language
/// partition it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub path: PathBuf,
    pub file_stem: String,
    pub language: Language,
}

#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Discovered documents for one language, in stable path order.
    fn documents(&self, language: Language) -> Vec<DocumentRef>;

    /// Load the raw text of a discovered document.
    async fn load(&self, document: &DocumentRef) -> Result<String>;
}

/// Filesystem-backed source. The walk happens once in the constructor;
/// `documents` never touches the disk again.
#[derive(Debug)]
pub struct DiskSource {
    documents: Vec<DocumentRef>,
}

impl DiskSource {
    pub fn new(root: &Path) -> Result<Self> {
        if !root.exists() {
            return Err(FolioError::ContentDirNotFound {
                path: root.to_path_buf(),
            });
        }
        if !root.is_dir() {
            return Err(FolioError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let mut documents = Vec::new();
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("skipping unreadable content entry: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
                continue;
            }
            let Some(file_stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            documents.push(DocumentRef {
                path: path.to_path_buf(),
                file_stem: file_stem.to_string(),
                language: language_for_path(path),
            });
        }
        // Path order keeps discovery (and date-tie ordering downstream)
        // independent of directory iteration order.
        documents.sort_by(|a, b| a.path.cmp(&b.path));

        log::debug!(
            "discovered {} content documents under {}",
            documents.len(),
            root.display()
        );
        Ok(Self { documents })
    }
}

#[async_trait]
impl ContentSource for DiskSource {
    fn documents(&self, language: Language) -> Vec<DocumentRef> {
        self.documents
            .iter()
            .filter(|d| d.language == language)
            .cloned()
            .collect()
    }

    async fn load(&self, document: &DocumentRef) -> Result<String> {
        tokio::fs::read_to_string(&document.path)
            .await
            .map_err(|e| {
                FolioError::content_error(format!("reading {}", document.path.display()), e)
            })
    }
}

/// The language partition is the path segment right after `posts`; anything
/// unrecognized, including a file directly under `posts`, is fallback.
fn language_for_path(path: &Path) -> Language {
    let mut components = path.components().map(|c| c.as_os_str().to_string_lossy());
    while let Some(component) = components.next() {
        if component == "posts" {
            return components
                .next()
                .map(|segment| Language::from_path_segment(&segment))
                .unwrap_or(Language::FALLBACK);
        }
    }
    Language::FALLBACK
}

/// In-memory source: the posts shipped inside the binary, and the seam the
/// tests drive. Loads are counted so cache behavior can be asserted.
pub struct MemorySource {
    documents: Vec<(DocumentRef, String)>,
    loads: AtomicUsize,
}

impl MemorySource {
    /// Build from `(language, file_stem, raw_document)` triples.
    pub fn new(entries: Vec<(Language, &str, &str)>) -> Self {
        let documents = entries
            .into_iter()
            .map(|(language, file_stem, raw)| {
                let path = PathBuf::from(format!(
                    "memory://posts/{}/{}.md",
                    language.code(),
                    file_stem
                ));
                (
                    DocumentRef {
                        path,
                        file_stem: file_stem.to_string(),
                        language,
                    },
                    raw.to_string(),
                )
            })
            .collect();
        Self {
            documents,
            loads: AtomicUsize::new(0),
        }
    }

    /// The sample posts compiled into the binary. Used when no content
    /// directory is available, the way the original site bundled its posts.
    pub fn embedded() -> Self {
        Self::new(vec![
            (
                Language::En,
                "zero-copy-parsing",
                include_str!("../../content/posts/en/zero-copy-parsing.md"),
            ),
            (
                Language::En,
                "event-ledger-postmortem",
                include_str!("../../content/posts/en/event-ledger-postmortem.md"),
            ),
            (
                Language::En,
                "terminal-portfolio",
                include_str!("../../content/posts/en/terminal-portfolio.md"),
            ),
            (
                Language::En,
                "drafts-are-forever",
                include_str!("../../content/posts/en/drafts-are-forever.md"),
            ),
            (
                Language::Es,
                "zero-copy-parsing",
                include_str!("../../content/posts/es/zero-copy-parsing.md"),
            ),
            (
                Language::Es,
                "terminal-portfolio",
                include_str!("../../content/posts/es/terminal-portfolio.md"),
            ),
        ])
    }

    /// Total `load` calls across all documents so far.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    fn documents(&self, language: Language) -> Vec<DocumentRef> {
        self.documents
            .iter()
            .filter(|(d, _)| d.language == language)
            .map(|(d, _)| d.clone())
            .collect()
    }

    async fn load(&self, document: &DocumentRef) -> Result<String> {
        self.loads.fetch_add(1, Ordering::Relaxed);
        self.documents
            .iter()
            .find(|(d, _)| d.path == document.path)
            .map(|(_, raw)| raw.clone())
            .ok_or_else(|| {
                FolioError::other(format!("no such document: {}", document.path.display()))
            })
    }
}
