//! Content sources - supply raw content files on demand
//!
//! The catalog never touches the filesystem itself; it consumes
//! `(path, text)` pairs from a [`ContentSource`], so tests can feed it
//! synthetic in-memory file sets.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A raw content file: path relative to the content root, plus its
/// text. Read-only input; the engine never writes content files.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentFile {
    pub path: String,
    pub raw: String,
}

impl ContentFile {
    pub fn new(path: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            raw: raw.into(),
        }
    }
}

/// Supplies the current set of content files.
pub trait ContentSource {
    fn files(&self) -> Result<Vec<ContentFile>>;
}

/// Loads `.md` files from a directory tree on disk.
///
/// Paths are reported relative to the root with forward slashes, in
/// sorted filename order so discovery order is deterministic across
/// platforms.
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ContentSource for FsSource {
    fn files(&self) -> Result<Vec<ContentFile>> {
        if !self.root.exists() {
            tracing::debug!("Content directory {:?} does not exist", self.root);
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }
            match fs::read_to_string(path) {
                Ok(raw) => {
                    let relative = path.strip_prefix(&self.root).unwrap_or(path);
                    let relative = relative.to_string_lossy().replace('\\', "/");
                    files.push(ContentFile::new(relative, raw));
                }
                Err(e) => {
                    tracing::warn!("Failed to read {:?}: {}", path, e);
                }
            }
        }

        tracing::debug!("Discovered {} content files in {:?}", files.len(), self.root);
        Ok(files)
    }
}

/// In-memory source for tests and embedded content.
#[derive(Debug, Default)]
pub struct MemSource {
    files: Vec<ContentFile>,
}

impl MemSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, keeping insertion order as discovery order.
    pub fn with_file(mut self, path: &str, raw: &str) -> Self {
        self.files.push(ContentFile::new(path, raw));
        self
    }
}

impl ContentSource for MemSource {
    fn files(&self) -> Result<Vec<ContentFile>> {
        Ok(self.files.clone())
    }
}

/// Check if a file is a markdown content file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md")
        .unwrap_or(false)
}
