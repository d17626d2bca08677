//! thoughtlog: a markdown-powered blog content engine
//!
//! Discovers markdown content files, parses their front-matter, builds
//! an ordered post catalog, and renders a restricted markdown dialect
//! to HTML for a presentation layer to display.

pub mod commands;
pub mod config;
pub mod content;

use anyhow::Result;
use std::path::Path;

use content::ContentSource;

/// The main application: configuration plus resolved directories.
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content root directory
    pub content_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new site rooted at a directory, loading `_config.yml`
    /// when present.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// Scan the content directory and build the post catalog, honoring
    /// the `render_drafts` config gate.
    pub fn catalog(&self) -> Result<content::Catalog> {
        self.catalog_with_drafts(self.config.render_drafts)
    }

    /// Build the catalog with an explicit draft policy.
    pub fn catalog_with_drafts(&self, include_drafts: bool) -> Result<content::Catalog> {
        let source = content::FsSource::new(&self.content_dir);
        let files = source.files()?;
        Ok(content::Catalog::build(&files, include_drafts))
    }
}
