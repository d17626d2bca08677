//! Render a post to HTML

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::content::render_markdown;
use crate::Site;

/// Render one post's body to an HTML fragment, to stdout or a file.
/// Drafts are included so authors can preview unpublished posts.
pub fn run(site: &Site, slug: &str, output: Option<&Path>) -> Result<()> {
    let catalog = site.catalog_with_drafts(true)?;

    let Some(post) = catalog.get(slug) else {
        anyhow::bail!("Post not found: {}", slug);
    };

    let html = render_markdown(&post.content);

    match output {
        Some(path) => {
            fs::write(path, &html)?;
            tracing::info!("Wrote rendered HTML to {:?}", path);
        }
        None => println!("{}", html),
    }

    Ok(())
}
