//! Show a single post's metadata and raw markdown body

use anyhow::Result;

use crate::Site;

/// Print one post by slug. Drafts are included so authors can inspect
/// unpublished posts.
pub fn run(site: &Site, slug: &str) -> Result<()> {
    let catalog = site.catalog_with_drafts(true)?;

    let Some(post) = catalog.get(slug) else {
        anyhow::bail!("Post not found: {}", slug);
    };

    println!("Title:  {}", post.title);
    if !post.date.is_empty() {
        println!("Date:   {}", post.date);
    }
    println!("Status: {}", post.status);
    println!();
    println!("{}", post.content);

    Ok(())
}
