//! List posts in the catalog

use anyhow::Result;

use crate::Site;

/// List posts, newest first.
pub fn run(site: &Site, include_drafts: bool, json: bool) -> Result<()> {
    let catalog = site.catalog_with_drafts(include_drafts || site.config.render_drafts)?;

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.posts())?);
        return Ok(());
    }

    println!("Posts ({}):", catalog.len());
    for post in catalog.posts() {
        let date = if post.date.is_empty() {
            "(undated)"
        } else {
            post.date.as_str()
        };
        println!("  {} - {} [{}]", date, post.title, post.slug);
    }

    Ok(())
}
