//! Content module - front-matter, content sources, catalog, markdown

mod catalog;
mod frontmatter;
mod markdown;
mod source;

pub use catalog::{slug_from_path, Catalog, Post};
pub use frontmatter::FrontMatter;
pub use markdown::render_markdown;
pub use source::{ContentFile, ContentSource, FsSource, MemSource};
