//! Post catalog - derivation, filtering, and ordering
//!
//! Rebuilt fresh from the full file set on every request; no
//! incremental updates and no mutation after construction.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::{ContentFile, FrontMatter};

lazy_static! {
    /// First level-1 heading line in a body, used as a title fallback.
    static ref TITLE_RE: Regex = Regex::new(r"(?m)^#\s+(.+)$").unwrap();
}

/// A blog post built from one content file.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Post {
    /// Identifier derived from the file path; stable across rebuilds
    /// as long as the path is unchanged, so permalinks survive.
    pub slug: String,

    /// Front-matter title, else the first `# ` heading, else the slug.
    pub title: String,

    /// Opaque date string, expected `YYYY-MM-DD`; empty when absent.
    /// Never parsed or validated, only compared lexicographically.
    pub date: String,

    /// Raw markdown body, trimmed.
    pub content: String,

    /// Front-matter status; `published` when absent.
    pub status: String,
}

impl Post {
    /// Build a post from a single content file.
    pub fn from_file(file: &ContentFile) -> Self {
        let slug = slug_from_path(&file.path);
        let (fm, body) = FrontMatter::parse(&file.raw);

        let title = fm
            .title()
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .or_else(|| TITLE_RE.captures(&body).map(|c| c[1].trim_end().to_string()))
            .unwrap_or_else(|| slug.clone());

        let date = fm.date().unwrap_or("").to_string();
        let status = fm
            .status()
            .filter(|s| !s.is_empty())
            .unwrap_or("published")
            .to_string();
        let content = body.trim().to_string();

        Self {
            slug,
            title,
            date,
            content,
            status,
        }
    }

    pub fn is_draft(&self) -> bool {
        self.status == "draft"
    }
}

/// Derive a post's slug from its content-root-relative path: normalize
/// separators to forward slashes and strip the `.md` extension.
pub fn slug_from_path(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    let trimmed = normalized.trim_start_matches('/');
    trimmed.strip_suffix(".md").unwrap_or(trimmed).to_string()
}

/// The full ordered collection of parsed, filtered posts.
#[derive(Debug, Default)]
pub struct Catalog {
    posts: Vec<Post>,
}

impl Catalog {
    /// Build a catalog from a set of content files.
    ///
    /// Posts whose status is exactly `draft` are dropped unless
    /// `include_drafts` is set; every other status value passes
    /// through. The result is ordered by date descending with plain
    /// string comparison, so undated posts land at the end. The sort
    /// is stable: equal dates keep their discovery order. When two
    /// files map to the same slug, the later one in discovery order
    /// wins and the collision is logged.
    pub fn build(files: &[ContentFile], include_drafts: bool) -> Self {
        let mut posts: Vec<Post> = Vec::new();

        for file in files {
            let post = Post::from_file(file);

            if post.is_draft() && !include_drafts {
                tracing::debug!("Skipping draft {}", post.slug);
                continue;
            }

            if let Some(pos) = posts.iter().position(|p| p.slug == post.slug) {
                tracing::warn!(
                    "Duplicate slug '{}' from {}; replacing the earlier entry",
                    post.slug,
                    file.path
                );
                posts.remove(pos);
            }
            posts.push(post);
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Self { posts }
    }

    /// All posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Look up a post by exact slug.
    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
