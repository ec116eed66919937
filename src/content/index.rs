//! Date-ordered post index with slug lookup

use std::collections::HashSet;
use std::ops::Deref;

use lazy_static::lazy_static;
use regex::Regex;

use super::filename::strip_extension;
use super::Post;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("valid regex");
}

/// Posts sorted by date, newest first
#[derive(Debug, Clone, Default)]
pub struct PostIndex {
    posts: Vec<Post>,
}

impl PostIndex {
    /// Sort posts newest first; equal dates keep their manifest order
    pub fn build(mut posts: Vec<Post>) -> Self {
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        {
            let mut seen = HashSet::new();
            for post in &posts {
                if !seen.insert(post.slug.as_str()) {
                    tracing::warn!(
                        "Duplicate slug {:?} ({}); lookups resolve to the newest entry",
                        post.slug,
                        post.filename
                    );
                }
            }
        }

        Self { posts }
    }

    /// Find a post by slug, falling back to a normalized filename match
    pub fn find_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug).or_else(|| {
            self.posts
                .iter()
                .find(|p| normalize_filename(&p.filename) == slug)
        })
    }

    /// Position of a post borrowed from this index
    fn position(&self, post: &Post) -> Option<usize> {
        self.posts.iter().position(|p| std::ptr::eq(p, post))
    }

    /// The newer neighbour of a post
    pub fn prev(&self, post: &Post) -> Option<&Post> {
        let pos = self.position(post)?;
        pos.checked_sub(1).and_then(|i| self.posts.get(i))
    }

    /// The older neighbour of a post
    pub fn next(&self, post: &Post) -> Option<&Post> {
        let pos = self.position(post)?;
        self.posts.get(pos + 1)
    }

    /// Consume the index, keeping the newest-first order
    pub fn into_posts(self) -> Vec<Post> {
        self.posts
    }
}

impl Deref for PostIndex {
    type Target = [Post];

    fn deref(&self) -> &[Post] {
        &self.posts
    }
}

/// Lowercase, drop the extension and turn whitespace runs into hyphens
fn normalize_filename(filename: &str) -> String {
    let lowered = filename.to_lowercase();
    WHITESPACE
        .replace_all(strip_extension(&lowered), "-")
        .into_owned()
}
