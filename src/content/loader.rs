//! Content loader - manifest to sorted post index

use futures::future::join_all;

use super::filename::parse_filename;
use super::source::ContentFetcher;
use super::{Post, PostIndex};

/// Runs the blog content pipeline against a [`ContentFetcher`]
pub struct ContentLoader {
    fetcher: ContentFetcher,
    excerpt_length: usize,
}

impl ContentLoader {
    /// Create a new content loader
    pub fn new(fetcher: ContentFetcher, excerpt_length: usize) -> Self {
        Self {
            fetcher,
            excerpt_length,
        }
    }

    /// Load every post listed in the manifest.
    ///
    /// Unrecognized filenames and posts that cannot be fetched or are empty
    /// are skipped; this never fails.
    pub async fn load_posts(&self) -> PostIndex {
        let filenames = self.fetcher.load_manifest().await;

        let parsed: Vec<_> = filenames
            .iter()
            .filter_map(|filename| {
                let parsed = parse_filename(filename);
                if parsed.is_none() {
                    tracing::warn!("Skipping unrecognized post filename {:?}", filename);
                }
                parsed
            })
            .collect();

        let contents = join_all(
            parsed
                .iter()
                .map(|p| self.fetcher.load_content(&p.filename)),
        )
        .await;

        let posts: Vec<Post> = parsed
            .into_iter()
            .zip(contents)
            .filter_map(|(parsed, content)| {
                let content = content?;
                if content.is_empty() {
                    tracing::warn!("Skipping empty post {:?}", parsed.filename);
                    return None;
                }
                tracing::debug!("Loaded post {:?}", parsed.filename);
                Some(Post::assemble(parsed, &content, self.excerpt_length))
            })
            .collect();

        tracing::debug!(
            "Indexed {} of {} manifest entries",
            posts.len(),
            filenames.len()
        );

        PostIndex::build(posts)
    }
}
