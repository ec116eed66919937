//! Content module - manifest, post files and the blog content pipeline

pub mod filename;
mod index;
pub mod loader;
pub mod markdown;
mod post;
pub mod source;

pub use filename::{parse_filename, ParsedFilename};
pub use index::PostIndex;
pub use loader::ContentLoader;
pub use markdown::{BasicRenderer, CmarkRenderer, MarkdownRenderer, PostRenderer};
pub use post::Post;
pub use source::{ContentFetcher, ContentSource, FsSource, HttpSource, SourceError};
