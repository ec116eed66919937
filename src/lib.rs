//! nereo-blog: the blog content pipeline of a static portfolio site
//!
//! Posts are markdown files listed in a JSON manifest. The pipeline fetches
//! them from a local content directory or over HTTP, derives dates, titles
//! and slugs, renders markdown and serves or generates the blog pages.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentFetcher, ContentLoader, ContentSource, FsSource, HttpSource, PostRenderer};

/// The blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Local content directory (manifest and posts)
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Blog instance with an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        }
    }

    /// Content source selected by the configuration
    pub fn source(&self) -> Result<Box<dyn ContentSource>> {
        match &self.config.remote {
            Some(remote) => Ok(Box::new(HttpSource::new(remote, &self.config.manifest)?)),
            None => Ok(Box::new(FsSource::new(
                &self.content_dir,
                &self.config.manifest,
            ))),
        }
    }

    /// Content loader wired to the configured source
    pub fn loader(&self) -> Result<ContentLoader> {
        let fetcher = ContentFetcher::new(self.source()?, self.config.fallback_posts.clone());
        Ok(ContentLoader::new(fetcher, self.config.excerpt_length))
    }

    /// Post renderer selected by the configuration
    pub fn renderer(&self) -> PostRenderer {
        PostRenderer::from_config(&self.config.markdown, self.config.excerpt_length)
    }

    /// Generate the static blog pages
    pub async fn generate(&self) -> Result<()> {
        commands::generate::run(self).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str) -> Result<PathBuf> {
        commands::new::create_post(self, title)
    }
}
