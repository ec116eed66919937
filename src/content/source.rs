//! Content sources - where the manifest and post files come from
//!
//! A [`ContentSource`] reports every failure as a [`SourceError`].
//! [`ContentFetcher`] sits on top of it and turns those failures into the
//! blog's degrade-gracefully policy: a broken manifest becomes the fallback
//! list, a missing post becomes `None`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default manifest filename inside the content directory
pub const MANIFEST_FILE: &str = "posts.json";

/// Manifest used when the real one cannot be loaded
pub const FALLBACK_POST: &str = "2025-11-10 — Fuck it. Here it is.md";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unexpected status {status} for {url}")]
    Status { status: StatusCode, url: String },
    #[error("invalid post filename: {0}")]
    InvalidName(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("invalid url: {0}")]
    Url(String),
}

/// Raw access to the manifest and post files
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Filenames listed in the manifest, in manifest order
    async fn manifest(&self) -> Result<Vec<String>, SourceError>;

    /// Raw markdown for one post
    async fn content(&self, filename: &str) -> Result<String, SourceError>;

    /// Human readable location, for logs
    fn location(&self) -> String;
}

/// Post filenames are single path components
fn check_filename(filename: &str) -> Result<(), SourceError> {
    if filename.is_empty()
        || filename.contains(|c: char| c == '/' || c == '\\')
        || filename == ".."
        || filename == "."
    {
        return Err(SourceError::InvalidName(filename.to_string()));
    }
    Ok(())
}

/// Content directory on the local filesystem
#[derive(Debug, Clone)]
pub struct FsSource {
    dir: PathBuf,
    manifest: String,
}

impl FsSource {
    pub fn new<P: AsRef<Path>>(dir: P, manifest: &str) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            manifest: manifest.to_string(),
        }
    }

    async fn read(&self, name: &str) -> Result<String, SourceError> {
        let path = self.dir.join(name);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(SourceError::NotFound(path.display().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl ContentSource for FsSource {
    async fn manifest(&self) -> Result<Vec<String>, SourceError> {
        let text = self.read(&self.manifest).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn content(&self, filename: &str) -> Result<String, SourceError> {
        check_filename(filename)?;
        self.read(filename).await
    }

    fn location(&self) -> String {
        self.dir.display().to_string()
    }
}

/// Content directory served over HTTP
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base: Url,
    manifest: String,
}

impl HttpSource {
    /// `base` is the URL of the content directory, e.g. `https://site/content/blog/`
    pub fn new(base: &str, manifest: &str) -> Result<Self, SourceError> {
        let mut base = Url::parse(base).map_err(|e| SourceError::Url(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(SourceError::Url(format!("{} cannot be a base URL", base)));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = Client::builder().user_agent(Self::user_agent()).build()?;

        Ok(Self {
            client,
            base,
            manifest: manifest.to_string(),
        })
    }

    pub fn user_agent() -> &'static str {
        concat!("nereo-blog/", env!("CARGO_PKG_VERSION"))
    }

    /// URL of a file inside the content directory
    pub fn url(&self, name: &str) -> Result<Url, SourceError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| SourceError::Url(self.base.to_string()))?
            .pop_if_empty()
            .push(name);
        Ok(url)
    }

    async fn get(&self, name: &str) -> Result<String, SourceError> {
        let url = self.url(name)?;
        tracing::debug!("GET {}", url);

        let resp = self.client.get(url.clone()).send().await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(SourceError::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(resp.text().await?)
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    async fn manifest(&self) -> Result<Vec<String>, SourceError> {
        let text = self.get(&self.manifest).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn content(&self, filename: &str) -> Result<String, SourceError> {
        check_filename(filename)?;
        self.get(filename).await
    }

    fn location(&self) -> String {
        self.base.to_string()
    }
}

/// Applies the fallback policy on top of a [`ContentSource`]
pub struct ContentFetcher {
    source: Box<dyn ContentSource>,
    fallback: Vec<String>,
}

impl ContentFetcher {
    pub fn new(source: Box<dyn ContentSource>, fallback: Vec<String>) -> Self {
        Self { source, fallback }
    }

    /// Manifest filenames, or the fallback list if the manifest is unavailable
    pub async fn load_manifest(&self) -> Vec<String> {
        match self.source.manifest().await {
            Ok(filenames) => {
                tracing::debug!(
                    "Loaded manifest with {} entries from {}",
                    filenames.len(),
                    self.source.location()
                );
                filenames
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load manifest from {}: {}; using fallback list",
                    self.source.location(),
                    e
                );
                self.fallback.clone()
            }
        }
    }

    /// Raw content of one post, or `None` if it cannot be retrieved
    pub async fn load_content(&self, filename: &str) -> Option<String> {
        match self.source.content(filename).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!("Failed to load post {:?}: {}", filename, e);
                None
            }
        }
    }
}
