//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::markdown::DEFAULT_EXCERPT_LENGTH;
use crate::content::source::{FALLBACK_POST, MANIFEST_FILE};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub public_dir: String,
    pub content_dir: String,

    // Content
    pub manifest: String,
    /// Base URL of a remote content directory; posts are read over HTTP when set
    pub remote: Option<String>,
    pub fallback_posts: Vec<String>,
    pub excerpt_length: usize,
    pub date_format: String,

    // Presentation
    pub theme: String,
    #[serde(default)]
    pub markdown: MarkdownConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Nereo".to_string(),
            author: "Nereo".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            public_dir: "public".to_string(),
            content_dir: "content/blog".to_string(),

            manifest: MANIFEST_FILE.to_string(),
            remote: None,
            fallback_posts: vec![FALLBACK_POST.to_string()],
            excerpt_length: DEFAULT_EXCERPT_LENGTH,
            date_format: "MMMM D, YYYY".to_string(),

            theme: "light".to_string(),
            markdown: MarkdownConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Which markdown engine renders post bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownEngine {
    #[default]
    Cmark,
    Basic,
}

/// Markdown rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub engine: MarkdownEngine,
    pub highlight_theme: String,
    pub line_number: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            engine: MarkdownEngine::Cmark,
            highlight_theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "content/blog");
        assert_eq!(config.manifest, "posts.json");
        assert_eq!(config.fallback_posts, vec![FALLBACK_POST]);
        assert_eq!(config.excerpt_length, 150);
        assert_eq!(config.markdown.engine, MarkdownEngine::Cmark);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Portfolio
remote: https://example.com/content/blog/
excerpt_length: 80
markdown:
  engine: basic
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Portfolio");
        assert_eq!(
            config.remote.as_deref(),
            Some("https://example.com/content/blog/")
        );
        assert_eq!(config.excerpt_length, 80);
        assert_eq!(config.markdown.engine, MarkdownEngine::Basic);
        assert_eq!(config.markdown.highlight_theme, "base16-ocean.dark");
        assert_eq!(config.theme, "light");
    }
}
