//! Initialize a new blog

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::content::source::FALLBACK_POST;

const DEFAULT_CONFIG: &str = r#"# nereo-blog configuration

# Site
title: Nereo
author: Nereo
language: en

# URL
url: http://example.com
root: /

# Directory
public_dir: public
content_dir: content/blog

# Content
manifest: posts.json
# remote: https://example.com/content/blog/
fallback_posts:
  - "2025-11-10 — Fuck it. Here it is.md"
excerpt_length: 150
date_format: MMMM D, YYYY

# Presentation
theme: light
markdown:
  engine: cmark
  highlight_theme: base16-ocean.dark
  line_number: false
"#;

const FIRST_POST: &str = "2025-11-10 — Fuck it. Here it is

I kept putting off writing anything here, so this is it: the first post.

## What to expect

Notes on **things I build**, things that break, and *whatever else* seems worth writing down.
";

/// Initialize a new blog in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config = SiteConfig::default();
    let content_dir = target_dir.join(&config.content_dir);
    fs::create_dir_all(&content_dir)?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Already initialized: {:?}", config_path);
    }
    fs::write(&config_path, DEFAULT_CONFIG)?;

    let manifest_path = content_dir.join(&config.manifest);
    if !manifest_path.exists() {
        let manifest = serde_json::to_string_pretty(&[FALLBACK_POST])?;
        fs::write(&manifest_path, manifest)?;
        fs::write(content_dir.join(FALLBACK_POST), FIRST_POST)?;
    }

    tracing::debug!("Initialized blog layout under {:?}", target_dir);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Blog;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_parses() {
        let config: SiteConfig = serde_yaml::from_str(DEFAULT_CONFIG).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.content_dir, defaults.content_dir);
        assert_eq!(config.fallback_posts, defaults.fallback_posts);
        assert_eq!(config.date_format, defaults.date_format);
    }

    #[tokio::test]
    async fn test_init_site_is_loadable() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        let index = blog.loader().unwrap().load_posts().await;
        assert_eq!(index.len(), 1);
        assert_eq!(index[0].title, "Fuck it. Here it is");

        assert!(init_site(dir.path()).is_err());
    }
}
