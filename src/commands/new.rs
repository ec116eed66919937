//! Create a new post

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::PathBuf;

use crate::content::parse_filename;
use crate::Blog;

/// Create a post dated today and add it to the manifest
pub fn create_post(blog: &Blog, title: &str) -> Result<PathBuf> {
    create_post_on(blog, title, Local::now().date_naive())
}

/// Create a post for a given date and add it to the manifest
pub fn create_post_on(blog: &Blog, title: &str, date: NaiveDate) -> Result<PathBuf> {
    let title = title.trim();
    if title.is_empty() || title.contains(|c: char| c == '/' || c == '\\' || c == '\n') {
        anyhow::bail!("Invalid post title: {:?}", title);
    }

    let date = date.format("%Y-%m-%d").to_string();
    let filename = format!("{} — {}.md", date, title);
    if parse_filename(&filename).is_none() {
        anyhow::bail!("Title does not produce a valid post filename: {:?}", title);
    }

    fs::create_dir_all(&blog.content_dir)?;
    let file_path = blog.content_dir.join(&filename);
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let manifest_path = blog.content_dir.join(&blog.config.manifest);
    let mut manifest: Vec<String> = if manifest_path.exists() {
        let text = fs::read_to_string(&manifest_path)?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid manifest {:?}", manifest_path))?
    } else {
        Vec::new()
    };

    fs::write(&file_path, format!("{} — {}\n\n", date, title))?;

    if !manifest.contains(&filename) {
        manifest.push(filename);
        fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;
    }

    tracing::info!("Created: {:?}", file_path);
    Ok(file_path)
}
