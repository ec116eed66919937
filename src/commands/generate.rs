//! Generate static blog pages

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode, DebounceEventResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::templates::{LinkStyle, PageRenderer};
use crate::Blog;

/// Listing page written at the public root
pub const LISTING_PAGE: &str = "blog.html";

/// Directory for generated post pages
pub const POSTS_DIR: &str = "posts";

/// Write `blog.html` and one page per post
pub async fn run(blog: &Blog) -> Result<()> {
    let start = Instant::now();

    let index = blog.loader()?.load_posts().await;
    tracing::info!("Loaded {} posts", index.len());

    let renderer = blog.renderer();
    let pages = PageRenderer::new(&blog.config, LinkStyle::Static);

    let posts_dir = blog.public_dir.join(POSTS_DIR);
    fs::create_dir_all(&posts_dir)?;

    fs::write(blog.public_dir.join(LISTING_PAGE), pages.blog_list(&index))?;

    for post in index.iter() {
        let path = posts_dir.join(format!("{}.html", post.slug));
        fs::write(&path, pages.blog_post(&index, post, &renderer))?;
        tracing::debug!("Wrote {:?}", path);
    }

    tracing::info!("Generated in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

/// Watch the content directory and configuration, regenerating on change
pub async fn watch(blog: &Blog) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Events are delivered once a path has been quiet for 500ms
    let mut debouncer = new_debouncer(
        Duration::from_millis(500),
        move |res: DebounceEventResult| {
            let _ = tx.send(res);
        },
    )?;

    if blog.content_dir.exists() {
        debouncer
            .watcher()
            .watch(&blog.content_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", blog.content_dir);
    }

    let config_path = blog.base_dir.join("_config.yml");
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    while let Some(res) = rx.recv().await {
        let events = match res {
            Ok(events) => events,
            Err(e) => {
                tracing::error!("Watch error: {:?}", e);
                continue;
            }
        };

        let changed: Vec<PathBuf> = events
            .into_iter()
            .map(|e| e.path)
            .filter(|p| is_relevant(p))
            .collect();
        if changed.is_empty() {
            continue;
        }

        tracing::info!("Changed: {:?}, regenerating...", changed);
        let current = if touches_config(&changed) {
            Blog::new(&blog.base_dir)
        } else {
            Ok(blog.clone())
        };

        let result = match current {
            Ok(current) => run(&current).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            tracing::error!("Generation failed: {}", e);
        }
    }

    Ok(())
}

/// Skip editor backups and VCS noise
fn is_relevant(path: &Path) -> bool {
    let path = path.to_string_lossy();
    !path.contains(".git") && !path.contains(".DS_Store") && !path.ends_with('~')
}

/// Whether a batch of changes includes the site configuration
fn touches_config(paths: &[PathBuf]) -> bool {
    paths.iter().any(|p| p.ends_with("_config.yml"))
}
