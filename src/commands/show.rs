//! Render a single post by slug

use anyhow::Result;

use crate::Blog;

/// Print the rendered HTML body of a post; unknown slugs are reported, not errors
pub async fn run(blog: &Blog, slug: &str) -> Result<()> {
    match render(blog, slug).await? {
        Some(html) => print!("{}", html),
        None => println!("Post not found: {}", slug),
    }
    Ok(())
}

/// Rendered body of the post addressed by `slug`
pub async fn render(blog: &Blog, slug: &str) -> Result<Option<String>> {
    let index = blog.loader()?.load_posts().await;
    let Some(post) = index.find_by_slug(slug) else {
        tracing::info!("No post matches slug {:?}", slug);
        return Ok(None);
    };
    Ok(Some(blog.renderer().render(&post.content)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_render_by_slug() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        fs::create_dir_all(&blog.content_dir).unwrap();
        fs::write(
            blog.content_dir.join("posts.json"),
            r#"["2024-03-05-hello.md"]"#,
        )
        .unwrap();
        fs::write(
            blog.content_dir.join("2024-03-05-hello.md"),
            "2024-03-05 — Hello\n# Heading\n\nText — with a dash.",
        )
        .unwrap();

        let html = render(&blog, "2024-03-05-hello").await.unwrap().unwrap();
        assert!(html.contains("<h1>Heading</h1>"));
        assert!(html.contains("Text - with a dash."));

        assert_eq!(render(&blog, "missing").await.unwrap(), None);
    }
}
