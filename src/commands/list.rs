//! List blog posts

use anyhow::Result;

use crate::content::PostIndex;
use crate::Blog;

/// Print every indexed post, newest first
pub async fn run(blog: &Blog) -> Result<()> {
    let index = blog.loader()?.load_posts().await;
    print!("{}", format_listing(&index));
    Ok(())
}

fn format_listing(index: &PostIndex) -> String {
    let mut out = format!("Posts ({}):\n", index.len());
    for post in index.iter() {
        out.push_str(&format!(
            "  {} - {} [{}]\n",
            post.date,
            post.title,
            post.filename
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{parse_filename, Post};

    #[test]
    fn test_format_listing() {
        let post = Post::assemble(
            parse_filename("2024-03-05-hello.md").unwrap(),
            "2024-03-05 — Hello there\nBody",
            150,
        );
        let listing = format_listing(&PostIndex::build(vec![post]));
        assert_eq!(
            listing,
            "Posts (1):\n  2024-03-05 - Hello there [2024-03-05-hello.md]\n"
        );
    }
}
