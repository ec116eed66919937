//! Blog page templates
//!
//! Pages are assembled from small format strings; every value that comes
//! from post content or configuration is escaped except the rendered body.

use crate::config::SiteConfig;
use crate::content::{Post, PostIndex, PostRenderer};
use crate::helpers::{self, escape_html, Helpers};

/// How listing and navigation links address a post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// `blog-post.html?slug=...`, resolved by the server
    Query,
    /// `posts/<slug>.html`, written by the generator
    Static,
}

/// Renders the blog listing and post pages
pub struct PageRenderer<'a> {
    config: &'a SiteConfig,
    helpers: Helpers<'a>,
    links: LinkStyle,
}

impl<'a> PageRenderer<'a> {
    pub fn new(config: &'a SiteConfig, links: LinkStyle) -> Self {
        Self {
            config,
            helpers: Helpers::new(config),
            links,
        }
    }

    fn post_url(&self, post: &Post) -> String {
        match self.links {
            LinkStyle::Query => helpers::post_query_url(self.config, &post.slug),
            LinkStyle::Static => helpers::post_static_url(self.config, &post.slug),
        }
    }

    /// Wrap a body in the shared page layout
    fn layout(&self, title: &str, body: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="{lang}" data-theme="{theme}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{generator}
<title>{title}</title>
</head>
<body class="blog-page">
<nav class="navbar"><a href="{home}">{site}</a> <a href="{blog}">Blog</a></nav>
<main>
{body}
</main>
</body>
</html>
"#,
            lang = escape_html(&self.config.language),
            theme = escape_html(&self.config.theme),
            generator = helpers::meta_generator(),
            title = escape_html(title),
            home = self.helpers.url_for(""),
            blog = self.helpers.url_for("blog.html"),
            site = escape_html(&self.config.title),
            body = body,
        )
    }

    /// The post listing page
    pub fn blog_list(&self, index: &PostIndex) -> String {
        let body = if index.is_empty() {
            r#"<div class="blog-empty"><p>No blog posts yet. Check back soon!</p></div>"#
                .to_string()
        } else {
            let items: Vec<String> = index
                .iter()
                .map(|post| {
                    format!(
                        r#"<li class="blog-list-item">
  <a href="{href}" class="blog-post-link">
    <span class="blog-post-date">{date}</span>
    <h2 class="blog-post-title">{title}</h2>
    <p class="blog-post-excerpt">{excerpt}</p>
  </a>
</li>"#,
                        href = self.post_url(post),
                        date = self.helpers.time_tag(&post.date),
                        title = escape_html(&post.title),
                        excerpt = escape_html(&post.excerpt),
                    )
                })
                .collect();
            format!(r#"<ul id="blog-list">{}</ul>"#, items.join("\n"))
        };

        self.layout(&format!("Blog | {}", self.config.title), &body)
    }

    /// A single post page with links to its neighbours
    pub fn blog_post(&self, index: &PostIndex, post: &Post, renderer: &PostRenderer) -> String {
        let mut pager = Vec::new();
        if let Some(newer) = index.prev(post) {
            pager.push(helpers::link_to(
                &self.post_url(newer),
                &format!("← {}", newer.title),
                Some("blog-post-newer"),
            ));
        }
        if let Some(older) = index.next(post) {
            pager.push(helpers::link_to(
                &self.post_url(older),
                &format!("{} →", older.title),
                Some("blog-post-older"),
            ));
        }

        let body = format!(
            r#"<article>
<header id="blog-post-header">
  <div class="blog-post-meta"><span class="blog-post-date-large">{date}</span></div>
  <h1 class="blog-post-title">{title}</h1>
</header>
<div id="blog-post-content">
{content}
</div>
<nav class="blog-post-pager">{pager}</nav>
</article>"#,
            date = self.helpers.time_tag(&post.date),
            title = escape_html(&post.title),
            content = renderer.render(&post.content),
            pager = pager.join(" "),
        );

        self.layout(
            &format!("{} — Blog | {}", post.title, self.config.title),
            &body,
        )
    }

    /// Rendered when a slug resolves to nothing
    pub fn not_found(&self) -> String {
        let body = format!(
            r#"<div id="blog-post-content"><p>Post not found.</p><p>{}</p></div>"#,
            helpers::link_to(&self.helpers.url_for("blog.html"), "Back to the blog", None)
        );
        self.layout(&format!("Not found — Blog | {}", self.config.title), &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{parse_filename, BasicRenderer};

    fn index() -> PostIndex {
        let posts = vec![
            Post::assemble(
                parse_filename("2025-11-10 — Fuck it. Here it is.md").unwrap(),
                "2025-11-10 — Fuck it. Here it is\nSome <words> here.",
                150,
            ),
            Post::assemble(
                parse_filename("2024-01-02-older-post.md").unwrap(),
                "2024-01-02 — Older\n**Bold** start.",
                150,
            ),
        ];
        PostIndex::build(posts)
    }

    #[test]
    fn test_blog_list() {
        let config = SiteConfig::default();
        let html = PageRenderer::new(&config, LinkStyle::Query).blog_list(&index());
        assert!(html.contains(r#"data-theme="light""#));
        assert!(html.contains("November 10, 2025"));
        assert!(html.contains("Fuck it. Here it is"));
        assert!(html.contains("Some &lt;words&gt; here."));
        assert!(html.contains("/blog-post.html?slug=2024-01-02-older-post"));
        assert!(html.find("Fuck it").unwrap() < html.find("Older").unwrap());
    }

    #[test]
    fn test_blog_list_static_links() {
        let config = SiteConfig::default();
        let html = PageRenderer::new(&config, LinkStyle::Static).blog_list(&index());
        assert!(html.contains("/posts/2024-01-02-older-post.html"));
    }

    #[test]
    fn test_empty_blog_list() {
        let config = SiteConfig::default();
        let html = PageRenderer::new(&config, LinkStyle::Query).blog_list(&PostIndex::default());
        assert!(html.contains("No blog posts yet. Check back soon!"));
    }

    #[test]
    fn test_blog_post() {
        let config = SiteConfig::default();
        let index = index();
        let renderer = PostRenderer::new(Box::new(BasicRenderer), 150);
        let post = index.find_by_slug("2024-01-02-older-post").unwrap();
        let html = PageRenderer::new(&config, LinkStyle::Query).blog_post(&index, post, &renderer);
        assert!(html.contains("<title>Older — Blog | Nereo</title>"));
        assert!(html.contains("<p><strong>Bold</strong> start.</p>"));
        assert!(html.contains("blog-post-newer"));
        assert!(!html.contains("blog-post-older"));
    }

    #[test]
    fn test_not_found() {
        let config = SiteConfig::default();
        let html = PageRenderer::new(&config, LinkStyle::Query).not_found();
        assert!(html.contains("Post not found."));
    }
}
