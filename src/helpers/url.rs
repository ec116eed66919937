//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped inside a query value or a single path segment
const COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/blog.html") // -> "/portfolio/blog.html"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Percent-encode a slug for use in a query value or path segment
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Link to the dynamic post page, addressed by `slug`
pub fn post_query_url(config: &SiteConfig, slug: &str) -> String {
    url_for(
        config,
        &format!("blog-post.html?slug={}", encode_component(slug)),
    )
}

/// Link to a generated post page
pub fn post_static_url(config: &SiteConfig, slug: &str) -> String {
    url_for(config, &format!("posts/{}.html", encode_component(slug)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = "/portfolio/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/blog.html"), "/portfolio/blog.html");
        assert_eq!(url_for(&config, ""), "/portfolio/");
    }

    #[test]
    fn test_post_urls() {
        let config = SiteConfig::default();
        assert_eq!(
            post_query_url(&config, "2025-11-10 — fuck it. here it is"),
            "/blog-post.html?slug=2025-11-10%20%E2%80%94%20fuck%20it.%20here%20it%20is"
        );
        assert_eq!(
            post_static_url(&config, "2024-03-05-a/b"),
            "/posts/2024-03-05-a%2Fb.html"
        );
    }
}
