//! HTML helper functions

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate an anchor tag; `text` is escaped, `href` is used as given
pub fn link_to(href: &str, text: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => format!(
            r#"<a href="{}" class="{}">{}</a>"#,
            href,
            class,
            escape_html(text)
        ),
        None => format!(r#"<a href="{}">{}</a>"#, href, escape_html(text)),
    }
}

/// Generate meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="nereo-blog {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}
