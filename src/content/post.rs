//! Post model and assembly

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use super::filename::ParsedFilename;
use super::markdown;

lazy_static! {
    static ref HEADER_LINE: Regex =
        Regex::new(r"^\d{4}-\d{2}-\d{2}\s*—\s*(.+)$").expect("valid regex");
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Publication date as `YYYY-MM-DD`, kept verbatim from the filename
    pub date: String,

    /// Post title, from the header line when it has one
    pub title: String,

    /// Lowercased filename without extension
    pub slug: String,

    /// Source filename as listed in the manifest
    pub filename: String,

    /// Raw markdown content, header line included
    pub content: String,

    /// Plain-text preview of the first paragraph
    pub excerpt: String,
}

impl Post {
    /// Combine filename metadata with fetched content
    pub fn assemble(parsed: ParsedFilename, content: &str, excerpt_length: usize) -> Self {
        let content = content.replace("\r\n", "\n");
        let title = header_title(&content).unwrap_or(parsed.title_guess);
        let excerpt = markdown::excerpt(&content, excerpt_length);

        Self {
            date: parsed.date,
            title,
            slug: parsed.slug,
            filename: parsed.filename,
            content,
            excerpt,
        }
    }
}

/// Title carried by a `YYYY-MM-DD — Title` header line
pub fn header_title(content: &str) -> Option<String> {
    let first_line = content.lines().next()?;
    HEADER_LINE
        .captures(first_line)
        .map(|caps| caps[1].to_string())
}
