//! Markdown rendering and excerpts
//!
//! The header line (line 0) of a post never reaches the HTML body or the
//! excerpt. Conversion itself goes through a [`MarkdownRenderer`], so the
//! full CommonMark engine and the rule-based fallback are interchangeable.

use lazy_static::lazy_static;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::config::{MarkdownConfig, MarkdownEngine};
use crate::helpers::escape_html;

/// Default excerpt length in characters
pub const DEFAULT_EXCERPT_LENGTH: usize = 150;

lazy_static! {
    static ref HEADING_LINE: Regex = Regex::new(r"(?m)^#+\s+.+\n").expect("valid regex");
    static ref BOLD: Regex = Regex::new(r"\*\*(.+?)\*\*").expect("valid regex");
    static ref ITALIC: Regex = Regex::new(r"\*(.+?)\*").expect("valid regex");
}

/// Converts a markdown body to HTML
pub trait MarkdownRenderer: Send + Sync {
    fn to_html(&self, markdown: &str) -> String;
}

/// CommonMark renderer with syntax highlighting
pub struct CmarkRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    line_numbers: bool,
}

impl CmarkRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_options("base16-ocean.dark", false)
    }

    /// Create with custom settings
    pub fn with_options(theme: &str, line_numbers: bool) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
            line_numbers,
        }
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .or_else(|| self.theme_set.themes.values().next());

        let highlighted =
            theme.and_then(|t| highlighted_html_for_string(code, &self.syntax_set, syntax, t).ok());

        match highlighted {
            Some(highlighted) if self.line_numbers => self.add_line_numbers(&highlighted, lang),
            Some(highlighted) => format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                lang, highlighted
            ),
            None => format!(
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                lang,
                escape_html(code)
            ),
        }
    }

    /// Add line numbers to highlighted code
    fn add_line_numbers(&self, code: &str, lang: &str) -> String {
        let lines: Vec<&str> = code.lines().collect();

        let gutter = (1..=lines.len())
            .map(|n| format!(r#"<span class="line-number">{}</span>"#, n))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code"><pre>{}</pre></td></tr></table></figure>"#,
            lang,
            gutter,
            lines.join("\n")
        )
    }
}

impl Default for CmarkRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for CmarkRenderer {
    fn to_html(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code_block: Option<(Option<String>, String)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                        _ => None,
                    };
                    code_block = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = code_block.take() {
                        let highlighted = self.highlight_code(&code, lang.as_deref());
                        events.push(Event::Html(CowStr::from(highlighted)));
                    }
                }
                Event::Text(text) => match code_block.as_mut() {
                    Some((_, code)) => code.push_str(&text),
                    None => events.push(Event::Text(text)),
                },
                _ => {
                    if code_block.is_none() {
                        events.push(event);
                    }
                }
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }
}

/// Rule-based fallback: headings 1-3, bold, italic and paragraphs.
///
/// Lists, code blocks, links and everything else come out as plain
/// paragraph text.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicRenderer;

impl MarkdownRenderer for BasicRenderer {
    fn to_html(&self, markdown: &str) -> String {
        let mut html_output = String::new();

        for block in markdown.split("\n\n") {
            let mut paragraph: Vec<String> = Vec::new();
            for line in block.lines() {
                if let Some((level, text)) = basic_heading(line) {
                    flush_paragraph(&mut html_output, &mut paragraph);
                    html_output.push_str(&format!(
                        "<h{level}>{}</h{level}>\n",
                        basic_inline(text),
                        level = level
                    ));
                } else if !line.trim().is_empty() {
                    paragraph.push(basic_inline(line));
                }
            }
            flush_paragraph(&mut html_output, &mut paragraph);
        }

        html_output
    }
}

fn basic_heading(line: &str) -> Option<(u8, &str)> {
    if let Some(text) = line.strip_prefix("### ") {
        Some((3, text))
    } else if let Some(text) = line.strip_prefix("## ") {
        Some((2, text))
    } else {
        line.strip_prefix("# ").map(|text| (1, text))
    }
}

fn basic_inline(text: &str) -> String {
    let escaped = escape_html(text);
    let bold = BOLD.replace_all(&escaped, "<strong>$1</strong>");
    ITALIC.replace_all(&bold, "<em>$1</em>").into_owned()
}

fn flush_paragraph(out: &mut String, paragraph: &mut Vec<String>) {
    if paragraph.is_empty() {
        return;
    }
    out.push_str("<p>");
    out.push_str(&paragraph.join("\n"));
    out.push_str("</p>\n");
    paragraph.clear();
}

/// Renders post bodies and listing excerpts
pub struct PostRenderer {
    markdown: Box<dyn MarkdownRenderer>,
    excerpt_length: usize,
}

impl PostRenderer {
    /// Create a renderer around any markdown engine
    pub fn new(markdown: Box<dyn MarkdownRenderer>, excerpt_length: usize) -> Self {
        Self {
            markdown,
            excerpt_length,
        }
    }

    /// Build the renderer selected by the site configuration
    pub fn from_config(config: &MarkdownConfig, excerpt_length: usize) -> Self {
        let markdown: Box<dyn MarkdownRenderer> = match config.engine {
            MarkdownEngine::Cmark => Box::new(CmarkRenderer::with_options(
                &config.highlight_theme,
                config.line_number,
            )),
            MarkdownEngine::Basic => Box::new(BasicRenderer),
        };
        Self::new(markdown, excerpt_length)
    }

    /// Render raw post content (header line included) to HTML
    pub fn render(&self, content: &str) -> String {
        let body = strip_header(content);
        let body = body.trim().replace('—', "-");
        self.markdown.to_html(&body)
    }

    /// Listing excerpt using the configured length
    pub fn excerpt(&self, content: &str) -> String {
        excerpt(content, self.excerpt_length)
    }
}

impl Default for PostRenderer {
    fn default() -> Self {
        Self::new(Box::new(CmarkRenderer::new()), DEFAULT_EXCERPT_LENGTH)
    }
}

/// Content with the header line removed
pub fn strip_header(content: &str) -> &str {
    content.split_once('\n').map(|(_, rest)| rest).unwrap_or("")
}

/// Plain-text preview of the first paragraph, cut at `max_length` characters
pub fn excerpt(content: &str, max_length: usize) -> String {
    let body = strip_header(content);
    let text = HEADING_LINE.replace_all(body, "");
    let text = text.replace(|c: char| c == '*' || c == '_', "");
    let text = text.trim();

    let first_paragraph = text.split("\n\n").next().unwrap_or(text);
    if first_paragraph.chars().count() <= max_length {
        return first_paragraph.to_string();
    }

    let cut: String = first_paragraph.chars().take(max_length).collect();
    format!("{}...", cut.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST: &str = "2025-11-10 — Hello\n# Intro\n\nThis is **bold** and *soft* text.\n\nSecond paragraph.";

    #[test]
    fn test_render_basic_markdown() {
        let renderer = CmarkRenderer::new();
        let html = renderer.to_html("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_render_code_block() {
        let renderer = CmarkRenderer::new();
        let html = renderer.to_html("```rust\nfn main() {}\n```");
        assert!(html.contains(r#"class="language-rust""#));
        assert!(!html.contains("```"));
    }

    #[test]
    fn test_render_code_block_with_line_numbers() {
        let renderer = CmarkRenderer::with_options("base16-ocean.dark", true);
        let html = renderer.to_html("```\nlet a = 1;\nlet b = 2;\n```");
        assert!(html.contains("figure class=\"highlight text\""));
        assert!(html.contains(r#"<span class="line-number">2</span>"#));
    }

    #[test]
    fn test_post_renderer_drops_header_and_em_dashes() {
        let renderer = PostRenderer::default();
        let html = renderer.render("2025-11-10 — Hello\nOne — two");
        assert!(!html.contains("Hello"));
        assert!(html.contains("<p>One - two</p>"));
    }

    #[test]
    fn test_post_renderer_header_only() {
        let renderer = PostRenderer::default();
        assert_eq!(renderer.render("2025-11-10 — Only a header"), "");
    }

    #[test]
    fn test_basic_renderer() {
        let html = BasicRenderer.to_html("# One\n## Two\n### Three\n\n**b** and *i*\nnext line");
        assert_eq!(
            html,
            "<h1>One</h1>\n<h2>Two</h2>\n<h3>Three</h3>\n<p><strong>b</strong> and <em>i</em>\nnext line</p>\n"
        );
    }

    #[test]
    fn test_basic_renderer_is_lossy_for_lists() {
        let html = BasicRenderer.to_html("- item <one>\n- item two");
        assert_eq!(html, "<p>- item &lt;one&gt;\n- item two</p>\n");
    }

    #[test]
    fn test_post_renderer_with_basic_engine() {
        let renderer = PostRenderer::new(Box::new(BasicRenderer), DEFAULT_EXCERPT_LENGTH);
        let html = renderer.render(POST);
        assert!(html.starts_with("<h1>Intro</h1>"));
        assert!(html.contains("<p>Second paragraph.</p>"));
    }

    #[test]
    fn test_excerpt_strips_headings_and_markers() {
        assert_eq!(excerpt(POST, 150), "This is bold and soft text.");
    }

    #[test]
    fn test_excerpt_short_paragraph_is_verbatim() {
        let content = "header\nA plain first paragraph.\n\nAnother.";
        assert_eq!(excerpt(content, 150), "A plain first paragraph.");
    }

    #[test]
    fn test_excerpt_truncates_with_ellipsis() {
        let long = "word ".repeat(60);
        let content = format!("header\n{}", long);
        let result = excerpt(&content, 150);
        assert!(result.ends_with("..."));
        assert!(result.chars().count() <= 153);
        assert_eq!(result, format!("{}...", long.chars().take(150).collect::<String>().trim()));
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let content = format!("header\n{}", "é".repeat(10));
        assert_eq!(excerpt(&content, 10), "é".repeat(10));
        assert_eq!(excerpt(&content, 4), "éééé...");
    }

    #[test]
    fn test_post_renderer_excerpt_length() {
        let renderer = PostRenderer::new(Box::new(BasicRenderer), 7);
        assert_eq!(renderer.excerpt(POST), "This is...");
    }

    #[test]
    fn test_excerpt_without_body() {
        assert_eq!(excerpt("2025-11-10 — Title", 150), "");
    }
}
