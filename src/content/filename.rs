//! Post filename parsing
//!
//! Posts are named either `YYYY-MM-DD — Title.md` or
//! `YYYY-MM-DD-title-words.md`. The first form carries the title verbatim,
//! the second only a provisional guess that the header line usually replaces.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

/// Extension every post file carries
pub const POST_EXTENSION: &str = ".md";

lazy_static! {
    static ref DASHED_NAME: Regex =
        Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2})\s*—\s*(.+)\.md$").expect("valid regex");
    static ref HYPHENATED_NAME: Regex =
        Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2})-(.+)\.md$").expect("valid regex");
}

/// Metadata derived from a post filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFilename {
    /// Publication date as `YYYY-MM-DD`; orders lexicographically
    pub date: String,

    /// Title from the filename; provisional for hyphenated names
    pub title_guess: String,

    /// Lowercased filename without extension
    pub slug: String,

    /// The filename as listed in the manifest
    pub filename: String,
}

/// Parse a post filename, returning `None` for anything that is not a post
pub fn parse_filename(filename: &str) -> Option<ParsedFilename> {
    let (date, title_guess) = if let Some(caps) = DASHED_NAME.captures(filename) {
        (caps[1].to_string(), caps[2].to_string())
    } else if let Some(caps) = HYPHENATED_NAME.captures(filename) {
        (caps[1].to_string(), caps[2].replace('-', " "))
    } else {
        return None;
    };

    Some(ParsedFilename {
        date,
        title_guess,
        slug: slugify_filename(filename),
        filename: filename.to_string(),
    })
}

/// Calendar date of a `YYYY-MM-DD` string, `None` when no such day exists
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Strip the `.md` extension and lowercase
pub fn slugify_filename(filename: &str) -> String {
    strip_extension(filename).to_lowercase()
}

/// Filename without the `.md` extension
pub fn strip_extension(filename: &str) -> &str {
    filename.strip_suffix(POST_EXTENSION).unwrap_or(filename)
}
