//! Helper functions for page templates

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;

use crate::config::SiteConfig;
use crate::content::filename::parse_date;

/// Site-bound helpers for the page templates
pub struct Helpers<'a> {
    config: &'a SiteConfig,
}

impl<'a> Helpers<'a> {
    /// Create a new helpers instance
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    pub fn url_for(&self, path: &str) -> String {
        url_for(self.config, path)
    }

    /// `<time>` tag for a `YYYY-MM-DD` post date; dates that name no real
    /// day are shown as written
    pub fn time_tag(&self, date: &str) -> String {
        match parse_date(date) {
            Some(date) => time_tag(&date, &self.config.date_format),
            None => {
                let date = escape_html(date);
                format!(r#"<time datetime="{}">{}</time>"#, date, date)
            }
        }
    }
}
