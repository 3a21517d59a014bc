//! Site configuration.
//!
//! The site embeds a `site.toml` at compile time and parses it on startup.
//! Missing keys take their defaults. A document that does not parse is an
//! error; the caller decides whether to fall back to [`SiteConfig::default`].

use serde::Deserialize;

use crate::error::Result;
use crate::filter::Filter;
use crate::scroll::HEADER_OFFSET;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Pixels added to the scroll offset before locating the active section
    pub header_offset: f64,
    /// Filter selected when the page loads, given as its button label
    pub default_filter: Filter,
    /// Maximum log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset: HEADER_OFFSET,
            default_filter: Filter::All,
            log_level: "info".into(),
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}
