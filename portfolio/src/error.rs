//! Error types for the portfolio crate.

use thiserror::Error;

/// Errors surfaced while reading labels or configuration.
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// A filter label that is not one of the declared buttons.
    #[error("unknown filter label `{0}` (expected All, Web Apps, Design or Consulting)")]
    UnknownFilter(String),

    /// `site.toml` did not parse.
    #[error("invalid site config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, PortfolioError>;
