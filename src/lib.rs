//! Ripple-Robots: a tolerant robots.txt parser and matcher
//!
//! This crate parses the robots.txt exclusion-protocol format and answers, for a
//! crawler user-agent and URL path, whether access is permitted. It supports the
//! Google extensions: `*` and `$` wildcards in paths, `Allow` overriding
//! `Disallow` by specificity, `Crawl-delay` and `Sitemap`.
//!
//! # Example
//!
//! ```
//! let (robots, errors) = ripple_robots::parse(b"User-agent: *\nDisallow: /private\n");
//! assert!(errors.is_empty());
//! assert!(robots.test("/public", "ExampleBot"));
//! assert!(!robots.test("/private/page", "ExampleBot"));
//! ```

pub mod config;
pub mod parser;
pub mod pattern;
pub mod robots;
pub mod scanner;

use std::fmt;
use thiserror::Error;

/// Main error type for Ripple-Robots operations
#[derive(Debug, Error)]
pub enum RobotsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unexpected status: {0}")]
    UnexpectedStatus(u16),

    #[error("{0}")]
    Parse(#[from] ParseErrors),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// A recoverable error found while parsing directives
///
/// The offending directive is dropped and parsing continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{directive} before User-agent at token #{token}")]
    OutsideGroup {
        directive: parser::Directive,
        token: usize,
    },

    #[error("Invalid crawl-delay {value:?} at token #{token}")]
    InvalidCrawlDelay { value: String, token: usize },
}

/// All parse errors collected from one document, surfaced as a single failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Parse error(s):")?;
        for error in &self.0 {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}

/// Result type alias for Ripple-Robots operations
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use robots::{from_status, parse, parse_strict, Document, Group, RobotsParser, Rule};
