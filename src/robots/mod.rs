//! Robots.txt parsing facade
//!
//! This module ties the scanner and the directive parser together, maps HTTP
//! status codes to the allow-all / disallow-all shortcuts and exposes the
//! query operations on the resulting [`Document`].

mod document;
mod group;
mod markup;
mod matcher;

pub use document::{Document, Shortcut, ALLOW_ALL, DISALLOW_ALL};
pub use group::{Group, Rule};
pub use markup::strip_html;
pub use matcher::{find_group, ANY_AGENT};

use crate::config::Config;
use crate::parser::parse_all;
use crate::scanner::ByteScanner;
use crate::{ParseError, ParseErrors, RobotsError};
use std::borrow::Cow;

/// Parser entry point carrying its configuration
#[derive(Debug, Clone, Default)]
pub struct RobotsParser {
    config: Config,
}

impl RobotsParser {
    /// Creates a parser with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the parser configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses a robots.txt body
    ///
    /// Parsing is best-effort: the document contains everything that could be
    /// understood, and the errors list what was dropped.
    ///
    /// # Arguments
    ///
    /// * `body` - Raw robots.txt bytes, expected to be UTF-8
    ///
    /// # Returns
    ///
    /// The parsed document and the recoverable errors found on the way. Empty
    /// or whitespace-only input yields an allow-all document and no errors.
    pub fn parse(&self, body: &[u8]) -> (Document, Vec<ParseError>) {
        if body.iter().all(u8::is_ascii_whitespace) {
            return (ALLOW_ALL.clone(), Vec::new());
        }

        let body = if self.config.parser.strip_html {
            strip_html(body)
        } else {
            Cow::Borrowed(body)
        };

        let mut scanner = ByteScanner::from_config(&self.config.scanner);
        scanner.feed(&body);
        let tokens = scanner.scan_all();

        if scanner.error_count() > 0 {
            tracing::debug!(
                source = %self.config.scanner.source_name,
                count = scanner.error_count(),
                "replaced invalid UTF-8 sequences"
            );
        }

        if tokens.is_empty() {
            return (ALLOW_ALL.clone(), Vec::new());
        }

        let mut parsed = parse_all(&tokens);
        let errors = std::mem::take(&mut parsed.errors);
        (Document::from_directives(parsed), errors)
    }

    /// Parses a robots.txt body, failing if any directive had to be dropped
    pub fn parse_strict(&self, body: &[u8]) -> crate::Result<Document> {
        let (document, errors) = self.parse(body);
        if errors.is_empty() {
            Ok(document)
        } else {
            Err(RobotsError::Parse(ParseErrors(errors)))
        }
    }

    /// Builds a document from an HTTP status code and response body
    ///
    /// * 2xx - the body is parsed
    /// * 4xx - no robots.txt applies: everything is allowed
    /// * 5xx - temporary server error: everything is disallowed
    ///
    /// In strict mode parse errors fail the whole call; otherwise they are
    /// logged and the best-effort document is returned.
    ///
    /// # Returns
    ///
    /// * `Ok(Cow<Document>)` - The parsed document, or one of the shared shortcuts
    /// * `Err(RobotsError::UnexpectedStatus)` - Any other status code
    /// * `Err(RobotsError::Parse)` - Strict mode and the body had errors
    pub fn from_status(&self, status: u16, body: &[u8]) -> crate::Result<Cow<'static, Document>> {
        match status {
            200..=299 => {
                if self.config.parser.strict {
                    return self.parse_strict(body).map(Cow::Owned);
                }
                let (document, errors) = self.parse(body);
                for error in &errors {
                    tracing::warn!(
                        source = %self.config.scanner.source_name,
                        "{}", error
                    );
                }
                Ok(Cow::Owned(document))
            }
            400..=499 => {
                tracing::debug!(status, "client error status, allowing all paths");
                Ok(Cow::Borrowed(&ALLOW_ALL))
            }
            500..=599 => {
                tracing::debug!(status, "server error status, disallowing all paths");
                Ok(Cow::Borrowed(&DISALLOW_ALL))
            }
            _ => Err(RobotsError::UnexpectedStatus(status)),
        }
    }
}

/// Parses a robots.txt body with the default configuration
///
/// See [`RobotsParser::parse`].
pub fn parse(body: &[u8]) -> (Document, Vec<ParseError>) {
    RobotsParser::default().parse(body)
}

/// Parses a robots.txt body with the default configuration, failing on any error
pub fn parse_strict(body: &[u8]) -> crate::Result<Document> {
    RobotsParser::default().parse_strict(body)
}

/// Builds a document from a status code and body with the default configuration
///
/// See [`RobotsParser::from_status`].
pub fn from_status(status: u16, body: &[u8]) -> crate::Result<Cow<'static, Document>> {
    RobotsParser::default().from_status(status, body)
}
