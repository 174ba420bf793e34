//! Directive parser
//!
//! Consumes the scanner's token sequence and builds the ordered list of agent
//! groups, the sitemap list and the list of recoverable parse errors.
//!
//! # Grouping
//!
//! Consecutive `User-agent` lines share one group. The agent list of a group
//! closes as soon as an `Allow`, `Disallow` or `Crawl-delay` is seen; the next
//! `User-agent` then starts a new group. `Sitemap` and `Host` are
//! document-level and never affect grouping.
//!
//! # Example
//!
//! ```
//! use ripple_robots::parser::parse_all;
//! use ripple_robots::scanner::ByteScanner;
//!
//! let mut scanner = ByteScanner::new("robots.txt", true);
//! scanner.feed(b"User-agent: a\nUser-agent: b\nDisallow: /x\n");
//! let parsed = parse_all(&scanner.scan_all());
//!
//! assert_eq!(parsed.groups.len(), 1);
//! assert_eq!(parsed.groups[0].agents(), ["a", "b"]);
//! ```

mod directive;

pub use directive::Directive;

use crate::robots::{Group, Rule};
use crate::scanner::Token;
use crate::ParseError;
use std::time::Duration;

/// Everything extracted from one token sequence
#[derive(Debug, Clone, Default)]
pub struct ParsedDirectives {
    /// Agent groups in file order
    pub groups: Vec<Group>,

    /// Sitemap URLs in file order
    pub sitemaps: Vec<String>,

    /// First `Host` value, if any
    pub host: Option<String>,

    /// Recoverable errors; the offending directives were dropped
    pub errors: Vec<ParseError>,
}

/// One `key: value` pair read from the token stream
#[derive(Debug, Clone, Copy)]
struct Line<'t> {
    /// Index of the key token
    token: usize,
    key: &'t str,
    value: &'t str,
}

/// Group under construction
#[derive(Debug)]
struct OpenGroup {
    group: Group,
    accepting_agents: bool,
}

impl OpenGroup {
    fn start(agent: String) -> Self {
        let mut group = Group::default();
        group.add_agent(agent);
        Self {
            group,
            accepting_agents: true,
        }
    }
}

struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Reads the next key and its value, skipping line breaks
    ///
    /// A key followed by a line break or the end of input has an empty value.
    fn next_line(&mut self) -> Option<Line<'t>> {
        loop {
            match self.tokens.get(self.pos)? {
                Token::LineBreak => self.pos += 1,
                Token::Text(key) => {
                    let token = self.pos;
                    self.pos += 1;
                    let value = match self.tokens.get(self.pos).and_then(Token::text) {
                        Some(value) => {
                            self.pos += 1;
                            value
                        }
                        None => "",
                    };
                    return Some(Line { token, key, value });
                }
            }
        }
    }
}

/// Parses a complete token sequence
///
/// Never fails: problems are collected in [`ParsedDirectives::errors`] and the
/// rest of the input is still parsed.
///
/// # Arguments
///
/// * `tokens` - Output of [`ByteScanner::scan_all`](crate::scanner::ByteScanner::scan_all)
pub fn parse_all(tokens: &[Token]) -> ParsedDirectives {
    let mut parser = Parser::new(tokens);
    let mut parsed = ParsedDirectives::default();
    let mut current: Option<OpenGroup> = None;

    while let Some(line) = parser.next_line() {
        let directive = Directive::from_key(line.key);

        if directive.requires_group() {
            let Some(open) = current.as_mut() else {
                parsed.errors.push(ParseError::OutsideGroup {
                    directive,
                    token: line.token,
                });
                continue;
            };
            open.accepting_agents = false;

            match directive {
                Directive::Allow | Directive::Disallow => {
                    // An empty path is ignored, it is not an always-matching rule
                    if !line.value.is_empty() {
                        let path = normalize_path(line.value);
                        open.group
                            .rules
                            .push(Rule::new(&path, directive == Directive::Allow));
                    }
                }
                Directive::CrawlDelay => match parse_crawl_delay(line.value) {
                    Some(delay) => open.group.crawl_delay = Some(delay),
                    None => parsed.errors.push(ParseError::InvalidCrawlDelay {
                        value: line.value.to_string(),
                        token: line.token,
                    }),
                },
                _ => {}
            }
            continue;
        }

        match directive {
            Directive::UserAgent if !line.value.is_empty() => {
                let agent = line.value.to_lowercase();
                match current.as_mut().filter(|open| open.accepting_agents) {
                    Some(open) => open.group.add_agent(agent),
                    None => {
                        if let Some(done) = current.replace(OpenGroup::start(agent)) {
                            parsed.groups.push(done.group);
                        }
                    }
                }
            }
            Directive::Sitemap if !line.value.is_empty() => {
                parsed.sitemaps.push(line.value.to_string());
            }
            Directive::Host if !line.value.is_empty() => {
                if parsed.host.is_none() {
                    parsed.host = Some(line.value.to_string());
                }
            }
            _ => {}
        }
    }

    if let Some(done) = current {
        parsed.groups.push(done.group);
    }

    tracing::debug!(
        groups = parsed.groups.len(),
        sitemaps = parsed.sitemaps.len(),
        errors = parsed.errors.len(),
        "parsed robots.txt directives"
    );

    parsed
}

/// Normalizes an `Allow`/`Disallow` path value
///
/// Adds a missing leading `/` and drops trailing `*`, which match anyway.
fn normalize_path(value: &str) -> String {
    let trimmed = value.trim_end_matches('*');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') || trimmed.starts_with('*') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Parses a crawl delay in (possibly fractional) seconds
fn parse_crawl_delay(value: &str) -> Option<Duration> {
    let seconds: f64 = value.parse().ok()?;
    Duration::try_from_secs_f64(seconds).ok()
}
