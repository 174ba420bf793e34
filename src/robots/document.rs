//! Parsed robots.txt document

use super::group::Group;
use super::matcher;
use crate::parser::ParsedDirectives;
use std::borrow::Cow;
use std::time::Duration;
use url::Url;

/// Short-circuit verdicts that bypass the group rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shortcut {
    /// Queries are answered from the groups
    #[default]
    None,
    /// Every path is allowed (empty robots.txt, 4xx status)
    AllowAll,
    /// Every path is disallowed (5xx status)
    DisallowAll,
}

/// An immutable parsed robots.txt
///
/// Produced once by the parser and never modified afterwards, so it can be
/// shared between threads without locking.
#[derive(Debug, Clone, Default)]
pub struct Document {
    groups: Vec<Group>,
    sitemaps: Vec<String>,
    host: Option<String>,
    shortcut: Shortcut,
}

/// Document that allows every path for every agent
pub static ALLOW_ALL: Document = Document::with_shortcut(Shortcut::AllowAll);

/// Document that disallows every path for every agent
pub static DISALLOW_ALL: Document = Document::with_shortcut(Shortcut::DisallowAll);

impl Document {
    const fn with_shortcut(shortcut: Shortcut) -> Self {
        Self {
            groups: Vec::new(),
            sitemaps: Vec::new(),
            host: None,
            shortcut,
        }
    }

    pub(crate) fn from_directives(parsed: ParsedDirectives) -> Self {
        Self {
            groups: parsed.groups,
            sitemaps: parsed.sitemaps,
            host: parsed.host,
            shortcut: Shortcut::None,
        }
    }

    /// Builds a document from an HTTP status code and body with the default configuration
    ///
    /// See [`RobotsParser::from_status`](super::RobotsParser::from_status).
    pub fn from_status(status: u16, body: &[u8]) -> crate::Result<Cow<'static, Document>> {
        super::RobotsParser::default().from_status(status, body)
    }

    /// Returns true if every path is allowed without consulting the groups
    pub fn allow_all(&self) -> bool {
        self.shortcut == Shortcut::AllowAll
    }

    /// Returns true if every path is disallowed without consulting the groups
    pub fn disallow_all(&self) -> bool {
        self.shortcut == Shortcut::DisallowAll
    }

    /// Returns the document's short-circuit verdict
    pub fn shortcut(&self) -> Shortcut {
        self.shortcut
    }

    /// Agent groups in file order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Sitemap URLs in file order
    pub fn sitemaps(&self) -> &[String] {
        &self.sitemaps
    }

    /// Preferred host declared with `Host`, if any
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Checks if `path` may be crawled by `agent`
    ///
    /// # Arguments
    ///
    /// * `path` - The URL path (and query), e.g. "/page.html?id=1"
    /// * `agent` - The crawler's user-agent string; compared without case
    ///
    /// # Returns
    ///
    /// * `true` - If the path is allowed
    /// * `false` - If the path is disallowed
    pub fn test(&self, path: &str, agent: &str) -> bool {
        match self.shortcut {
            Shortcut::AllowAll => true,
            Shortcut::DisallowAll => false,
            Shortcut::None => self.find_group(agent).test(path),
        }
    }

    /// Checks `path` against a group resolved earlier with [`find_group`](Self::find_group)
    pub fn test_group(&self, path: &str, group: &Group) -> bool {
        match self.shortcut {
            Shortcut::AllowAll => true,
            Shortcut::DisallowAll => false,
            Shortcut::None => group.test(path),
        }
    }

    /// Checks an absolute URL, using its path and query
    pub fn test_url(&self, url: &Url, agent: &str) -> bool {
        let path = match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        };
        self.test(&path, agent)
    }

    /// Finds the group that applies to `agent`
    ///
    /// Resolve once and reuse the group when testing many paths for the same
    /// crawler.
    pub fn find_group(&self, agent: &str) -> &Group {
        matcher::find_group(&self.groups, agent)
    }

    /// Returns the crawl delay requested for `agent`, if any
    pub fn crawl_delay(&self, agent: &str) -> Option<Duration> {
        match self.shortcut {
            Shortcut::None => self.find_group(agent).crawl_delay(),
            _ => None,
        }
    }
}
