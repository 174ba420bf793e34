//! Agent groups and their path rules

use crate::pattern::{self, PathMatcher};
use std::time::Duration;

/// A single `Allow` or `Disallow` directive
#[derive(Debug, Clone)]
pub struct Rule {
    allow: bool,
    matcher: PathMatcher,
}

impl Rule {
    /// Creates a rule, compiling the path if it contains wildcards
    ///
    /// # Arguments
    ///
    /// * `path` - The normalized path value
    /// * `allow` - `true` for `Allow`, `false` for `Disallow`
    pub fn new(path: &str, allow: bool) -> Self {
        Self {
            allow,
            matcher: pattern::compile(path),
        }
    }

    /// Returns true for an `Allow` rule
    pub fn allow(&self) -> bool {
        self.allow
    }

    /// Returns the declared path
    pub fn path(&self) -> &str {
        self.matcher.path()
    }

    /// Returns how this rule matches paths
    pub fn matcher(&self) -> &PathMatcher {
        &self.matcher
    }
}

/// The directives that apply to one or more user-agents
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub(crate) agents: Vec<String>,
    pub(crate) rules: Vec<Rule>,
    pub(crate) crawl_delay: Option<Duration>,
}

impl Group {
    /// Lowercase agent names in declaration order
    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    /// Rules in declaration order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Delay requested between successive requests, if any
    pub fn crawl_delay(&self) -> Option<Duration> {
        self.crawl_delay
    }

    /// Returns true if the group has no agents and no rules
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty() && self.rules.is_empty()
    }

    /// Checks whether `path` may be crawled under this group
    ///
    /// The most specific matching rule decides. With no matching rule the
    /// path is allowed.
    ///
    /// # Arguments
    ///
    /// * `path` - The URL path (and query) to check, e.g. "/page.html?id=1"
    pub fn test(&self, path: &str) -> bool {
        self.find_rule(path).map_or(true, Rule::allow)
    }

    pub(crate) fn add_agent(&mut self, agent: String) {
        if !self.agents.contains(&agent) {
            self.agents.push(agent);
        }
    }
}
