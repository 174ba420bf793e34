//! Longest-match resolution of groups and rules
//!
//! Only one group applies to a crawler: the one whose agent name is the longest
//! prefix of the crawler's user-agent, compared without case. A `*` entry counts
//! as a match of length 1, so a one-character name never displaces it.
//!
//! Within the group, the most specific rule applies: the longest literal path
//! that prefixes the request path, or a matching wildcard pattern ranked by the
//! length of its compiled source. Precedence among wildcard rules is undefined
//! by the protocol; source length is used so the result is deterministic.

use super::group::{Group, Rule};
use crate::pattern::PathMatcher;

/// Agent name that matches every crawler
pub const ANY_AGENT: &str = "*";

static EMPTY_GROUP: Group = Group {
    agents: Vec::new(),
    rules: Vec::new(),
    crawl_delay: None,
};

/// Finds the group that applies to `agent`
///
/// Ties between equally long agent names go to the group declared first.
///
/// # Returns
///
/// The best matching group, or an empty group (no rules, no crawl delay) if
/// nothing matches
pub fn find_group<'d>(groups: &'d [Group], agent: &str) -> &'d Group {
    let agent = agent.to_lowercase();
    let mut best_len = 0;
    let mut best = None;

    for group in groups {
        for name in group.agents() {
            let len = if name == ANY_AGENT {
                1
            } else if agent.starts_with(name.as_str()) {
                name.len()
            } else {
                continue;
            };

            if len > best_len {
                best_len = len;
                best = Some(group);
            }
        }
    }

    match best {
        Some(group) => {
            tracing::trace!(
                agent = %agent,
                strength = best_len,
                agents = ?group.agents(),
                "resolved robots.txt group"
            );
            group
        }
        None => &EMPTY_GROUP,
    }
}

impl Group {
    /// Finds the most specific rule matching `path`
    ///
    /// # Returns
    ///
    /// * `Some(&Rule)` - The winning rule
    /// * `None` - No rule matches; the path is unrestricted
    pub fn find_rule(&self, path: &str) -> Option<&Rule> {
        let mut best_len = 0;
        let mut best = None;

        for rule in self.rules() {
            let len = match rule.matcher() {
                PathMatcher::Pattern(pattern) if pattern.is_match(path) => pattern.as_str().len(),
                PathMatcher::Pattern(_) => continue,
                // "/" is the weakest rule and matches any path, even an empty one
                PathMatcher::Literal(prefix) if prefix == "/" && best_len == 0 => 1,
                PathMatcher::Literal(prefix) if path.starts_with(prefix.as_str()) => prefix.len(),
                PathMatcher::Literal(_) => continue,
            };

            if len > best_len {
                best_len = len;
                best = Some(rule);
            }
        }

        best
    }
}
