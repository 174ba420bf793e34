//! Path pattern compilation
//!
//! Robots.txt paths are literal prefixes unless they contain the Google
//! wildcard extensions:
//! - `*` matches any sequence of characters, including none
//! - a trailing `$` anchors the match to the end of the path
//!
//! Wildcard paths are compiled into a prefix-anchored [`Regex`]. Everything
//! else in the path is escaped and matched literally.

use regex::Regex;
use std::fmt;

/// How a rule decides whether it applies to a path
#[derive(Debug, Clone)]
pub enum PathMatcher {
    /// Plain path compared as a literal prefix
    Literal(String),

    /// Path containing wildcards
    Pattern(Pattern),
}

impl PathMatcher {
    /// Returns the path as it was declared (after normalization)
    pub fn path(&self) -> &str {
        match self {
            PathMatcher::Literal(prefix) => prefix,
            PathMatcher::Pattern(pattern) => pattern.path(),
        }
    }

    /// Returns true if this matcher uses a compiled pattern
    pub fn is_pattern(&self) -> bool {
        matches!(self, PathMatcher::Pattern(_))
    }
}

/// A compiled wildcard path
#[derive(Debug, Clone)]
pub struct Pattern {
    path: String,
    source: String,
    regex: Option<Regex>,
}

impl Pattern {
    /// The declared path, e.g. `/path*l$`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The pattern source without the implicit start anchor, e.g. `/path.*l$`
    ///
    /// Its length is the precedence of the pattern when several rules match.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns true if the pattern matches from the start of `path`
    ///
    /// A pattern that failed to compile never matches.
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.as_ref().is_some_and(|regex| regex.is_match(path))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Returns true if `path` needs a compiled pattern
pub fn has_wildcards(path: &str) -> bool {
    path.contains('*') || path.ends_with('$')
}

/// Compiles a path value into a matcher
///
/// # Arguments
///
/// * `path` - The normalized path value of an `Allow` or `Disallow` directive
///
/// # Returns
///
/// `PathMatcher::Literal` when the path has no wildcards, otherwise
/// `PathMatcher::Pattern`
///
/// # Example
///
/// ```
/// use ripple_robots::pattern::{compile, PathMatcher};
///
/// match compile("/path*l$") {
///     PathMatcher::Pattern(pattern) => {
///         assert_eq!(pattern.as_str(), "/path.*l$");
///         assert!(pattern.is_match("/pathXXXl"));
///         assert!(!pattern.is_match("/pathXXXlY"));
///     }
///     PathMatcher::Literal(_) => unreachable!(),
/// }
/// ```
pub fn compile(path: &str) -> PathMatcher {
    if !has_wildcards(path) {
        return PathMatcher::Literal(path.to_string());
    }

    let source = translate(path);
    let regex = match Regex::new(&format!("^{}", source)) {
        Ok(regex) => Some(regex),
        Err(e) => {
            tracing::warn!(
                path,
                error = %e,
                "failed to compile path pattern, rule will never match"
            );
            None
        }
    };

    PathMatcher::Pattern(Pattern {
        path: path.to_string(),
        source,
        regex,
    })
}

/// Translates a wildcard path into regex syntax
fn translate(path: &str) -> String {
    let (body, anchored) = match path.strip_suffix('$') {
        Some(body) => (body, true),
        None => (path, false),
    };

    let mut source = String::with_capacity(path.len() + 8);
    for (i, literal) in body.split('*').enumerate() {
        if i > 0 {
            source.push_str(".*");
        }
        source.push_str(&regex::escape(literal));
    }
    if anchored {
        source.push('$');
    }
    source
}
