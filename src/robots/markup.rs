//! HTML markup removal
//!
//! Some servers wrap robots.txt in an HTML page. Tags are stripped before
//! scanning; this is a simple regex pass, not an HTML parser.

use once_cell::sync::Lazy;
use regex::bytes::Regex;
use std::borrow::Cow;

// Unicode is disabled so `.` also matches bytes that are not valid UTF-8.
static MARKUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u)<.*?>.*?</.*?>|<.*?>|<!.*?>").expect("markup pattern is valid")
});

/// Removes paired tags with their content, lone tags and `<!...>` declarations
///
/// Matching is line-bound: a tag never spans a line break.
pub fn strip_html(body: &[u8]) -> Cow<'_, [u8]> {
    MARKUP.replace_all(body, &b""[..])
}
