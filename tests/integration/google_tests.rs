//! Group selection and URL matching cases from Google's robots.txt documentation

use crate::fixtures::{GROUP_ORDER, MATCHING, PRECEDENCE};
use ripple_robots::{parse, Document};
use std::ptr;

fn parse_clean(body: &str) -> Document {
    let (document, errors) = parse(body.as_bytes());
    assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);
    document
}

fn group_number(document: &Document, agent: &str) -> Option<usize> {
    let found = document.find_group(agent);
    document
        .groups()
        .iter()
        .position(|g| ptr::eq(g, found))
        .map(|i| i + 1)
}

/// Checks every (agent, path) pair, collecting all mismatches before failing
fn assert_decisions(document: &Document, cases: &[(&str, &str, bool)]) {
    let failures: Vec<String> = cases
        .iter()
        .filter(|(agent, path, expected)| document.test(path, agent) != *expected)
        .map(|(agent, path, expected)| {
            format!("agent {}, path {:?}: expected {}", agent, path, expected)
        })
        .collect();
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn test_group_order() {
    let document = parse_clean(GROUP_ORDER);

    let cases = [
        ("Googlebot-News (Googlebot)", 1),
        ("Googlebot", 3),
        ("Googlebot-Image (Googlebot)", 3),
        ("Otherbot (web)", 2),
        ("Otherbot (News)", 2),
    ];
    for (agent, expected) in cases {
        assert_eq!(group_number(&document, agent), Some(expected), "agent {}", agent);
    }
}

#[test]
fn test_wildcard_pattern_source() {
    let document = parse_clean("user-agent: *\nDisallow: /path*l$");
    let rule = &document.groups()[0].rules()[0];
    match rule.matcher() {
        ripple_robots::pattern::PathMatcher::Pattern(pattern) => {
            assert_eq!(pattern.as_str(), "/path.*l$");
        }
        other => panic!("expected a pattern, got {:?}", other),
    }
    assert!(!document.test("/pathXXXl", "bot"));
    assert!(document.test("/pathXXXlY", "bot"));
}

#[test]
fn test_url_matching() {
    let document = parse_clean(MATCHING);

    assert_decisions(
        &document,
        &[
            ("a", "/", false),
            ("a", "/test", false),
            ("a", "", false),
            ("a", "/path/to/whatever", false),
            ("b", "/", false),
            ("b", "/test", false),
            ("b", "", false),
            ("b", "/path/to/whatever", false),
            ("c", "/fish", false),
            ("c", "/fish.html", false),
            ("c", "/fish/salmon.html", false),
            ("c", "/fishheads", false),
            ("c", "/fishheads/yummy.html", false),
            ("c", "/fish.php?id=anything", false),
            ("c", "/Fish.asp", true),
            ("c", "/catfish", true),
            ("c", "/?id=fish", true),
            ("d", "/fish", false),
            ("d", "/fish.html", false),
            ("d", "/fish/salmon.html", false),
            ("d", "/fishheads", false),
            ("d", "/fishheads/yummy.html", false),
            ("d", "/fish.php?id=anything", false),
            ("d", "/Fish.asp", true),
            ("d", "/catfish", true),
            ("d", "/?id=fish", true),
            ("e", "/fish/", false),
            ("e", "/fish/?id=anything", false),
            ("e", "/fish/salmon.htm", false),
            ("e", "/fish", true),
            ("e", "/fish.html", true),
            ("e", "/Fish/Salmon.asp", true),
            ("f", "/fish/", false),
            ("f", "/fish/?id=anything", false),
            ("f", "/fish/salmon.htm", false),
            ("f", "/fish", true),
            ("f", "/fish.html", true),
            ("f", "/Fish/Salmon.asp", true),
            ("g", "/filename.php", false),
            ("g", "/folder/filename.php", false),
            ("g", "/folder/filename.php?parameters", false),
            ("g", "/folder/any.php.file.html", false),
            ("g", "/filename.php/", false),
            ("g", "/", true),
            ("g", "/windows.PHP", true),
            ("h", "/filename.php", false),
            ("h", "/folder/filename.php", false),
            ("h", "/filename.php?parameters", true),
            ("h", "/filename.php/", true),
            ("h", "/filename.php5", true),
            ("h", "/windows.PHP", true),
            ("i", "/fish.php", false),
            ("i", "/fishheads/catfish.php?parameters", false),
            ("i", "/Fish.PHP", true),
        ],
    );
}

#[test]
fn test_url_precedence() {
    let document = parse_clean(PRECEDENCE);

    assert_decisions(
        &document,
        &[
            ("a", "/page", true),
            ("a", "/test", false),
            ("b", "/folder/page", true),
            ("b", "/folder1", false),
            ("b", "/folder.htm", false),
            ("c", "/page.htm", false),
            ("c", "/page1.asp", true),
            ("d", "/", true),
            ("d", "/index", false),
            ("e", "/page.htm", false),
            ("e", "/", true),
        ],
    );
}
