//! Integration tests for robots.txt parsing and matching
//!
//! These tests drive the public API end-to-end, from raw bytes (or a status
//! code and body) to allow/disallow decisions.

mod fixtures;
mod google_tests;
