//! Configuration module for Ripple-Robots
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use ripple_robots::config::load_config;
//! use ripple_robots::RobotsParser;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("robots.toml")).unwrap();
//! let parser = RobotsParser::new(config);
//! let (robots, _errors) = parser.parse(b"User-agent: *\nDisallow: /tmp/");
//! assert!(!robots.test("/tmp/file", "ExampleBot"));
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, ParserConfig, ScannerConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
