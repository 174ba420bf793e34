use serde::Deserialize;

/// Main configuration structure for Ripple-Robots
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,
    #[serde(default)]
    pub parser: ParserConfig,
}

/// Tokenizer configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Suppress warnings about invalid UTF-8 sequences
    pub quiet: bool,

    /// Name of the input, shown in diagnostics
    #[serde(rename = "source-name")]
    pub source_name: String,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            quiet: true,
            source_name: "robots.txt".to_string(),
        }
    }
}

/// Directive parser configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Strip HTML markup before scanning
    #[serde(rename = "strip-html")]
    pub strip_html: bool,

    /// Fail instead of returning a partial document when directives are dropped
    pub strict: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strip_html: true,
            strict: false,
        }
    }
}
