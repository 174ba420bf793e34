use std::fmt;

/// A robots.txt field recognized by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `User-agent` (also `useragent`): opens or extends a group
    UserAgent,
    /// `Allow`: path rule granting access
    Allow,
    /// `Disallow`: path rule denying access
    Disallow,
    /// `Sitemap`: document-level sitemap URL
    Sitemap,
    /// `Crawl-delay` (also `crawldelay`): seconds between requests
    CrawlDelay,
    /// `Host`: preferred mirror host, document-level
    Host,
    /// Anything else; ignored
    Unknown,
}

impl Directive {
    /// Classifies a field key, ignoring case
    ///
    /// Common typos such as `useragent` and `crawldelay` are accepted.
    pub fn from_key(key: &str) -> Self {
        match key.to_ascii_lowercase().as_str() {
            "user-agent" | "useragent" => Self::UserAgent,
            "allow" => Self::Allow,
            "disallow" => Self::Disallow,
            "sitemap" => Self::Sitemap,
            "crawl-delay" | "crawldelay" => Self::CrawlDelay,
            "host" => Self::Host,
            _ => Self::Unknown,
        }
    }

    /// Returns true for directives that only make sense inside a group
    pub fn requires_group(&self) -> bool {
        matches!(self, Self::Allow | Self::Disallow | Self::CrawlDelay)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UserAgent => "User-agent",
            Self::Allow => "Allow",
            Self::Disallow => "Disallow",
            Self::Sitemap => "Sitemap",
            Self::CrawlDelay => "Crawl-delay",
            Self::Host => "Host",
            Self::Unknown => "Unknown directive",
        };
        f.write_str(name)
    }
}
