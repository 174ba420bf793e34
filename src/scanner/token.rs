use std::fmt;

/// A lexical unit produced by the scanner
///
/// Keys and values are both `Text`; the parser tells them apart by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A field key or field value
    Text(String),

    /// One or more consecutive line-break characters, or a comment line
    LineBreak,
}

impl Token {
    /// Returns the token text, or `None` for a line break
    pub fn text(&self) -> Option<&str> {
        match self {
            Token::Text(text) => Some(text),
            Token::LineBreak => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(text) => f.write_str(text),
            Token::LineBreak => f.write_str("\\n"),
        }
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        Token::Text(text.to_string())
    }
}
