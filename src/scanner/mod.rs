//! Byte-oriented robots.txt scanner
//!
//! This module turns a raw byte buffer into a flat sequence of [`Token`]s:
//! field keys, field values and line-break markers. The scanner never fails.
//! Comments are dropped, whitespace is skipped and invalid UTF-8 is replaced
//! with U+FFFD after being counted.
//!
//! # Colon handling
//!
//! The first `:` on a line separates the key from its value and is consumed.
//! Every later `:` on the same line is an ordinary character, so values such as
//! `http://example.com/sitemap.xml` survive intact. The per-line state is kept
//! in [`LineState`].

mod position;
mod token;

pub use position::Position;
pub use token::Token;

use crate::config::ScannerConfig;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Per-line tokenizer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    /// No key/value separator has been consumed on this line yet
    AwaitingKey,

    /// The separator was consumed; further colons are literal
    KeyFound,
}

/// Scanner over a single robots.txt buffer
#[derive(Debug)]
pub struct ByteScanner<'a> {
    source: String,
    buf: &'a [u8],
    pos: Position,
    next_offset: usize,
    ch: Option<char>,
    quiet: bool,
    line: LineState,
    error_count: usize,
}

impl<'a> ByteScanner<'a> {
    /// Creates a scanner with no input
    ///
    /// # Arguments
    ///
    /// * `source` - Name of the input, used in diagnostics
    /// * `quiet` - Suppress warnings for invalid encoding
    pub fn new(source: impl Into<String>, quiet: bool) -> Self {
        Self {
            source: source.into(),
            buf: &[],
            pos: Position::start(),
            next_offset: 0,
            ch: None,
            quiet,
            line: LineState::AwaitingKey,
            error_count: 0,
        }
    }

    /// Creates a scanner from the scanner section of the configuration
    pub fn from_config(config: &ScannerConfig) -> Self {
        Self::new(config.source_name.clone(), config.quiet)
    }

    /// Loads a buffer into the scanner and reads the first character
    ///
    /// A leading UTF-8 byte order mark is skipped.
    pub fn feed(&mut self, input: &'a [u8]) {
        self.buf = input;
        self.pos = Position::start();
        self.next_offset = 0;
        self.ch = None;
        self.line = LineState::AwaitingKey;

        self.next_char();
        if self.ch == Some(BYTE_ORDER_MARK) {
            self.next_char();
            self.pos.column = 1;
        }
    }

    /// Returns the position of the next unread character
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Returns the number of invalid UTF-8 sequences seen so far
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Returns the current line state
    pub fn line_state(&self) -> LineState {
        self.line
    }

    /// Scans the next token
    ///
    /// # Returns
    ///
    /// * `Some(Token)` - The next token
    /// * `None` - The input is exhausted
    pub fn scan(&mut self) -> Option<Token> {
        loop {
            self.skip_space();
            let ch = self.ch?;

            if is_eol(ch) {
                self.line = LineState::AwaitingKey;
                self.skip_eol();
                return Some(Token::LineBreak);
            }

            if ch == '#' {
                self.line = LineState::AwaitingKey;
                self.skip_until_eol();
                // A comment running to the end of input emits nothing
                self.ch?;
                return Some(Token::LineBreak);
            }

            if ch == ':' && self.line == LineState::AwaitingKey {
                // Separator detached from its key, e.g. "Disallow : /path"
                self.line = LineState::KeyFound;
                self.next_char();
                continue;
            }

            return Some(self.scan_text());
        }
    }

    /// Scans every remaining token
    pub fn scan_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(64);
        while let Some(token) = self.scan() {
            tokens.push(token);
        }
        tokens
    }

    fn scan_text(&mut self) -> Token {
        let mut text = String::new();
        while let Some(ch) = self.ch {
            if is_space(ch) || is_eol(ch) {
                break;
            }
            if ch == ':' && self.line == LineState::AwaitingKey {
                self.line = LineState::KeyFound;
                self.next_char();
                break;
            }
            text.push(ch);
            self.next_char();
        }
        Token::Text(text)
    }

    fn skip_space(&mut self) {
        while matches!(self.ch, Some(ch) if is_space(ch)) {
            self.next_char();
        }
    }

    fn skip_eol(&mut self) {
        while matches!(self.ch, Some(ch) if is_eol(ch)) {
            self.next_char();
        }
    }

    fn skip_until_eol(&mut self) {
        while matches!(self.ch, Some(ch) if !is_eol(ch)) {
            self.next_char();
        }
        self.skip_eol();
    }

    /// Advances to the next character, decoding UTF-8
    fn next_char(&mut self) {
        match self.ch {
            Some('\n') => {
                self.pos.line += 1;
                self.pos.column = 1;
            }
            Some(_) => self.pos.column += 1,
            None => {}
        }

        self.pos.offset = self.next_offset;
        if self.next_offset >= self.buf.len() {
            self.ch = None;
            return;
        }

        let (decoded, width) = decode_char(&self.buf[self.next_offset..]);
        self.next_offset += width;
        self.ch = Some(match decoded {
            Some(ch) => ch,
            None => {
                self.invalid_encoding();
                char::REPLACEMENT_CHARACTER
            }
        });
    }

    fn invalid_encoding(&mut self) {
        self.error_count += 1;
        if !self.quiet {
            tracing::warn!(
                source = %self.source,
                position = %self.pos,
                "illegal UTF-8 encoding"
            );
        }
    }
}

fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\u{0B}')
}

fn is_eol(ch: char) -> bool {
    matches!(ch, '\n' | '\r')
}

/// Decodes one character from the front of `bytes`
///
/// Returns `None` with a width of 1 for an invalid or truncated sequence, so the
/// caller skips exactly one byte.
fn decode_char(bytes: &[u8]) -> (Option<char>, usize) {
    let lead = bytes[0];
    if lead < 0x80 {
        return (Some(char::from(lead)), 1);
    }

    let width = match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return (None, 1),
    };

    bytes
        .get(..width)
        .and_then(|seq| std::str::from_utf8(seq).ok())
        .and_then(|s| s.chars().next())
        .map_or((None, 1), |ch| (Some(ch), width))
}
