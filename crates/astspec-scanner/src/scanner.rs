//! Tokenizer for the declaration-file subset.
//!
//! The scanner operates on byte offsets and hands out half-open token spans.
//! Trivia (whitespace and comments) is skipped inside `scan`, so the parser
//! only ever sees meaningful tokens.

use crate::syntax_kind::{SyntaxKind, keyword_kind};
use std::sync::Arc;

/// A lexical error recorded while scanning.
///
/// These are merged into the parser's diagnostics after the file is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerDiagnostic {
    pub pos: usize,
    pub length: usize,
    pub message: &'static str,
    pub code: u32,
}

/// Snapshot of scanner position for lookahead, see `save_state`.
#[derive(Debug, Clone)]
pub struct ScannerState {
    pos: usize,
    token_start: usize,
    token_value: String,
    diagnostic_count: usize,
}

pub struct Scanner {
    text: Arc<str>,
    pos: usize,
    token_start: usize,
    token_value: String,
    diagnostics: Vec<ScannerDiagnostic>,
}

impl Scanner {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self {
            text: text.into(),
            pos: 0,
            token_start: 0,
            token_value: String::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Byte offset where the current token starts.
    pub fn token_pos(&self) -> u32 {
        self.token_start as u32
    }

    /// Byte offset one past the end of the current token.
    pub fn token_end(&self) -> u32 {
        self.pos as u32
    }

    /// Cooked value of the current token: decoded string contents for string
    /// literals, raw text for identifiers, keywords, and numbers.
    pub fn token_value(&self) -> &str {
        &self.token_value
    }

    /// Raw source text of the current token.
    pub fn token_text(&self) -> &str {
        &self.text[self.token_start..self.pos]
    }

    pub fn source_text(&self) -> &str {
        &self.text
    }

    pub fn source_text_arc(&self) -> Arc<str> {
        Arc::clone(&self.text)
    }

    pub fn diagnostics(&self) -> &[ScannerDiagnostic] {
        &self.diagnostics
    }

    pub fn save_state(&self) -> ScannerState {
        ScannerState {
            pos: self.pos,
            token_start: self.token_start,
            token_value: self.token_value.clone(),
            diagnostic_count: self.diagnostics.len(),
        }
    }

    /// Rewind to a saved state, dropping any diagnostics recorded while
    /// speculating.
    pub fn restore_state(&mut self, state: ScannerState) {
        self.pos = state.pos;
        self.token_start = state.token_start;
        self.token_value = state.token_value;
        self.diagnostics.truncate(state.diagnostic_count);
    }

    fn byte(&self, at: usize) -> u8 {
        self.text.as_bytes().get(at).copied().unwrap_or(0)
    }

    fn error(&mut self, pos: usize, length: usize, message: &'static str, code: u32) {
        self.diagnostics.push(ScannerDiagnostic {
            pos,
            length,
            message,
            code,
        });
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.byte(self.pos) {
                b' ' | b'\t' | b'\r' | b'\n' => self.pos += 1,
                b'/' if self.byte(self.pos + 1) == b'/' => {
                    match memchr::memchr(b'\n', &self.text.as_bytes()[self.pos..]) {
                        Some(offset) => self.pos += offset + 1,
                        None => self.pos = self.text.len(),
                    }
                }
                b'/' if self.byte(self.pos + 1) == b'*' => {
                    match memchr::memmem::find(&self.text.as_bytes()[self.pos + 2..], b"*/") {
                        Some(offset) => self.pos += offset + 4,
                        None => {
                            self.error(
                                self.pos,
                                2,
                                "'*/' expected.",
                                astspec_common::diagnostics::diagnostic_codes::UNTERMINATED_COMMENT,
                            );
                            self.pos = self.text.len();
                        }
                    }
                }
                _ => return,
            }
        }
    }

    /// Advance to the next token and return its kind.
    pub fn scan(&mut self) -> SyntaxKind {
        self.skip_trivia();
        self.token_start = self.pos;
        self.token_value.clear();

        if self.pos >= self.text.len() {
            return SyntaxKind::EndOfFileToken;
        }

        let ch = self.byte(self.pos);
        match ch {
            b'{' => self.single(SyntaxKind::OpenBraceToken),
            b'}' => self.single(SyntaxKind::CloseBraceToken),
            b'(' => self.single(SyntaxKind::OpenParenToken),
            b')' => self.single(SyntaxKind::CloseParenToken),
            b'[' => self.single(SyntaxKind::OpenBracketToken),
            b']' => self.single(SyntaxKind::CloseBracketToken),
            b'<' => self.single(SyntaxKind::LessThanToken),
            b'>' => self.single(SyntaxKind::GreaterThanToken),
            b',' => self.single(SyntaxKind::CommaToken),
            b';' => self.single(SyntaxKind::SemicolonToken),
            b':' => self.single(SyntaxKind::ColonToken),
            b'.' => self.single(SyntaxKind::DotToken),
            b'?' => self.single(SyntaxKind::QuestionToken),
            b'|' => self.single(SyntaxKind::BarToken),
            b'&' => self.single(SyntaxKind::AmpersandToken),
            b'=' => self.single(SyntaxKind::EqualsToken),
            b'-' => self.single(SyntaxKind::MinusToken),
            b'*' => self.single(SyntaxKind::AsteriskToken),
            b'"' | b'\'' => self.scan_string(ch),
            b'0'..=b'9' => self.scan_number(),
            b'A'..=b'Z' | b'a'..=b'z' | b'_' | b'$' => self.scan_identifier(),
            _ => {
                // Advance by one whole character so token slices stay on
                // UTF-8 boundaries.
                let width = self.text[self.pos..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                self.error(
                    self.pos,
                    width,
                    "Invalid character.",
                    astspec_common::diagnostics::diagnostic_codes::INVALID_CHARACTER,
                );
                self.pos += width;
                SyntaxKind::Unknown
            }
        }
    }

    fn single(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.pos += 1;
        kind
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        while matches!(self.byte(self.pos), b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'$') {
            self.pos += 1;
        }
        self.token_value
            .push_str(&self.text[self.token_start..self.pos]);
        keyword_kind(&self.token_value).unwrap_or(SyntaxKind::Identifier)
    }

    fn scan_number(&mut self) -> SyntaxKind {
        while self.byte(self.pos).is_ascii_digit() {
            self.pos += 1;
        }
        if self.byte(self.pos) == b'.' && self.byte(self.pos + 1).is_ascii_digit() {
            self.pos += 1;
            while self.byte(self.pos).is_ascii_digit() {
                self.pos += 1;
            }
        }
        self.token_value
            .push_str(&self.text[self.token_start..self.pos]);
        SyntaxKind::NumericLiteral
    }

    fn scan_string(&mut self, quote: u8) -> SyntaxKind {
        self.pos += 1;
        loop {
            match self.byte(self.pos) {
                0 if self.pos >= self.text.len() => {
                    self.error(
                        self.token_start,
                        self.pos - self.token_start,
                        "Unterminated string literal.",
                        astspec_common::diagnostics::diagnostic_codes::UNTERMINATED_STRING_LITERAL,
                    );
                    return SyntaxKind::StringLiteral;
                }
                b'\n' => {
                    self.error(
                        self.token_start,
                        self.pos - self.token_start,
                        "Unterminated string literal.",
                        astspec_common::diagnostics::diagnostic_codes::UNTERMINATED_STRING_LITERAL,
                    );
                    return SyntaxKind::StringLiteral;
                }
                b'\\' => {
                    self.pos += 1;
                    self.scan_escape();
                }
                b if b == quote => {
                    self.pos += 1;
                    return SyntaxKind::StringLiteral;
                }
                _ => {
                    let width = self.text[self.pos..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
                    self.token_value
                        .push_str(&self.text[self.pos..self.pos + width]);
                    self.pos += width;
                }
            }
        }
    }

    fn scan_escape(&mut self) {
        let ch = self.byte(self.pos);
        match ch {
            b'n' => self.push_escape('\n'),
            b't' => self.push_escape('\t'),
            b'r' => self.push_escape('\r'),
            b'0' => self.push_escape('\0'),
            b'\\' | b'\'' | b'"' | b'`' => self.push_escape(ch as char),
            b'u' => {
                // \uXXXX only; the generated declaration files use nothing else.
                let hex = self.text.get(self.pos + 1..self.pos + 5);
                if let Some(hex) = hex
                    && let Ok(value) = u32::from_str_radix(hex, 16)
                    && let Some(decoded) = char::from_u32(value)
                {
                    self.token_value.push(decoded);
                    self.pos += 5;
                } else {
                    self.error(
                        self.pos - 1,
                        2,
                        "Invalid character.",
                        astspec_common::diagnostics::diagnostic_codes::INVALID_CHARACTER,
                    );
                    self.pos += 1;
                }
            }
            _ => {
                let width = self.text[self.pos..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                self.token_value
                    .push_str(&self.text[self.pos..self.pos + width]);
                self.pos += width;
            }
        }
    }

    fn push_escape(&mut self, decoded: char) {
        self.token_value.push(decoded);
        self.pos += 1;
    }
}
