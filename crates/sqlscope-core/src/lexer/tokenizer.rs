//! SQL tokenizer implementation.

use super::{Keyword, Token, TokenKind};

/// Multi-character operators, longest first.
const OPERATORS: [&str; 9] = ["->>", "!=", "<>", "<=", ">=", "::", "||", "->", "=>"];

/// A lexer that tokenizes SQL input.
///
/// Lexing never fails: anything unrecognized becomes a one-character
/// [`TokenKind::Symbol`], and unterminated strings or comments run to the
/// end of the input.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Tokenizes the entire input.
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<Token> {
        Lexer::new(input).collect()
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// The text scanned since the start of the current token.
    fn lexeme(&self) -> &'a str {
        &self.input[self.start..self.pos]
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.lexeme())
    }

    /// Moves `pos` just past the next occurrence of `terminator`, or to the
    /// end of input when there is none.
    fn skip_past(&mut self, terminator: &str) {
        self.pos = match self.input[self.pos..].find(terminator) {
            Some(offset) => self.pos + offset + terminator.len(),
            None => self.input.len(),
        };
    }

    /// Scans a `--` comment up to (not including) the end of the line.
    fn scan_line_comment(&mut self) -> Token {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
        Token::new(TokenKind::Comment, self.lexeme().trim())
    }

    /// Scans a non-nesting `/* ... */` comment.
    fn scan_block_comment(&mut self) -> Token {
        self.pos += 2;
        self.skip_past("*/");
        self.make_token(TokenKind::Comment)
    }

    /// Scans a single-quoted string, treating `''` as an escaped quote.
    fn scan_string(&mut self) -> Token {
        self.advance(); // opening quote
        while let Some(c) = self.advance() {
            if c == '\'' {
                if self.peek() == Some('\'') {
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.make_token(TokenKind::String)
    }

    /// Scans a `$tag$ ... $tag$` string. Returns `None`, with the position
    /// untouched, when the opening marker has no matching close.
    fn scan_dollar_string(&mut self) -> Option<Token> {
        let tag_len = self.input[self.pos + 1..]
            .find(|c: char| !(c.is_alphabetic() || c == '_'))
            .unwrap_or(self.input.len() - self.pos - 1);
        let marker_end = self.pos + 1 + tag_len;
        if !self.input[marker_end..].starts_with('$') {
            return None;
        }
        let marker = &self.input[self.pos..=marker_end];
        let body_start = marker_end + 1;
        let close = self.input[body_start..].find(marker)?;
        self.pos = body_start + close + marker.len();
        Some(self.make_token(TokenKind::String))
    }

    /// Scans a permissive numeric literal: digits, `.`, `e`, `+` and `-`.
    fn scan_number(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | '+' | '-'))
        {
            self.advance();
        }
        self.make_token(TokenKind::Number)
    }

    /// Scans an identifier or keyword.
    fn scan_word(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        match Keyword::from_str(self.lexeme()) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier),
        }
    }

    /// Scans a `"quoted identifier"` verbatim, quotes included.
    fn scan_quoted_identifier(&mut self) -> Token {
        self.advance(); // opening quote
        self.skip_past("\"");
        self.make_token(TokenKind::Identifier)
    }

    /// Scans an operator (longest match first) or a single-character symbol.
    fn scan_operator(&mut self) -> Token {
        let rest = &self.input[self.pos..];
        if let Some(op) = OPERATORS.iter().find(|op| rest.starts_with(**op)) {
            self.pos += op.len();
            return self.make_token(TokenKind::Operator);
        }
        self.advance();
        self.make_token(TokenKind::Symbol)
    }

    /// Scans the next token, or returns `None` at the end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();
        self.start = self.pos;

        let c = self.peek()?;
        let next = self.peek_next();

        let token = match c {
            '-' if next == Some('-') => self.scan_line_comment(),
            '/' if next == Some('*') => self.scan_block_comment(),
            '\'' => self.scan_string(),
            '$' => match self.scan_dollar_string() {
                Some(token) => token,
                None => self.scan_operator(),
            },
            c if c.is_ascii_digit() => self.scan_number(),
            '.' if next.is_some_and(|n| n.is_ascii_digit()) => self.scan_number(),
            c if c.is_alphabetic() || c == '_' => self.scan_word(),
            '"' => self.scan_quoted_identifier(),
            _ => self.scan_operator(),
        };
        Some(token)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}
