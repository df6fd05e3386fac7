use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Scanner for minijava source text
///
/// Performs a single forward pass over the character sequence and
/// produces one token per recognized lexeme, terminated by exactly one
/// `Eof` token. Cursor and line state live on the instance; a scanner
/// is used for one scan and then discarded.
pub struct Scanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current lexeme
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
}

impl Scanner {
    /// Creates a new scanner from source code
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans all tokens from source code and returns them as a vector
    ///
    /// The returned sequence is never empty: it always ends with the
    /// `Eof` token carrying the final line number.
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, String::new(), self.line));

        tracing::debug!(
            "scanned {} tokens across {} lines",
            self.tokens.len(),
            self.line
        );

        Ok(self.tokens.clone())
    }

    fn scan_token(&mut self) -> Result<()> {
        let c = self.advance();

        match c {
            // Whitespace (discarded, no token emitted)
            ' ' | '\r' | '\t' => {}
            '\n' => {
                self.line += 1;
            }

            // Operators
            '+' => self.add_token(TokenKind::Plus),
            '-' => self.add_token(TokenKind::Minus),
            '=' => self.add_token(TokenKind::Assignment),
            '*' => self.add_token(TokenKind::Multiply),
            '/' => self.add_token(TokenKind::Division),

            // Delimiters
            ';' => self.add_token(TokenKind::Semicolon),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),

            // Numbers
            c if Self::is_digit(c) => self.scan_number(),

            // Identifiers and keywords
            c if Self::is_alpha(c) => self.scan_identifier_or_keyword(),

            _ => {
                return Err(Error::LexicalError {
                    character: c,
                    line: self.line,
                });
            }
        }

        Ok(())
    }

    /// Greedily consumes a run of ASCII digits
    ///
    /// The token text is the exact digit run; no sign, decimal point,
    /// or exponent support. The character after the run stays in the
    /// stream.
    fn scan_number(&mut self) {
        while Self::is_digit(self.peek()) {
            self.advance();
        }

        self.add_token(TokenKind::Number);
    }

    /// Greedily consumes an identifier run and classifies it
    ///
    /// A hit in the keyword table yields the keyword's kind, a miss
    /// yields `Identifier`.
    fn scan_identifier_or_keyword(&mut self) {
        while Self::is_alphanumeric(self.peek()) {
            self.advance();
        }

        let text: String = self.source[self.start..self.current].iter().collect();
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Identifier);

        self.add_token(kind);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.tokens.push(Token::new(kind, lexeme, self.line));
    }

    // ASCII character classes only; non-ASCII letters are rejected
    // by the catch-all arm in scan_token.

    fn is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }

    fn is_alpha(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_uppercase() || c == '_'
    }

    fn is_alphanumeric(c: char) -> bool {
        Self::is_alpha(c) || Self::is_digit(c)
    }
}
