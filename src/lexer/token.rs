use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// Original text of the token
    pub lexeme: String,
    /// Line number where the token appears (1-indexed)
    pub line: usize,
}

impl Token {
    /// Creates a new token with the given properties
    ///
    /// No validation is performed here; well-formedness is the
    /// scanner's responsibility, not the type's.
    pub fn new(kind: TokenKind, lexeme: String, line: usize) -> Self {
        Token { kind, lexeme, line }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Token < {:?} , {}, line {} >",
            self.kind, self.lexeme, self.line
        )
    }
}

lazy_static! {
    /// Reserved words of the language
    ///
    /// `Integer` is aliased to the same kind as `int`; the table keeps
    /// the alias exactly as-is with no extra semantics attached.
    static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut m = HashMap::new();
        m.insert("class", TokenKind::Class);
        m.insert("int", TokenKind::Int);
        m.insert("public", TokenKind::Public);
        m.insert("char", TokenKind::Char);
        m.insert("Integer", TokenKind::Int);
        m.insert("static", TokenKind::Static);
        m.insert("void", TokenKind::Void);
        m.insert("if", TokenKind::If);
        m.insert("else", TokenKind::Else);
        m.insert("while", TokenKind::While);
        m.insert("for", TokenKind::For);
        m.insert("switch", TokenKind::Switch);
        m.insert("null", TokenKind::Null);
        m
    };
}

/// All token kinds the scanner can classify
///
/// The enumeration is closed. Several categories are reserved for
/// constructs the language does not lex yet (comments, comparison
/// operators, most control-flow keywords); the scanner never produces
/// them, but the parser's token vocabulary is fixed here in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Single-character tokens
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,
    /// Left brace {
    LeftBrace,
    /// Right brace }
    RightBrace,
    /// Semicolon delimiter
    Semicolon,
    /// Comma delimiter (reserved)
    Comma,
    /// Dot operator (reserved)
    Dot,
    /// Star (reserved; multiplication lexes as `Multiply`)
    Star,
    /// Slash (reserved; division lexes as `Division`)
    Slash,

    // Operators
    /// Plus operator (+)
    Plus,
    /// Minus operator (-)
    Minus,
    /// Multiplication operator (*)
    Multiply,
    /// Division operator (/)
    Division,
    /// Assignment operator (=)
    Assignment,

    // One or two character tokens (reserved)
    /// Logical NOT (!)
    Bang,
    /// Inequality (!=)
    BangEqual,
    /// Equality (==)
    EqualEqual,
    /// Greater than (>)
    Greater,
    /// Greater than or equal (>=)
    GreaterEqual,
    /// Less than (<)
    Less,
    /// Less than or equal (<=)
    LessEqual,

    // Literals
    /// Integer literal digit run
    Number,
    /// Name that is not a reserved word
    Identifier,
    /// String literal (reserved)
    String,

    // Keywords
    /// `class` keyword
    Class,
    /// `public` keyword
    Public,
    /// `static` keyword
    Static,
    /// `void` keyword
    Void,
    /// `int` keyword (also produced by the `Integer` alias)
    Int,
    /// `char` keyword
    Char,
    /// `if` keyword (reserved for control flow)
    If,
    /// `else` keyword (reserved for control flow)
    Else,
    /// `while` keyword (reserved for control flow)
    While,
    /// `for` keyword (reserved for control flow)
    For,
    /// `switch` keyword (reserved for control flow)
    Switch,
    /// `null` keyword
    Null,
    /// `true` keyword (reserved)
    True,
    /// `false` keyword (reserved)
    False,
    /// `and` keyword (reserved)
    And,
    /// `or` keyword (reserved)
    Or,
    /// `private` keyword (reserved)
    Private,
    /// `protected` keyword (reserved)
    Protected,
    /// `record` keyword (reserved)
    Record,
    /// `fun` keyword (reserved)
    Fun,
    /// `print` keyword (reserved)
    Print,
    /// `return` keyword (reserved)
    Return,
    /// `super` keyword (reserved)
    Super,
    /// `this` keyword (reserved)
    This,
    /// `var` keyword (reserved)
    Var,

    // Literal width categories (reserved)
    /// Boxed integer literal
    IntegerLiteral,
    /// Arbitrary-precision decimal literal
    BigDecimal,
    /// Long integer literal
    Long,

    // Trivia categories (reserved; the scanner discards trivia)
    /// Comment of unspecified shape
    Comment,
    /// Line comment
    CommentLine,
    /// Block comment
    CommentBlock,
    /// Whitespace run
    Whitespace,

    // Special
    /// End of input marker
    Eof,
}

impl TokenKind {
    /// Looks up a scanned identifier in the keyword table
    ///
    /// Returns the keyword's kind on a hit, `None` for a plain
    /// identifier.
    pub fn keyword(s: &str) -> Option<TokenKind> {
        KEYWORDS.get(s).copied()
    }

    /// Check if this kind is a reserved word
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Class
                | TokenKind::Public
                | TokenKind::Static
                | TokenKind::Void
                | TokenKind::Int
                | TokenKind::Char
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::For
                | TokenKind::Switch
                | TokenKind::Null
                | TokenKind::True
                | TokenKind::False
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::Private
                | TokenKind::Protected
                | TokenKind::Record
                | TokenKind::Fun
                | TokenKind::Print
                | TokenKind::Return
                | TokenKind::Super
                | TokenKind::This
                | TokenKind::Var
        )
    }
}
