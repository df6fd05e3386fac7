//! # minijava - A Miniature Java-like Language Front End
//!
//! A recursive descent **compiler front end** for a small, Java-like
//! toy language: a single-pass scanner, an LL(1) parser, and a typed
//! syntax tree. Nothing runs behind the tree: semantic analysis and
//! code generation are for a later stage to provide.
//!
//! ## Features
//!
//! - **Single-pass scanning** - One forward pass, one token per lexeme
//! - **Two-tier expression grammar** - Left-associative `+ -` over `* /`
//! - **Strictly owned syntax trees** - No shared or cyclic references
//! - **Fatal-only errors** - A scan or parse either completes or fails,
//!   never returns a partial result
//! - **Zero unsafe code** - Plain owned data structures throughout
//!
//! ## Quick Start
//!
//! ```rust
//! use minijava::{Parser, Scanner};
//!
//! # fn main() -> minijava::Result<()> {
//! let code = r#"
//!     class Calculator {
//!         public static void run() {
//!             1 + 2 * 3;
//!         }
//!     }
//! "#;
//!
//! // Tokenize (scan)
//! let mut scanner = Scanner::new(code);
//! let tokens = scanner.scan_tokens()?;
//!
//! // Parse into a syntax tree
//! let mut parser = Parser::new(tokens);
//! let program = parser.parse()?;
//!
//! assert_eq!(program.classes.len(), 1);
//! assert_eq!(program.classes[0].name, "Calculator");
//! # Ok(())
//! # }
//! ```
//!
//! ### Complete Example Function
//!
//! ```rust
//! use minijava::{Parser, Program, Result, Scanner};
//!
//! fn parse_source(code: &str) -> Result<Program> {
//!     let mut scanner = Scanner::new(code);
//!     let tokens = scanner.scan_tokens()?;
//!     let mut parser = Parser::new(tokens);
//!     parser.parse()
//! }
//!
//! # fn main() -> Result<()> {
//! let program = parse_source("class Main { public static void main() { a - b - c; } }")?;
//! let minijava::Statement::Expression(expr) = &program.classes[0].methods[0].body[0];
//!
//! // Binary chains are left-associative
//! assert_eq!(expr.to_string(), "((a - b) - c)");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The crate is one strictly linear pipeline:
//!
//! ```text
//! Source Code → Scanner → Tokens → Parser → Syntax Tree
//! ```
//!
//! ### Main Components
//!
//! - [`Scanner`] - Tokenizes source code into tokens
//! - [`Token`] / [`TokenKind`] - The immutable unit of lexical output
//! - [`Parser`] - Parses tokens into the syntax tree
//! - [`Program`] - Root of the parsed tree
//!
//! ## Grammar
//!
//! ```text
//! Program        := ClassDecl* EOF
//! ClassDecl      := 'class' IDENTIFIER '{' MethodDecl* '}'
//! MethodDecl     := 'public' 'static' 'void' IDENTIFIER '(' ')' '{' Statement* '}'
//! Statement      := Expression ';'
//! Expression     := Term
//! Term           := Factor (('+'|'-') Factor)*
//! Factor         := Primary (('*'|'/') Primary)*
//! Primary        := NUMBER | IDENTIFIER
//! ```
//!
//! ## Error Handling
//!
//! Both stages fail fast with a single fatal error:
//!
//! ```rust
//! use minijava::Scanner;
//!
//! let mut scanner = Scanner::new("int a = #5;");
//!
//! match scanner.scan_tokens() {
//!     Ok(_) => panic!("Should have failed"),
//!     Err(e) => {
//!         assert!(e.to_string().contains("Unexpected character '#'"));
//!     }
//! }
//! ```

/// Version of the minijava front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{Scanner, Token, TokenKind};
pub use parser::{
    BinaryOp, ClassDeclaration, Expression, MethodDeclaration, Parser, Precedence, Program,
    Statement,
};

// Convenient type alias for the pipeline's first stage
/// Type alias for the scanner (lexer).
/// Converts raw source text into tokens for the parser.
pub type Lexer = Scanner;
