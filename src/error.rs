//! Error types for the minijava front end

use thiserror::Error;

/// Front-end errors
///
/// Every variant is fatal: the in-progress scan or parse aborts
/// immediately with no partial result and no recovery attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Character that matches no lexical rule
    ///
    /// **Triggered by:** Any character outside the recognized
    /// single-character tokens, digit runs, and identifier runs
    /// **Example:** `int a = #5;` (the `#` has no token rule)
    #[error("Unexpected character '{character}' at line {line}")]
    LexicalError {
        /// The offending character
        character: char,
        /// Line number where the character appeared
        line: usize,
    },

    /// Grammar violation encountered during parsing
    ///
    /// **Triggered by:** An expected token kind being absent, or no
    /// valid expression start where one is required
    /// **Example:** `class Main {` (missing closing brace)
    #[error("Syntax error at line {line}: {message}")]
    SyntaxError {
        /// Line number of the token the parser was looking at
        line: usize,
        /// Expectation description
        message: String,
    },
}

/// Result type for minijava operations
pub type Result<T> = std::result::Result<T, Error>;
