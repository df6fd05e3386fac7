use super::ast::{
    BinaryOp, ClassDeclaration, Expression, MethodDeclaration, Program, Statement,
};
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// Recursive-descent parser for minijava token streams
///
/// Consumes the scanner's EOF-terminated token sequence strictly left
/// to right with one-token lookahead and no backtracking. Each grammar
/// rule is one parsing routine; production choice is decided entirely
/// by the current token.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    /// Creates a new parser over a scanned token sequence
    ///
    /// The sequence must be the scanner's output: non-empty and
    /// terminated by a single `Eof` token.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, current: 0 }
    }

    /// Parses the tokens into a program tree
    ///
    /// Repeats class-declaration parsing until the stream is at `Eof`.
    /// Any grammar violation aborts the whole parse with a
    /// `SyntaxError`; no partial tree is returned.
    pub fn parse(&mut self) -> Result<Program> {
        let mut classes = Vec::new();

        while !self.is_at_end() {
            classes.push(self.parse_class_declaration()?);
        }

        tracing::debug!("parsed {} class declarations", classes.len());

        Ok(Program { classes })
    }

    /// ClassDecl := 'class' IDENTIFIER '{' MethodDecl* '}'
    fn parse_class_declaration(&mut self) -> Result<ClassDeclaration> {
        self.consume(TokenKind::Class, "Expected 'class' keyword.")?;
        let name = self
            .consume(TokenKind::Identifier, "Expected class name.")?
            .lexeme;
        self.consume(TokenKind::LeftBrace, "Expected '{' before class body.")?;

        let mut methods = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            methods.push(self.parse_method_declaration()?);
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after class body.")?;

        Ok(ClassDeclaration { name, methods })
    }

    /// MethodDecl := 'public' 'static' 'void' IDENTIFIER '(' ')' '{' Statement* '}'
    ///
    /// The keyword prefix is rigid: any other visibility, a non-void
    /// return type, or a non-empty parameter list is rejected.
    fn parse_method_declaration(&mut self) -> Result<MethodDeclaration> {
        self.consume(TokenKind::Public, "Expected 'public' keyword.")?;
        self.consume(TokenKind::Static, "Expected 'static' keyword.")?;
        let return_type = self
            .consume(TokenKind::Void, "Expected 'void' return type.")?
            .lexeme;
        let name = self
            .consume(TokenKind::Identifier, "Expected method name.")?
            .lexeme;
        self.consume(TokenKind::LeftParen, "Expect '(' after method name.")?;
        self.consume(TokenKind::RightParen, "Expect ')' after parameters.")?;
        self.consume(TokenKind::LeftBrace, "Expect '{' before method body.")?;

        let mut body = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            body.push(self.parse_statement()?);
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after method body.")?;

        Ok(MethodDeclaration {
            name,
            return_type,
            body,
        })
    }

    /// Statement := Expression ';'
    fn parse_statement(&mut self) -> Result<Statement> {
        let expr = self.parse_expression()?;
        self.consume(TokenKind::Semicolon, "Expected ';' after expression.")?;

        Ok(Statement::Expression(expr))
    }

    /// Expression := Term
    fn parse_expression(&mut self) -> Result<Expression> {
        self.parse_term()
    }

    /// Term := Factor (('+'|'-') Factor)*
    ///
    /// Left-associative: each new operation wraps the accumulated left
    /// side, so `a - b - c` builds `(a - b) - c`.
    fn parse_term(&mut self) -> Result<Expression> {
        let mut expr = self.parse_factor()?;

        while self.matches(&[TokenKind::Plus, TokenKind::Minus]) {
            let op = if self.previous().kind == TokenKind::Plus {
                BinaryOp::Add
            } else {
                BinaryOp::Sub
            };
            let right = self.parse_factor()?;
            expr = Expression::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Factor := Primary (('*'|'/') Primary)*
    fn parse_factor(&mut self) -> Result<Expression> {
        let mut expr = self.parse_primary()?;

        while self.matches(&[TokenKind::Multiply, TokenKind::Division]) {
            let op = if self.previous().kind == TokenKind::Multiply {
                BinaryOp::Mul
            } else {
                BinaryOp::Div
            };
            let right = self.parse_primary()?;
            expr = Expression::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Primary := NUMBER | IDENTIFIER
    fn parse_primary(&mut self) -> Result<Expression> {
        if self.matches(&[TokenKind::Number]) {
            let token = self.previous();
            let value: i64 = token.lexeme.parse().map_err(|_| Error::SyntaxError {
                line: token.line,
                message: format!("Integer literal '{}' is out of range.", token.lexeme),
            })?;
            return Ok(Expression::IntegerLiteral(value));
        }

        if self.matches(&[TokenKind::Identifier]) {
            return Ok(Expression::Identifier(self.previous().lexeme.clone()));
        }

        Err(self.syntax_error("Expected expression."))
    }

    // Helper methods

    /// Advances past the current token if its kind is one of `kinds`
    ///
    /// Reports whether it advanced; on a miss no state changes.
    fn matches(&mut self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if self.check(*kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    /// Advances past the current token if it has the expected kind,
    /// otherwise fails with `message`
    fn consume(&mut self, kind: TokenKind, message: &str) -> Result<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.syntax_error(message))
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.peek().kind == kind
    }

    fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.tokens[self.current - 1].clone()
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    /// Helper to create a syntax error at the current token
    fn syntax_error(&self, message: impl Into<String>) -> Error {
        let token = self.peek();
        Error::SyntaxError {
            line: token.line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Scanner;

    fn parse_str(source: &str) -> Result<Program> {
        let mut scanner = Scanner::new(source);
        let tokens = scanner.scan_tokens()?;
        let mut parser = Parser::new(tokens);
        parser.parse()
    }

    #[test]
    fn test_empty_program() {
        let program = parse_str("").unwrap();
        assert!(program.classes.is_empty());
    }

    #[test]
    fn test_empty_class() {
        let program = parse_str("class Main { }").unwrap();
        assert_eq!(program.classes.len(), 1);
        assert_eq!(program.classes[0].name, "Main");
        assert!(program.classes[0].methods.is_empty());
    }

    #[test]
    fn test_method_with_statement() {
        let program = parse_str("class Main { public static void run() { 1 + 2; } }").unwrap();

        let method = &program.classes[0].methods[0];
        assert_eq!(method.name, "run");
        assert_eq!(method.return_type, "void");
        assert_eq!(method.body.len(), 1);
    }

    #[test]
    fn test_left_associativity() {
        let program = parse_str("class M { public static void f() { 1 - 2 - 3; } }").unwrap();

        let Statement::Expression(expr) = &program.classes[0].methods[0].body[0];
        assert_eq!(expr.to_string(), "((1 - 2) - 3)");
    }

    #[test]
    fn test_precedence() {
        let program = parse_str("class M { public static void f() { 1 + 2 * 3; } }").unwrap();

        let Statement::Expression(expr) = &program.classes[0].methods[0].body[0];
        assert_eq!(expr.to_string(), "(1 + (2 * 3))");
    }

    #[test]
    fn test_expected_expression_error() {
        let err = parse_str("class M { public static void f() { ; } }").unwrap_err();

        assert!(matches!(err, Error::SyntaxError { .. }));
        assert!(err.to_string().contains("Expected expression."));
    }

    #[test]
    fn test_out_of_range_literal() {
        let err =
            parse_str("class M { public static void f() { 99999999999999999999; } }").unwrap_err();

        assert!(matches!(err, Error::SyntaxError { .. }));
    }
}
