use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete minijava program
///
/// Sole root of a syntax tree: a parse order sequence of class
/// declarations. Every node below it is owned by exactly one parent;
/// trees are finite and acyclic by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Top-level class declarations in the program
    pub classes: Vec<ClassDeclaration>,
}

/// Class declaration: `class Name { methods... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    /// Class name
    pub name: String,
    /// Methods declared in the class body, in source order
    pub methods: Vec<MethodDeclaration>,
}

/// Method declaration: `public static void name() { statements... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    /// Method name
    pub name: String,
    /// Declared return type (only `void` is currently legal)
    pub return_type: String,
    /// Method body statements, in source order
    pub body: Vec<Statement>,
}

/// Statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// Expression statement: `expr ;`
    Expression(Expression),
}

/// Expressions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Binary operation with expressions on both sides of the operator
    Binary {
        /// Binary operator to apply
        op: BinaryOp,
        /// Left operand expression
        left: Box<Expression>,
        /// Right operand expression
        right: Box<Expression>,
    },

    /// Integer literal expression
    IntegerLiteral(i64),

    /// Variable name in an expression
    Identifier(String),

    /// Typed variable declaration with initializer: `int a = 5 + 3`
    ///
    /// No current grammar rule produces this variant; it is reachable
    /// only by direct construction and reserved for grammar growth.
    VariableDeclaration {
        /// Variable name
        name: String,
        /// Declared type name
        type_name: String,
        /// Initializer expression
        initializer: Box<Expression>,
    },
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition operator (+)
    Add,
    /// Subtraction operator (-)
    Sub,
    /// Multiplication operator (*)
    Mul,
    /// Division operator (/)
    Div,
}

/// Operator precedence levels, low to high
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// No precedence
    None,
    /// Addition and subtraction (+, -)
    Term,
    /// Multiplication and division (*, /)
    Factor,
    /// Primary expressions (literals, identifiers)
    Primary,
}

impl BinaryOp {
    /// Returns the precedence level of this binary operator
    pub fn precedence(&self) -> Precedence {
        match self {
            BinaryOp::Add | BinaryOp::Sub => Precedence::Term,
            BinaryOp::Mul | BinaryOp::Div => Precedence::Factor,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BinaryOp::Add => write!(f, "+"),
            BinaryOp::Sub => write!(f, "-"),
            BinaryOp::Mul => write!(f, "*"),
            BinaryOp::Div => write!(f, "/"),
        }
    }
}

impl fmt::Display for Expression {
    /// Renders expressions with explicit grouping, so `1 - 2 - 3`
    /// prints as `((1 - 2) - 3)` and the tree shape stays visible.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Binary { op, left, right } => {
                write!(f, "({} {} {})", left, op, right)
            }
            Expression::IntegerLiteral(value) => write!(f, "{}", value),
            Expression::Identifier(name) => write!(f, "{}", name),
            Expression::VariableDeclaration {
                name,
                type_name,
                initializer,
            } => write!(f, "{} {} = {}", type_name, name, initializer),
        }
    }
}
