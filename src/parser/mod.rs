//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! Statements are parsed by recursive descent; expressions by a Pratt parser
//! driven by NUD (null denotation, prefix) and LED (left denotation, infix)
//! handlers and a binding power per operator token.
//!
//! The parser pulls tokens from a [`crate::lexer::lexer::Lexer`] on demand and
//! keeps exactly two of them: the current token and one token of lookahead.
//! Syntax errors are recorded and parsing resumes at the next statement, so a
//! single pass reports every problem it can find.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
