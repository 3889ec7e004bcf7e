//! Lexical analysis.
//!
//! Converts source text into tokens one at a time. The lexer never fails:
//! characters it does not recognise come out as `Illegal` tokens and are left
//! for the parser to report.

pub mod lexer;
pub mod tokens;
