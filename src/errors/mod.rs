//! Syntax diagnostics.
//!
//! The parser never stops on the first problem: every error is recorded as an
//! [`errors::Error`] carrying the offending position, and parsing continues
//! with the next statement.

pub mod errors;

#[cfg(test)]
mod tests;
