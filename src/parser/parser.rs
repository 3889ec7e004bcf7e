//! Parser state and the program entry points.
//!
//! The parser owns its lexer and keeps two tokens: `current`, the token being
//! parsed, and `peek`, the one after it. Every rule starts with its first
//! token in `current` and finishes with its last token in `current`.

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{binding_power, BindingPower},
    stmt::parse_stmts_until,
};

/// Deepest nesting of expressions and blocks the parser descends into.
pub const MAX_NESTING_DEPTH: usize = 256;

pub struct Parser {
    lexer: Lexer,
    current: Token,
    peek: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Expressions and blocks currently being parsed
    depth: usize,
}

impl Parser {
    /// Creates a parser and primes `current` and `peek` from the lexer.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        debug!("Parser created for {}", lexer.file());

        Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            depth: 0,
        }
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts `peek` into `current` and pulls a new `peek` from the lexer.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances if the peek token is `expected`, otherwise fails without
    /// moving.
    pub fn expect_peek(&mut self, expected: TokenKind) -> Result<(), Error> {
        if self.peek_token_is(expected) {
            self.advance();
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected,
                    received: self.peek.kind,
                },
                self.peek.span.start.clone(),
            ))
        }
    }

    /// Runs `rule` one nesting level deeper, failing once
    /// [`MAX_NESTING_DEPTH`] is reached.
    pub fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;

        result
    }

    pub fn current_binding_power(&self) -> BindingPower {
        binding_power(self.current.kind)
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        binding_power(self.peek.kind)
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    pub fn record_error(&mut self, error: Error) {
        debug!("{}:{} {}", error.get_position().1, error.get_position().0, error);
        self.errors.push(error);
    }

    /// Parses statements until the end of input.
    ///
    /// Always returns a program. Statements that failed to parse are left out
    /// or carry an absent child, and the reasons are available from
    /// [`Parser::errors`]; a program is only trustworthy when that is empty.
    pub fn parse_program(&mut self) -> Program {
        let statements = parse_stmts_until(self, TokenKind::Eof);

        debug!(
            "Parsed {} statements with {} errors",
            statements.len(),
            self.errors.len()
        );

        Program { statements }
    }
}

/// Parses `source` into a program.
///
/// This is the main entry point. `file` names the input in diagnostics and
/// defaults to `shell`.
///
/// # Returns
///
/// The program if no diagnostics were recorded, otherwise every diagnostic in
/// source order.
pub fn parse(source: &str, file: Option<String>) -> Result<Program, Vec<Error>> {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        Ok(program)
    } else {
        Err(parser.into_errors())
    }
}
