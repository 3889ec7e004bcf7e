use crate::{
    ast::ast::{ExprWrapper, StmtWrapper},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<StmtWrapper, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<ExprWrapper, Error>;
pub type LEDHandler = fn(&mut Parser, ExprWrapper) -> Result<ExprWrapper, Error>;

/// Binding power of `kind` when it appears after a complete operand.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => BindingPower::Equals,
        TokenKind::LessThan | TokenKind::GreaterThan => BindingPower::LessGreater,
        TokenKind::Plus | TokenKind::Minus => BindingPower::Sum,
        TokenKind::Slash | TokenKind::Asterisk => BindingPower::Product,
        TokenKind::LParen => BindingPower::Call,
        _ => BindingPower::Lowest,
    }
}

/// Statements introduced by a keyword. Anything else is an expression statement.
pub fn stmt_lookup(kind: TokenKind) -> Option<StmtHandler> {
    let handler: StmtHandler = match kind {
        TokenKind::Var => parse_var_decl_stmt,
        TokenKind::Return => parse_return_stmt,
        TokenKind::While => parse_while_stmt,
        _ => return None,
    };

    Some(handler)
}

pub fn nud_lookup(kind: TokenKind) -> Option<NUDHandler> {
    let handler: NUDHandler = match kind {
        // Literals and symbols
        TokenKind::Ident => parse_identifier,
        TokenKind::Int => parse_integer_literal,
        TokenKind::True | TokenKind::False => parse_boolean,

        TokenKind::Bang | TokenKind::Minus => parse_prefix_expr,
        TokenKind::LParen => parse_grouping_expr,
        TokenKind::If => parse_if_expr,
        TokenKind::Function => parse_fn_literal,
        _ => return None,
    };

    Some(handler)
}

pub fn led_lookup(kind: TokenKind) -> Option<LEDHandler> {
    let handler: LEDHandler = match kind {
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Slash
        | TokenKind::Asterisk
        | TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::LessThan
        | TokenKind::GreaterThan => parse_infix_expr,

        TokenKind::LParen => parse_call_expr,
        _ => return None,
    };

    Some(handler)
}
