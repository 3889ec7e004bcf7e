use crate::{
    ast::{
        ast::ExprWrapper,
        expressions::{
            BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr,
            IntegerLiteral, PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{led_lookup, nud_lookup, BindingPower},
    parser::Parser,
    stmt::parse_block_stmt,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    parser.nested(|parser| parse_expr_at(parser, bp))
}

fn parse_expr_at(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = nud_lookup(token_kind).ok_or_else(|| {
        Error::new(ErrorImpl::NoPrefixParseFn { kind: token_kind }, parser.get_position())
    })?;

    let mut left = nud(parser)?;

    // While the next operator binds tighter than `bp`, fold it into lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let Some(led) = led_lookup(parser.peek_token_kind()) else {
            return Ok(left);
        };

        parser.advance();
        left = led(parser, left)?;
    }

    Ok(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    Ok(ExprWrapper::new(identifier(parser)))
}

fn identifier(parser: &Parser) -> Identifier {
    let token = parser.current_token().clone();
    Identifier {
        value: token.literal.clone(),
        token,
    }
}

pub fn parse_integer_literal(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i32>() {
        Ok(value) => Ok(ExprWrapper::new(IntegerLiteral { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::IntegerParseError {
                literal: token.literal.clone(),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_boolean(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    Ok(ExprWrapper::new(BooleanLiteral {
        value: parser.current_token_is(TokenKind::True),
        token: parser.current_token().clone(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(ExprWrapper::new(PrefixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right,
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: ExprWrapper) -> Result<ExprWrapper, Error> {
    let operator_token = parser.current_token().clone();
    let bp = parser.current_binding_power();
    parser.advance();

    // Same binding power, not one less: an equal operator to the right is left
    // for the caller's loop, which makes these operators left associative
    let right = parse_expr(parser, bp)?;

    Ok(ExprWrapper::new(InfixExpr {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left,
        right,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::LParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    parser.expect_peek(TokenKind::LBrace)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::LBrace)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(ExprWrapper::new(IfExpr {
        token,
        condition,
        consequence,
        alternative,
    }))
}

pub fn parse_fn_literal(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::LParen)?;
    let parameters = parse_fn_parameters(parser)?;

    parser.expect_peek(TokenKind::LBrace)?;
    let body = parse_block_stmt(parser)?;

    Ok(ExprWrapper::new(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

/// Parses `a, b, c)` with `(` as the current token.
fn parse_fn_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, Error> {
    let mut parameters = vec![];

    if parser.peek_token_is(TokenKind::RParen) {
        parser.advance();
        return Ok(parameters);
    }

    parser.expect_peek(TokenKind::Ident)?;
    parameters.push(identifier(parser));

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.expect_peek(TokenKind::Ident)?;
        parameters.push(identifier(parser));
    }

    parser.expect_peek(TokenKind::RParen)?;

    Ok(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, callee: ExprWrapper) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();
    let arguments = parse_expr_list(parser, TokenKind::RParen)?;

    Ok(ExprWrapper::new(CallExpr {
        token,
        callee,
        arguments,
    }))
}

/// Parses a comma separated, possibly empty, expression list closed by `end`.
fn parse_expr_list(parser: &mut Parser, end: TokenKind) -> Result<Vec<ExprWrapper>, Error> {
    let mut list = vec![];

    if parser.peek_token_is(end) {
        parser.advance();
        return Ok(list);
    }

    parser.advance();
    list.push(parse_expr(parser, BindingPower::Lowest)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        list.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    parser.expect_peek(end)?;

    Ok(list)
}
