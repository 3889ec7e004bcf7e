use crate::{
    ast::{
        ast::{ExprWrapper, StmtWrapper},
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, ReturnStmt, VarStmt, WhileStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{lookups::stmt_lookup, parser::Parser};

pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    if let Some(handler) = stmt_lookup(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

/// Parses statements until `end` or the end of input is the current token.
///
/// Failed statements are recorded on the parser and skipped. One token is
/// consumed after every statement whether it parsed or not, which is what
/// moves the parser past the rest of a broken statement.
pub fn parse_stmts_until(parser: &mut Parser, end: TokenKind) -> Vec<StmtWrapper> {
    let mut statements = vec![];

    while !parser.current_token_is(end) && !parser.current_token_is(TokenKind::Eof) {
        match parse_stmt(parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => parser.record_error(error),
        }

        parser.advance();
    }

    statements
}

/// Parses an expression whose failure leaves its statement incomplete rather
/// than dropping it.
fn parse_optional_expr(parser: &mut Parser) -> Option<ExprWrapper> {
    match parse_expr(parser, BindingPower::Lowest) {
        Ok(expr) => Some(expr),
        Err(error) => {
            parser.record_error(error);
            None
        }
    }
}

fn skip_optional_semicolon(parser: &mut Parser) {
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.current_token().clone();
    let expression = parse_optional_expr(parser);

    skip_optional_semicolon(parser);

    Ok(StmtWrapper::new(ExpressionStmt { token, expression }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Ident)?;
    let name_token = parser.current_token().clone();
    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let value = parse_optional_expr(parser);
    skip_optional_semicolon(parser);

    Ok(StmtWrapper::new(VarStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_optional_expr(parser);
    skip_optional_semicolon(parser);

    Ok(StmtWrapper::new(ReturnStmt { token, value }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::LParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    parser.expect_peek(TokenKind::LBrace)?;
    let body = parse_block_stmt(parser)?;
    skip_optional_semicolon(parser);

    Ok(StmtWrapper::new(WhileStmt {
        token,
        condition,
        body,
    }))
}

/// Parses `{ ... }` with `{` as the current token, leaving `}` current.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.nested(parse_block_body)
}

fn parse_block_body(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let body = parse_stmts_until(parser, TokenKind::RBrace);

    if !parser.current_token_is(TokenKind::RBrace) {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::RBrace,
                received: parser.current_token_kind(),
            },
            parser.get_position(),
        ));
    }

    Ok(BlockStmt { token, body })
}
