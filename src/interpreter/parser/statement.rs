use crate::{
    ast::Statement,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, Parser, parse_expression},
            lookups::{BindingPower, STATEMENT_LOOKUP},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable declaration (`var ...;`),
/// - a nested block (`{ ... }`),
/// - an expression followed by `;`.
///
/// The leading token selects a handler from the statement table; any token
/// without one begins an expression statement.
///
/// # Parameters
/// - `parser`: Parser positioned at the first token of the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement(parser: &mut Parser<'_>) -> ParseResult<Statement> {
    let kind = parser.current_kind();

    if let Some(handler) = STATEMENT_LOOKUP.get(&kind) {
        tracing::trace!(%kind, "statement handler");
        return handler(parser);
    }

    let line = parser.current().line;
    let expression = parse_expression(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Statement::Expression { expression, line })
}

/// Parses a variable declaration in the form:
///
/// ```text
///     var mut name = expression;
///     var imm name = expression;
///     var mut name;
/// ```
///
/// A declaration without an initializer binds `nil`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - neither `mut` nor `imm` follows `var`,
/// - the name is missing,
/// - the name is followed by something other than `=` or `;`,
/// - the initializer fails to parse or is not terminated by `;`.
pub fn parse_variable_declaration(parser: &mut Parser<'_>) -> ParseResult<Statement> {
    let line = parser.expect(TokenKind::Var)?.line;
    let is_mutable = parser.expect_one_of(&[TokenKind::Mutable, TokenKind::Immutable])?
                           .kind
                     == TokenKind::Mutable;
    let identifier = parser.expect(TokenKind::Identifier)?.lexeme;

    let value = match parser.expect_one_of(&[TokenKind::Assignment, TokenKind::Semicolon])?
                            .kind
    {
        TokenKind::Assignment => {
            let value = parse_expression(parser, BindingPower::Default)?;
            parser.expect(TokenKind::Semicolon)?;
            Some(value)
        },
        _ => None,
    };

    Ok(Statement::VariableDeclaration { identifier,
                                        is_mutable,
                                        value,
                                        line })
}

/// Parses a nested block:
///
/// ```text
///     { statement* }
/// ```
///
/// # Errors
/// Returns a `ParseError` if a statement fails to parse or the closing `}`
/// is missing.
pub fn parse_block(parser: &mut Parser<'_>) -> ParseResult<Statement> {
    let line = parser.expect(TokenKind::LeftBrace)?.line;
    let mut body = Vec::new();

    while !parser.is_eof() && parser.current_kind() != TokenKind::RightBrace {
        body.push(parse_statement(parser)?);
    }
    parser.expect(TokenKind::RightBrace)?;

    Ok(Statement::Block { body, line })
}
