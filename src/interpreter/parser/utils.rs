use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Literal, Token, TokenKind},
        parser::{
            core::{ParseResult, Parser, parse_expression},
            lookups::BindingPower,
        },
    },
};

/// Parses a comma-separated list of expressions until a closing token.
///
/// Used by array literals. Each item is parsed at [`BindingPower::Comma`], so
/// the comma itself is never absorbed into an item. An immediately
/// encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (expression ("," expression)*)? closing`
///
/// # Parameters
/// - `parser`: Parser positioned at the first item or the closing token.
/// - `closing`: The token that terminates the list.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an item is followed by something other than `,` or `closing`.
pub(in crate::interpreter::parser) fn parse_comma_separated(parser: &mut Parser<'_>,
                                                            closing: TokenKind)
                                                            -> ParseResult<Vec<Expr>> {
    let mut items = Vec::new();

    if parser.current_kind() == closing {
        parser.advance();
        return Ok(items);
    }

    loop {
        items.push(parse_expression(parser, BindingPower::Comma)?);

        if parser.expect_one_of(&[TokenKind::Comma, closing])?.kind == closing {
            break;
        }
    }

    Ok(items)
}

/// Extracts the numeric value of a number token.
///
/// # Errors
/// Returns `ParseError::InvalidLiteral` if the token carries no number.
pub(in crate::interpreter::parser) fn number_literal(token: &Token) -> ParseResult<f64> {
    match token.literal {
        Some(Literal::Number(value)) => Ok(value),
        _ => Err(ParseError::InvalidLiteral { lexeme: token.lexeme.clone(),
                                              line:   token.line, }),
    }
}

/// Extracts the contents of a string token.
///
/// # Errors
/// Returns `ParseError::InvalidLiteral` if the token carries no string.
pub(in crate::interpreter::parser) fn string_literal(token: &Token) -> ParseResult<String> {
    match &token.literal {
        Some(Literal::String(value)) => Ok(value.clone()),
        _ => Err(ParseError::InvalidLiteral { lexeme: token.lexeme.clone(),
                                              line:   token.line, }),
    }
}

/// Maps an operator token to the binary operator it denotes.
pub(in crate::interpreter::parser) const fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    let operator = match kind {
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Minus => BinaryOperator::Sub,
        TokenKind::Star => BinaryOperator::Mul,
        TokenKind::Slash => BinaryOperator::Div,
        TokenKind::Modulo => BinaryOperator::Mod,
        TokenKind::Less => BinaryOperator::Less,
        TokenKind::LessEqual => BinaryOperator::LessEqual,
        TokenKind::Greater => BinaryOperator::Greater,
        TokenKind::GreaterEqual => BinaryOperator::GreaterEqual,
        TokenKind::EqualTo => BinaryOperator::Equal,
        TokenKind::NotEqual => BinaryOperator::NotEqual,
        _ => return None,
    };
    Some(operator)
}

/// Maps a compound-assignment token to the arithmetic operator it applies.
pub(in crate::interpreter::parser) const fn compound_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::PlusEquals => Some(BinaryOperator::Add),
        TokenKind::MinusEquals => Some(BinaryOperator::Sub),
        TokenKind::StarEquals => Some(BinaryOperator::Mul),
        TokenKind::SlashEquals => Some(BinaryOperator::Div),
        TokenKind::ModuloEquals => Some(BinaryOperator::Mod),
        _ => None,
    }
}
