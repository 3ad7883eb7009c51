use crate::{
    ast::{Expr, PostfixOperator, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, Parser, parse_expression},
            lookups::BindingPower,
            utils::{
                binary_operator, compound_operator, number_literal, parse_comma_separated,
                string_literal,
            },
        },
    },
};

/// Parses a literal or a variable reference.
///
/// Grammar: `primary := NUMBER | STRING | IDENTIFIER`
///
/// # Errors
/// - `ParseError::InvalidLiteral` if a literal token carries no value.
/// - `ParseError::NoPrefixRule` for any other token.
pub fn parse_primary(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let token = parser.advance();

    match token.kind {
        TokenKind::Number => Ok(Expr::Number { value: number_literal(&token)?,
                                               line:  token.line, }),
        TokenKind::String => Ok(Expr::String { value: string_literal(&token)?,
                                               line:  token.line, }),
        TokenKind::Identifier => Ok(Expr::Symbol { name: token.lexeme,
                                                   line: token.line, }),
        kind => Err(ParseError::NoPrefixRule { token: kind.to_string(),
                                               line:  token.line, }),
    }
}

/// Parses a parenthesized expression.
///
/// Grouping only affects how the tree is shaped; no node is created for the
/// parentheses themselves.
///
/// Grammar: `group := "(" expression ")"`
pub fn parse_group(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    parser.expect(TokenKind::LeftParen)?;
    let expression = parse_expression(parser, BindingPower::Default)?;
    parser.expect(TokenKind::RightParen)?;

    Ok(expression)
}

/// Parses a prefix `-` or `!` and its operand.
///
/// The operand is parsed at [`BindingPower::Unary`], so `-a * b` negates only
/// `a` while `-a[0]` negates the element.
pub fn parse_unary(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let token = parser.advance();

    let op = match token.kind {
        TokenKind::Minus => UnaryOperator::Negate,
        TokenKind::Not => UnaryOperator::Not,
        kind => {
            return Err(ParseError::NoPrefixRule { token: kind.to_string(),
                                                  line:  token.line, });
        },
    };

    let operand = parse_expression(parser, BindingPower::Unary)?;

    Ok(Expr::Unary { op,
                     operand: Box::new(operand),
                     line: token.line })
}

/// Parses an array literal.
///
/// Grammar: `array := "[" (expression ("," expression)*)? "]"`
pub fn parse_array(parser: &mut Parser<'_>) -> ParseResult<Expr> {
    let line = parser.expect(TokenKind::LeftBracket)?.line;
    let elements = parse_comma_separated(parser, TokenKind::RightBracket)?;

    Ok(Expr::Array { elements, line })
}

/// Parses the right operand of a binary operator.
///
/// The right side is parsed at the operator's own binding power, which makes
/// every binary operator left-associative: `1 - 2 - 3` is `(1 - 2) - 3`.
pub fn parse_binary(parser: &mut Parser<'_>, left: Expr, binding_power: BindingPower) -> ParseResult<Expr> {
    let token = parser.advance();
    let op = binary_operator(token.kind).ok_or_else(|| ParseError::NoInfixRule { token: token.kind.to_string(),
                                                                                   line:  token.line, })?;
    let right = parse_expression(parser, binding_power)?;

    Ok(Expr::Binary { left: Box::new(left),
                      op,
                      right: Box::new(right),
                      line: token.line })
}

/// Parses `=` and the compound assignment operators.
///
/// The right side is parsed just below the assignment level, so chains
/// associate to the right: `a = b = 3` assigns `3` to `b` and then to `a`.
///
/// Targets of the form `object[index]` produce an
/// [`Expr::ArrayIndexAssignment`]; every other target produces an
/// [`Expr::Assignment`] and is validated when evaluated. Compound forms are
/// rewritten in terms of plain assignment:
///
/// ```text
///     x += v          =>  x = x + v
///     a[i] += v       =>  a[i] = a[i] + v
/// ```
///
/// # Errors
/// Returns `ParseError::UnknownCompoundOperator` if the token has no
/// arithmetic counterpart.
pub fn parse_assignment(parser: &mut Parser<'_>, left: Expr, _binding_power: BindingPower) -> ParseResult<Expr> {
    let token = parser.advance();
    let value = parse_expression(parser, BindingPower::Comma)?;
    let line = token.line;

    let new_value = if token.kind.is_compound_assignment() {
        let op = compound_operator(token.kind).ok_or_else(|| ParseError::UnknownCompoundOperator { token: token.kind.to_string(),
                                                                                                     line })?;
        Expr::Binary { left: Box::new(left.clone()),
                       op,
                       right: Box::new(value),
                       line }
    } else {
        value
    };

    match left {
        Expr::ArrayIndex { object, index, .. } => Ok(Expr::ArrayIndexAssignment { object,
                                                                                  index,
                                                                                  new_value: Box::new(new_value),
                                                                                  line }),
        assignee => Ok(Expr::Assignment { assignee: Box::new(assignee),
                                          new_value: Box::new(new_value),
                                          line }),
    }
}

/// Parses a postfix `++` or `--`.
pub fn parse_postfix(parser: &mut Parser<'_>, left: Expr, _binding_power: BindingPower) -> ParseResult<Expr> {
    let token = parser.advance();

    let op = match token.kind {
        TokenKind::PlusPlus => PostfixOperator::Increment,
        TokenKind::MinusMinus => PostfixOperator::Decrement,
        kind => {
            return Err(ParseError::NoInfixRule { token: kind.to_string(),
                                                 line:  token.line, });
        },
    };

    Ok(Expr::Postfix { op,
                       operand: Box::new(left),
                       line: token.line })
}

/// Parses an index into an array.
///
/// Grammar: `index := expression "[" expression "]"`
pub fn parse_index(parser: &mut Parser<'_>, left: Expr, _binding_power: BindingPower) -> ParseResult<Expr> {
    let line = parser.expect(TokenKind::LeftBracket)?.line;
    let index = parse_expression(parser, BindingPower::Default)?;
    parser.expect(TokenKind::RightBracket)?;

    Ok(Expr::ArrayIndex { object: Box::new(left),
                          index: Box::new(index),
                          line })
}
