use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{Expr, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, Parser},
            expression::{
                parse_array, parse_assignment, parse_binary, parse_group, parse_index,
                parse_postfix, parse_primary, parse_unary,
            },
            statement::{parse_block, parse_variable_declaration},
        },
    },
};

/// How strongly a token binds to the operand on its left.
///
/// Variants are listed from weakest to strongest; the derived ordering is the
/// precedence ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BindingPower {
    Default,
    Comma,
    Assignment,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Member,
}

/// Handler for a token that begins an expression.
pub type NudHandler = fn(&mut Parser<'_>) -> ParseResult<Expr>;

/// Handler for a token that continues an expression. It receives the left
/// operand parsed so far and the binding power of its own token.
pub type LedHandler = fn(&mut Parser<'_>, Expr, BindingPower) -> ParseResult<Expr>;

/// Handler for a token that begins a statement.
pub type StatementHandler = fn(&mut Parser<'_>) -> ParseResult<Statement>;

lazy_static! {
    static ref BINDING_POWERS: HashMap<TokenKind, BindingPower> = {
        use TokenKind::{
            Assignment, Comma, EqualTo, Greater, GreaterEqual, LeftBracket, Less, LessEqual, Minus,
            MinusEquals, MinusMinus, Modulo, ModuloEquals, NotEqual, Plus, PlusEquals, PlusPlus,
            Slash, SlashEquals, Star, StarEquals,
        };

        let mut m = HashMap::new();
        m.insert(Comma, BindingPower::Comma);
        for kind in [Assignment, PlusEquals, MinusEquals, StarEquals, SlashEquals, ModuloEquals] {
            m.insert(kind, BindingPower::Assignment);
        }
        for kind in [Less, LessEqual, Greater, GreaterEqual, EqualTo, NotEqual] {
            m.insert(kind, BindingPower::Relational);
        }
        m.insert(Plus, BindingPower::Additive);
        m.insert(Minus, BindingPower::Additive);
        m.insert(Star, BindingPower::Multiplicative);
        m.insert(Slash, BindingPower::Multiplicative);
        m.insert(Modulo, BindingPower::Multiplicative);
        m.insert(PlusPlus, BindingPower::Call);
        m.insert(MinusMinus, BindingPower::Call);
        m.insert(LeftBracket, BindingPower::Member);
        m
    };

    /// Prefix (null denotation) handlers.
    pub static ref NUD_LOOKUP: HashMap<TokenKind, NudHandler> = {
        let mut m: HashMap<TokenKind, NudHandler> = HashMap::new();
        m.insert(TokenKind::Number, parse_primary);
        m.insert(TokenKind::String, parse_primary);
        m.insert(TokenKind::Identifier, parse_primary);
        m.insert(TokenKind::LeftParen, parse_group);
        m.insert(TokenKind::Minus, parse_unary);
        m.insert(TokenKind::Not, parse_unary);
        m.insert(TokenKind::LeftBracket, parse_array);
        m
    };

    /// Infix and postfix (left denotation) handlers.
    pub static ref LED_LOOKUP: HashMap<TokenKind, LedHandler> = {
        use TokenKind::{
            Assignment, EqualTo, Greater, GreaterEqual, LeftBracket, Less, LessEqual, Minus,
            MinusEquals, MinusMinus, Modulo, ModuloEquals, NotEqual, Plus, PlusEquals, PlusPlus,
            Slash, SlashEquals, Star, StarEquals,
        };

        let mut m: HashMap<TokenKind, LedHandler> = HashMap::new();
        for kind in [Plus, Minus, Star, Slash, Modulo, Less, LessEqual, Greater, GreaterEqual, EqualTo, NotEqual] {
            m.insert(kind, parse_binary);
        }
        for kind in [Assignment, PlusEquals, MinusEquals, StarEquals, SlashEquals, ModuloEquals] {
            m.insert(kind, parse_assignment);
        }
        m.insert(PlusPlus, parse_postfix);
        m.insert(MinusMinus, parse_postfix);
        m.insert(LeftBracket, parse_index);
        m
    };

    /// Statement handlers. Any other token begins an expression statement.
    pub static ref STATEMENT_LOOKUP: HashMap<TokenKind, StatementHandler> = {
        let mut m: HashMap<TokenKind, StatementHandler> = HashMap::new();
        m.insert(TokenKind::Var, parse_variable_declaration);
        m.insert(TokenKind::LeftBrace, parse_block);
        m
    };
}

/// Returns the binding power of `kind`, or [`BindingPower::Default`] for
/// tokens that never continue an expression.
///
/// # Example
/// ```
/// use mutex_lang::interpreter::{
///     lexer::TokenKind,
///     parser::lookups::{BindingPower, binding_power},
/// };
///
/// assert!(binding_power(TokenKind::Star) > binding_power(TokenKind::Plus));
/// assert_eq!(binding_power(TokenKind::Semicolon), BindingPower::Default);
/// ```
#[must_use]
pub fn binding_power(kind: TokenKind) -> BindingPower {
    BINDING_POWERS.get(&kind).copied().unwrap_or(BindingPower::Default)
}
