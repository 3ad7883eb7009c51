/// Core parsing machinery.
///
/// Contains the token cursor, the Pratt expression loop and the top-level
/// entry points that turn a token slice into a program block.
pub mod core;

/// Dispatch tables.
///
/// Binding powers and the prefix, infix and statement handlers, keyed by
/// token kind and built once on first use.
pub mod lookups;

/// Expression handlers.
///
/// Literals, symbols, groups, unary and binary operators, assignment with its
/// compound forms, postfix operators, array literals and indexing.
pub mod expression;

/// Statement handlers.
///
/// Variable declarations, nested blocks and expression statements.
pub mod statement;

/// Helpers shared by the handlers.
///
/// Comma-separated lists and literal extraction.
pub mod utils;
