/// The environment module implements lexical scopes.
///
/// An environment maps names to values, remembers which names are immutable,
/// and delegates unknown names to its parent scope. The evaluator reads and
/// writes variables exclusively through it.
///
/// # Responsibilities
/// - Declares, resolves, reads and re-binds variables along a scope chain.
/// - Enforces one declaration per name and scope.
/// - Rejects writes to immutable bindings.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST directly, evaluating statements and
/// expressions against an environment and producing runtime values. There is
/// no intermediate compilation step.
///
/// # Responsibilities
/// - Evaluates every statement and expression kind.
/// - Applies operators to values of the supported kinds.
/// - Reports runtime errors such as division by zero or invalid operations.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, delimiters, and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and
///   source line.
/// - Skips whitespace and comments while tracking line numbers.
/// - Reports lexical errors for invalid or malformed input without stopping
///   at the first one.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. Expressions are parsed with a Pratt parser driven by lookup
/// tables keyed by token kind.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Rewrites compound assignments into plain ones.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares every value an expression can produce: nil, booleans,
/// numbers, strings and arrays. It also provides conversions, kind names for
/// diagnostics, and the textual rendering used by the shell.
pub mod value;
