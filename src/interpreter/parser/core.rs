use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            lookups::{self, BindingPower, LED_LOOKUP, NUD_LOOKUP},
            statement::parse_statement,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A cursor over a token slice.
///
/// The parser never reads past the slice: once the tokens are exhausted it
/// keeps reporting an end-of-input token, so handlers only ever have to
/// check for [`TokenKind::Eof`].
#[derive(Debug)]
pub struct Parser<'a> {
    tokens:   &'a [Token],
    position: usize,
    eof:      Token,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the first token.
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        let line = tokens.last().map_or(1, |token| token.line);

        Self { tokens,
               position: 0,
               eof: Token::eof(line) }
    }

    /// Returns the token under the cursor.
    #[must_use]
    pub fn current(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&self.eof)
    }

    /// Returns the kind of the token under the cursor.
    #[must_use]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Returns `true` once the cursor reached the end of input.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Consumes the token under the cursor and returns it.
    pub fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    /// Consumes the token under the cursor if it has the given kind.
    ///
    /// # Errors
    /// Returns `ParseError::ExpectedToken` otherwise.
    pub fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        self.expect_one_of(&[kind])
    }

    /// Consumes the token under the cursor if it has one of the given kinds.
    ///
    /// # Errors
    /// Returns `ParseError::ExpectedToken` listing every accepted kind,
    /// separated by `/`.
    pub fn expect_one_of(&mut self, kinds: &[TokenKind]) -> ParseResult<Token> {
        let current = self.current();

        if kinds.contains(&current.kind) {
            return Ok(self.advance());
        }

        let expected = kinds.iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join("/");

        Err(ParseError::ExpectedToken { expected,
                                        found: current.kind.to_string(),
                                        line: current.line })
    }

    /// Skips tokens up to and including the next `;`, or up to the end of
    /// input.
    fn synchronize(&mut self) {
        while !self.is_eof() {
            if self.advance().kind == TokenKind::Semicolon {
                return;
            }
        }
    }
}

/// Parses an expression using the Pratt algorithm.
///
/// The token under the cursor selects a prefix handler, which produces the
/// initial left operand. As long as the following token binds tighter than
/// `binding_power`, its infix handler extends the left operand.
///
/// # Parameters
/// - `parser`: Parser positioned at the first token of the expression.
/// - `binding_power`: Minimum strength a following operator needs to be
///   absorbed into this expression.
///
/// # Errors
/// - `ParseError::UnexpectedEndOfInput` if the expression is missing.
/// - `ParseError::NoPrefixRule` if the first token cannot begin an
///   expression.
/// - `ParseError::NoInfixRule` if a token binds but cannot continue one.
pub fn parse_expression(parser: &mut Parser<'_>, binding_power: BindingPower) -> ParseResult<Expr> {
    let token = parser.current();

    if token.kind == TokenKind::Eof {
        return Err(ParseError::UnexpectedEndOfInput { line: token.line });
    }

    let nud = *NUD_LOOKUP.get(&token.kind)
                         .ok_or_else(|| ParseError::NoPrefixRule { token: token.kind.to_string(),
                                                                   line:  token.line, })?;
    let mut left = nud(parser)?;

    while !parser.is_eof() && lookups::binding_power(parser.current_kind()) > binding_power {
        let Token { kind, line, .. } = *parser.current();
        let led = *LED_LOOKUP.get(&kind)
                             .ok_or_else(|| ParseError::NoInfixRule { token: kind.to_string(),
                                                                      line })?;
        left = led(parser, left, lookups::binding_power(kind))?;
    }

    Ok(left)
}

/// Parses a whole program.
///
/// Statements are parsed until the end-of-input token. The result is always a
/// [`Statement::Block`]; the first error aborts the parse.
///
/// # Errors
/// Returns the first `ParseError` encountered.
///
/// # Example
/// ```
/// use mutex_lang::{
///     ast::Statement,
///     interpreter::{lexer::scan, parser::core::parse},
/// };
///
/// let tokens = scan("var mut x = 1; x = x + 1;").tokens;
/// let Statement::Block { body, .. } = parse(&tokens).unwrap() else {
///     panic!("expected a block");
/// };
/// assert_eq!(body.len(), 2);
///
/// let tokens = scan("1 +;").tokens;
/// assert!(parse(&tokens).is_err());
/// ```
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse(tokens: &[Token]) -> ParseResult<Statement> {
    let mut parser = Parser::new(tokens);
    let line = parser.current().line;
    let mut body = Vec::new();

    while !parser.is_eof() {
        body.push(parse_statement(&mut parser)?);
    }

    tracing::debug!(statements = body.len(), "parsed program");

    Ok(Statement::Block { body, line })
}

/// Parses a whole program, collecting every statement error instead of
/// stopping at the first.
///
/// After a failed statement the parser skips past the next `;` and resumes.
/// The returned block holds every statement that parsed cleanly.
///
/// # Example
/// ```
/// use mutex_lang::interpreter::{lexer::scan, parser::core::parse_recovering};
///
/// let tokens = scan("var x = 1; 2 +; var mut y = 3;").tokens;
/// let (_, errors) = parse_recovering(&tokens);
///
/// assert_eq!(errors.len(), 2);
/// ```
#[must_use]
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse_recovering(tokens: &[Token]) -> (Statement, Vec<ParseError>) {
    let mut parser = Parser::new(tokens);
    let line = parser.current().line;
    let mut body = Vec::new();
    let mut errors = Vec::new();

    while !parser.is_eof() {
        match parse_statement(&mut parser) {
            Ok(statement) => body.push(statement),
            Err(error) => {
                tracing::trace!(%error, "recovering");
                errors.push(error);
                parser.synchronize();
            },
        }
    }

    tracing::debug!(statements = body.len(), errors = errors.len(), "parsed program");

    (Statement::Block { body, line }, errors)
}
