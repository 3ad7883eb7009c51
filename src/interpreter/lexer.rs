use logos::{Lexer, Logos};

use crate::error::ScanError;

/// The kind of a lexical token.
///
/// A token kind is the closed set of things the scanner can recognize. It is
/// `Copy` and hashable so that the parser can key its lookup tables on it.
/// The payload of literal tokens (the number or the string contents) lives in
/// [`Token::literal`], not here.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `[`
    #[token("[")]
    LeftBracket,
    /// `]`
    #[token("]")]
    RightBracket,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Modulo,
    /// `++`
    #[token("++")]
    PlusPlus,
    /// `--`
    #[token("--")]
    MinusMinus,
    /// `!`
    #[token("!")]
    Not,
    /// `=`
    #[token("=")]
    Assignment,
    /// `==`
    #[token("==")]
    EqualTo,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `+=`
    #[token("+=")]
    PlusEquals,
    /// `-=`
    #[token("-=")]
    MinusEquals,
    /// `*=`
    #[token("*=")]
    StarEquals,
    /// `/=`
    #[token("/=")]
    SlashEquals,
    /// `%=`
    #[token("%=")]
    ModuloEquals,
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+", lex_fraction)]
    Number,
    /// String literal tokens, such as `"text"`. May span several lines.
    #[token("\"", lex_string)]
    String,
    /// Identifier tokens; variable names such as `x` or `counter`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `var`
    #[token("var")]
    Var,
    /// `mut`
    #[token("mut")]
    Mutable,
    /// `imm`
    #[token("imm")]
    Immutable,
    /// `// Comments.` Never emitted.
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
    /// Line breaks. Never emitted; they only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds. Never emitted.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of input. Appended by [`scan`], never matched in the source.
    Eof,
}

impl TokenKind {
    /// Returns `true` for the compound-assignment operators (`+=`, `-=`, `*=`,
    /// `/=` and `%=`).
    #[must_use]
    pub const fn is_compound_assignment(self) -> bool {
        matches!(self,
                 Self::PlusEquals
                 | Self::MinusEquals
                 | Self::StarEquals
                 | Self::SlashEquals
                 | Self::ModuloEquals)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Failures raised from inside the `logos` state machine.
///
/// These are converted into [`ScanError`]s by [`scan`], which knows the
/// offending slice and the current line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    /// No rule matched the input at this position.
    #[default]
    UnexpectedCharacter,
    /// A string literal reached the end of input before its closing quote.
    UnterminatedString {
        /// The line the string literal started on.
        line: usize,
    },
}

/// The value carried by a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// The parsed value of a number literal.
    Number(f64),
    /// The contents of a string literal, without the surrounding quotes.
    String(String),
}

/// A single token produced by [`scan`].
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:    TokenKind,
    /// The exact source text of the token.
    pub lexeme:  String,
    /// The literal value for number and string tokens.
    pub literal: Option<Literal>,
    /// The line the token ended on.
    pub line:    usize,
}

impl Token {
    /// Builds a token from its kind and source text, deriving the literal
    /// value for numbers and strings.
    ///
    /// # Example
    /// ```
    /// use mutex_lang::interpreter::lexer::{Literal, Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::String, "\"hi\"", 3);
    /// assert_eq!(token.literal, Some(Literal::String("hi".to_string())));
    /// assert_eq!(token.line, 3);
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: &str, line: usize) -> Self {
        let literal = match kind {
            TokenKind::Number => lexeme.parse().ok().map(Literal::Number),
            TokenKind::String => {
                let contents = lexeme.strip_prefix('"')
                                     .and_then(|s| s.strip_suffix('"'))
                                     .unwrap_or(lexeme);
                Some(Literal::String(contents.to_string()))
            },
            _ => None,
        };

        Self { kind,
               lexeme: lexeme.to_string(),
               literal,
               line }
    }

    /// Builds the end-of-input token.
    #[must_use]
    pub const fn eof(line: usize) -> Self {
        Self { kind: TokenKind::Eof,
               lexeme: String::new(),
               literal: None,
               line }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            Some(Literal::Number(n)) => {
                write!(f, "{:>4} | {} {} ({n})", self.line, self.kind, self.lexeme)
            },
            Some(Literal::String(s)) => {
                write!(f, "{:>4} | {} {} ({s:?})", self.line, self.kind, self.lexeme)
            },
            None => write!(f, "{:>4} | {} {}", self.line, self.kind, self.lexeme),
        }
    }
}

/// The result of scanning one source unit.
///
/// Scanning is fail-soft: every problem is collected in `errors` and the
/// token stream is still produced, so a shell can report all of them at once.
#[derive(Debug, Clone, PartialEq)]
pub struct LexOutput {
    /// The tokens, always terminated by a [`TokenKind::Eof`] token.
    pub tokens: Vec<Token>,
    /// Every scan error encountered, in source order.
    pub errors: Vec<ScanError>,
}

impl LexOutput {
    /// Returns `true` if scanning produced no errors.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Converts source text into a sequence of tokens.
///
/// Unexpected characters are reported and skipped; scanning continues with the
/// next character. An unterminated string is reported against the line it
/// started on and stops the scan. In every case the returned token list ends
/// with an end-of-input token.
///
/// # Example
/// ```
/// use mutex_lang::interpreter::lexer::{TokenKind, scan};
///
/// let output = scan("var mut x = 1;");
/// let kinds: Vec<TokenKind> = output.tokens.iter().map(|t| t.kind).collect();
///
/// assert!(output.is_clean());
/// assert_eq!(kinds,
///            vec![TokenKind::Var,
///                 TokenKind::Mutable,
///                 TokenKind::Identifier,
///                 TokenKind::Assignment,
///                 TokenKind::Number,
///                 TokenKind::Semicolon,
///                 TokenKind::Eof]);
/// ```
#[must_use]
pub fn scan(source: &str) -> LexOutput {
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        match result {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), line)),
            Err(LexError::UnexpectedCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                tracing::trace!(%character, line, "unexpected character");
                errors.push(ScanError::UnexpectedCharacter { character, line });
            },
            Err(LexError::UnterminatedString { line }) => {
                errors.push(ScanError::UnterminatedString { line });
                break;
            },
        }
    }

    tokens.push(Token::eof(lexer.extras.line));
    tracing::debug!(tokens = tokens.len(), errors = errors.len(), "scanned source");

    LexOutput { tokens, errors }
}

/// Extends an integer literal with a fractional part.
///
/// The `.` is consumed only when the character after it is a digit, so `1.`
/// followed by anything else scans as a number and a separate dot.
fn lex_fraction(lex: &mut Lexer<TokenKind>) {
    let remainder = lex.remainder().as_bytes();
    if remainder.len() >= 2 && remainder[0] == b'.' && remainder[1].is_ascii_digit() {
        let digits = remainder[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        lex.bump(1 + digits);
    }
}

/// Consumes a string literal up to and including its closing quote.
///
/// Embedded newlines advance the line counter. Reaching the end of input first
/// consumes the rest of the source and yields
/// [`LexError::UnterminatedString`] carrying the opening line.
fn lex_string(lex: &mut Lexer<TokenKind>) -> Result<(), LexError> {
    let start_line = lex.extras.line;
    let remainder = lex.remainder();

    if let Some(end) = remainder.find('"') {
        lex.extras.line += remainder[..end].matches('\n').count();
        lex.bump(end + 1);
        Ok(())
    } else {
        lex.extras.line += remainder.matches('\n').count();
        lex.bump(remainder.len());
        Err(LexError::UnterminatedString { line: start_line })
    }
}
