/// An abstract syntax tree (AST) node representing a statement.
///
/// A parsed program is a single [`Statement::Block`] whose body holds the
/// top-level statements in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An ordered sequence of statements.
    Block {
        /// Statements inside the block.
        body: Vec<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A standalone expression terminated by `;`.
    Expression {
        /// The expression to evaluate.
        expression: Expr,
        /// Line number in the source code.
        line:       usize,
    },
    /// A variable declaration such as `var mut x = 1;` or `var imm y;`.
    VariableDeclaration {
        /// The name of the variable.
        identifier: String,
        /// `true` for `mut`, `false` for `imm`.
        is_mutable: bool,
        /// The initializer, if any. A missing initializer declares `nil`.
        value:      Option<Expr>,
        /// Line number in the source code.
        line:       usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Block { line, .. }
            | Self::Expression { line, .. }
            | Self::VariableDeclaration { line, .. } => *line,
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant records the line of the token that introduced it so that
/// runtime errors can point back into the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal.
    Number {
        /// The constant value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal, without its quotes.
    String {
        /// The constant value.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Symbol {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, comparison, etc.).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operation such as `-x` or `!done`.
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A postfix operation such as `i++`.
    Postfix {
        /// The operator.
        op:      PostfixOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// Array literal expression.
    Array {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Array indexing expression (e.g., `arr[2]`).
    ArrayIndex {
        /// The array to index into.
        object: Box<Self>,
        /// The index to access.
        index:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// Assignment into an array slot (e.g., `arr[2] = 5`).
    ArrayIndexAssignment {
        /// The array being written to.
        object:    Box<Self>,
        /// The slot being written.
        index:     Box<Self>,
        /// The value stored into the slot.
        new_value: Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Assignment re-binding a name (e.g., `x = 5`).
    Assignment {
        /// The target of the assignment.
        assignee:  Box<Self>,
        /// The value which is being assigned.
        new_value: Box<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use mutex_lang::ast::Expr;
    ///
    /// let expr = Expr::Symbol { name: "x".to_string(),
    ///                           line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Number { line, .. }
            | Self::String { line, .. }
            | Self::Symbol { line, .. }
            | Self::Binary { line, .. }
            | Self::Unary { line, .. }
            | Self::Postfix { line, .. }
            | Self::Array { line, .. }
            | Self::ArrayIndex { line, .. }
            | Self::ArrayIndexAssignment { line, .. }
            | Self::Assignment { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

/// Represents a postfix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PostfixOperator {
    /// Increment (`x++`).
    Increment,
    /// Decrement (`x--`).
    Decrement,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

impl std::fmt::Display for PostfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Increment => write!(f, "++"),
            Self::Decrement => write!(f, "--"),
        }
    }
}
