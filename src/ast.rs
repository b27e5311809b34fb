/// A complete parsed program: the unit evaluated by a file run or one REPL
/// line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A braced sequence of statements, used as the branches of an `if`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
    /// Line number of the opening brace.
    pub line:       usize,
}

impl Block {
    /// Nesting height of the block: one more than its tallest statement.
    #[must_use]
    pub fn height(&self) -> usize {
        1 + self.statements.iter().map(Statement::height).max().unwrap_or(0)
    }
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A variable binding using `let`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `return` statement.
    Return {
        /// The returned expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Nesting height of the statement's expression.
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Let { value, .. } | Self::Return { value, .. } => value.height(),
            Self::Expression { expr, .. } => expr.height(),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An integer literal such as `42`.
    Integer {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// `true` or `false`.
    Boolean {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operation such as `-x` or `!flag`.
    Prefix {
        /// The operator to apply.
        op:    PrefixOperator,
        /// The operand expression.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An infix operation such as `a + b`.
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Conditional expression with an optional `else` block.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: Block,
        /// Block evaluated when the condition is falsy.
        alternative: Option<Block>,
        /// Line number in the source code.
        line:        usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use turtls::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier { line, .. }
            | Self::Integer { line, .. }
            | Self::Boolean { line, .. }
            | Self::Prefix { line, .. }
            | Self::Infix { line, .. }
            | Self::If { line, .. } => *line,
        }
    }

    /// Number of nodes on the longest path from `self` down to a leaf.
    ///
    /// Evaluation recurses once per level, so the parser bounds this value.
    ///
    /// ## Example
    /// ```
    /// use turtls::{ast::Statement, interpreter::parser::parse};
    ///
    /// let program = parse("1 + 2 * -3").unwrap();
    /// let Statement::Expression { expr, .. } = &program.statements[0] else {
    ///     unreachable!()
    /// };
    ///
    /// assert_eq!(expr.height(), 4);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Identifier { .. } | Self::Integer { .. } | Self::Boolean { .. } => 1,
            Self::Prefix { right, .. } => 1 + right.height(),
            Self::Infix { left, right, .. } => 1 + left.height().max(right.height()),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                1 + condition.height()
                             .max(consequence.height())
                             .max(alternative.as_ref().map_or(0, Block::height))
            },
        }
    }
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical not (`!`)
    Not,
    /// Arithmetic negation (`-`)
    Negate,
    /// Bitwise complement (`^`)
    Complement,
}

/// Represents an infix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Bit clear (`&^`)
    BitClear,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Right shift (`>>`)
    ShiftRight,
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

impl std::fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
            Self::Complement => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use InfixOperator::{
            Add, BitAnd, BitClear, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less,
            LessEqual, Mod, Mul, NotEqual, Pow, ShiftLeft, ShiftRight, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "**",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            BitClear => "&^",
            ShiftLeft => "<<",
            ShiftRight => ">>",
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
