use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        value::core::{NULL, Value},
    },
};

/// Result type used by the evaluator.
///
/// Every evaluation step returns either a value of type `T` or the
/// `RuntimeError` that becomes the program's `Error` value. Using `?` on each
/// sub-result is what makes errors infectious: nothing after a failed
/// sub-expression is evaluated.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks syntax trees against the bindings of one session.
///
/// An `Evaluator` borrows the session's [`Environment`] for the duration of
/// one top-level call; the environment outlives it and keeps every `let`.
///
/// ## Usage
///
/// ```
/// use turtls::interpreter::{
///     environment::Environment, evaluator::core::Evaluator, parser::parse, value::core::Value,
/// };
///
/// let mut env = Environment::new();
/// let program = parse("if (true) { return 10; } 20;").unwrap();
///
/// let result = Evaluator::new(&mut env).eval_program(&program);
/// assert_eq!(result, Some(Value::Integer(10)));
/// ```
pub struct Evaluator<'env> {
    env: &'env mut Environment,
}

impl<'env> Evaluator<'env> {
    /// Creates an evaluator over the given session environment.
    pub const fn new(env: &'env mut Environment) -> Self {
        Self { env }
    }

    /// Evaluates a whole program.
    ///
    /// Statements run in order. A `ReturnValue` ends the program and its inner
    /// value is the result; an error ends the program and becomes
    /// [`Value::Error`]. Otherwise the result is that of the last statement,
    /// which is `None` for an empty program or one ending in `let`.
    pub fn eval_program(&mut self, program: &Program) -> Option<Value> {
        let mut result = None;

        for statement in &program.statements {
            match self.eval_statement(statement) {
                Ok(Some(Value::ReturnValue(inner))) => {
                    return Some(Rc::unwrap_or_clone(inner));
                },
                Ok(value) => result = value,
                Err(error) => {
                    debug!(%error, line = error.line(), "evaluation failed");
                    return Some(Value::Error(error));
                },
            }
        }

        result
    }

    /// Evaluates the statements of a block.
    ///
    /// Stops at the first `ReturnValue`, which is handed to the caller still
    /// wrapped, or at the first error. Otherwise yields the result of the last
    /// statement.
    pub fn eval_block(&mut self, block: &Block) -> EvalResult<Option<Value>> {
        let mut result = None;

        for statement in &block.statements {
            result = self.eval_statement(statement)?;
            if let Some(Value::ReturnValue(_)) = result {
                break;
            }
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// `let` binds into the environment and produces no value; `return` wraps
    /// its value in [`Value::ReturnValue`]; expression statements yield their
    /// expression's value.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Let { name, value, .. } => {
                let value = self.eval_child(value)?;
                self.env.set(name.as_str(), value);
                Ok(None)
            },
            Statement::Return { value, line } => {
                let value = self.eval_child(value)?;
                trace!(line, %value, "return");
                Ok(Some(Value::return_value(value)))
            },
            Statement::Expression { expr, .. } => self.eval(expr),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// The evaluator dispatches based on expression variant. Only `if` can
    /// yield `None`, when the taken branch ends without a value.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Identifier { name, line } => self.eval_identifier(name, *line).map(Some),
            Expr::Integer { value, .. } => Ok(Some(Value::Integer(*value))),
            Expr::Boolean { value, .. } => Ok(Some(Value::from(*value))),
            Expr::Prefix { op, right, line } => {
                let right = self.eval_child(right)?;
                Self::eval_prefix(*op, &right, *line).map(Some)
            },
            Expr::Infix { left,
                          op,
                          right,
                          line, } => {
                let left = self.eval_child(left)?;
                let right = self.eval_child(right)?;
                Self::eval_infix(*op, &left, &right, *line).map(Some)
            },
            Expr::If { condition,
                       consequence,
                       alternative,
                       .. } => self.eval_if(condition, consequence, alternative.as_ref()),
        }
    }

    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// Operands, conditions and the right-hand sides of `let` and `return`
    /// all need a value; a branch that ended without one is reported as
    /// `MissingValue`, on the line of `expr`, instead of being passed on.
    pub fn eval_child(&mut self, expr: &Expr) -> EvalResult<Value> {
        self.eval(expr)?
            .ok_or_else(|| RuntimeError::MissingValue { line: expr.line_number() })
    }

    /// Looks up an identifier in the session environment.
    ///
    /// An `Error` that an embedder stored in the environment is propagated
    /// rather than returned as an operand.
    fn eval_identifier(&self, name: &str, line: usize) -> EvalResult<Value> {
        match self.env.get(name) {
            Some(Value::Error(error)) => Err(error.clone()),
            Some(value) => Ok(value.clone()),
            None => Err(RuntimeError::IdentifierNotFound { name: name.to_string(),
                                                           line }),
        }
    }

    /// Evaluates an `if` expression.
    ///
    /// The consequence runs when the condition is truthy, otherwise the
    /// alternative if there is one. Without an alternative a falsy condition
    /// yields `null`.
    fn eval_if(&mut self,
               condition: &Expr,
               consequence: &Block,
               alternative: Option<&Block>)
               -> EvalResult<Option<Value>> {
        let condition = self.eval_child(condition)?;

        if is_truthy(&condition) {
            self.eval_block(consequence)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative)
        } else {
            Ok(Some(NULL))
        }
    }
}

/// Maps a value to the boolean sense used by `if`.
///
/// `null` and `false` are falsy; every other value, including `0`, is truthy.
///
/// # Example
/// ```
/// use turtls::interpreter::{
///     evaluator::core::is_truthy,
///     value::core::{FALSE, NULL, TRUE, Value},
/// };
///
/// assert!(is_truthy(&TRUE));
/// assert!(is_truthy(&Value::Integer(0)));
/// assert!(!is_truthy(&FALSE));
/// assert!(!is_truthy(&NULL));
/// ```
#[must_use]
pub const fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Boolean(false))
}
