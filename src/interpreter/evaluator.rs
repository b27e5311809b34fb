use crate::{
    ast::Program,
    interpreter::{environment::Environment, evaluator::core::Evaluator, value::core::Value},
};

/// Infix operator evaluation.
///
/// Dispatches on operand kinds: the integer arithmetic table, identity
/// equality for everything else, and the type-mismatch and unknown-operator
/// errors.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the evaluator, program and block short-circuiting, `let` and
/// `return`, identifier lookup, `if` and truthiness.
pub mod core;

/// Prefix operator evaluation.
///
/// Implements `!`, `-` and the bitwise complement `^`.
pub mod unary;

/// Evaluates `program` against `env` and returns its result.
///
/// Shorthand for [`Evaluator::eval_program`]. `None` means the program
/// produced nothing to print: it was empty or ended in a `let`.
///
/// # Example
/// ```
/// use turtls::interpreter::{
///     environment::Environment, evaluator::eval_program, parser::parse, value::core::Value,
/// };
///
/// let mut env = Environment::new();
///
/// let program = parse("let x = 5;").unwrap();
/// assert_eq!(eval_program(&program, &mut env), None);
///
/// let program = parse("x * 2").unwrap();
/// assert_eq!(eval_program(&program, &mut env), Some(Value::Integer(10)));
/// ```
pub fn eval_program(program: &Program, env: &mut Environment) -> Option<Value> {
    Evaluator::new(env).eval_program(program)
}
