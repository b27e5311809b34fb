use std::{fs, path::Path};

use tracing::debug;

use crate::{
    SCRIPT_EXTENSION,
    error::{ParseError, RunError},
    interpreter::{
        environment::Environment, evaluator::eval_program, parser::parse, value::core::Value,
    },
};

/// An evaluation session: one environment shared by successive runs.
///
/// A REPL keeps one `Session` for its whole lifetime so bindings made on one
/// line are visible on the next. File and inline runs use a fresh one.
///
/// ## Usage
///
/// ```
/// use turtls::{interpreter::value::core::Value, session::Session};
///
/// let mut session = Session::new();
/// session.run("let x = 40;").unwrap();
///
/// assert_eq!(session.run("x + 2").unwrap(), Some(Value::Integer(42)));
/// ```
#[derive(Debug, Default)]
pub struct Session {
    env: Environment,
}

impl Session {
    /// Creates a session with an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and evaluates `source` against this session's environment.
    ///
    /// Nothing is evaluated if parsing fails, so a line with a syntax error
    /// leaves the environment untouched.
    pub fn run(&mut self, source: &str) -> Result<Option<Value>, ParseError> {
        let program = parse(source)?;
        debug!(statements = program.statements.len(), "evaluating program");
        Ok(eval_program(&program, &mut self.env))
    }

    /// Reads a script file and evaluates it in this session.
    ///
    /// # Errors
    /// - `WrongExtension` unless the path ends in `.turtls`.
    /// - `Io` if the file cannot be read.
    /// - `Parse` if the script does not parse.
    pub fn run_file(&mut self, path: &Path) -> Result<Option<Value>, RunError> {
        if path.extension().is_none_or(|ext| ext != SCRIPT_EXTENSION) {
            return Err(RunError::WrongExtension { path: path.to_path_buf() });
        }

        let source = fs::read_to_string(path).map_err(|source| RunError::Io { path: path.to_path_buf(),
                                                                               source })?;
        debug!(path = %path.display(), bytes = source.len(), "loaded script");
        Ok(self.run(&source)?)
    }

    /// The bindings accumulated so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bindings_persist_across_runs() {
        let mut session = Session::new();
        assert_eq!(session.run("let a = 2;").unwrap(), None);
        assert_eq!(session.run("let b = a * 3;").unwrap(), None);
        assert_eq!(session.run("a + b").unwrap(), Some(Value::Integer(8)));
        assert_eq!(session.environment().len(), 2);
    }

    #[test]
    fn failed_let_binds_nothing() {
        let mut session = Session::new();
        assert_eq!(session.run("let x = 1 / 0;").unwrap().map(|v| v.to_string()),
                   Some("ERROR: division by zero".to_string()));
        assert!(!session.environment().contains("x"));
        assert_eq!(session.run("x").unwrap().map(|v| v.to_string()),
                   Some("ERROR: identifier not found: x".to_string()));
    }

    #[test]
    fn parse_error_evaluates_nothing() {
        let mut session = Session::new();
        assert!(session.run("let x = 1; let = 2;").is_err());
        assert!(!session.environment().contains("x"));
    }

    #[test]
    fn wrong_extension_is_rejected() {
        let mut session = Session::new();
        let error = session.run_file(Path::new("script.txt")).unwrap_err();
        assert!(matches!(error, RunError::WrongExtension { .. }));

        let error = session.run_file(Path::new("script")).unwrap_err();
        assert!(matches!(error, RunError::WrongExtension { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut session = Session::new();
        let error = session.run_file(Path::new("does/not/exist.turtls")).unwrap_err();
        assert!(matches!(error, RunError::Io { .. }));
    }
}
