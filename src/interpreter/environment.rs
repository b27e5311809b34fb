use std::collections::HashMap;

use tracing::trace;

use crate::interpreter::value::core::Value;

/// The bindings of one evaluation session.
///
/// A single flat scope: `let` inside a block binds in the same map as a
/// top-level `let`, so the name stays visible after the block ends. Created
/// once per REPL session or file run and reused by every evaluation.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, overwriting any previous binding.
    ///
    /// # Example
    /// ```
    /// use turtls::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Value::Integer(1));
    /// env.set("x", Value::Integer(2));
    ///
    /// assert_eq!(env.get("x"), Some(&Value::Integer(2)));
    /// assert_eq!(env.len(), 1);
    /// ```
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        trace!(%name, %value, "bind");
        self.store.insert(name, value);
    }

    /// Looks up `name` by exact match.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.store.get(name)
    }

    /// Returns `true` if `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if nothing has been bound yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
