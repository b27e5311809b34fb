/// Discriminant of a runtime [`Value`](super::core::Value).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValueKind {
    /// The `null` value.
    Null,
    /// `true` or `false`.
    Boolean,
    /// A 64-bit signed integer.
    Integer,
    /// A value in flight from a `return` statement.
    ReturnValue,
    /// A failed evaluation.
    Error,
}

impl ValueKind {
    /// The name used for this kind in error messages.
    ///
    /// # Example
    /// ```
    /// use turtls::interpreter::value::kind::ValueKind;
    ///
    /// assert_eq!(ValueKind::ReturnValue.name(), "RETURN_VALUE");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Boolean => "BOOLEAN",
            Self::Integer => "INTEGER",
            Self::ReturnValue => "RETURN_VALUE",
            Self::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
