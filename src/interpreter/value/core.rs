use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to one of these. Equality is structural and never
/// coerces between kinds: `nil` equals only `nil`, and the number `1` is not
/// equal to the string `"1"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A double precision floating-point number.
    Number(f64),
    /// A string of text.
    Str(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and equality operators and by `!`.
    Bool(bool),
    /// The absent value.
    Nil,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Nil => Self::Nil,
        }
    }
}

impl Value {
    /// Maps the value to a boolean for logical negation.
    ///
    /// `false` and `nil` are falsy; everything else, including `0` and the
    /// empty string, is truthy.
    ///
    /// # Example
    /// ```
    /// use sting::interpreter::value::Value;
    ///
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Returns the number held by the value, if it is one.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "nil"),
        }
    }
}
