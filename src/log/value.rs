use std::fmt::{self, Display};

/// Text produced for an absent value.
pub const NIL_TEXT: &str = "<nil>";

/// A single argument of a log call.
///
/// Values are rendered to text when they are built, so a `Value` never
/// borrows from the caller and rendering a whole call cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// The absent value. Renders as `<nil>`.
    Nil,
    /// The default textual form of a present value.
    Text(String),
}

impl Value {
    /// Builds a value that is [`Value::Nil`] for `Ok` and the rendered
    /// error for `Err`.
    ///
    /// # Example
    ///
    /// ```
    /// use synclog::Value;
    ///
    /// let ok: Result<(), std::io::Error> = Ok(());
    /// assert!(Value::err(&ok).is_nil());
    /// ```
    pub fn err<T, E: Display>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Value::Nil,
            Err(e) => Value::Text(e.to_string()),
        }
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Value::Nil => NIL_TEXT,
            Value::Text(text) => text,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: Display + ?Sized> From<&T> for Value {
    fn from(value: &T) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Display + ?Sized> From<Option<&T>> for Value {
    fn from(value: Option<&T>) -> Self {
        value.map_or(Value::Nil, Value::from)
    }
}

/// Concatenates the textual form of every value, with no separator.
#[must_use]
pub fn render(values: &[Value]) -> String {
    let mut out = String::with_capacity(values.iter().map(|v| v.as_str().len()).sum());
    for value in values {
        out.push_str(value.as_str());
    }
    out
}
