use crate::{Dictionary, FilterValue, Value};
use std::fmt::{self, Display, Write};

/// Append only SQL text under construction together with the parameters bound so far.
///
/// A buffer belongs to the single query building call that created it.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SqlBuffer {
    sql: String,
    parameters: Vec<Value>,
}

impl SqlBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn append(&mut self, text: &str) -> &mut Self {
        self.sql.push_str(text);
        self
    }

    pub fn push(&mut self, c: char) -> &mut Self {
        self.sql.push(c);
        self
    }

    pub fn append_integer(&mut self, value: i64) -> &mut Self {
        let mut buffer = itoa::Buffer::new();
        self.sql.push_str(buffer.format(value));
        self
    }

    /// Render an operand (and any nested sub-expression) through the dictionary.
    pub fn append_operand(
        &mut self,
        dictionary: &dyn Dictionary,
        operand: &dyn FilterValue,
    ) -> &mut Self {
        operand.write_query(dictionary, self);
        self
    }

    /// Append a parameter marker and record the value bound to it.
    pub fn append_parameter(&mut self, value: Value) -> &mut Self {
        self.sql.push('?');
        self.parameters.push(value);
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn parameters(&self) -> &[Value] {
        &self.parameters
    }

    pub fn len(&self) -> usize {
        self.sql.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

impl Write for SqlBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sql.push_str(s);
        Ok(())
    }
}

impl Display for SqlBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

impl PartialEq<str> for SqlBuffer {
    fn eq(&self, other: &str) -> bool {
        self.sql == other
    }
}

impl PartialEq<&str> for SqlBuffer {
    fn eq(&self, other: &&str) -> bool {
        self.sql == *other
    }
}
