use crate::{Dictionary, SqlBuffer, Value};
use std::{borrow::Cow, fmt::Debug};

/// How an operand can be rendered at the moment a fragment is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The operand currently resolves to this number, it can be folded into the SQL text.
    Literal(i64),
    /// The value is unresolved, non numeric or only known once the statement runs.
    Dynamic,
}

/// An operand of a SQL fragment: something that renders itself and may expose a resolved value.
pub trait FilterValue: Debug + Send + Sync {
    /// Append the SQL for this operand.
    fn write_query(&self, dictionary: &dyn Dictionary, out: &mut SqlBuffer);

    /// The value this operand is currently resolved to, if any.
    fn value(&self) -> Option<&Value> {
        None
    }

    /// Whether the operand renders as a parameter marker.
    fn is_parameter(&self) -> bool {
        false
    }

    /// Classify the operand from its current value. Never cached, the same operand can be bound
    /// to a different value by the next call.
    fn classify(&self) -> Classification {
        match self.value().and_then(Value::as_i64) {
            Some(v) => Classification::Literal(v),
            None => Classification::Dynamic,
        }
    }
}

impl<T: FilterValue> FilterValue for &T {
    fn write_query(&self, dictionary: &dyn Dictionary, out: &mut SqlBuffer) {
        (*self).write_query(dictionary, out);
    }
    fn value(&self) -> Option<&Value> {
        (*self).value()
    }
    fn is_parameter(&self) -> bool {
        (*self).is_parameter()
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub name: Cow<'static, str>,
    pub schema: Cow<'static, str>,
    pub alias: Cow<'static, str>,
}

impl TableRef {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
    pub fn schema(mut self, schema: impl Into<Cow<'static, str>>) -> Self {
        self.schema = schema.into();
        self
    }
    pub fn alias(mut self, alias: impl Into<Cow<'static, str>>) -> Self {
        self.alias = alias.into();
        self
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub name: Cow<'static, str>,
    /// Table name or alias qualifying the column, empty when unqualified.
    pub table: Cow<'static, str>,
}

impl ColumnRef {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            table: Cow::Borrowed(""),
        }
    }
    pub fn qualified(
        table: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
        }
    }
}

/// Concrete operand descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Value inlined in the SQL text.
    Literal(Value),
    /// Value bound through a parameter marker. A typed NULL (for example `Value::Int32(None)`)
    /// stands for a parameter whose value is not known yet.
    Parameter(Value),
    Column(ColumnRef),
    Call(Cow<'static, str>, Vec<Operand>),
    /// Verbatim SQL sub-expression.
    Raw(Cow<'static, str>),
}

impl Operand {
    pub fn literal(value: impl Into<Value>) -> Self {
        Operand::Literal(value.into())
    }
    pub fn parameter(value: impl Into<Value>) -> Self {
        Operand::Parameter(value.into())
    }
    pub fn column(name: impl Into<Cow<'static, str>>) -> Self {
        Operand::Column(ColumnRef::new(name))
    }
    pub fn raw(sql: impl Into<Cow<'static, str>>) -> Self {
        Operand::Raw(sql.into())
    }
    /// Rebind the value of a literal or parameter operand, other operands are left untouched.
    pub fn bind(&mut self, value: impl Into<Value>) {
        if let Operand::Literal(v) | Operand::Parameter(v) = self {
            *v = value.into();
        }
    }
}

impl FilterValue for Operand {
    fn write_query(&self, dictionary: &dyn Dictionary, out: &mut SqlBuffer) {
        dictionary.write_operand(out, self);
    }
    fn value(&self) -> Option<&Value> {
        match self {
            Operand::Literal(v) | Operand::Parameter(v) => Some(v),
            _ => None,
        }
    }
    fn is_parameter(&self) -> bool {
        matches!(self, Operand::Parameter(..))
    }
}
