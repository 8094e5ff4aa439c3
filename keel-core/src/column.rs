use crate::Value;
use std::borrow::Cow;

/// Column declaration: name, value prototype and the attributes that shape its DDL.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: Cow<'static, str>,
    /// Prototype of the values stored, only the variant (and decimal precision/scale) matters.
    pub value: Value,
    pub nullable: bool,
    /// Declared length for character and binary columns.
    pub length: Option<u32>,
    /// Large object storage (CLOB / BLOB).
    pub lob: bool,
    /// Value generated by the database (identity column).
    pub auto_assign: bool,
}

impl ColumnDef {
    pub fn new(name: impl Into<Cow<'static, str>>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            nullable: true,
            ..Default::default()
        }
    }
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }
    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }
    pub fn lob(mut self) -> Self {
        self.lob = true;
        self
    }
    pub fn auto_assign(mut self) -> Self {
        self.auto_assign = true;
        self.nullable = false;
        self
    }
}
