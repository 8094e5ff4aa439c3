use crate::{
    Capabilities, Classification, ColumnDef, ColumnRef, Context, FilterValue, Operand, Result,
    SelectShape, SqlBuffer, TableRef, Template, TrimSpec, Value, separated_by, truncate_name,
};
use std::fmt::Write;
use time::{Date, PrimitiveDateTime, Time};

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.append(buffer.format($value));
    }};
}
macro_rules! write_float {
    ($this:ident, $out:ident, $value:expr) => {{
        if $value.is_finite() {
            let mut buffer = ryu::Buffer::new();
            $out.append(buffer.format($value));
        } else {
            $this.write_value_non_finite($out, $value as f64);
        }
    }};
}

/// Kind of database object an identifier names, each has its own length limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Table,
    Column,
    Constraint,
    Index,
}

/// Vendor dictionary: renders portable operations into the SQL a database family understands.
///
/// Every method has a portable default; a dialect overrides the ones its vendor renders
/// differently and supplies its own [`Capabilities`].
pub trait Dictionary: Send + Sync {
    fn as_dyn(&self) -> &dyn Dictionary;

    fn capabilities(&self) -> &Capabilities;

    fn platform(&self) -> &str {
        self.capabilities().platform()
    }

    /// Escape occurrences of `search` char with `replace` while copying into buffer.
    fn write_escaped(&self, out: &mut SqlBuffer, value: &str, search: char, replace: &str) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            if c == search {
                out.append(&value[position..i]);
                out.append(replace);
                position = i + c.len_utf8();
            }
        }
        out.append(&value[position..]);
    }

    /// Quote identifiers ("name") doubling inner quotes.
    fn write_identifier_quoted(&self, out: &mut SqlBuffer, value: &str) {
        out.push('"');
        self.write_escaped(out, value, '"', "\"\"");
        out.push('"');
    }

    fn write_table_ref(&self, out: &mut SqlBuffer, value: &TableRef) {
        if !value.schema.is_empty() {
            self.write_identifier_quoted(out, &value.schema);
            out.push('.');
        }
        self.write_identifier_quoted(out, &value.name);
        if !value.alias.is_empty() {
            let _ = write!(out, " {}", value.alias);
        }
    }

    fn write_column_ref(&self, out: &mut SqlBuffer, value: &ColumnRef) {
        if !value.table.is_empty() {
            out.append(&value.table);
            out.push('.');
        }
        self.write_identifier_quoted(out, &value.name);
    }

    /// Render a concrete value (including proper quoting / escaping).
    fn write_value(&self, out: &mut SqlBuffer, value: &Value) {
        match value {
            v if v.is_null() => self.write_value_none(out),
            Value::Boolean(Some(v)) => self.write_value_bool(out, *v),
            Value::Int8(Some(v)) => write_integer!(out, *v),
            Value::Int16(Some(v)) => write_integer!(out, *v),
            Value::Int32(Some(v)) => write_integer!(out, *v),
            Value::Int64(Some(v)) => write_integer!(out, *v),
            Value::UInt8(Some(v)) => write_integer!(out, *v),
            Value::UInt16(Some(v)) => write_integer!(out, *v),
            Value::UInt32(Some(v)) => write_integer!(out, *v),
            Value::UInt64(Some(v)) => write_integer!(out, *v),
            Value::Float32(Some(v)) => write_float!(self, out, *v),
            Value::Float64(Some(v)) => write_float!(self, out, *v),
            Value::Decimal(Some(v), ..) => drop(write!(out, "{}", v)),
            Value::Char(Some(v)) => {
                let mut buf = [0u8; 4];
                self.write_value_string(out, v.encode_utf8(&mut buf));
            }
            Value::Varchar(Some(v)) => self.write_value_string(out, v),
            Value::Blob(Some(v)) => self.write_value_blob(out, v),
            Value::Date(Some(v)) => self.write_value_date(out, v),
            Value::Time(Some(v)) => self.write_value_time(out, v),
            Value::Timestamp(Some(v)) => self.write_value_timestamp(out, v),
            Value::Uuid(Some(v)) => drop(write!(out, "'{}'", v)),
            _ => log::error!("Cannot write {:?}", value),
        };
    }

    fn write_value_none(&self, out: &mut SqlBuffer) {
        out.append("NULL");
    }

    fn write_value_bool(&self, out: &mut SqlBuffer, value: bool) {
        out.append(["FALSE", "TRUE"][value as usize]);
    }

    /// Render +/- infinity and NaN through a CAST of their textual form.
    fn write_value_non_finite(&self, out: &mut SqlBuffer, value: f64) {
        let text = if value.is_nan() {
            "NaN"
        } else if value.is_sign_negative() {
            "-Infinity"
        } else {
            "Infinity"
        };
        let _ = write!(
            out,
            "CAST('{}' AS {})",
            text,
            self.capabilities().double_type_name()
        );
    }

    /// Render and escape a string literal using single quotes.
    fn write_value_string(&self, out: &mut SqlBuffer, value: &str) {
        out.push('\'');
        self.write_escaped(out, value, '\'', "''");
        out.push('\'');
    }

    /// Render a binary literal as hex.
    fn write_value_blob(&self, out: &mut SqlBuffer, value: &[u8]) {
        out.append("X'").append(&hex::encode_upper(value)).push('\'');
    }

    fn write_value_date(&self, out: &mut SqlBuffer, value: &Date) {
        let _ = write!(
            out,
            "'{:04}-{:02}-{:02}'",
            value.year(),
            value.month() as u8,
            value.day()
        );
    }

    fn write_value_time(&self, out: &mut SqlBuffer, value: &Time) {
        out.push('\'');
        write_time_of_day(out, value);
        out.push('\'');
    }

    fn write_value_timestamp(&self, out: &mut SqlBuffer, value: &PrimitiveDateTime) {
        let date = value.date();
        let _ = write!(
            out,
            "'{:04}-{:02}-{:02} ",
            date.year(),
            date.month() as u8,
            date.day()
        );
        write_time_of_day(out, &value.time());
        out.push('\'');
    }

    /// Render an operand descriptor.
    fn write_operand(&self, out: &mut SqlBuffer, value: &Operand) {
        match value {
            Operand::Literal(v) => self.write_value(out, v),
            Operand::Parameter(v) => self.write_parameter(out, v),
            Operand::Column(v) => self.write_column_ref(out, v),
            Operand::Call(function, args) => {
                out.append(function).push('(');
                separated_by(
                    out,
                    args,
                    |out, v| {
                        v.write_query(self.as_dyn(), out);
                    },
                    ", ",
                );
                out.push(')');
            }
            Operand::Raw(v) => {
                out.append(v);
            }
        }
    }

    /// Render a parameter marker bound to `value`.
    fn write_parameter(&self, out: &mut SqlBuffer, value: &Value) {
        out.append_parameter(value.clone());
    }

    /// Full SQL type (name plus size or precision when the type takes one) for a value prototype.
    fn type_name(&self, value: &Value, length: Option<u32>, lob: bool) -> String {
        let caps = self.capabilities();
        let (name, size): (&str, Option<(u32, Option<u8>)>) = match value {
            Value::Null | Value::Varchar(..) if lob => (caps.clob_type_name(), None),
            Value::Null | Value::Varchar(..) => (
                caps.varchar_type_name(),
                Some((length.unwrap_or(caps.default_varchar_length()), None)),
            ),
            Value::Boolean(..) => (caps.bit_type_name(), None),
            Value::Int8(..) => (caps.tinyint_type_name(), None),
            Value::Int16(..) | Value::UInt8(..) => (caps.smallint_type_name(), None),
            Value::Int32(..) | Value::UInt16(..) => (caps.integer_type_name(), None),
            Value::Int64(..) | Value::UInt32(..) => (caps.bigint_type_name(), None),
            Value::UInt64(..) => (caps.numeric_type_name(), Some((20, Some(0)))),
            Value::Float32(..) => (caps.real_type_name(), None),
            Value::Float64(..) => (caps.double_type_name(), None),
            Value::Decimal(.., precision, scale) => (
                caps.numeric_type_name(),
                if (*precision, *scale) != (0, 0) {
                    Some((*precision as u32, Some(*scale)))
                } else {
                    None
                },
            ),
            Value::Char(..) => (caps.char_type_name(), Some((1, None))),
            Value::Uuid(..) => (caps.char_type_name(), Some((36, None))),
            Value::Blob(..) if lob => (caps.blob_type_name(), None),
            Value::Blob(..) => match length {
                Some(length) => (caps.varbinary_type_name(), Some((length, None))),
                None => (caps.long_varbinary_type_name(), None),
            },
            Value::Date(..) => (caps.date_type_name(), None),
            Value::Time(..) => (caps.time_type_name(), None),
            Value::Timestamp(..) => (caps.timestamp_type_name(), None),
        };
        let mut result = String::from(name);
        if let Some((size, scale)) = size {
            if !caps.is_fixed_size_type(name) {
                let _ = match scale {
                    Some(scale) => write!(result, "({},{})", size, scale),
                    None => write!(result, "({})", size),
                };
            }
        }
        result
    }

    /// Render the SQL type of a column.
    fn write_column_type(&self, out: &mut SqlBuffer, column: &ColumnDef) {
        out.append(&self.type_name(&column.value, column.length, column.lob));
    }

    /// Render a column declaration for CREATE TABLE, identity generation included.
    fn write_column_declaration(&self, out: &mut SqlBuffer, column: &ColumnDef) {
        let caps = self.capabilities();
        self.write_identifier_quoted(out, &column.name);
        out.push(' ');
        self.write_column_type(out, column);
        if !column.nullable {
            out.append(" NOT NULL");
        }
        if column.auto_assign {
            if caps.supports_auto_assign() && !caps.auto_assign_clause().is_empty() {
                out.push(' ').append(caps.auto_assign_clause());
            } else {
                log::warn!(
                    "{} does not support auto assigned columns, `{}` is declared without a generated value",
                    caps.platform(),
                    column.name
                );
            }
        }
    }

    /// Query returning the value generated for the last auto assigned column.
    fn last_generated_key_query(&self) -> Option<&str> {
        let caps = self.capabilities();
        if caps.supports_auto_assign() && !caps.last_generated_key_query().is_empty() {
            Some(caps.last_generated_key_query())
        } else {
            None
        }
    }

    /// Cast applied to `operand` inside the function template `func`, when the vendor needs one.
    fn add_cast_as_type(&self, func: &str, _operand: &dyn FilterValue) -> String {
        func.to_string()
    }

    /// Shorten an identifier to the length the platform accepts for that kind of object.
    fn make_valid_name(&self, name: &str, kind: NameKind) -> String {
        let caps = self.capabilities();
        let max = match kind {
            NameKind::Table => caps.max_table_name_length(),
            NameKind::Column => caps.max_column_name_length(),
            NameKind::Constraint => caps.max_constraint_name_length(),
            NameKind::Index => caps.max_index_name_length(),
        };
        truncate_name(name, max).to_string()
    }

    /// Substitute the operands into a function template.
    fn write_template(
        &self,
        out: &mut SqlBuffer,
        template: &Template,
        args: &[&dyn FilterValue],
    ) -> Result<()> {
        template
            .write(self.as_dyn(), out, args)
            .with_context(|| format!("While writing a {} fragment", self.platform()))
    }

    fn string_length(&self, out: &mut SqlBuffer, value: &dyn FilterValue) -> Result<()> {
        self.write_template(
            out,
            self.capabilities().string_length_function(),
            &[value],
        )
    }

    fn concatenate(
        &self,
        out: &mut SqlBuffer,
        lhs: &dyn FilterValue,
        rhs: &dyn FilterValue,
    ) -> Result<()> {
        self.write_template(
            out,
            self.capabilities().concatenate_function(),
            &[lhs, rhs],
        )
    }

    fn trim(&self, out: &mut SqlBuffer, value: &dyn FilterValue, side: TrimSpec) -> Result<()> {
        let caps = self.capabilities();
        let template = match side {
            TrimSpec::Leading => caps.trim_leading_function(),
            TrimSpec::Trailing => caps.trim_trailing_function(),
            TrimSpec::Both => caps.trim_both_function(),
        };
        self.write_template(out, template, &[value])
    }

    fn to_upper_case(&self, out: &mut SqlBuffer, value: &dyn FilterValue) -> Result<()> {
        self.write_template(
            out,
            self.capabilities().to_upper_case_function(),
            &[value],
        )
    }

    fn to_lower_case(&self, out: &mut SqlBuffer, value: &dyn FilterValue) -> Result<()> {
        self.write_template(
            out,
            self.capabilities().to_lower_case_function(),
            &[value],
        )
    }

    /// 0 based position of `find` inside `str`, -1 when absent, searching from `start` if given.
    fn index_of(
        &self,
        out: &mut SqlBuffer,
        str: &dyn FilterValue,
        find: &dyn FilterValue,
        start: Option<&dyn FilterValue>,
    ) {
        out.append("(INSTR((");
        match start {
            Some(start) => self.substring(out, str, start, None),
            None => {
                out.append_operand(self.as_dyn(), str);
            }
        }
        out.append("), (");
        out.append_operand(self.as_dyn(), find);
        out.append(")) - 1");
        if let Some(start) = start {
            out.append(" + ");
            out.append_operand(self.as_dyn(), start);
        }
        out.push(')');
    }

    /// Characters of `str` from the 0 based `start`, `end - start` of them when `end` is given.
    ///
    /// Numbers known while building are folded into the SQL text, anything else is computed by
    /// the database.
    fn substring(
        &self,
        out: &mut SqlBuffer,
        str: &dyn FilterValue,
        start: &dyn FilterValue,
        end: Option<&dyn FilterValue>,
    ) {
        out.append(self.capabilities().substring_function_name())
            .push('(');
        out.append_operand(self.as_dyn(), str);
        out.append(", ");
        let start_class = start.classify();
        match start_class {
            Classification::Literal(v) => {
                out.append_integer(v.wrapping_add(1));
            }
            Classification::Dynamic => {
                out.append("((");
                out.append_operand(self.as_dyn(), start);
                out.append(") + 1)");
            }
        }
        if let Some(end) = end {
            out.append(", ");
            match (start_class, end.classify()) {
                (Classification::Literal(s), Classification::Literal(e)) => {
                    out.append_integer(e.wrapping_sub(s));
                }
                _ => {
                    out.append("((");
                    out.append_operand(self.as_dyn(), end);
                    out.append(") - (");
                    out.append_operand(self.as_dyn(), start);
                    out.append("))");
                }
            }
        }
        out.push(')');
    }

    /// Render `lhs` cross joined with `rhs`.
    fn cross_join(&self, out: &mut SqlBuffer, lhs: &TableRef, rhs: &TableRef) {
        let caps = self.capabilities();
        self.write_table_ref(out, lhs);
        out.push(' ').append(caps.cross_join_clause()).push(' ');
        self.write_table_ref(out, rhs);
        if caps.requires_condition_for_cross_join() {
            out.append(" ON (1 = 1)");
        }
    }

    /// Whether a SELECT of this shape can carry the locking clause.
    fn supports_locking(&self, shape: &SelectShape) -> bool {
        let caps = self.capabilities();
        if shape.aggregate || !caps.supports_select_for_update() {
            return false;
        }
        if shape.range && !caps.supports_locking_with_select_range() {
            return false;
        }
        if shape.tables > 1 && !caps.supports_locking_with_multiple_tables() {
            return false;
        }
        if shape.order_by && !caps.supports_locking_with_order_clause() {
            return false;
        }
        if shape.inner_join && !caps.supports_locking_with_inner_join() {
            return false;
        }
        if shape.outer_join && !caps.supports_locking_with_outer_join() {
            return false;
        }
        if shape.distinct && !caps.supports_locking_with_distinct_clause() {
            return false;
        }
        true
    }

    /// Append the locking clause when the SELECT shape allows it, returns whether it was added.
    fn for_update_clause(&self, out: &mut SqlBuffer, shape: &SelectShape) -> bool {
        if !self.supports_locking(shape) {
            log::warn!(
                "{} cannot lock rows of this select ({:?}), the query will run without a lock",
                self.platform(),
                shape
            );
            return false;
        }
        out.push(' ').append(self.capabilities().for_update_clause());
        true
    }
}

fn write_time_of_day(out: &mut SqlBuffer, value: &Time) {
    let _ = write!(
        out,
        "{:02}:{:02}:{:02}",
        value.hour(),
        value.minute(),
        value.second()
    );
    let mut subsecond = value.nanosecond();
    if subsecond != 0 {
        let mut width = 9;
        while subsecond % 10 == 0 {
            subsecond /= 10;
            width -= 1;
        }
        let _ = write!(out, ".{:0width$}", subsecond);
    }
}

/// Portable dictionary, used when no vendor specific one matches.
#[derive(Default, Debug, Clone)]
pub struct GenericDictionary {
    capabilities: Capabilities,
}

impl GenericDictionary {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }
}

impl Dictionary for GenericDictionary {
    fn as_dyn(&self) -> &dyn Dictionary {
        self
    }
    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }
}
