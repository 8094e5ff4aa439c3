use crate::Db2Platform;
use keel_core::{
    Capabilities, Classification, Dictionary, FilterValue, Result, SqlBuffer, Value,
};
use std::fmt::Write;

/// Operand of a string template cast to a bounded VARCHAR: `CAST(<operand> AS VARCHAR(n))`.
#[derive(Debug)]
struct VarcharCast<'a> {
    value: &'a dyn FilterValue,
    length: u32,
}

impl FilterValue for VarcharCast<'_> {
    fn write_query(&self, dictionary: &dyn Dictionary, out: &mut SqlBuffer) {
        out.append("CAST(");
        out.append_operand(dictionary, self.value);
        let _ = write!(out, " AS VARCHAR({}))", self.length);
    }
}

/// Dictionary of a DB2 family database.
#[derive(Debug, Clone)]
pub struct Db2Dictionary {
    platform: Db2Platform,
    capabilities: Capabilities,
}

impl Db2Dictionary {
    pub fn new(platform: Db2Platform) -> Self {
        Self::with_capabilities(platform, platform.capabilities().build())
    }

    /// Dictionary with capabilities already specialized by the caller, usually starting from
    /// [`Db2Platform::capabilities`].
    pub fn with_capabilities(platform: Db2Platform, capabilities: Capabilities) -> Self {
        Self {
            platform,
            capabilities,
        }
    }

    pub fn db2_platform(&self) -> Db2Platform {
        self.platform
    }

    /// Cast an operand to a bounded VARCHAR, the family rejects uncast operands in string
    /// functions.
    fn write_varchar_cast(&self, out: &mut SqlBuffer, value: &dyn FilterValue) {
        out.append("CAST((");
        out.append_operand(self, value);
        let _ = write!(
            out,
            ") AS VARCHAR({}))",
            self.capabilities.varchar_cast_length()
        );
    }

    fn write_integer_cast(&self, out: &mut SqlBuffer, value: &dyn FilterValue) {
        out.append("CAST((");
        out.append_operand(self, value);
        out.append(") AS INTEGER)");
    }
}

impl Dictionary for Db2Dictionary {
    fn as_dyn(&self) -> &dyn Dictionary {
        self
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn write_value_bool(&self, out: &mut SqlBuffer, value: bool) {
        out.push(if value { '1' } else { '0' });
    }

    fn write_value_blob(&self, out: &mut SqlBuffer, value: &[u8]) {
        out.append("BLOB(X'")
            .append(&hex::encode_upper(value))
            .append("')");
    }

    fn add_cast_as_type(&self, func: &str, operand: &dyn FilterValue) -> String {
        if !operand.is_parameter() {
            return func.to_string();
        }
        let type_name = self.type_name(
            operand.value().unwrap_or(&Value::Null),
            Some(self.capabilities.varchar_cast_length()),
            false,
        );
        func.replace("{0}", &format!("CAST({{0}} AS {})", type_name))
    }

    fn concatenate(
        &self,
        out: &mut SqlBuffer,
        lhs: &dyn FilterValue,
        rhs: &dyn FilterValue,
    ) -> Result<()> {
        let length = self.capabilities.varchar_cast_length();
        self.write_template(
            out,
            self.capabilities.concatenate_function(),
            &[
                &VarcharCast { value: lhs, length },
                &VarcharCast { value: rhs, length },
            ],
        )
    }

    fn index_of(
        &self,
        out: &mut SqlBuffer,
        str: &dyn FilterValue,
        find: &dyn FilterValue,
        start: Option<&dyn FilterValue>,
    ) {
        out.append("(LOCATE(");
        self.write_varchar_cast(out, find);
        out.append(", ");
        self.write_varchar_cast(out, str);
        if let Some(start) = start {
            // 0 based start to 1 based position
            out.append(", ");
            self.write_integer_cast(out, start);
            out.append(" + 1");
        }
        out.append(") - 1)");
    }

    fn substring(
        &self,
        out: &mut SqlBuffer,
        str: &dyn FilterValue,
        start: &dyn FilterValue,
        end: Option<&dyn FilterValue>,
    ) {
        out.append(self.capabilities.substring_function_name())
            .push('(');
        self.write_varchar_cast(out, str);
        out.append(", ");
        let start_class = start.classify();
        match start_class {
            Classification::Literal(s) => {
                out.append_integer(s.wrapping_add(1));
            }
            Classification::Dynamic => {
                self.write_integer_cast(out, start);
                out.append(" + 1");
            }
        }
        if let Some(end) = end {
            out.append(", ");
            // SUBSTR takes a length, not an end position
            match (start_class, end.classify()) {
                (Classification::Literal(s), Classification::Literal(e)) => {
                    out.append_integer(e.wrapping_sub(s));
                }
                _ => {
                    self.write_integer_cast(out, end);
                    out.append(" - ");
                    self.write_integer_cast(out, start);
                }
            }
        }
        out.push(')');
    }
}
