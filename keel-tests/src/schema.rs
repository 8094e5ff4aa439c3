use crate::silent_logs;
use keel_core::{ColumnDef, Dictionary, SqlBuffer, Value};
use rust_decimal::Decimal;

pub fn column_types(dictionary: &dyn Dictionary) {
    let caps = dictionary.capabilities();

    let mut out = SqlBuffer::new();
    dictionary.write_column_type(
        &mut out,
        &ColumnDef::new("price", Value::Decimal(Some(Decimal::ZERO), 10, 2)),
    );
    assert!(out.sql().starts_with(caps.numeric_type_name()));
    assert_eq!(
        out.sql().ends_with("(10,2)"),
        !caps.is_fixed_size_type(caps.numeric_type_name()),
        "{}: got `{}`",
        dictionary.platform(),
        out
    );

    let mut out = SqlBuffer::new();
    dictionary.write_column_type(
        &mut out,
        &ColumnDef::new("title", Value::Varchar(None)).length(40),
    );
    assert_eq!(
        out.sql().ends_with("(40)"),
        !caps.is_fixed_size_type(caps.varchar_type_name())
    );
}

pub fn identity(dictionary: &dyn Dictionary) {
    let caps = dictionary.capabilities();
    let column = ColumnDef::new("id", Value::Int64(None)).auto_assign();
    let mut out = SqlBuffer::new();
    silent_logs! {
        dictionary.write_column_declaration(&mut out, &column);
    }
    assert!(out.sql().starts_with("\"id\" "));
    assert!(out.sql().contains(" NOT NULL"));
    let generated = caps.supports_auto_assign() && !caps.auto_assign_clause().is_empty();
    assert_eq!(
        out.sql().ends_with(caps.auto_assign_clause()) && generated,
        generated
    );
    assert_eq!(
        dictionary.last_generated_key_query().is_some(),
        caps.supports_auto_assign() && !caps.last_generated_key_query().is_empty()
    );
}
