use keel_core::{Dictionary, Operand, SqlBuffer, TableRef, TrimSpec, Value};

pub fn index_of_start(dictionary: &dyn Dictionary) {
    let text = Operand::column("title");
    let find = Operand::literal("x");

    let mut without = SqlBuffer::new();
    dictionary.index_of(&mut without, &text, &find, None);
    assert!(without.sql().contains("'x'"));
    assert!(without.sql().contains("- 1"), "got `{}`", without);
    assert!(without.parameters().is_empty());

    let mut with = SqlBuffer::new();
    let start = Operand::parameter(Value::Int32(None));
    dictionary.index_of(&mut with, &text, &find, Some(&start));
    assert!(with.len() > without.len());
    assert!(!with.parameters().is_empty());
    assert!(with.sql().ends_with(')'));
}

pub fn templates(dictionary: &dyn Dictionary) {
    let lhs = Operand::literal("a");
    let rhs = Operand::column("b");

    let mut out = SqlBuffer::new();
    dictionary
        .concatenate(&mut out, &lhs, &rhs)
        .expect("Concatenation must be renderable");
    let (a, b) = (out.sql().find("'a'"), out.sql().find("\"b\""));
    assert!(
        matches!((a, b), (Some(a), Some(b)) if a < b),
        "{}: operands out of order in `{}`",
        dictionary.platform(),
        out
    );

    for side in [TrimSpec::Leading, TrimSpec::Trailing, TrimSpec::Both] {
        let mut out = SqlBuffer::new();
        dictionary
            .trim(&mut out, &rhs, side)
            .expect("Trim must be renderable");
        assert!(out.sql().contains("\"b\""), "{:?}: `{}`", side, out);
    }

    let mut out = SqlBuffer::new();
    dictionary
        .string_length(&mut out, &rhs)
        .expect("String length must be renderable");
    assert!(out.sql().contains("\"b\""));

    let mut out = SqlBuffer::new();
    dictionary
        .to_upper_case(&mut out, &rhs)
        .expect("Upper case must be renderable");
    dictionary
        .to_lower_case(&mut out, &lhs)
        .expect("Lower case must be renderable");
    assert!(out.sql().contains("\"b\"") && out.sql().contains("'a'"));
}

pub fn cross_join(dictionary: &dyn Dictionary) {
    let caps = dictionary.capabilities();
    let mut out = SqlBuffer::new();
    dictionary.cross_join(
        &mut out,
        &TableRef::new("orders").alias("o"),
        &TableRef::new("items").alias("i"),
    );
    assert!(out.sql().starts_with("\"orders\" o "));
    assert!(out.sql().contains(caps.cross_join_clause()));
    assert_eq!(
        out.sql().ends_with(" ON (1 = 1)"),
        caps.requires_condition_for_cross_join(),
        "got `{}`",
        out
    );
}
