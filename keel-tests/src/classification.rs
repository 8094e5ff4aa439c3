use keel_core::{Classification, Dictionary, FilterValue, Operand, SqlBuffer, Value};

/// The same operand rebound to another value must be classified again.
pub fn classification(dictionary: &dyn Dictionary) {
    let text = Operand::literal("abcdef");
    let mut start = Operand::parameter(2);
    assert_eq!(start.classify(), Classification::Literal(2));

    let mut folded = SqlBuffer::new();
    dictionary.substring(&mut folded, &text, &start, None);
    assert!(
        folded.sql().ends_with(", 3)"),
        "{}: a known start must be folded, got `{}`",
        dictionary.platform(),
        folded
    );
    assert!(folded.parameters().is_empty());

    start.bind(Value::Int32(None));
    assert_eq!(start.classify(), Classification::Dynamic);
    let mut dynamic = SqlBuffer::new();
    dictionary.substring(&mut dynamic, &text, &start, None);
    assert_eq!(dynamic.parameters(), &[Value::Int32(None)]);
    assert_ne!(folded.sql(), dynamic.sql());

    start.bind(7);
    let mut rebound = SqlBuffer::new();
    dictionary.substring(&mut rebound, &text, &start, None);
    assert!(rebound.sql().ends_with(", 8)"), "got `{}`", rebound);
}

/// Literal start and end fold into a literal length, a dynamic end never does.
pub fn substring_folding(dictionary: &dyn Dictionary) {
    let text = Operand::column("name");
    let start = Operand::literal(1);

    let mut out = SqlBuffer::new();
    dictionary.substring(&mut out, &text, &start, Some(&Operand::literal(4)));
    assert!(
        out.sql().ends_with(", 2, 3)"),
        "{}: got `{}`",
        dictionary.platform(),
        out
    );

    let mut out = SqlBuffer::new();
    let end = Operand::parameter(Value::Int64(None));
    dictionary.substring(&mut out, &text, &start, Some(&end));
    assert!(!out.sql().ends_with(", 2, 3)"));
    assert_eq!(out.parameters(), &[Value::Int64(None)]);
    assert!(out.sql().contains('?'));
}
