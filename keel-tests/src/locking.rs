use crate::silent_logs;
use keel_core::{Dictionary, SelectShape, SqlBuffer};

pub fn locking(dictionary: &dyn Dictionary) {
    let caps = dictionary.capabilities();
    let single = SelectShape::single_table();
    assert_eq!(
        dictionary.supports_locking(&single),
        caps.supports_select_for_update()
    );
    assert!(!dictionary.supports_locking(&SelectShape {
        aggregate: true,
        ..single
    }));
    assert_eq!(
        dictionary.supports_locking(&SelectShape { tables: 2, ..single }),
        caps.supports_select_for_update() && caps.supports_locking_with_multiple_tables()
    );
    assert_eq!(
        dictionary.supports_locking(&SelectShape {
            order_by: true,
            ..single
        }),
        caps.supports_select_for_update() && caps.supports_locking_with_order_clause()
    );

    let mut out = SqlBuffer::new();
    out.append("SELECT 1 FROM t");
    if dictionary.for_update_clause(&mut out, &single) {
        assert!(out.sql().ends_with(caps.for_update_clause()));
    } else {
        assert_eq!(out.sql(), "SELECT 1 FROM t");
    }

    let mut out = SqlBuffer::new();
    let added;
    silent_logs! {
        added = dictionary.for_update_clause(&mut out, &SelectShape { aggregate: true, ..single });
    }
    assert!(!added);
    assert!(out.is_empty());
}
