#[cfg(test)]
mod tests {
    use keel_core::{Classification, FilterValue, Operand, Value};
    use rust_decimal::Decimal;

    #[test]
    fn value_none() {
        assert_eq!(Value::Null, Value::Null);
        assert!(Value::Null.is_null());
        assert!(Value::Int32(None).is_null());
        assert!(!Value::Int32(Some(0)).is_null());
        assert_ne!(Value::Int32(None), Value::Int64(None));
        assert_eq!(Value::Varchar(None), Value::Varchar(None));
        assert_ne!(Value::Float32(Some(1.0)), Value::Null);
    }

    #[test]
    fn value_from() {
        assert_eq!(Value::from(7), Value::Int32(Some(7)));
        assert_eq!(Value::from(7_u64), Value::UInt64(Some(7)));
        assert_eq!(Value::from("abc"), Value::Varchar(Some("abc".into())));
        assert_eq!(Value::from(None::<i16>), Value::Int16(None));
        assert_eq!(
            Value::from(vec![1_u8, 2]),
            Value::Blob(Some(vec![1, 2].into_boxed_slice()))
        );
        assert!(Value::from(Decimal::ONE).same_type(&Value::Decimal(None, 0, 0)));
        assert!(!Value::Decimal(None, 10, 2).same_type(&Value::Decimal(None, 0, 0)));
    }

    #[test]
    fn value_as_i64() {
        assert_eq!(Value::Int8(Some(-3)).as_i64(), Some(-3));
        assert_eq!(Value::UInt32(Some(u32::MAX)).as_i64(), Some(u32::MAX as i64));
        assert_eq!(Value::UInt64(Some(42)).as_i64(), Some(42));
        assert_eq!(Value::UInt64(Some(u64::MAX)).as_i64(), None);
        assert_eq!(Value::Float64(Some(2.9)).as_i64(), Some(2));
        assert_eq!(Value::Float64(Some(-2.9)).as_i64(), Some(-2));
        assert_eq!(Value::Float32(Some(7.0)).as_i64(), Some(7));
        assert_eq!(Value::Float64(Some(f64::NAN)).as_i64(), None);
        assert_eq!(Value::Float64(Some(f64::INFINITY)).as_i64(), None);
        assert_eq!(Value::Float64(Some(1e19)).as_i64(), None);
        assert_eq!(Value::Decimal(Some(Decimal::new(78, 1)), 3, 1).as_i64(), Some(7));
        assert_eq!(Value::Int32(None).as_i64(), None);
        assert_eq!(Value::Varchar(Some("12".into())).as_i64(), None);
        assert_eq!(Value::Boolean(Some(true)).as_i64(), None);
        assert!(Value::Decimal(None, 0, 0).is_numeric());
        assert!(!Value::Varchar(None).is_numeric());
    }

    #[test]
    fn classification() {
        assert_eq!(Operand::literal(5).classify(), Classification::Literal(5));
        assert_eq!(Operand::parameter(5_i64).classify(), Classification::Literal(5));
        assert_eq!(Operand::literal(2.5).classify(), Classification::Literal(2));
        assert_eq!(Operand::literal("5").classify(), Classification::Dynamic);
        assert_eq!(Operand::literal(Value::Null).classify(), Classification::Dynamic);
        assert_eq!(
            Operand::parameter(Value::Int32(None)).classify(),
            Classification::Dynamic
        );
        assert_eq!(Operand::column("id").classify(), Classification::Dynamic);
        assert_eq!(Operand::raw("1 + 1").classify(), Classification::Dynamic);

        let mut operand = Operand::parameter(Value::Int32(None));
        assert_eq!(operand.classify(), Classification::Dynamic);
        operand.bind(3);
        assert_eq!(operand.classify(), Classification::Literal(3));
        assert_eq!((&operand).classify(), Classification::Literal(3));
        operand.bind("three");
        assert_eq!(operand.classify(), Classification::Dynamic);

        let mut column = Operand::column("id");
        column.bind(3);
        assert_eq!(column, Operand::column("id"));
    }
}
