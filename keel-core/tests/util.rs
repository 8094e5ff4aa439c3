#[cfg(test)]
mod tests {
    use keel_core::{SqlBuffer, separated_by, to_snake_case, truncate_name};

    #[test]
    fn snake_case() {
        assert_eq!(to_snake_case(""), "");
        assert_eq!(to_snake_case("test"), "test");
        assert_eq!(to_snake_case("tesT"), "tes_t");
        assert_eq!(to_snake_case("TesT"), "tes_t");
        assert_eq!(to_snake_case("AnoThEr_Test"), "ano_th_er_test");
        assert_eq!(to_snake_case("orderId"), "order_id");
    }

    #[test]
    fn truncate() {
        assert_eq!(truncate_name("orders", 3), "ord");
        assert_eq!(truncate_name("orders", 6), "orders");
        assert_eq!(truncate_name("orders", 0), "");
        assert_eq!(truncate_name("ñandú", 4), "ñand");
    }

    #[test]
    fn separated() {
        let mut out = SqlBuffer::new();
        separated_by(
            &mut out,
            ["a", "", "b", "c"],
            |out, v| {
                out.append(v);
            },
            ", ",
        );
        assert_eq!(out, "a, b, c");
    }
}
