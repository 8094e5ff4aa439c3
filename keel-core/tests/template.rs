#[cfg(test)]
mod tests {
    use keel_core::{
        Capabilities, Dictionary, FilterValue, GenericDictionary, Operand, SqlBuffer, Template,
    };

    #[test]
    fn arity() {
        assert_eq!(Template::from("NOW()").arity().unwrap(), 0);
        assert_eq!(Template::from("UPPER({0})").arity().unwrap(), 1);
        assert_eq!(Template::from("({0} || {1})").arity().unwrap(), 2);
        assert_eq!(Template::from("F({1}, {0}, {1})").arity().unwrap(), 2);
        assert!(Template::from("UPPER({0").arity().is_err());
        assert!(Template::from("UPPER({x})").arity().is_err());
    }

    #[test]
    fn write() {
        let dictionary = GenericDictionary::new();
        let mut out = SqlBuffer::new();
        Template::from("F({1}, {0}, {1})")
            .write(
                &dictionary,
                &mut out,
                &[&Operand::literal("a"), &Operand::parameter(1)],
            )
            .unwrap();
        assert_eq!(out, "F(?, 'a', ?)");
        assert_eq!(out.parameters().len(), 2);
        assert_eq!(Template::new(String::from("X({0})")).to_string(), "X({0})");
    }

    #[test]
    fn missing_operand() {
        let dictionary = GenericDictionary::with_capabilities(
            Capabilities::builder()
                .platform("Broken")
                .string_length_function("LEN({0}, {1})")
                .build(),
        );
        let mut out = SqlBuffer::new();
        out.append("SELECT ");
        let error = dictionary
            .string_length(&mut out, &Operand::column("name"))
            .unwrap_err();
        let message = format!("{:#}", error);
        assert!(message.contains("While writing a Broken fragment"), "{}", message);
        assert!(message.contains("{1}"), "{}", message);
        assert_eq!(out, "SELECT ");
    }

    #[test]
    fn malformed() {
        let dictionary = GenericDictionary::with_capabilities(
            Capabilities::builder()
                .to_upper_case_function("UPPER({0)")
                .to_lower_case_function("LOWER({first})")
                .build(),
        );
        let value = Operand::column("name");
        let args: [&dyn FilterValue; 1] = [&value];
        let mut out = SqlBuffer::new();
        assert!(dictionary.to_upper_case(&mut out, args[0]).is_err());
        assert!(dictionary.to_lower_case(&mut out, args[0]).is_err());
        assert!(out.is_empty());
    }
}
