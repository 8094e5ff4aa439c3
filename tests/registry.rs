#[cfg(test)]
mod tests {
    use keel::{
        Capabilities, CapabilitiesBuilder, Dictionary, DictionaryFactory, DictionaryRegistry,
        GenericDictionary, Operand, SharedDictionary, SqlBuffer, Value,
    };
    use keel_tests::{execute_tests, init_logs, silent_logs};
    use std::sync::Arc;

    struct H2Factory;

    impl DictionaryFactory for H2Factory {
        fn defaults(&self) -> CapabilitiesBuilder {
            Capabilities::builder()
                .platform("H2")
                .varchar_cast_length(2000)
                .string_length_function("LENGTH({0})")
        }
        fn construct(&self, capabilities: Capabilities) -> SharedDictionary {
            Arc::new(GenericDictionary::with_capabilities(capabilities))
        }
    }

    #[test]
    fn builtin_dictionaries() {
        init_logs();
        let registry = DictionaryRegistry::new();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            ["db2", "db2i", "db2zos", "derby", "generic"]
        );
        for name in registry.names() {
            let dictionary = registry.get(name).unwrap();
            execute_tests(dictionary.as_ref());
        }
        assert_eq!(registry.get("DB2").unwrap().platform(), "DB2");
        assert_eq!(registry.get("db2zos").unwrap().platform(), "DB2 for z/OS");
        assert_eq!(registry.get("generic").unwrap().platform(), "Generic");
        assert_eq!(DictionaryRegistry::default().names().count(), 5);
        assert_eq!(DictionaryRegistry::empty().names().count(), 0);
    }

    #[test]
    fn unknown_dictionary() {
        let registry = DictionaryRegistry::new();
        let error = registry.get("oracle").err().expect("oracle is not registered");
        let message = format!("{:#}", error);
        assert!(message.contains("oracle"), "{}", message);
        assert!(message.contains("derby"), "{}", message);
    }

    #[test]
    fn detect() {
        let registry = DictionaryRegistry::new();
        for (product, version, platform) in [
            ("Apache Derby", "10.16.1.1", "Apache Derby"),
            ("DB2/LINUXX8664", "SQL11058", "DB2"),
            ("DB2 UDB for AS/400", "07.04.0000 V7R4m0", "DB2 for i"),
            ("DB2 for IBM i", "07.05.0000 V7R5m0", "DB2 for i"),
            ("DB2", "DSN12015", "DB2 for z/OS"),
        ] {
            let dictionary = registry.detect(product, version).unwrap();
            assert_eq!(dictionary.platform(), platform);
        }
        let zos = registry.detect("DB2", "DSN12015").unwrap();
        assert_eq!(zos.capabilities().max_column_name_length(), 30);
        assert_eq!(zos.capabilities().max_constraint_name_length(), 18);
        let dictionary;
        silent_logs! {
            dictionary = registry.detect("PostgreSQL", "16.2").unwrap();
        }
        assert_eq!(dictionary.platform(), "Generic");
    }

    #[test]
    fn register() {
        let mut registry = DictionaryRegistry::new();
        registry.register("H2", H2Factory);
        let dictionary = registry.get("h2").unwrap();
        assert_eq!(dictionary.platform(), "H2");
        assert_eq!(dictionary.capabilities().varchar_cast_length(), 2000);
        execute_tests(dictionary.as_ref());

        registry.register("derby", H2Factory);
        assert_eq!(registry.get("derby").unwrap().platform(), "H2");
        assert_eq!(registry.names().count(), 6);
    }

    #[test]
    fn from_url() {
        let registry = DictionaryRegistry::new();
        let dictionary = registry
            .from_url("derby://localhost?varchar_cast_length=4000&supports_auto_assign=false")
            .unwrap();
        let caps = dictionary.capabilities();
        assert_eq!(dictionary.platform(), "Apache Derby");
        assert_eq!(caps.varchar_cast_length(), 4000);
        assert!(!caps.supports_auto_assign());
        assert_eq!(dictionary.last_generated_key_query(), None);

        let mut out = SqlBuffer::new();
        dictionary.substring(&mut out, &Operand::literal("abc"), &Operand::literal(2), None);
        assert_eq!(out, "SUBSTR(CAST(('abc') AS VARCHAR(4000)), 3)");

        // Order of the pairs does not matter
        let dictionary = registry
            .from_url("derby://localhost?supports_auto_assign=false&varchar_cast_length=300")
            .unwrap();
        let mut out = SqlBuffer::new();
        dictionary
            .concatenate(&mut out, &Operand::column("a"), &Operand::column("b"))
            .unwrap();
        assert_eq!(
            out,
            r#"(CAST("a" AS VARCHAR(300)) || CAST("b" AS VARCHAR(300)))"#
        );

        let dictionary = registry
            .from_url("db2://db.example.com:50000/SAMPLE?max_column_name_length=18&for_update_clause=FOR%20UPDATE%20WITH%20RS")
            .unwrap();
        let caps = dictionary.capabilities();
        assert_eq!(caps.max_column_name_length(), 18);
        assert_eq!(caps.for_update_clause(), "FOR UPDATE WITH RS");
        assert_eq!(caps.varchar_cast_length(), 1000);

        let dictionary = registry.from_url("generic://localhost").unwrap();
        assert_eq!(dictionary.capabilities(), &Capabilities::default());
    }

    #[test]
    fn from_url_errors() {
        let registry = DictionaryRegistry::new();
        silent_logs! {
            for url in [
                "not a url",
                "oracle://localhost",
                "db2://localhost?supports_time_travel=true",
                "db2://localhost?varchar_cast_length=wide",
                "derby://localhost?supports_auto_assign=maybe",
            ] {
                let error = registry.from_url(url).err().expect(url);
                assert!(format!("{:#}", error).contains(url), "{:#}", error);
            }
        }
        let error;
        silent_logs! {
            error = registry.from_url("db2://localhost?varchar_cast_length=wide").err();
        }
        let message = format!("{:#}", error.expect("The url must be rejected"));
        assert!(message.contains("expects an integer"), "{}", message);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn shared_between_tasks() {
        let dictionary = DictionaryRegistry::new().get("db2").unwrap();
        let tasks = (0..32_i64)
            .map(|i| {
                let dictionary = dictionary.clone();
                tokio::spawn(async move {
                    let text = Operand::column("name");
                    let mut start = Operand::parameter(i);
                    let mut folded = SqlBuffer::new();
                    dictionary.substring(&mut folded, &text, &start, None);
                    start.bind(Value::Int64(None));
                    let mut dynamic = SqlBuffer::new();
                    dictionary.substring(&mut dynamic, &text, &start, None);
                    (i, folded, dynamic)
                })
            })
            .collect::<Vec<_>>();
        for task in tasks {
            let (i, folded, dynamic) = task.await.expect("Task panicked");
            assert_eq!(
                folded,
                format!(r#"SUBSTR(CAST(("name") AS VARCHAR(1000)), {})"#, i + 1).as_str()
            );
            assert!(folded.parameters().is_empty());
            assert_eq!(
                dynamic,
                r#"SUBSTR(CAST(("name") AS VARCHAR(1000)), CAST((?) AS INTEGER) + 1)"#
            );
            assert_eq!(dynamic.parameters(), &[Value::Int64(None)]);
        }
    }
}
