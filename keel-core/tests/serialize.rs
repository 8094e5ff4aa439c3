#[cfg(test)]
mod tests {
    use keel_core::{
        Dictionary, GenericDictionary, SqlBuffer, Value, deserialize, serialize, serialize_value,
    };
    use serde::{Deserialize, Serialize, Serializer, ser::Error as _};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Preferences {
        theme: String,
        page_size: u32,
        tags: Vec<String>,
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("open handles cannot be stored"))
        }
    }

    #[test]
    fn serialize_none() {
        assert_eq!(serialize::<Preferences>(None).unwrap(), None);
        assert_eq!(
            serialize_value::<Preferences>(None).unwrap(),
            Value::Blob(None)
        );
    }

    #[test]
    fn serialize_object() {
        let preferences = Preferences {
            theme: "dark".into(),
            page_size: 50,
            tags: vec!["admin".into(), "beta".into()],
        };
        let bytes = serialize(Some(&preferences))
            .unwrap()
            .expect("An object must produce bytes");
        assert!(!bytes.is_empty());
        assert_eq!(deserialize::<Preferences>(&bytes).unwrap(), preferences);

        let value = serialize_value(Some(&preferences)).unwrap();
        let Value::Blob(Some(stored)) = &value else {
            panic!("Expected a blob, got {:?}", value);
        };
        assert_eq!(&stored[..], bytes.as_slice());

        let mut out = SqlBuffer::new();
        GenericDictionary::new().write_value(&mut out, &value);
        assert!(out.sql().starts_with("X'7B"), "got `{}`", out);
    }

    #[test]
    fn serialize_failure() {
        let error = serialize(Some(&Unserializable)).unwrap_err();
        let message = format!("{:#}", error);
        assert!(message.contains("open handles cannot be stored"), "{}", message);
        assert!(serialize_value(Some(&Unserializable)).is_err());
        assert!(deserialize::<Preferences>(b"not json").is_err());
    }
}
