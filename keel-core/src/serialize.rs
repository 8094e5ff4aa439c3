use crate::{Context, Result, Value};
use serde::{Serialize, de::DeserializeOwned};

/// Bytes stored in a binary column for an object value, `None` stays NULL.
pub fn serialize<T: Serialize + ?Sized>(value: Option<&T>) -> Result<Option<Vec<u8>>> {
    value
        .map(|v| serde_json::to_vec(v).context("Could not serialize the value of a binary column"))
        .transpose()
}

/// Serialized object as a blob value, a typed NULL when there is no object.
pub fn serialize_value<T: Serialize + ?Sized>(value: Option<&T>) -> Result<Value> {
    Ok(Value::Blob(serialize(value)?.map(Vec::into_boxed_slice)))
}

/// Object read back from the bytes of a binary column.
pub fn deserialize<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).context("Could not deserialize the value of a binary column")
}
