// serde helpers for loosely typed backend payloads

// accepts a JSON string or number and keeps it as text; record ids are
// opaque to the client whatever the backend's column type is
pub mod string_or_number {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde::de::Error;
    use serde_json::Value;

    pub fn serialize<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(D::Error::custom(format!("expected string or number, found {}", other))),
        }
    }
}

// null or missing strings decode as empty text
pub mod null_as_empty {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let value: Option<String> = Option::deserialize(deserializer)?;
        Ok(value.unwrap_or_default())
    }
}
