//! Tolerant field decoders for bridge response bodies
//!
//! The bridge is a thin wrapper around the editor's model API, and the shape
//! of individual fields varies between versions. These helpers are used with
//! `#[serde(deserialize_with = ...)]` so that a field of an unexpected type
//! degrades to a default instead of failing the whole body.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Strings as-is, numbers and booleans as their JSON text, anything else `None`
pub(crate) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        value @ (Value::Number(_) | Value::Bool(_)) => Some(value.to_string()),
        _ => None,
    })
}

/// Any non-null value as text; structured values are rendered as JSON
pub(crate) fn message<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// `true` only for a JSON `true`
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool().unwrap_or(false))
}

/// Non-negative integers, anything else `None`
pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_u64())
}

/// Like [`number`] but defaulting to zero
pub(crate) fn count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number(deserializer)?
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0))
}

/// Objects decoded as `T`, anything else `None`
pub(crate) fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

/// Arrays decoded element by element; elements that are not objects
/// become `T::default()`, a non-array becomes an empty list
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(_) => serde_json::from_value(item).unwrap_or_default(),
                _ => T::default(),
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Decode a whole response body.
///
/// Non-object bodies (`[]`, `"ok"`, `null`) carry none of the expected
/// fields and yield `T::default()`.
pub fn from_body<T>(body: Value) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    match body {
        Value::Object(_) => serde_json::from_value(body),
        _ => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "text")]
        text: Option<String>,
        #[serde(default, deserialize_with = "message")]
        message: Option<String>,
        #[serde(default, deserialize_with = "flag")]
        flag: bool,
        #[serde(default, deserialize_with = "count")]
        count: usize,
        #[serde(default, deserialize_with = "list")]
        items: Vec<Item>,
    }

    #[derive(Debug, Default, PartialEq, Deserialize)]
    struct Item {
        #[serde(default, deserialize_with = "text")]
        name: Option<String>,
    }

    fn decode(value: Value) -> Fields {
        from_body(value).unwrap()
    }

    #[test]
    fn test_text_accepts_scalars_only() {
        assert_eq!(decode(json!({ "text": "a" })).text.as_deref(), Some("a"));
        assert_eq!(decode(json!({ "text": 1 })).text.as_deref(), Some("1"));
        assert_eq!(decode(json!({ "text": true })).text.as_deref(), Some("true"));
        assert_eq!(decode(json!({ "text": { "a": 1 } })).text, None);
        assert_eq!(decode(json!({ "text": null })).text, None);
    }

    #[test]
    fn test_message_renders_structures_as_json() {
        let fields = decode(json!({ "message": { "message": "no model" } }));
        assert_eq!(fields.message.as_deref(), Some(r#"{"message":"no model"}"#));
        assert_eq!(decode(json!({ "message": null })).message, None);
    }

    #[test]
    fn test_flag_and_count_fall_back() {
        let fields = decode(json!({ "flag": "yes", "count": "3" }));
        assert!(!fields.flag);
        assert_eq!(fields.count, 0);

        let fields = decode(json!({ "flag": true, "count": 3 }));
        assert!(fields.flag);
        assert_eq!(fields.count, 3);
    }

    #[test]
    fn test_list_tolerates_odd_elements() {
        let fields = decode(json!({ "items": [{ "name": "a" }, 7, { "name": [] }] }));
        assert_eq!(
            fields.items,
            vec![
                Item { name: Some("a".to_string()) },
                Item::default(),
                Item::default(),
            ]
        );
        assert!(decode(json!({ "items": "none" })).items.is_empty());
    }

    #[test]
    fn test_non_object_body_is_default() {
        assert_eq!(decode(json!([1, 2])), Fields::default());
        assert_eq!(decode(json!("ok")), Fields::default());
    }
}
