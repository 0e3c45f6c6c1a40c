use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Arguments for a single API call.
///
/// Sent as query parameters for `GET`/`HEAD` requests and as a JSON body for
/// every other verb. Built fresh for each call, so arguments never leak from
/// one request into the next.
pub type Params = serde_json::Map<String, Value>;

/// A decoded response body.
///
/// Mailchimp likes to wrap singular results in a one-entry aggregate, so an
/// object or array with exactly one entry is collapsed to its sole value:
/// `{"id": "abc"}` becomes `"abc"`, while `{"id": "abc", "name": "x"}` is
/// kept whole. This is a lossy convenience transform aimed at that habit,
/// not a general JSON rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseCollection(Value);

impl ResponseCollection {
    pub(crate) fn from_body(value: Value) -> Self {
        let collapsed = match value {
            Value::Object(map) if map.len() == 1 => {
                map.into_iter().next().map_or(Value::Null, |(_, v)| v)
            }
            Value::Array(mut items) if items.len() == 1 => items.remove(0),
            other => other,
        };
        Self(collapsed)
    }

    /// Looks up `key` when the collection holds an object, or an index when
    /// it holds an array.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Number of entries: object/array length, 0 for null, 1 for any scalar.
    pub fn len(&self) -> usize {
        match &self.0 {
            Value::Object(map) => map.len(),
            Value::Array(items) => items.len(),
            Value::Null => 0,
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<ResponseCollection> for Value {
    fn from(collection: ResponseCollection) -> Self {
        collection.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_entry_object_collapses_to_its_value() {
        let collection = ResponseCollection::from_body(json!({"a": 1}));
        assert_eq!(collection.into_value(), json!(1));
    }

    #[test]
    fn multi_entry_object_is_kept_whole() {
        let collection = ResponseCollection::from_body(json!({"a": 1, "b": 2}));
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get("b"), Some(&json!(2)));
    }

    #[test]
    fn single_element_array_collapses() {
        let collection = ResponseCollection::from_body(json!([{"id": "x", "name": "y"}]));
        assert_eq!(collection.get("id"), Some(&json!("x")));
    }

    #[test]
    fn null_body_is_empty() {
        let collection = ResponseCollection::from_body(Value::Null);
        assert!(collection.is_empty());
        assert_eq!(collection.as_value(), &Value::Null);
    }

    #[test]
    fn nested_collapse_is_not_recursive() {
        let collection = ResponseCollection::from_body(json!({"lists": [{"id": "x"}]}));
        assert_eq!(collection.into_value(), json!([{"id": "x"}]));
    }
}
