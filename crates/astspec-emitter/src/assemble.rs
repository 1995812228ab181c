//! Final document assembly.

use serde_json::{Map, Value, json};

/// The `$schema` URI of the emitted document.
pub const SCHEMA_URI: &str = "http://json-schema.org/schema#";

/// Wrap the resolved definitions in the schema envelope.
///
/// The root entry is removed from the map and its top-level fields are merged
/// as siblings of `$schema`/`definitions`; the remaining definitions are
/// emitted in ascending ordinal key order.
pub fn assemble(mut definitions: Map<String, Value>, root_name: &str) -> Value {
    let root = definitions.remove(root_name);
    if root.is_none() {
        tracing::warn!(root_name, "root definition missing from resolved set");
    }

    let mut entries: Vec<(String, Value)> = definitions.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    let mut sorted = Map::new();
    for (name, fragment) in entries {
        sorted.insert(name, fragment);
    }

    let mut document = Map::new();
    document.insert("$schema".to_string(), json!(SCHEMA_URI));
    document.insert("definitions".to_string(), Value::Object(sorted));
    if let Some(Value::Object(fields)) = root {
        for (key, value) in fields {
            document.insert(key, value);
        }
    }
    Value::Object(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_definitions_and_merges_root() {
        let mut definitions = Map::new();
        definitions.insert("Zed".to_string(), json!({ "type": "string" }));
        definitions.insert(
            "Root".to_string(),
            json!({ "type": "object", "properties": {}, "required": [] }),
        );
        definitions.insert("Alpha".to_string(), json!({ "type": "number" }));

        let document = assemble(definitions, "Root");
        let keys: Vec<&String> = document.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec!["$schema", "definitions", "type", "properties", "required"]
        );
        let definition_keys: Vec<&String> =
            document["definitions"].as_object().unwrap().keys().collect();
        assert_eq!(definition_keys, vec!["Alpha", "Zed"]);
        assert_eq!(document["$schema"], SCHEMA_URI);
    }

    #[test]
    fn missing_root_leaves_envelope_bare() {
        let mut definitions = Map::new();
        definitions.insert("A".to_string(), json!({ "type": "string" }));
        let document = assemble(definitions, "Root");
        let keys: Vec<&String> = document.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["$schema", "definitions"]);
    }

    #[test]
    fn ordinal_ordering_is_case_sensitive() {
        let mut definitions = Map::new();
        definitions.insert("b".to_string(), json!({}));
        definitions.insert("B".to_string(), json!({}));
        definitions.insert("a".to_string(), json!({}));
        let document = assemble(definitions, "Root");
        let keys: Vec<&String> =
            document["definitions"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["B", "a", "b"]);
    }
}
