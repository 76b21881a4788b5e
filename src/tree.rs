//! Accessors over the decoded attribute/element tree.
//!
//! The XML decoder upstream flattens attributes into keys carrying a prefix
//! (`@_name`), keeps element text under a text key (`#text`) when the element
//! also has attributes, and emits a list only when an element repeats. These
//! helpers hide all three conventions, plus XML namespace prefixes on element
//! names (`dmn:itemDefinition`, `semantic:definitions`).
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeOptions {
    pub attribute_prefix: String,
    pub text_key: String,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            attribute_prefix: "@_".to_string(),
            text_key: "#text".to_string(),
        }
    }
}

/// `dmn:itemDefinition` → `itemDefinition`.
pub fn local_name(key: &str) -> &str {
    match key.rsplit_once(':') {
        Some((_, local)) => local,
        None => key,
    }
}

fn is_attribute(key: &str, options: &TreeOptions) -> bool {
    !options.attribute_prefix.is_empty() && key.starts_with(&options.attribute_prefix)
}

/// Every child element named `name`, one or many, in document order.
pub fn children<'a>(node: &'a Value, name: &str, options: &TreeOptions) -> Vec<&'a Value> {
    let Some(map) = node.as_object() else { return Vec::new() };
    let mut out = Vec::new();
    for (key, value) in map {
        if is_attribute(key, options) || local_name(key) != name {
            continue;
        }
        match value {
            Value::Array(xs) => out.extend(xs.iter()),
            other => out.push(other),
        }
    }
    out
}

pub fn child<'a>(node: &'a Value, name: &str, options: &TreeOptions) -> Option<&'a Value> {
    children(node, name, options).into_iter().next()
}

/// Attribute value as text. Numbers and booleans are stringified.
pub fn attribute(node: &Value, name: &str, options: &TreeOptions) -> Option<String> {
    let map = node.as_object()?;
    let key = format!("{}{}", options.attribute_prefix, name);
    map.get(&key).and_then(scalar_text)
}

/// Text content of an element: bare scalars, or the text key of an element
/// that also carries attributes.
pub fn text(node: &Value, options: &TreeOptions) -> Option<String> {
    match node {
        Value::Object(map) => text_of_map(map, options),
        other => scalar_text(other),
    }
}

fn text_of_map(map: &Map<String, Value>, options: &TreeOptions) -> Option<String> {
    map.get(&options.text_key).and_then(scalar_text)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A type reference may be written as an attribute or as a child element.
pub fn type_ref(node: &Value, options: &TreeOptions) -> Option<String> {
    attribute(node, "typeRef", options)
        .or_else(|| child(node, "typeRef", options).and_then(|n| text(n, options)))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_and_repeated_children_read_the_same() {
        let opts = TreeOptions::default();
        let one = json!({ "itemComponent": { "@_name": "a" } });
        let many = json!({ "itemComponent": [{ "@_name": "a" }, { "@_name": "b" }] });
        assert_eq!(children(&one, "itemComponent", &opts).len(), 1);
        assert_eq!(children(&many, "itemComponent", &opts).len(), 2);
        assert!(children(&one, "missing", &opts).is_empty());
    }

    #[test]
    fn namespace_prefixes_are_ignored() {
        let opts = TreeOptions::default();
        let node = json!({ "dmn:itemDefinition": [{ "@_name": "x" }] });
        let found = children(&node, "itemDefinition", &opts);
        assert_eq!(attribute(found[0], "name", &opts).as_deref(), Some("x"));
    }

    #[test]
    fn text_reads_bare_and_keyed_forms() {
        let opts = TreeOptions::default();
        assert_eq!(text(&json!("number"), &opts).as_deref(), Some("number"));
        assert_eq!(text(&json!({ "@_id": "t1", "#text": "\"A\"" }), &opts).as_deref(), Some("\"A\""));
        assert_eq!(text(&json!({ "@_id": "t1" }), &opts), None);
    }

    #[test]
    fn type_ref_prefers_attribute_then_child() {
        let opts = TreeOptions::default();
        assert_eq!(type_ref(&json!({ "@_typeRef": "Person" }), &opts).as_deref(), Some("Person"));
        assert_eq!(type_ref(&json!({ "typeRef": " number " }), &opts).as_deref(), Some("number"));
        assert_eq!(type_ref(&json!({ "typeRef": "" }), &opts), None);
    }

    #[test]
    fn custom_prefix_is_honoured() {
        let opts = TreeOptions { attribute_prefix: "$".into(), text_key: "_".into() };
        let node = json!({ "$name": "Applicant", "name": { "_": "child" } });
        assert_eq!(attribute(&node, "name", &opts).as_deref(), Some("Applicant"));
        let child_text = child(&node, "name", &opts).and_then(|n| text(n, &opts));
        assert_eq!(child_text.as_deref(), Some("child"));
    }
}
