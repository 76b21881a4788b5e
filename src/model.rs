// Typed view of a decision model: what the tree declares, what resolution
// derives from it, and the example values handed back to callers.
use indexmap::IndexMap;
use serde::Serialize;

/// One declared input of the model. `name` keys the output mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputVariable {
    pub name: String,
    pub type_ref: Option<String>,
}

/// A catalog entry (`itemDefinition`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeDefinition {
    pub name: String,
    pub base_type: Option<String>,      // the definition's own typeRef
    pub fields: Vec<FieldRef>,          // empty → primitive/enumerated leaf
    pub allowed_values: Vec<String>,    // raw allowedValues text, document order
}

/// A named slot inside a composite definition (`itemComponent`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
    pub name: String,
    pub type_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedShape {
    Primitive {
        base_type: Option<String>,
        literal: Option<String>,  // first allowed literal, the representative
        allowed: Vec<String>,     // every allowed literal (schema `enum`)
    },
    Composite {
        fields: IndexMap<String, ResolvedShape>,  // declaration order
    },
    Unresolved {
        type_name: Option<String>,
    },
}

impl ResolvedShape {
    pub fn primitive(base_type: Option<String>) -> Self {
        ResolvedShape::Primitive { base_type, literal: None, allowed: Vec::new() }
    }

    /// The type name a placeholder example is derived from.
    pub fn placeholder_type(&self) -> Option<&str> {
        match self {
            ResolvedShape::Primitive { base_type, .. } => base_type.as_deref(),
            ResolvedShape::Unresolved { type_name } => type_name.as_deref(),
            ResolvedShape::Composite { .. } => None,
        }
    }
}

/// Case-insensitive classification of a primitive type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseKind {
    Number,
    Boolean,
    Other(String),  // lowercased
}

impl BaseKind {
    pub fn classify(type_name: Option<&str>) -> Self {
        let lowered = type_name.unwrap_or("string").to_lowercase();
        match lowered.as_str() {
            "number" => BaseKind::Number,
            "boolean" => BaseKind::Boolean,
            _ => BaseKind::Other(lowered),
        }
    }
}

/// The synthesized example. Serializes as plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExampleValue {
    Number(i64),
    Boolean(bool),
    String(String),
    Mapping(IndexMap<String, ExampleValue>),
}

impl ExampleValue {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ExampleValue::Number(n) => serde_json::Value::from(*n),
            ExampleValue::Boolean(b) => serde_json::Value::Bool(*b),
            ExampleValue::String(s) => serde_json::Value::String(s.clone()),
            ExampleValue::Mapping(fields) => serde_json::Value::Object(
                fields.iter().map(|(k, v)| (k.clone(), v.to_json())).collect()
            ),
        }
    }
}
