use indexmap::IndexMap;

use crate::model::{BaseKind, ExampleValue, ResolvedShape};

/// Build an example value for a resolved shape. Total: every composite field
/// gets a value, unresolved branches get a placeholder.
pub fn synthesize(shape: &ResolvedShape) -> ExampleValue {
    match shape {
        ResolvedShape::Primitive { literal: Some(literal), .. } => ExampleValue::String(literal.clone()),
        ResolvedShape::Primitive { base_type, .. } => placeholder(base_type.as_deref()),
        ResolvedShape::Unresolved { type_name } => placeholder(type_name.as_deref()),
        ResolvedShape::Composite { fields } => {
            let mut out = IndexMap::with_capacity(fields.len());
            for (name, field) in fields {
                out.insert(name.clone(), synthesize(field));
            }
            ExampleValue::Mapping(out)
        }
    }
}

/// `number` → 0, `boolean` → true, anything else → `"example_<lowercased>"`.
pub fn placeholder(type_name: Option<&str>) -> ExampleValue {
    match BaseKind::classify(type_name) {
        BaseKind::Number => ExampleValue::Number(0),
        BaseKind::Boolean => ExampleValue::Boolean(true),
        BaseKind::Other(name) => ExampleValue::String(format!("example_{name}")),
    }
}
