//! Minimal JSON Schema emission seeded with the synthesized examples.
//!
//! The schema is descriptive, not a validator: primitives only carry a JSON
//! type and an optional `enum`, composites list every component as required.
use serde_json::{json, Map, Value};

use crate::catalog::TypeCatalog;
use crate::document::Document;
use crate::model::{BaseKind, ResolvedShape};
use crate::resolve::Resolver;
use crate::synth::synthesize;

/// Schema of the input object of a whole document.
pub fn emit_schema(document: &Document) -> Value {
    let catalog = TypeCatalog::build(document.definitions.iter().cloned());

    let mut props = Map::new();
    let mut example = Map::new();
    let mut required: Vec<Value> = Vec::new();
    for input in &document.inputs {
        let shape = Resolver::new(&catalog).resolve(input.type_ref.as_deref());
        // repeated names: last declaration wins, same as the example mapping
        if !props.contains_key(&input.name) {
            required.push(Value::from(input.name.clone()));
        }
        props.insert(input.name.clone(), emit_shape(&shape));
        example.insert(input.name.clone(), synthesize(&shape).to_json());
    }

    let mut o = json!({ "type": "object", "properties": props, "required": required, "examples": [example] });
    if let Some(name) = &document.name {
        o["title"] = Value::from(name.clone());
    }
    o
}

pub fn emit_shape(shape: &ResolvedShape) -> Value {
    let mut o = match shape {
        ResolvedShape::Composite { fields } => {
            let props: Map<String, Value> = fields
                .iter()
                .map(|(k, f)| (k.clone(), emit_shape(f)))
                .collect();
            let required: Vec<Value> = fields.keys().cloned().map(Value::from).collect();
            json!({ "type": "object", "properties": props, "required": required })
        }
        ResolvedShape::Primitive { base_type, allowed, .. } if !allowed.is_empty() => {
            let mut o = json!({
                "type": "string",
                "enum": allowed.iter().cloned().map(Value::from).collect::<Vec<_>>()
            });
            if let Some(base) = base_type {
                o["x-dmn-type"] = Value::from(base.clone());
            }
            o
        }
        other => {
            let type_name = other.placeholder_type();
            let mut o = json!({ "type": json_type(type_name) });
            if let Some(name) = type_name {
                o["x-dmn-type"] = Value::from(name);
            }
            o
        }
    };
    o["examples"] = json!([synthesize(shape).to_json()]);
    o
}

fn json_type(type_name: Option<&str>) -> &'static str {
    match BaseKind::classify(type_name) {
        BaseKind::Number => "number",
        BaseKind::Boolean => "boolean",
        BaseKind::Other(_) => "string",
    }
}
