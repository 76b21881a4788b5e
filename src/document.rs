//! Decision-model document: the declared inputs and item definitions pulled
//! out of a decoded tree.
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{FieldRef, InputVariable, TypeDefinition};
use crate::tree::{self, TreeOptions};

#[derive(Debug, Clone, Default)]
pub struct Document {
    pub name: Option<String>,
    pub inputs: Vec<InputVariable>,
    pub definitions: Vec<TypeDefinition>,
}

impl Document {
    /// Read a document from the decoded tree. The only failure is a tree
    /// without a `definitions` container. An empty `<definitions/>` decodes
    /// to a scalar (`""` or `null`) and reads as a model declaring nothing.
    pub fn from_tree(root: &Value, options: &TreeOptions) -> Result<Self> {
        let definitions = tree::child(root, "definitions", options)
            .ok_or(Error::MissingDefinitions)?;

        let doc = Document {
            name: tree::attribute(definitions, "name", options),
            inputs: read_inputs(definitions, options),
            definitions: read_item_definitions(definitions, options),
        };
        debug!(
            model = doc.name.as_deref().unwrap_or("<unnamed>"),
            inputs = doc.inputs.len(),
            item_definitions = doc.definitions.len(),
            "decoded decision model"
        );
        Ok(doc)
    }
}

fn read_inputs(definitions: &Value, options: &TreeOptions) -> Vec<InputVariable> {
    let mut out = Vec::new();
    for input in tree::children(definitions, "inputData", options) {
        let variable = tree::child(input, "variable", options);
        let name = variable
            .and_then(|v| tree::attribute(v, "name", options))
            .or_else(|| tree::attribute(input, "name", options));
        let Some(name) = name else {
            warn!(id = ?tree::attribute(input, "id", options), "skipping inputData without a name");
            continue;
        };
        let type_ref = variable.and_then(|v| tree::type_ref(v, options));
        out.push(InputVariable { name, type_ref });
    }
    out
}

fn read_item_definitions(definitions: &Value, options: &TreeOptions) -> Vec<TypeDefinition> {
    let mut out = Vec::new();
    for item in tree::children(definitions, "itemDefinition", options) {
        let Some(name) = tree::attribute(item, "name", options) else {
            warn!(id = ?tree::attribute(item, "id", options), "skipping itemDefinition without a name");
            continue;
        };
        let fields = tree::children(item, "itemComponent", options)
            .into_iter()
            .filter_map(|component| {
                let field_name = tree::attribute(component, "name", options);
                if field_name.is_none() {
                    warn!(definition = %name, "skipping itemComponent without a name");
                }
                Some(FieldRef {
                    name: field_name?,
                    type_ref: tree::type_ref(component, options),
                })
            })
            .collect();
        let allowed_values = tree::children(item, "allowedValues", options)
            .into_iter()
            .flat_map(|allowed| tree::children(allowed, "text", options))
            .filter_map(|node| tree::text(node, options))
            .collect();
        out.push(TypeDefinition {
            base_type: tree::type_ref(item, options),
            name,
            fields,
            allowed_values,
        });
    }
    out
}
