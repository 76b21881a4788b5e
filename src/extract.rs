use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::catalog::TypeCatalog;
use crate::document::Document;
use crate::error::Result;
use crate::model::ExampleValue;
use crate::resolve::Resolver;
use crate::synth::synthesize;
use crate::tree::TreeOptions;

pub type Examples = IndexMap<String, ExampleValue>;

/// Example value for every declared input, in document order. A repeated
/// input name keeps its first position and its last value.
pub fn extract(document: &Document) -> Examples {
    let catalog = TypeCatalog::build(document.definitions.iter().cloned());
    extract_with(document, &catalog)
}

pub fn extract_with(document: &Document, catalog: &TypeCatalog) -> Examples {
    let mut out = Examples::with_capacity(document.inputs.len());
    for input in &document.inputs {
        let shape = Resolver::new(catalog).resolve(input.type_ref.as_deref());
        debug!(input = %input.name, type_ref = ?input.type_ref, ?shape, "resolved input");
        out.insert(input.name.clone(), synthesize(&shape));
    }
    out
}

/// Decode and extract in one go.
pub fn extract_from_tree(tree: &Value, options: &TreeOptions) -> Result<Examples> {
    let document = Document::from_tree(tree, options)?;
    Ok(extract(&document))
}
