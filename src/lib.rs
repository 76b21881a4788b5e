//! Example inputs for decision models.
//!
//! Takes a DMN document that an XML parser already decoded into a JSON
//! attribute/element tree and derives, for every declared input, an example
//! value shaped like the input's declared type.
//!
//! Pipeline: `tree` → `document` → `catalog` → `resolve` → `synth`, driven per
//! input by `extract`. `schema` reuses the same shapes to emit a JSON schema.
pub mod catalog;
pub mod document;
pub mod error;
pub mod extract;
pub mod jq_exec;
pub mod model;
pub mod resolve;
pub mod schema;
pub mod source;
pub mod synth;
pub mod tree;

pub use catalog::TypeCatalog;
pub use document::Document;
pub use error::{Error, Result};
pub use extract::{extract, extract_from_tree, Examples};
pub use model::{ExampleValue, FieldRef, InputVariable, ResolvedShape, TypeDefinition};
pub use resolve::resolve;
pub use schema::emit_schema;
pub use synth::synthesize;
pub use tree::TreeOptions;
