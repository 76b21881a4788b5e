//! Type resolution: typeRef → `ResolvedShape`.
//!
//! Resolution walks the catalog recursively:
//! - unknown names (FEEL built-ins like `number`, or typos) become
//!   `Unresolved` and get a placeholder later, never an error;
//! - leaves with quoted allowed values pick the first literal;
//! - other leaves keep their own declared typeRef as the base type, even
//!   when it names another definition;
//! - composites resolve every component in declaration order.
//!
//! The current resolution path is tracked as a stack of type names. Meeting a
//! name that is already on the stack truncates that branch to `Unresolved`.
//! Names are popped on the way out, so sibling fields sharing a type both
//! expand in full.
pub mod literal;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::catalog::TypeCatalog;
use crate::model::{ResolvedShape, TypeDefinition};

/// Resolve a type reference against a catalog.
pub fn resolve(type_ref: Option<&str>, catalog: &TypeCatalog) -> ResolvedShape {
    Resolver::new(catalog).resolve(type_ref)
}

pub struct Resolver<'a> {
    catalog: &'a TypeCatalog,
    path: Vec<&'a str>,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Self { catalog, path: Vec::new() }
    }

    pub fn resolve(&mut self, type_ref: Option<&str>) -> ResolvedShape {
        let Some(name) = type_ref.map(str::trim).filter(|s| !s.is_empty()) else {
            return ResolvedShape::Unresolved { type_name: None };
        };
        let Some(def) = self.catalog.lookup(name) else {
            debug!(type_ref = name, "no itemDefinition, treating as built-in");
            return ResolvedShape::Unresolved { type_name: Some(name.to_string()) };
        };
        if self.path.contains(&def.name.as_str()) {
            warn!(type_ref = name, path = ?self.path, "cyclic type reference truncated");
            return ResolvedShape::Unresolved { type_name: Some(name.to_string()) };
        }

        self.path.push(def.name.as_str());
        let shape = if def.fields.is_empty() {
            self.resolve_leaf(def)
        } else {
            self.resolve_composite(def)
        };
        self.path.pop();
        shape
    }

    fn resolve_leaf(&mut self, def: &'a TypeDefinition) -> ResolvedShape {
        let allowed = literal::extract_all(&def.allowed_values);
        if let Some(first) = allowed.first() {
            return ResolvedShape::Primitive {
                base_type: def.base_type.clone(),
                literal: Some(first.clone()),
                allowed,
            };
        }
        if !def.allowed_values.is_empty() {
            debug!(definition = %def.name, "allowedValues without quoted literals, using base type");
        }

        ResolvedShape::primitive(def.base_type.clone())
    }

    fn resolve_composite(&mut self, def: &'a TypeDefinition) -> ResolvedShape {
        let mut fields = IndexMap::with_capacity(def.fields.len());
        for field in &def.fields {
            let shape = self.resolve(field.type_ref.as_deref());
            fields.insert(field.name.clone(), shape);
        }
        ResolvedShape::Composite { fields }
    }
}
