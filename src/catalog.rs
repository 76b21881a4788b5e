use std::collections::HashMap;
use tracing::warn;

use crate::model::TypeDefinition;

/// Item definitions of one document, indexed by name. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    entries: Vec<TypeDefinition>,
    by_name: HashMap<String, usize>,
}

impl TypeCatalog {
    /// Duplicate names keep the first definition.
    pub fn build(definitions: impl IntoIterator<Item = TypeDefinition>) -> Self {
        let mut catalog = Self::default();
        for def in definitions {
            if catalog.by_name.contains_key(&def.name) {
                warn!(name = %def.name, "duplicate itemDefinition ignored, first one wins");
                continue;
            }
            catalog.by_name.insert(def.name.clone(), catalog.entries.len());
            catalog.entries.push(def);
        }
        catalog
    }

    pub fn lookup(&self, name: &str) -> Option<&TypeDefinition> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|d| d.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(name: &str, base: &str) -> TypeDefinition {
        TypeDefinition { name: name.into(), base_type: Some(base.into()), ..Default::default() }
    }

    #[test]
    fn lookup_misses_are_none() {
        let catalog = TypeCatalog::build(vec![def("Money", "number")]);
        assert!(catalog.lookup("Money").is_some());
        assert!(catalog.lookup("money").is_none());
        assert!(catalog.lookup("string").is_none());
    }

    #[test]
    fn first_duplicate_wins() {
        let catalog = TypeCatalog::build(vec![def("Code", "number"), def("Other", "string"), def("Code", "boolean")]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("Code").unwrap().base_type.as_deref(), Some("number"));
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Code", "Other"]);
    }
}
