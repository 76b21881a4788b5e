//! Getting decoded trees off disk: glob expansion, the file-type gate, JSON
//! parsing, and optional JSON-pointer / jq pre-selection.
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Default)]
pub struct SourceSettings {
    /// Literal paths or glob patterns.
    pub input: Vec<String>,
    /// Required (case-insensitive) file-name suffix; empty accepts anything.
    pub accept_suffix: String,
    /// JSON Pointer selecting the decoded tree inside each file.
    pub json_pointer: Option<String>,
    /// jq filter applied after the pointer; every output is one document.
    pub jq_expr: Option<String>,
}

/// One decoded tree ready for extraction.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub label: String,
    pub tree: Value,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl SourceSettings {
    pub fn resolve_paths(&self) -> Result<Vec<PathBuf>> {
        let paths = resolve_file_path_patterns(&self.input)?;
        for path in &paths {
            check_file_type(path, &self.accept_suffix)?;
        }
        Ok(paths)
    }

    /// Load every document of every input, in input order.
    pub fn load_documents(&self) -> Result<Vec<SourceDocument>> {
        let mut out = Vec::new();
        for path in self.resolve_paths()? {
            out.extend(self.load_file(&path)?);
        }
        Ok(out)
    }

    pub fn load_file(&self, path: &Path) -> Result<Vec<SourceDocument>> {
        let label = path.to_string_lossy().to_string();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(&label, e))?;
        let value = serde_json::from_str::<Value>(&source)
            .map_err(|source| Error::Json { path: label.clone(), source })?;
        self.select(&label, value)
    }

    /// Apply the pointer and jq stages to an already-parsed value.
    pub fn select(&self, label: &str, value: Value) -> Result<Vec<SourceDocument>> {
        let value = match self.json_pointer.as_deref() {
            None => value,
            Some(pointer) => value.pointer(pointer).cloned().ok_or_else(|| Error::PointerMiss {
                pointer: pointer.to_string(),
                path: label.to_string(),
            })?,
        };
        let trees = match self.jq_expr.as_deref() {
            None => vec![value],
            Some(jq_expr) => crate::jq_exec::run_jaq(jq_expr, &value).map_err(|message| Error::Jq {
                path: label.to_string(),
                message,
            })?,
        };
        debug!(source = label, documents = trees.len(), "loaded input");

        let many = trees.len() > 1;
        Ok(trees
            .into_iter()
            .enumerate()
            .map(|(i, tree)| SourceDocument {
                label: if many { format!("{label}#{i}") } else { label.to_string() },
                tree,
            })
            .collect())
    }
}

/// The file-acceptance gate. Runs before any parsing.
pub fn check_file_type(path: &Path, suffix: &str) -> Result<()> {
    let name = path.to_string_lossy();
    if suffix.is_empty() || name.to_lowercase().ends_with(&suffix.to_lowercase()) {
        return Ok(());
    }
    Err(Error::UnsupportedFileType {
        path: name.to_string(),
        expected: suffix.to_string(),
    })
}

/// Expand patterns in order. A path named twice (literally or through
/// overlapping globs) is kept once, at its first position.
pub fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = IndexSet::<PathBuf>::new();
    for raw in patterns {
        let pattern = raw.as_ref();
        if !has_glob_chars(pattern) {
            out.insert(PathBuf::from(pattern));
            continue;
        }
        let mut matched_any = false;
        for entry in glob::glob(pattern)? {
            let path = entry.map_err(|e| {
                let path = e.path().to_string_lossy().to_string();
                Error::io(path, e.into())
            })?;
            matched_any = true;
            out.insert(path);
        }
        if !matched_any {
            return Err(Error::NoFilesMatched(pattern.to_string()));
        }
    }
    Ok(out.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn gate_checks_suffix_case_insensitively() {
        assert!(check_file_type(Path::new("model.DMN.json"), ".dmn.json").is_ok());
        assert!(check_file_type(Path::new("anything.txt"), "").is_ok());
        let err = check_file_type(Path::new("model.xml"), ".json").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFileType { .. }));
    }

    #[test]
    fn loads_files_and_globs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), r#"{"definitions":{}}"#).unwrap();
        std::fs::write(dir.path().join("b.json"), r#"{"definitions":{"@_name":"b"}}"#).unwrap();
        std::fs::write(dir.path().join("c.txt"), "ignored").unwrap();

        let settings = SourceSettings {
            input: vec![format!("{}/*.json", dir.path().display())],
            accept_suffix: ".json".into(),
            ..Default::default()
        };
        let docs = settings.load_documents().unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].tree["definitions"]["@_name"], "b");
    }

    #[test]
    fn repeated_paths_load_once() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        std::fs::write(&a, r#"{"definitions":{}}"#).unwrap();
        std::fs::write(dir.path().join("b.json"), r#"{"definitions":{}}"#).unwrap();

        let literal = a.display().to_string();
        let glob = format!("{}/*.json", dir.path().display());
        let paths = resolve_file_path_patterns([&literal, &literal, &glob]).unwrap();
        assert_eq!(paths, vec![a.clone(), dir.path().join("b.json")]);

        let settings = SourceSettings { input: vec![literal.clone(), literal], ..Default::default() };
        let docs = settings.load_documents().unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn empty_glob_and_bad_json_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let settings = SourceSettings {
            input: vec![format!("{}/*.json", dir.path().display())],
            ..Default::default()
        };
        assert!(matches!(settings.load_documents(), Err(Error::NoFilesMatched(_))));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        let settings = SourceSettings { input: vec![bad.display().to_string()], ..Default::default() };
        assert!(matches!(settings.load_documents(), Err(Error::Json { .. })));
    }

    #[test]
    fn pointer_selects_subtree() {
        let settings = SourceSettings { json_pointer: Some("/payload/0".into()), ..Default::default() };
        let docs = settings.select("mem", json!({ "payload": [{ "definitions": {} }] })).unwrap();
        assert_eq!(docs[0].label, "mem");
        assert_eq!(docs[0].tree, json!({ "definitions": {} }));
        let miss = settings.select("mem", json!({}));
        assert!(matches!(miss, Err(Error::PointerMiss { .. })));
    }

    #[test]
    fn jq_outputs_become_labelled_documents() {
        let settings = SourceSettings { jq_expr: Some(".[]".into()), ..Default::default() };
        let docs = settings.select("bundle.json", json!([{ "definitions": {} }, { "definitions": {} }])).unwrap();
        let labels: Vec<_> = docs.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["bundle.json#0", "bundle.json#1"]);
    }
}
