//! Runs every `fixtures/*.dmn.json` through the extractor and compares the
//! result with the sibling `*.expected.json`.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use dmn_examples::TreeOptions;
use serde_json::Value;

fn expected_path(input: &Path) -> PathBuf {
    let name = input.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let stem = name.trim_end_matches(".dmn.json");
    input.with_file_name(format!("{stem}.expected.json"))
}

fn read_json(path: &Path) -> Result<Value> {
    let src = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&src).with_context(|| format!("parsing {}", path.display()))
}

fn check(input: &Path) -> Result<()> {
    let tree = read_json(input)?;
    let expected = read_json(&expected_path(input))?;
    let actual = match dmn_examples::extract_from_tree(&tree, &TreeOptions::default()) {
        Ok(examples) => serde_json::to_value(&examples)?,
        // fixtures expecting a structural failure say so explicitly
        Err(error) => serde_json::json!({ "error": error.to_string() }),
    };
    // an expected error matches any actual message starting with its text
    let same = match (actual.get("error"), expected.get("error")) {
        (Some(Value::String(got)), Some(Value::String(want))) => got.starts_with(want.as_str()),
        (_, Some(_)) => false,
        _ => actual == expected,
    };
    if !same {
        bail!(
            "mismatch\n  expected: {}\n  actual:   {}",
            serde_json::to_string(&expected)?,
            serde_json::to_string(&actual)?
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let root = std::env::args().nth(1).unwrap_or_else(|| "fixtures".to_string());
    let pattern = format!("{root}/*.dmn.json");
    let mut failures = 0;
    let mut total = 0;
    for entry in glob::glob(&pattern)? {
        let input = entry?;
        total += 1;
        match check(&input) {
            Ok(()) => eprintln!("✅ {}", input.display().to_string().green()),
            Err(error) => {
                failures += 1;
                eprintln!("❌ {}: {error:#}", input.display().to_string().red());
            }
        }
    }
    eprintln!("{} fixtures, {} failed", total, failures);
    if failures > 0 {
        bail!("{failures} fixture(s) failed");
    }
    Ok(())
}
