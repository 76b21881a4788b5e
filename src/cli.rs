//! Minimal CLI: decoded DMN tree → (example | schema)
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use rayon::prelude::*;
use serde_json::{Map, Value};
use tracing::{error, info};

use dmn_examples::source::{SourceDocument, SourceSettings};
use dmn_examples::{Document, TreeOptions};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// derive example input values (or a JSON schema) from decision models that
/// were already decoded from XML into JSON trees
#[derive(Parser, Debug)]
#[command(version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,

    /// debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// print an example value for every declared input
    Example(OutputSettings),
    /// print a JSON schema of the inputs, seeded with the examples
    Schema(OutputSettings),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to the decoded tree inside each file (e.g. /payload/model)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each file; every output is one document
    #[arg(long)]
    jq_expr: Option<String>,

    /// reject files whose name does not end in this suffix ('' accepts all)
    #[arg(long, default_value = ".json")]
    accept_suffix: String,

    /// key prefix the XML decoder used for attributes
    #[arg(long, default_value = "@_")]
    attribute_prefix: String,

    /// key the XML decoder used for element text next to attributes
    #[arg(long, default_value = "#text")]
    text_key: String,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct OutputSettings {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// single-line JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

#[derive(Debug, Clone, Copy)]
enum Mode {
    Example,
    Schema,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn source_settings(&self) -> SourceSettings {
        SourceSettings {
            input: self.input.clone(),
            accept_suffix: self.accept_suffix.clone(),
            json_pointer: self.json_pointer.clone(),
            jq_expr: self.jq_expr.clone(),
        }
    }

    fn tree_options(&self) -> TreeOptions {
        TreeOptions {
            attribute_prefix: self.attribute_prefix.clone(),
            text_key: self.text_key.clone(),
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Example(target) => run_mode(target, Mode::Example),
            Command::Schema(target) => run_mode(target, Mode::Schema),
        }
    }
}

fn run_mode(target: &OutputSettings, mode: Mode) -> Result<()> {
    let documents = target
        .input_settings
        .source_settings()
        .load_documents()
        .context("failed to load input documents")?;
    let options = target.input_settings.tree_options();

    // documents are independent: each builds its own catalog
    let results: Vec<(String, dmn_examples::Result<Value>)> = documents
        .into_par_iter()
        .map(|SourceDocument { label, tree }| {
            let result = process(&tree, &options, mode);
            (label, result)
        })
        .collect();

    let total = results.len();
    let mut outputs = Map::new();
    let mut failed = 0usize;
    for (label, result) in results {
        match result {
            Ok(value) => {
                eprintln!("{} {label}", "✔".green());
                outputs.insert(label, value);
            }
            Err(error) => {
                failed += 1;
                error!(source = %label, %error, "document rejected");
                eprintln!("{} {label}: {error}", "✘".red());
            }
        }
    }

    let output = if total == 1 {
        outputs.into_iter().next().map(|(_, v)| v)
    } else {
        Some(Value::Object(outputs))
    };
    if let Some(output) = output {
        write_output(&output, target)?;
    }
    if failed > 0 {
        bail!("{failed} of {total} documents failed");
    }
    Ok(())
}

fn process(tree: &Value, options: &TreeOptions, mode: Mode) -> dmn_examples::Result<Value> {
    let document = Document::from_tree(tree, options)?;
    info!(
        model = document.name.as_deref().unwrap_or("<unnamed>"),
        inputs = document.inputs.len(),
        "processing decision model"
    );
    let value = match mode {
        Mode::Example => {
            let examples = dmn_examples::extract(&document);
            Value::Object(examples.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
        }
        Mode::Schema => dmn_examples::emit_schema(&document),
    };
    Ok(value)
}

fn write_output(value: &Value, target: &OutputSettings) -> Result<()> {
    let src = if target.compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    match target.out.as_ref() {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(out, &src).with_context(|| format!("failed to write {}", out.display()))?;
        }
        None => println!("{src}"),
    }
    Ok(())
}
