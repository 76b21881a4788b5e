use jaq_core::{compile::Undefined, load, Compiler, Ctx, RcIter};
use jaq_json::Val;
use serde_json::Value;

/// Run a jq program over one decoded tree. Each output of the program is
/// parsed back into a `serde_json::Value`.
pub fn run_jaq(filter_src: &str, input: &Value) -> Result<Vec<Value>, String> {
    let loader = load::Loader::new(jaq_std::defs().chain(jaq_json::defs()));
    let arena = load::Arena::default();
    let program = load::File { code: filter_src, path: () };

    let modules = loader
        .load(&arena, program)
        .map_err(describe_parse_errors)?;

    let filter = Compiler::default()
        .with_funs(jaq_std::funs().chain(jaq_json::funs()))
        .compile(modules)
        .map_err(describe_undefined)?;

    let inputs = RcIter::new(core::iter::empty());
    let outputs = filter.run((Ctx::new([], &inputs), Val::from(input.clone())));

    let mut out = Vec::new();
    for item in outputs {
        let val = item.map_err(|e| format!("{e:?}"))?;
        // Val prints as JSON text
        let json = serde_json::from_str::<Value>(&val.to_string())
            .map_err(|e| format!("jq produced non-JSON output: {e}"))?;
        out.push(json);
    }
    Ok(out)
}

fn describe_parse_errors(errs: Vec<(load::File<&str, ()>, load::Error<&str>)>) -> String {
    errs.into_iter()
        .map(|(file, err)| format!("parse error: {err:?} in `{}`", file.code))
        .collect::<Vec<_>>()
        .join("; ")
}

fn describe_undefined(errs: Vec<(load::File<&str, ()>, Vec<(&str, Undefined)>)>) -> String {
    let mut lines = Vec::new();
    for (file, list) in errs {
        for (name, undef) in list {
            lines.push(format!("undefined `{name}`: {undef:?} in `{}`", file.code));
        }
    }
    lines.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn selects_a_nested_tree() {
        let input = json!({ "payload": { "definitions": { "@_name": "m" } } });
        let out = run_jaq(".payload", &input).unwrap();
        assert_eq!(out, vec![json!({ "definitions": { "@_name": "m" } })]);
    }

    #[test]
    fn multiple_outputs_are_kept_in_order() {
        let input = json!({ "models": [{ "definitions": {} }, { "definitions": { "@_name": "b" } }] });
        let out = run_jaq(".models[]", &input).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[1]["definitions"]["@_name"], "b");
    }

    #[test]
    fn syntax_errors_are_reported() {
        assert!(run_jaq(".[", &json!({})).is_err());
    }
}
