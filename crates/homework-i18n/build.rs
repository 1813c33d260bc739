//! Build script for homework-i18n crate
//!
//! Validates every Fluent locale file at compile time so the embedded catalogue
//! can be trusted at runtime:
//! - All Fluent syntax is valid
//! - All locale files define the same message keys
//! - Every translation uses the same placeables

use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use fluent_syntax::ast::{Entry, Expression, InlineExpression, Pattern, PatternElement};
use fluent_syntax::parser::parse;

type MessageParams = BTreeMap<String, BTreeSet<String>>;

/// Extract message keys and their variable names from a Fluent file
fn extract_messages_and_params(content: &str) -> Result<MessageParams, String> {
    let resource = parse(content).map_err(|(_, errors)| format!("Parse errors: {errors:?}"))?;

    let mut messages = BTreeMap::new();

    for entry in resource.body {
        if let Entry::Message(message) = entry {
            let key = message.id.name.to_string();
            let mut params = BTreeSet::new();

            if let Some(Pattern { elements }) = message.value {
                extract_params_from_pattern(&elements, &mut params);
            } else {
                return Err(format!("Message '{key}' has no value"));
            }

            messages.insert(key, params);
        }
    }

    Ok(messages)
}

fn extract_params_from_pattern(elements: &[PatternElement<&str>], params: &mut BTreeSet<String>) {
    for element in elements {
        if let PatternElement::Placeable { expression } = element {
            extract_params_from_expression(expression, params);
        }
    }
}

fn extract_params_from_expression(expression: &Expression<&str>, params: &mut BTreeSet<String>) {
    match expression {
        Expression::Select { selector, variants } => {
            extract_params_from_inline_expression(selector, params);
            for variant in variants {
                extract_params_from_pattern(&variant.value.elements, params);
            }
        }
        Expression::Inline(inline) => extract_params_from_inline_expression(inline, params),
    }
}

fn extract_params_from_inline_expression(
    expression: &InlineExpression<&str>,
    params: &mut BTreeSet<String>,
) {
    match expression {
        InlineExpression::VariableReference { id } => {
            params.insert(id.name.to_string());
        }
        InlineExpression::Placeable { expression } => {
            extract_params_from_expression(expression, params);
        }
        _ => {}
    }
}

/// Find `locales/<lang>/main.ftl` for every locale directory
fn find_locale_files() -> Result<BTreeMap<String, PathBuf>, String> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(|_| "CARGO_MANIFEST_DIR not set")?;
    let locales_dir = Path::new(&manifest_dir).join("locales");

    let entries = fs::read_dir(&locales_dir)
        .map_err(|e| format!("Failed to read {}: {e}", locales_dir.display()))?;

    let mut locale_files = BTreeMap::new();
    for entry in entries {
        let path = entry
            .map_err(|e| format!("Failed to read directory entry: {e}"))?
            .path();
        if !path.is_dir() {
            continue;
        }
        let locale = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| format!("Invalid locale directory name: {}", path.display()))?
            .to_string();
        let main_ftl = path.join("main.ftl");
        if main_ftl.exists() {
            locale_files.insert(locale, main_ftl);
        }
    }

    if locale_files.is_empty() {
        return Err("No locale files found".to_string());
    }
    Ok(locale_files)
}

fn validate_locales() -> Result<(), String> {
    println!("cargo:rerun-if-changed=locales");

    let mut catalogues: BTreeMap<String, MessageParams> = BTreeMap::new();
    for (locale, path) in find_locale_files()? {
        let content = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        let messages = extract_messages_and_params(&content)
            .map_err(|e| format!("{locale}: {e}"))?;
        catalogues.insert(locale, messages);
    }

    let mut errors = Vec::new();
    let mut iter = catalogues.iter();
    if let Some((reference_locale, reference)) = iter.next() {
        for (locale, messages) in iter {
            for (key, ref_params) in reference {
                match messages.get(key) {
                    None => errors.push(format!("{locale}: missing message '{key}'")),
                    Some(params) if params != ref_params => errors.push(format!(
                        "{locale}: placeables of '{key}' differ from {reference_locale}: \
                         expected {ref_params:?}, found {params:?}"
                    )),
                    Some(_) => {}
                }
            }
            for key in messages.keys().filter(|k| !reference.contains_key(*k)) {
                errors.push(format!("{locale}: extra message '{key}'"));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("\n"))
    }
}

fn main() {
    if let Err(e) = validate_locales() {
        eprintln!("Locale validation failed:\n{e}");
        process::exit(1);
    }
}
