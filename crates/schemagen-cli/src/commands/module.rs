use anyhow::{Context, Result};
use colored::Colorize;
use schemagen_core::ErrorSink;
use schemagen_typescript::{build_module_schema, TypeScriptParser};
use std::path::Path;
use tracing::warn;

/// Parses one native module spec file and emits its schema as JSON.
///
/// Soft (per-member) errors do not fail the run; each one is reported as
/// a warning and the member is missing from the output.
pub fn execute_module(file: &Path, output: Option<&Path>) -> Result<()> {
    let parser = TypeScriptParser::new();
    let module = parser.parse_file(file)?;
    let haste_module_name = TypeScriptParser::haste_module_name(file);

    let mut sink = ErrorSink::new();
    let schema = build_module_schema(&haste_module_name, &module, &mut sink)
        .with_context(|| format!("failed to build module schema for {}", file.display()))?;

    for error in sink.errors() {
        warn!(module = %haste_module_name, error = %error, "skipped module member");
    }

    let json = serde_json::to_string_pretty(&schema)?;
    super::emit_json(&json, output)?;

    if output.is_some() {
        let note = if sink.is_empty() {
            String::new()
        } else {
            format!(" ({} member(s) skipped)", sink.len())
        };
        eprintln!(
            "{} module schema for {}{}",
            "generated".green().bold(),
            haste_module_name,
            note
        );
    }
    Ok(())
}
