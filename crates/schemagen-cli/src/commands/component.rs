use anyhow::{Context, Result};
use colored::Colorize;
use schemagen_typescript::{build_component_schema, TypeScriptParser};
use std::path::Path;

/// Parses one component spec file and emits its schema as JSON.
pub fn execute_component(file: &Path, output: Option<&Path>) -> Result<()> {
    let parser = TypeScriptParser::new();
    let module = parser.parse_file(file)?;

    let schema = build_component_schema(&module)
        .with_context(|| format!("failed to build component schema for {}", file.display()))?;

    let json = serde_json::to_string_pretty(&schema)?;
    super::emit_json(&json, output)?;

    if output.is_some() {
        eprintln!(
            "{} component schema for {}",
            "generated".green().bold(),
            schema.component_name
        );
    }
    Ok(())
}
