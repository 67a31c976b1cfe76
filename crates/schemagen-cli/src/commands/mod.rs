pub mod component;
pub mod module;

use anyhow::Result;
use std::path::Path;

/// Writes the schema JSON to the output file, or to stdout when no file
/// was given.
pub(crate) fn emit_json(json: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            Ok(())
        }
        None => {
            println!("{json}");
            Ok(())
        }
    }
}
