use anyhow::Result;
use std::path::Path;
use swc_common::{sync::Lrc, FileName, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{lexer::Lexer, Parser, StringInput, Syntax, TsSyntax};

/// TypeScript source parser (via swc).
///
/// Text-to-AST parsing is delegated entirely to swc; the schema builders
/// only ever see the resulting [`Module`].
pub struct TypeScriptParser {
    source_map: SourceMap,
}

impl TypeScriptParser {
    pub fn new() -> Self {
        Self {
            source_map: SourceMap::default(),
        }
    }

    /// Parses a spec file into a swc module.
    pub fn parse_file(&self, path: &Path) -> Result<Module> {
        let source = std::fs::read_to_string(path)?;
        self.parse_source(&source, path)
    }

    /// Parses source text into a swc module. The path is only used for
    /// diagnostics and the tsx toggle.
    pub fn parse_source(&self, source: &str, path: &Path) -> Result<Module> {
        let file_name: Lrc<FileName> = FileName::Real(path.to_path_buf()).into();
        let fm = self
            .source_map
            .new_source_file(file_name, source.to_string());

        let is_tsx = path.extension().and_then(|e| e.to_str()) == Some("tsx");
        let syntax = Syntax::Typescript(TsSyntax {
            tsx: is_tsx,
            ..Default::default()
        });

        let lexer = Lexer::new(syntax, Default::default(), StringInput::from(&*fm), None);
        let mut parser = Parser::new_from(lexer);

        parser
            .parse_module()
            .map_err(|e| anyhow::anyhow!("Parse error in {}: {:?}", path.display(), e))
    }

    /// Derives the haste module name (file stem) used for platform-suffix
    /// detection and diagnostics.
    pub fn haste_module_name(path: &Path) -> String {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UnknownModule")
            .to_string()
    }
}

impl Default for TypeScriptParser {
    fn default() -> Self {
        Self::new()
    }
}
