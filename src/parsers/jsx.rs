use std::path::Path;

use anyhow::{Result, anyhow};
use swc_common::{FileName, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

pub struct ParsedModule {
    pub module: Module,
    pub source_map: SourceMap,
}

impl std::fmt::Debug for ParsedModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // SourceMap has no Debug impl, so it is elided here.
        f.debug_struct("ParsedModule")
            .field("module", &self.module)
            .finish_non_exhaustive()
    }
}

/// Pick a parser syntax from the file extension.
///
/// `.ts`/`.tsx` parse as TypeScript with TSX enabled; everything else parses
/// as ECMAScript with JSX enabled, so plain `.js` files containing JSX still
/// work.
pub fn syntax_for(file_path: &str) -> Syntax {
    match Path::new(file_path).extension().and_then(|e| e.to_str()) {
        Some("ts" | "tsx" | "mts" | "cts") => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
    }
}

/// Parse a JS/TS(X) source string into an AST plus the source map used for
/// `path:line` lookups.
///
/// A parse failure is fatal for the source unit and propagates to the
/// caller; nothing downstream sees a partial tree.
pub fn parse_source(code: String, file_path: &str) -> Result<ParsedModule> {
    let source_map = SourceMap::default();
    let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

    let mut parser = Parser::new(
        syntax_for(file_path),
        StringInput::from(&*source_file),
        None,
    );
    let module = parser
        .parse_module()
        .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;
    Ok(ParsedModule { module, source_map })
}
