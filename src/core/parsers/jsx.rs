use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, GLOBALS, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

pub struct ParsedJsx {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Parse JSX/TSX source code string into an AST.
///
/// TSX syntax covers every file kind the scanner accepts (.js/.jsx/.ts/.tsx).
/// Accepts a shared SourceMap so parallel batch scans can parse with a
/// per-file map on worker threads.
pub fn parse_jsx_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedJsx> {
    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse tsx string: {:?}", e))?;

        Ok(ParsedJsx { module, source_map })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(code: &str) -> Result<ParsedJsx> {
        parse_jsx_source(code.to_owned(), "test.tsx", Arc::new(SourceMap::default()))
    }

    #[test]
    fn parses_tsx() {
        let parsed =
            parse("const x: number = 1;\nexport const App = () => <div>{x}</div>;").unwrap();
        assert_eq!(parsed.module.body.len(), 2);
    }

    #[test]
    fn rejects_unclosed_element() {
        assert!(parse("<foo").is_err());
    }
}
