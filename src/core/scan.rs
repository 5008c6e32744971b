use std::sync::Arc;

use colored::Colorize;
use swc_common::SourceMap;
use swc_ecma_ast::{JSXElement, JSXOpeningElement};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::error::ScanError;
use crate::core::extract::extract_instance;
use crate::core::filter::{ScanOptions, should_report};
use crate::core::imports::ImportTable;
use crate::core::parsers::jsx::parse_jsx_source;
use crate::core::report::Report;
use crate::core::resolve::resolve_tag_name;

/// How a single-file scan ended, short of a fatal error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The file parsed and was walked to completion.
    Scanned,
    /// The parser rejected the file. A diagnostic went to stderr and the
    /// report was left untouched; the batch moves on to the next file.
    ParseFailed,
}

/// Scan one file's source for component usages and append them to `report`.
///
/// The report is shared across every file of a run and mutated in place.
/// Parse failures are recoverable and deterministic, so they surface as a
/// stderr diagnostic plus [`ScanOutcome::ParseFailed`] rather than an
/// error. `Err` is reserved for AST shapes the scanner has no
/// interpretation for; those abort this file's scan immediately.
pub fn scan(
    code: &str,
    file_path: &str,
    options: &ScanOptions,
    report: &mut Report,
) -> Result<ScanOutcome, ScanError> {
    let source_map = Arc::new(SourceMap::default());
    let parsed = match parse_jsx_source(code.to_owned(), file_path, source_map) {
        Ok(parsed) => parsed,
        Err(_) => {
            eprintln!(
                "{} Failed to parse: {}",
                "warning:".bold().yellow(),
                file_path
            );
            return Ok(ScanOutcome::ParseFailed);
        }
    };

    let imports = ImportTable::from_module(&parsed.module);

    let mut visitor = UsageVisitor {
        file_path,
        source_map: &parsed.source_map,
        imports: &imports,
        options,
        report,
        error: None,
    };
    visitor.visit_module(&parsed.module);

    match visitor.error {
        Some(err) => Err(err),
        None => Ok(ScanOutcome::Scanned),
    }
}

/// Single-pass visitor gating on opening elements.
///
/// Acceptance is decided per opening element: resolve the qualified name,
/// run the filter, and on acceptance extract and record the instance. A
/// rejected tag's attribute subtree is skipped, but the element's children
/// are still visited by the enclosing traversal, so siblings and nested
/// tags keep matching, while JSX hidden inside a rejected tag's attribute
/// values is never seen.
struct UsageVisitor<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    imports: &'a ImportTable,
    options: &'a ScanOptions,
    report: &'a mut Report,
    /// First fatal error. Once set, no further nodes are matched.
    error: Option<ScanError>,
}

impl Visit for UsageVisitor<'_> {
    fn visit_jsx_element(&mut self, node: &JSXElement) {
        if self.error.is_none() {
            node.visit_children_with(self);
        }
    }

    fn visit_jsx_opening_element(&mut self, node: &JSXOpeningElement) {
        if self.error.is_some() {
            return;
        }

        let name = match resolve_tag_name(&node.name, self.file_path) {
            Ok(name) => name,
            Err(err) => {
                self.error = Some(err);
                return;
            }
        };
        let parts: Vec<&str> = name.split('.').collect();

        if !should_report(&name, &parts, self.options, self.imports) {
            return;
        }

        match extract_instance(node, self.file_path, self.source_map) {
            Ok(instance) => self.report.record(&name, instance),
            Err(err) => {
                self.error = Some(err);
                return;
            }
        }

        // Descend into the attributes so JSX nested in an accepted tag's
        // attribute expressions is still matched.
        node.visit_children_with(self);
    }
}
