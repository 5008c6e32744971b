use std::collections::HashMap;

use swc_ecma_ast::{ImportSpecifier, Module, ModuleDecl, ModuleItem};

/// Per-file table of `local binding -> module specifier`.
///
/// Built in one pass over the module's top-level import declarations before
/// the JSX walk starts, and read-only afterwards. Default, named (possibly
/// aliased) and namespace specifiers all map their *local* name to the
/// declaration's source; the exported name of an aliased import is
/// discarded. A reused local name keeps the last declaration; source-level
/// shadowing is not modeled.
#[derive(Debug, Default)]
pub struct ImportTable {
    entries: HashMap<String, String>,
}

impl ImportTable {
    pub fn from_module(module: &Module) -> Self {
        let mut entries = HashMap::new();

        for item in &module.body {
            let ModuleItem::ModuleDecl(ModuleDecl::Import(decl)) = item else {
                continue;
            };
            // Lone surrogates cannot occur in a real module specifier.
            let Some(specifier) = decl.src.value.as_str() else {
                continue;
            };
            for import in &decl.specifiers {
                let local = match import {
                    ImportSpecifier::Named(named) => &named.local,
                    ImportSpecifier::Default(default) => &default.local,
                    ImportSpecifier::Namespace(ns) => &ns.local,
                };
                entries.insert(local.sym.to_string(), specifier.to_owned());
            }
        }

        Self { entries }
    }

    /// Module specifier the given local identifier was imported from, if any.
    pub fn module_for(&self, local: &str) -> Option<&str> {
        self.entries.get(local).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
