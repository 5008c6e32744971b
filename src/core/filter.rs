use std::collections::HashSet;

use regex::Regex;

use crate::core::imports::ImportTable;

/// Provenance filter matched against the module specifier the top-level
/// name segment was imported from.
#[derive(Debug, Clone)]
pub enum ImportedFrom {
    /// Exact module specifier match.
    Module(String),
    /// Regex match, written as `/pattern/` in config and on the CLI.
    Pattern(Regex),
}

impl ImportedFrom {
    /// Parse the user-facing string form: `/.../` is a regex, anything else
    /// an exact module specifier. JSON has no regex literal, so the slash
    /// syntax stands in for the RegExp the programmatic API accepts.
    pub fn parse(raw: &str) -> Result<Self, regex::Error> {
        if raw.len() > 1 && raw.starts_with('/') && raw.ends_with('/') {
            Ok(Self::Pattern(Regex::new(&raw[1..raw.len() - 1])?))
        } else {
            Ok(Self::Module(raw.to_owned()))
        }
    }

    fn matches(&self, specifier: &str) -> bool {
        match self {
            Self::Module(module) => specifier == module,
            Self::Pattern(pattern) => pattern.is_match(specifier),
        }
    }
}

/// Options controlling which component usages are recorded.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Allow-set of qualified or top-level component names. `None` records
    /// every component.
    pub components: Option<HashSet<String>>,
    /// Record dotted sub-component usages like `<Header.Logo>`. Off by
    /// default: only top-level usages are reported.
    pub include_sub_components: bool,
    /// Only record components whose top-level segment was imported from a
    /// matching module in the same file.
    pub imported_from: Option<ImportedFrom>,
}

impl ScanOptions {
    /// Allow-set constructor used pervasively in tests.
    pub fn with_components<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            components: Some(components.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }
}

/// Ordered accept/reject decision for one resolved tag name.
///
/// Checks run in order and the first failure rejects: allow-set membership
/// (full name or head segment), sub-component depth, import provenance.
/// On rejection the caller skips the tag's attribute subtree entirely.
pub(crate) fn should_report(
    name: &str,
    parts: &[&str],
    options: &ScanOptions,
    imports: &ImportTable,
) -> bool {
    if let Some(components) = &options.components
        && !components.contains(name)
        && !components.contains(parts[0])
    {
        return false;
    }

    if !options.include_sub_components && parts.len() > 1 {
        return false;
    }

    if let Some(imported_from) = &options.imported_from {
        return match imports.module_for(parts[0]) {
            Some(specifier) => imported_from.matches(specifier),
            None => false,
        };
    }

    true
}
