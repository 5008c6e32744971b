//! Core scanning engine.
//!
//! A scan runs per file: parse with swc, build the file's import table,
//! then walk the AST once recording accepted component usages into a shared
//! report. The batch runner drives the per-file scans over a whole source
//! tree and merges their results.

pub mod error;
pub mod file_scanner;
pub mod parsers;

mod extract;
mod filter;
mod imports;
mod report;
mod resolve;
mod runner;
mod scan;

pub use error::ScanError;
pub use filter::{ImportedFrom, ScanOptions};
pub use imports::ImportTable;
pub use report::{ComponentNode, InstanceInfo, Location, Position, PropValue, Report};
pub use runner::{BatchOutcome, run_batch};
pub use scan::{ScanOutcome, scan};
