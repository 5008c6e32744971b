//! Compscan - React component usage scanner
//!
//! Compscan is a CLI tool and library that crawls a codebase for JSX/TSX
//! component usages and produces a hierarchical JSON report: which
//! components are used where, with which props, and whether props were
//! spread.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core scanning engine (parsing, filtering, extraction, report)

pub mod cli;
pub mod config;
pub mod core;
