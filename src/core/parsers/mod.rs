//! Source file parsing.
//!
//! The scanner consumes the parser's output tree and an error signal on
//! malformed input; everything downstream works on the swc AST.

pub mod jsx;
