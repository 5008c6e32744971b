use thiserror::Error;

/// Fatal per-file scan errors.
///
/// These abort the scan of the file that raised them; the batch keeps going
/// with the other files. Recoverable conditions (a file the parser rejects)
/// are not errors, they are reported as a scan outcome.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A tag name shape with no dot-joined qualified form, e.g. the
    /// namespaced `<svg:path>`.
    #[error("{file_path}: unsupported tag name of kind {kind}")]
    UnsupportedTagName {
        file_path: String,
        kind: &'static str,
    },

    /// An attribute value written directly as a JSX element or fragment,
    /// e.g. `<Foo icon=<Bar /> />`.
    #[error("{file_path}: unsupported attribute value of kind {kind}")]
    UnsupportedAttrValue {
        file_path: String,
        kind: &'static str,
    },
}
