use swc_ecma_ast::{JSXElementName, JSXMemberExpr, JSXObject};

use crate::core::error::ScanError;

/// Resolve a tag name node to its dot-joined qualified name, e.g.
/// `<Header.Content.Column>` resolves to `"Header.Content.Column"`.
///
/// The parser only produces identifiers and member chains for component
/// tags; a namespaced name (`<svg:path>`) has no qualified form and aborts
/// the file's scan.
pub(crate) fn resolve_tag_name(
    name: &JSXElementName,
    file_path: &str,
) -> Result<String, ScanError> {
    match name {
        JSXElementName::Ident(ident) => Ok(ident.sym.to_string()),
        JSXElementName::JSXMemberExpr(member) => Ok(resolve_member(member)),
        JSXElementName::JSXNamespacedName(_) => Err(ScanError::UnsupportedTagName {
            file_path: file_path.to_owned(),
            kind: "JSXNamespacedName",
        }),
    }
}

fn resolve_member(member: &JSXMemberExpr) -> String {
    let object = match &member.obj {
        JSXObject::Ident(ident) => ident.sym.to_string(),
        JSXObject::JSXMemberExpr(nested) => resolve_member(nested),
    };
    format!("{}.{}", object, member.prop.sym)
}
