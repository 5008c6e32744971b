use indexmap::IndexMap;
use swc_common::SourceMap;
use swc_ecma_ast::{
    BinaryOp, Expr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXExpr, JSXOpeningElement, Lit,
};

use crate::core::error::ScanError;
use crate::core::report::{InstanceInfo, Location, Position, PropValue};

/// Build an [`InstanceInfo`] for an accepted opening element: its props,
/// spread flag, and 1-based source position.
pub(crate) fn extract_instance(
    node: &JSXOpeningElement,
    file_path: &str,
    source_map: &SourceMap,
) -> Result<InstanceInfo, ScanError> {
    let loc = source_map.lookup_char_pos(node.span.lo);

    let mut props = IndexMap::new();
    let mut props_spread = false;

    for attr in &node.attrs {
        match attr {
            JSXAttrOrSpread::JSXAttr(attr) => {
                let name = attr_name(&attr.name);
                let value = prop_value(attr.value.as_ref(), file_path)?;
                // Last write wins for a repeated attribute name.
                props.insert(name, value);
            }
            JSXAttrOrSpread::SpreadElement(_) => props_spread = true,
        }
    }

    Ok(InstanceInfo {
        props,
        props_spread,
        location: Location {
            file: file_path.to_owned(),
            start: Position {
                line: loc.line,
                column: loc.col_display + 1,
            },
        },
    })
}

fn attr_name(name: &JSXAttrName) -> String {
    match name {
        JSXAttrName::Ident(ident) => ident.sym.to_string(),
        JSXAttrName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
    }
}

/// Classify an attribute value per the extraction rules: missing -> null,
/// literal -> its runtime value, expression container -> the inner literal
/// or a `"(<Kind>)"` tag. Element and fragment values are shapes the
/// scanner has no interpretation for.
fn prop_value(value: Option<&JSXAttrValue>, file_path: &str) -> Result<PropValue, ScanError> {
    match value {
        None => Ok(PropValue::Null),
        // Lone surrogates cannot round-trip through UTF-8; record an empty
        // string rather than dropping the attribute.
        Some(JSXAttrValue::Str(s)) => Ok(PropValue::Str(
            s.value.as_str().map(str::to_owned).unwrap_or_default(),
        )),
        Some(JSXAttrValue::JSXExprContainer(container)) => match &container.expr {
            JSXExpr::Expr(expr) => Ok(expr_value(expr)),
            JSXExpr::JSXEmptyExpr(_) => Ok(PropValue::expression("JSXEmptyExpression")),
        },
        Some(JSXAttrValue::JSXElement(_)) => Err(ScanError::UnsupportedAttrValue {
            file_path: file_path.to_owned(),
            kind: "JSXElement",
        }),
        Some(JSXAttrValue::JSXFragment(_)) => Err(ScanError::UnsupportedAttrValue {
            file_path: file_path.to_owned(),
            kind: "JSXFragment",
        }),
    }
}

fn expr_value(expr: &Expr) -> PropValue {
    let expr = unwrap_parens(expr);
    match expr {
        Expr::Lit(lit) => literal_value(lit),
        other => PropValue::expression(estree_kind(other)),
    }
}

/// ESTree has no ParenthesizedExpression node, so `foo={(1)}` classifies by
/// what is inside the parens.
fn unwrap_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_parens(&paren.expr),
        other => other,
    }
}

fn literal_value(lit: &Lit) -> PropValue {
    match lit {
        Lit::Str(s) => PropValue::Str(s.value.as_str().map(str::to_owned).unwrap_or_default()),
        Lit::Bool(b) => PropValue::Bool(b.value),
        Lit::Num(n) => PropValue::number(n.value),
        Lit::Null(_) => PropValue::Null,
        Lit::BigInt(b) => PropValue::Str(b.value.to_string()),
        Lit::Regex(r) => PropValue::Str(format!("/{}/{}", r.exp, r.flags)),
        Lit::JSXText(t) => PropValue::Str(t.value.to_string()),
    }
}

/// ESTree type name for an expression, as typescript-estree reports it.
/// swc folds the logical operators into `Bin`, so those are split back out.
fn estree_kind(expr: &Expr) -> &'static str {
    match expr {
        Expr::This(_) => "ThisExpression",
        Expr::Array(_) => "ArrayExpression",
        Expr::Object(_) => "ObjectExpression",
        Expr::Fn(_) => "FunctionExpression",
        Expr::Unary(_) => "UnaryExpression",
        Expr::Update(_) => "UpdateExpression",
        Expr::Bin(bin) => match bin.op {
            BinaryOp::LogicalAnd | BinaryOp::LogicalOr | BinaryOp::NullishCoalescing => {
                "LogicalExpression"
            }
            _ => "BinaryExpression",
        },
        Expr::Assign(_) => "AssignmentExpression",
        Expr::Member(_) | Expr::SuperProp(_) => "MemberExpression",
        Expr::Cond(_) => "ConditionalExpression",
        Expr::Call(_) => "CallExpression",
        Expr::New(_) => "NewExpression",
        Expr::Seq(_) => "SequenceExpression",
        Expr::Ident(_) => "Identifier",
        Expr::Lit(_) => "Literal",
        Expr::Tpl(_) => "TemplateLiteral",
        Expr::TaggedTpl(_) => "TaggedTemplateExpression",
        Expr::Arrow(_) => "ArrowFunctionExpression",
        Expr::Class(_) => "ClassExpression",
        Expr::Yield(_) => "YieldExpression",
        Expr::MetaProp(_) => "MetaProperty",
        Expr::Await(_) => "AwaitExpression",
        Expr::Paren(_) => "ParenthesizedExpression",
        Expr::JSXMember(_) => "JSXMemberExpression",
        Expr::JSXNamespacedName(_) => "JSXNamespacedName",
        Expr::JSXEmpty(_) => "JSXEmptyExpression",
        Expr::JSXElement(_) => "JSXElement",
        Expr::JSXFragment(_) => "JSXFragment",
        Expr::TsTypeAssertion(_) => "TSTypeAssertion",
        Expr::TsConstAssertion(_) | Expr::TsAs(_) => "TSAsExpression",
        Expr::TsNonNull(_) => "TSNonNullExpression",
        Expr::TsInstantiation(_) => "TSInstantiationExpression",
        Expr::TsSatisfies(_) => "TSSatisfiesExpression",
        Expr::PrivateName(_) => "PrivateIdentifier",
        Expr::OptChain(_) => "ChainExpression",
        Expr::Invalid(_) => "Invalid",
    }
}
