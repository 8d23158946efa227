//! Call-site recognizers.
//!
//! Pure functions from an AST node to the id-bearing node it carries, if any.
//! Three react-intl shapes are recognized:
//!
//! - `<FormattedMessage id="..." />`
//! - `formatMessage({ id: "..." })` and `intl.formatMessage({ id: "..." })`
//! - `defineMessages({ key: { id: "..." } })` and `defineMessage({ id: "..." })`
//!
//! The `id` value must be a string literal or a template literal; JSX also
//! accepts a template literal wrapped in `{...}`. Other values are skipped.

use swc_common::{Span, Spanned};
use swc_ecma_ast::{
    CallExpr, Callee, Expr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElementName, JSXExpr,
    JSXOpeningElement, Lit, MemberProp, ObjectLit, Prop, PropName, PropOrSpread, Tpl,
};

use crate::core::{CandidateId, TemplatePart, TemplatePattern};

/// JSX components whose `id` attribute names a message.
pub const FORMATTED_MESSAGE_COMPONENTS: &[&str] = &["FormattedMessage", "FormattedHTMLMessage"];

pub const FORMAT_MESSAGE_FN: &str = "formatMessage";
pub const DEFINE_MESSAGES_FN: &str = "defineMessages";
pub const DEFINE_MESSAGE_FN: &str = "defineMessage";

/// Attribute/property holding the message id.
pub const ID_ATTR: &str = "id";

/// An id-bearing node: the candidate id and the span of its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdNode {
    pub candidate: CandidateId,
    pub span: Span,
}

/// `<FormattedMessage id=... />`
pub fn find_formatted_message_id(node: &JSXOpeningElement) -> Option<IdNode> {
    let JSXElementName::Ident(name) = &node.name else {
        return None;
    };
    if !FORMATTED_MESSAGE_COMPONENTS.contains(&name.sym.as_str()) {
        return None;
    }

    node.attrs.iter().find_map(|attr| match attr {
        JSXAttrOrSpread::JSXAttr(attr)
            if matches!(&attr.name, JSXAttrName::Ident(ident) if ident.sym.as_str() == ID_ATTR) =>
        {
            attr.value.as_ref().and_then(id_from_attr_value)
        }
        _ => None,
    })
}

/// `formatMessage({ id })`, called directly or as a method.
pub fn find_format_message_id(node: &CallExpr) -> Option<IdNode> {
    if callee_name(node) != Some(FORMAT_MESSAGE_FN) {
        return None;
    }
    first_object_arg(node)
        .and_then(find_id_prop)
        .and_then(id_from_expr)
}

/// Ids declared in `defineMessages({...})` tables or a single `defineMessage({...})`.
pub fn find_message_table_ids(node: &CallExpr) -> Vec<IdNode> {
    let Some(object) = first_object_arg(node) else {
        return Vec::new();
    };

    match callee_name(node) {
        Some(DEFINE_MESSAGES_FN) => object
            .props
            .iter()
            .filter_map(|prop| match prop {
                PropOrSpread::Prop(prop) => match &**prop {
                    Prop::KeyValue(kv) => match unwrap_ts_expr(&kv.value) {
                        Expr::Object(descriptor) => find_id_prop(descriptor).and_then(id_from_expr),
                        _ => None,
                    },
                    _ => None,
                },
                PropOrSpread::Spread(_) => None,
            })
            .collect(),
        Some(DEFINE_MESSAGE_FN) => find_id_prop(object)
            .and_then(id_from_expr)
            .into_iter()
            .collect(),
        _ => Vec::new(),
    }
}

/// Build a candidate from a template literal, ordering fragments and
/// interpolations by source position.
pub fn candidate_from_tpl(tpl: &Tpl) -> CandidateId {
    let mut parts = Vec::with_capacity(tpl.quasis.len() + tpl.exprs.len());

    for (i, quasi) in tpl.quasis.iter().enumerate() {
        let text = quasi
            .cooked
            .as_ref()
            .and_then(|cooked| cooked.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| quasi.raw.to_string());
        parts.push((quasi.span.lo.0, TemplatePart::Text(text)));

        if let Some(expr) = tpl.exprs.get(i) {
            parts.push((expr.span().lo.0, TemplatePart::Hole));
        }
    }

    CandidateId::from_template(TemplatePattern::from_positioned(parts))
}

fn id_from_attr_value(value: &JSXAttrValue) -> Option<IdNode> {
    match value {
        JSXAttrValue::Str(s) => s.value.as_str().map(|id| IdNode {
            candidate: CandidateId::Literal(id.to_string()),
            span: s.span,
        }),
        JSXAttrValue::JSXExprContainer(container) => match &container.expr {
            JSXExpr::Expr(expr) => match &**expr {
                Expr::Tpl(tpl) => Some(id_from_tpl(tpl)),
                _ => None,
            },
            JSXExpr::JSXEmptyExpr(_) => None,
        },
        _ => None,
    }
}

fn id_from_expr(expr: &Expr) -> Option<IdNode> {
    match expr {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(|id| IdNode {
            candidate: CandidateId::Literal(id.to_string()),
            span: s.span,
        }),
        Expr::Tpl(tpl) => Some(id_from_tpl(tpl)),
        _ => None,
    }
}

fn id_from_tpl(tpl: &Tpl) -> IdNode {
    IdNode {
        candidate: candidate_from_tpl(tpl),
        span: tpl.span,
    }
}

/// Name of the called function: `f(...)` -> `f`, `a.b.f(...)` -> `f`.
fn callee_name(call: &CallExpr) -> Option<&str> {
    let Callee::Expr(expr) = &call.callee else {
        return None;
    };
    match &**expr {
        Expr::Ident(ident) => Some(ident.sym.as_str()),
        Expr::Member(member) => match &member.prop {
            MemberProp::Ident(prop) => Some(prop.sym.as_str()),
            _ => None,
        },
        _ => None,
    }
}

fn first_object_arg(call: &CallExpr) -> Option<&ObjectLit> {
    let arg = call.args.first()?;
    if arg.spread.is_some() {
        return None;
    }
    match unwrap_ts_expr(&arg.expr) {
        Expr::Object(object) => Some(object),
        _ => None,
    }
}

fn find_id_prop(object: &ObjectLit) -> Option<&Expr> {
    object.props.iter().find_map(|prop| match prop {
        PropOrSpread::Prop(prop) => match &**prop {
            Prop::KeyValue(kv) if prop_name_is(&kv.key, ID_ATTR) => Some(&*kv.value),
            _ => None,
        },
        PropOrSpread::Spread(_) => None,
    })
}

fn prop_name_is(key: &PropName, name: &str) -> bool {
    match key {
        PropName::Ident(ident) => ident.sym.as_str() == name,
        PropName::Str(s) => s.value.as_str() == Some(name),
        _ => false,
    }
}

/// Unwrap TypeScript-specific expression wrappers to get the inner expression.
fn unwrap_ts_expr(expr: &Expr) -> &Expr {
    match expr {
        Expr::TsAs(ts_as) => unwrap_ts_expr(&ts_as.expr),
        Expr::TsConstAssertion(ts_const) => unwrap_ts_expr(&ts_const.expr),
        Expr::TsSatisfies(ts_sat) => unwrap_ts_expr(&ts_sat.expr),
        Expr::Paren(paren) => unwrap_ts_expr(&paren.expr),
        _ => expr,
    }
}
