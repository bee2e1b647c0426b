//! Pure predicates deciding whether an AST node is a recognized
//! translatable call or component, plus best-effort static string
//! extraction.

use swc_ecma_ast::{
    CallExpr, Callee, Expr, JSXAttrValue, JSXElementName, JSXExpr, JSXOpeningElement, Lit,
    MemberProp,
};

use crate::config::{ComponentPropsMap, FuncArgsMap};

/// Resolve the name a call is classified under: a plain identifier callee,
/// or the final property name of a member access such as `i18n.t(...)`.
///
/// The same name is the lookup key into the function-argument map, so
/// classification and field mapping can never disagree.
pub fn resolve_call_name(call: &CallExpr) -> Option<&str> {
    let Callee::Expr(expr) = &call.callee else {
        return None;
    };
    match &**expr {
        Expr::Ident(ident) => Some(ident.sym.as_str()),
        Expr::Member(member) => match &member.prop {
            MemberProp::Ident(ident) => Some(ident.sym.as_str()),
            _ => None,
        },
        _ => None,
    }
}

pub fn is_recognized_call(names: &FuncArgsMap, call: &CallExpr) -> bool {
    resolve_call_name(call).is_some_and(|name| names.contains_key(name))
}

/// Resolve the tag name of a JSX opening element. Member tags like
/// `<UI.T>` classify under their final property name.
pub fn resolve_element_name(opening: &JSXOpeningElement) -> Option<&str> {
    match &opening.name {
        JSXElementName::Ident(ident) => Some(ident.sym.as_str()),
        JSXElementName::JSXMemberExpr(member) => Some(member.prop.sym.as_str()),
        JSXElementName::JSXNamespacedName(_) => None,
    }
}

pub fn is_recognized_component(names: &ComponentPropsMap, opening: &JSXOpeningElement) -> bool {
    resolve_element_name(opening).is_some_and(|name| names.contains_key(name))
}

/// Best-effort static string extraction from an expression: a plain string
/// literal, or a template literal with no embedded expressions (quasis
/// concatenated). Anything dynamic yields `None` and is silently dropped.
pub fn static_string(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(str::to_string),
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => {
            let mut value = String::new();
            for quasi in &tpl.quasis {
                let cooked = quasi.cooked.as_ref()?;
                value.push_str(cooked.as_str()?);
            }
            Some(value)
        }
        _ => None,
    }
}

/// Static string from a JSX attribute value: `prop="text"`, or a static
/// literal wrapped in an expression container like `prop={"text"}`.
pub fn attr_static_string(value: &JSXAttrValue) -> Option<String> {
    match value {
        JSXAttrValue::Str(s) => s.value.as_str().map(str::to_string),
        JSXAttrValue::JSXExprContainer(container) => match &container.expr {
            JSXExpr::Expr(expr) => static_string(expr),
            JSXExpr::JSXEmptyExpr(_) => None,
        },
        _ => None,
    }
}
