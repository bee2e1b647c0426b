//! Builds one message block from a matched call or component node.

use swc_ecma_ast::{CallExpr, JSXAttr, JSXAttrName, JSXAttrOrSpread, JSXOpeningElement};

use super::block::MessageBlock;
use super::classify::{attr_static_string, resolve_call_name, resolve_element_name, static_string};
use crate::config::{ComponentPropsMap, FuncArgsMap};

/// Build a block from a recognized call.
///
/// The role at position `i` applies to argument `i` when both exist; spread
/// arguments and non-static values leave their field unset.
pub fn block_from_call(func_arguments: &FuncArgsMap, call: &CallExpr) -> Option<MessageBlock> {
    let name = resolve_call_name(call)?;
    let roles = func_arguments.get(name)?;

    let mut block = MessageBlock::new();
    for (role, arg) in roles.iter().zip(&call.args) {
        if arg.spread.is_some() {
            continue;
        }
        if let Some(value) = static_string(&arg.expr) {
            block.assign(*role, value);
        }
    }
    Some(block)
}

/// Build a block from a recognized element's attributes.
///
/// Attributes without a configured role, spread attributes, and non-static
/// values are skipped.
pub fn block_from_attributes(
    component_props: &ComponentPropsMap,
    opening: &JSXOpeningElement,
) -> Option<MessageBlock> {
    let name = resolve_element_name(opening)?;
    let props = component_props.get(name)?;

    let mut block = MessageBlock::new();
    for attr in &opening.attrs {
        let JSXAttrOrSpread::JSXAttr(JSXAttr {
            name: JSXAttrName::Ident(prop_ident),
            value: Some(value),
            ..
        }) = attr
        else {
            continue;
        };
        let Some(role) = props.get(prop_ident.sym.as_str()) else {
            continue;
        };
        if let Some(text) = attr_static_string(value) {
            block.assign(*role, text);
        }
    }
    Some(block)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use swc_ecma_ast::{Expr, JSXElement, ModuleItem, Stmt};

    use super::*;
    use crate::config::{default_component_props, default_func_arguments};
    use crate::parsers::jsx::parse_source;

    fn parse_call(code: &str) -> CallExpr {
        let parsed = parse_source(code.to_string(), "test.tsx").unwrap();
        let ModuleItem::Stmt(Stmt::Expr(stmt)) = &parsed.module.body[0] else {
            panic!("expected expression statement");
        };
        match &*stmt.expr {
            Expr::Call(call) => call.clone(),
            other => panic!("expected call expression, got {:?}", other),
        }
    }

    fn parse_element(code: &str) -> JSXElement {
        let parsed = parse_source(code.to_string(), "test.tsx").unwrap();
        let ModuleItem::Stmt(Stmt::Expr(stmt)) = &parsed.module.body[0] else {
            panic!("expected expression statement");
        };
        match &*stmt.expr {
            Expr::JSXElement(element) => (**element).clone(),
            other => panic!("expected JSX element, got {:?}", other),
        }
    }

    #[test]
    fn test_singular_call() {
        let funcs = default_func_arguments();
        let block = block_from_call(&funcs, &parse_call(r#"t("Hello");"#)).unwrap();
        assert_eq!(block.id.as_deref(), Some("Hello"));
        assert_eq!(block.context, "");
        assert_eq!(block.plural_id, None);
        assert_eq!(block.translations, vec![String::new()]);
    }

    #[test]
    fn test_plural_call() {
        let funcs = default_func_arguments();
        let block =
            block_from_call(&funcs, &parse_call(r#"ngettext("One item", "%d items", n);"#))
                .unwrap();
        assert_eq!(block.id.as_deref(), Some("One item"));
        assert_eq!(block.plural_id.as_deref(), Some("%d items"));
        assert_eq!(block.translations, vec![String::new(), String::new()]);
    }

    #[test]
    fn test_context_call() {
        let funcs = default_func_arguments();
        let block = block_from_call(&funcs, &parse_call(r#"pgettext("menu", "Open");"#)).unwrap();
        assert_eq!(block.context, "menu");
        assert_eq!(block.id.as_deref(), Some("Open"));
    }

    #[test]
    fn test_ignore_role_skips_argument() {
        let funcs = default_func_arguments();
        let block =
            block_from_call(&funcs, &parse_call(r#"dgettext("domain", "Hello");"#)).unwrap();
        assert_eq!(block.id.as_deref(), Some("Hello"));
        assert_eq!(block.context, "");
    }

    #[test]
    fn test_missing_arguments_leave_fields_unset() {
        let funcs = default_func_arguments();
        let block = block_from_call(&funcs, &parse_call(r#"ngettext("One item");"#)).unwrap();
        assert_eq!(block.id.as_deref(), Some("One item"));
        assert_eq!(block.plural_id, None);
        assert_eq!(block.translations, vec![String::new()]);
    }

    #[test]
    fn test_dynamic_argument_leaves_field_unset() {
        let funcs = default_func_arguments();
        let block = block_from_call(&funcs, &parse_call(r#"t(variable);"#)).unwrap();
        assert_eq!(block.id, None);
    }

    #[test]
    fn test_component_attributes() {
        let props = default_component_props();
        let element = parse_element(r#"<T message="Hi" comment="greeting" />;"#);
        let block = block_from_attributes(&props, &element.opening).unwrap();
        assert_eq!(block.id.as_deref(), Some("Hi"));
        assert_eq!(block.comments.extracted, vec!["greeting"]);
    }

    #[test]
    fn test_component_plural_and_context() {
        let props = default_component_props();
        let element =
            parse_element(r#"<T message="One item" plural="%d items" context="cart" />;"#);
        let block = block_from_attributes(&props, &element.opening).unwrap();
        assert_eq!(block.context, "cart");
        assert_eq!(block.plural_id.as_deref(), Some("%d items"));
        assert_eq!(block.translations, vec![String::new(), String::new()]);
    }

    #[test]
    fn test_unmapped_attributes_are_skipped() {
        let props = default_component_props();
        let element = parse_element(r#"<T message="Hi" className="big" onClick={handler} />;"#);
        let block = block_from_attributes(&props, &element.opening).unwrap();
        assert_eq!(block.id.as_deref(), Some("Hi"));
        assert!(block.comments.extracted.is_empty());
    }

    #[test]
    fn test_expression_container_literal_attribute() {
        let props = default_component_props();
        let element = parse_element(r#"<T message={"Hi"} />;"#);
        let block = block_from_attributes(&props, &element.opening).unwrap();
        assert_eq!(block.id.as_deref(), Some("Hi"));
    }
}
