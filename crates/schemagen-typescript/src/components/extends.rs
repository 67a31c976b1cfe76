//! Separates `extends` clauses of the props interface into the recognized
//! built-in view-props marker versus locally-defined spreads.

use super::props::PropsMember;
use crate::types::TypeTable;
use schemagen_core::models::component::{BuiltInExtendsType, ExtendsPropSchema};
use schemagen_core::ParserError;
use swc_ecma_ast::Expr;

fn extends_name(member: &PropsMember<'_>) -> Option<String> {
    match member {
        PropsMember::Extends(heritage) => match heritage.expr.as_ref() {
            Expr::Ident(ident) => Some(ident.sym.as_ref().to_string()),
            _ => None,
        },
        _ => None,
    }
}

/// Maps `extends` entries to their built-in schema tags.
///
/// Names declared in the same file are not extends props; they get
/// flattened into the property list later. `ViewProps` is the only
/// built-in a component may inherit from; any other unknown name is fatal.
pub fn get_extends_props(
    members: &[PropsMember<'_>],
    types: &TypeTable<'_>,
) -> Result<Vec<ExtendsPropSchema>, ParserError> {
    let mut extends_props = Vec::new();
    for member in members {
        let Some(name) = extends_name(member) else {
            continue;
        };
        if types.contains_key(&name) {
            continue;
        }
        match name.as_str() {
            "ViewProps" => extends_props.push(ExtendsPropSchema::ReactNativeBuiltIn {
                known_type_name: BuiltInExtendsType::ReactNativeCoreViewProps,
            }),
            _ => return Err(ParserError::UnsupportedPropSpread { name }),
        }
    }
    Ok(extends_props)
}

/// Drops the built-in `extends` entries, keeping plain properties and
/// locally-defined spreads for flattening.
pub fn remove_known_extends<'a>(
    members: Vec<PropsMember<'a>>,
    types: &TypeTable<'a>,
) -> Vec<PropsMember<'a>> {
    members
        .into_iter()
        .filter(|member| match extends_name(member) {
            Some(name) => types.contains_key(&name),
            None => true,
        })
        .collect()
}
