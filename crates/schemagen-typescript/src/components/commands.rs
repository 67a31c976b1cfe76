//! Command extraction from the `codegenNativeCommands` interface.

use crate::types::{key_name, resolve_type_annotation, ts_type_kind, type_ref_name, TypeDecl, TypeTable};
use schemagen_core::models::component::{CommandParam, CommandParamTypeAnnotation, CommandSchema};
use schemagen_core::models::module::ReservedModuleType;
use schemagen_core::ParserError;
use std::collections::HashSet;
use swc_ecma_ast::{
    TsFnOrConstructorType, TsFnParam, TsKeywordTypeKind, TsType, TsTypeAnn, TsTypeElement,
};

/// Builds the command list for the named interface and checks that its
/// member names match `supportedCommands` exactly, as a set.
pub fn get_commands(
    interface_name: &str,
    supported_commands: &[String],
    types: &TypeTable<'_>,
) -> Result<Vec<CommandSchema>, ParserError> {
    let interface = match types.get(interface_name) {
        Some(TypeDecl::Interface(interface)) => interface,
        Some(decl @ TypeDecl::Alias(_)) => {
            return Err(ParserError::CommandsTypeMustBeInterface {
                kind: decl.kind().to_string(),
            });
        }
        None => {
            return Err(ParserError::PropsTypeNotFound {
                kind: "commands".to_string(),
                name: interface_name.to_string(),
            });
        }
    };

    let mut commands = Vec::new();
    for member in &interface.body.body {
        commands.push(build_command(member, types)?);
    }

    let declared: HashSet<&str> = commands.iter().map(|c| c.name.as_str()).collect();
    let supported: HashSet<&str> = supported_commands.iter().map(|s| s.as_str()).collect();
    if declared != supported {
        return Err(ParserError::CommandsMismatch {
            interface_name: interface_name.to_string(),
            expected: supported_commands.join(", "),
        });
    }

    Ok(commands)
}

fn build_command(
    member: &TsTypeElement,
    types: &TypeTable<'_>,
) -> Result<CommandSchema, ParserError> {
    match member {
        TsTypeElement::TsMethodSignature(method) => {
            let name = key_name(&method.key).unwrap_or_default();
            check_void_return(&name, method.type_ann.as_deref())?;
            let params = build_command_params(&name, &method.params, types)?;
            Ok(CommandSchema {
                name,
                optional: method.optional,
                params,
            })
        }
        TsTypeElement::TsPropertySignature(property) => {
            let name = key_name(&property.key).unwrap_or_default();
            let fn_type = property.type_ann.as_ref().and_then(|ann| match ann.type_ann.as_ref() {
                TsType::TsFnOrConstructorType(TsFnOrConstructorType::TsFnType(f)) => Some(f),
                _ => None,
            });
            let Some(fn_type) = fn_type else {
                return Err(ParserError::CommandMemberMustBeFunction {
                    name,
                    kind: property
                        .type_ann
                        .as_ref()
                        .map(|ann| ts_type_kind(&ann.type_ann))
                        .unwrap_or("missing type annotation")
                        .to_string(),
                });
            };
            check_void_return(&name, Some(&fn_type.type_ann))?;
            let params = build_command_params(&name, &fn_type.params, types)?;
            Ok(CommandSchema {
                name,
                optional: property.optional,
                params,
            })
        }
        other => Err(ParserError::CommandMemberMustBeFunction {
            name: String::new(),
            kind: type_element_kind(other).to_string(),
        }),
    }
}

fn check_void_return(name: &str, return_ann: Option<&TsTypeAnn>) -> Result<(), ParserError> {
    match return_ann {
        Some(ann) => match ann.type_ann.as_ref() {
            TsType::TsKeywordType(keyword) if keyword.kind == TsKeywordTypeKind::TsVoidKeyword => {
                Ok(())
            }
            other => Err(ParserError::CommandReturnNotVoid {
                name: name.to_string(),
                kind: ts_type_kind(other).to_string(),
            }),
        },
        None => Err(ParserError::CommandReturnNotVoid {
            name: name.to_string(),
            kind: "missing return type".to_string(),
        }),
    }
}

fn build_command_params(
    command: &str,
    params: &[TsFnParam],
    types: &TypeTable<'_>,
) -> Result<Vec<CommandParam>, ParserError> {
    let mut out = Vec::new();
    for param in params {
        let TsFnParam::Ident(binding) = param else {
            return Err(ParserError::UnsupportedCommandParam {
                command: command.to_string(),
                param: String::new(),
                kind: "destructured parameter".to_string(),
            });
        };
        let name = binding.id.sym.as_ref().to_string();

        // The leading view handle parameter carries no payload and is not
        // part of the dispatched command signature.
        if is_view_ref_param(binding.type_ann.as_deref()) {
            continue;
        }

        let Some(type_ann) = binding.type_ann.as_ref() else {
            return Err(ParserError::UnsupportedCommandParam {
                command: command.to_string(),
                param: name,
                kind: "missing type annotation".to_string(),
            });
        };

        let resolved = resolve_type_annotation(&type_ann.type_ann, types)?;
        let optional = binding.id.optional || resolved.nullable;
        let type_annotation = command_param_type(command, &name, resolved.type_annotation)?;

        out.push(CommandParam {
            name,
            optional,
            type_annotation,
        });
    }
    Ok(out)
}

/// `React.ElementRef<...>` (a qualified type name) marks the view handle.
fn is_view_ref_param(type_ann: Option<&TsTypeAnn>) -> bool {
    matches!(
        type_ann.map(|ann| ann.type_ann.as_ref()),
        Some(TsType::TsTypeRef(type_ref)) if type_ref_name(type_ref).is_none()
    )
}

fn command_param_type(
    command: &str,
    param: &str,
    node: &TsType,
) -> Result<CommandParamTypeAnnotation, ParserError> {
    match node {
        TsType::TsKeywordType(keyword) => match keyword.kind {
            TsKeywordTypeKind::TsBooleanKeyword => Ok(CommandParamTypeAnnotation::Boolean),
            TsKeywordTypeKind::TsStringKeyword => Ok(CommandParamTypeAnnotation::String),
            _ => Err(ParserError::UnsupportedCommandParam {
                command: command.to_string(),
                param: param.to_string(),
                kind: ts_type_kind(node).to_string(),
            }),
        },
        TsType::TsTypeRef(type_ref) => match type_ref_name(type_ref) {
            Some("Int32") => Ok(CommandParamTypeAnnotation::Int32),
            Some("Double") => Ok(CommandParamTypeAnnotation::Double),
            Some("Float") => Ok(CommandParamTypeAnnotation::Float),
            Some("RootTag") => Ok(CommandParamTypeAnnotation::Reserved {
                name: ReservedModuleType::RootTag,
            }),
            other => Err(ParserError::UnsupportedCommandParam {
                command: command.to_string(),
                param: param.to_string(),
                kind: other.unwrap_or("TsQualifiedName").to_string(),
            }),
        },
        other => Err(ParserError::UnsupportedCommandParam {
            command: command.to_string(),
            param: param.to_string(),
            kind: ts_type_kind(other).to_string(),
        }),
    }
}

fn type_element_kind(member: &TsTypeElement) -> &'static str {
    match member {
        TsTypeElement::TsCallSignatureDecl(_) => "TsCallSignatureDecl",
        TsTypeElement::TsConstructSignatureDecl(_) => "TsConstructSignatureDecl",
        TsTypeElement::TsPropertySignature(_) => "TsPropertySignature",
        TsTypeElement::TsGetterSignature(_) => "TsGetterSignature",
        TsTypeElement::TsSetterSignature(_) => "TsSetterSignature",
        TsTypeElement::TsMethodSignature(_) => "TsMethodSignature",
        TsTypeElement::TsIndexSignature(_) => "TsIndexSignature",
    }
}
