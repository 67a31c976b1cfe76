//! Native module (TurboModule) schema builder.
//!
//! Locates the `Spec` interface and the registry call, then translates
//! each interface member into a method schema. Members are processed
//! independently: a failing member lands in the soft-error sink and is
//! dropped from the output instead of aborting the file.

use crate::types::{
    collect_types, key_name, resolve_type_annotation, ts_type_kind, type_ref_name, TypeTable,
};
use indexmap::IndexMap;
use schemagen_core::models::module::{
    FunctionTypeAnnotation, MethodParamSchema, ModulePropertySchema, ModuleTypeAnnotation,
    NativeModuleSchema, NativeModuleSpec, ObjectPropertySchema, ObjectTypeAnnotation,
    ReservedModuleType,
};
use schemagen_core::models::{Nullable, Platform};
use schemagen_core::{ErrorSink, ParserError};
use swc_ecma_ast::{
    CallExpr, Callee, Decl, Expr, Lit, MemberProp, Module, ModuleDecl, ModuleItem, Stmt,
    TsFnOrConstructorType, TsFnParam, TsInterfaceDecl, TsKeywordTypeKind, TsType, TsTypeAnn,
    TsTypeElement,
};

/// Everything the recursive translation steps need to share.
struct ModuleContext<'a> {
    module: &'a str,
    types: &'a TypeTable<'a>,
}

type AliasMap = IndexMap<String, ObjectTypeAnnotation>;

/// Builds the schema for one native module spec file.
///
/// Hard (file-structural) failures return `Err`; per-member translation
/// failures are collected in `sink` and the member is omitted.
pub fn build_module_schema(
    haste_module_name: &str,
    module: &Module,
    sink: &mut ErrorSink,
) -> Result<NativeModuleSchema, ParserError> {
    let types = collect_types(module);
    let spec_interface = find_spec_interface(haste_module_name, module)?;
    let module_name = find_registered_module_name(haste_module_name, module)?;

    tracing::debug!(
        module = %haste_module_name,
        registered = %module_name,
        "building native module schema"
    );

    let excluded_platforms = excluded_platforms(&module_name, haste_module_name);

    let ctx = ModuleContext {
        module: haste_module_name,
        types: &types,
    };

    let mut aliases = AliasMap::new();
    let mut properties = Vec::new();
    for member in &spec_interface.body.body {
        // Member-local alias registrations only survive if the whole
        // member translates.
        let mut member_aliases = AliasMap::new();
        let result = translate_module_property(&ctx, &mut member_aliases, sink, member);
        if let Some(property) = sink.capture(result) {
            aliases.extend(member_aliases);
            properties.push(property);
        }
    }

    Ok(NativeModuleSchema {
        aliases,
        spec: NativeModuleSpec { properties },
        module_names: vec![module_name],
        excluded_platforms,
    })
}

fn is_turbo_module_interface(interface: &TsInterfaceDecl) -> bool {
    interface.extends.len() == 1
        && matches!(
            interface.extends[0].expr.as_ref(),
            Expr::Ident(ident) if ident.sym.as_ref() == "TurboModule"
        )
}

fn find_spec_interface<'a>(
    haste_module_name: &str,
    module: &'a Module,
) -> Result<&'a TsInterfaceDecl, ParserError> {
    let mut candidates: Vec<&TsInterfaceDecl> = Vec::new();
    for item in &module.body {
        let decl = match item {
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => &export.decl,
            ModuleItem::Stmt(Stmt::Decl(decl)) => decl,
            _ => continue,
        };
        if let Decl::TsInterface(interface) = decl {
            if is_turbo_module_interface(interface) {
                candidates.push(interface);
            }
        }
    }

    match candidates.as_slice() {
        [] => Err(ParserError::ModuleInterfaceNotFound {
            module: haste_module_name.to_string(),
        }),
        [interface] => {
            let name = interface.id.sym.as_ref();
            if name != "Spec" {
                return Err(ParserError::MisnamedModuleInterface {
                    module: haste_module_name.to_string(),
                    name: name.to_string(),
                });
            }
            Ok(interface)
        }
        many => Err(ParserError::MoreThanOneModuleInterface {
            module: haste_module_name.to_string(),
            names: many
                .iter()
                .map(|i| i.id.sym.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

/// Validates the unique `TurboModuleRegistry.get`/`getEnforcing` call and
/// returns the registered module name.
fn find_registered_module_name(
    haste_module_name: &str,
    module: &Module,
) -> Result<String, ParserError> {
    let mut calls: Vec<(&CallExpr, String)> = Vec::new();
    for item in &module.body {
        match item {
            ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(export)) => {
                collect_registry_calls(&export.expr, &mut calls);
            }
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
                if let Decl::Var(var) = &export.decl {
                    for declarator in &var.decls {
                        if let Some(init) = &declarator.init {
                            collect_registry_calls(init, &mut calls);
                        }
                    }
                }
            }
            ModuleItem::Stmt(Stmt::Decl(Decl::Var(var))) => {
                for declarator in &var.decls {
                    if let Some(init) = &declarator.init {
                        collect_registry_calls(init, &mut calls);
                    }
                }
            }
            ModuleItem::Stmt(Stmt::Expr(stmt)) => {
                collect_registry_calls(&stmt.expr, &mut calls);
            }
            _ => {}
        }
    }

    let (call, method) = match calls.as_slice() {
        [] => {
            return Err(ParserError::ModuleRegistryCallNotFound {
                module: haste_module_name.to_string(),
            })
        }
        [(call, method)] => (*call, method.clone()),
        many => {
            return Err(ParserError::MoreThanOneRegistryCall {
                module: haste_module_name.to_string(),
                count: many.len(),
            })
        }
    };

    if call.args.len() != 1 {
        return Err(ParserError::IncorrectRegistryCallArity {
            module: haste_module_name.to_string(),
            method,
            count: call.args.len(),
        });
    }

    let name = match call.args[0].expr.as_ref() {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().unwrap_or("").to_string(),
        other => {
            return Err(ParserError::IncorrectRegistryCallArgument {
                module: haste_module_name.to_string(),
                method,
                kind: expr_kind(other).to_string(),
            })
        }
    };

    let Some(type_args) = call.type_args.as_ref() else {
        return Err(ParserError::UntypedRegistryCall {
            module: haste_module_name.to_string(),
            method,
            name,
        });
    };

    let is_spec = type_args.params.len() == 1
        && matches!(
            type_args.params[0].as_ref(),
            TsType::TsTypeRef(type_ref) if type_ref_name(type_ref) == Some("Spec")
        );
    if !is_spec {
        return Err(ParserError::IncorrectRegistryCallTypeParameter {
            module: haste_module_name.to_string(),
            method,
            name,
        });
    }

    Ok(name)
}

/// Recursively searches an expression for registry calls, looking through
/// casts, parentheses, member chains, and call arguments.
fn collect_registry_calls<'a>(expr: &'a Expr, out: &mut Vec<(&'a CallExpr, String)>) {
    match expr {
        Expr::Call(call) => {
            if let Some(method) = registry_method(call) {
                out.push((call, method));
            }
            if let Callee::Expr(callee) = &call.callee {
                collect_registry_calls(callee, out);
            }
            for arg in &call.args {
                collect_registry_calls(&arg.expr, out);
            }
        }
        Expr::TsAs(cast) => collect_registry_calls(&cast.expr, out),
        Expr::TsSatisfies(cast) => collect_registry_calls(&cast.expr, out),
        Expr::TsTypeAssertion(cast) => collect_registry_calls(&cast.expr, out),
        Expr::TsNonNull(cast) => collect_registry_calls(&cast.expr, out),
        Expr::Paren(paren) => collect_registry_calls(&paren.expr, out),
        Expr::Member(member) => collect_registry_calls(&member.obj, out),
        _ => {}
    }
}

/// Matches `TurboModuleRegistry.get` / `.getEnforcing` with a non-computed
/// member access.
fn registry_method(call: &CallExpr) -> Option<String> {
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };
    let Expr::Member(member) = callee.as_ref() else {
        return None;
    };
    let Expr::Ident(object) = member.obj.as_ref() else {
        return None;
    };
    if object.sym.as_ref() != "TurboModuleRegistry" {
        return None;
    }
    let MemberProp::Ident(prop) = &member.prop else {
        return None;
    };
    match prop.sym.as_ref() {
        method @ ("get" | "getEnforcing") => Some(method.to_string()),
        _ => None,
    }
}

/// Applies the `Android`/`IOS` suffix convention to both the registered
/// name and the haste module name. The effects are additive.
fn excluded_platforms(module_name: &str, haste_module_name: &str) -> Option<Vec<Platform>> {
    let mut excluded = Vec::new();
    for name in [module_name, haste_module_name] {
        if name.ends_with("Android") && !excluded.contains(&Platform::Ios) {
            excluded.push(Platform::Ios);
        }
        if name.ends_with("IOS") && !excluded.contains(&Platform::Android) {
            excluded.push(Platform::Android);
        }
    }
    if excluded.is_empty() {
        None
    } else {
        Some(excluded)
    }
}

fn translate_module_property(
    ctx: &ModuleContext<'_>,
    aliases: &mut AliasMap,
    sink: &mut ErrorSink,
    member: &TsTypeElement,
) -> Result<ModulePropertySchema, ParserError> {
    match member {
        TsTypeElement::TsMethodSignature(method) => {
            let name = key_name(&method.key).unwrap_or_default();
            let function =
                translate_function(ctx, aliases, sink, &method.params, method.type_ann.as_deref())?;
            Ok(ModulePropertySchema {
                name,
                optional: method.optional,
                type_annotation: Nullable::non_null(function),
            })
        }
        TsTypeElement::TsPropertySignature(property) => {
            let name = key_name(&property.key).unwrap_or_default();
            let Some(type_ann) = property.type_ann.as_ref() else {
                return Err(ParserError::UnsupportedModuleProperty {
                    module: ctx.module.to_string(),
                    name,
                    kind: "missing type annotation".to_string(),
                });
            };
            let resolved = resolve_type_annotation(&type_ann.type_ann, ctx.types)?;
            let TsType::TsFnOrConstructorType(TsFnOrConstructorType::TsFnType(fn_type)) =
                resolved.type_annotation
            else {
                return Err(ParserError::UnsupportedModuleProperty {
                    module: ctx.module.to_string(),
                    name,
                    kind: ts_type_kind(resolved.type_annotation).to_string(),
                });
            };
            let function =
                translate_function(ctx, aliases, sink, &fn_type.params, Some(&fn_type.type_ann))?;
            Ok(ModulePropertySchema {
                name,
                optional: property.optional,
                type_annotation: Nullable::new(resolved.nullable, function),
            })
        }
        other => Err(ParserError::UnsupportedModuleProperty {
            module: ctx.module.to_string(),
            name: String::new(),
            kind: type_element_kind(other).to_string(),
        }),
    }
}

fn translate_function(
    ctx: &ModuleContext<'_>,
    aliases: &mut AliasMap,
    sink: &mut ErrorSink,
    params: &[TsFnParam],
    return_ann: Option<&TsTypeAnn>,
) -> Result<FunctionTypeAnnotation, ParserError> {
    let mut param_schemas = Vec::new();
    for param in params {
        let TsFnParam::Ident(binding) = param else {
            return Err(ParserError::UnnamedFunctionParam {
                module: ctx.module.to_string(),
            });
        };
        let name = binding.id.sym.as_ref().to_string();
        let Some(type_ann) = binding.type_ann.as_ref() else {
            return Err(ParserError::UnnamedFunctionParam {
                module: ctx.module.to_string(),
            });
        };

        let translated = translate_type_annotation(ctx, aliases, sink, &type_ann.type_ann)?;
        match &translated.type_annotation {
            ModuleTypeAnnotation::Void | ModuleTypeAnnotation::Promise => {
                return Err(ParserError::UnsupportedFunctionParam {
                    module: ctx.module.to_string(),
                    param: name,
                    kind: translated.type_annotation.kind().to_string(),
                });
            }
            _ => {}
        }

        param_schemas.push(MethodParamSchema {
            name,
            optional: binding.id.optional || translated.nullable,
            type_annotation: translated,
        });
    }

    let Some(return_ann) = return_ann else {
        return Err(ParserError::UnsupportedFunctionReturn {
            module: ctx.module.to_string(),
            kind: "missing return type".to_string(),
        });
    };
    let return_type = translate_type_annotation(ctx, aliases, sink, &return_ann.type_ann)?;
    if matches!(&return_type.type_annotation, ModuleTypeAnnotation::Function(_)) {
        return Err(ParserError::UnsupportedFunctionReturn {
            module: ctx.module.to_string(),
            kind: return_type.type_annotation.kind().to_string(),
        });
    }

    Ok(FunctionTypeAnnotation {
        params: param_schemas,
        return_type_annotation: Box::new(return_type),
    })
}

fn translate_type_annotation(
    ctx: &ModuleContext<'_>,
    aliases: &mut AliasMap,
    sink: &mut ErrorSink,
    ts_type: &TsType,
) -> Result<Nullable<ModuleTypeAnnotation>, ParserError> {
    let resolved = resolve_type_annotation(ts_type, ctx.types)?;
    let node = resolved.type_annotation;

    let annotation = match node {
        TsType::TsTypeRef(type_ref) => {
            let Some(name) = type_ref_name(type_ref) else {
                return Err(ParserError::UnsupportedTypeAnnotation {
                    module: ctx.module.to_string(),
                    kind: "TsQualifiedName".to_string(),
                });
            };
            match name {
                "Promise" => {
                    require_single_type_argument(ctx, name, type_ref)?;
                    ModuleTypeAnnotation::Promise
                }
                "Array" | "ReadonlyArray" => {
                    let element = require_single_type_argument(ctx, name, type_ref)?;
                    ModuleTypeAnnotation::Array {
                        element_type: translate_array_element(ctx, aliases, sink, element)?,
                    }
                }
                "Readonly" => {
                    let inner = require_single_type_argument(ctx, name, type_ref)?;
                    let translated = translate_type_annotation(ctx, aliases, sink, inner)?;
                    return Ok(Nullable::new(
                        resolved.nullable || translated.nullable,
                        translated.type_annotation,
                    ));
                }
                "RootTag" => ModuleTypeAnnotation::Reserved {
                    name: ReservedModuleType::RootTag,
                },
                "Stringish" => ModuleTypeAnnotation::String,
                "Int32" => ModuleTypeAnnotation::Int32,
                "Double" => ModuleTypeAnnotation::Double,
                "Float" => ModuleTypeAnnotation::Float,
                "Object" | "UnsafeObject" => ModuleTypeAnnotation::GenericObject,
                _ => {
                    return Err(ParserError::UnsupportedGeneric {
                        module: ctx.module.to_string(),
                        name: name.to_string(),
                    })
                }
            }
        }
        TsType::TsTypeLit(lit) => {
            let properties = translate_object_properties(ctx, aliases, sink, &lit.members)?;
            match &resolved.alias_name {
                Some(alias_name) => {
                    // Register the shape once; later usages of the same
                    // alias overwrite with structurally identical data.
                    aliases.insert(alias_name.clone(), ObjectTypeAnnotation { properties });
                    ModuleTypeAnnotation::TypeAlias {
                        name: alias_name.clone(),
                    }
                }
                None => ModuleTypeAnnotation::Object { properties },
            }
        }
        TsType::TsKeywordType(keyword) => match keyword.kind {
            TsKeywordTypeKind::TsBooleanKeyword => ModuleTypeAnnotation::Boolean,
            TsKeywordTypeKind::TsNumberKeyword => ModuleTypeAnnotation::Number,
            TsKeywordTypeKind::TsStringKeyword => ModuleTypeAnnotation::String,
            TsKeywordTypeKind::TsVoidKeyword => ModuleTypeAnnotation::Void,
            _ => {
                return Err(ParserError::UnsupportedTypeAnnotation {
                    module: ctx.module.to_string(),
                    kind: ts_type_kind(node).to_string(),
                })
            }
        },
        TsType::TsFnOrConstructorType(TsFnOrConstructorType::TsFnType(fn_type)) => {
            ModuleTypeAnnotation::Function(translate_function(
                ctx,
                aliases,
                sink,
                &fn_type.params,
                Some(&fn_type.type_ann),
            )?)
        }
        other => {
            return Err(ParserError::UnsupportedTypeAnnotation {
                module: ctx.module.to_string(),
                kind: ts_type_kind(other).to_string(),
            })
        }
    };

    Ok(Nullable::new(resolved.nullable, annotation))
}

/// Translates an array element type.
///
/// Void, Promise, and function elements are rejected for the enclosing
/// member; any other translation failure silently degrades to an untyped
/// element so not-yet-migrated specs keep parsing.
fn translate_array_element(
    ctx: &ModuleContext<'_>,
    aliases: &mut AliasMap,
    sink: &mut ErrorSink,
    element: &TsType,
) -> Result<Option<Box<Nullable<ModuleTypeAnnotation>>>, ParserError> {
    let Ok(resolved) = resolve_type_annotation(element, ctx.types) else {
        return Ok(None);
    };

    let rejected_kind = match resolved.type_annotation {
        TsType::TsKeywordType(keyword) if keyword.kind == TsKeywordTypeKind::TsVoidKeyword => {
            Some("void")
        }
        TsType::TsTypeRef(type_ref) if type_ref_name(type_ref) == Some("Promise") => {
            Some("Promise")
        }
        TsType::TsFnOrConstructorType(TsFnOrConstructorType::TsFnType(_)) => {
            Some("FunctionTypeAnnotation")
        }
        _ => None,
    };
    if let Some(kind) = rejected_kind {
        return Err(ParserError::UnsupportedArrayElement {
            module: ctx.module.to_string(),
            kind: kind.to_string(),
        });
    }

    match translate_type_annotation(ctx, aliases, sink, element) {
        Ok(translated) => Ok(Some(Box::new(translated))),
        Err(error) => {
            tracing::debug!(error = %error, "array element failed to translate, degrading to untyped array");
            Ok(None)
        }
    }
}

fn translate_object_properties(
    ctx: &ModuleContext<'_>,
    aliases: &mut AliasMap,
    sink: &mut ErrorSink,
    members: &[TsTypeElement],
) -> Result<Vec<ObjectPropertySchema>, ParserError> {
    let mut properties = Vec::new();
    for member in members {
        let result = translate_object_property(ctx, aliases, sink, member);
        if let Some(property) = sink.capture(result) {
            properties.push(property);
        }
    }
    Ok(properties)
}

fn translate_object_property(
    ctx: &ModuleContext<'_>,
    aliases: &mut AliasMap,
    sink: &mut ErrorSink,
    member: &TsTypeElement,
) -> Result<ObjectPropertySchema, ParserError> {
    let TsTypeElement::TsPropertySignature(property) = member else {
        return Err(ParserError::UnsupportedObjectProperty {
            module: ctx.module.to_string(),
            kind: type_element_kind(member).to_string(),
        });
    };
    let name = key_name(&property.key).unwrap_or_default();
    let Some(type_ann) = property.type_ann.as_ref() else {
        return Err(ParserError::UnsupportedObjectPropertyValue {
            module: ctx.module.to_string(),
            name,
            kind: "missing type annotation".to_string(),
        });
    };

    let translated = translate_type_annotation(ctx, aliases, sink, &type_ann.type_ann)?;
    match &translated.type_annotation {
        ModuleTypeAnnotation::Void
        | ModuleTypeAnnotation::Promise
        | ModuleTypeAnnotation::Function(_) => {
            return Err(ParserError::UnsupportedObjectPropertyValue {
                module: ctx.module.to_string(),
                name,
                kind: translated.type_annotation.kind().to_string(),
            });
        }
        _ => {}
    }

    Ok(ObjectPropertySchema {
        name,
        optional: property.optional || translated.nullable,
        type_annotation: translated,
    })
}

fn require_single_type_argument<'a>(
    ctx: &ModuleContext<'_>,
    name: &str,
    type_ref: &'a swc_ecma_ast::TsTypeRef,
) -> Result<&'a TsType, ParserError> {
    type_ref
        .type_params
        .as_ref()
        .and_then(|args| {
            if args.params.len() == 1 {
                args.params.first().map(|p| p.as_ref())
            } else {
                None
            }
        })
        .ok_or_else(|| ParserError::IncorrectlyParameterizedGeneric {
            module: ctx.module.to_string(),
            name: name.to_string(),
        })
}

fn expr_kind(expr: &Expr) -> &'static str {
    match expr {
        Expr::Ident(_) => "Ident",
        Expr::Call(_) => "CallExpr",
        Expr::Tpl(_) => "TemplateLiteral",
        Expr::Member(_) => "MemberExpr",
        Expr::Lit(_) => "Lit",
        _ => "Expr",
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
