//! Prop flattening and prop-type translation for native components.

use crate::types::{
    is_null_or_void, key_name, lookup_type, ts_type_kind, type_ref_name, TypeDecl, TypeTable,
};
use schemagen_core::models::component::{
    PropArrayElement, PropSchema, PropTypeAnnotation, ReservedPropType,
};
use schemagen_core::ParserError;
use std::collections::HashSet;
use swc_ecma_ast::{
    TsExprWithTypeArgs, TsKeywordTypeKind, TsLit, TsPropertySignature, TsType, TsTypeElement,
    TsTypeOperatorOp, TsTypeRef, TsUnionOrIntersectionType, TsUnionType,
};

/// One raw member of a props type, before flattening.
#[derive(Debug, Clone, Copy)]
pub enum PropsMember<'a> {
    /// A plain property declaration.
    Property(&'a TsPropertySignature),
    /// An interface `extends` clause entry.
    Extends(&'a TsExprWithTypeArgs),
    /// A named spread (`type Props = Readonly<Base & ...>` style reference).
    Spread(&'a TsTypeRef),
}

/// Default value extracted from the second type argument of
/// `WithDefault<T, D>`.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// No `WithDefault` wrapper was present.
    Unset,
    /// Explicit `WithDefault<T, null>`.
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl DefaultValue {
    fn from_type(ts_type: &TsType) -> Self {
        match ts_type {
            TsType::TsLitType(lit) => match &lit.lit {
                TsLit::Str(s) => DefaultValue::String(s.value.as_str().unwrap_or("").to_string()),
                TsLit::Number(n) => DefaultValue::Number(n.value),
                TsLit::Bool(b) => DefaultValue::Bool(b.value),
                _ => DefaultValue::Unset,
            },
            TsType::TsKeywordType(keyword)
                if matches!(
                    keyword.kind,
                    TsKeywordTypeKind::TsNullKeyword | TsKeywordTypeKind::TsUndefinedKeyword
                ) =>
            {
                DefaultValue::Null
            }
            _ => DefaultValue::Unset,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match self {
            DefaultValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            DefaultValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        self.as_f64().map(|value| value as i64)
    }

    fn is_null(&self) -> bool {
        matches!(self, DefaultValue::Null)
    }
}

/// Returns the raw member list of the named props type.
///
/// Interfaces contribute their `extends` clauses followed by their body.
/// Type aliases are probed in priority order: a direct object literal, the
/// object literal inside the first type argument (`Readonly<{...}>`), and
/// finally the type arguments themselves as named spreads.
pub fn get_prop_properties<'a>(
    name: &str,
    types: &TypeTable<'a>,
) -> Result<Vec<PropsMember<'a>>, ParserError> {
    let Some(decl) = types.get(name) else {
        return Err(ParserError::PropsTypeNotFound {
            kind: "props".to_string(),
            name: name.to_string(),
        });
    };

    match decl {
        TypeDecl::Interface(interface) => {
            let mut members: Vec<PropsMember<'a>> =
                interface.extends.iter().map(PropsMember::Extends).collect();
            members.extend(type_lit_members(&interface.body.body));
            Ok(members)
        }
        TypeDecl::Alias(alias) => match alias.type_ann.as_ref() {
            TsType::TsTypeLit(lit) => Ok(type_lit_members(&lit.members)),
            TsType::TsTypeRef(type_ref) => {
                let Some(args) = type_ref.type_params.as_ref() else {
                    return Ok(vec![PropsMember::Spread(type_ref)]);
                };
                if let Some(TsType::TsTypeLit(lit)) = args.params.first().map(|p| p.as_ref()) {
                    return Ok(type_lit_members(&lit.members));
                }
                Ok(args
                    .params
                    .iter()
                    .filter_map(|param| match param.as_ref() {
                        TsType::TsTypeRef(inner) => Some(PropsMember::Spread(inner)),
                        _ => None,
                    })
                    .collect())
            }
            other => Err(ParserError::PropsTypeNotFound {
                kind: ts_type_kind(other).to_string(),
                name: name.to_string(),
            }),
        },
    }
}

fn type_lit_members<'a>(members: &'a [TsTypeElement]) -> Vec<PropsMember<'a>> {
    members
        .iter()
        .filter_map(|member| match member {
            TsTypeElement::TsPropertySignature(property) => Some(PropsMember::Property(property)),
            _ => None,
        })
        .collect()
}

/// Expands spreads and nested `extends` clauses into a flat property list.
///
/// Duplicate names across the flattened set are rejected, no matter which
/// source declaration contributed them first. A spread chain that revisits
/// a name fails instead of recursing forever.
pub fn flatten_properties<'a>(
    members: &[PropsMember<'a>],
    types: &TypeTable<'a>,
) -> Result<Vec<&'a TsPropertySignature>, ParserError> {
    let mut seen_names: HashSet<String> = HashSet::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut flattened = Vec::new();
    flatten_into(members, types, &mut seen_names, &mut visited, &mut flattened)?;
    Ok(flattened)
}

fn flatten_into<'a>(
    members: &[PropsMember<'a>],
    types: &TypeTable<'a>,
    seen_names: &mut HashSet<String>,
    visited: &mut HashSet<String>,
    out: &mut Vec<&'a TsPropertySignature>,
) -> Result<(), ParserError> {
    for member in members {
        match member {
            PropsMember::Property(property) => {
                if let Some(name) = key_name(&property.key) {
                    if !seen_names.insert(name.clone()) {
                        return Err(ParserError::PropAlreadyDefined { name });
                    }
                }
                out.push(property);
            }
            PropsMember::Spread(type_ref) => {
                let name = type_ref_name(type_ref).unwrap_or("").to_string();
                flatten_named(&name, types, seen_names, visited, out)?;
            }
            PropsMember::Extends(heritage) => {
                let name = match heritage.expr.as_ref() {
                    swc_ecma_ast::Expr::Ident(ident) => ident.sym.as_ref().to_string(),
                    _ => String::new(),
                };
                flatten_named(&name, types, seen_names, visited, out)?;
            }
        }
    }
    Ok(())
}

fn flatten_named<'a>(
    name: &str,
    types: &TypeTable<'a>,
    seen_names: &mut HashSet<String>,
    visited: &mut HashSet<String>,
    out: &mut Vec<&'a TsPropertySignature>,
) -> Result<(), ParserError> {
    if !types.contains_key(name) {
        return Err(ParserError::UnsupportedPropSpread {
            name: name.to_string(),
        });
    }
    if !visited.insert(name.to_string()) {
        return Err(ParserError::CircularTypeAlias {
            name: name.to_string(),
        });
    }
    let nested = get_prop_properties(name, types)?;
    flatten_into(&nested, types, seen_names, visited, out)
}

/// Result of stripping optionality markers and `WithDefault` off a prop
/// annotation.
struct ResolvedProp<'a> {
    node: &'a TsType,
    optional: bool,
    default: DefaultValue,
}

fn resolve_prop_type<'a>(
    name: &str,
    ts_type: &'a TsType,
    explicit_optional: bool,
    types: &TypeTable<'a>,
) -> Result<ResolvedProp<'a>, ParserError> {
    let mut node = ts_type;
    let mut saw_null_union = false;
    let mut saw_with_default = false;
    let mut default = DefaultValue::Unset;
    let mut followed: HashSet<String> = HashSet::new();

    loop {
        match node {
            TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsUnionType(union))
                if union.types.iter().any(|t| is_null_or_void(t)) =>
            {
                saw_null_union = true;
                node = union
                    .types
                    .iter()
                    .find(|t| !is_null_or_void(t))
                    .map(|t| t.as_ref())
                    .ok_or_else(|| ParserError::EmptyUnion {
                        name: name.to_string(),
                    })?;
            }
            TsType::TsTypeRef(type_ref) => {
                let Some(ref_name) = type_ref_name(type_ref) else {
                    break;
                };
                if ref_name == "WithDefault" {
                    if explicit_optional {
                        return Err(ParserError::RedundantOptionalMarkerOnWithDefault {
                            name: name.to_string(),
                        });
                    }
                    if saw_null_union {
                        return Err(ParserError::RedundantNullUnionOnWithDefault {
                            name: name.to_string(),
                        });
                    }
                    let args = type_ref
                        .type_params
                        .as_ref()
                        .filter(|args| args.params.len() == 2)
                        .ok_or_else(|| ParserError::IncorrectWithDefaultArity {
                            name: name.to_string(),
                        })?;
                    default = DefaultValue::from_type(&args.params[1]);
                    saw_with_default = true;
                    node = &args.params[0];
                } else if let Some(decl) = types.get(ref_name) {
                    match decl {
                        TypeDecl::Alias(alias) => {
                            if !followed.insert(ref_name.to_string()) {
                                return Err(ParserError::CircularTypeAlias {
                                    name: ref_name.to_string(),
                                });
                            }
                            node = &alias.type_ann;
                        }
                        TypeDecl::Interface(_) => {
                            return Err(ParserError::AliasMustBeTypeAlias {
                                name: ref_name.to_string(),
                                kind: decl.kind().to_string(),
                            });
                        }
                    }
                } else {
                    break;
                }
            }
            _ => break,
        }
    }

    Ok(ResolvedProp {
        node,
        optional: explicit_optional || saw_null_union || saw_with_default,
        default,
    })
}

/// Builds the schema for one flattened prop.
///
/// Returns `Ok(None)` for the two silently-dropped shapes: event-handler
/// typed props (they belong to the events list) and the `style` prop typed
/// as the view-style marker.
pub fn build_prop_schema(
    property: &TsPropertySignature,
    types: &TypeTable<'_>,
) -> Result<Option<PropSchema>, ParserError> {
    let Some(name) = key_name(&property.key) else {
        return Ok(None);
    };
    let Some(type_ann) = property.type_ann.as_ref() else {
        return Err(ParserError::UnknownPropType {
            name,
            kind: "missing type annotation".to_string(),
        });
    };

    if is_event_handler_type(&type_ann.type_ann, types) {
        return Ok(None);
    }
    if name == "style" && ref_name_is(&type_ann.type_ann, "ViewStyleProp") {
        return Ok(None);
    }

    let resolved = resolve_prop_type(&name, &type_ann.type_ann, property.optional, types)?;
    let type_annotation = get_type_annotation(&name, resolved.node, &resolved.default, types)?;

    Ok(Some(PropSchema {
        name,
        optional: resolved.optional,
        type_annotation,
    }))
}

/// True when the annotation is (an alias of) `DirectEventHandler` /
/// `BubblingEventHandler`, possibly behind a nullable union.
pub fn is_event_handler_type(ts_type: &TsType, types: &TypeTable<'_>) -> bool {
    let node = strip_null_union(ts_type);
    match lookup_type(node, types) {
        TsType::TsTypeRef(type_ref) => matches!(
            type_ref_name(type_ref),
            Some("DirectEventHandler") | Some("BubblingEventHandler")
        ),
        _ => false,
    }
}

fn ref_name_is(ts_type: &TsType, expected: &str) -> bool {
    matches!(
        strip_null_union(ts_type),
        TsType::TsTypeRef(type_ref) if type_ref_name(type_ref) == Some(expected)
    )
}

/// Skips over a top-level `| null | void` union without recording anything.
pub fn strip_null_union(ts_type: &TsType) -> &TsType {
    if let TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsUnionType(union)) =
        ts_type
    {
        if let Some(member) = union.types.iter().find(|t| !is_null_or_void(t)) {
            if union.types.iter().any(|t| is_null_or_void(t)) {
                return member;
            }
        }
    }
    ts_type
}

fn get_type_annotation(
    name: &str,
    node: &TsType,
    default: &DefaultValue,
    types: &TypeTable<'_>,
) -> Result<PropTypeAnnotation, ParserError> {
    match node {
        TsType::TsTypeRef(type_ref) => {
            let Some(ref_name) = type_ref_name(type_ref) else {
                return Err(ParserError::UnknownPropType {
                    name: name.to_string(),
                    kind: "TsQualifiedName".to_string(),
                });
            };
            match ref_name {
                "ImageSource" => Ok(PropTypeAnnotation::Reserved {
                    name: ReservedPropType::ImageSourcePrimitive,
                }),
                "ColorValue" | "ProcessedColorValue" => Ok(PropTypeAnnotation::Reserved {
                    name: ReservedPropType::ColorPrimitive,
                }),
                "PointValue" => Ok(PropTypeAnnotation::Reserved {
                    name: ReservedPropType::PointPrimitive,
                }),
                "EdgeInsetsValue" => Ok(PropTypeAnnotation::Reserved {
                    name: ReservedPropType::EdgeInsetsPrimitive,
                }),
                "ColorArrayValue" => Ok(PropTypeAnnotation::Array {
                    element_type: Box::new(PropArrayElement::Reserved {
                        name: ReservedPropType::ColorPrimitive,
                    }),
                }),
                "Int32" => Ok(PropTypeAnnotation::Int32 {
                    default: default.as_i64().unwrap_or(0),
                }),
                "Double" => Ok(PropTypeAnnotation::Double {
                    default: default.as_f64().unwrap_or(0.0),
                }),
                "Float" => Ok(float_annotation(default)),
                "Stringish" => string_annotation(name, default),
                "ReadonlyArray" => {
                    let element = single_type_argument(name, type_ref)?;
                    Ok(PropTypeAnnotation::Array {
                        element_type: Box::new(build_array_element(name, element, types)?),
                    })
                }
                "Readonly" => {
                    let inner = single_type_argument(name, type_ref)?;
                    readonly_annotation(name, inner, default, types)
                }
                _ => Err(ParserError::UnknownPropType {
                    name: name.to_string(),
                    kind: ref_name.to_string(),
                }),
            }
        }
        TsType::TsTypeOperator(operator) if operator.op == TsTypeOperatorOp::ReadOnly => {
            match operator.type_ann.as_ref() {
                TsType::TsArrayType(array) => Ok(PropTypeAnnotation::Array {
                    element_type: Box::new(build_array_element(name, &array.elem_type, types)?),
                }),
                other => Err(ParserError::UnknownPropType {
                    name: name.to_string(),
                    kind: ts_type_kind(other).to_string(),
                }),
            }
        }
        TsType::TsTypeLit(lit) => Ok(PropTypeAnnotation::Object {
            properties: build_object_properties(&lit.members, types)?,
        }),
        TsType::TsKeywordType(keyword) => match keyword.kind {
            TsKeywordTypeKind::TsBooleanKeyword => Ok(PropTypeAnnotation::Boolean {
                default: if default.is_null() {
                    None
                } else {
                    Some(default.as_bool().unwrap_or(false))
                },
            }),
            TsKeywordTypeKind::TsStringKeyword => string_annotation(name, default),
            TsKeywordTypeKind::TsNumberKeyword => Ok(float_annotation(default)),
            _ => Err(ParserError::UnknownPropType {
                name: name.to_string(),
                kind: ts_type_kind(node).to_string(),
            }),
        },
        TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsUnionType(union)) => {
            union_annotation(name, union, default)
        }
        other => Err(ParserError::UnknownPropType {
            name: name.to_string(),
            kind: ts_type_kind(other).to_string(),
        }),
    }
}

fn float_annotation(default: &DefaultValue) -> PropTypeAnnotation {
    PropTypeAnnotation::Float {
        default: if default.is_null() {
            None
        } else {
            Some(default.as_f64().unwrap_or(0.0))
        },
    }
}

fn string_annotation(name: &str, default: &DefaultValue) -> Result<PropTypeAnnotation, ParserError> {
    match default {
        DefaultValue::String(value) => Ok(PropTypeAnnotation::String {
            default: Some(value.clone()),
        }),
        DefaultValue::Null => Ok(PropTypeAnnotation::String { default: None }),
        _ => Err(ParserError::MissingStringDefault {
            name: name.to_string(),
        }),
    }
}

fn readonly_annotation(
    name: &str,
    inner: &TsType,
    default: &DefaultValue,
    types: &TypeTable<'_>,
) -> Result<PropTypeAnnotation, ParserError> {
    let inner = lookup_type(inner, types);
    match inner {
        TsType::TsTypeLit(lit) => Ok(PropTypeAnnotation::Object {
            properties: build_object_properties(&lit.members, types)?,
        }),
        TsType::TsArrayType(array) => Ok(PropTypeAnnotation::Array {
            element_type: Box::new(build_array_element(name, &array.elem_type, types)?),
        }),
        // Readonly<{...} | null> style aliases keep the object in the
        // first union member.
        TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsUnionType(union)) => {
            if let Some(TsType::TsTypeLit(lit)) = union.types.first().map(|t| t.as_ref()) {
                Ok(PropTypeAnnotation::Object {
                    properties: build_object_properties(&lit.members, types)?,
                })
            } else {
                get_type_annotation(name, inner, default, types)
            }
        }
        other => get_type_annotation(name, other, default, types),
    }
}

fn union_annotation(
    name: &str,
    union: &TsUnionType,
    default: &DefaultValue,
) -> Result<PropTypeAnnotation, ParserError> {
    let literals = union_literals(name, union)?;
    match literals {
        UnionLiterals::Strings(options) => {
            let default = match default {
                DefaultValue::String(value) => value.clone(),
                _ => {
                    return Err(ParserError::MissingEnumDefault {
                        name: name.to_string(),
                    })
                }
            };
            Ok(PropTypeAnnotation::StringEnum { default, options })
        }
        UnionLiterals::Numbers(options) => {
            let default = match default {
                DefaultValue::Number(value) => *value as i64,
                _ => {
                    return Err(ParserError::MissingEnumDefault {
                        name: name.to_string(),
                    })
                }
            };
            Ok(PropTypeAnnotation::Int32Enum { default, options })
        }
    }
}

enum UnionLiterals {
    Strings(Vec<String>),
    Numbers(Vec<i64>),
}

/// Collects a literal union into its option list, in declaration order.
/// Mixing literal kinds or including non-literal members is rejected.
fn union_literals(name: &str, union: &TsUnionType) -> Result<UnionLiterals, ParserError> {
    let mut strings = Vec::new();
    let mut numbers = Vec::new();

    for member in &union.types {
        let TsType::TsLitType(lit) = member.as_ref() else {
            return Err(ParserError::UnsupportedUnionType {
                name: name.to_string(),
                received: ts_type_kind(member).to_string(),
            });
        };
        match &lit.lit {
            TsLit::Str(s) => strings.push(s.value.as_str().unwrap_or("").to_string()),
            TsLit::Number(n) => numbers.push(n.value as i64),
            _ => {
                return Err(ParserError::MixedUnionTypes {
                    name: name.to_string(),
                })
            }
        }
    }

    match (strings.is_empty(), numbers.is_empty()) {
        (false, true) => Ok(UnionLiterals::Strings(strings)),
        (true, false) => Ok(UnionLiterals::Numbers(numbers)),
        _ => Err(ParserError::MixedUnionTypes {
            name: name.to_string(),
        }),
    }
}

/// Builds nested object properties. Event-handler and style special cases
/// apply here too, via [`build_prop_schema`].
pub fn build_object_properties(
    members: &[TsTypeElement],
    types: &TypeTable<'_>,
) -> Result<Vec<PropSchema>, ParserError> {
    let mut properties = Vec::new();
    for member in members {
        if let TsTypeElement::TsPropertySignature(property) = member {
            if let Some(schema) = build_prop_schema(property, types)? {
                properties.push(schema);
            }
        }
    }
    Ok(properties)
}

/// Translates an array element type. Optionality and defaults are illegal
/// inside array elements and raise descriptive errors.
fn build_array_element(
    name: &str,
    ts_type: &TsType,
    types: &TypeTable<'_>,
) -> Result<PropArrayElement, ParserError> {
    let mut node = ts_type;
    let mut followed: HashSet<String> = HashSet::new();

    loop {
        match node {
            TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsUnionType(union))
                if union.types.iter().any(|t| is_null_or_void(t)) =>
            {
                return Err(ParserError::NestedOptionalInArray);
            }
            TsType::TsTypeRef(type_ref) => {
                let Some(ref_name) = type_ref_name(type_ref) else {
                    break;
                };
                if ref_name == "WithDefault" {
                    return Err(ParserError::NestedDefaultInArray);
                }
                match types.get(ref_name) {
                    Some(TypeDecl::Alias(alias)) => {
                        if !followed.insert(ref_name.to_string()) {
                            return Err(ParserError::CircularTypeAlias {
                                name: ref_name.to_string(),
                            });
                        }
                        node = &alias.type_ann;
                    }
                    Some(decl @ TypeDecl::Interface(_)) => {
                        return Err(ParserError::AliasMustBeTypeAlias {
                            name: ref_name.to_string(),
                            kind: decl.kind().to_string(),
                        });
                    }
                    None => break,
                }
            }
            _ => break,
        }
    }

    match node {
        TsType::TsTypeRef(type_ref) => {
            let Some(ref_name) = type_ref_name(type_ref) else {
                return Err(ParserError::UnknownPropType {
                    name: name.to_string(),
                    kind: "TsQualifiedName".to_string(),
                });
            };
            match ref_name {
                "ImageSource" => Ok(PropArrayElement::Reserved {
                    name: ReservedPropType::ImageSourcePrimitive,
                }),
                "ColorValue" | "ProcessedColorValue" => Ok(PropArrayElement::Reserved {
                    name: ReservedPropType::ColorPrimitive,
                }),
                "PointValue" => Ok(PropArrayElement::Reserved {
                    name: ReservedPropType::PointPrimitive,
                }),
                "EdgeInsetsValue" => Ok(PropArrayElement::Reserved {
                    name: ReservedPropType::EdgeInsetsPrimitive,
                }),
                "Int32" => Ok(PropArrayElement::Int32),
                "Double" => Ok(PropArrayElement::Double),
                "Float" => Ok(PropArrayElement::Float),
                "Stringish" => Ok(PropArrayElement::String),
                "ReadonlyArray" => {
                    let element = single_type_argument(name, type_ref)?;
                    Ok(PropArrayElement::Array {
                        element_type: Box::new(build_array_element(name, element, types)?),
                    })
                }
                "Readonly" => {
                    let inner = lookup_type(single_type_argument(name, type_ref)?, types);
                    match inner {
                        TsType::TsTypeLit(lit) => Ok(PropArrayElement::Object {
                            properties: build_object_properties(&lit.members, types)?,
                        }),
                        TsType::TsArrayType(array) => Ok(PropArrayElement::Array {
                            element_type: Box::new(build_array_element(
                                name,
                                &array.elem_type,
                                types,
                            )?),
                        }),
                        other => build_array_element(name, other, types),
                    }
                }
                _ => Err(ParserError::UnknownPropType {
                    name: name.to_string(),
                    kind: ref_name.to_string(),
                }),
            }
        }
        TsType::TsTypeOperator(operator) if operator.op == TsTypeOperatorOp::ReadOnly => {
            match operator.type_ann.as_ref() {
                TsType::TsArrayType(array) => Ok(PropArrayElement::Array {
                    element_type: Box::new(build_array_element(name, &array.elem_type, types)?),
                }),
                other => Err(ParserError::UnknownPropType {
                    name: name.to_string(),
                    kind: ts_type_kind(other).to_string(),
                }),
            }
        }
        TsType::TsArrayType(array) => Ok(PropArrayElement::Array {
            element_type: Box::new(build_array_element(name, &array.elem_type, types)?),
        }),
        TsType::TsTypeLit(lit) => Ok(PropArrayElement::Object {
            properties: build_object_properties(&lit.members, types)?,
        }),
        TsType::TsKeywordType(keyword) => match keyword.kind {
            TsKeywordTypeKind::TsBooleanKeyword => Ok(PropArrayElement::Boolean),
            TsKeywordTypeKind::TsStringKeyword => Ok(PropArrayElement::String),
            TsKeywordTypeKind::TsNumberKeyword => Ok(PropArrayElement::Float),
            _ => Err(ParserError::UnknownPropType {
                name: name.to_string(),
                kind: ts_type_kind(node).to_string(),
            }),
        },
        TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsUnionType(union)) => {
            match union_literals(name, union)? {
                UnionLiterals::Strings(options) => Ok(PropArrayElement::StringEnum {
                    default: options.first().cloned().unwrap_or_default(),
                    options,
                }),
                UnionLiterals::Numbers(_) => Err(ParserError::ArrayOfIntEnums {
                    name: name.to_string(),
                }),
            }
        }
        other => Err(ParserError::UnknownPropType {
            name: name.to_string(),
            kind: ts_type_kind(other).to_string(),
        }),
    }
}

fn single_type_argument<'a>(
    name: &str,
    type_ref: &'a TsTypeRef,
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
        .ok_or_else(|| ParserError::UnknownPropType {
            name: name.to_string(),
            kind: type_ref_name(type_ref).unwrap_or("generic").to_string(),
        })
}
