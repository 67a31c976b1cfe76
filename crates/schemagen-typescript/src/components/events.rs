//! Event extraction from `DirectEventHandler` / `BubblingEventHandler`
//! typed props.

use crate::types::{
    is_null_or_void, key_name, lookup_type, resolve_type_annotation, ts_type_kind, type_ref_name,
    TypeTable,
};
use super::props::strip_null_union;
use schemagen_core::models::component::{
    BubblingType, EventObjectProperty, EventObjectType, EventPropTypeAnnotation, EventSchema,
    EventTypeAnnotation,
};
use schemagen_core::ParserError;
use swc_ecma_ast::{
    TsKeywordTypeKind, TsLit, TsPropertySignature, TsType, TsTypeElement, TsTypeRef,
    TsUnionOrIntersectionType,
};

/// Builds the schema for one event-handler prop. The caller has already
/// established that the prop is event-handler typed.
pub fn build_event_schema(
    property: &TsPropertySignature,
    types: &TypeTable<'_>,
) -> Result<Option<EventSchema>, ParserError> {
    let Some(name) = key_name(&property.key) else {
        return Ok(None);
    };
    let Some(type_ann) = property.type_ann.as_ref() else {
        return Ok(None);
    };

    let mut optional = property.optional;
    let node = &type_ann.type_ann;
    if !std::ptr::eq(strip_null_union(node), node.as_ref()) {
        optional = true;
    }

    let TsType::TsTypeRef(handler) = lookup_type(strip_null_union(node), types) else {
        return Ok(None);
    };
    let bubbling_type = match type_ref_name(handler) {
        Some("BubblingEventHandler") => BubblingType::Bubble,
        Some("DirectEventHandler") => BubblingType::Direct,
        _ => return Ok(None),
    };

    let argument = event_argument(&name, handler, types)?;
    let paper_top_level_name_deprecated = paper_name(handler);

    Ok(Some(EventSchema {
        name,
        optional,
        bubbling_type,
        paper_top_level_name_deprecated,
        type_annotation: EventTypeAnnotation { argument },
    }))
}

/// The optional second type argument names the legacy top-level event.
fn paper_name(handler: &TsTypeRef) -> Option<String> {
    let args = handler.type_params.as_ref()?;
    match args.params.get(1).map(|p| p.as_ref()) {
        Some(TsType::TsLitType(lit)) => match &lit.lit {
            TsLit::Str(s) => Some(s.value.as_str().unwrap_or("").to_string()),
            _ => None,
        },
        _ => None,
    }
}

fn event_argument(
    name: &str,
    handler: &TsTypeRef,
    types: &TypeTable<'_>,
) -> Result<Option<EventObjectType>, ParserError> {
    let Some(payload) = handler
        .type_params
        .as_ref()
        .and_then(|args| args.params.first())
    else {
        return Err(ParserError::UnsupportedEventPayload {
            name: name.to_string(),
            kind: "missing payload type".to_string(),
        });
    };

    let resolved = resolve_type_annotation(payload, types)?;
    match resolved.type_annotation {
        TsType::TsKeywordType(keyword)
            if matches!(
                keyword.kind,
                TsKeywordTypeKind::TsNullKeyword | TsKeywordTypeKind::TsUndefinedKeyword
            ) =>
        {
            Ok(None)
        }
        TsType::TsTypeLit(lit) => Ok(Some(EventObjectType {
            properties: build_event_properties(&lit.members, types)?,
        })),
        TsType::TsTypeRef(type_ref) if type_ref_name(type_ref) == Some("Readonly") => {
            let inner = type_ref
                .type_params
                .as_ref()
                .and_then(|args| args.params.first())
                .map(|p| lookup_type(p, types));
            match inner {
                Some(TsType::TsTypeLit(lit)) => Ok(Some(EventObjectType {
                    properties: build_event_properties(&lit.members, types)?,
                })),
                other => Err(ParserError::UnsupportedEventPayload {
                    name: name.to_string(),
                    kind: other.map(ts_type_kind).unwrap_or("Readonly").to_string(),
                }),
            }
        }
        other => Err(ParserError::UnsupportedEventPayload {
            name: name.to_string(),
            kind: ts_type_kind(other).to_string(),
        }),
    }
}

fn build_event_properties(
    members: &[TsTypeElement],
    types: &TypeTable<'_>,
) -> Result<Vec<EventObjectProperty>, ParserError> {
    let mut properties = Vec::new();
    for member in members {
        let TsTypeElement::TsPropertySignature(property) = member else {
            continue;
        };
        let Some(name) = key_name(&property.key) else {
            continue;
        };
        let Some(type_ann) = property.type_ann.as_ref() else {
            return Err(ParserError::UnknownEventPropertyType {
                name,
                kind: "missing type annotation".to_string(),
            });
        };

        let resolved = resolve_type_annotation(&type_ann.type_ann, types)?;
        let optional = property.optional || resolved.nullable;
        let type_annotation = event_property_type(&name, resolved.type_annotation, types)?;

        properties.push(EventObjectProperty {
            name,
            optional,
            type_annotation,
        });
    }
    Ok(properties)
}

fn event_property_type(
    name: &str,
    node: &TsType,
    types: &TypeTable<'_>,
) -> Result<EventPropTypeAnnotation, ParserError> {
    match node {
        TsType::TsKeywordType(keyword) => match keyword.kind {
            TsKeywordTypeKind::TsBooleanKeyword => Ok(EventPropTypeAnnotation::Boolean),
            TsKeywordTypeKind::TsStringKeyword => Ok(EventPropTypeAnnotation::String),
            TsKeywordTypeKind::TsNumberKeyword => Ok(EventPropTypeAnnotation::Double),
            _ => Err(ParserError::UnknownEventPropertyType {
                name: name.to_string(),
                kind: ts_type_kind(node).to_string(),
            }),
        },
        TsType::TsTypeRef(type_ref) => match type_ref_name(type_ref) {
            Some("Int32") => Ok(EventPropTypeAnnotation::Int32),
            Some("Double") => Ok(EventPropTypeAnnotation::Double),
            Some("Float") => Ok(EventPropTypeAnnotation::Float),
            Some("Stringish") => Ok(EventPropTypeAnnotation::String),
            Some("Readonly") => {
                let inner = type_ref
                    .type_params
                    .as_ref()
                    .and_then(|args| args.params.first())
                    .map(|p| lookup_type(p, types));
                match inner {
                    Some(TsType::TsTypeLit(lit)) => Ok(EventPropTypeAnnotation::Object {
                        properties: build_event_properties(&lit.members, types)?,
                    }),
                    other => Err(ParserError::UnknownEventPropertyType {
                        name: name.to_string(),
                        kind: other.map(ts_type_kind).unwrap_or("Readonly").to_string(),
                    }),
                }
            }
            other => Err(ParserError::UnknownEventPropertyType {
                name: name.to_string(),
                kind: other.unwrap_or("TsQualifiedName").to_string(),
            }),
        },
        TsType::TsTypeLit(lit) => Ok(EventPropTypeAnnotation::Object {
            properties: build_event_properties(&lit.members, types)?,
        }),
        TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsUnionType(union)) => {
            let mut options = Vec::new();
            for member in &union.types {
                if is_null_or_void(member) {
                    continue;
                }
                match member.as_ref() {
                    TsType::TsLitType(lit) => match &lit.lit {
                        TsLit::Str(s) => {
                            options.push(s.value.as_str().unwrap_or("").to_string());
                        }
                        _ => {
                            return Err(ParserError::UnknownEventPropertyType {
                                name: name.to_string(),
                                kind: "TsLitType".to_string(),
                            })
                        }
                    },
                    other => {
                        return Err(ParserError::UnknownEventPropertyType {
                            name: name.to_string(),
                            kind: ts_type_kind(other).to_string(),
                        })
                    }
                }
            }
            Ok(EventPropTypeAnnotation::StringEnum { options })
        }
        other => Err(ParserError::UnknownEventPropertyType {
            name: name.to_string(),
            kind: ts_type_kind(other).to_string(),
        }),
    }
}
