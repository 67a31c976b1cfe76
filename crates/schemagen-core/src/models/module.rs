use super::{Nullable, Platform};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Normalized description of one native module (TurboModule) spec file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NativeModuleSchema {
    /// Object type literals that resolved through a named alias, keyed by
    /// alias name and deduplicated across module members.
    pub aliases: IndexMap<String, ObjectTypeAnnotation>,
    pub spec: NativeModuleSpec,
    pub module_names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_platforms: Option<Vec<Platform>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NativeModuleSpec {
    pub properties: Vec<ModulePropertySchema>,
}

/// One method of the module Spec interface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModulePropertySchema {
    pub name: String,
    pub optional: bool,
    pub type_annotation: Nullable<FunctionTypeAnnotation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionTypeAnnotation {
    pub params: Vec<MethodParamSchema>,
    pub return_type_annotation: Box<Nullable<ModuleTypeAnnotation>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MethodParamSchema {
    pub name: String,
    pub optional: bool,
    pub type_annotation: Nullable<ModuleTypeAnnotation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPropertySchema {
    pub name: String,
    pub optional: bool,
    pub type_annotation: Nullable<ModuleTypeAnnotation>,
}

/// An object shape registered in the module alias map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObjectTypeAnnotation {
    pub properties: Vec<ObjectPropertySchema>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservedModuleType {
    RootTag,
}

/// Type annotation for module method parameters, returns, and object
/// property values. One variant per recognized node kind; the translator
/// matches exhaustively instead of chaining string comparisons.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ModuleTypeAnnotation {
    #[serde(rename = "BooleanTypeAnnotation")]
    Boolean,
    #[serde(rename = "NumberTypeAnnotation")]
    Number,
    #[serde(rename = "StringTypeAnnotation")]
    String,
    #[serde(rename = "VoidTypeAnnotation")]
    Void,
    #[serde(rename = "Int32TypeAnnotation")]
    Int32,
    #[serde(rename = "DoubleTypeAnnotation")]
    Double,
    #[serde(rename = "FloatTypeAnnotation")]
    Float,
    #[serde(rename = "GenericObjectTypeAnnotation")]
    GenericObject,
    #[serde(rename = "ReservedTypeAnnotation")]
    Reserved { name: ReservedModuleType },
    #[serde(rename = "PromiseTypeAnnotation")]
    Promise,
    /// `element_type == None` is the documented silent degradation for
    /// array elements that failed to translate.
    #[serde(rename = "ArrayTypeAnnotation")]
    Array {
        #[serde(rename = "elementType", skip_serializing_if = "Option::is_none")]
        element_type: Option<Box<Nullable<ModuleTypeAnnotation>>>,
    },
    #[serde(rename = "ObjectTypeAnnotation")]
    Object { properties: Vec<ObjectPropertySchema> },
    /// Reference to an entry in [`NativeModuleSchema::aliases`].
    #[serde(rename = "TypeAliasTypeAnnotation")]
    TypeAlias { name: String },
    #[serde(rename = "FunctionTypeAnnotation")]
    Function(FunctionTypeAnnotation),
}

impl ModuleTypeAnnotation {
    /// Schema-level tag name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ModuleTypeAnnotation::Boolean => "BooleanTypeAnnotation",
            ModuleTypeAnnotation::Number => "NumberTypeAnnotation",
            ModuleTypeAnnotation::String => "StringTypeAnnotation",
            ModuleTypeAnnotation::Void => "VoidTypeAnnotation",
            ModuleTypeAnnotation::Int32 => "Int32TypeAnnotation",
            ModuleTypeAnnotation::Double => "DoubleTypeAnnotation",
            ModuleTypeAnnotation::Float => "FloatTypeAnnotation",
            ModuleTypeAnnotation::GenericObject => "GenericObjectTypeAnnotation",
            ModuleTypeAnnotation::Reserved { .. } => "ReservedTypeAnnotation",
            ModuleTypeAnnotation::Promise => "PromiseTypeAnnotation",
            ModuleTypeAnnotation::Array { .. } => "ArrayTypeAnnotation",
            ModuleTypeAnnotation::Object { .. } => "ObjectTypeAnnotation",
            ModuleTypeAnnotation::TypeAlias { .. } => "TypeAliasTypeAnnotation",
            ModuleTypeAnnotation::Function(_) => "FunctionTypeAnnotation",
        }
    }
}
