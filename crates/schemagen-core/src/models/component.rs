use super::module::ReservedModuleType;
use super::Platform;
use serde::{Deserialize, Serialize};

/// Normalized description of one native component spec file.
///
/// Built once per source file by the component schema builder, immutable
/// afterwards, and consumed by an external code-emission stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSchema {
    pub filename: String,
    pub component_name: String,
    pub options: ComponentOptions,
    pub extends_props: Vec<ExtendsPropSchema>,
    pub events: Vec<EventSchema>,
    pub props: Vec<PropSchema>,
    pub commands: Vec<CommandSchema>,
}

/// Free-form options passed as the second argument of
/// `codegenNativeComponent`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_component_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated_view_config_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_platforms: Option<Vec<Platform>>,
}

/// A recognized `extends` entry of the props interface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ExtendsPropSchema {
    #[serde(rename = "ReactNativeBuiltInType")]
    ReactNativeBuiltIn {
        #[serde(rename = "knownTypeName")]
        known_type_name: BuiltInExtendsType,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuiltInExtendsType {
    ReactNativeCoreViewProps,
}

/// One component prop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropSchema {
    pub name: String,
    pub optional: bool,
    pub type_annotation: PropTypeAnnotation,
}

/// Reserved host-provided prop primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservedPropType {
    ImageSourcePrimitive,
    ColorPrimitive,
    PointPrimitive,
    EdgeInsetsPrimitive,
}

/// Prop type annotation.
///
/// Enum variants always carry a concrete default; `WithDefault<T, D>`
/// unwraps to `T`'s variant with `default = D`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum PropTypeAnnotation {
    #[serde(rename = "BooleanTypeAnnotation")]
    Boolean {
        /// `None` encodes an explicit `WithDefault<boolean, null>`.
        default: Option<bool>,
    },
    #[serde(rename = "StringTypeAnnotation")]
    String { default: Option<String> },
    #[serde(rename = "Int32TypeAnnotation")]
    Int32 { default: i64 },
    #[serde(rename = "DoubleTypeAnnotation")]
    Double { default: f64 },
    #[serde(rename = "FloatTypeAnnotation")]
    Float { default: Option<f64> },
    #[serde(rename = "StringEnumTypeAnnotation")]
    StringEnum { default: String, options: Vec<String> },
    #[serde(rename = "Int32EnumTypeAnnotation")]
    Int32Enum { default: i64, options: Vec<i64> },
    #[serde(rename = "ReservedPropTypeAnnotation")]
    Reserved { name: ReservedPropType },
    #[serde(rename = "ArrayTypeAnnotation")]
    Array {
        #[serde(rename = "elementType")]
        element_type: Box<PropArrayElement>,
    },
    #[serde(rename = "ObjectTypeAnnotation")]
    Object { properties: Vec<PropSchema> },
}

/// Array element annotation. Defaults and optionality are not allowed
/// inside array elements, so scalar variants carry no default here; the
/// string-enum default is inherited from the enclosing `WithDefault`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum PropArrayElement {
    #[serde(rename = "BooleanTypeAnnotation")]
    Boolean,
    #[serde(rename = "StringTypeAnnotation")]
    String,
    #[serde(rename = "Int32TypeAnnotation")]
    Int32,
    #[serde(rename = "DoubleTypeAnnotation")]
    Double,
    #[serde(rename = "FloatTypeAnnotation")]
    Float,
    #[serde(rename = "StringEnumTypeAnnotation")]
    StringEnum { default: String, options: Vec<String> },
    #[serde(rename = "ReservedPropTypeAnnotation")]
    Reserved { name: ReservedPropType },
    #[serde(rename = "ObjectTypeAnnotation")]
    Object { properties: Vec<PropSchema> },
    #[serde(rename = "ArrayTypeAnnotation")]
    Array {
        #[serde(rename = "elementType")]
        element_type: Box<PropArrayElement>,
    },
}

/// One component event, extracted from a `DirectEventHandler` /
/// `BubblingEventHandler` typed prop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventSchema {
    pub name: String,
    pub optional: bool,
    pub bubbling_type: BubblingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_top_level_name_deprecated: Option<String>,
    pub type_annotation: EventTypeAnnotation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BubblingType {
    #[serde(rename = "direct")]
    Direct,
    #[serde(rename = "bubble")]
    Bubble,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventTypeAnnotation {
    /// `None` for events declared with a `null`/`undefined` payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<EventObjectType>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventObjectType {
    pub properties: Vec<EventObjectProperty>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventObjectProperty {
    pub name: String,
    pub optional: bool,
    pub type_annotation: EventPropTypeAnnotation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum EventPropTypeAnnotation {
    #[serde(rename = "BooleanTypeAnnotation")]
    Boolean,
    #[serde(rename = "StringTypeAnnotation")]
    String,
    #[serde(rename = "Int32TypeAnnotation")]
    Int32,
    #[serde(rename = "DoubleTypeAnnotation")]
    Double,
    #[serde(rename = "FloatTypeAnnotation")]
    Float,
    #[serde(rename = "StringEnumTypeAnnotation")]
    StringEnum { options: Vec<String> },
    #[serde(rename = "ObjectTypeAnnotation")]
    Object { properties: Vec<EventObjectProperty> },
}

/// One component command, extracted from the `codegenNativeCommands`
/// interface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommandSchema {
    pub name: String,
    pub optional: bool,
    pub params: Vec<CommandParam>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommandParam {
    pub name: String,
    pub optional: bool,
    pub type_annotation: CommandParamTypeAnnotation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum CommandParamTypeAnnotation {
    #[serde(rename = "BooleanTypeAnnotation")]
    Boolean,
    #[serde(rename = "StringTypeAnnotation")]
    String,
    #[serde(rename = "Int32TypeAnnotation")]
    Int32,
    #[serde(rename = "DoubleTypeAnnotation")]
    Double,
    #[serde(rename = "FloatTypeAnnotation")]
    Float,
    #[serde(rename = "ReservedTypeAnnotation")]
    Reserved { name: ReservedModuleType },
}
