use schemagen_core::models::component::{
    BubblingType, ComponentSchema, ExtendsPropSchema, PropArrayElement, PropTypeAnnotation,
    ReservedPropType,
};
use schemagen_core::models::Platform;
use schemagen_core::ParserError;
use schemagen_typescript::{build_component_schema, TypeScriptParser};
use std::path::Path;

fn build(source: &str) -> Result<ComponentSchema, ParserError> {
    let module = TypeScriptParser::new()
        .parse_source(source, Path::new("Test.ts"))
        .unwrap();
    build_component_schema(&module)
}

fn prop<'a>(schema: &'a ComponentSchema, name: &str) -> &'a PropTypeAnnotation {
    &schema
        .props
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("missing prop {name}"))
        .type_annotation
}

#[test]
fn test_basic_component_schema() {
    let schema = build(
        r#"
interface ModuleProps extends ViewProps {
  disabled?: boolean;
  count?: Int32;
  opacity?: number;
  scale?: Double;
  tintColor?: ColorValue;
  source?: ImageSource;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap();

    assert_eq!(schema.component_name, "Module");
    assert_eq!(schema.filename, "Module");
    assert_eq!(schema.extends_props.len(), 1);
    assert!(matches!(
        schema.extends_props[0],
        ExtendsPropSchema::ReactNativeBuiltIn { .. }
    ));

    assert_eq!(
        prop(&schema, "disabled"),
        &PropTypeAnnotation::Boolean {
            default: Some(false)
        }
    );
    assert_eq!(prop(&schema, "count"), &PropTypeAnnotation::Int32 { default: 0 });
    // A bare `number` keyword maps to Float in prop position.
    assert_eq!(
        prop(&schema, "opacity"),
        &PropTypeAnnotation::Float { default: Some(0.0) }
    );
    assert_eq!(
        prop(&schema, "scale"),
        &PropTypeAnnotation::Double { default: 0.0 }
    );
    assert_eq!(
        prop(&schema, "tintColor"),
        &PropTypeAnnotation::Reserved {
            name: ReservedPropType::ColorPrimitive
        }
    );
    assert_eq!(
        prop(&schema, "source"),
        &PropTypeAnnotation::Reserved {
            name: ReservedPropType::ImageSourcePrimitive
        }
    );
    assert!(schema.props.iter().all(|p| p.optional));
}

#[test]
fn test_with_default_forces_optional() {
    let schema = build(
        r#"
interface ModuleProps extends ViewProps {
  label: WithDefault<string, 'press'>;
  progress: WithDefault<Float, 0.5>;
  flag: WithDefault<boolean, true>;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap();

    for p in &schema.props {
        assert!(p.optional, "{} should be optional", p.name);
    }
    assert_eq!(
        prop(&schema, "label"),
        &PropTypeAnnotation::String {
            default: Some("press".to_string())
        }
    );
    assert_eq!(
        prop(&schema, "progress"),
        &PropTypeAnnotation::Float { default: Some(0.5) }
    );
    assert_eq!(
        prop(&schema, "flag"),
        &PropTypeAnnotation::Boolean {
            default: Some(true)
        }
    );
}

#[test]
fn test_with_default_null_clears_scalar_default() {
    let schema = build(
        r#"
interface ModuleProps extends ViewProps {
  title: WithDefault<string, null>;
  ratio: WithDefault<Float, null>;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap();

    assert_eq!(
        prop(&schema, "title"),
        &PropTypeAnnotation::String { default: None }
    );
    assert_eq!(
        prop(&schema, "ratio"),
        &PropTypeAnnotation::Float { default: None }
    );
}

#[test]
fn test_explicit_optional_marker_with_default_is_rejected() {
    let error = build(
        r#"
interface ModuleProps extends ViewProps {
  label?: WithDefault<string, 'press'>;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap_err();

    assert_eq!(
        error,
        ParserError::RedundantOptionalMarkerOnWithDefault {
            name: "label".to_string()
        }
    );
}

#[test]
fn test_null_union_around_with_default_is_rejected() {
    let error = build(
        r#"
interface ModuleProps extends ViewProps {
  flag: WithDefault<boolean, false> | null;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap_err();

    assert_eq!(
        error,
        ParserError::RedundantNullUnionOnWithDefault {
            name: "flag".to_string()
        }
    );
}

#[test]
fn test_with_default_requires_two_type_arguments() {
    let error = build(
        r#"
interface ModuleProps extends ViewProps {
  flag: WithDefault<boolean>;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap_err();

    assert_eq!(
        error,
        ParserError::IncorrectWithDefaultArity {
            name: "flag".to_string()
        }
    );
}

#[test]
fn test_string_prop_requires_explicit_default() {
    let error = build(
        r#"
interface ModuleProps extends ViewProps {
  title: string;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap_err();

    assert_eq!(
        error,
        ParserError::MissingStringDefault {
            name: "title".to_string()
        }
    );
}

#[test]
fn test_string_enum_with_default() {
    let schema = build(
        r#"
interface ModuleProps extends ViewProps {
  alignment: WithDefault<'top' | 'bottom' | 'center', 'top'>;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap();

    assert_eq!(
        prop(&schema, "alignment"),
        &PropTypeAnnotation::StringEnum {
            default: "top".to_string(),
            options: vec![
                "top".to_string(),
                "bottom".to_string(),
                "center".to_string()
            ],
        }
    );
}

#[test]
fn test_int32_enum_with_default() {
    let schema = build(
        r#"
interface ModuleProps extends ViewProps {
  level: WithDefault<0 | 1 | 2, 1>;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap();

    assert_eq!(
        prop(&schema, "level"),
        &PropTypeAnnotation::Int32Enum {
            default: 1,
            options: vec![0, 1, 2],
        }
    );
}

#[test]
fn test_enum_without_default_is_rejected() {
    let error = build(
        r#"
interface ModuleProps extends ViewProps {
  mode: 'a' | 'b';
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap_err();

    assert_eq!(
        error,
        ParserError::MissingEnumDefault {
            name: "mode".to_string()
        }
    );
}

#[test]
fn test_mixed_literal_union_is_rejected() {
    let error = build(
        r#"
interface ModuleProps extends ViewProps {
  mode: WithDefault<'a' | 1, 'a'>;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap_err();

    assert_eq!(
        error,
        ParserError::MixedUnionTypes {
            name: "mode".to_string()
        }
    );
}

#[test]
fn test_array_props() {
    let schema = build(
        r#"
interface ModuleProps extends ViewProps {
  sizes?: ReadonlyArray<Int32>;
  names?: readonly string[];
  colors?: ColorArrayValue;
  points?: Readonly<PointValue[]>;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap();

    assert_eq!(
        prop(&schema, "sizes"),
        &PropTypeAnnotation::Array {
            element_type: Box::new(PropArrayElement::Int32)
        }
    );
    assert_eq!(
        prop(&schema, "names"),
        &PropTypeAnnotation::Array {
            element_type: Box::new(PropArrayElement::String)
        }
    );
    assert_eq!(
        prop(&schema, "colors"),
        &PropTypeAnnotation::Array {
            element_type: Box::new(PropArrayElement::Reserved {
                name: ReservedPropType::ColorPrimitive
            })
        }
    );
    assert_eq!(
        prop(&schema, "points"),
        &PropTypeAnnotation::Array {
            element_type: Box::new(PropArrayElement::Reserved {
                name: ReservedPropType::PointPrimitive
            })
        }
    );
}

#[test]
fn test_nested_optional_in_array_is_rejected() {
    let error = build(
        r#"
interface ModuleProps extends ViewProps {
  flags?: ReadonlyArray<boolean | null>;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap_err();

    assert_eq!(error, ParserError::NestedOptionalInArray);
}

#[test]
fn test_nested_default_in_array_is_rejected() {
    let error = build(
        r#"
interface ModuleProps extends ViewProps {
  flags?: ReadonlyArray<WithDefault<boolean, false>>;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap_err();

    assert_eq!(error, ParserError::NestedDefaultInArray);
}

#[test]
fn test_array_of_int_enums_is_rejected() {
    let error = build(
        r#"
interface ModuleProps extends ViewProps {
  levels?: ReadonlyArray<0 | 1>;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap_err();

    assert_eq!(
        error,
        ParserError::ArrayOfIntEnums {
            name: "levels".to_string()
        }
    );
}

#[test]
fn test_object_props_flatten_recursively() {
    let schema = build(
        r#"
interface ModuleProps extends ViewProps {
  insets?: Readonly<{top: Float, left: Float}>;
  nested?: Readonly<{inner: Readonly<{flag?: boolean}>}>;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap();

    let PropTypeAnnotation::Object { properties } = prop(&schema, "insets") else {
        panic!("insets should be an object");
    };
    assert_eq!(properties.len(), 2);
    assert_eq!(
        properties[0].type_annotation,
        PropTypeAnnotation::Float { default: Some(0.0) }
    );

    let PropTypeAnnotation::Object { properties } = prop(&schema, "nested") else {
        panic!("nested should be an object");
    };
    let PropTypeAnnotation::Object { properties: inner } = &properties[0].type_annotation else {
        panic!("inner should be an object");
    };
    assert_eq!(inner[0].name, "flag");
    assert!(inner[0].optional);
}

#[test]
fn test_type_alias_props_shape() {
    let schema = build(
        r#"
type ModuleProps = Readonly<{
  enabled?: boolean;
}>;
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap();

    assert!(schema.extends_props.is_empty());
    assert_eq!(schema.props.len(), 1);
    assert_eq!(schema.props[0].name, "enabled");
}

#[test]
fn test_local_interface_spread_is_flattened() {
    let schema = build(
        r#"
interface CommonProps {
  enabled?: boolean;
}
interface ModuleProps extends ViewProps, CommonProps {
  count?: Int32;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap();

    let names: Vec<&str> = schema.props.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["enabled", "count"]);
    assert_eq!(schema.extends_props.len(), 1);
}

#[test]
fn test_duplicate_prop_across_spreads_is_rejected() {
    let error = build(
        r#"
interface PropsA {
  value?: boolean;
}
interface PropsB {
  value?: boolean;
}
interface ModuleProps extends ViewProps, PropsA, PropsB {}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap_err();

    assert_eq!(
        error,
        ParserError::PropAlreadyDefined {
            name: "value".to_string()
        }
    );
}

#[test]
fn test_unknown_prop_spread_is_rejected() {
    let error = build(
        r#"
interface ModuleProps extends ViewProps, SomeLibraryProps {}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap_err();

    assert_eq!(
        error,
        ParserError::UnsupportedPropSpread {
            name: "SomeLibraryProps".to_string()
        }
    );
}

#[test]
fn test_style_prop_is_dropped() {
    let schema = build(
        r#"
interface ModuleProps extends ViewProps {
  style?: ViewStyleProp;
  enabled?: boolean;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap();

    assert_eq!(schema.props.len(), 1);
    assert_eq!(schema.props[0].name, "enabled");
}

#[test]
fn test_events_are_split_from_props() {
    let schema = build(
        r#"
interface ModuleProps extends ViewProps {
  enabled?: boolean;
  onChange?: BubblingEventHandler<{value: boolean, count: Int32}>;
  onScroll: DirectEventHandler<Readonly<{offset: Double}>, 'paperScroll'>;
  onEnd?: DirectEventHandler<null>;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap();

    assert_eq!(schema.props.len(), 1);
    assert_eq!(schema.events.len(), 3);

    let on_change = &schema.events[0];
    assert_eq!(on_change.name, "onChange");
    assert!(on_change.optional);
    assert_eq!(on_change.bubbling_type, BubblingType::Bubble);
    assert!(on_change.paper_top_level_name_deprecated.is_none());
    let argument = on_change.type_annotation.argument.as_ref().unwrap();
    assert_eq!(argument.properties.len(), 2);

    let on_scroll = &schema.events[1];
    assert_eq!(on_scroll.bubbling_type, BubblingType::Direct);
    assert!(!on_scroll.optional);
    assert_eq!(
        on_scroll.paper_top_level_name_deprecated.as_deref(),
        Some("paperScroll")
    );

    let on_end = &schema.events[2];
    assert!(on_end.type_annotation.argument.is_none());
}

#[test]
fn test_component_options() {
    let schema = build(
        r#"
interface ModuleProps extends ViewProps {}
export default codegenNativeComponent<ModuleProps>('Module', {
  interfaceOnly: true,
  paperComponentName: 'RCTModule',
  excludedPlatforms: ['iOS'],
});
"#,
    )
    .unwrap();

    assert_eq!(schema.options.interface_only, Some(true));
    assert_eq!(
        schema.options.paper_component_name.as_deref(),
        Some("RCTModule")
    );
    assert_eq!(
        schema.options.excluded_platforms,
        Some(vec![Platform::Ios])
    );
    assert!(schema.options.deprecated_view_config_name.is_none());
}

#[test]
fn test_default_export_cast_is_unwrapped() {
    let schema = build(
        r#"
interface ModuleProps extends ViewProps {}
export default codegenNativeComponent<ModuleProps>('Module') as HostComponent<ModuleProps>;
"#,
    )
    .unwrap();

    assert_eq!(schema.component_name, "Module");
}

#[test]
fn test_missing_component_config_is_rejected() {
    let error = build(
        r#"
interface ModuleProps extends ViewProps {}
export default somethingElse('Module');
"#,
    )
    .unwrap_err();

    assert_eq!(error, ParserError::MissingComponentConfig);
}

#[test]
fn test_props_type_must_exist() {
    let error = build(
        r#"
export default codegenNativeComponent<MissingProps>('Module');
"#,
    )
    .unwrap_err();

    assert!(matches!(
        error,
        ParserError::PropsTypeNotFound { ref name, .. } if name == "MissingProps"
    ));
}

#[test]
fn test_commands_with_matching_supported_list() {
    let schema = build(
        r#"
interface ModuleProps extends ViewProps {}
interface NativeCommands {
  scrollTo(viewRef: React.ElementRef<ModuleType>, x: Float, animated: boolean): void;
  flash(viewRef: React.ElementRef<ModuleType>): void;
}
export const Commands = codegenNativeCommands<NativeCommands>({
  supportedCommands: ['scrollTo', 'flash'],
});
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap();

    assert_eq!(schema.commands.len(), 2);
    let scroll_to = &schema.commands[0];
    assert_eq!(scroll_to.name, "scrollTo");
    // The view handle parameter is not part of the command signature.
    assert_eq!(scroll_to.params.len(), 2);
    assert_eq!(scroll_to.params[0].name, "x");
    assert_eq!(scroll_to.params[1].name, "animated");
    assert!(schema.commands[1].params.is_empty());
}

#[test]
fn test_commands_set_mismatch_is_rejected() {
    let error = build(
        r#"
interface ModuleProps extends ViewProps {}
interface NativeCommands {
  a(viewRef: React.ElementRef<ModuleType>): void;
  b(viewRef: React.ElementRef<ModuleType>): void;
  c(viewRef: React.ElementRef<ModuleType>): void;
}
export const Commands = codegenNativeCommands<NativeCommands>({
  supportedCommands: ['b', 'a'],
});
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap_err();

    assert!(matches!(error, ParserError::CommandsMismatch { .. }));
}

#[test]
fn test_commands_order_independent_match() {
    let schema = build(
        r#"
interface ModuleProps extends ViewProps {}
interface NativeCommands {
  a(viewRef: React.ElementRef<ModuleType>): void;
  b(viewRef: React.ElementRef<ModuleType>): void;
}
export const Commands = codegenNativeCommands<NativeCommands>({
  supportedCommands: ['b', 'a'],
});
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap();

    assert_eq!(schema.commands.len(), 2);
}

#[test]
fn test_command_must_return_void() {
    let error = build(
        r#"
interface ModuleProps extends ViewProps {}
interface NativeCommands {
  get(viewRef: React.ElementRef<ModuleType>): Int32;
}
export const Commands = codegenNativeCommands<NativeCommands>({
  supportedCommands: ['get'],
});
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap_err();

    assert!(matches!(error, ParserError::CommandReturnNotVoid { .. }));
}

#[test]
fn test_inline_commands_type_is_rejected() {
    let error = build(
        r#"
interface ModuleProps extends ViewProps {}
export const Commands = codegenNativeCommands<{ a(): void }>({
  supportedCommands: ['a'],
});
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap_err();

    assert_eq!(error, ParserError::InlineCommandsType);
}

#[test]
fn test_unknown_prop_type_names_the_offender() {
    let error = build(
        r#"
interface ModuleProps extends ViewProps {
  weird?: SomeMysteryType;
}
export default codegenNativeComponent<ModuleProps>('Module');
"#,
    )
    .unwrap_err();

    assert_eq!(
        error,
        ParserError::UnknownPropType {
            name: "weird".to_string(),
            kind: "SomeMysteryType".to_string()
        }
    );
}
