use thiserror::Error;

/// Errors raised while turning a parsed TypeScript spec file into a schema.
///
/// Every hard (file-aborting) condition gets its own variant so callers can
/// match on the violated contract instead of string-probing a generic error.
/// The same type doubles as the payload of the soft-error channel: per-member
/// failures inside the module builder are collected in an [`ErrorSink`]
/// instead of aborting the file.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParserError {
    // ---- type resolution ----
    #[error("circular type alias detected while resolving '{name}'")]
    CircularTypeAlias { name: String },

    #[error("type reference '{name}' must resolve to a type alias declaration, instead it resolved to a '{kind}'")]
    AliasMustBeTypeAlias { name: String, kind: String },

    #[error("union type for '{name}' has no members left after removing null and void")]
    EmptyUnion { name: String },

    // ---- component: file structure ----
    #[error("could not find component config for native component")]
    MissingComponentConfig,

    #[error("only one component is supported per file")]
    MoreThanOneComponentConfig,

    #[error("codegenNativeCommands may only be called once in a file")]
    MoreThanOneCommandsCall,

    #[error("codegenNativeCommands must be passed options including the supported commands")]
    IncorrectCommandsCallArity,

    #[error("codegenNativeCommands doesn't support inline definitions, specify a file local type alias")]
    InlineCommandsType,

    #[error("the type argument for codegenNativeCommands must be an interface, received '{kind}'")]
    CommandsTypeMustBeInterface { kind: String },

    #[error("codegenNativeCommands must be given an options object with a supportedCommands array")]
    MissingCommandOptions,

    #[error("codegenNativeCommands expected the same supportedCommands specified in the {interface_name} interface: {expected}")]
    CommandsMismatch {
        interface_name: String,
        expected: String,
    },

    // ---- component: props ----
    #[error("failed to find {kind} definition for \"{name}\", please check that you have a valid codegen typescript file")]
    PropsTypeNotFound { kind: String, name: String },

    #[error("unable to handle prop spread: {name}")]
    UnsupportedPropSpread { name: String },

    #[error("a prop was already defined with the name {name}")]
    PropAlreadyDefined { name: String },

    #[error("mixed types are not supported (see \"{name}\")")]
    MixedUnionTypes { name: String },

    #[error("a default enum value is required for \"{name}\"")]
    MissingEnumDefault { name: String },

    #[error("a default string (or null) is required for \"{name}\"")]
    MissingStringDefault { name: String },

    #[error("unsupported union type for \"{name}\", received \"{received}\"")]
    UnsupportedUnionType { name: String, received: String },

    #[error("arrays of int enums are not supported (see: \"{name}\")")]
    ArrayOfIntEnums { name: String },

    #[error("nested optionals such as \"ReadonlyArray<boolean | null | void>\" are not supported, please declare optionals at the top level of value definitions as in \"ReadonlyArray<boolean> | null | void\"")]
    NestedOptionalInArray,

    #[error("nested defaults such as \"ReadonlyArray<WithDefault<boolean, false>>\" are not supported, please declare defaults at the top level of value definitions as in \"WithDefault<ReadonlyArray<boolean>, false>\"")]
    NestedDefaultInArray,

    #[error("WithDefault requires two type arguments, did you forget to provide a default value for \"{name}\"?")]
    IncorrectWithDefaultArity { name: String },

    #[error("WithDefault<> already marks \"{name}\" as optional, remove the redundant \"?\" marker")]
    RedundantOptionalMarkerOnWithDefault { name: String },

    #[error("WithDefault<> is optional and does not need to be marked as optional, please remove the union of void and/or null on \"{name}\"")]
    RedundantNullUnionOnWithDefault { name: String },

    #[error("unknown prop type for \"{name}\": \"{kind}\"")]
    UnknownPropType { name: String, kind: String },

    // ---- component: events ----
    #[error("unknown event payload property type for \"{name}\": \"{kind}\"")]
    UnknownEventPropertyType { name: String, kind: String },

    #[error("unsupported event payload shape for \"{name}\": \"{kind}\"")]
    UnsupportedEventPayload { name: String, kind: String },

    // ---- component: commands ----
    #[error("command \"{name}\" must be a function type, received \"{kind}\"")]
    CommandMemberMustBeFunction { name: String, kind: String },

    #[error("command \"{name}\" must return void, received \"{kind}\"")]
    CommandReturnNotVoid { name: String, kind: String },

    #[error("unsupported type \"{kind}\" for parameter \"{param}\" of command \"{command}\"")]
    UnsupportedCommandParam {
        command: String,
        param: String,
        kind: String,
    },

    // ---- module: file structure ----
    #[error("module {module}: no interface extending TurboModule was found")]
    ModuleInterfaceNotFound { module: String },

    #[error("module {module}: more than one interface extends TurboModule: {names}")]
    MoreThanOneModuleInterface { module: String, names: String },

    #[error("module {module}: the TurboModule interface must be named 'Spec', found '{name}'")]
    MisnamedModuleInterface { module: String, name: String },

    #[error("module {module}: no TurboModuleRegistry.get/getEnforcing call was found")]
    ModuleRegistryCallNotFound { module: String },

    #[error("module {module}: found {count} TurboModuleRegistry calls, only one is allowed per file")]
    MoreThanOneRegistryCall { module: String, count: usize },

    #[error("module {module}: TurboModuleRegistry.{method} expects exactly one argument, received {count}")]
    IncorrectRegistryCallArity {
        module: String,
        method: String,
        count: usize,
    },

    #[error("module {module}: TurboModuleRegistry.{method} expects a string literal argument, received '{kind}'")]
    IncorrectRegistryCallArgument {
        module: String,
        method: String,
        kind: String,
    },

    #[error("module {module}: TurboModuleRegistry.{method}('{name}') is missing its type parameter")]
    UntypedRegistryCall {
        module: String,
        method: String,
        name: String,
    },

    #[error("module {module}: TurboModuleRegistry.{method}('{name}') must be typed with exactly the 'Spec' interface")]
    IncorrectRegistryCallTypeParameter {
        module: String,
        method: String,
        name: String,
    },

    // ---- module: type translation ----
    #[error("module {module}: generic '{name}' must have exactly one type parameter")]
    IncorrectlyParameterizedGeneric { module: String, name: String },

    #[error("module {module}: unsupported generic type '{name}'")]
    UnsupportedGeneric { module: String, name: String },

    #[error("module {module}: unsupported type annotation '{kind}'")]
    UnsupportedTypeAnnotation { module: String, kind: String },

    #[error("module {module}: unsupported array element type '{kind}'")]
    UnsupportedArrayElement { module: String, kind: String },

    #[error("module {module}: unsupported type '{kind}' for function parameter '{param}'")]
    UnsupportedFunctionParam {
        module: String,
        param: String,
        kind: String,
    },

    #[error("module {module}: unsupported function return type '{kind}'")]
    UnsupportedFunctionReturn { module: String, kind: String },

    #[error("module {module}: function parameters must be named and carry a type annotation")]
    UnnamedFunctionParam { module: String },

    #[error("module {module}: unsupported object member '{kind}', only property signatures are allowed")]
    UnsupportedObjectProperty { module: String, kind: String },

    #[error("module {module}: unsupported value type '{kind}' for object property '{name}'")]
    UnsupportedObjectPropertyValue {
        module: String,
        name: String,
        kind: String,
    },

    #[error("module {module}: unsupported module property '{name}', expected a method, found '{kind}'")]
    UnsupportedModuleProperty {
        module: String,
        name: String,
        kind: String,
    },
}

/// Accumulator for soft (per-member) parse errors.
///
/// The module builder processes each Spec member independently: a failing
/// member is dropped from the output and its error lands here, so one
/// malformed method does not abort the whole file. The sink is function-local
/// state threaded through the recursive translation calls, never shared
/// across files.
#[derive(Debug, Default)]
pub struct ErrorSink {
    errors: Vec<ParserError>,
}

impl ErrorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps `Ok` values, collects `Err` values.
    pub fn capture<T>(&mut self, result: Result<T, ParserError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::debug!(error = %error, "collected soft parse error");
                self.errors.push(error);
                None
            }
        }
    }

    pub fn errors(&self) -> &[ParserError] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn into_errors(self) -> Vec<ParserError> {
        self.errors
    }
}
