//! Option-object extraction for the component factory calls.

use schemagen_core::models::component::ComponentOptions;
use schemagen_core::models::Platform;
use schemagen_core::ParserError;
use swc_ecma_ast::{Expr, Lit, ObjectLit, Prop, PropName, PropOrSpread};

/// Parses the optional second argument of `codegenNativeComponent`.
/// Unknown keys and non-literal values are ignored.
pub fn parse_component_options(expr: Option<&Expr>) -> ComponentOptions {
    let mut options = ComponentOptions::default();
    let Some(Expr::Object(object)) = expr else {
        return options;
    };

    for (key, value) in object_entries(object) {
        match (key.as_str(), value) {
            ("interfaceOnly", Expr::Lit(Lit::Bool(b))) => {
                options.interface_only = Some(b.value);
            }
            ("paperComponentName", Expr::Lit(Lit::Str(s))) => {
                options.paper_component_name = Some(s.value.as_str().unwrap_or("").to_string());
            }
            ("deprecatedViewConfigName", Expr::Lit(Lit::Str(s))) => {
                options.deprecated_view_config_name =
                    Some(s.value.as_str().unwrap_or("").to_string());
            }
            ("excludedPlatforms", Expr::Array(array)) => {
                let mut platforms = Vec::new();
                for element in array.elems.iter().flatten() {
                    if let Expr::Lit(Lit::Str(s)) = element.expr.as_ref() {
                        match s.value.as_str().unwrap_or("") {
                            "iOS" => platforms.push(Platform::Ios),
                            "android" => platforms.push(Platform::Android),
                            _ => {}
                        }
                    }
                }
                options.excluded_platforms = Some(platforms);
            }
            _ => {}
        }
    }

    options
}

/// Pulls `supportedCommands: ['a', 'b']` out of the sole argument of
/// `codegenNativeCommands`.
pub fn parse_supported_commands(expr: &Expr) -> Result<Vec<String>, ParserError> {
    let Expr::Object(object) = expr else {
        return Err(ParserError::MissingCommandOptions);
    };

    for (key, value) in object_entries(object) {
        if key == "supportedCommands" {
            let Expr::Array(array) = value else {
                return Err(ParserError::MissingCommandOptions);
            };
            let mut commands = Vec::new();
            for element in array.elems.iter().flatten() {
                match element.expr.as_ref() {
                    Expr::Lit(Lit::Str(s)) => {
                        commands.push(s.value.as_str().unwrap_or("").to_string());
                    }
                    _ => return Err(ParserError::MissingCommandOptions),
                }
            }
            return Ok(commands);
        }
    }

    Err(ParserError::MissingCommandOptions)
}

fn object_entries(object: &ObjectLit) -> impl Iterator<Item = (String, &Expr)> {
    object.props.iter().filter_map(|prop| {
        let PropOrSpread::Prop(prop) = prop else {
            return None;
        };
        let Prop::KeyValue(kv) = prop.as_ref() else {
            return None;
        };
        let key = match &kv.key {
            PropName::Ident(ident) => ident.sym.as_ref().to_string(),
            PropName::Str(s) => s.value.as_str().unwrap_or("").to_string(),
            _ => return None,
        };
        Some((key, kv.value.as_ref()))
    })
}
