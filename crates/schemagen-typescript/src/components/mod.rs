//! Component schema builder.
//!
//! Locates the default-exported `codegenNativeComponent` call (and any
//! `codegenNativeCommands` call), then walks the referenced props type into
//! a normalized [`ComponentSchema`].

pub mod commands;
pub mod events;
pub mod extends;
pub mod options;
pub mod props;

use crate::types::collect_types;
use schemagen_core::models::component::ComponentSchema;
use schemagen_core::ParserError;
use swc_ecma_ast::{
    CallExpr, Callee, Decl, Expr, Lit, Module, ModuleDecl, ModuleItem, TsType,
};

struct CommandsConfig {
    type_name: String,
    supported_commands: Vec<String>,
}

struct ComponentConfig<'a> {
    component_name: String,
    props_type_name: String,
    options: Option<&'a Expr>,
    commands: Option<CommandsConfig>,
}

/// Builds the schema for one component spec file.
pub fn build_component_schema(module: &Module) -> Result<ComponentSchema, ParserError> {
    let types = collect_types(module);
    let config = find_component_config(module)?;

    tracing::debug!(
        component = %config.component_name,
        props_type = %config.props_type_name,
        "building component schema"
    );

    let component_options = options::parse_component_options(config.options);

    let members = props::get_prop_properties(&config.props_type_name, &types)?;
    let extends_props = extends::get_extends_props(&members, &types)?;
    let own_members = extends::remove_known_extends(members, &types);
    let flattened = props::flatten_properties(&own_members, &types)?;

    let mut prop_schemas = Vec::new();
    let mut event_schemas = Vec::new();
    for property in flattened {
        let is_event = property
            .type_ann
            .as_ref()
            .is_some_and(|ann| props::is_event_handler_type(&ann.type_ann, &types));
        if is_event {
            if let Some(event) = events::build_event_schema(property, &types)? {
                event_schemas.push(event);
            }
        } else if let Some(prop) = props::build_prop_schema(property, &types)? {
            prop_schemas.push(prop);
        }
    }

    let command_schemas = match &config.commands {
        Some(commands) => {
            commands::get_commands(&commands.type_name, &commands.supported_commands, &types)?
        }
        None => Vec::new(),
    };

    Ok(ComponentSchema {
        filename: config.component_name.clone(),
        component_name: config.component_name,
        options: component_options,
        extends_props,
        events: event_schemas,
        props: prop_schemas,
        commands: command_schemas,
    })
}

/// Strips type casts and parentheses off an expression.
fn unwrap_expr(mut expr: &Expr) -> &Expr {
    loop {
        expr = match expr {
            Expr::TsAs(cast) => &cast.expr,
            Expr::TsSatisfies(cast) => &cast.expr,
            Expr::TsTypeAssertion(cast) => &cast.expr,
            Expr::Paren(paren) => &paren.expr,
            other => return other,
        };
    }
}

fn callee_name(call: &CallExpr) -> Option<&str> {
    match &call.callee {
        Callee::Expr(expr) => match unwrap_expr(expr) {
            Expr::Ident(ident) => Some(ident.sym.as_ref()),
            _ => None,
        },
        _ => None,
    }
}

fn find_component_config(module: &Module) -> Result<ComponentConfig<'_>, ParserError> {
    let mut configs: Vec<&CallExpr> = Vec::new();
    let mut command_calls: Vec<&CallExpr> = Vec::new();

    for item in &module.body {
        match item {
            ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(export)) => {
                if let Expr::Call(call) = unwrap_expr(&export.expr) {
                    if callee_name(call) == Some("codegenNativeComponent") {
                        configs.push(call);
                    }
                }
            }
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
                if let Decl::Var(var) = &export.decl {
                    for declarator in &var.decls {
                        let Some(init) = declarator.init.as_ref() else {
                            continue;
                        };
                        if let Expr::Call(call) = unwrap_expr(init) {
                            if callee_name(call) == Some("codegenNativeCommands") {
                                command_calls.push(call);
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    let call = match configs.as_slice() {
        [] => return Err(ParserError::MissingComponentConfig),
        [call] => *call,
        _ => return Err(ParserError::MoreThanOneComponentConfig),
    };

    let props_type_name = call
        .type_args
        .as_ref()
        .and_then(|args| args.params.first())
        .and_then(|param| match param.as_ref() {
            TsType::TsTypeRef(type_ref) => crate::types::type_ref_name(type_ref),
            _ => None,
        })
        .map(str::to_string)
        .ok_or(ParserError::MissingComponentConfig)?;

    let component_name = match call.args.first().map(|arg| arg.expr.as_ref()) {
        Some(Expr::Lit(Lit::Str(s))) => s.value.as_str().unwrap_or("").to_string(),
        _ => return Err(ParserError::MissingComponentConfig),
    };

    let options = call.args.get(1).map(|arg| arg.expr.as_ref());

    let commands = match command_calls.as_slice() {
        [] => None,
        [call] => Some(parse_commands_call(call)?),
        _ => return Err(ParserError::MoreThanOneCommandsCall),
    };

    Ok(ComponentConfig {
        component_name,
        props_type_name,
        options,
        commands,
    })
}

fn parse_commands_call(call: &CallExpr) -> Result<CommandsConfig, ParserError> {
    if call.args.len() != 1 {
        return Err(ParserError::IncorrectCommandsCallArity);
    }

    let type_name = call
        .type_args
        .as_ref()
        .and_then(|args| args.params.first())
        .and_then(|param| match param.as_ref() {
            TsType::TsTypeRef(type_ref) => crate::types::type_ref_name(type_ref),
            _ => None,
        })
        .map(str::to_string)
        .ok_or(ParserError::InlineCommandsType)?;

    let supported_commands = options::parse_supported_commands(&call.args[0].expr)?;

    Ok(CommandsConfig {
        type_name,
        supported_commands,
    })
}
