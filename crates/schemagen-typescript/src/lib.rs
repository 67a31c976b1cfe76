pub mod components;
pub mod modules;
pub mod swc_parser;
pub mod types;

pub use components::build_component_schema;
pub use modules::build_module_schema;
pub use swc_parser::TypeScriptParser;
