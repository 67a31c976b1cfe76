use schemagen_core::ParserError;
use schemagen_typescript::types::{
    collect_types, lookup_type, resolve_type_annotation, TypeDecl, TypeTable,
};
use schemagen_typescript::TypeScriptParser;
use std::path::Path;
use swc_ecma_ast::{Module, TsType};

fn parse(source: &str) -> Module {
    TypeScriptParser::new()
        .parse_source(source, Path::new("Test.ts"))
        .unwrap()
}

fn alias_rhs<'a>(types: &TypeTable<'a>, name: &str) -> &'a TsType {
    match types.get(name).unwrap() {
        TypeDecl::Alias(alias) => &alias.type_ann,
        TypeDecl::Interface(_) => panic!("expected {name} to be a type alias"),
    }
}

#[test]
fn test_alias_chain_resolves_to_concrete_type() {
    let module = parse(
        r#"
type A = B;
type B = C;
type C = string;
"#,
    );
    let types = collect_types(&module);

    let resolved = resolve_type_annotation(alias_rhs(&types, "A"), &types).unwrap();
    assert!(!resolved.nullable);
    assert_eq!(resolved.alias_name.as_deref(), Some("C"));
    assert!(matches!(resolved.type_annotation, TsType::TsKeywordType(_)));
}

#[test]
fn test_resolution_is_idempotent() {
    let module = parse(
        r#"
type A = B | null;
type B = string;
"#,
    );
    let types = collect_types(&module);

    let first = resolve_type_annotation(alias_rhs(&types, "A"), &types).unwrap();
    let second = resolve_type_annotation(first.type_annotation, &types).unwrap();

    assert!(first.nullable);
    assert!(!second.nullable);
    assert!(std::ptr::eq(first.type_annotation, second.type_annotation));
}

#[test]
fn test_nullability_propagation_for_null_void_unions() {
    let module = parse(
        r#"
type WithNull = string | null;
type WithVoid = string | void;
type WithBoth = string | null | void;
"#,
    );
    let types = collect_types(&module);

    for name in ["WithNull", "WithVoid", "WithBoth"] {
        let resolved = resolve_type_annotation(alias_rhs(&types, name), &types).unwrap();
        assert!(resolved.nullable, "{name} should be nullable");
        assert!(matches!(resolved.type_annotation, TsType::TsKeywordType(_)));
    }
}

#[test]
fn test_nullability_collected_across_alias_hops() {
    let module = parse(
        r#"
type A = B;
type B = string | null;
"#,
    );
    let types = collect_types(&module);

    let resolved = resolve_type_annotation(alias_rhs(&types, "A"), &types).unwrap();
    assert!(resolved.nullable);
}

#[test]
fn test_cyclic_alias_chain_fails_fast() {
    let module = parse(
        r#"
type A = B;
type B = A;
"#,
    );
    let types = collect_types(&module);

    let error = resolve_type_annotation(alias_rhs(&types, "A"), &types).unwrap_err();
    assert!(matches!(error, ParserError::CircularTypeAlias { .. }));
}

#[test]
fn test_self_referential_alias_fails_fast() {
    let module = parse("type A = A;");
    let types = collect_types(&module);

    let error = resolve_type_annotation(alias_rhs(&types, "A"), &types).unwrap_err();
    assert_eq!(
        error,
        ParserError::CircularTypeAlias {
            name: "A".to_string()
        }
    );
}

#[test]
fn test_interface_reference_is_not_inlined() {
    let module = parse(
        r#"
interface Shape { x: string }
type A = Shape;
"#,
    );
    let types = collect_types(&module);

    let error = resolve_type_annotation(alias_rhs(&types, "A"), &types).unwrap_err();
    assert!(matches!(
        error,
        ParserError::AliasMustBeTypeAlias { ref name, .. } if name == "Shape"
    ));
}

#[test]
fn test_unknown_reference_stays_opaque() {
    let module = parse("type A = Int32;");
    let types = collect_types(&module);

    let resolved = resolve_type_annotation(alias_rhs(&types, "A"), &types).unwrap();
    assert_eq!(resolved.alias_name.as_deref(), Some("Int32"));
    assert!(matches!(resolved.type_annotation, TsType::TsTypeRef(_)));
}

#[test]
fn test_resolved_type_owns_its_alias_name() {
    let module = parse("type A = Int32;");
    let types = collect_types(&module);

    let resolved = resolve_type_annotation(alias_rhs(&types, "A"), &types).unwrap();
    let cloned = resolved.clone();

    // The alias name is owned data; the node stays a shared borrow.
    assert_eq!(cloned.alias_name, resolved.alias_name);
    assert!(std::ptr::eq(cloned.type_annotation, resolved.type_annotation));
}

#[test]
fn test_collect_types_registers_interfaces_and_aliases() {
    let module = parse(
        r#"
export interface Props { x: string }
type Inner = number;
const notAType = 42;
"#,
    );
    let types = collect_types(&module);

    assert_eq!(types.len(), 2);
    assert!(matches!(types.get("Props"), Some(TypeDecl::Interface(_))));
    assert!(matches!(types.get("Inner"), Some(TypeDecl::Alias(_))));
}

#[test]
fn test_collect_types_last_declaration_wins() {
    let module = parse(
        r#"
interface X { a: string }
type X = string;
"#,
    );
    let types = collect_types(&module);

    assert_eq!(types.len(), 1);
    assert!(matches!(types.get("X"), Some(TypeDecl::Alias(_))));
}

#[test]
fn test_empty_file_yields_empty_table() {
    let module = parse("const x = 1;");
    assert!(collect_types(&module).is_empty());
}

#[test]
fn test_lookup_type_follows_alias_chain_without_nullability() {
    let module = parse(
        r#"
type A = B;
type B = boolean;
"#,
    );
    let types = collect_types(&module);

    let node = lookup_type(alias_rhs(&types, "A"), &types);
    assert!(matches!(node, TsType::TsKeywordType(_)));
}

#[test]
fn test_lookup_type_stops_on_cycles() {
    let module = parse(
        r#"
type A = B;
type B = A;
"#,
    );
    let types = collect_types(&module);

    // No panic, no infinite loop; stops at a reference node.
    let node = lookup_type(alias_rhs(&types, "A"), &types);
    assert!(matches!(node, TsType::TsTypeRef(_)));
}
