//! AST index and type-alias resolution.
//!
//! The index maps every top-level interface / type-alias name to its
//! declaration node; the resolver follows alias chains down to a concrete
//! structural type while tracking nullability picked up along the way.

use indexmap::IndexMap;
use schemagen_core::ParserError;
use std::collections::HashSet;
use swc_ecma_ast::{
    Decl, Expr, Module, ModuleDecl, ModuleItem, Stmt, TsEntityName, TsInterfaceDecl, TsType,
    TsTypeAliasDecl, TsUnionOrIntersectionType,
};

/// A named top-level type declaration.
#[derive(Debug, Clone, Copy)]
pub enum TypeDecl<'a> {
    Interface(&'a TsInterfaceDecl),
    Alias(&'a TsTypeAliasDecl),
}

impl TypeDecl<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            TypeDecl::Interface(_) => "TsInterfaceDecl",
            TypeDecl::Alias(_) => "TsTypeAliasDecl",
        }
    }
}

/// Name -> declaration mapping for one file. Insertion order is kept so
/// that diagnostics and duplicate-interface detection follow declaration
/// order; a re-declared name overwrites the earlier entry (last one wins).
pub type TypeTable<'a> = IndexMap<String, TypeDecl<'a>>;

/// Builds the [`TypeTable`] for a file. Non-type statements are ignored;
/// a file without type declarations yields an empty table.
pub fn collect_types(module: &Module) -> TypeTable<'_> {
    let mut types = TypeTable::new();

    for item in &module.body {
        let decl = match item {
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => Some(&export.decl),
            ModuleItem::Stmt(Stmt::Decl(decl)) => Some(decl),
            _ => None,
        };

        match decl {
            Some(Decl::TsInterface(interface)) => {
                types.insert(
                    interface.id.sym.as_ref().to_string(),
                    TypeDecl::Interface(interface),
                );
            }
            Some(Decl::TsTypeAlias(alias)) => {
                types.insert(alias.id.sym.as_ref().to_string(), TypeDecl::Alias(alias));
            }
            _ => {}
        }
    }

    types
}

/// Result of fully resolving a type reference chain.
#[derive(Debug, Clone)]
pub struct ResolvedType<'a> {
    /// True iff the chain passed through at least one union with a
    /// null/void member.
    pub nullable: bool,
    /// The concrete node the chain bottomed out at.
    pub type_annotation: &'a TsType,
    /// Name of the last named alias the chain passed through, if any.
    pub alias_name: Option<String>,
}

/// Follows a type annotation to a concrete structural type.
///
/// Loops until fixpoint: strips `| null | void` union members (recording
/// nullability), and inlines named references that point at local type
/// aliases. Unresolvable names (built-ins such as `Promise` or `Int32`)
/// stop the loop and stay opaque. A reference that lands on an interface
/// declaration is an error; interfaces are not inlined this way. Alias
/// cycles fail fast instead of looping forever.
pub fn resolve_type_annotation<'a>(
    ts_type: &'a TsType,
    types: &TypeTable<'a>,
) -> Result<ResolvedType<'a>, ParserError> {
    let mut node = ts_type;
    let mut nullable = false;
    let mut alias_name: Option<String> = None;
    let mut visited: HashSet<String> = HashSet::new();

    loop {
        if let Some(member) = non_null_union_member(node)? {
            nullable = true;
            node = member;
            continue;
        }

        if let TsType::TsTypeRef(type_ref) = node {
            let name = match &type_ref.type_name {
                TsEntityName::Ident(ident) => ident.sym.as_ref().to_string(),
                TsEntityName::TsQualifiedName(_) => break,
            };

            alias_name = Some(name.clone());

            let Some(decl) = types.get(&name) else {
                break;
            };

            if !visited.insert(name.clone()) {
                return Err(ParserError::CircularTypeAlias { name });
            }

            match decl {
                TypeDecl::Alias(alias) => node = &alias.type_ann,
                TypeDecl::Interface(_) => {
                    return Err(ParserError::AliasMustBeTypeAlias {
                        name,
                        kind: decl.kind().to_string(),
                    });
                }
            }
            continue;
        }

        break;
    }

    Ok(ResolvedType {
        nullable,
        type_annotation: node,
        alias_name,
    })
}

/// If `node` is a union containing null/void, returns the first remaining
/// member after stripping them. Errors when nothing remains.
fn non_null_union_member(node: &TsType) -> Result<Option<&TsType>, ParserError> {
    let TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsUnionType(union)) = node
    else {
        return Ok(None);
    };

    if !union.types.iter().any(|t| is_null_or_void(t)) {
        return Ok(None);
    }

    union
        .types
        .iter()
        .find(|t| !is_null_or_void(t))
        .map(|t| Some(t.as_ref()))
        .ok_or_else(|| ParserError::EmptyUnion {
            name: "union".to_string(),
        })
}

/// Single-chain alias lookup, used when unwrapping `Readonly<T>` /
/// `ReadonlyArray<T>` shapes. Unlike [`resolve_type_annotation`] it does
/// not track nullability and stops at the first node that is not a plain
/// reference to a local type alias. Cycles simply stop following.
pub fn lookup_type<'a>(value: &'a TsType, types: &TypeTable<'a>) -> &'a TsType {
    let mut node = value;
    let mut visited: HashSet<&str> = HashSet::new();

    while let TsType::TsTypeRef(type_ref) = node {
        let TsEntityName::Ident(ident) = &type_ref.type_name else {
            break;
        };
        let name = ident.sym.as_ref();
        if !visited.insert(name) {
            break;
        }
        match types.get(name) {
            Some(TypeDecl::Alias(alias)) => node = &alias.type_ann,
            _ => break,
        }
    }

    node
}

/// True for the `null` and `void` keyword types.
pub fn is_null_or_void(ts_type: &TsType) -> bool {
    matches!(
        ts_type,
        TsType::TsKeywordType(keyword) if matches!(
            keyword.kind,
            swc_ecma_ast::TsKeywordTypeKind::TsNullKeyword
                | swc_ecma_ast::TsKeywordTypeKind::TsVoidKeyword
        )
    )
}

/// Name of a type reference when it is a plain identifier.
pub fn type_ref_name(type_ref: &swc_ecma_ast::TsTypeRef) -> Option<&str> {
    match &type_ref.type_name {
        TsEntityName::Ident(ident) => Some(ident.sym.as_ref()),
        TsEntityName::TsQualifiedName(_) => None,
    }
}

/// Name of a property/method key when it is an identifier or a string
/// literal.
pub fn key_name(key: &Expr) -> Option<String> {
    match key {
        Expr::Ident(ident) => Some(ident.sym.as_ref().to_string()),
        Expr::Lit(swc_ecma_ast::Lit::Str(s)) => Some(s.value.as_str().unwrap_or("").to_string()),
        _ => None,
    }
}

/// Syntax-node kind tag used in diagnostics.
pub fn ts_type_kind(ts_type: &TsType) -> &'static str {
    match ts_type {
        TsType::TsKeywordType(keyword) => match keyword.kind {
            swc_ecma_ast::TsKeywordTypeKind::TsAnyKeyword => "TsAnyKeyword",
            swc_ecma_ast::TsKeywordTypeKind::TsUnknownKeyword => "TsUnknownKeyword",
            swc_ecma_ast::TsKeywordTypeKind::TsNumberKeyword => "TsNumberKeyword",
            swc_ecma_ast::TsKeywordTypeKind::TsObjectKeyword => "TsObjectKeyword",
            swc_ecma_ast::TsKeywordTypeKind::TsBooleanKeyword => "TsBooleanKeyword",
            swc_ecma_ast::TsKeywordTypeKind::TsBigIntKeyword => "TsBigIntKeyword",
            swc_ecma_ast::TsKeywordTypeKind::TsStringKeyword => "TsStringKeyword",
            swc_ecma_ast::TsKeywordTypeKind::TsSymbolKeyword => "TsSymbolKeyword",
            swc_ecma_ast::TsKeywordTypeKind::TsVoidKeyword => "TsVoidKeyword",
            swc_ecma_ast::TsKeywordTypeKind::TsUndefinedKeyword => "TsUndefinedKeyword",
            swc_ecma_ast::TsKeywordTypeKind::TsNullKeyword => "TsNullKeyword",
            swc_ecma_ast::TsKeywordTypeKind::TsNeverKeyword => "TsNeverKeyword",
            swc_ecma_ast::TsKeywordTypeKind::TsIntrinsicKeyword => "TsIntrinsicKeyword",
        },
        TsType::TsThisType(_) => "TsThisType",
        TsType::TsFnOrConstructorType(_) => "TsFnOrConstructorType",
        TsType::TsTypeRef(_) => "TsTypeRef",
        TsType::TsTypeQuery(_) => "TsTypeQuery",
        TsType::TsTypeLit(_) => "TsTypeLit",
        TsType::TsArrayType(_) => "TsArrayType",
        TsType::TsTupleType(_) => "TsTupleType",
        TsType::TsOptionalType(_) => "TsOptionalType",
        TsType::TsRestType(_) => "TsRestType",
        TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsUnionType(_)) => {
            "TsUnionType"
        }
        TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsIntersectionType(_)) => {
            "TsIntersectionType"
        }
        TsType::TsConditionalType(_) => "TsConditionalType",
        TsType::TsInferType(_) => "TsInferType",
        TsType::TsParenthesizedType(_) => "TsParenthesizedType",
        TsType::TsTypeOperator(_) => "TsTypeOperator",
        TsType::TsIndexedAccessType(_) => "TsIndexedAccessType",
        TsType::TsMappedType(_) => "TsMappedType",
        TsType::TsLitType(_) => "TsLitType",
        TsType::TsTypePredicate(_) => "TsTypePredicate",
        TsType::TsImportType(_) => "TsImportType",
    }
}
