pub mod component;
pub mod module;

pub use component::*;
pub use module::*;

use serde::{Deserialize, Serialize};

/// Platform excluded by the `Android`/`IOS` module-name suffix convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "android")]
    Android,
}

/// Nullability wrapper used throughout the module schema.
///
/// Nullability lives on the *usage* of a type, not on the aliased shape
/// itself: the same alias can be nullable in one method signature and
/// non-null in another.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Nullable<T> {
    pub nullable: bool,
    #[serde(rename = "typeAnnotation")]
    pub type_annotation: T,
}

impl<T> Nullable<T> {
    pub fn new(nullable: bool, type_annotation: T) -> Self {
        Self {
            nullable,
            type_annotation,
        }
    }

    pub fn non_null(type_annotation: T) -> Self {
        Self::new(false, type_annotation)
    }
}
