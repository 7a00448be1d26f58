//! Mapping from field types to the value kinds their mutators accept.

use proc_macro2::Ident;
use quote::format_ident;
use syn::Type;

use super::parse::type_utils::{is_plain, map_inner, option_inner, vec_inner};

/// `ValueKind` variant a field's mutator accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Kind {
    Text,
    Bool,
    Int64,
    Int32,
    Float64,
    Float32,
    ListOfText,
    MapOfText,
}

impl Kind {
    /// Name of the matching `ValueKind` and `ParamValue` variant.
    pub(crate) fn variant(self) -> Ident {
        format_ident!(
            "{}",
            match self {
                Self::Text => "Text",
                Self::Bool => "Bool",
                Self::Int64 => "Int64",
                Self::Int32 => "Int32",
                Self::Float64 => "Float64",
                Self::Float32 => "Float32",
                Self::ListOfText => "ListOfText",
                Self::MapOfText => "MapOfText",
            }
        )
    }
}

/// How a field stores the value its mutator receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FieldShape {
    pub(crate) kind: Kind,
    /// The field is `Option<T>` and is assigned `Some(value)`.
    pub(crate) optional: bool,
    /// The field is a map other than `IndexMap` and is filled by collecting.
    pub(crate) collect: bool,
}

const MAP_CONTAINERS: [&str; 3] = ["IndexMap", "HashMap", "BTreeMap"];

fn is_string(ty: &Type) -> bool {
    is_plain(ty, "String")
}

fn direct_shape(ty: &Type) -> Option<FieldShape> {
    let scalar = [
        ("String", Kind::Text),
        ("bool", Kind::Bool),
        ("i64", Kind::Int64),
        ("i32", Kind::Int32),
        ("f64", Kind::Float64),
        ("f32", Kind::Float32),
    ]
    .into_iter()
    .find_map(|(name, kind)| is_plain(ty, name).then_some(kind));
    let shape = |kind, collect| FieldShape {
        kind,
        optional: false,
        collect,
    };
    if let Some(kind) = scalar {
        return Some(shape(kind, false));
    }
    if vec_inner(ty).is_some_and(is_string) {
        return Some(shape(Kind::ListOfText, false));
    }
    if is_plain(ty, "TextMap") {
        return Some(shape(Kind::MapOfText, false));
    }
    MAP_CONTAINERS.into_iter().find_map(|container| {
        let (key, value) = map_inner(ty, container)?;
        (is_string(key) && is_string(value))
            .then(|| shape(Kind::MapOfText, container != "IndexMap"))
    })
}

/// Classifies a field type, or returns `None` when it has no mutator kind.
pub(crate) fn field_shape(ty: &Type) -> Option<FieldShape> {
    match option_inner(ty) {
        Some(inner) => direct_shape(inner).map(|shape| FieldShape {
            optional: true,
            ..shape
        }),
        None => direct_shape(ty),
    }
}
