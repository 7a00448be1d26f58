//! Type introspection helpers.
//!
//! These utilities perform shallow inspection of `syn::Type` values to
//! recognise `Option<T>`, `Vec<T>`, and map containers by the final path
//! segment, so `std::option::Option<T>` and `Option<T>` are treated alike.

use syn::{GenericArgument, PathArguments, PathSegment, Type};

/// Returns the final path segment of `ty`, if it is a path type.
pub(crate) fn last_segment(ty: &Type) -> Option<&PathSegment> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }
    path.path.segments.last()
}

/// Returns `true` when `ty` is a bare path whose last segment is `name`
/// with no generic arguments.
pub(crate) fn is_plain(ty: &Type, name: &str) -> bool {
    last_segment(ty)
        .is_some_and(|segment| segment.ident == name && segment.arguments.is_none())
}

fn type_arguments(segment: &PathSegment) -> Vec<&Type> {
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return Vec::new();
    };
    args.args
        .iter()
        .filter_map(|arg| match arg {
            GenericArgument::Type(inner) => Some(inner),
            _ => None,
        })
        .collect()
}

fn type_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let segment = last_segment(ty).filter(|segment| segment.ident == wrapper)?;
    match type_arguments(segment).as_slice() {
        [inner] => Some(*inner),
        _ => None,
    }
}

/// Returns the inner type if `ty` is `Option<T>`. Not recursive.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    type_inner(ty, "Option")
}

/// Extracts the element type `T` if `ty` is `Vec<T>`.
pub(crate) fn vec_inner(ty: &Type) -> Option<&Type> {
    type_inner(ty, "Vec")
}

/// Extracts the key and value types if `ty` is the map container `wrapper`.
///
/// Extra arguments such as a hasher are allowed after the value type.
pub(crate) fn map_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<(&'a Type, &'a Type)> {
    let segment = last_segment(ty).filter(|segment| segment.ident == wrapper)?;
    match type_arguments(segment).as_slice() {
        [key, value, ..] => Some((*key, *value)),
        _ => None,
    }
}
