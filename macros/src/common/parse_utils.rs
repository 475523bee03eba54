//! Common parsing utilities
//!
//! Attribute helpers shared by the item-rewriting macros.

use syn::{punctuated::Punctuated, Attribute, Ident, Path, Token};

// =============================================================================
// #[repr(..)] Lookup
// =============================================================================

/// Integer types accepted as a bitmask representation.
pub const INT_REPRS: &[&str] = &[
    "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize",
];

/// Find the integer named by a `#[repr(..)]` attribute.
///
/// Returns `Ok(None)` when no `repr` carries an integer type.
pub fn find_int_repr(attrs: &[Attribute]) -> syn::Result<Option<Ident>> {
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
        let hints = attr.parse_args_with(Punctuated::<Ident, Token![,]>::parse_terminated)?;
        if let Some(int) = hints
            .into_iter()
            .find(|hint| INT_REPRS.contains(&hint.to_string().as_str()))
        {
            return Ok(Some(int));
        }
    }
    Ok(None)
}

// =============================================================================
// #[derive(..)] Filtering
// =============================================================================

/// Paths listed by every `#[derive(..)]` attribute, minus the ones named in
/// `generated` (matched on the last path segment).
pub fn derives_except(attrs: &[Attribute], generated: &[&str]) -> syn::Result<Vec<Path>> {
    let mut kept = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let paths = attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)?;
        kept.extend(paths.into_iter().filter(|path| {
            path.segments
                .last()
                .map(|segment| !generated.contains(&segment.ident.to_string().as_str()))
                .unwrap_or(true)
        }));
    }
    Ok(kept)
}

/// Attributes that are neither `repr` nor `derive`.
pub fn passthrough_attrs(attrs: &[Attribute]) -> Vec<&Attribute> {
    attrs
        .iter()
        .filter(|attr| !attr.path().is_ident("repr") && !attr.path().is_ident("derive"))
        .collect()
}
