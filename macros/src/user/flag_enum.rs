//! `#[flag_enum]`: rewrite a fieldless enum into a bitmask newtype.
//!
//! ```ignore
//! #[flag_enum]
//! #[repr(u8)]
//! pub enum Access { Read = 1, Write = 2 }
//!
//! // Becomes (abridged):
//! #[repr(transparent)]
//! pub struct Access(u8);
//! impl Access {
//!     pub const Read: Self = Self(1);
//!     pub const Write: Self = Self(2);
//! }
//! // + BitOr, BitAnd, Not, BitOrAssign, BitAndAssign,
//! //   PartialEq<u8> both ways, Flags, FlagEnum, Debug
//! ```

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{Attribute, Fields, Ident, ItemEnum};

use crate::common::{derives_except, find_int_repr, passthrough_attrs};

/// Traits the expansion implements itself; user derives of these are dropped.
const GENERATED: &[&str] = &["Clone", "Copy", "PartialEq", "Eq", "Hash", "Default", "Debug"];

/// Attributes kept on an enumerator's constant.
const VARIANT_ATTRS: &[&str] = &["doc", "deprecated", "allow"];

pub fn expand_flag_enum(attr: TokenStream2, item: ItemEnum) -> syn::Result<TokenStream2> {
    if !attr.is_empty() {
        return Err(syn::Error::new_spanned(attr, "#[flag_enum] takes no arguments"));
    }
    if !item.generics.params.is_empty() || item.generics.where_clause.is_some() {
        return Err(syn::Error::new_spanned(
            &item.generics,
            "flag enums cannot be generic",
        ));
    }

    let repr = find_int_repr(&item.attrs)?.ok_or_else(|| {
        syn::Error::new_spanned(
            &item.ident,
            "flag enums need an integer representation, e.g. #[repr(u32)]",
        )
    })?;

    let name = &item.ident;
    let vis = &item.vis;
    let attrs = passthrough_attrs(&item.attrs);
    let derives = derives_except(&item.attrs, GENERATED)?;

    let variants = enumerators(&item)?;
    let consts = variants.iter().map(|variant| {
        let ident = &variant.ident;
        let value = &variant.value;
        let attrs = &variant.attrs;
        quote! {
            #(#attrs)*
            pub const #ident: Self = Self(#value);
        }
    });
    let table = variants.iter().map(|variant| {
        let ident = &variant.ident;
        let label = ident.to_string();
        quote! { (#label, Self::#ident) }
    });

    Ok(quote! {
        #(#attrs)*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, #(#derives),*)]
        #vis struct #name(#repr);

        #[allow(non_upper_case_globals)]
        impl #name {
            #(#consts)*

            /// The underlying representation.
            #[inline]
            pub const fn bits(self) -> #repr {
                self.0
            }

            /// Wraps a raw representation. Undeclared bits are kept.
            #[inline]
            pub const fn from_bits(bits: #repr) -> Self {
                Self(bits)
            }
        }

        impl ::core::ops::BitOr for #name {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl ::core::ops::BitAnd for #name {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl ::core::ops::Not for #name {
            type Output = Self;

            #[inline]
            fn not(self) -> Self {
                Self(!self.0)
            }
        }

        impl ::core::ops::BitOrAssign for #name {
            #[inline]
            fn bitor_assign(&mut self, rhs: Self) {
                *self = *self | rhs;
            }
        }

        impl ::core::ops::BitAndAssign for #name {
            #[inline]
            fn bitand_assign(&mut self, rhs: Self) {
                *self = *self & rhs;
            }
        }

        impl ::core::cmp::PartialEq<#repr> for #name {
            #[inline]
            fn eq(&self, other: &#repr) -> bool {
                self.0 == *other
            }
        }

        impl ::core::cmp::PartialEq<#name> for #repr {
            #[inline]
            fn eq(&self, other: &#name) -> bool {
                *self == other.0
            }
        }

        impl ::nano_common::flags::Flags for #name {
            const EMPTY: Self = Self(0);
        }

        impl ::nano_common::flags::FlagEnum for #name {
            type Repr = #repr;

            const VARIANTS: &'static [(&'static str, Self)] = &[#(#table),*];

            #[inline]
            fn bits(self) -> #repr {
                self.0
            }

            #[inline]
            fn from_bits(bits: #repr) -> Self {
                Self(bits)
            }
        }

        impl ::core::fmt::Debug for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::nano_common::flags::flag_enum::debug_flags(*self, stringify!(#name), f)
            }
        }
    })
}

// =============================================================================
// Enumerators
// =============================================================================

struct Enumerator {
    ident: Ident,
    value: TokenStream2,
    attrs: Vec<Attribute>,
}

/// Resolve every enumerator's value expression.
///
/// Implicit discriminants follow the enum rule: zero for the first, the
/// previous constant plus one otherwise.
fn enumerators(item: &ItemEnum) -> syn::Result<Vec<Enumerator>> {
    let mut out: Vec<Enumerator> = Vec::with_capacity(item.variants.len());

    for variant in &item.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "flag enumerators cannot carry fields",
            ));
        }

        let mut attrs = Vec::new();
        for attr in &variant.attrs {
            if VARIANT_ATTRS.iter().any(|name| attr.path().is_ident(name)) {
                attrs.push(attr.clone());
            } else {
                return Err(syn::Error::new_spanned(
                    attr,
                    "unsupported attribute on a flag enumerator",
                ));
            }
        }

        let value = match (&variant.discriminant, out.last()) {
            (Some((_, expr)), _) => quote! { #expr },
            (None, Some(previous)) => {
                let previous = &previous.ident;
                quote! { Self::#previous.0 + 1 }
            }
            (None, None) => quote! { 0 },
        };

        out.push(Enumerator {
            ident: variant.ident.clone(),
            value,
            attrs,
        });
    }

    if out.is_empty() {
        return Err(syn::Error::new(
            Span::call_site(),
            "flag enums need at least one enumerator",
        ));
    }
    Ok(out)
}
