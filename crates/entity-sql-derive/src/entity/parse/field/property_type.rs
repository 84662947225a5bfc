// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rust type to property type inference.
//!
//! Inference only looks at the last path segment, so `uuid::Uuid` and
//! `Uuid` agree. `Option<T>` maps like `T`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, PathArguments, Type};

/// Compile-time mirror of `entity_sql::PropertyType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Decimal,
    String,
    Uuid,
    DateTime,
    Date,
    Time,
    Bytes,
    Other(String)
}

impl PropertyKind {
    /// Infer the kind of a field type.
    pub fn infer(ty: &Type) -> Self {
        if let Some(inner) = generic_inner(ty, "Option") {
            return Self::infer(inner);
        }
        if let Type::Reference(reference) = ty {
            return Self::infer(&reference.elem);
        }
        if let Some(inner) = generic_inner(ty, "Vec")
            && last_segment(inner).as_deref() == Some("u8")
        {
            return Self::Bytes;
        }

        let Some(name) = last_segment(ty) else {
            return Self::Other(quote!(#ty).to_string());
        };
        match name.as_str() {
            "bool" => Self::Bool,
            "i8" => Self::Int8,
            "i16" => Self::Int16,
            "i32" => Self::Int32,
            "i64" => Self::Int64,
            "u8" => Self::UInt8,
            "u16" => Self::UInt16,
            "u32" => Self::UInt32,
            "u64" => Self::UInt64,
            "f32" => Self::Float32,
            "f64" => Self::Float64,
            "Decimal" | "BigDecimal" => Self::Decimal,
            "String" | "str" => Self::String,
            "Uuid" => Self::Uuid,
            "DateTime" | "NaiveDateTime" | "OffsetDateTime" | "PrimitiveDateTime" => {
                Self::DateTime
            }
            "NaiveDate" | "Date" => Self::Date,
            "NaiveTime" | "Time" => Self::Time,
            "Bytes" => Self::Bytes,
            _ => Self::Other(name)
        }
    }

    /// Expression building the matching `entity_sql::PropertyType`.
    pub fn to_tokens(&self) -> TokenStream {
        let variant = match self {
            Self::Other(name) => {
                return quote!(::entity_sql::PropertyType::Other(::std::string::String::from(#name)));
            }
            Self::Bool => quote!(Bool),
            Self::Int8 => quote!(Int8),
            Self::Int16 => quote!(Int16),
            Self::Int32 => quote!(Int32),
            Self::Int64 => quote!(Int64),
            Self::UInt8 => quote!(UInt8),
            Self::UInt16 => quote!(UInt16),
            Self::UInt32 => quote!(UInt32),
            Self::UInt64 => quote!(UInt64),
            Self::Float32 => quote!(Float32),
            Self::Float64 => quote!(Float64),
            Self::Decimal => quote!(Decimal),
            Self::String => quote!(String),
            Self::Uuid => quote!(Uuid),
            Self::DateTime => quote!(DateTime),
            Self::Date => quote!(Date),
            Self::Time => quote!(Time),
            Self::Bytes => quote!(Bytes)
        };
        quote!(::entity_sql::PropertyType::#variant)
    }
}

fn last_segment(ty: &Type) -> Option<String> {
    if let Type::Path(type_path) = ty {
        return type_path.path.segments.last().map(|s| s.ident.to_string());
    }
    None
}

fn generic_inner<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
        && segment.ident == wrapper
        && let PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(GenericArgument::Type(inner)) = args.args.first()
    {
        return Some(inner);
    }
    None
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn infer(ty: Type) -> PropertyKind {
        PropertyKind::infer(&ty)
    }

    #[test]
    fn integers() {
        assert_eq!(infer(parse_quote!(i32)), PropertyKind::Int32);
        assert_eq!(infer(parse_quote!(i64)), PropertyKind::Int64);
        assert_eq!(infer(parse_quote!(u16)), PropertyKind::UInt16);
    }

    #[test]
    fn option_is_unwrapped() {
        assert_eq!(infer(parse_quote!(Option<i64>)), PropertyKind::Int64);
        assert_eq!(infer(parse_quote!(std::option::Option<String>)), PropertyKind::String);
    }

    #[test]
    fn qualified_paths() {
        assert_eq!(infer(parse_quote!(uuid::Uuid)), PropertyKind::Uuid);
        assert_eq!(infer(parse_quote!(chrono::DateTime<chrono::Utc>)), PropertyKind::DateTime);
        assert_eq!(infer(parse_quote!(chrono::NaiveDate)), PropertyKind::Date);
    }

    #[test]
    fn bytes_and_references() {
        assert_eq!(infer(parse_quote!(Vec<u8>)), PropertyKind::Bytes);
        assert_eq!(infer(parse_quote!(&'static str)), PropertyKind::String);
    }

    #[test]
    fn other() {
        assert_eq!(
            infer(parse_quote!(serde_json::Value)),
            PropertyKind::Other("Value".into())
        );
        assert_eq!(
            infer(parse_quote!(Vec<String>)),
            PropertyKind::Other("Vec".into())
        );
    }

    #[test]
    fn tokens() {
        assert_eq!(
            PropertyKind::Int32.to_tokens().to_string(),
            quote!(::entity_sql::PropertyType::Int32).to_string()
        );
    }
}
