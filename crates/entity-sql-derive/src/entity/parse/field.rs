// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! # Architecture
//!
//! ```text
//! field.rs (coordinator)
//! ├── column.rs         - #[column(name, skip, no_insert, no_update)]
//! ├── generated.rs      - #[generated], #[generated(insert, update)]
//! └── property_type.rs  - Rust type → property type
//! ```

mod column;
mod generated;
mod property_type;

use syn::{Field, Ident, ext::IdentExt};

pub use self::{column::ColumnConfig, generated::GeneratedConfig, property_type::PropertyKind};
use super::entity::RenameRule;

/// Field definition with all parsed attributes.
///
/// # Example
///
/// ```rust,ignore
/// #[key]
/// #[generated]                    // GeneratedConfig::insert
/// pub id: i32,
///
/// #[column(name = "full_name")]   // ColumnConfig::name
/// pub name: String,
/// ```
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Property name: the field name without raw prefix.
    pub property: String,

    /// Column name when it differs from the property name.
    pub column_name: Option<String>,

    /// Inferred property type.
    pub kind: PropertyKind,

    /// Key property (`#[key]`).
    pub key: bool,

    /// Database generation.
    pub generated: GeneratedConfig,

    /// Column options.
    pub column: ColumnConfig
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// Unnamed field, or malformed `#[generated]` / `#[column]` attributes.
    pub fn from_field(field: &Field, rename: Option<RenameRule>) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Entity fields must be named").with_span(field)
        })?;
        let property = ident.unraw().to_string();

        let mut key = false;
        let mut generated = GeneratedConfig::default();
        let mut column = ColumnConfig::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                key = true;
            } else if attr.path().is_ident("generated") {
                generated = GeneratedConfig::from_attr(attr)?;
            } else if attr.path().is_ident("column") {
                column = ColumnConfig::from_attr(attr)?;
            }
        }

        let column_name = column
            .name
            .clone()
            .or_else(|| rename.map(|rule| rule.apply(&property)))
            .filter(|name| *name != property);

        Ok(Self {
            kind: PropertyKind::infer(&field.ty),
            ident,
            property,
            column_name,
            key,
            generated,
            column
        })
    }

    /// Property name.
    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Column name override.
    #[must_use]
    pub fn column(&self) -> Option<&str> {
        self.column_name.as_deref()
    }

    /// Whether `#[column(skip)]` removes the field from the mapping.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.column.skip
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn parse(field: Field) -> FieldDef {
        FieldDef::from_field(&field, None).unwrap()
    }

    #[test]
    fn plain_field() {
        let def = parse(parse_quote!(pub name: String));
        assert_eq!(def.property(), "name");
        assert_eq!(def.column(), None);
        assert_eq!(def.kind, PropertyKind::String);
        assert!(!def.key);
        assert!(!def.generated.insert && !def.generated.update);
    }

    #[test]
    fn identity_key() {
        let def = parse(parse_quote!(#[key] #[generated] pub id: i32));
        assert!(def.key);
        assert!(def.generated.insert);
        assert!(!def.generated.update);
        assert_eq!(def.kind, PropertyKind::Int32);
    }

    #[test]
    fn raw_identifier() {
        let def = parse(parse_quote!(pub r#type: String));
        assert_eq!(def.property(), "type");
    }

    #[test]
    fn column_equal_to_property_is_not_a_rename() {
        let def = parse(parse_quote!(#[column(name = "email")] pub email: String));
        assert_eq!(def.column(), None);
    }

    #[test]
    fn rename_rule_applies_without_explicit_name() {
        let field: Field = parse_quote!(pub createdAt: i64);
        let def = FieldDef::from_field(&field, Some(RenameRule::Snake)).unwrap();
        assert_eq!(def.property(), "createdAt");
        assert_eq!(def.column(), Some("created_at"));
    }

    #[test]
    fn malformed_generated() {
        let field: Field = parse_quote!(#[generated(always)] pub id: i32);
        assert!(FieldDef::from_field(&field, None).is_err());
    }
}
