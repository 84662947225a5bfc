// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity-level attribute parsing.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `table` | No | struct name | Database table name |
//! | `schema` | No | none | Database schema |
//! | `dialect` | No | `mssql` | SQL dialect |
//! | `rename_all` | No | none | Case applied to column names |

use convert_case::{Case, Casing};
use darling::{FromDeriveInput, FromMeta};
use syn::{DeriveInput, Generics, Ident};

use super::{SqlDialect, field::FieldDef};

/// Column naming rule from `rename_all`.
///
/// Only column names change; property and parameter names stay the field
/// names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// `snake_case`
    Snake,

    /// `SCREAMING_SNAKE_CASE`
    ScreamingSnake,

    /// `camelCase`
    Camel,

    /// `PascalCase`
    Pascal,

    /// `kebab-case`
    Kebab
}

impl RenameRule {
    /// Apply the rule to a field name.
    pub fn apply(self, name: &str) -> String {
        let case = match self {
            Self::Snake => Case::Snake,
            Self::ScreamingSnake => Case::Constant,
            Self::Camel => Case::Camel,
            Self::Pascal => Case::Pascal,
            Self::Kebab => Case::Kebab
        };
        name.to_case(case)
    }
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "snake_case" | "snake" => Ok(Self::Snake),
            "SCREAMING_SNAKE_CASE" | "screaming_snake" | "constant" => Ok(Self::ScreamingSnake),
            "camelCase" | "camel" => Ok(Self::Camel),
            "PascalCase" | "pascal" => Ok(Self::Pascal),
            "kebab-case" | "kebab" => Ok(Self::Kebab),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}

/// Entity-level attributes parsed from `#[entity(...)]`.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity), supports(struct_named))]
pub struct EntityAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics, forwarded to the impl.
    pub generics: Generics,

    /// Database table name.
    #[darling(default)]
    pub table: Option<String>,

    /// Database schema name.
    #[darling(default)]
    pub schema: Option<String>,

    /// Target dialect.
    #[darling(default)]
    pub dialect: SqlDialect,

    /// Column naming rule.
    #[darling(default)]
    pub rename_all: Option<RenameRule>
}

/// Complete entity definition used by code generation.
#[derive(Debug)]
pub struct EntityDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics.
    pub generics: Generics,

    /// Database table name.
    pub table: String,

    /// Database schema name.
    pub schema: Option<String>,

    /// Target dialect.
    pub dialect: SqlDialect,

    /// Mapped fields in declaration order.
    pub fields: Vec<FieldDef>
}

impl EntityDef {
    /// Parse entity definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Applied to an enum, union, tuple or unit struct
    /// - Unknown dialect or rename rule
    /// - Malformed field attributes
    /// - No mapped field left after `#[column(skip)]`
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = EntityAttrs::from_derive_input(input)?;

        let named = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => &named.named,
                _ => {
                    return Err(darling::Error::custom("Entity requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Entity can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let mut errors = darling::Error::accumulator();
        let fields: Vec<FieldDef> = named
            .iter()
            .filter_map(|field| errors.handle(FieldDef::from_field(field, attrs.rename_all)))
            .filter(|field| !field.is_skipped())
            .collect();
        errors.finish()?;

        if fields.is_empty() {
            return Err(darling::Error::custom("Entity must map at least one field")
                .with_span(&input.ident));
        }

        Ok(Self {
            table: attrs.table.unwrap_or_else(|| attrs.ident.to_string()),
            ident: attrs.ident,
            generics: attrs.generics,
            schema: attrs.schema.filter(|schema| !schema.is_empty()),
            dialect: attrs.dialect,
            fields
        })
    }

    /// Entity name used in registrations and messages.
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }
}
