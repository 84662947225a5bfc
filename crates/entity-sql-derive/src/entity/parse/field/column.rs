// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column options.
//!
//! # Supported Attributes
//!
//! | Attribute | Example | Effect |
//! |-----------|---------|--------|
//! | `name` | `#[column(name = "user_name")]` | Custom column name |
//! | `skip` | `#[column(skip)]` | Field is not mapped |
//! | `no_insert` | `#[column(no_insert)]` | Left out of inserts |
//! | `no_update` | `#[column(no_update)]` | Left out of updates |

use syn::{Attribute, LitStr, Token};

/// Column configuration from `#[column(...)]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnConfig {
    /// Custom column name. Defaults to the field name.
    pub name: Option<String>,

    /// Field is not mapped.
    pub skip: bool,

    /// Excluded from inserts.
    pub no_insert: bool,

    /// Excluded from updates.
    pub no_update: bool
}

impl ColumnConfig {
    /// Parse column config from a `#[column(...)]` attribute.
    ///
    /// # Errors
    ///
    /// Unknown option or a `name` that is not a string literal.
    pub fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        let mut config = Self::default();
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let _: Token![=] = meta.input.parse()?;
                let value: LitStr = meta.input.parse()?;
                config.name = Some(value.value());
            } else if meta.path.is_ident("skip") {
                config.skip = true;
            } else if meta.path.is_ident("no_insert") {
                config.no_insert = true;
            } else if meta.path.is_ident("no_update") {
                config.no_update = true;
            } else {
                return Err(meta.error("expected `name`, `skip`, `no_insert` or `no_update`"));
            }
            Ok(())
        })?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn all_options() {
        let attr: Attribute = parse_quote!(#[column(name = "addr", no_insert, no_update)]);
        let config = ColumnConfig::from_attr(&attr).unwrap();
        assert_eq!(config.name.as_deref(), Some("addr"));
        assert!(config.no_insert);
        assert!(config.no_update);
        assert!(!config.skip);
    }

    #[test]
    fn skip() {
        let attr: Attribute = parse_quote!(#[column(skip)]);
        assert!(ColumnConfig::from_attr(&attr).unwrap().skip);
    }

    #[test]
    fn unknown_option() {
        let attr: Attribute = parse_quote!(#[column(unique)]);
        assert!(ColumnConfig::from_attr(&attr).is_err());
    }
}
