// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Database-generated values.
//!
//! A bare `#[generated]` means generated on insert, the usual identity or
//! default-valued column. Columns maintained by triggers or computed
//! expressions list `update` as well.

use syn::{Attribute, Meta};

/// Generation config from `#[generated]` / `#[generated(...)]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratedConfig {
    /// Assigned by the database on insert and read back.
    pub insert: bool,

    /// Refreshed by the database on update and read back.
    pub update: bool
}

impl GeneratedConfig {
    /// Parse a `#[generated]` attribute.
    ///
    /// # Errors
    ///
    /// Options other than `insert` and `update`, or an empty list.
    pub fn from_attr(attr: &Attribute) -> darling::Result<Self> {
        if let Meta::Path(_) = attr.meta {
            return Ok(Self {
                insert: true,
                update: false
            });
        }

        let mut config = Self::default();
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("insert") {
                config.insert = true;
            } else if meta.path.is_ident("update") {
                config.update = true;
            } else {
                return Err(meta.error("expected `insert` or `update`"));
            }
            Ok(())
        })?;

        if !config.insert && !config.update {
            return Err(darling::Error::custom("expected `insert` or `update`").with_span(attr));
        }
        Ok(config)
    }
}
