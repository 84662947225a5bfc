// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! Derive macro for `entity-sql`.
//!
//! Use it through the `entity-sql` crate, which re-exports [`Entity`](macro@Entity)
//! under its default `derive` feature.
//!
//! # Attribute Quick Reference
//!
//! ## Entity-Level `#[entity(...)]`
//!
//! ```rust,ignore
//! #[derive(Entity)]
//! #[entity(
//!     table = "users",       // Optional: table name (default: struct name)
//!     schema = "dbo",        // Optional: schema
//!     dialect = "mssql",     // Optional: "mssql" | "mysql" | "postgres" | "sqlite"
//!     rename_all = "snake_case"
//! )]
//! pub struct User { /* ... */ }
//! ```
//!
//! ## Field-Level
//!
//! | Attribute | Effect |
//! |-----------|--------|
//! | `#[key]` | Key property |
//! | `#[generated]` | Assigned by the database on insert |
//! | `#[generated(update)]` | Refreshed by the database on update |
//! | `#[generated(insert, update)]` | Both |
//! | `#[column(name = "col")]` | Column name |
//! | `#[column(no_insert)]` | Left out of inserts |
//! | `#[column(no_update)]` | Left out of updates |
//! | `#[column(skip)]` | Not mapped at all |
//!
//! ## Property Types
//!
//! | Rust Type | Property Type |
//! |-----------|---------------|
//! | `i32` / `i64` | `Int32` / `Int64` (identity capable) |
//! | other integers, floats, `bool` | matching kind |
//! | `String`, `&str` | `String` |
//! | `Uuid` | `Uuid` |
//! | `DateTime<_>`, `NaiveDateTime`, `OffsetDateTime` | `DateTime` |
//! | `NaiveDate` / `NaiveTime` | `Date` / `Time` |
//! | `Decimal`, `BigDecimal` | `Decimal` |
//! | `Vec<u8>` | `Bytes` |
//! | `Option<T>` | type of `T` |
//! | anything else | `Other("Name")` |

mod entity;

use proc_macro::TokenStream;

/// Implement `entity_sql::Entity` from the struct definition.
///
/// Fields map to properties in declaration order, named after the field.
#[proc_macro_derive(Entity, attributes(entity, key, generated, column))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive(input)
}
