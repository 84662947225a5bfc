// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

//! # Quick Navigation
//!
//! - [`EntityRegistration`] / [`PropertyMapping`]: describe a table
//! - [`SqlStatements`]: the statement set of one registration
//! - [`EntityDescriptor`]: per-type cache of statement sets
//! - [`Dialect`]: MsSql, MySql, PostgreSql, SqLite
//!
//! # Insert Read-Back
//!
//! | Generated columns | MsSql | MySql | PostgreSql | SqLite |
//! |-------------------|-------|-------|------------|--------|
//! | none | plain insert | plain insert | plain insert | plain insert |
//! | one integer key | `SCOPE_IDENTITY()` | `LAST_INSERT_ID()` | `RETURNING` | `last_insert_rowid()` |
//! | anything else | `OUTPUT` into `#temp` | re-select by key | `RETURNING` | `RETURNING` |
//!
//! # Attribute Quick Reference
//!
//! ```rust,ignore
//! #[derive(Entity)]
//! #[entity(
//!     table = "users",        // Optional: table name (default: struct name)
//!     schema = "dbo",         // Optional: schema, ignored by SQLite
//!     dialect = "mssql",      // Optional: "mssql" | "mysql" | "postgres" | "sqlite"
//!     rename_all = "snake"    // Optional: column naming case
//! )]
//! pub struct User {
//!     #[key]
//!     #[generated]            // Assigned by the database on insert
//!     pub id: i32,
//!
//!     #[column(name = "display_name")]
//!     pub name: String,
//!
//!     #[column(no_update)]    // Written once
//!     pub email: String,
//!
//!     #[generated(insert, update)]
//!     pub modified_at: DateTime<Utc>,
//!
//!     #[column(skip)]         // Not mapped
//!     pub cache: Vec<u8>,
//! }
//! ```

pub mod descriptor;
pub mod dialect;
pub mod error;
pub mod query;
pub mod registration;
pub mod sql;
pub mod statements;

pub use self::{
    descriptor::{Entity, EntityDescriptor, descriptor},
    dialect::Dialect,
    error::{Error, Result, StatementKind},
    query::SelectQuery,
    registration::{
        EntityRegistration, EntityRegistrationBuilder, PropertyMapping, PropertyType,
        RegistrationId
    },
    sql::SqlBuilder,
    statements::{SqlStatements, Statement}
};

/// Derive macro implementing [`Entity`].
///
/// See the [attribute reference](crate#attribute-quick-reference).
#[cfg(feature = "derive")]
#[cfg_attr(docsrs, doc(cfg(feature = "derive")))]
pub use entity_sql_derive::Entity;
