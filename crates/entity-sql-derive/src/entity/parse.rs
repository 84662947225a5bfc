// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Entity derive macro.
//!
//! Entity-level attributes go through darling's `FromDeriveInput`. Field
//! attributes are markers (`#[key]`, `#[generated]`) or short lists
//! (`#[column(...)]`) and are parsed by hand.
//!
//! # Data Structures
//!
//! ```text
//! EntityDef
//! ├── ident: Ident            (struct name, default table and entity name)
//! ├── table: String
//! ├── schema: Option<String>
//! ├── dialect: SqlDialect
//! └── fields: Vec<FieldDef>   (mapped fields only, declaration order)
//!     └── FieldDef
//!         ├── property: String      (field name)
//!         ├── column_name: Option<String>
//!         ├── kind: PropertyKind
//!         ├── key: bool
//!         ├── generated: GeneratedConfig
//!         └── column: ColumnConfig (skip / no_insert / no_update)
//! ```

mod dialect;
mod entity;
mod field;

pub use dialect::SqlDialect;
pub use entity::EntityDef;
pub use field::{FieldDef, PropertyKind};
