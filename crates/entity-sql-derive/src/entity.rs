// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! entity.rs (orchestrator)
//! │
//! ├── parse/           → Attribute parsing (EntityDef, FieldDef)
//! │   ├── entity.rs    → #[entity(...)] via darling
//! │   ├── dialect.rs   → dialect names
//! │   └── field/       → #[key], #[generated], #[column], type inference
//! │
//! └── registration.rs  → impl ::entity_sql::Entity
//! ```

mod parse;
mod registration;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::EntityDef;

/// Main entry point for the Entity derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match EntityDef::from_derive_input(&input) {
        Ok(entity) => registration::generate(&entity).into(),
        Err(err) => err.write_errors().into()
    }
}
