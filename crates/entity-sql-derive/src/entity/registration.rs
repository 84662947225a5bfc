// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `impl ::entity_sql::Entity` generation.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl ::entity_sql::Entity for User {
//!     fn registration() -> ::entity_sql::EntityRegistration {
//!         ::entity_sql::EntityRegistration::builder("User")
//!             .table("users")
//!             .dialect(::entity_sql::Dialect::MsSql)
//!             .property(
//!                 ::entity_sql::PropertyMapping::new("id")
//!                     .of_type(::entity_sql::PropertyType::Int32)
//!                     .key()
//!                     .generated_on_insert()
//!             )
//!             // ...
//!             .build()
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::{EntityDef, FieldDef};

/// Generate the `Entity` implementation.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let ident = &entity.ident;
    let (impl_generics, ty_generics, where_clause) = entity.generics.split_for_impl();
    let name = entity.name_str();
    let table = &entity.table;
    let dialect = entity.dialect.to_path();
    let schema = entity
        .schema
        .as_ref()
        .map(|schema| quote!(.schema(#schema)));
    let properties = entity.fields.iter().map(property);

    quote! {
        impl #impl_generics ::entity_sql::Entity for #ident #ty_generics #where_clause {
            fn registration() -> ::entity_sql::EntityRegistration {
                ::entity_sql::EntityRegistration::builder(#name)
                    .table(#table)
                    #schema
                    .dialect(#dialect)
                    #(.property(#properties))*
                    .build()
            }
        }
    }
}

fn property(field: &FieldDef) -> TokenStream {
    let name = field.property();
    let ty = field.kind.to_tokens();
    let column = field.column().map(|column| quote!(.column(#column)));
    let key = field.key.then(|| quote!(.key()));
    let on_insert = field.generated.insert.then(|| quote!(.generated_on_insert()));
    let on_update = field.generated.update.then(|| quote!(.generated_on_update()));
    let no_insert = field.column.no_insert.then(|| quote!(.exclude_from_insert()));
    let no_update = field.column.no_update.then(|| quote!(.exclude_from_update()));

    quote! {
        ::entity_sql::PropertyMapping::new(#name)
            #column
            .of_type(#ty)
            #key
            #on_insert
            #on_update
            #no_insert
            #no_update
    }
}

#[cfg(test)]
mod tests {
    use syn::{DeriveInput, parse_quote};

    use super::*;

    fn expand(input: DeriveInput) -> String {
        generate(&EntityDef::from_derive_input(&input).unwrap()).to_string()
    }

    #[test]
    fn registration_builder_chain() {
        let code = expand(parse_quote! {
            #[entity(table = "users", schema = "dbo")]
            pub struct User {
                #[key]
                #[generated]
                pub id: i32,
                #[column(name = "full_name")]
                pub name: String,
            }
        });
        assert!(code.contains("impl :: entity_sql :: Entity for User"));
        assert!(code.contains("builder (\"User\")"));
        assert!(code.contains(". table (\"users\")"));
        assert!(code.contains(". schema (\"dbo\")"));
        assert!(code.contains(":: entity_sql :: Dialect :: MsSql"));
        assert!(code.contains("PropertyMapping :: new (\"id\")"));
        assert!(code.contains(". key () . generated_on_insert ()"));
        assert!(code.contains(". column (\"full_name\")"));
    }

    #[test]
    fn no_schema_call_without_schema() {
        let code = expand(parse_quote! {
            pub struct Tag {
                #[key]
                pub id: i64,
            }
        });
        assert!(!code.contains("schema"));
    }

    #[test]
    fn exclusions_and_update_generation() {
        let code = expand(parse_quote! {
            pub struct Doc {
                #[key]
                pub id: i64,
                #[column(no_update)]
                pub author: String,
                #[generated(update)]
                pub revision: i32,
            }
        });
        assert!(code.contains(". exclude_from_update ()"));
        assert!(code.contains(". generated_on_update ()"));
        assert!(!code.contains("exclude_from_insert"));
    }

    #[test]
    fn generics_are_forwarded() {
        let code = expand(parse_quote! {
            pub struct Wrapper<T: 'static> {
                #[key]
                pub id: i32,
                #[column(skip)]
                pub marker: std::marker::PhantomData<T>,
            }
        });
        assert!(code.contains("impl < T : 'static > :: entity_sql :: Entity for Wrapper < T >"));
    }
}
