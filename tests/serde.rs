// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Registrations loaded from configuration.
//!
//! Run with: `cargo test --features serde --test serde`

#![cfg(feature = "serde")]

use std::sync::Arc;

use entity_sql::{Dialect, EntityRegistration, Error, PropertyType, SqlStatements};

const PRODUCTS: &str = r#"{
    "entity": "Product",
    "table": "products",
    "schema": "catalog",
    "dialect": "postgres",
    "properties": [
        {
            "name": "Id",
            "column": "id",
            "type": "int64",
            "key": true,
            "generated_on_insert": true
        },
        { "name": "Title", "column": "title" },
        { "name": "Price", "type": "decimal" }
    ]
}"#;

#[test]
fn registration_from_json() {
    let registration: EntityRegistration = serde_json::from_str(PRODUCTS).unwrap();
    assert_eq!(registration.dialect(), Dialect::PostgreSql);
    assert_eq!(registration.schema(), Some("catalog"));
    assert_eq!(
        registration.property("Id").unwrap().property_type(),
        &PropertyType::Int64
    );

    let statements = SqlStatements::new(Arc::new(registration));
    assert_eq!(
        statements.insert().unwrap().sql(),
        "INSERT INTO \"catalog\".\"products\" (\"title\", \"Price\") VALUES (@Title, @Price) \
         RETURNING \"id\" AS \"Id\""
    );
}

#[test]
fn deserialized_registrations_get_fresh_identities() {
    let a: EntityRegistration = serde_json::from_str(PRODUCTS).unwrap();
    let b: EntityRegistration = serde_json::from_str(PRODUCTS).unwrap();
    assert_ne!(a.id(), b.id());
}

#[test]
fn unknown_dialect_is_rejected() {
    let json = PRODUCTS.replace("\"postgres\"", "\"oracle\"");
    let err = serde_json::from_str::<EntityRegistration>(&json).unwrap_err();
    assert!(
        err.to_string()
            .contains(&Error::UnsupportedDialect("oracle".into()).to_string())
    );
}

#[test]
fn dialect_round_trip_uses_canonical_names() {
    for dialect in Dialect::ALL {
        let json = serde_json::to_string(&dialect).unwrap();
        assert_eq!(json, format!("\"{}\"", dialect.as_str()));
        assert_eq!(serde_json::from_str::<Dialect>(&json).unwrap(), dialect);
    }
}

#[test]
fn missing_dialect_defaults_to_mssql() {
    let json = PRODUCTS.replace("\"dialect\": \"postgres\",", "");
    let registration: EntityRegistration = serde_json::from_str(&json).unwrap();
    assert_eq!(registration.dialect(), Dialect::MsSql);
}
