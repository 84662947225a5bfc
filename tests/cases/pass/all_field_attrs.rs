// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(non_snake_case)]

use chrono::{DateTime, Utc};
use entity_sql::{Entity, PropertyType};

#[derive(Entity)]
#[entity(table = "documents", schema = "archive", dialect = "postgres", rename_all = "snake_case")]
pub struct Document {
    #[key]
    #[generated]
    pub documentId: i64,

    #[column(name = "title_text")]
    pub title: String,

    #[column(no_update)]
    pub authorId: Option<i32>,

    #[column(no_insert)]
    pub reviewedAt: Option<DateTime<Utc>>,

    #[generated(insert, update)]
    pub modifiedAt: DateTime<Utc>,

    #[column(skip)]
    pub cached_html: Vec<String>,
}

fn main() {
    let registration = Document::registration();
    assert_eq!(registration.properties().len(), 5);
    assert_eq!(
        registration.property("documentId").unwrap().property_type(),
        &PropertyType::Int64
    );
    assert_eq!(registration.property("authorId").unwrap().column_name(), "author_id");

    let statements = Document::sql_statements();
    assert_eq!(
        statements.insert().unwrap().sql(),
        "INSERT INTO \"archive\".\"documents\" (\"title_text\", \"author_id\") \
         VALUES (@title, @authorId) \
         RETURNING \"document_id\" AS \"documentId\", \"modified_at\" AS \"modifiedAt\""
    );
    assert_eq!(
        statements.update_by_key().unwrap().sql(),
        "UPDATE \"archive\".\"documents\" SET \"title_text\" = @title, \"reviewed_at\" = @reviewedAt \
         WHERE \"document_id\" = @documentId RETURNING \"modified_at\" AS \"modifiedAt\""
    );
}
