// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement builder for [`Dialect::SqLite`](crate::Dialect::SqLite).
//!
//! Integer identity keys alias the rowid and come back through
//! `last_insert_rowid()`. Any other generated column is read with
//! `RETURNING`, available since SQLite 3.35.

use super::{
    DialectStatements,
    generic::{GenericStatementBuilder, InsertReadBack, SelectParts}
};
use crate::{error::Result, statements::Statement};

/// SQLite statement builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqLiteBuilder;

impl DialectStatements for SqLiteBuilder {
    fn insert(&self, generic: &GenericStatementBuilder) -> Result<Statement> {
        let sql = match generic.insert_read_back() {
            InsertReadBack::Nothing => generic.plain_insert(),
            InsertReadBack::Identity(key) => format!(
                "{}; SELECT last_insert_rowid() AS {}",
                generic.plain_insert(),
                generic.delimited(key.name())
            ),
            InsertReadBack::Columns(columns) => format!(
                "{} RETURNING {}",
                generic.plain_insert(),
                generic.selection(columns)
            )
        };
        Ok(Statement::new(sql, generic.insert_parameters()))
    }

    fn single_update(&self, generic: &GenericStatementBuilder) -> Result<Statement> {
        let parameters = [generic.update_parameters(), generic.key_parameters()].concat();
        let mut sql = generic.single_update();
        if !generic.refresh_on_update_properties().is_empty() {
            sql.push_str(" RETURNING ");
            sql.push_str(&generic.refresh_on_update_column_selection());
        }
        Ok(Statement::new(sql, parameters))
    }

    fn select(&self, generic: &GenericStatementBuilder, parts: &SelectParts<'_>) -> String {
        let mut sql = generic.select_without_paging(parts);
        // OFFSET is only legal after LIMIT; -1 means no limit.
        if parts.is_paged() {
            let limit = parts.limit.map_or_else(|| "-1".to_owned(), |l| l.to_string());
            sql.push_str(&format!(" LIMIT {limit} OFFSET {}", parts.skip.unwrap_or(0)));
        }
        sql
    }
}
