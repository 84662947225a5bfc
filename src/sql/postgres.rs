// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement builder for [`Dialect::PostgreSql`](crate::Dialect::PostgreSql).
//!
//! `RETURNING` targets the caller's result set directly and works alongside
//! triggers, so both the identity tier and the column tier use it and no
//! scratch table is needed. Keeping each statement single also keeps it
//! usable as a prepared statement.

use super::{
    DialectStatements,
    generic::{GenericStatementBuilder, InsertReadBack, SelectParts}
};
use crate::{error::Result, statements::Statement};

/// PostgreSQL statement builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgreSqlBuilder;

impl DialectStatements for PostgreSqlBuilder {
    fn insert(&self, generic: &GenericStatementBuilder) -> Result<Statement> {
        let sql = match generic.insert_read_back() {
            InsertReadBack::Nothing => generic.plain_insert(),
            InsertReadBack::Identity(key) => format!(
                "{} RETURNING {}",
                generic.plain_insert(),
                generic.column_selection(key)
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
        if let Some(limit) = parts.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        if parts.is_paged() {
            sql.push_str(&format!(" OFFSET {}", parts.skip.unwrap_or(0)));
        }
        sql
    }
}
