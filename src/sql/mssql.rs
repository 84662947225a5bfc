// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement builder for [`Dialect::MsSql`](crate::Dialect::MsSql).
//!
//! Generated values come back either through `SCOPE_IDENTITY()` or through
//! an `OUTPUT` clause captured into a `#temp` scratch table. `OUTPUT`
//! without `INTO` is rejected by SQL Server on tables with enabled triggers,
//! so the capture always goes through the scratch table. The scratch table
//! is shaped by a `SELECT .. INTO` over a `UNION` of two empty selections,
//! which copies the column types without the identity property or any
//! constraint of the real table.

use super::{
    DialectStatements,
    generic::{GenericStatementBuilder, InsertReadBack, SelectParts}
};
use crate::{error::Result, registration::PropertyMapping, statements::Statement};

/// Scratch table receiving `OUTPUT` rows.
///
/// Temporary tables are session scoped, so the batch drops it once the rows
/// were selected.
const SCRATCH_TABLE: &str = "#temp";

/// SQL Server statement builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsSqlBuilder;

impl DialectStatements for MsSqlBuilder {
    fn insert(&self, generic: &GenericStatementBuilder) -> Result<Statement> {
        let sql = match generic.insert_read_back() {
            InsertReadBack::Nothing => generic.plain_insert(),
            InsertReadBack::Identity(key) => format!(
                "{}; SELECT SCOPE_IDENTITY() AS {}",
                generic.plain_insert(),
                generic.delimited(key.name())
            ),
            InsertReadBack::Columns(columns) => format!(
                "{}; INSERT INTO {}{} OUTPUT {} INTO {SCRATCH_TABLE} {}; {}",
                scratch_table(generic, columns),
                generic.table_name(),
                generic.insert_columns_clause(),
                output_columns(generic, columns),
                generic.insert_values_clause(),
                drain_scratch_table()
            )
        };
        Ok(Statement::new(sql, generic.insert_parameters()))
    }

    fn single_update(&self, generic: &GenericStatementBuilder) -> Result<Statement> {
        let parameters = [generic.update_parameters(), generic.key_parameters()].concat();
        let refresh = generic.refresh_on_update_properties();
        if refresh.is_empty() {
            return Ok(Statement::new(generic.single_update(), parameters));
        }

        let sql = format!(
            "{}; UPDATE {} SET {} OUTPUT {} INTO {SCRATCH_TABLE} WHERE {}; {}",
            scratch_table(generic, refresh),
            generic.table_name(),
            generic.update_clause(),
            output_columns(generic, refresh),
            generic.keys_where_clause(),
            drain_scratch_table()
        );
        Ok(Statement::new(sql, parameters))
    }

    fn select(&self, generic: &GenericStatementBuilder, parts: &SelectParts<'_>) -> String {
        let mut sql = generic.select_without_paging(parts);
        // FETCH NEXT is only legal after an explicit OFFSET.
        if parts.is_paged() {
            sql.push_str(&format!(" OFFSET {} ROWS", parts.skip.unwrap_or(0)));
        }
        if let Some(limit) = parts.limit {
            sql.push_str(&format!(" FETCH NEXT {limit} ROWS ONLY"));
        }
        sql
    }
}

/// `SELECT * INTO #temp FROM (.. UNION ..) AS u` shaped like `columns`.
fn scratch_table(generic: &GenericStatementBuilder, columns: &[PropertyMapping]) -> String {
    let selection = generic.selection(columns);
    let table = generic.table_name();
    format!(
        "SELECT * INTO {SCRATCH_TABLE} FROM (SELECT {selection} FROM {table} WHERE 1=0 UNION SELECT {selection} FROM {table} WHERE 1=0) AS u"
    )
}

/// `inserted.[col], ...` in the same order as the scratch table columns.
fn output_columns(generic: &GenericStatementBuilder, columns: &[PropertyMapping]) -> String {
    columns
        .iter()
        .map(|p| format!("inserted.{}", generic.column_name(p)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn drain_scratch_table() -> String {
    format!("SELECT * FROM {SCRATCH_TABLE}; DROP TABLE {SCRATCH_TABLE}")
}
