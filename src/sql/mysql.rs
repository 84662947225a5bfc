// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement builder for [`Dialect::MySql`](crate::Dialect::MySql).
//!
//! MySQL has no row-output clause. A single integer identity comes back
//! through `LAST_INSERT_ID()`; every other generated column is re-read with
//! a second `SELECT` that locates the row by key.

use super::{
    DialectStatements,
    generic::{GenericStatementBuilder, InsertReadBack, SelectParts}
};
use crate::{error::Result, registration::PropertyMapping, statements::Statement};

/// Largest row count MySQL accepts, used when only an offset is requested.
const UNBOUNDED_LIMIT: u64 = u64::MAX;

/// MySQL statement builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlBuilder;

impl DialectStatements for MySqlBuilder {
    fn insert(&self, generic: &GenericStatementBuilder) -> Result<Statement> {
        let insert = plain_insert(generic);
        let mut parameters = generic.insert_parameters();

        let sql = match generic.insert_read_back() {
            InsertReadBack::Nothing => insert,
            InsertReadBack::Identity(key) => format!(
                "{insert}; SELECT LAST_INSERT_ID() AS {}",
                generic.delimited(key.name())
            ),
            InsertReadBack::Columns(columns) => {
                let locator = inserted_row_locator(generic)?;
                parameters.extend(
                    generic
                        .key_properties()
                        .iter()
                        .filter(|p| !p.is_generated_on_insert())
                        .map(|p| p.name().to_owned())
                );
                format!(
                    "{insert}; SELECT {} FROM {} WHERE {locator}",
                    generic.selection(columns),
                    generic.table_name()
                )
            }
        };
        Ok(Statement::new(sql, parameters))
    }

    fn single_update(&self, generic: &GenericStatementBuilder) -> Result<Statement> {
        let parameters = [generic.update_parameters(), generic.key_parameters()].concat();
        let mut sql = generic.single_update();
        if !generic.refresh_on_update_properties().is_empty() {
            sql.push_str(&format!(
                "; SELECT {} FROM {} WHERE {}",
                generic.refresh_on_update_column_selection(),
                generic.table_name(),
                generic.keys_where_clause()
            ));
        }
        Ok(Statement::new(sql, parameters))
    }

    fn select(&self, generic: &GenericStatementBuilder, parts: &SelectParts<'_>) -> String {
        let mut sql = generic.select_without_paging(parts);
        // OFFSET is only legal after LIMIT.
        if parts.is_paged() {
            sql.push_str(&format!(
                " LIMIT {} OFFSET {}",
                parts.limit.unwrap_or(UNBOUNDED_LIMIT),
                parts.skip.unwrap_or(0)
            ));
        }
        sql
    }
}

/// MySQL spells an empty insert `() VALUES ()`.
fn plain_insert(generic: &GenericStatementBuilder) -> String {
    if generic.insert_properties().is_empty() {
        format!("INSERT INTO {} () VALUES ()", generic.table_name())
    } else {
        generic.plain_insert()
    }
}

/// Key predicate locating the row just inserted.
///
/// Caller-supplied keys match their parameter; at most one generated integer
/// key matches `LAST_INSERT_ID()`.
fn inserted_row_locator(generic: &GenericStatementBuilder) -> Result<String> {
    let keys = generic.key_properties();
    if keys.is_empty() {
        return Err(generic.unsupported(
            "generated columns can only be read back through a key"
        ));
    }

    let generated = generic.insert_key_generated_properties();
    match generated {
        [] => {}
        [key] if key.property_type().is_identity_integer() => {}
        [_] => {
            return Err(generic.unsupported(
                "a generated key must be a 32 or 64-bit integer to be read back"
            ));
        }
        _ => {
            return Err(generic.unsupported(
                "only one key can be generated by the database"
            ));
        }
    }

    Ok(keys
        .iter()
        .map(|key| locate(generic, key))
        .collect::<Vec<_>>()
        .join(" AND "))
}

fn locate(generic: &GenericStatementBuilder, key: &PropertyMapping) -> String {
    if key.is_generated_on_insert() {
        format!("{} = LAST_INSERT_ID()", generic.column_name(key))
    } else {
        generic.equality(key)
    }
}
