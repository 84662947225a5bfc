// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Ready-to-execute statements.
//!
//! # Statement Set
//!
//! | Method | Cached | Shape |
//! |--------|--------|-------|
//! | [`insert`](SqlStatements::insert) | yes | dialect specific |
//! | [`update_by_key`](SqlStatements::update_by_key) | yes | dialect specific |
//! | [`select_by_key`](SqlStatements::select_by_key) | yes | `SELECT .. WHERE keys` |
//! | [`select_all`](SqlStatements::select_all) | yes | `SELECT ..` |
//! | [`select`](SqlStatements::select) | no | `SELECT .. [WHERE] [ORDER BY] [paging]` |
//! | [`delete_by_key`](SqlStatements::delete_by_key) | yes | `DELETE .. WHERE keys` |
//! | [`delete_all`](SqlStatements::delete_all) / [`delete_where`](SqlStatements::delete_where) | base | `DELETE ..` |
//! | [`update_all`](SqlStatements::update_all) / [`update_where`](SqlStatements::update_where) | base | `UPDATE .. SET ..` |
//! | [`count`](SqlStatements::count) / [`count_where`](SqlStatements::count_where) | base | `SELECT COUNT(*) ..` |

use std::{fmt, sync::Arc};

use crate::{
    error::{Result, StatementKind},
    query::SelectQuery,
    registration::EntityRegistration,
    sql::SqlBuilder
};

/// SQL text plus the property names it binds.
///
/// Parameters are listed once each, in the order they first appear in the
/// text. Conditions added with [`with_condition`](Self::with_condition) are
/// caller-owned and do not contribute parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    sql:        String,
    parameters: Vec<String>
}

impl Statement {
    /// Create a statement, dropping repeated parameter names.
    #[must_use]
    pub fn new(sql: String, parameters: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(parameters.len());
        for name in parameters {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Self {
            sql,
            parameters: unique
        }
    }

    /// SQL text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Property names bound by [`sql`](Self::sql).
    #[must_use]
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Copy with ` WHERE {condition}` appended.
    #[must_use]
    pub fn with_condition(&self, condition: &str) -> Self {
        Self {
            sql:        format!("{} WHERE {condition}", self.sql),
            parameters: self.parameters.clone()
        }
    }

    /// Consume into the SQL text.
    #[must_use]
    pub fn into_sql(self) -> String {
        self.sql
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// Statement set of one registration.
///
/// Thin facade over [`SqlBuilder`]; cached statements are borrowed, derived
/// ones are returned by value.
#[derive(Debug)]
pub struct SqlStatements {
    builder: SqlBuilder
}

impl SqlStatements {
    /// Statement set for `registration`.
    pub fn new(registration: Arc<EntityRegistration>) -> Self {
        Self::from_builder(SqlBuilder::new(registration))
    }

    /// Wrap an existing builder.
    #[must_use]
    pub fn from_builder(builder: SqlBuilder) -> Self {
        Self {
            builder
        }
    }

    /// Underlying builder.
    #[must_use]
    pub fn builder(&self) -> &SqlBuilder {
        &self.builder
    }

    /// Registration the statements were built for.
    #[must_use]
    pub fn registration(&self) -> &Arc<EntityRegistration> {
        self.builder.registration()
    }

    /// Single-row insert reading back every generated value.
    ///
    /// # Errors
    ///
    /// See [`SqlBuilder::statement`].
    pub fn insert(&self) -> Result<&Statement> {
        self.builder.statement(StatementKind::Insert)
    }

    /// Single-row update by key reading back every refreshed value.
    ///
    /// # Errors
    ///
    /// See [`SqlBuilder::statement`].
    pub fn update_by_key(&self) -> Result<&Statement> {
        self.builder.statement(StatementKind::SingleUpdate)
    }

    /// Single-row select by key.
    ///
    /// # Errors
    ///
    /// See [`SqlBuilder::statement`].
    pub fn select_by_key(&self) -> Result<&Statement> {
        self.builder.statement(StatementKind::SingleSelect)
    }

    /// Every row.
    ///
    /// # Errors
    ///
    /// See [`SqlBuilder::statement`].
    pub fn select_all(&self) -> Result<&Statement> {
        self.builder.statement(StatementKind::BatchSelect)
    }

    /// Filtered, ordered and paged select.
    ///
    /// # Errors
    ///
    /// See [`SqlBuilder::select`].
    pub fn select(&self, query: &SelectQuery) -> Result<Statement> {
        self.builder.select(query)
    }

    /// Single-row delete by key.
    ///
    /// # Errors
    ///
    /// See [`SqlBuilder::statement`].
    pub fn delete_by_key(&self) -> Result<&Statement> {
        self.builder.statement(StatementKind::SingleDelete)
    }

    /// Delete every row.
    ///
    /// # Errors
    ///
    /// See [`SqlBuilder::statement`].
    pub fn delete_all(&self) -> Result<&Statement> {
        self.builder.statement(StatementKind::BatchDelete)
    }

    /// Delete the rows matching a raw condition.
    ///
    /// # Errors
    ///
    /// See [`SqlBuilder::statement`].
    pub fn delete_where(&self, condition: &str) -> Result<Statement> {
        Ok(self.delete_all()?.with_condition(condition))
    }

    /// Assign every updatable column on every row.
    ///
    /// # Errors
    ///
    /// See [`SqlBuilder::statement`].
    pub fn update_all(&self) -> Result<&Statement> {
        self.builder.statement(StatementKind::BatchUpdate)
    }

    /// Assign every updatable column on the rows matching a raw condition.
    ///
    /// # Errors
    ///
    /// See [`SqlBuilder::statement`].
    pub fn update_where(&self, condition: &str) -> Result<Statement> {
        Ok(self.update_all()?.with_condition(condition))
    }

    /// Count every row.
    ///
    /// # Errors
    ///
    /// See [`SqlBuilder::statement`].
    pub fn count(&self) -> Result<&Statement> {
        self.builder.statement(StatementKind::Count)
    }

    /// Count the rows matching a raw condition.
    ///
    /// # Errors
    ///
    /// See [`SqlBuilder::statement`].
    pub fn count_where(&self, condition: &str) -> Result<Statement> {
        Ok(self.count()?.with_condition(condition))
    }
}
