// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement builders.
//!
//! # Architecture
//!
//! ```text
//! EntityRegistration
//!        │
//!        ▼
//! GenericStatementBuilder ── shared fragments (table, lists, key predicate)
//!        │
//!        ▼
//!   DialectBuilder ──┬── MsSqlBuilder       OFFSET/FETCH, SCOPE_IDENTITY, #temp
//!                    ├── MySqlBuilder       LIMIT/OFFSET, LAST_INSERT_ID
//!                    ├── PostgreSqlBuilder  LIMIT/OFFSET, RETURNING
//!                    └── SqLiteBuilder      LIMIT/OFFSET, last_insert_rowid
//!        │
//!        ▼
//!   SqlBuilder ── one publish-once cell per StatementKind
//! ```
//!
//! Each dialect only owns the insert, the single-row update and paging. The
//! remaining kinds are identical across dialects and assembled here.

mod generic;
mod mssql;
mod mysql;
mod postgres;
mod sqlite;

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering}
};

use once_cell::race::OnceBox;
use tracing::{debug, trace};

pub use self::{
    generic::{GenericStatementBuilder, InsertReadBack, SelectParts},
    mssql::MsSqlBuilder,
    mysql::MySqlBuilder,
    postgres::PostgreSqlBuilder,
    sqlite::SqLiteBuilder
};
use crate::{
    dialect::Dialect,
    error::{Result, StatementKind},
    query::SelectQuery,
    registration::EntityRegistration,
    statements::Statement
};

/// Dialect-specific statement assembly.
///
/// Implementations never validate: [`SqlBuilder`] checks the registration
/// before delegating.
pub(crate) trait DialectStatements {
    /// Single-row insert, reading back generated values.
    fn insert(&self, generic: &GenericStatementBuilder) -> Result<Statement>;

    /// Single-row update by key, reading back refreshed values.
    fn single_update(&self, generic: &GenericStatementBuilder) -> Result<Statement> {
        let parameters = [generic.update_parameters(), generic.key_parameters()].concat();
        Ok(Statement::new(generic.single_update(), parameters))
    }

    /// `SELECT` with this dialect's paging syntax.
    fn select(&self, generic: &GenericStatementBuilder, parts: &SelectParts<'_>) -> String;
}

/// One builder per dialect, selected by an exhaustive match.
#[derive(Debug, Clone, Copy)]
enum DialectBuilder {
    MsSql(MsSqlBuilder),
    MySql(MySqlBuilder),
    PostgreSql(PostgreSqlBuilder),
    SqLite(SqLiteBuilder)
}

impl DialectBuilder {
    const fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::MsSql => Self::MsSql(MsSqlBuilder),
            Dialect::MySql => Self::MySql(MySqlBuilder),
            Dialect::PostgreSql => Self::PostgreSql(PostgreSqlBuilder),
            Dialect::SqLite => Self::SqLite(SqLiteBuilder)
        }
    }

    fn as_statements(&self) -> &dyn DialectStatements {
        match self {
            Self::MsSql(builder) => builder,
            Self::MySql(builder) => builder,
            Self::PostgreSql(builder) => builder,
            Self::SqLite(builder) => builder
        }
    }
}

/// Statement builder bound to one registration.
///
/// Every [`StatementKind`] is assembled at most once per published cell and
/// the outcome, success or error, is kept for the lifetime of the builder.
/// Concurrent first requests may both assemble; only one result is ever
/// observed.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use entity_sql::{
///     Dialect, EntityRegistration, PropertyMapping, PropertyType, SqlBuilder, StatementKind
/// };
///
/// let registration = EntityRegistration::builder("User")
///     .table("Users")
///     .dialect(Dialect::MsSql)
///     .property(
///         PropertyMapping::new("Id")
///             .of_type(PropertyType::Int32)
///             .key()
///             .generated_on_insert()
///     )
///     .property(PropertyMapping::new("Name"))
///     .build();
///
/// let builder = SqlBuilder::new(Arc::new(registration));
/// let insert = builder.statement(StatementKind::Insert).unwrap();
/// assert_eq!(
///     insert.sql(),
///     "INSERT INTO [Users] ([Name]) VALUES (@Name); SELECT SCOPE_IDENTITY() AS [Id]"
/// );
/// ```
pub struct SqlBuilder {
    generic: GenericStatementBuilder,
    dialect: DialectBuilder,
    cache:   [OnceBox<Result<Statement>>; StatementKind::COUNT],
    built:   AtomicUsize
}

impl SqlBuilder {
    /// Create the builder matching the registration's dialect.
    pub fn new(registration: Arc<EntityRegistration>) -> Self {
        let dialect = DialectBuilder::for_dialect(registration.dialect());
        debug!(
            entity = registration.entity(),
            dialect = %registration.dialect(),
            registration = registration.id().get(),
            "sql builder constructed"
        );
        Self {
            generic: GenericStatementBuilder::new(registration),
            dialect,
            cache: std::array::from_fn(|_| OnceBox::new()),
            built: AtomicUsize::new(0)
        }
    }

    /// Shared fragment builder.
    #[must_use]
    pub fn generic(&self) -> &GenericStatementBuilder {
        &self.generic
    }

    /// Registration this builder was made for.
    #[must_use]
    pub fn registration(&self) -> &Arc<EntityRegistration> {
        self.generic.registration()
    }

    /// Target dialect.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.generic.dialect()
    }

    /// Cached statement of the given kind.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedRegistration`](crate::Error::MalformedRegistration)
    ///   when the registration fails validation, or an update has nothing to
    ///   assign
    /// - [`Error::MissingKey`](crate::Error::MissingKey) for by-key kinds of a
    ///   keyless entity
    /// - [`Error::Unsupported`](crate::Error::Unsupported) when the dialect
    ///   cannot read generated values back
    pub fn statement(&self, kind: StatementKind) -> Result<&Statement> {
        self.cache[kind.slot()]
            .get_or_init(|| {
                self.built.fetch_add(1, Ordering::Relaxed);
                Box::new(self.assemble(kind))
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Uncached `SELECT` over every column with caller-supplied filter,
    /// ordering and paging.
    ///
    /// # Errors
    ///
    /// Same as the [`StatementKind::BatchSelect`] statement.
    pub fn select(&self, query: &SelectQuery) -> Result<Statement> {
        self.statement(StatementKind::BatchSelect)?;
        let columns = self.generic.column_enumeration_for_select();
        let parts = SelectParts {
            select: &columns,
            from:   self.generic.table_name(),
            filter: query.filter_clause(),
            order:  query.order_clause(),
            skip:   query.skip_rows(),
            limit:  query.limit_rows()
        };
        let sql = self.dialect.as_statements().select(&self.generic, &parts);
        Ok(Statement::new(sql, Vec::new()))
    }

    /// Number of times a cached kind was assembled.
    ///
    /// Stays at one per kind no matter how often it is requested.
    #[must_use]
    pub fn statements_built(&self) -> usize {
        self.built.load(Ordering::Relaxed)
    }

    fn assemble(&self, kind: StatementKind) -> Result<Statement> {
        let g = &self.generic;
        let dialect = self.dialect.as_statements();
        g.require_valid()?;

        let statement = match kind {
            StatementKind::Insert => dialect.insert(g)?,
            StatementKind::SingleUpdate => {
                g.require_keys(kind)?;
                g.require_update_assignments()?;
                dialect.single_update(g)?
            }
            StatementKind::SingleSelect => {
                g.require_keys(kind)?;
                let columns = g.column_enumeration_for_select();
                let keys = g.keys_where_clause();
                let parts = SelectParts {
                    select: &columns,
                    from: g.table_name(),
                    filter: Some(keys.as_str()),
                    ..SelectParts::default()
                };
                Statement::new(dialect.select(g, &parts), g.key_parameters())
            }
            StatementKind::BatchSelect => {
                let columns = g.column_enumeration_for_select();
                let parts = SelectParts {
                    select: &columns,
                    from: g.table_name(),
                    ..SelectParts::default()
                };
                Statement::new(dialect.select(g, &parts), Vec::new())
            }
            StatementKind::SingleDelete => {
                g.require_keys(kind)?;
                Statement::new(
                    format!("DELETE FROM {} WHERE {}", g.table_name(), g.keys_where_clause()),
                    g.key_parameters()
                )
            }
            StatementKind::BatchDelete => {
                Statement::new(format!("DELETE FROM {}", g.table_name()), Vec::new())
            }
            StatementKind::BatchUpdate => {
                g.require_update_assignments()?;
                Statement::new(
                    format!("UPDATE {} SET {}", g.table_name(), g.update_clause()),
                    g.update_parameters()
                )
            }
            StatementKind::Count => {
                Statement::new(format!("SELECT COUNT(*) FROM {}", g.table_name()), Vec::new())
            }
        };

        trace!(
            entity = g.registration().entity(),
            dialect = %g.dialect(),
            kind = %kind,
            sql = statement.sql(),
            "statement assembled"
        );
        Ok(statement)
    }
}

impl std::fmt::Debug for SqlBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlBuilder")
            .field("entity", &self.registration().entity())
            .field("dialect", &self.dialect())
            .field("statements_built", &self.statements_built())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Error,
        registration::{PropertyMapping, PropertyType}
    };

    fn users(dialect: Dialect) -> SqlBuilder {
        let reg = EntityRegistration::builder("User")
            .table("Users")
            .dialect(dialect)
            .property(
                PropertyMapping::new("Id")
                    .of_type(PropertyType::Int32)
                    .key()
                    .generated_on_insert()
            )
            .property(PropertyMapping::new("Name"))
            .property(PropertyMapping::new("Email").column("email_address"))
            .build();
        SqlBuilder::new(Arc::new(reg))
    }

    #[test]
    fn dispatch_is_exhaustive() {
        for dialect in Dialect::ALL {
            assert_eq!(users(dialect).dialect(), dialect);
        }
        assert!(matches!(
            DialectBuilder::for_dialect(Dialect::SqLite),
            DialectBuilder::SqLite(_)
        ));
    }

    #[test]
    fn shared_kinds() {
        let b = users(Dialect::MsSql);
        assert_eq!(
            b.statement(StatementKind::SingleSelect).unwrap().sql(),
            "SELECT [Id], [Name], [email_address] AS [Email] FROM [Users] WHERE [Id] = @Id"
        );
        assert_eq!(
            b.statement(StatementKind::BatchSelect).unwrap().sql(),
            "SELECT [Id], [Name], [email_address] AS [Email] FROM [Users]"
        );
        assert_eq!(
            b.statement(StatementKind::SingleDelete).unwrap().sql(),
            "DELETE FROM [Users] WHERE [Id] = @Id"
        );
        assert_eq!(b.statement(StatementKind::BatchDelete).unwrap().sql(), "DELETE FROM [Users]");
        assert_eq!(
            b.statement(StatementKind::BatchUpdate).unwrap().sql(),
            "UPDATE [Users] SET [Name] = @Name, [email_address] = @Email"
        );
        assert_eq!(
            b.statement(StatementKind::Count).unwrap().sql(),
            "SELECT COUNT(*) FROM [Users]"
        );
    }

    #[test]
    fn caching_is_idempotent() {
        let b = users(Dialect::PostgreSql);
        let first = b.statement(StatementKind::Insert).unwrap();
        let second = b.statement(StatementKind::Insert).unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(b.statements_built(), 1);

        b.statement(StatementKind::Count).unwrap();
        b.statement(StatementKind::Count).unwrap();
        assert_eq!(b.statements_built(), 2);
    }

    #[test]
    fn errors_are_cached() {
        let reg = EntityRegistration::builder("Log")
            .property(PropertyMapping::new("Message"))
            .build();
        let b = SqlBuilder::new(Arc::new(reg));
        let first = b.statement(StatementKind::SingleDelete).unwrap_err();
        let second = b.statement(StatementKind::SingleDelete).unwrap_err();
        assert_eq!(first, second);
        assert!(matches!(first, Error::MissingKey { .. }));
        assert_eq!(b.statements_built(), 1);
        assert!(b.statement(StatementKind::Count).is_ok());
    }

    #[test]
    fn malformed_registration_fails_every_kind() {
        let reg = EntityRegistration::builder("Empty").build();
        let b = SqlBuilder::new(Arc::new(reg));
        assert!(matches!(
            b.statement(StatementKind::Count),
            Err(Error::MalformedRegistration { .. })
        ));
        assert!(b.select(&SelectQuery::new()).is_err());
    }

    #[test]
    fn select_with_query() {
        let b = users(Dialect::MsSql);
        let query = SelectQuery::new()
            .filter("[Name] LIKE @Pattern")
            .order_by("[Name]")
            .skip(10)
            .limit(5);
        let stmt = b.select(&query).unwrap();
        assert_eq!(
            stmt.sql(),
            "SELECT [Id], [Name], [email_address] AS [Email] FROM [Users] \
             WHERE [Name] LIKE @Pattern ORDER BY [Name] OFFSET 10 ROWS FETCH NEXT 5 ROWS ONLY"
        );
        assert!(stmt.parameters().is_empty());
    }
}
