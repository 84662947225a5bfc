// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dialect names accepted by `#[entity(dialect = "...")]`.
//!
//! Mirrors `entity_sql::Dialect`; the macro cannot depend on the runtime
//! crate, so the names are checked here at compile time and emitted as a
//! path to the runtime variant.

use darling::FromMeta;
use proc_macro2::TokenStream;
use quote::quote;

/// Target dialect of the generated registration.
///
/// # Accepted Names
///
/// | Dialect | Names |
/// |---------|-------|
/// | MsSql | `mssql`, `sqlserver`, `tsql` |
/// | MySql | `mysql`, `mariadb` |
/// | PostgreSql | `postgresql`, `postgres`, `pg` |
/// | SqLite | `sqlite` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SqlDialect {
    /// Microsoft SQL Server.
    #[default]
    MsSql,

    /// MySQL and MariaDB.
    MySql,

    /// PostgreSQL.
    PostgreSql,

    /// SQLite.
    SqLite
}

impl SqlDialect {
    /// Path to the matching `entity_sql::Dialect` variant.
    pub fn to_path(self) -> TokenStream {
        match self {
            Self::MsSql => quote!(::entity_sql::Dialect::MsSql),
            Self::MySql => quote!(::entity_sql::Dialect::MySql),
            Self::PostgreSql => quote!(::entity_sql::Dialect::PostgreSql),
            Self::SqLite => quote!(::entity_sql::Dialect::SqLite)
        }
    }
}

impl FromMeta for SqlDialect {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.to_lowercase().as_str() {
            "mssql" | "sqlserver" | "tsql" => Ok(Self::MsSql),
            "mysql" | "mariadb" => Ok(Self::MySql),
            "postgresql" | "postgres" | "pg" => Ok(Self::PostgreSql),
            "sqlite" => Ok(Self::SqLite),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases() {
        assert_eq!(SqlDialect::from_string("MSSQL").unwrap(), SqlDialect::MsSql);
        assert_eq!(SqlDialect::from_string("tsql").unwrap(), SqlDialect::MsSql);
        assert_eq!(SqlDialect::from_string("mariadb").unwrap(), SqlDialect::MySql);
        assert_eq!(SqlDialect::from_string("pg").unwrap(), SqlDialect::PostgreSql);
        assert_eq!(SqlDialect::from_string("SQLite").unwrap(), SqlDialect::SqLite);
    }

    #[test]
    fn unknown_dialect() {
        assert!(SqlDialect::from_string("oracle").is_err());
        assert!(SqlDialect::from_string("clickhouse").is_err());
    }

    #[test]
    fn default_is_mssql() {
        assert_eq!(SqlDialect::default(), SqlDialect::MsSql);
    }

    #[test]
    fn path() {
        assert_eq!(
            SqlDialect::SqLite.to_path().to_string(),
            quote!(::entity_sql::Dialect::SqLite).to_string()
        );
    }
}
