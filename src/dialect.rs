// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL dialect profiles.
//!
//! This module defines [`Dialect`], the closed set of SQL vendors a statement
//! builder can target, together with the identifier and parameter syntax each
//! one uses.

use std::{fmt, str::FromStr};

use crate::error::Error;

/// SQL dialect a registration targets.
///
/// The set is closed: adding a dialect is a breaking change, and every
/// `match` over it in this crate is exhaustive.
///
/// # Syntax Profiles
///
/// | Dialect | Identifiers | Parameters | Schemas | Paging |
/// |---------|-------------|------------|---------|--------|
/// | MsSql | `[name]` | `@Name` | yes | `OFFSET n ROWS FETCH NEXT m ROWS ONLY` |
/// | MySql | `` `name` `` | `@Name` | yes | `LIMIT m OFFSET n` |
/// | PostgreSql | `"name"` | `@Name` | yes | `LIMIT m OFFSET n` |
/// | SqLite | `"name"` | `@Name` | no | `LIMIT m OFFSET n` |
///
/// # Examples
///
/// ```rust
/// use entity_sql::Dialect;
///
/// let dialect: Dialect = "postgres".parse().unwrap();
/// assert_eq!(dialect, Dialect::PostgreSql);
/// assert_eq!(dialect.delimit("user"), "\"user\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum Dialect {
    /// Microsoft SQL Server.
    ///
    /// - Identity retrieval: `SCOPE_IDENTITY()`
    /// - Row output: `OUTPUT inserted.*` captured into a `#temp` table
    #[default]
    MsSql,

    /// MySQL and MariaDB.
    ///
    /// - Identity retrieval: `LAST_INSERT_ID()`
    /// - Row output: none, generated values are re-read by key
    MySql,

    /// PostgreSQL.
    ///
    /// - Identity retrieval and row output: `RETURNING`
    PostgreSql,

    /// SQLite (3.35 or newer for `RETURNING`).
    ///
    /// - Identity retrieval: `last_insert_rowid()`
    /// - Row output: `RETURNING`
    SqLite
}

impl Dialect {
    /// Every supported dialect, in declaration order.
    pub const ALL: [Self; 4] = [Self::MsSql, Self::MySql, Self::PostgreSql, Self::SqLite];

    /// Canonical lowercase name, accepted back by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MsSql => "mssql",
            Self::MySql => "mysql",
            Self::PostgreSql => "postgresql",
            Self::SqLite => "sqlite"
        }
    }

    /// Opening identifier delimiter.
    #[must_use]
    pub const fn start_delimiter(&self) -> char {
        match self {
            Self::MsSql => '[',
            Self::MySql => '`',
            Self::PostgreSql | Self::SqLite => '"'
        }
    }

    /// Closing identifier delimiter.
    #[must_use]
    pub const fn end_delimiter(&self) -> char {
        match self {
            Self::MsSql => ']',
            Self::MySql => '`',
            Self::PostgreSql | Self::SqLite => '"'
        }
    }

    /// Prefix of named parameters.
    #[must_use]
    pub const fn parameter_prefix(&self) -> &'static str {
        match self {
            Self::MsSql | Self::MySql | Self::PostgreSql | Self::SqLite => "@"
        }
    }

    /// Whether table references may be schema-qualified.
    #[must_use]
    pub const fn uses_schemas(&self) -> bool {
        !matches!(self, Self::SqLite)
    }

    /// Quote an identifier.
    ///
    /// Occurrences of the closing delimiter inside the name are doubled, which
    /// is how every supported dialect escapes it.
    #[must_use]
    pub fn delimit(&self, identifier: &str) -> String {
        let end = self.end_delimiter();
        let mut quoted = String::with_capacity(identifier.len() + 2);
        quoted.push(self.start_delimiter());
        for ch in identifier.chars() {
            if ch == end {
                quoted.push(end);
            }
            quoted.push(ch);
        }
        quoted.push(end);
        quoted
    }

    /// Named parameter placeholder for a property.
    #[must_use]
    pub fn parameter(&self, property: &str) -> String {
        format!("{}{property}", self.parameter_prefix())
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MsSql => "MsSql",
            Self::MySql => "MySql",
            Self::PostgreSql => "PostgreSql",
            Self::SqLite => "SqLite"
        };
        f.write_str(name)
    }
}

impl FromStr for Dialect {
    type Err = Error;

    /// Parse a dialect name.
    ///
    /// # Accepted Values
    ///
    /// - `mssql`, `sqlserver`, `tsql` → [`Dialect::MsSql`]
    /// - `mysql`, `mariadb` → [`Dialect::MySql`]
    /// - `postgresql`, `postgres`, `pg` → [`Dialect::PostgreSql`]
    /// - `sqlite` → [`Dialect::SqLite`]
    ///
    /// Matching is case-insensitive.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedDialect`] for anything else.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "mssql" | "sqlserver" | "tsql" => Ok(Self::MsSql),
            "mysql" | "mariadb" => Ok(Self::MySql),
            "postgresql" | "postgres" | "pg" => Ok(Self::PostgreSql),
            "sqlite" => Ok(Self::SqLite),
            _ => Err(Error::UnsupportedDialect(value.to_owned()))
        }
    }
}

impl TryFrom<String> for Dialect {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Dialect> for &'static str {
    fn from(dialect: Dialect) -> Self {
        dialect.as_str()
    }
}
