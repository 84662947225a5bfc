// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for statement construction.
//!
//! Construction is pure and deterministic, so every error here is permanent
//! for the registration that produced it. Cached statement kinds replay the
//! same error on every request, which is why [`Error`] is `Clone`.
//!
//! # Taxonomy
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`Error::UnsupportedDialect`] | A dialect name outside the closed set is parsed |
//! | [`Error::MalformedRegistration`] | The registration cannot describe any statement |
//! | [`Error::MissingKey`] | A by-key statement is requested for a keyless entity |
//! | [`Error::Unsupported`] | The dialect has no syntax for the requested read-back |

use std::fmt;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Statement kinds cached by a builder.
///
/// Used in error messages and log events to name the statement that failed
/// or was assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// Single-row `INSERT` with generated-value read-back.
    Insert,

    /// Single-row `UPDATE` filtered by key.
    SingleUpdate,

    /// Single-row `SELECT` filtered by key.
    SingleSelect,

    /// Unfiltered `SELECT` used as the base of paged queries.
    BatchSelect,

    /// Single-row `DELETE` filtered by key.
    SingleDelete,

    /// Unfiltered `DELETE` used as the base of conditional deletes.
    BatchDelete,

    /// Unfiltered `UPDATE` used as the base of conditional updates.
    BatchUpdate,

    /// `SELECT COUNT(*)` used as the base of conditional counts.
    Count
}

impl StatementKind {
    /// Number of cached statement kinds.
    pub const COUNT: usize = 8;

    /// Stable slot of this kind inside a statement cache.
    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::Insert => 0,
            Self::SingleUpdate => 1,
            Self::SingleSelect => 2,
            Self::BatchSelect => 3,
            Self::SingleDelete => 4,
            Self::BatchDelete => 5,
            Self::BatchUpdate => 6,
            Self::Count => 7
        }
    }

    /// Lowercase name used in messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::SingleUpdate => "single update",
            Self::SingleSelect => "single select",
            Self::BatchSelect => "batch select",
            Self::SingleDelete => "single delete",
            Self::BatchDelete => "batch delete",
            Self::BatchUpdate => "batch update",
            Self::Count => "count"
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statement construction error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Dialect name outside `{MsSql, MySql, PostgreSql, SqLite}`.
    #[error("dialect `{0}` is not supported")]
    UnsupportedDialect(String),

    /// Registration cannot produce the requested statement.
    #[error("entity `{entity}` has a malformed registration: {reason}")]
    MalformedRegistration {
        /// Entity name from the registration.
        entity: String,

        /// Human-readable description of the defect.
        reason: String
    },

    /// By-key statement requested for an entity without key properties.
    #[error("entity `{entity}` has no key properties, required by the {statement} statement")]
    MissingKey {
        /// Entity name from the registration.
        entity: String,

        /// Statement that needs a key.
        statement: StatementKind
    },

    /// Dialect cannot express the generated-value read-back.
    #[error("entity `{entity}` cannot be handled by {dialect}: {reason}")]
    Unsupported {
        /// Entity name from the registration.
        entity: String,

        /// Dialect display name.
        dialect: String,

        /// Human-readable description of the limitation.
        reason: String
    }
}

impl Error {
    /// Build a [`Error::MalformedRegistration`].
    pub(crate) fn malformed(entity: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRegistration {
            entity: entity.to_owned(),
            reason: reason.into()
        }
    }
}
