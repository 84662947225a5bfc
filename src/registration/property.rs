// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property-level mapping.
//!
//! A [`PropertyMapping`] ties one entity property to one database column and
//! records how the database treats it on writes.

/// Semantic type of a mapped property.
///
/// Only the integer kinds matter to statement construction: an `Int32` or
/// `Int64` generated key qualifies for scalar identity retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PropertyType {
    /// Boolean.
    Bool,

    /// Signed 8-bit integer.
    Int8,

    /// Signed 16-bit integer.
    Int16,

    /// Signed 32-bit integer.
    Int32,

    /// Signed 64-bit integer.
    Int64,

    /// Unsigned 8-bit integer.
    UInt8,

    /// Unsigned 16-bit integer.
    UInt16,

    /// Unsigned 32-bit integer.
    UInt32,

    /// Unsigned 64-bit integer.
    UInt64,

    /// Single precision float.
    Float32,

    /// Double precision float.
    Float64,

    /// Fixed-point decimal.
    Decimal,

    /// Text.
    String,

    /// UUID / GUID.
    Uuid,

    /// Timestamp, with or without zone.
    DateTime,

    /// Calendar date.
    Date,

    /// Time of day.
    Time,

    /// Binary blob.
    Bytes,

    /// Anything else, by type name.
    Other(String),

    /// Unknown.
    #[default]
    Unspecified
}

impl PropertyType {
    /// Whether a generated key of this type is read back through the
    /// dialect's scalar identity function.
    #[must_use]
    pub const fn is_identity_integer(&self) -> bool {
        matches!(self, Self::Int32 | Self::Int64)
    }
}

/// Mapping of one entity property to its database column.
///
/// Created with [`PropertyMapping::new`] and refined with the consuming
/// setters. The column name defaults to the property name.
///
/// # Flags
///
/// | Flag | Effect |
/// |------|--------|
/// | `key` | Part of the key predicate; never assigned by updates |
/// | `generated_on_insert` | Left out of inserts, read back afterwards |
/// | `generated_on_update` | Left out of updates, read back afterwards |
/// | `excluded_from_insert` | Left out of inserts, not read back |
/// | `excluded_from_update` | Left out of updates, not read back |
///
/// # Example
///
/// ```rust
/// use entity_sql::{PropertyMapping, PropertyType};
///
/// let id = PropertyMapping::new("Id")
///     .column("user_id")
///     .of_type(PropertyType::Int64)
///     .key()
///     .generated_on_insert();
///
/// assert_eq!(id.column_name(), "user_id");
/// assert!(!id.is_insertable());
/// assert!(id.is_refreshed_on_insert());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyMapping {
    name: String,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    column: Option<String>,

    #[cfg_attr(feature = "serde", serde(default, rename = "type"))]
    ty: PropertyType,

    #[cfg_attr(feature = "serde", serde(default))]
    key: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    generated_on_insert: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    generated_on_update: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    excluded_from_insert: bool,

    #[cfg_attr(feature = "serde", serde(default))]
    excluded_from_update: bool
}

impl PropertyMapping {
    /// Map a property to a column of the same name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name:                 name.into(),
            column:               None,
            ty:                   PropertyType::Unspecified,
            key:                  false,
            generated_on_insert:  false,
            generated_on_update:  false,
            excluded_from_insert: false,
            excluded_from_update: false
        }
    }

    /// Override the database column name.
    #[must_use]
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Set the semantic property type.
    #[must_use]
    pub fn of_type(mut self, ty: PropertyType) -> Self {
        self.ty = ty;
        self
    }

    /// Mark as part of the key.
    #[must_use]
    pub fn key(mut self) -> Self {
        self.key = true;
        self
    }

    /// Mark as assigned by the database on insert (identity, default).
    #[must_use]
    pub fn generated_on_insert(mut self) -> Self {
        self.generated_on_insert = true;
        self
    }

    /// Mark as altered by the database on update (computed, trigger).
    #[must_use]
    pub fn generated_on_update(mut self) -> Self {
        self.generated_on_update = true;
        self
    }

    /// Leave out of insert column lists without reading it back.
    #[must_use]
    pub fn exclude_from_insert(mut self) -> Self {
        self.excluded_from_insert = true;
        self
    }

    /// Leave out of update assignments without reading it back.
    #[must_use]
    pub fn exclude_from_update(mut self) -> Self {
        self.excluded_from_update = true;
        self
    }

    /// Property name, also used as parameter name and result alias.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Database column name.
    #[must_use]
    pub fn column_name(&self) -> &str {
        self.column.as_deref().unwrap_or(&self.name)
    }

    /// Whether the column name differs from the property name.
    #[must_use]
    pub fn is_renamed(&self) -> bool {
        self.column_name() != self.name
    }

    /// Semantic property type.
    #[must_use]
    pub fn property_type(&self) -> &PropertyType {
        &self.ty
    }

    /// Part of the key.
    #[must_use]
    pub fn is_key(&self) -> bool {
        self.key
    }

    /// Assigned by the database on insert.
    #[must_use]
    pub fn is_generated_on_insert(&self) -> bool {
        self.generated_on_insert
    }

    /// Altered by the database on update.
    #[must_use]
    pub fn is_generated_on_update(&self) -> bool {
        self.generated_on_update
    }

    /// Column and parameter appear in insert statements.
    ///
    /// This single predicate drives both the insert column list and the
    /// insert parameter list.
    #[must_use]
    pub fn is_insertable(&self) -> bool {
        !self.excluded_from_insert && !self.generated_on_insert
    }

    /// Column is assigned by single and batch updates.
    #[must_use]
    pub fn is_updatable(&self) -> bool {
        !self.key && !self.excluded_from_update && !self.generated_on_update
    }

    /// Value must be read back after an insert.
    #[must_use]
    pub fn is_refreshed_on_insert(&self) -> bool {
        self.generated_on_insert
    }

    /// Value must be read back after an update.
    #[must_use]
    pub fn is_refreshed_on_update(&self) -> bool {
        self.generated_on_update
    }
}
