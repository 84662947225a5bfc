// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dialect-independent SQL fragments.
//!
//! [`GenericStatementBuilder`] precomputes the property subsets of one
//! registration and assembles every fragment the dialect builders share:
//! quoted table and column references, insert column/parameter lists, the
//! `SET` clause and the key predicate. Quoting always goes through the
//! registration's [`Dialect`], so nothing here hardcodes quote characters.
//!
//! # Property Subsets
//!
//! | Subset | Members |
//! |--------|---------|
//! | keys | `key` |
//! | insert | not excluded from insert, not generated on insert |
//! | update | not key, not excluded from update, not generated on update |
//! | refresh on insert | generated on insert |
//! | refresh on update | generated on update |
//! | insert key generated | keys ∩ refresh on insert |
//!
//! Every subset keeps registration order.

use std::sync::Arc;

use crate::{
    dialect::Dialect,
    error::{Error, Result, StatementKind},
    registration::{EntityRegistration, PropertyMapping}
};

/// How the generated values of an insert are read back.
///
/// Shared policy of every dialect: dialects differ in syntax, never in which
/// tier applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertReadBack<'a> {
    /// Nothing is generated; a plain insert suffices.
    Nothing,

    /// A single generated 32/64-bit integer key and nothing else.
    Identity(&'a PropertyMapping),

    /// Any other combination of generated columns.
    Columns(&'a [PropertyMapping])
}

/// Caller-independent parts of a `SELECT`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectParts<'a> {
    /// Select list.
    pub select: &'a str,

    /// `FROM` target.
    pub from: &'a str,

    /// `WHERE` condition, without the keyword.
    pub filter: Option<&'a str>,

    /// `ORDER BY` list, without the keyword.
    pub order: Option<&'a str>,

    /// Rows to skip.
    pub skip: Option<u64>,

    /// Rows to return.
    pub limit: Option<u64>
}

impl SelectParts<'_> {
    /// Whether any paging was requested.
    #[must_use]
    pub fn is_paged(&self) -> bool {
        self.skip.is_some() || self.limit.is_some()
    }
}

/// Fragment assembly shared by all dialect builders.
#[derive(Debug)]
pub struct GenericStatementBuilder {
    registration: Arc<EntityRegistration>,
    table: String,
    keys: Vec<PropertyMapping>,
    insert: Vec<PropertyMapping>,
    update: Vec<PropertyMapping>,
    refresh_on_insert: Vec<PropertyMapping>,
    refresh_on_update: Vec<PropertyMapping>,
    insert_key_generated: Vec<PropertyMapping>
}

impl GenericStatementBuilder {
    /// Precompute subsets and the quoted table reference.
    pub fn new(registration: Arc<EntityRegistration>) -> Self {
        let dialect = registration.dialect();
        let table = match registration.schema() {
            Some(schema) if dialect.uses_schemas() && !schema.is_empty() => {
                format!("{}.{}", dialect.delimit(schema), dialect.delimit(registration.table()))
            }
            _ => dialect.delimit(registration.table())
        };

        let subset = |keep: fn(&PropertyMapping) -> bool| -> Vec<PropertyMapping> {
            registration
                .properties()
                .iter()
                .filter(|p| keep(p))
                .cloned()
                .collect()
        };

        let keys = subset(PropertyMapping::is_key);
        let insert = subset(PropertyMapping::is_insertable);
        let update = subset(PropertyMapping::is_updatable);
        let refresh_on_insert = subset(PropertyMapping::is_refreshed_on_insert);
        let refresh_on_update = subset(PropertyMapping::is_refreshed_on_update);
        let insert_key_generated = subset(|p| p.is_key() && p.is_refreshed_on_insert());

        Self {
            registration,
            table,
            keys,
            insert,
            update,
            refresh_on_insert,
            refresh_on_update,
            insert_key_generated
        }
    }

    /// Registration this builder was made for.
    #[must_use]
    pub fn registration(&self) -> &Arc<EntityRegistration> {
        &self.registration
    }

    /// Target dialect.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.registration.dialect()
    }

    /// Key properties.
    #[must_use]
    pub fn key_properties(&self) -> &[PropertyMapping] {
        &self.keys
    }

    /// Properties written by inserts.
    #[must_use]
    pub fn insert_properties(&self) -> &[PropertyMapping] {
        &self.insert
    }

    /// Properties assigned by updates.
    #[must_use]
    pub fn update_properties(&self) -> &[PropertyMapping] {
        &self.update
    }

    /// Properties read back after inserts.
    #[must_use]
    pub fn refresh_on_insert_properties(&self) -> &[PropertyMapping] {
        &self.refresh_on_insert
    }

    /// Properties read back after updates.
    #[must_use]
    pub fn refresh_on_update_properties(&self) -> &[PropertyMapping] {
        &self.refresh_on_update
    }

    /// Keys whose value the database assigns on insert.
    #[must_use]
    pub fn insert_key_generated_properties(&self) -> &[PropertyMapping] {
        &self.insert_key_generated
    }

    /// Quoted, schema-qualified table reference.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Quote an identifier with the dialect delimiters.
    #[must_use]
    pub fn delimited(&self, identifier: &str) -> String {
        self.dialect().delimit(identifier)
    }

    /// Quoted database column of a property.
    #[must_use]
    pub fn column_name(&self, property: &PropertyMapping) -> String {
        self.delimited(property.column_name())
    }

    /// Column reference for select lists, aliased to the property name when
    /// the column is renamed.
    #[must_use]
    pub fn column_selection(&self, property: &PropertyMapping) -> String {
        if property.is_renamed() {
            format!(
                "{} AS {}",
                self.column_name(property),
                self.delimited(property.name())
            )
        } else {
            self.column_name(property)
        }
    }

    /// Named parameter of a property.
    #[must_use]
    pub fn parameter(&self, property: &PropertyMapping) -> String {
        self.dialect().parameter(property.name())
    }

    /// `column = parameter` predicate of a property.
    #[must_use]
    pub fn equality(&self, property: &PropertyMapping) -> String {
        format!("{} = {}", self.column_name(property), self.parameter(property))
    }

    /// Aliased select list over every property.
    #[must_use]
    pub fn column_enumeration_for_select(&self) -> String {
        self.selection(self.registration.properties())
    }

    /// Insert column list.
    ///
    /// Aligned 1:1 with [`param_enumeration_for_insert`](Self::param_enumeration_for_insert):
    /// both walk the same precomputed subset.
    #[must_use]
    pub fn column_enumeration_for_insert(&self) -> String {
        join(self.insert.iter().map(|p| self.column_name(p)), ", ")
    }

    /// Insert parameter list.
    #[must_use]
    pub fn param_enumeration_for_insert(&self) -> String {
        join(self.insert.iter().map(|p| self.parameter(p)), ", ")
    }

    /// `SET` assignments over the update subset.
    #[must_use]
    pub fn update_clause(&self) -> String {
        join(self.update.iter().map(|p| self.equality(p)), ", ")
    }

    /// `AND`-joined key predicate in registration order.
    #[must_use]
    pub fn keys_where_clause(&self) -> String {
        join(self.keys.iter().map(|p| self.equality(p)), " AND ")
    }

    /// Aliased select list over the refresh-on-insert subset.
    #[must_use]
    pub fn refresh_on_insert_column_selection(&self) -> String {
        self.selection(&self.refresh_on_insert)
    }

    /// Aliased select list over the refresh-on-update subset.
    #[must_use]
    pub fn refresh_on_update_column_selection(&self) -> String {
        self.selection(&self.refresh_on_update)
    }

    /// Aliased select list over arbitrary properties.
    #[must_use]
    pub fn selection(&self, properties: &[PropertyMapping]) -> String {
        join(properties.iter().map(|p| self.column_selection(p)), ", ")
    }

    /// Which read-back tier applies to inserts.
    #[must_use]
    pub fn insert_read_back(&self) -> InsertReadBack<'_> {
        if self.refresh_on_insert.is_empty() {
            return InsertReadBack::Nothing;
        }
        if let ([key], [_]) = (self.insert_key_generated.as_slice(), self.refresh_on_insert.as_slice())
            && key.property_type().is_identity_integer()
        {
            return InsertReadBack::Identity(key);
        }
        InsertReadBack::Columns(&self.refresh_on_insert)
    }

    /// ` (col, ...)` after the table of an insert, empty when nothing is
    /// inserted.
    #[must_use]
    pub fn insert_columns_clause(&self) -> String {
        if self.insert.is_empty() {
            String::new()
        } else {
            format!(" ({})", self.column_enumeration_for_insert())
        }
    }

    /// `VALUES (...)`, or `DEFAULT VALUES` when nothing is inserted.
    #[must_use]
    pub fn insert_values_clause(&self) -> String {
        if self.insert.is_empty() {
            "DEFAULT VALUES".to_owned()
        } else {
            format!("VALUES ({})", self.param_enumeration_for_insert())
        }
    }

    /// Insert without any read-back.
    #[must_use]
    pub fn plain_insert(&self) -> String {
        format!(
            "INSERT INTO {}{} {}",
            self.table,
            self.insert_columns_clause(),
            self.insert_values_clause()
        )
    }

    /// Single-row update without any read-back.
    #[must_use]
    pub fn single_update(&self) -> String {
        format!(
            "UPDATE {} SET {} WHERE {}",
            self.table,
            self.update_clause(),
            self.keys_where_clause()
        )
    }

    /// `SELECT .. FROM .. [WHERE ..] [ORDER BY ..]`, paging left to the
    /// dialect.
    #[must_use]
    pub fn select_without_paging(&self, parts: &SelectParts<'_>) -> String {
        let mut sql = format!("SELECT {} FROM {}", parts.select, parts.from);
        if let Some(filter) = parts.filter {
            sql.push_str(" WHERE ");
            sql.push_str(filter);
        }
        if let Some(order) = parts.order {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }
        sql
    }

    /// Property names bound by inserts.
    #[must_use]
    pub fn insert_parameters(&self) -> Vec<String> {
        names(&self.insert)
    }

    /// Property names bound by the `SET` clause.
    #[must_use]
    pub fn update_parameters(&self) -> Vec<String> {
        names(&self.update)
    }

    /// Property names bound by the key predicate.
    #[must_use]
    pub fn key_parameters(&self) -> Vec<String> {
        names(&self.keys)
    }

    /// Fail unless the registration is structurally sound.
    ///
    /// # Errors
    ///
    /// See [`EntityRegistration::validate`].
    pub fn require_valid(&self) -> Result<()> {
        self.registration.validate()
    }

    /// Fail unless the entity has at least one key.
    ///
    /// # Errors
    ///
    /// [`Error::MissingKey`] naming `statement`.
    pub fn require_keys(&self, statement: StatementKind) -> Result<()> {
        if self.keys.is_empty() {
            return Err(Error::MissingKey {
                entity: self.registration.entity().to_owned(),
                statement
            });
        }
        Ok(())
    }

    /// Fail unless updates assign at least one column.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedRegistration`].
    pub fn require_update_assignments(&self) -> Result<()> {
        if self.update.is_empty() {
            return Err(Error::malformed(
                self.registration.entity(),
                "no property can be assigned by an update"
            ));
        }
        Ok(())
    }

    /// [`Error::Unsupported`] for this entity and dialect.
    #[must_use]
    pub fn unsupported(&self, reason: impl Into<String>) -> Error {
        Error::Unsupported {
            entity:  self.registration.entity().to_owned(),
            dialect: self.dialect().to_string(),
            reason:  reason.into()
        }
    }
}

fn join(parts: impl Iterator<Item = String>, separator: &str) -> String {
    parts.collect::<Vec<_>>().join(separator)
}

fn names(properties: &[PropertyMapping]) -> Vec<String> {
    properties.iter().map(|p| p.name().to_owned()).collect()
}
