// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity registrations.
//!
//! An [`EntityRegistration`] is the resolved description of one entity type:
//! the table it lives in, the dialect that table speaks, and the ordered
//! property mappings. Statement builders consume it read-only.
//!
//! # Identity
//!
//! Every registration receives a process-unique [`RegistrationId`] when it is
//! built. Statement caches are keyed by that identity, not by content: two
//! registrations describing the same table still get independent caches.
//! For that reason registrations are deliberately not `Clone`.
//!
//! ```rust
//! use entity_sql::{Dialect, EntityRegistration, PropertyMapping, PropertyType};
//!
//! let users = EntityRegistration::builder("User")
//!     .table("Users")
//!     .schema("dbo")
//!     .dialect(Dialect::MsSql)
//!     .property(PropertyMapping::new("Id").of_type(PropertyType::Int32).key().generated_on_insert())
//!     .property(PropertyMapping::new("Name"))
//!     .build();
//!
//! let twin = users.with_dialect(Dialect::MsSql);
//! assert_ne!(users.id(), twin.id());
//! ```

mod property;

use std::{
    collections::HashSet,
    sync::atomic::{AtomicU64, Ordering}
};

pub use self::property::{PropertyMapping, PropertyType};
use crate::{
    dialect::Dialect,
    error::{Error, Result}
};

static NEXT_REGISTRATION_ID: AtomicU64 = AtomicU64::new(1);

/// Identity token of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistrationId(u64);

impl RegistrationId {
    fn next() -> Self {
        Self(NEXT_REGISTRATION_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw token value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Resolved mapping of an entity type to a table.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityRegistration {
    #[cfg_attr(feature = "serde", serde(skip, default = "RegistrationId::next"))]
    id: RegistrationId,

    entity: String,

    table: String,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    schema: Option<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    dialect: Dialect,

    properties: Vec<PropertyMapping>
}

impl EntityRegistration {
    /// Start a registration for the named entity.
    ///
    /// The table name defaults to the entity name and the dialect to
    /// [`Dialect::MsSql`].
    pub fn builder(entity: impl Into<String>) -> EntityRegistrationBuilder {
        let entity = entity.into();
        EntityRegistrationBuilder {
            table: entity.clone(),
            entity,
            schema: None,
            dialect: Dialect::default(),
            properties: Vec::new()
        }
    }

    /// Identity token.
    #[must_use]
    pub fn id(&self) -> RegistrationId {
        self.id
    }

    /// Entity name, used in diagnostics.
    #[must_use]
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Unquoted table name.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Unquoted schema name, if any.
    #[must_use]
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Target dialect.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Property mappings in registration order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyMapping] {
        &self.properties
    }

    /// Look up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyMapping> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Copy of this registration targeting another dialect.
    ///
    /// The copy has its own identity and therefore its own statement cache.
    #[must_use]
    pub fn with_dialect(&self, dialect: Dialect) -> Self {
        Self {
            id: RegistrationId::next(),
            entity: self.entity.clone(),
            table: self.table.clone(),
            schema: self.schema.clone(),
            dialect,
            properties: self.properties.clone()
        }
    }

    /// Check the structural invariants statement construction relies on.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedRegistration`] when the table name is empty, there
    /// are no properties, or property or column names repeat.
    pub fn validate(&self) -> Result<()> {
        if self.table.is_empty() {
            return Err(Error::malformed(&self.entity, "table name is empty"));
        }
        if self.properties.is_empty() {
            return Err(Error::malformed(&self.entity, "no properties are mapped"));
        }

        let mut names = HashSet::with_capacity(self.properties.len());
        let mut columns = HashSet::with_capacity(self.properties.len());
        for property in &self.properties {
            if property.name().is_empty() {
                return Err(Error::malformed(&self.entity, "a property has an empty name"));
            }
            if !names.insert(property.name()) {
                return Err(Error::malformed(
                    &self.entity,
                    format!("property `{}` is mapped more than once", property.name())
                ));
            }
            if !columns.insert(property.column_name()) {
                return Err(Error::malformed(
                    &self.entity,
                    format!("column `{}` is mapped more than once", property.column_name())
                ));
            }
        }
        Ok(())
    }
}

/// Builder returned by [`EntityRegistration::builder`].
#[derive(Debug)]
pub struct EntityRegistrationBuilder {
    entity: String,
    table: String,
    schema: Option<String>,
    dialect: Dialect,
    properties: Vec<PropertyMapping>
}

impl EntityRegistrationBuilder {
    /// Table name.
    #[must_use]
    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Schema name.
    #[must_use]
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Target dialect.
    #[must_use]
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Append a property mapping.
    #[must_use]
    pub fn property(mut self, property: PropertyMapping) -> Self {
        self.properties.push(property);
        self
    }

    /// Append several property mappings.
    #[must_use]
    pub fn properties(mut self, properties: impl IntoIterator<Item = PropertyMapping>) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Finish the registration and assign its identity.
    ///
    /// No validation happens here; defects surface on the first statement
    /// that needs the broken part.
    #[must_use]
    pub fn build(self) -> EntityRegistration {
        EntityRegistration {
            id:         RegistrationId::next(),
            entity:     self.entity,
            table:      self.table,
            schema:     self.schema,
            dialect:    self.dialect,
            properties: self.properties
        }
    }
}
