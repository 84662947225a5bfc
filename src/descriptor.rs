// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-entity statement caches.
//!
//! An [`EntityDescriptor`] exists once per entity type for the whole
//! process. It owns:
//!
//! - the default registration, produced by [`Entity::registration`] on first
//!   use and published once
//! - the statement set of the default registration
//! - one statement set per override registration, keyed by
//!   [`RegistrationId`]
//!
//! Override caches are keyed by identity, never by content: two identical
//! but separately built registrations get independent statement sets.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use entity_sql::{Dialect, Entity, EntityRegistration, PropertyMapping, PropertyType};
//!
//! struct Tag;
//!
//! impl Entity for Tag {
//!     fn registration() -> EntityRegistration {
//!         EntityRegistration::builder("Tag")
//!             .table("tags")
//!             .property(
//!                 PropertyMapping::new("Id")
//!                     .of_type(PropertyType::Int32)
//!                     .key()
//!                     .generated_on_insert()
//!             )
//!             .property(PropertyMapping::new("Label"))
//!             .build()
//!     }
//! }
//!
//! let default = Tag::sql_statements();
//! assert!(Arc::ptr_eq(&default, &Tag::sql_statements()));
//!
//! let sqlite = Arc::new(Tag::registration().with_dialect(Dialect::SqLite));
//! let overridden = Tag::descriptor().sql_statements(Some(&sqlite));
//! assert_eq!(
//!     overridden.insert().unwrap().sql(),
//!     "INSERT INTO \"tags\" (\"Label\") VALUES (@Label); SELECT last_insert_rowid() AS \"Id\""
//! );
//! ```

use std::{
    any::{TypeId, type_name},
    fmt,
    sync::Arc
};

use dashmap::{DashMap, mapref::entry::Entry};
use once_cell::{race::OnceBox, sync::Lazy};
use tracing::debug;

use crate::{
    registration::{EntityRegistration, RegistrationId},
    sql::SqlBuilder,
    statements::SqlStatements
};

/// Type with a default registration.
///
/// Implemented by `#[derive(Entity)]`, or by hand.
pub trait Entity: Sized + 'static {
    /// Build the default registration.
    ///
    /// Called at most a few times per process: concurrent first users may
    /// race, only one result is kept.
    fn registration() -> EntityRegistration;

    /// Process-wide descriptor of this type.
    fn descriptor() -> &'static EntityDescriptor {
        descriptor::<Self>()
    }

    /// Statement set of the default registration.
    fn sql_statements() -> Arc<SqlStatements> {
        Self::descriptor().sql_statements(None)
    }
}

/// Registration and statement caches of one entity type.
pub struct EntityDescriptor {
    entity:               &'static str,
    factory:              fn() -> EntityRegistration,
    default_registration: OnceBox<Arc<EntityRegistration>>,
    default_statements:   OnceBox<Arc<SqlStatements>>,
    statements:           DashMap<RegistrationId, Arc<SqlStatements>>
}

impl EntityDescriptor {
    /// Descriptor resolving its default registration with `factory`.
    pub fn new(entity: &'static str, factory: fn() -> EntityRegistration) -> Self {
        debug!(entity, "entity descriptor constructed");
        Self {
            entity,
            factory,
            default_registration: OnceBox::new(),
            default_statements: OnceBox::new(),
            statements: DashMap::new()
        }
    }

    /// Descriptor of an [`Entity`] type, named after the type.
    pub fn for_entity<E: Entity>() -> Self {
        let path = type_name::<E>();
        let entity = path.rsplit("::").next().unwrap_or(path);
        Self::new(entity, E::registration)
    }

    /// Entity name.
    #[must_use]
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Default registration, resolved on first call.
    pub fn default_registration(&self) -> &Arc<EntityRegistration> {
        self.default_registration.get_or_init(|| {
            let registration = (self.factory)();
            debug!(
                entity = self.entity,
                registration = registration.id().get(),
                "default registration resolved"
            );
            Box::new(Arc::new(registration))
        })
    }

    /// Statement set of `registration`, or of the default registration.
    ///
    /// Repeated calls with the same registration return the same instance.
    pub fn sql_statements(
        &self,
        registration: Option<&Arc<EntityRegistration>>
    ) -> Arc<SqlStatements> {
        let Some(registration) = registration else {
            return self.default_statements();
        };
        if self
            .default_registration
            .get()
            .is_some_and(|default| default.id() == registration.id())
        {
            return self.default_statements();
        }

        let id = registration.id();
        if let Some(existing) = self.statements.get(&id) {
            return Arc::clone(existing.value());
        }

        // Built outside the map so no shard lock is held while assembling.
        let candidate = Arc::new(SqlStatements::from_builder(
            self.construct_sql_builder(Arc::clone(registration))
        ));
        match self.statements.entry(id) {
            Entry::Occupied(entry) => Arc::clone(entry.get()),
            Entry::Vacant(entry) => {
                debug!(
                    entity = self.entity,
                    registration = id.get(),
                    dialect = %registration.dialect(),
                    "override statements published"
                );
                Arc::clone(entry.insert(candidate).value())
            }
        }
    }

    /// Builder matching the registration's dialect.
    #[must_use]
    pub fn construct_sql_builder(&self, registration: Arc<EntityRegistration>) -> SqlBuilder {
        SqlBuilder::new(registration)
    }

    /// Number of override statement sets held.
    #[must_use]
    pub fn override_count(&self) -> usize {
        self.statements.len()
    }

    fn default_statements(&self) -> Arc<SqlStatements> {
        Arc::clone(self.default_statements.get_or_init(|| {
            let registration = Arc::clone(self.default_registration());
            Box::new(Arc::new(SqlStatements::from_builder(
                self.construct_sql_builder(registration)
            )))
        }))
    }
}

impl fmt::Debug for EntityDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityDescriptor")
            .field("entity", &self.entity)
            .field("default_registration", &self.default_registration.get())
            .field("overrides", &self.statements.len())
            .finish_non_exhaustive()
    }
}

static DESCRIPTORS: Lazy<DashMap<TypeId, &'static EntityDescriptor>> = Lazy::new(DashMap::new);

/// Process-wide descriptor of `E`.
///
/// Descriptors are created on first request and never dropped.
pub fn descriptor<E: Entity>() -> &'static EntityDescriptor {
    let id = TypeId::of::<E>();
    if let Some(found) = DESCRIPTORS.get(&id) {
        return *found.value();
    }
    *DESCRIPTORS
        .entry(id)
        .or_insert_with(|| Box::leak(Box::new(EntityDescriptor::for_entity::<E>())))
        .value()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dialect::Dialect,
        registration::{PropertyMapping, PropertyType}
    };

    struct Widget;

    impl Entity for Widget {
        fn registration() -> EntityRegistration {
            EntityRegistration::builder("Widget")
                .property(
                    PropertyMapping::new("Id")
                        .of_type(PropertyType::Int64)
                        .key()
                        .generated_on_insert()
                )
                .property(PropertyMapping::new("Color"))
                .build()
        }
    }

    #[test]
    fn descriptor_is_unique_per_type() {
        assert!(std::ptr::eq(Widget::descriptor(), descriptor::<Widget>()));
        assert_eq!(Widget::descriptor().entity(), "Widget");
    }

    #[test]
    fn default_statements_are_memoized() {
        let d = EntityDescriptor::new("Widget", Widget::registration);
        let a = d.sql_statements(None);
        let b = d.sql_statements(None);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(a.registration(), d.default_registration()));
    }

    #[test]
    fn default_registration_passed_explicitly_uses_default_set() {
        let d = EntityDescriptor::new("Widget", Widget::registration);
        let default = Arc::clone(d.default_registration());
        assert!(Arc::ptr_eq(&d.sql_statements(Some(&default)), &d.sql_statements(None)));
        assert_eq!(d.override_count(), 0);
    }

    #[test]
    fn overrides_are_keyed_by_identity() {
        let d = EntityDescriptor::new("Widget", Widget::registration);
        let first = Arc::new(Widget::registration().with_dialect(Dialect::MySql));
        let twin = Arc::new(Widget::registration().with_dialect(Dialect::MySql));

        let a = d.sql_statements(Some(&first));
        let again = d.sql_statements(Some(&first));
        let b = d.sql_statements(Some(&twin));

        assert!(Arc::ptr_eq(&a, &again));
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a.insert().unwrap(), b.insert().unwrap());
        assert_eq!(d.override_count(), 2);
        assert!(!Arc::ptr_eq(&a, &d.sql_statements(None)));
    }
}
