// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Descriptor caching under concurrency.

use std::{
    sync::{
        Arc, Barrier,
        atomic::{AtomicUsize, Ordering}
    },
    thread
};

use entity_sql::{
    Dialect, Entity, EntityDescriptor, EntityRegistration, PropertyMapping, PropertyType,
    descriptor
};

const THREADS: usize = 8;

static FACTORY_CALLS: AtomicUsize = AtomicUsize::new(0);

fn counted_registration() -> EntityRegistration {
    FACTORY_CALLS.fetch_add(1, Ordering::SeqCst);
    EntityRegistration::builder("Account")
        .table("accounts")
        .property(
            PropertyMapping::new("Id")
                .of_type(PropertyType::Int64)
                .key()
                .generated_on_insert()
        )
        .property(PropertyMapping::new("Owner"))
        .build()
}

struct Account;

impl Entity for Account {
    fn registration() -> EntityRegistration {
        counted_registration()
    }
}

struct Ledger;

impl Entity for Ledger {
    fn registration() -> EntityRegistration {
        EntityRegistration::builder("Ledger")
            .dialect(Dialect::PostgreSql)
            .property(PropertyMapping::new("Id").key())
            .property(PropertyMapping::new("Balance").of_type(PropertyType::Decimal))
            .build()
    }
}

#[test]
fn concurrent_first_callers_observe_one_statement_set() {
    let descriptor = EntityDescriptor::new("Account", counted_registration);
    let barrier = Barrier::new(THREADS);

    let sets: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    descriptor.sql_statements(None)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for set in &sets {
        assert!(Arc::ptr_eq(set, &sets[0]));
        assert!(Arc::ptr_eq(set.registration(), descriptor.default_registration()));
    }
    assert!(FACTORY_CALLS.load(Ordering::SeqCst) >= 1);
}

#[test]
fn concurrent_statement_requests_agree() {
    let statements = Ledger::sql_statements();
    let barrier = Barrier::new(THREADS);

    let texts: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    statements.update_by_key().unwrap().sql().to_owned()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert!(texts.iter().all(|text| *text == texts[0]));
    assert_eq!(
        texts[0],
        "UPDATE \"Ledger\" SET \"Balance\" = @Balance WHERE \"Id\" = @Id"
    );
}

#[test]
fn concurrent_overrides_publish_once() {
    let descriptor = EntityDescriptor::new("Ledger", Ledger::registration);
    let sqlite = Arc::new(Ledger::registration().with_dialect(Dialect::SqLite));
    let barrier = Barrier::new(THREADS);

    let sets: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    descriptor.sql_statements(Some(&sqlite))
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert!(sets.iter().all(|set| Arc::ptr_eq(set, &sets[0])));
    assert_eq!(descriptor.override_count(), 1);
    assert_eq!(sets[0].registration().dialect(), Dialect::SqLite);
}

#[test]
fn registry_returns_one_descriptor_per_type() {
    let ledger = descriptor::<Ledger>();
    assert!(std::ptr::eq(ledger, Ledger::descriptor()));
    assert!(!std::ptr::eq(ledger, descriptor::<Account>()));
    assert_eq!(ledger.entity(), "Ledger");
    assert!(Arc::ptr_eq(&Ledger::sql_statements(), &ledger.sql_statements(None)));
}

#[test]
fn structurally_equal_overrides_stay_independent() {
    let descriptor = EntityDescriptor::new("Ledger", Ledger::registration);
    let a = Arc::new(Ledger::registration());
    let b = Arc::new(Ledger::registration());

    let first = descriptor.sql_statements(Some(&a));
    let second = descriptor.sql_statements(Some(&b));
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first.select_all().unwrap(), second.select_all().unwrap());
    assert!(!Arc::ptr_eq(&first, &descriptor.sql_statements(None)));
}
