// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_sql::{Entity, Error};

#[derive(Entity)]
#[entity(table = "audit_log", dialect = "mysql")]
pub struct AuditEntry {
    pub message: String,

    #[generated]
    pub logged_at: chrono::NaiveDateTime,
}

fn main() {
    let statements = AuditEntry::sql_statements();
    assert_eq!(
        statements.count().unwrap().sql(),
        "SELECT COUNT(*) FROM `audit_log`"
    );
    assert!(matches!(statements.delete_by_key(), Err(Error::MissingKey { .. })));
    assert!(matches!(statements.insert(), Err(Error::Unsupported { .. })));
}
