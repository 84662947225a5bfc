// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_sql::{Dialect, Entity};
use uuid::Uuid;

#[derive(Entity)]
#[entity(table = "sessions", dialect = "sqlite")]
pub struct Session {
    #[key]
    pub id: Uuid,

    pub user_id: Option<i64>,
}

fn main() {
    let statements = Session::sql_statements();
    assert_eq!(statements.registration().dialect(), Dialect::SqLite);
    assert_eq!(
        statements.insert().unwrap().sql(),
        "INSERT INTO \"sessions\" (\"id\", \"user_id\") VALUES (@id, @user_id)"
    );
    assert_eq!(
        statements.delete_by_key().unwrap().sql(),
        "DELETE FROM \"sessions\" WHERE \"id\" = @id"
    );
}
