// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_sql::Entity;

#[derive(Entity)]
#[entity(table = "Users")]
pub struct User {
    #[key]
    #[generated]
    pub id: i32,

    pub name: String,
}

fn main() {
    let statements = User::sql_statements();
    assert_eq!(
        statements.insert().unwrap().sql(),
        "INSERT INTO [Users] ([name]) VALUES (@name); SELECT SCOPE_IDENTITY() AS [id]"
    );
    assert_eq!(
        statements.select_by_key().unwrap().sql(),
        "SELECT [id], [name] FROM [Users] WHERE [id] = @id"
    );
}
