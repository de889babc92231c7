//! Tests for SQLite database connection and migrations.

use crate::db::{Database, NewTodo, SqliteDatabase, TodoRepository};

#[tokio::test(flavor = "multi_thread")]
async fn migrate_creates_todos_table() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("Migration should succeed");

    let tables: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Query should succeed");

    // _sqlx_migrations is created by sqlx for migration tracking.
    // sqlite_sequence exists because the todos table uses AUTOINCREMENT.
    for table in ["_sqlx_migrations", "sqlite_sequence", "todos"] {
        assert!(
            tables.iter().any(|t| t == table),
            "Missing table: {}. Found tables: {:?}",
            table,
            tables
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_creates_expected_columns() {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();

    let columns: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info('todos')")
        .fetch_all(db.pool())
        .await
        .expect("Query should succeed");

    assert_eq!(columns, vec!["todo_id", "content", "completed"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_is_idempotent() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("First migration should succeed");
    db.todos()
        .create(&NewTodo::new("Survives a second migrate"))
        .await
        .unwrap();
    db.migrate().await.expect("Second migration should succeed");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos")
        .fetch_one(db.pool())
        .await
        .expect("Query should succeed");

    assert_eq!(count, 1, "Re-running migrations must not touch existing rows");
}

#[tokio::test(flavor = "multi_thread")]
async fn completed_defaults_to_false_at_the_column_level() {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();

    sqlx::query("INSERT INTO todos (content) VALUES ('raw insert')")
        .execute(db.pool())
        .await
        .unwrap();

    let completed: bool = sqlx::query_scalar("SELECT completed FROM todos")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert!(!completed);
}

#[tokio::test(flavor = "multi_thread")]
async fn content_is_not_nullable() {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();

    let result = sqlx::query("INSERT INTO todos (content) VALUES (NULL)")
        .execute(db.pool())
        .await;
    assert!(result.is_err(), "NULL content must be rejected");
}

#[tokio::test(flavor = "multi_thread")]
async fn file_database_persists_across_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("todos.db");

    let db = SqliteDatabase::open(&path).await.expect("Open should succeed");
    db.migrate().await.unwrap();
    let created = db
        .todos()
        .create(&NewTodo::new("Persist me"))
        .await
        .unwrap();
    db.close().await;

    let reopened = SqliteDatabase::open(&path).await.unwrap();
    reopened.migrate().await.unwrap();
    let fetched = reopened.todos().get(created.todo_id).await.unwrap();
    assert_eq!(fetched, created);
    reopened.close().await;
}

#[tokio::test(flavor = "multi_thread")]
async fn closed_database_rejects_queries() {
    let db = SqliteDatabase::in_memory().await.unwrap();
    db.migrate().await.unwrap();
    db.close().await;

    assert!(db.todos().list().await.is_err());
}
