//! SQLite TodoRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::db::{DbError, DbResult, NewTodo, Todo, TodoPatch, TodoRepository};

/// SQLx-backed todo repository.
pub struct SqliteTodoRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

impl<'a> TodoRepository for SqliteTodoRepository<'a> {
    async fn list(&self) -> DbResult<Vec<Todo>> {
        let rows = sqlx::query("SELECT todo_id, content, completed FROM todos ORDER BY todo_id ASC")
            .fetch_all(self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(row_to_todo)
            .collect::<Result<Vec<_>, _>>()?)
    }

    async fn get(&self, id: i64) -> DbResult<Todo> {
        let row = sqlx::query("SELECT todo_id, content, completed FROM todos WHERE todo_id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        let row = row.ok_or_else(|| DbError::todo_not_found(id))?;
        Ok(row_to_todo(&row)?)
    }

    async fn create(&self, todo: &NewTodo) -> DbResult<Todo> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO todos (content, completed)
            VALUES (?, 0)
            RETURNING todo_id, content, completed
            "#,
        )
        .bind(&todo.content)
        .fetch_one(&mut *tx)
        .await?;
        let created = row_to_todo(&row)?;

        tx.commit().await?;
        Ok(created)
    }

    async fn update(&self, id: i64, patch: &TodoPatch) -> DbResult<Todo> {
        // One statement: the write lock is taken up front, so concurrent
        // writers wait on the busy timeout instead of failing a lock upgrade.
        let row = sqlx::query(
            r#"
            UPDATE todos
            SET content = COALESCE(?, content),
                completed = COALESCE(?, completed)
            WHERE todo_id = ?
            RETURNING todo_id, content, completed
            "#,
        )
        .bind(patch.content.as_deref())
        .bind(patch.completed)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::todo_not_found(id))?;

        Ok(row_to_todo(&row)?)
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM todos WHERE todo_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::todo_not_found(id));
        }

        tx.commit().await?;
        Ok(())
    }
}

/// Convert a database row to a Todo model.
fn row_to_todo(row: &SqliteRow) -> Result<Todo, sqlx::Error> {
    Ok(Todo {
        todo_id: row.try_get("todo_id")?,
        content: row.try_get("content")?,
        completed: row.try_get("completed")?,
    })
}
