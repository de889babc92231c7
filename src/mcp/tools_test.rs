//! Tests for Todo MCP tools

use crate::db::{Database, NewTodo, SqliteDatabase, Todo, TodoPatch};
use crate::mcp::McpServer;
use crate::mcp::tools::{TodoIdParams, UpdateTodoParams};
use crate::service::MAX_CONTENT_LEN;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, ErrorCode};

async fn setup() -> McpServer<SqliteDatabase> {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Failed to run migrations");
    McpServer::new(db)
}

fn text_of(result: &CallToolResult) -> &str {
    result.content[0].as_text().unwrap().text.as_str()
}

fn todo_of(result: &CallToolResult) -> Todo {
    serde_json::from_str(text_of(result)).expect("tool output should be a todo")
}

async fn create(server: &McpServer<SqliteDatabase>, content: &str) -> Todo {
    let result = server
        .create_todo(Parameters(NewTodo::new(content)))
        .await
        .expect("create_todo should succeed");
    todo_of(&result)
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_all_todos_empty() {
    let server = setup().await;

    let result = server
        .get_all_todos()
        .await
        .expect("get_all_todos should succeed");

    let todos: Vec<Todo> = serde_json::from_str(text_of(&result)).unwrap();
    assert!(todos.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_todo_returns_created_todo() {
    let server = setup().await;

    let todo = create(&server, "Learn MCP").await;

    assert!(todo.todo_id > 0);
    assert_eq!(todo.content, "Learn MCP");
    assert!(!todo.completed);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_all_todos_in_creation_order() {
    let server = setup().await;
    let first = create(&server, "first").await;
    let second = create(&server, "second").await;

    let result = server.get_all_todos().await.unwrap();
    let todos: Vec<Todo> = serde_json::from_str(text_of(&result)).unwrap();

    assert_eq!(todos, vec![first, second]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_todo() {
    let server = setup().await;
    let created = create(&server, "Fetch me").await;

    let result = server
        .get_todo(Parameters(TodoIdParams {
            todo_id: created.todo_id,
        }))
        .await
        .expect("get_todo should succeed");

    assert_eq!(todo_of(&result), created);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_todo_not_found() {
    let server = setup().await;

    let err = server
        .get_todo(Parameters(TodoIdParams { todo_id: 999 }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
    let data = err.data.expect("not found error should carry data");
    assert_eq!(data["todo_id"], 999);
    assert_eq!(data["error"], "Todo 999 not found");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_todo_rejects_blank_content() {
    let server = setup().await;

    let err = server
        .create_todo(Parameters(NewTodo::new("   ")))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(err.data.unwrap()["field"], "content");

    let listed = server.get_all_todos().await.unwrap();
    let todos: Vec<Todo> = serde_json::from_str(text_of(&listed)).unwrap();
    assert!(todos.is_empty(), "rejected input must not be stored");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_todo_rejects_oversized_content() {
    let server = setup().await;

    let err = server
        .create_todo(Parameters(NewTodo::new("x".repeat(MAX_CONTENT_LEN + 1))))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_todo_partial() {
    let server = setup().await;
    let created = create(&server, "Keep this content").await;

    let result = server
        .update_todo(Parameters(UpdateTodoParams {
            todo_id: created.todo_id,
            changes: TodoPatch {
                content: None,
                completed: Some(true),
            },
        }))
        .await
        .expect("update_todo should succeed");

    let updated = todo_of(&result);
    assert_eq!(updated.todo_id, created.todo_id);
    assert_eq!(updated.content, "Keep this content");
    assert!(updated.completed);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_todo_both_fields() {
    let server = setup().await;
    let created = create(&server, "Old").await;

    let result = server
        .update_todo(Parameters(UpdateTodoParams {
            todo_id: created.todo_id,
            changes: TodoPatch {
                content: Some("New".to_string()),
                completed: Some(true),
            },
        }))
        .await
        .unwrap();

    let updated = todo_of(&result);
    assert_eq!(updated.content, "New");
    assert!(updated.completed);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_todo_not_found() {
    let server = setup().await;

    let err = server
        .update_todo(Parameters(UpdateTodoParams {
            todo_id: 42,
            changes: TodoPatch {
                content: None,
                completed: Some(true),
            },
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_todo() {
    let server = setup().await;
    let created = create(&server, "Delete me").await;

    let result = server
        .delete_todo(Parameters(TodoIdParams {
            todo_id: created.todo_id,
        }))
        .await
        .expect("delete_todo should succeed");
    assert_eq!(
        text_of(&result),
        format!("Todo {} deleted successfully", created.todo_id)
    );

    let err = server
        .delete_todo(Parameters(TodoIdParams {
            todo_id: created.todo_id,
        }))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
}

#[test]
fn test_update_params_accept_flat_fields() {
    let params: UpdateTodoParams =
        serde_json::from_value(serde_json::json!({"todo_id": 3, "completed": true})).unwrap();

    assert_eq!(params.todo_id, 3);
    assert_eq!(params.changes.content, None);
    assert_eq!(params.changes.completed, Some(true));
}
