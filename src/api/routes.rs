//! API route configuration.

use axum::routing::{MethodFilter, MethodRouter, get, on};
use axum::{Json, Router};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::error::ErrorResponse;
use super::handlers::{self, HealthResponse, WelcomeResponse};
use super::state::AppState;
use crate::db::{Database, NewTodo, Todo, TodoPatch};
use crate::operations::{HttpMethod, OPERATIONS, TodoOp};

impl From<HttpMethod> for MethodFilter {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => MethodFilter::GET,
            HttpMethod::Post => MethodFilter::POST,
            HttpMethod::Put => MethodFilter::PUT,
            HttpMethod::Delete => MethodFilter::DELETE,
        }
    }
}

/// Handler for a catalogued service call, monomorphized for `D`.
fn todo_handler<D: Database + 'static>(
    op: TodoOp,
    filter: MethodFilter,
) -> MethodRouter<AppState<D>> {
    match op {
        TodoOp::List => on(filter, handlers::get_all_todos::<D>),
        TodoOp::Get => on(filter, handlers::get_todo::<D>),
        TodoOp::Create => on(filter, handlers::create_todo::<D>),
        TodoOp::Update => on(filter, handlers::update_todo::<D>),
        TodoOp::Delete => on(filter, handlers::delete_todo::<D>),
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo List API",
        version = "1.0.0",
        description = "A simple API to manage todo items",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::get_all_todos,
        handlers::get_todo,
        handlers::create_todo,
        handlers::update_todo,
        handlers::delete_todo,
    ),
    components(
        schemas(
            WelcomeResponse,
            HealthResponse,
            Todo,
            NewTodo,
            TodoPatch,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "todos", description = "Todo management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/openapi.json", get(openapi_json));

    // Todo routes, one per catalogued operation; same-path entries merge
    let todo_routes = OPERATIONS.iter().fold(Router::new(), |router, op| {
        router.route(op.path, todo_handler::<D>(op.op, op.method.into()))
    });

    system_routes
        .merge(todo_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
