use crate::external_connections::ExternalConnectivity;
use crate::routing_utils::{
    BasicErrorResponse, GenericErrorResponse, Json, JsonErrorResponse, MissingIdResponse,
    NotFoundResponse, ValidationErrorResponse,
};
use crate::{AppState, SharedData, domain, dto, persistence};
use axum::Router;
use axum::extract::State;
use axum::response::ErrorResponse;
use axum::routing::get;
use domain::todo::driving_ports::TodoError;
use std::sync::Arc;
use tracing::{error, info};
use utoipa::OpenApi;
use validator::Validate;

#[derive(OpenApi)]
#[openapi(paths(list_todos, create_todo, update_todo, delete_todo))]
/// Defines the OpenAPI documentation for the todo API
pub struct TodoApi;
/// Constant used to group todo endpoints in OpenAPI documentation
pub const TODO_API_GROUP: &str = "Todos";

/// Builds the router for the todo resource. All four operations share one path and are told apart
/// by HTTP method.
pub fn todo_routes() -> Router<Arc<SharedData>> {
    Router::new().route(
        "/",
        get(|State(app_state): AppState| async move {
            let mut ext_cxn = app_state.ext_cxn.clone();
            let todo_service = domain::todo::TodoService {};

            list_todos(&mut ext_cxn, &todo_service).await
        })
        .post(
            |State(app_state): AppState, Json(new_todo): Json<dto::NewTodo>| async move {
                let mut ext_cxn = app_state.ext_cxn.clone();
                let todo_service = domain::todo::TodoService {};

                create_todo(new_todo, &mut ext_cxn, &todo_service).await
            },
        )
        .put(
            |State(app_state): AppState, Json(update): Json<dto::UpdateTodo>| async move {
                let mut ext_cxn = app_state.ext_cxn.clone();
                let todo_service = domain::todo::TodoService {};

                update_todo(update, &mut ext_cxn, &todo_service).await
            },
        )
        .delete(
            |State(app_state): AppState,
             delete_request: Result<Json<dto::DeleteTodo>, JsonErrorResponse>| async move {
                let mut ext_cxn = app_state.ext_cxn.clone();
                let todo_service = domain::todo::TodoService {};
                let delete_request = delete_request.ok().map(|Json(request)| request);

                delete_todo(delete_request, &mut ext_cxn, &todo_service).await
            },
        ),
    )
}

#[utoipa::path(
    get,
    path = "/api/todos",
    tag = TODO_API_GROUP,
    responses(
        (status = 200, description = "All todos, newest first", body = Vec<dto::TodoItem>),
        (status = 500, response = BasicErrorResponse),
    ),
)]
/// Lists every todo, newest first
async fn list_todos(
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl domain::todo::driving_ports::TodoPort,
) -> Result<Json<Vec<dto::TodoItem>>, ErrorResponse> {
    info!("Listing todos");
    let todo_reader = persistence::db_todo_driven_ports::DbTodoReader;

    let todos = todo_service
        .list_todos(&mut *ext_cxn, &todo_reader)
        .await
        .inspect_err(|err| error!("Could not list todos: {err}"))
        .map_err(GenericErrorResponse)?;

    Ok(Json(todos.into_iter().map(dto::TodoItem::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/todos",
    tag = TODO_API_GROUP,
    request_body = dto::NewTodo,
    responses(
        (status = 200, description = "The created todo", body = dto::TodoItem),
        (status = 400, response = BasicErrorResponse),
        (status = 500, response = BasicErrorResponse),
    ),
)]
/// Creates a todo and returns it as stored
async fn create_todo(
    new_todo: dto::NewTodo,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl domain::todo::driving_ports::TodoPort,
) -> Result<Json<dto::TodoItem>, ErrorResponse> {
    info!("Creating todo {new_todo}");
    new_todo.validate().map_err(ValidationErrorResponse::from)?;

    let domain_todo = domain::todo::NewTodo::from(new_todo);
    let todo_reader = persistence::db_todo_driven_ports::DbTodoReader;
    let todo_writer = persistence::db_todo_driven_ports::DbTodoWriter;

    let created_todo = todo_service
        .create_todo(&domain_todo, &mut *ext_cxn, &todo_reader, &todo_writer)
        .await
        .inspect_err(|err| error!("Todo create failure: {err}"))
        .map_err(GenericErrorResponse)?;

    Ok(Json(dto::TodoItem::from(created_todo)))
}

#[utoipa::path(
    put,
    path = "/api/todos",
    tag = TODO_API_GROUP,
    request_body = dto::UpdateTodo,
    responses(
        (status = 200, description = "The todo after the update", body = dto::TodoItem),
        (status = 400, response = BasicErrorResponse),
        (status = 404, response = BasicErrorResponse),
        (status = 500, response = BasicErrorResponse),
    ),
)]
/// Changes a todo's text and/or completion state
async fn update_todo(
    update: dto::UpdateTodo,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl domain::todo::driving_ports::TodoPort,
) -> Result<Json<dto::TodoItem>, ErrorResponse> {
    let todo_id = update.id;
    info!("Updating todo {todo_id}");
    update.validate().map_err(ValidationErrorResponse::from)?;

    let domain_update = domain::todo::UpdateTodo::from(update);
    let todo_reader = persistence::db_todo_driven_ports::DbTodoReader;
    let todo_writer = persistence::db_todo_driven_ports::DbTodoWriter;

    let update_result = todo_service
        .update_todo(
            todo_id,
            &domain_update,
            &mut *ext_cxn,
            &todo_reader,
            &todo_writer,
        )
        .await;
    match update_result {
        Ok(todo) => Ok(Json(dto::TodoItem::from(todo))),
        Err(TodoError::NotFound) => {
            info!("Todo {todo_id} did not exist to be updated");
            Err(NotFoundResponse.into())
        }
        Err(TodoError::PortError(err)) => {
            error!("Update todo failure: {err}");
            Err(GenericErrorResponse(err).into())
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/todos",
    tag = TODO_API_GROUP,
    request_body = dto::DeleteTodo,
    responses(
        (status = 200, description = "The todo no longer exists", body = dto::DeleteSuccess),
        (status = 400, response = BasicErrorResponse),
        (status = 500, response = BasicErrorResponse),
    ),
)]
/// Deletes a todo. Succeeds whether or not the todo existed, but refuses requests which don't
/// say which todo to delete.
async fn delete_todo(
    delete_request: Option<dto::DeleteTodo>,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl domain::todo::driving_ports::TodoPort,
) -> Result<Json<dto::DeleteSuccess>, ErrorResponse> {
    // 0 is never assigned by the store and is treated the same as a missing ID
    let Some(todo_id) = delete_request
        .and_then(|request| request.id)
        .filter(|id| *id != 0)
    else {
        info!("Rejected delete request without a todo ID");
        return Err(MissingIdResponse.into());
    };

    info!("Deleting todo {todo_id}");
    let todo_writer = persistence::db_todo_driven_ports::DbTodoWriter;

    let delete_result = todo_service
        .delete_todo(todo_id, &mut *ext_cxn, &todo_writer)
        .await;
    match delete_result {
        Ok(_) => Ok(Json(dto::DeleteSuccess { success: true })),
        Err(err) => {
            error!("Failed to delete todo: {err}");
            Err(GenericErrorResponse(err).into())
        }
    }
}
