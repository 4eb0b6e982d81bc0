use crate::routing_utils::{BasicErrorResponse, ExtraInfo};
use utoipa::OpenApi;

mod todo;

pub use todo::*;

/// Collects the OpenAPI schemas for every DTO the API sends or receives
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(NewTodo, UpdateTodo, DeleteTodo, TodoItem, DeleteSuccess, BasicErrorResponse, ExtraInfo),
        responses(BasicErrorResponse)
    )
)]
pub struct OpenApiSchemas;
