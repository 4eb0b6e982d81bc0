use crate::domain;
use chrono::NaiveDateTime;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// DTO for creating a new todo via the API
#[derive(Deserialize, Display, Validate, ToSchema)]
#[cfg_attr(test, derive(Serialize))]
#[display("{text}")]
pub struct NewTodo {
    #[validate(length(min = 1))]
    #[schema(example = "buy milk")]
    pub text: String,
}

impl From<NewTodo> for domain::todo::NewTodo {
    fn from(value: NewTodo) -> Self {
        domain::todo::NewTodo { text: value.text }
    }
}

/// DTO for changing a todo's content via the API. Omitted fields are left as they are.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[cfg_attr(test, derive(Serialize))]
pub struct UpdateTodo {
    #[schema(example = 1)]
    pub id: i64,
    #[validate(length(min = 1))]
    #[schema(example = "buy oat milk")]
    pub text: Option<String>,
    #[schema(example = true)]
    pub completed: Option<bool>,
}

impl From<UpdateTodo> for domain::todo::UpdateTodo {
    fn from(value: UpdateTodo) -> Self {
        domain::todo::UpdateTodo {
            text: value.text,
            completed: value.completed,
        }
    }
}

/// DTO naming the todo to delete. The ID is optional here so a missing one can be reported
/// with a dedicated error instead of a generic parse failure. Only a JSON object can name an ID,
/// and an ID which isn't an integer counts as missing.
#[derive(Debug, Deserialize, ToSchema)]
#[cfg_attr(test, derive(Serialize))]
#[serde(from = "serde_json::Map<String, serde_json::Value>")]
pub struct DeleteTodo {
    #[schema(example = 1)]
    pub id: Option<i64>,
}

impl From<serde_json::Map<String, serde_json::Value>> for DeleteTodo {
    fn from(value: serde_json::Map<String, serde_json::Value>) -> Self {
        DeleteTodo {
            id: value.get("id").and_then(serde_json::Value::as_i64),
        }
    }
}

/// DTO for a returned todo on the API
#[derive(Debug, Serialize, ToSchema)]
#[cfg_attr(test, derive(Deserialize, PartialEq))]
pub struct TodoItem {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "buy milk")]
    pub text: String,
    #[schema(example = false)]
    pub completed: bool,
    #[schema(value_type = String, example = "2026-10-19T14:00:00")]
    pub created_at: NaiveDateTime,
}

impl From<domain::todo::Todo> for TodoItem {
    fn from(value: domain::todo::Todo) -> Self {
        TodoItem {
            id: value.id,
            text: value.text,
            completed: value.completed,
            created_at: value.created_at,
        }
    }
}

/// DTO acknowledging a delete, whether or not the todo existed
#[derive(Serialize, ToSchema)]
#[cfg_attr(test, derive(Deserialize, Debug, PartialEq))]
pub struct DeleteSuccess {
    #[schema(example = true)]
    pub success: bool,
}
