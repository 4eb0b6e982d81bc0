use crate::domain::todo::driven_ports::{TodoReader, TodoWriter};
use crate::domain::todo::driving_ports::TodoError;
use crate::external_connections::ExternalConnectivity;
use anyhow::{Context, anyhow};
use chrono::NaiveDateTime;
use tracing::warn;

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Todo {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

#[cfg_attr(test, derive(Clone, Debug))]
pub struct NewTodo {
    pub text: String,
}

/// Changes to apply to an existing todo. Fields left as [None] keep their stored value.
#[cfg_attr(test, derive(Clone, Debug))]
pub struct UpdateTodo {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

pub mod driven_ports {
    use super::*;

    pub trait TodoReader {
        /// All todos, newest first
        async fn all_todos(
            &self,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<Vec<Todo>, anyhow::Error>;
        async fn todo_by_id(
            &self,
            todo_id: i64,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<Option<Todo>, anyhow::Error>;
    }

    pub trait TodoWriter {
        /// Stores a new todo and returns the ID the store assigned to it
        async fn create_todo(
            &self,
            new_todo: &NewTodo,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<i64, anyhow::Error>;

        /// Applies the update, returning false if no todo had the given ID
        async fn update_todo(
            &self,
            todo_id: i64,
            update: &UpdateTodo,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<bool, anyhow::Error>;

        async fn delete_todo(
            &self,
            todo_id: i64,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<(), anyhow::Error>;
    }
}

pub mod driving_ports {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum TodoError {
        #[error("The requested todo does not exist.")]
        NotFound,
        #[error(transparent)]
        PortError(#[from] anyhow::Error),
    }


    pub trait TodoPort {
        async fn list_todos(
            &self,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_read: &impl driven_ports::TodoReader,
        ) -> Result<Vec<Todo>, anyhow::Error>;
        async fn create_todo(
            &self,
            new_todo: &NewTodo,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_read: &impl driven_ports::TodoReader,
            todo_write: &impl driven_ports::TodoWriter,
        ) -> Result<Todo, anyhow::Error>;
        async fn update_todo(
            &self,
            todo_id: i64,
            update: &UpdateTodo,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_read: &impl driven_ports::TodoReader,
            todo_write: &impl driven_ports::TodoWriter,
        ) -> Result<Todo, TodoError>;
        async fn delete_todo(
            &self,
            todo_id: i64,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_write: &impl driven_ports::TodoWriter,
        ) -> Result<(), anyhow::Error>;
    }
}

pub struct TodoService {}

impl driving_ports::TodoPort for TodoService {
    async fn list_todos(
        &self,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_read: &impl TodoReader,
    ) -> Result<Vec<Todo>, anyhow::Error> {
        let todos = todo_read
            .all_todos(&mut *ext_cxn)
            .await
            .context("listing todos")?;

        Ok(todos)
    }

    async fn create_todo(
        &self,
        new_todo: &NewTodo,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_read: &impl TodoReader,
        todo_write: &impl TodoWriter,
    ) -> Result<Todo, anyhow::Error> {
        let new_id = todo_write
            .create_todo(new_todo, &mut *ext_cxn)
            .await
            .context("creating a todo")?;

        // Insert and read-back are separate statements, so a delete can land in between
        todo_read
            .todo_by_id(new_id, &mut *ext_cxn)
            .await
            .context("reading back a created todo")?
            .ok_or_else(|| anyhow!("todo {new_id} disappeared right after it was created"))
    }

    async fn update_todo(
        &self,
        todo_id: i64,
        update: &UpdateTodo,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_read: &impl TodoReader,
        todo_write: &impl TodoWriter,
    ) -> Result<Todo, TodoError> {
        let todo_matched = todo_write
            .update_todo(todo_id, update, &mut *ext_cxn)
            .await
            .context("updating a todo")?;
        if !todo_matched {
            return Err(TodoError::NotFound);
        }

        let updated_todo = todo_read
            .todo_by_id(todo_id, &mut *ext_cxn)
            .await
            .context("reading back an updated todo")?;
        match updated_todo {
            Some(todo) => Ok(todo),
            None => {
                warn!("Todo {todo_id} was deleted before its update could be read back");
                Err(TodoError::NotFound)
            }
        }
    }

    async fn delete_todo(
        &self,
        todo_id: i64,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_write: &impl TodoWriter,
    ) -> Result<(), anyhow::Error> {
        todo_write
            .delete_todo(todo_id, &mut *ext_cxn)
            .await
            .context("deleting a todo")?;
        Ok(())
    }
}
