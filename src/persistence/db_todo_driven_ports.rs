use crate::domain;
use crate::domain::todo::{NewTodo, Todo, UpdateTodo};
use crate::external_connections::{ConnectionHandle, ExternalConnectivity};
use anyhow::{Context, Error};
use chrono::NaiveDateTime;
use sqlx::{FromRow, query, query_as};

pub struct DbTodoReader;

#[derive(FromRow)]
struct TodoRow {
    id: i64,
    text: String,
    completed: bool,
    created_at: NaiveDateTime,
}

impl From<TodoRow> for domain::todo::Todo {
    fn from(value: TodoRow) -> Self {
        Todo {
            id: value.id,
            text: value.text,
            completed: value.completed,
            created_at: value.created_at,
        }
    }
}

impl domain::todo::driven_ports::TodoReader for DbTodoReader {
    async fn all_todos(&self, ext_cxn: &mut impl ExternalConnectivity) -> Result<Vec<Todo>, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        // created_at only has second resolution, so ID breaks ties between same-second inserts
        let todos: Vec<Todo> = query_as::<_, TodoRow>(
            "SELECT id, text, completed, created_at FROM todos ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(cxn.borrow_connection())
        .await
        .context("trying to fetch all todos")?
        .into_iter()
        .map(domain::todo::Todo::from)
        .collect();

        Ok(todos)
    }

    async fn todo_by_id(
        &self,
        todo_id: i64,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<Option<Todo>, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let todo: Option<Todo> = query_as::<_, TodoRow>(
            "SELECT id, text, completed, created_at FROM todos WHERE id = ?",
        )
        .bind(todo_id)
        .fetch_optional(cxn.borrow_connection())
        .await
        .context("trying to fetch a todo by ID")?
        .map(domain::todo::Todo::from);

        Ok(todo)
    }
}

pub struct DbTodoWriter;

impl domain::todo::driven_ports::TodoWriter for DbTodoWriter {
    async fn create_todo(
        &self,
        new_todo: &NewTodo,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<i64, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let new_id = query_as::<_, super::NewId>("INSERT INTO todos (text) VALUES (?) RETURNING id")
            .bind(new_todo.text.as_str())
            .fetch_one(cxn.borrow_connection())
            .await
            .context("trying to insert a new todo into the database")?;

        Ok(new_id.id)
    }

    async fn update_todo(
        &self,
        todo_id: i64,
        update: &UpdateTodo,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<bool, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let update_result = query(
            "UPDATE todos SET text = COALESCE(?, text), completed = COALESCE(?, completed) WHERE id = ?",
        )
        .bind(update.text.as_deref())
        .bind(update.completed)
        .bind(todo_id)
        .execute(cxn.borrow_connection())
        .await
        .context("trying to update a todo in the database")?;

        Ok(update_result.rows_affected() > 0)
    }

    async fn delete_todo(
        &self,
        todo_id: i64,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<(), Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        query("DELETE FROM todos WHERE id = ?")
            .bind(todo_id)
            .execute(cxn.borrow_connection())
            .await
            .context("trying to remove a todo from the database")?;

        Ok(())
    }
}
