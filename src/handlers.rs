use crate::errors::AppResult;
use crate::models::{Filter, Todo};
use crate::service::TodoService;
use crate::views;
use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<TodoService>,
    pub create_delay: Duration,
}

impl AppState {
    pub fn new(todos: Arc<TodoService>, create_delay: Duration) -> Self {
        Self { todos, create_delay }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoForm {
    #[serde(default)]
    pub todo: String,
    #[serde(default)]
    pub filter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RenameTodoForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub filter: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_todos))
        .route("/todos", post(create_todo))
        .route(
            "/todos/:id",
            get(get_todo)
                .patch(toggle_todo)
                .put(rename_todo)
                .delete(delete_todo),
        )
        .route("/todos/:id/edit", get(edit_todo))
        .with_state(state)
}

async fn list_todos(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> AppResult<Html<String>> {
    let filter = Filter::from_param(query.filter.as_deref())?;
    let listing = state.todos.listing(filter).await;
    Ok(Html(views::render_page(&listing)?))
}

async fn create_todo(
    State(state): State<AppState>,
    Form(form): Form<CreateTodoForm>,
) -> AppResult<Html<String>> {
    let filter = Filter::from_param(form.filter.as_deref())?;
    let (_, listing) = state.todos.create(&form.todo, filter).await?;

    if !state.create_delay.is_zero() {
        tokio::time::sleep(state.create_delay).await;
    }

    Ok(Html(views::render_todos(&listing)?))
}

async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<FilterQuery>,
) -> AppResult<Html<String>> {
    let (_, filter) = resolve(&state, &id, query.filter.as_deref()).await?;
    let (_, listing) = state.todos.toggle(&id, filter).await?;
    Ok(Html(views::render_todos(&listing)?))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<FilterQuery>,
) -> AppResult<Html<String>> {
    let (_, filter) = resolve(&state, &id, query.filter.as_deref()).await?;
    let (_, counts) = state.todos.remove(&id, filter).await?;
    Ok(Html(views::render_filters(&counts)?))
}

async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<FilterQuery>,
) -> AppResult<Html<String>> {
    let (todo, filter) = resolve(&state, &id, query.filter.as_deref()).await?;
    Ok(Html(views::render_item(&todo, filter)?))
}

async fn edit_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<FilterQuery>,
) -> AppResult<Html<String>> {
    let (todo, filter) = resolve(&state, &id, query.filter.as_deref()).await?;
    Ok(Html(views::render_edit(&todo, filter)?))
}

async fn rename_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Option<Form<RenameTodoForm>>,
) -> AppResult<Html<String>> {
    let form = form.map(|Form(form)| form).unwrap_or_default();
    let (_, filter) = resolve(&state, &id, form.filter.as_deref()).await?;
    let todo = state.todos.rename(&id, &form.name).await?;
    Ok(Html(views::render_item(&todo, filter)?))
}

// An unknown id answers 404 before any filter or body validation runs.
async fn resolve(state: &AppState, id: &str, filter: Option<&str>) -> AppResult<(Todo, Filter)> {
    let todo = state.todos.get(id).await?;
    Ok((todo, Filter::from_param(filter)?))
}
