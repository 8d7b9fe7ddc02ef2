use crate::errors::{AppError, AppResult};
use crate::filter;
use crate::models::{Filter, FilterCount, Todo, TodoDocument};
use crate::store::JsonFileStore;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListing {
    pub todos: Vec<Todo>,
    pub counts: Vec<FilterCount>,
    pub filter: Filter,
}

pub struct TodoService {
    document: Mutex<TodoDocument>,
    store: JsonFileStore,
}

impl TodoService {
    pub async fn open(store: JsonFileStore) -> Self {
        let document = store.load().await;
        tracing::info!(
            path = %store.path().display(),
            count = document.todos.len(),
            "todo store loaded"
        );
        Self::with_document(store, document)
    }

    pub fn with_document(store: JsonFileStore, document: TodoDocument) -> Self {
        Self {
            document: Mutex::new(document),
            store,
        }
    }

    pub async fn listing(&self, filter: Filter) -> TodoListing {
        let document = self.document.lock().await;
        listing_of(&document, filter)
    }

    pub async fn get(&self, id: &str) -> AppResult<Todo> {
        let document = self.document.lock().await;
        document
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    pub async fn create(&self, name: &str, filter: Filter) -> AppResult<(Todo, TodoListing)> {
        let result = self
            .mutate(|document| {
                let todo = document.add(name)?;
                Ok((todo, listing_of(document, filter)))
            })
            .await?;
        tracing::info!(todo_id = %result.0.id, "todo created");
        Ok(result)
    }

    pub async fn toggle(&self, id: &str, filter: Filter) -> AppResult<(Todo, TodoListing)> {
        let result = self
            .mutate(|document| {
                let todo = document.toggle(id)?;
                Ok((todo, listing_of(document, filter)))
            })
            .await?;
        tracing::info!(todo_id = %id, completed = result.0.completed, "todo toggled");
        Ok(result)
    }

    pub async fn rename(&self, id: &str, name: &str) -> AppResult<Todo> {
        let todo = self.mutate(|document| document.rename(id, name)).await?;
        tracing::info!(todo_id = %id, "todo renamed");
        Ok(todo)
    }

    pub async fn remove(&self, id: &str, filter: Filter) -> AppResult<(Todo, Vec<FilterCount>)> {
        let result = self
            .mutate(|document| {
                let todo = document.remove(id)?;
                Ok((todo, filter::counts(&document.todos, filter)))
            })
            .await?;
        tracing::info!(todo_id = %id, "todo deleted");
        Ok(result)
    }

    async fn mutate<T, F>(&self, operation: F) -> AppResult<T>
    where
        F: FnOnce(&mut TodoDocument) -> AppResult<T>,
    {
        let mut document = self.document.lock().await;
        let mut working = document.clone();
        let result = operation(&mut working)?;
        self.store.save(&working).await?;
        *document = working;
        Ok(result)
    }
}

fn listing_of(document: &TodoDocument, filter: Filter) -> TodoListing {
    TodoListing {
        todos: filter::apply(&document.todos, filter).into_iter().cloned().collect(),
        counts: filter::counts(&document.todos, filter),
        filter,
    }
}
