use crate::errors::{AppError, AppResult};
use crate::models::{Todo, TodoDocument};
use uuid::Uuid;

pub const MAX_NAME_CHARS: usize = 500;

pub fn normalize_name(raw: &str) -> AppResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Todo name must not be empty".to_string()));
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(AppError::Validation(format!(
            "Todo name must be at most {} characters",
            MAX_NAME_CHARS
        )));
    }
    Ok(name.to_string())
}

impl TodoDocument {
    pub fn add(&mut self, name: &str) -> AppResult<Todo> {
        let name = normalize_name(name)?;
        let mut id = Uuid::new_v4().to_string();
        while self.find_by_id(&id).is_some() {
            id = Uuid::new_v4().to_string();
        }

        let todo = Todo {
            id,
            name,
            completed: false,
        };
        self.todos.push(todo.clone());
        Ok(todo)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    fn find_by_id_mut(&mut self, id: &str) -> AppResult<&mut Todo> {
        self.todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    pub fn toggle(&mut self, id: &str) -> AppResult<Todo> {
        let todo = self.find_by_id_mut(id)?;
        todo.completed = !todo.completed;
        Ok(todo.clone())
    }

    pub fn rename(&mut self, id: &str, name: &str) -> AppResult<Todo> {
        let todo = self.find_by_id_mut(id)?;
        todo.name = normalize_name(name)?;
        Ok(todo.clone())
    }

    pub fn remove(&mut self, id: &str) -> AppResult<Todo> {
        let Some(index) = self.todos.iter().position(|todo| todo.id == id) else {
            return Err(AppError::NotFound(id.to_string()));
        };
        Ok(self.todos.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_name, MAX_NAME_CHARS};
    use crate::errors::AppError;
    use crate::models::TodoDocument;
    use std::collections::HashSet;

    fn assert_unique_ids(document: &TodoDocument) {
        let ids: HashSet<&str> = document.todos.iter().map(|todo| todo.id.as_str()).collect();
        assert_eq!(ids.len(), document.todos.len(), "duplicate todo ids");
    }

    #[test]
    fn add_appends_active_todo_with_fresh_id() {
        let mut document = TodoDocument::default();
        let first = document.add("Buy milk").expect("add first");
        let second = document.add("  Walk the dog  ").expect("add second");

        assert!(!first.completed);
        assert_ne!(first.id, second.id);
        assert_eq!(second.name, "Walk the dog");
        assert_eq!(document.todos.last().map(|todo| todo.id.as_str()), Some(second.id.as_str()));
    }

    #[test]
    fn find_by_id_reports_missing_as_none() {
        let mut document = TodoDocument::default();
        let todo = document.add("Buy milk").expect("add");
        assert_eq!(document.find_by_id(&todo.id), Some(&todo));
        assert!(document.find_by_id("missing").is_none());
    }

    #[test]
    fn toggling_twice_restores_completed_flag() {
        let mut document = TodoDocument::default();
        let todo = document.add("Buy milk").expect("add");

        assert!(document.toggle(&todo.id).expect("first toggle").completed);
        assert!(!document.toggle(&todo.id).expect("second toggle").completed);
    }

    #[test]
    fn toggling_unknown_id_leaves_document_unchanged() {
        let mut document = TodoDocument::default();
        document.add("Buy milk").expect("add");
        let before = document.clone();

        let error = document.toggle("missing").expect_err("unknown id");
        assert!(matches!(error, AppError::NotFound(_)));
        assert_eq!(document, before);
    }

    #[test]
    fn rename_overwrites_name_and_keeps_completion() {
        let mut document = TodoDocument::default();
        let todo = document.add("Buy milk").expect("add");
        document.toggle(&todo.id).expect("toggle");

        let renamed = document.rename(&todo.id, "Buy oat milk").expect("rename");
        assert_eq!(renamed.name, "Buy oat milk");
        assert!(renamed.completed);
        assert_eq!(renamed.id, todo.id);
    }

    #[test]
    fn rename_rejects_blank_name_without_mutation() {
        let mut document = TodoDocument::default();
        let todo = document.add("Buy milk").expect("add");

        let error = document.rename(&todo.id, "   ").expect_err("blank rename");
        assert!(matches!(error, AppError::Validation(_)));
        assert_eq!(document.todos[0].name, "Buy milk");
    }

    #[test]
    fn rename_unknown_id_is_not_found() {
        let mut document = TodoDocument::default();
        let error = document.rename("missing", "Anything").expect_err("unknown id");
        assert!(matches!(error, AppError::NotFound(_)));

        let error = document.rename("missing", "   ").expect_err("unknown id with blank name");
        assert!(matches!(error, AppError::NotFound(_)));
    }

    #[test]
    fn remove_deletes_exactly_the_matching_entry() {
        let mut document = TodoDocument::default();
        let first = document.add("one").expect("add one");
        let second = document.add("two").expect("add two");
        let third = document.add("three").expect("add three");

        let removed = document.remove(&second.id).expect("remove");
        assert_eq!(removed.id, second.id);
        assert_eq!(document.todos.len(), 2);
        assert_eq!(document.todos[0].id, first.id);
        assert_eq!(document.todos[1].id, third.id);

        let error = document.remove(&second.id).expect_err("second remove");
        assert!(matches!(error, AppError::NotFound(_)));
        assert_eq!(document.todos.len(), 2);
    }

    #[test]
    fn ids_stay_unique_across_mixed_operations() {
        let mut document = TodoDocument::default();
        let mut ids = Vec::new();
        for index in 0..50 {
            let todo = document.add(&format!("todo {}", index)).expect("add");
            ids.push(todo.id);
            assert_unique_ids(&document);
        }
        for id in ids.iter().step_by(3) {
            document.toggle(id).expect("toggle");
            assert_unique_ids(&document);
        }
        for id in ids.iter().step_by(4) {
            document.rename(id, "renamed").expect("rename");
            document.remove(id).expect("remove");
            assert_unique_ids(&document);
        }
        document.add("late arrival").expect("add after removals");
        assert_unique_ids(&document);
    }

    #[test]
    fn name_length_is_bounded() {
        assert!(normalize_name(&"x".repeat(MAX_NAME_CHARS)).is_ok());
        let error = normalize_name(&"x".repeat(MAX_NAME_CHARS + 1)).expect_err("too long");
        assert!(matches!(error, AppError::Validation(_)));
    }
}
