use crate::models::{Filter, FilterCount, Todo};

pub fn apply(todos: &[Todo], filter: Filter) -> Vec<&Todo> {
    todos.iter().filter(|todo| filter.matches(todo)).collect()
}

pub fn counts(todos: &[Todo], current: Filter) -> Vec<FilterCount> {
    Filter::ALL
        .into_iter()
        .map(|filter| FilterCount {
            filter,
            count: todos.iter().filter(|todo| filter.matches(todo)).count(),
            selected: filter == current,
        })
        .collect()
}
