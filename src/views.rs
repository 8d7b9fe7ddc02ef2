use crate::errors::AppResult;
use crate::models::{Filter, FilterCount, Todo};
use crate::service::TodoListing;
use askama::Template;

const PAGE_TITLE: &str = "Todos";

#[derive(Template)]
#[template(path = "layout.html")]
struct LayoutTemplate<'a> {
    title: &'a str,
    content: &'a str,
}

#[derive(Template)]
#[template(path = "todos.html")]
struct TodosTemplate<'a> {
    todos: &'a [Todo],
    filters: &'a [FilterCount],
    filter: Filter,
}

#[derive(Template)]
#[template(path = "filters.html")]
struct FiltersTemplate<'a> {
    filters: &'a [FilterCount],
}

#[derive(Template)]
#[template(path = "todo_item.html")]
struct TodoItemTemplate<'a> {
    todo: &'a Todo,
    filter: Filter,
}

#[derive(Template)]
#[template(path = "todo_edit.html")]
struct TodoEditTemplate<'a> {
    todo: &'a Todo,
    filter: Filter,
}

pub fn render_page(listing: &TodoListing) -> AppResult<String> {
    let content = render_todos(listing)?;
    let page = LayoutTemplate {
        title: PAGE_TITLE,
        content: &content,
    };
    Ok(page.render()?)
}

pub fn render_todos(listing: &TodoListing) -> AppResult<String> {
    let template = TodosTemplate {
        todos: &listing.todos,
        filters: &listing.counts,
        filter: listing.filter,
    };
    Ok(template.render()?)
}

pub fn render_filters(counts: &[FilterCount]) -> AppResult<String> {
    Ok(FiltersTemplate { filters: counts }.render()?)
}

pub fn render_item(todo: &Todo, filter: Filter) -> AppResult<String> {
    Ok(TodoItemTemplate { todo, filter }.render()?)
}

pub fn render_edit(todo: &Todo, filter: Filter) -> AppResult<String> {
    Ok(TodoEditTemplate { todo, filter }.render()?)
}
