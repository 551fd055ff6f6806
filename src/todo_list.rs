//! Working Todo List
//!
//! In-memory list behind the list view plus slice-based pagination.

use std::ops::Range;

use todo_api::Todo;

/// Rows per page
pub const PAGE_SIZE: usize = 10;

/// Client-side copy of the backend collection, newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    /// Build from a `GET /api/todos` response.
    ///
    /// The backend order is reversed so recent inserts come first. That order is
    /// whatever the backend returns; ids are not assumed to be monotonic.
    pub fn from_fetched(mut todos: Vec<Todo>) -> Self {
        todos.reverse();
        Self { todos }
    }

    #[cfg(test)]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn prepend(&mut self, todo: Todo) {
        self.todos.insert(0, todo);
    }

    /// Flip one item's completion flag, returning the full mutated item
    pub fn toggle_completed(&mut self, todo_id: i32) -> Option<Todo> {
        let todo = self.todos.iter_mut().find(|t| t.todo_id == todo_id)?;
        *todo = todo.toggled();
        Some(todo.clone())
    }

    /// Swap in an edited item by id. Returns false if it is no longer listed.
    pub fn replace(&mut self, updated: Todo) -> bool {
        match self.todos.iter_mut().find(|t| t.todo_id == updated.todo_id) {
            Some(todo) => {
                *todo = updated;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, todo_id: i32) -> Option<Todo> {
        let index = self.todos.iter().position(|t| t.todo_id == todo_id)?;
        Some(self.todos.remove(index))
    }

    /// Rows shown on 1-based `page`
    pub fn page(&self, page: usize) -> &[Todo] {
        &self.todos[page_range(self.todos.len(), page)]
    }

    pub fn page_count(&self) -> usize {
        self.todos.len().div_ceil(PAGE_SIZE)
    }
}

/// Index range `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)` clipped to `len`
pub fn page_range(len: usize, page: usize) -> Range<usize> {
    if page == 0 {
        return 0..0;
    }
    let start = ((page - 1) * PAGE_SIZE).min(len);
    let end = (page * PAGE_SIZE).min(len);
    start..end
}

/// Keep `page` within `1..=page_count` (page 1 when the list is empty)
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: i32) -> Todo {
        Todo {
            todo_id: id,
            title: Some(format!("Todo {}", id)),
            description: Some(format!("Description {}", id)),
            created_at: Some("2023-10-31".to_string()),
            completed: false,
        }
    }

    fn make_list(n: i32) -> TodoList {
        TodoList::from_fetched((1..=n).map(make_todo).collect())
    }

    fn ids(todos: &[Todo]) -> Vec<i32> {
        todos.iter().map(|t| t.todo_id).collect()
    }

    #[test]
    fn test_load_reverses_order() {
        let list = TodoList::from_fetched(vec![make_todo(3), make_todo(8), make_todo(5)]);
        assert_eq!(ids(list.todos()), vec![5, 8, 3]);
    }

    #[test]
    fn test_pagination() {
        let list = make_list(25);

        assert_eq!(list.page_count(), 3);
        assert_eq!(list.page(1).len(), 10);
        assert_eq!(list.page(3).len(), 5);
        // Newest first: page 1 starts with the last fetched item
        assert_eq!(list.page(1)[0].todo_id, 25);
        assert_eq!(ids(list.page(2)), (6..=15).rev().collect::<Vec<_>>());
        assert!(list.page(4).is_empty());
        assert!(list.page(0).is_empty());
    }

    #[test]
    fn test_page_count_boundaries() {
        assert_eq!(make_list(0).page_count(), 0);
        assert_eq!(make_list(1).page_count(), 1);
        assert_eq!(make_list(10).page_count(), 1);
        assert_eq!(make_list(11).page_count(), 2);
    }

    #[test]
    fn test_page_range() {
        assert_eq!(page_range(15, 1), 0..10);
        assert_eq!(page_range(15, 2), 10..15);
        assert_eq!(page_range(15, 3), 15..15);
        assert_eq!(page_range(0, 1), 0..0);
    }

    #[test]
    fn test_prepend() {
        let mut list = make_list(3);
        list.prepend(make_todo(99));

        assert_eq!(list.len(), 4);
        assert_eq!(list.todos()[0].todo_id, 99);
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut list = make_list(3);
        let updated = list.toggle_completed(2).unwrap();

        assert!(updated.completed);
        assert_eq!(updated.todo_id, 2);
        assert_eq!(updated.title.as_deref(), Some("Todo 2"));
        for todo in list.todos() {
            assert_eq!(todo.completed, todo.todo_id == 2);
        }

        let back = list.toggle_completed(2).unwrap();
        assert!(!back.completed);
    }

    #[test]
    fn test_toggle_missing() {
        let mut list = make_list(2);
        assert!(list.toggle_completed(42).is_none());
        assert!(list.todos().iter().all(|t| !t.completed));
    }

    #[test]
    fn test_remove_exactly_one() {
        let mut list = make_list(5);
        let removed = list.remove(3).unwrap();

        assert_eq!(removed.todo_id, 3);
        assert_eq!(ids(list.todos()), vec![5, 4, 2, 1]);
        assert!(list.remove(3).is_none());
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_replace() {
        let mut list = make_list(2);
        let mut edited = make_todo(1);
        edited.title = Some("Edited".into());
        edited.completed = true;

        assert!(list.replace(edited.clone()));
        assert_eq!(list.todos()[1], edited);
        assert!(!list.replace(make_todo(77)));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(3, 2), 2);
        assert_eq!(clamp_page(0, 2), 1);
        assert_eq!(clamp_page(2, 0), 1);
        assert_eq!(clamp_page(2, 5), 2);
    }
}
