//! List Actions
//!
//! Optimistic mutations: the local list changes first, then the backend is told.
//! A failed call is reported to the caller but never rolled back locally.

use todo_api::{ApiError, Todo, TodoApi};

use crate::todo_list::TodoList;

/// Mutable access to the working list
pub trait ListHandle {
    fn update_list<R>(&self, f: impl FnOnce(&mut TodoList) -> R) -> R;
}

/// Replace the working list with the backend collection. Returns the item count.
pub async fn load_todos<L, A>(list: &L, api: &A) -> Result<usize, ApiError>
where
    L: ListHandle,
    A: TodoApi + ?Sized,
{
    let fetched = api.list_todos().await?;
    let count = list.update_list(|l| {
        *l = TodoList::from_fetched(fetched);
        l.len()
    });
    Ok(count)
}

/// Flip completion locally, then PUT the full mutated item
pub async fn toggle_completed<L, A>(list: &L, api: &A, todo_id: i32) -> Result<(), ApiError>
where
    L: ListHandle,
    A: TodoApi + ?Sized,
{
    let Some(updated) = list.update_list(|l| l.toggle_completed(todo_id)) else {
        log::warn!("[TODOS] toggle: todo {} is not in the list", todo_id);
        return Ok(());
    };
    api.update_todo(&updated).await?;
    Ok(())
}

/// Drop the item locally, then DELETE it on the backend
pub async fn delete_todo<L, A>(list: &L, api: &A, todo_id: i32) -> Result<(), ApiError>
where
    L: ListHandle,
    A: TodoApi + ?Sized,
{
    if list.update_list(|l| l.remove(todo_id)).is_none() {
        log::debug!("[TODOS] delete: todo {} was not listed locally", todo_id);
    }
    api.delete_todo(todo_id).await
}

/// Put a freshly created item at the top without re-fetching
pub fn merge_created<L: ListHandle>(list: &L, todo: Todo) {
    list.update_list(|l| l.prepend(todo));
}

/// Merge an item saved from the edit form
pub fn merge_edited<L: ListHandle>(list: &L, todo: Todo) {
    let todo_id = todo.todo_id;
    if !list.update_list(|l| l.replace(todo)) {
        log::warn!("[TODOS] edit: todo {} is no longer listed", todo_id);
    }
}
