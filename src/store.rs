//! List View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions::ListHandle;
use crate::todo_list::{clamp_page, TodoList};

/// State behind the todo list view
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Working list, newest first
    pub list: TodoList,
    /// Current 1-based page
    pub page: usize,
}

impl TodoState {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

impl ListHandle for TodoStore {
    fn update_list<R>(&self, f: impl FnOnce(&mut TodoList) -> R) -> R {
        let field = self.list();
        let mut list = field.write();
        f(&mut *list)
    }
}

// ========================
// Store Helper Functions
// ========================

/// Move to `page`, kept within the current page count
pub fn store_set_page(store: &TodoStore, page: usize) {
    let page_count = store.list().read().page_count();
    *store.page().write() = clamp_page(page, page_count);
}

/// Pull the current page back in range after the list shrank
pub fn store_clamp_page(store: &TodoStore) {
    let page_count = store.list().read().page_count();
    let current = store.page().get_untracked();
    let clamped = clamp_page(current, page_count);
    if clamped != current {
        *store.page().write() = clamped;
    }
}
