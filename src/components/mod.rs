//! UI Components
//!
//! Leptos components for the todo list.

mod create_todo_modal;
mod edit_todo_modal;
mod frame;
mod modal;
mod pagination;
mod todo_form;
mod todo_row;
mod todo_view;

pub use frame::Frame;
pub use todo_view::TodoView;
