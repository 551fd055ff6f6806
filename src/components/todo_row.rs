//! Todo Row Component
//!
//! One item: status toggle, edit, delete, title and description.

use leptos::prelude::*;
use todo_api::Todo;

use crate::components::edit_todo_modal::EditTodoModal;

#[component]
pub fn TodoRow(
    todo: Todo,
    #[prop(into)] on_toggle: Callback<i32>,
    #[prop(into)] on_delete: Callback<i32>,
    #[prop(into)] on_update: Callback<Todo>,
) -> impl IntoView {
    let id = todo.todo_id;
    let completed = todo.completed;
    let title = todo.title.clone().unwrap_or_default();
    let description = todo.description.clone().unwrap_or_default();

    view! {
        <li class=if completed { "todo-row completed" } else { "todo-row" }>
            <div class="todo-header">
                <div class="todo-actions">
                    <button
                        class="icon-btn status-btn"
                        aria-label=if completed { "Mark as open" } else { "Mark as done" }
                        on:click=move |_| on_toggle.run(id)
                    >
                        {if completed { "↺" } else { "✓" }}
                    </button>
                    <span class="todo-status">{if completed { "Done" } else { "Open" }}</span>
                    <EditTodoModal todo=todo on_update=on_update />
                    <button
                        class="icon-btn delete-btn"
                        aria-label="Delete todo"
                        on:click=move |_| on_delete.run(id)
                    >
                        "×"
                    </button>
                </div>
                <h3 class="todo-title">{title}</h3>
            </div>
            <p class="todo-description">{description}</p>
        </li>
    }
}
