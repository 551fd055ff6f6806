//! Edit Todo Modal
//!
//! Edit button plus a modal form prefilled from the item; submits a full PUT.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_api::{Todo, TodoApi};

use crate::components::modal::Modal;
use crate::components::todo_form::{TodoDraft, TodoForm};
use crate::context::use_api;

#[component]
pub fn EditTodoModal(todo: Todo, #[prop(into)] on_update: Callback<Todo>) -> impl IntoView {
    let api = use_api();
    let (open, set_open) = signal(false);
    let (loading, set_loading) = signal(false);
    let draft = RwSignal::new(TodoDraft::from_todo(&todo));

    let original = todo.clone();
    let submit = Callback::new(move |form: TodoDraft| {
        let api = api.clone();
        let edited = form.apply_to(&original);
        set_loading.set(true);
        spawn_local(async move {
            match api.update_todo(&edited).await {
                Ok(_) => on_update.run(edited),
                Err(e) => log::error!("[TODOS] Failed to update todo {}: {}", edited.todo_id, e),
            }
            set_loading.set(false);
            set_open.set(false);
        });
    });

    view! {
        <div class="edit-todo">
            <button
                class="icon-btn edit-btn"
                aria-label="Edit todo"
                on:click=move |_| {
                    draft.set(TodoDraft::from_todo(&todo));
                    set_open.set(true);
                }
            >
                "✎"
            </button>
            <Modal open=open on_close=move |_: ()| set_open.set(false) title="Edit Todo">
                <TodoForm draft=draft loading=loading on_submit=submit />
            </Modal>
        </div>
    }
}
