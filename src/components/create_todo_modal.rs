//! Create Todo Modal
//!
//! Add button plus a modal form that POSTs a new item.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_api::{Todo, TodoApi};

use crate::components::modal::Modal;
use crate::components::todo_form::{TodoDraft, TodoForm};
use crate::context::use_api;

#[component]
pub fn CreateTodoModal(#[prop(into)] on_create: Callback<Todo>) -> impl IntoView {
    let api = use_api();
    let (open, set_open) = signal(false);
    let (loading, set_loading) = signal(false);
    let draft = RwSignal::new(TodoDraft::blank());

    let submit = Callback::new(move |form: TodoDraft| {
        let api = api.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api.create_todo(&form.to_new_todo()).await {
                Ok(created) => {
                    log::info!("[TODOS] Created todo {}", created.todo_id);
                    on_create.run(created);
                }
                Err(e) => log::error!("[TODOS] Failed to create todo: {}", e),
            }
            set_loading.set(false);
            set_open.set(false);
        });
    });

    view! {
        <div class="create-todo">
            <button
                class="icon-btn add-btn"
                aria-label="Create todo"
                on:click=move |_| {
                    draft.set(TodoDraft::blank());
                    set_open.set(true);
                }
            >
                "+"
            </button>
            <Modal open=open on_close=move |_: ()| set_open.set(false) title="Create Todo">
                <TodoForm draft=draft loading=loading on_submit=submit />
            </Modal>
        </div>
    }
}
