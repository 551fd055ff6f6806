//! Todo List View
//!
//! Loads the collection once, renders the current page and wires the
//! optimistic toggle/delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_api::Todo;

use crate::actions;
use crate::components::create_todo_modal::CreateTodoModal;
use crate::components::pagination::Pagination;
use crate::components::todo_row::TodoRow;
use crate::context::use_api;
use crate::store::{store_clamp_page, store_set_page, use_todo_store, TodoStateStoreFields};

#[component]
pub fn TodoView() -> impl IntoView {
    let store = use_todo_store();
    let api = use_api();

    // Load on mount
    let load_api = api.clone();
    Effect::new(move |_| {
        let api = load_api.clone();
        spawn_local(async move {
            match actions::load_todos(&store, &api).await {
                Ok(count) => log::info!("[TODOS] Loaded {} todos", count),
                Err(e) => log::error!("[TODOS] Failed to load todos: {}", e),
            }
        });
    });

    // Deleting the last row of the last page moves back a page
    Effect::new(move |_| store_clamp_page(&store));

    let toggle_api = api.clone();
    let on_toggle = Callback::new(move |todo_id: i32| {
        let api = toggle_api.clone();
        spawn_local(async move {
            if let Err(e) = actions::toggle_completed(&store, &api, todo_id).await {
                log::error!("[TODOS] Failed to update todo {}: {}", todo_id, e);
            }
        });
    });

    let on_delete = Callback::new(move |todo_id: i32| {
        let api = api.clone();
        spawn_local(async move {
            if let Err(e) = actions::delete_todo(&store, &api, todo_id).await {
                log::error!("[TODOS] Failed to delete todo {}: {}", todo_id, e);
            }
        });
    });

    let on_create = Callback::new(move |todo: Todo| actions::merge_created(&store, todo));
    let on_update = Callback::new(move |todo: Todo| actions::merge_edited(&store, todo));
    let on_page = Callback::new(move |page: usize| store_set_page(&store, page));

    let visible = move || {
        let page = store.page().get();
        store.list().read().page(page).to_vec()
    };
    let page_count = Signal::derive(move || store.list().read().page_count());
    let current_page = Signal::derive(move || store.page().get());

    view! {
        <div class="todo-view">
            <CreateTodoModal on_create=on_create />
            <Show
                when=move || !store.list().read().is_empty()
                fallback=|| view! { <div class="empty-state">"No todos"</div> }
            >
                <ul class="todo-list">
                    <For
                        each=visible
                        key=|todo| (todo.todo_id, todo.completed, todo.title.clone(), todo.description.clone())
                        children=move |todo| view! {
                            <TodoRow
                                todo=todo
                                on_toggle=on_toggle
                                on_delete=on_delete
                                on_update=on_update
                            />
                        }
                    />
                </ul>
            </Show>
            <Pagination count=page_count page=current_page on_change=on_page />
        </div>
    }
}
