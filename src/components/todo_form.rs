//! Todo Form
//!
//! Title / description / completed fields shared by the create and edit modals.

use leptos::prelude::*;
use todo_api::{NewTodo, Todo};

/// Transient form state. Values are sent as typed; nothing is validated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TodoDraft {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Prefill from an existing item
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone().unwrap_or_default(),
            description: todo.description.clone().unwrap_or_default(),
            completed: todo.completed,
        }
    }

    pub fn to_new_todo(&self) -> NewTodo {
        NewTodo {
            title: self.title.clone(),
            description: Some(self.description.clone()),
            completed: self.completed,
        }
    }

    /// Full replacement of the mutable fields; id and timestamp are kept
    pub fn apply_to(&self, todo: &Todo) -> Todo {
        Todo {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            completed: self.completed,
            ..todo.clone()
        }
    }
}

#[component]
pub fn TodoForm(
    draft: RwSignal<TodoDraft>,
    loading: ReadSignal<bool>,
    #[prop(into)] on_submit: Callback<TodoDraft>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(draft.get());
    };

    view! {
        <form class="todo-form" on:submit=submit>
            <label class="field">
                <span>"Title"</span>
                <input
                    type="text"
                    name="title"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span>"Description"</span>
                <input
                    type="text"
                    name="description"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                />
            </label>
            <input
                type="checkbox"
                name="completed"
                aria-label="completed"
                prop:checked=move || draft.with(|d| d.completed)
                on:change=move |ev| draft.update(|d| d.completed = event_target_checked(&ev))
            />
            <button type="submit" class="submit-btn" disabled=move || loading.get()>
                {move || if loading.get() { "Loading..." } else { "Submit" }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Todo {
        Todo {
            todo_id: 5,
            title: Some("Old".into()),
            description: None,
            created_at: Some("2023-10-31".into()),
            completed: false,
        }
    }

    #[test]
    fn test_from_todo_fills_nulls_with_empty() {
        let draft = TodoDraft::from_todo(&existing());
        assert_eq!(draft.title, "Old");
        assert_eq!(draft.description, "");
        assert!(!draft.completed);
    }

    #[test]
    fn test_to_new_todo() {
        let draft = TodoDraft {
            title: "Buy milk".into(),
            description: "2 litres".into(),
            completed: true,
        };
        assert_eq!(
            draft.to_new_todo(),
            NewTodo {
                title: "Buy milk".into(),
                description: Some("2 litres".into()),
                completed: true,
            }
        );
    }

    #[test]
    fn test_apply_keeps_identity() {
        let draft = TodoDraft {
            title: "New".into(),
            description: "desc".into(),
            completed: true,
        };
        let edited = draft.apply_to(&existing());

        assert_eq!(edited.todo_id, 5);
        assert_eq!(edited.created_at.as_deref(), Some("2023-10-31"));
        assert_eq!(edited.title.as_deref(), Some("New"));
        assert_eq!(edited.description.as_deref(), Some("desc"));
        assert!(edited.completed);
    }

    #[test]
    fn test_blank_submits_empty_strings() {
        let new = TodoDraft::blank().to_new_todo();
        assert_eq!(new.title, "");
        assert_eq!(new.description.as_deref(), Some(""));
        assert!(!new.completed);
    }
}
