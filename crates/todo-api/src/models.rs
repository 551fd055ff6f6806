//! Wire Models
//!
//! Data structures matching the backend's JSON payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Todo item as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub todo_id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Opaque server timestamp, never parsed on the client
    #[serde(alias = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub completed: bool,
}

impl Todo {
    /// Copy of this item with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// Payload for `POST /api/todos`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is(&self, expected: &str) -> bool {
        self.message.as_deref() == Some(expected)
    }
}

// The backend stores `completed` as a nullable column.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_backend_todo() {
        let todo: Todo = serde_json::from_value(json!({
            "todo_id": 3,
            "title": "Write docs",
            "description": null,
            "created_at": "2023-10-31T12:00:00",
            "completed": true
        }))
        .unwrap();

        assert_eq!(todo.todo_id, 3);
        assert_eq!(todo.title.as_deref(), Some("Write docs"));
        assert_eq!(todo.description, None);
        assert_eq!(todo.created_at.as_deref(), Some("2023-10-31T12:00:00"));
        assert!(todo.completed);
    }

    #[test]
    fn test_decode_null_and_missing_fields() {
        let todo: Todo = serde_json::from_value(json!({
            "todo_id": 1,
            "title": null,
            "description": "d",
            "completed": null
        }))
        .unwrap();

        assert!(!todo.completed);
        assert_eq!(todo.created_at, None);
        assert_eq!(todo.title, None);
    }

    #[test]
    fn test_decode_camel_case_timestamp() {
        let todo: Todo = serde_json::from_value(json!({
            "todo_id": 1,
            "title": "a",
            "description": null,
            "createdAt": "2023-10-31",
            "completed": false
        }))
        .unwrap();

        assert_eq!(todo.created_at.as_deref(), Some("2023-10-31"));
    }

    #[test]
    fn test_toggled_keeps_other_fields() {
        let todo = Todo {
            todo_id: 9,
            title: Some("t".into()),
            description: Some("d".into()),
            created_at: Some("now".into()),
            completed: false,
        };
        let flipped = todo.toggled();

        assert!(flipped.completed);
        assert_eq!(flipped.todo_id, 9);
        assert_eq!(flipped.title, todo.title);
        assert_eq!(flipped.created_at, todo.created_at);
        assert_eq!(flipped.toggled(), todo);
    }

    #[test]
    fn test_health_status_match() {
        let ok = HealthStatus { message: Some("Everything is working fine".into()) };
        assert!(ok.is("Everything is working fine"));
        assert!(!ok.is("everything is working fine"));
        assert!(!HealthStatus::default().is("Everything is working fine"));
    }
}
