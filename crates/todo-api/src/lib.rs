//! Todo Backend API
//!
//! Wire models and a thin HTTP client for the todo REST backend.

mod client;
mod error;
mod models;

pub use client::{HttpTodoApi, TodoApi};
pub use error::ApiError;
pub use models::{HealthStatus, NewTodo, Todo};
