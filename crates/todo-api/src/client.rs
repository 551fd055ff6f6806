//! Todo Backend Client
//!
//! One method per REST call. No retries, no caching, no timeouts.

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{HealthStatus, NewTodo, Todo};

/// Operations the views need from the backend.
///
/// `?Send` because browser futures are bound to the UI thread.
#[async_trait(?Send)]
pub trait TodoApi {
    async fn health(&self) -> Result<HealthStatus, ApiError>;
    async fn list_todos(&self) -> Result<Vec<Todo>, ApiError>;
    async fn get_todo(&self, id: i32) -> Result<Todo, ApiError>;
    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, ApiError>;
    async fn update_todo(&self, todo: &Todo) -> Result<Todo, ApiError>;
    async fn delete_todo(&self, id: i32) -> Result<(), ApiError>;
}

/// reqwest-backed client (uses `fetch` on wasm32)
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    base_url: String,
}

impl HttpTodoApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    pub fn todos_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    pub fn todo_url(&self, id: i32) -> String {
        format!("{}/api/todos/{}", self.base_url, id)
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: String,
        body: Option<&B>,
    ) -> Result<(Response, String), ApiError> {
        log::debug!("{} {}", method, url);
        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => return Err(ApiError::Transport { url, source }),
        };
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method: method_name(&method),
                url,
                status: status.as_u16(),
            });
        }
        Ok((response, url))
    }

    async fn fetch_json<T, B>(
        &self,
        method: Method,
        url: String,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let (response, url) = self.send(method, url, body).await?;
        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }
}

fn method_name(method: &Method) -> &'static str {
    match *method {
        Method::GET => "GET",
        Method::POST => "POST",
        Method::PUT => "PUT",
        Method::DELETE => "DELETE",
        _ => "HTTP",
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.fetch_json(Method::GET, self.health_url(), None::<&()>).await
    }

    async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        self.fetch_json(Method::GET, self.todos_url(), None::<&()>).await
    }

    async fn get_todo(&self, id: i32) -> Result<Todo, ApiError> {
        self.fetch_json(Method::GET, self.todo_url(id), None::<&()>).await
    }

    async fn create_todo(&self, todo: &NewTodo) -> Result<Todo, ApiError> {
        self.fetch_json(Method::POST, self.todos_url(), Some(todo)).await
    }

    async fn update_todo(&self, todo: &Todo) -> Result<Todo, ApiError> {
        self.fetch_json(Method::PUT, self.todo_url(todo.todo_id), Some(todo)).await
    }

    async fn delete_todo(&self, id: i32) -> Result<(), ApiError> {
        // Response body is ignored
        self.send(Method::DELETE, self.todo_url(id), None::<&()>).await?;
        Ok(())
    }
}
