// ============================================================================
// REST API - MarketplaceApi sobre HTTP (gloo-net)
// ============================================================================
// Solo comunicación HTTP: nada de lógica de negocio aquí.
// ============================================================================

use std::rc::Rc;
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use crate::error::{ApiError, ApiResult};
use crate::models::{
    AuthResponse, Credentials, Item, ItemDraft, ItemFilter, ItemId, ItemPage, RegisterForm, Task,
    TaskId, TaskScope, User, UserId, UserStats,
};
use crate::services::api::MarketplaceApi;
use crate::services::token_store::TokenStore;

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

#[derive(Deserialize)]
struct ItemEnvelope {
    item: Item,
}

#[derive(Deserialize)]
struct ItemsEnvelope {
    items: Vec<Item>,
}

#[derive(Deserialize)]
struct TaskEnvelope {
    task: Task,
}

#[derive(Deserialize)]
struct TasksEnvelope {
    tasks: Vec<Task>,
}

#[derive(Deserialize)]
struct StatsEnvelope {
    stats: UserStats,
}

/// Cuerpo de error del backend: `{ "message": "..." }`
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default, alias = "detail")]
    message: Option<String>,
}

#[derive(Clone)]
pub struct RestApi {
    base_url: String,
    store: Rc<dyn TokenStore>,
}

impl RestApi {
    pub fn new(base_url: impl Into<String>, store: Rc<dyn TokenStore>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_token(builder: RequestBuilder, token: Option<String>) -> RequestBuilder {
        match token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&'static str, String)]) -> ApiResult<T> {
        let builder = Request::get(&self.url(path))
            .query(query.iter().map(|(key, value)| (*key, value.as_str())));
        let response = Self::with_token(builder, self.store.token())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(path, response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let request = Self::with_token(Request::post(&self.url(path)), self.store.token())
            .json(body)
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(path, response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = Self::with_token(Request::post(&self.url(path)), self.store.token())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(path, response).await
    }
}

async fn read_json<T: DeserializeOwned>(path: &str, response: Response) -> ApiResult<T> {
    if !response.ok() {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| response.status_text());
        log::error!("❌ [API] {} -> HTTP {}: {}", path, status, message);
        return Err(if status == 401 {
            ApiError::Unauthenticated
        } else {
            ApiError::http(status, message)
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[async_trait(?Send)]
impl MarketplaceApi for RestApi {
    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        self.post("/auth/login", credentials).await
    }

    async fn register(&self, form: &RegisterForm) -> ApiResult<AuthResponse> {
        self.post("/auth/register", form).await
    }

    async fn me(&self, token: &str) -> ApiResult<User> {
        let path = "/auth/me";
        let response = Self::with_token(Request::get(&self.url(path)), Some(token.to_string()))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json::<UserEnvelope>(path, response).await.map(|envelope| envelope.user)
    }

    async fn list_items(&self, filter: &ItemFilter) -> ApiResult<ItemPage> {
        self.get("/items", &filter.query_pairs()).await
    }

    async fn my_items(&self) -> ApiResult<Vec<Item>> {
        self.get::<ItemsEnvelope>("/items/my", &[]).await.map(|envelope| envelope.items)
    }

    async fn get_item(&self, id: ItemId) -> ApiResult<Item> {
        self.get::<ItemEnvelope>(&format!("/items/{}", id), &[]).await.map(|envelope| envelope.item)
    }

    async fn create_item(&self, draft: &ItemDraft) -> ApiResult<Item> {
        self.post::<_, ItemEnvelope>("/items", draft).await.map(|envelope| envelope.item)
    }

    async fn buy_item(&self, id: ItemId) -> ApiResult<Item> {
        self.post_empty::<ItemEnvelope>(&format!("/items/{}/buy", id)).await.map(|envelope| envelope.item)
    }

    async fn donate_item(&self, id: ItemId) -> ApiResult<Item> {
        self.post_empty::<ItemEnvelope>(&format!("/items/{}/donate", id)).await.map(|envelope| envelope.item)
    }

    async fn list_tasks(&self, scope: TaskScope) -> ApiResult<Vec<Task>> {
        self.get::<TasksEnvelope>("/tasks", &[("type", scope.as_str().to_string())])
            .await
            .map(|envelope| envelope.tasks)
    }

    async fn get_task(&self, id: TaskId) -> ApiResult<Task> {
        self.get::<TaskEnvelope>(&format!("/tasks/{}", id), &[]).await.map(|envelope| envelope.task)
    }

    async fn assign_task(&self, id: TaskId) -> ApiResult<Task> {
        self.post_empty::<TaskEnvelope>(&format!("/tasks/{}/assign", id)).await.map(|envelope| envelope.task)
    }

    async fn progress_task(&self, id: TaskId) -> ApiResult<Task> {
        self.post_empty::<TaskEnvelope>(&format!("/tasks/{}/progress", id)).await.map(|envelope| envelope.task)
    }

    async fn cancel_task(&self, id: TaskId) -> ApiResult<Task> {
        self.post_empty::<TaskEnvelope>(&format!("/tasks/{}/cancel", id)).await.map(|envelope| envelope.task)
    }

    async fn user_stats(&self, id: UserId) -> ApiResult<UserStats> {
        self.get::<StatsEnvelope>(&format!("/users/{}/stats", id), &[]).await.map(|envelope| envelope.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::token_store::MemoryTokenStore;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = RestApi::new("https://api.scrapcrafters.in/api/", Rc::new(MemoryTokenStore::default()));
        assert_eq!(api.url("/items/3"), "https://api.scrapcrafters.in/api/items/3");
    }

    #[test]
    fn envelopes_match_backend_payloads() {
        let json = r#"{"items":[{"id":101,"title":"Copper Wind Chimes","category":"artwork","price":950,"status":"active"}],"total":1,"pages":1}"#;
        let page: ItemPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.items[0].id, 101);

        let error: ErrorBody = serde_json::from_str(r#"{"detail":"Item not found"}"#).unwrap();
        assert_eq!(error.message.as_deref(), Some("Item not found"));
    }
}
