// ============================================================================
// MARKETPLACE API - Contrato de la capa de datos (mock o REST)
// ============================================================================

use std::rc::Rc;
use async_trait::async_trait;
use crate::error::ApiResult;
use crate::models::{
    AuthResponse, Credentials, Item, ItemDraft, ItemFilter, ItemId, ItemPage, RegisterForm, Task,
    TaskId, TaskScope, User, UserId, UserStats,
};

/// Operaciones remotas usadas por las vistas. `?Send`: todo corre en el hilo del navegador.
#[async_trait(?Send)]
pub trait MarketplaceApi {
    // --- Auth ---
    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResponse>;
    async fn register(&self, form: &RegisterForm) -> ApiResult<AuthResponse>;
    /// Usuario del token actual
    async fn me(&self, token: &str) -> ApiResult<User>;

    // --- Items ---
    async fn list_items(&self, filter: &ItemFilter) -> ApiResult<ItemPage>;
    async fn my_items(&self) -> ApiResult<Vec<Item>>;
    async fn get_item(&self, id: ItemId) -> ApiResult<Item>;
    async fn create_item(&self, draft: &ItemDraft) -> ApiResult<Item>;
    async fn buy_item(&self, id: ItemId) -> ApiResult<Item>;
    async fn donate_item(&self, id: ItemId) -> ApiResult<Item>;

    // --- Tasks (recogidas) ---
    async fn list_tasks(&self, scope: TaskScope) -> ApiResult<Vec<Task>>;
    async fn get_task(&self, id: TaskId) -> ApiResult<Task>;
    async fn assign_task(&self, id: TaskId) -> ApiResult<Task>;
    async fn progress_task(&self, id: TaskId) -> ApiResult<Task>;
    async fn cancel_task(&self, id: TaskId) -> ApiResult<Task>;

    // --- Users ---
    async fn user_stats(&self, id: UserId) -> ApiResult<UserStats>;
}

/// Handle compartido para el contexto de Yew (igualdad por puntero)
#[derive(Clone)]
pub struct ApiHandle(Rc<dyn MarketplaceApi>);

impl ApiHandle {
    pub fn new<A: MarketplaceApi + 'static>(api: A) -> Self {
        Self(Rc::new(api))
    }

    pub fn api(&self) -> Rc<dyn MarketplaceApi> {
        self.0.clone()
    }
}

impl std::ops::Deref for ApiHandle {
    type Target = dyn MarketplaceApi;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for ApiHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for ApiHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiHandle")
    }
}
