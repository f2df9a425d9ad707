// ============================================================================
// MOCK API - Implementación en memoria de MarketplaceApi
// ============================================================================
// Mismo contrato que el backend REST; los datos salen de mock_data y viven
// mientras dure la pestaña.
// ============================================================================

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;
use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    AuthResponse, Credentials, Item, ItemDraft, ItemFilter, ItemId, ItemPage, ItemStatus,
    RegisterForm, Role, Task, TaskId, TaskScope, TaskStatus, User, UserId, UserStats,
};
use crate::services::api::MarketplaceApi;
use crate::services::mock_data;
use crate::services::token_store::TokenStore;

#[derive(Debug)]
struct Catalog {
    items: Vec<Item>,
    mine: BTreeSet<ItemId>,
    tasks: Vec<Task>,
    sessions: HashMap<String, User>,
    next_user_id: UserId,
}

impl Catalog {
    fn seeded() -> Self {
        let listings = mock_data::user_listings();
        let mine = listings.iter().map(|item| item.id).collect();
        let mut items = mock_data::scrap_items();
        items.extend(mock_data::artworks());
        items.extend(mock_data::sold_artworks());
        items.extend(listings);

        Self {
            items,
            mine,
            tasks: mock_data::helper_tasks(),
            sessions: HashMap::new(),
            next_user_id: 2,
        }
    }

    fn next_item_id(&self) -> ItemId {
        self.items.iter().map(|item| item.id).max().unwrap_or(0) + 1
    }

    fn item_mut(&mut self, id: ItemId) -> ApiResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ApiError::NotFound("Item".to_string()))
    }

    fn task_mut(&mut self, id: TaskId) -> ApiResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| ApiError::NotFound("Task".to_string()))
    }

    fn open_session(&mut self, user: User) -> AuthResponse {
        let token = format!("{}{}-{}", MOCK_TOKEN_PREFIX, user.id, self.sessions.len() + 1);
        self.sessions.insert(token.clone(), user.clone());
        AuthResponse { token, user }
    }
}

/// Prefijo de los tokens que emite el mock
const MOCK_TOKEN_PREFIX: &str = "mock-token-";

/// API en memoria con latencia opcional
#[derive(Clone)]
pub struct MockApi {
    catalog: Rc<RefCell<Catalog>>,
    latency_ms: u32,
    /// Sesión guardada de una carga anterior de la página
    store: Option<Rc<dyn TokenStore>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new(0)
    }
}

impl MockApi {
    pub fn new(latency_ms: u32) -> Self {
        Self {
            catalog: Rc::new(RefCell::new(Catalog::seeded())),
            latency_ms,
            store: None,
        }
    }

    /// Aceptar en `me` el token mock que sigue guardado en `store`
    pub fn with_store(mut self, store: Rc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Usuario guardado para un token mock de una sesión anterior
    fn saved_session(&self, token: &str) -> Option<User> {
        if !token.starts_with(MOCK_TOKEN_PREFIX) {
            return None;
        }
        let store = self.store.as_ref()?;
        if store.token().as_deref() != Some(token) {
            return None;
        }
        let user = store.user()?;
        log::info!("♻️ [MOCK] Sesión restaurada para {}", user.email);
        self.catalog
            .borrow_mut()
            .sessions
            .insert(token.to_string(), user.clone());
        Some(user)
    }

    async fn pause(&self) {
        if self.latency_ms > 0 {
            TimeoutFuture::new(self.latency_ms).await;
        }
    }
}

fn require_credentials(email: &str, password: &str) -> ApiResult<()> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ApiError::Validation("Email and password are required".to_string()));
    }
    Ok(())
}

fn display_name(email: &str) -> String {
    match email.split('@').next() {
        Some(local) if !local.is_empty() => local.to_string(),
        _ => "Demo User".to_string(),
    }
}

#[async_trait(?Send)]
impl MarketplaceApi for MockApi {
    async fn login(&self, credentials: &Credentials) -> ApiResult<AuthResponse> {
        self.pause().await;
        require_credentials(&credentials.email, &credentials.password)?;

        let user = User {
            id: 1,
            name: display_name(&credentials.email),
            email: credentials.email.trim().to_string(),
            role: Role::User,
            green_coins: 42,
            is_verified: true,
            created_at: None,
        };
        log::info!("🔐 [MOCK] Login de {}", user.email);
        Ok(self.catalog.borrow_mut().open_session(user))
    }

    async fn register(&self, form: &RegisterForm) -> ApiResult<AuthResponse> {
        self.pause().await;
        require_credentials(&form.email, &form.password)?;

        let mut catalog = self.catalog.borrow_mut();
        let user = User {
            id: catalog.next_user_id,
            name: if form.name.trim().is_empty() { "User".to_string() } else { form.name.trim().to_string() },
            email: form.email.trim().to_string(),
            role: form.role,
            green_coins: 0,
            is_verified: false,
            created_at: None,
        };
        catalog.next_user_id += 1;
        log::info!("📝 [MOCK] Registro de {} como {}", user.email, user.role);
        Ok(catalog.open_session(user))
    }

    async fn me(&self, token: &str) -> ApiResult<User> {
        self.pause().await;
        let known = self.catalog.borrow().sessions.get(token).cloned();
        known
            .or_else(|| self.saved_session(token))
            .ok_or(ApiError::Unauthenticated)
    }

    async fn list_items(&self, filter: &ItemFilter) -> ApiResult<ItemPage> {
        self.pause().await;
        let catalog = self.catalog.borrow();
        let matching: Vec<Item> = catalog
            .items
            .iter()
            .filter(|item| match filter.category.as_deref() {
                None | Some("all") => true,
                Some(category) => item.category == category,
            })
            .filter(|item| filter.status.map_or(true, |status| item.status == status))
            .cloned()
            .collect();
        Ok(ItemPage::paginate(matching, filter.limit, filter.page))
    }

    async fn my_items(&self) -> ApiResult<Vec<Item>> {
        self.pause().await;
        let catalog = self.catalog.borrow();
        Ok(catalog
            .items
            .iter()
            .filter(|item| catalog.mine.contains(&item.id))
            .cloned()
            .collect())
    }

    async fn get_item(&self, id: ItemId) -> ApiResult<Item> {
        self.pause().await;
        let mut catalog = self.catalog.borrow_mut();
        let item = catalog.item_mut(id)?;
        item.views += 1;
        Ok(item.clone())
    }

    async fn create_item(&self, draft: &ItemDraft) -> ApiResult<Item> {
        self.pause().await;
        if draft.title.trim().is_empty() {
            return Err(ApiError::Validation("Title is required".to_string()));
        }

        let mut catalog = self.catalog.borrow_mut();
        let item = Item {
            id: catalog.next_item_id(),
            title: draft.title.trim().to_string(),
            category: draft.category.clone(),
            price: draft.price,
            status: ItemStatus::Active,
            seller_name: "You".to_string(),
            views: 0,
            green_coins_reward: 0,
            image: None,
            image_url: None,
            buyer_name: None,
            sold_at: None,
            waste_used_kg: draft.waste_used_kg,
            medium: draft.medium.clone(),
        };
        catalog.mine.insert(item.id);
        catalog.items.push(item.clone());
        Ok(item)
    }

    async fn buy_item(&self, id: ItemId) -> ApiResult<Item> {
        self.pause().await;
        let mut catalog = self.catalog.borrow_mut();
        let item = catalog.item_mut(id)?;
        if item.status != ItemStatus::Active {
            return Err(ApiError::Validation(format!("'{}' is no longer available", item.title)));
        }
        item.status = ItemStatus::Sold;
        item.buyer_name = Some("You".to_string());
        Ok(item.clone())
    }

    async fn donate_item(&self, id: ItemId) -> ApiResult<Item> {
        self.pause().await;
        let mut catalog = self.catalog.borrow_mut();
        let item = catalog.item_mut(id)?;
        if item.status != ItemStatus::Active {
            return Err(ApiError::Validation(format!("'{}' is no longer available", item.title)));
        }
        item.status = ItemStatus::Donated;
        item.price = 0;
        Ok(item.clone())
    }

    async fn list_tasks(&self, scope: TaskScope) -> ApiResult<Vec<Task>> {
        self.pause().await;
        let catalog = self.catalog.borrow();
        Ok(catalog
            .tasks
            .iter()
            .filter(|task| scope == TaskScope::Mine || task.status == TaskStatus::Pending)
            .cloned()
            .collect())
    }

    async fn get_task(&self, id: TaskId) -> ApiResult<Task> {
        self.pause().await;
        Ok(self.catalog.borrow_mut().task_mut(id)?.clone())
    }

    async fn assign_task(&self, id: TaskId) -> ApiResult<Task> {
        self.pause().await;
        let mut catalog = self.catalog.borrow_mut();
        let task = catalog.task_mut(id)?;
        if task.status != TaskStatus::Pending {
            return Err(ApiError::Validation("Task is not open".to_string()));
        }
        task.status = TaskStatus::Assigned;
        task.assigned_helper = Some("You".to_string());
        Ok(task.clone())
    }

    async fn progress_task(&self, id: TaskId) -> ApiResult<Task> {
        self.pause().await;
        let mut catalog = self.catalog.borrow_mut();
        let task = catalog.task_mut(id)?;
        let next = task.status.next().ok_or_else(|| {
            ApiError::Validation(format!("Cannot progress a {} task", task.status.label().to_lowercase()))
        })?;
        task.status = next;
        Ok(task.clone())
    }

    async fn cancel_task(&self, id: TaskId) -> ApiResult<Task> {
        self.pause().await;
        let mut catalog = self.catalog.borrow_mut();
        let task = catalog.task_mut(id)?;
        if task.status.is_final() {
            return Err(ApiError::Validation("Task is already closed".to_string()));
        }
        task.status = TaskStatus::Cancelled;
        Ok(task.clone())
    }

    async fn user_stats(&self, _id: UserId) -> ApiResult<UserStats> {
        self.pause().await;
        let catalog = self.catalog.borrow();
        let mine: Vec<&Item> = catalog
            .items
            .iter()
            .filter(|item| catalog.mine.contains(&item.id))
            .collect();
        let with_status = |status: ItemStatus| mine.iter().filter(|item| item.status == status).count() as u32;
        Ok(UserStats {
            rating: 4.5,
            rating_count: 12,
            total_listings: mine.len() as u32,
            total_sold: with_status(ItemStatus::Sold),
            total_donated: with_status(ItemStatus::Donated),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn credentials(email: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn artwork_gallery_filter() {
        let api = MockApi::default();
        let filter = ItemFilter::default().category("artwork").status(ItemStatus::Active).limit(48);
        let page = block_on(api.list_items(&filter)).unwrap();
        assert_eq!(page.total, 6);
        assert_eq!(page.pages, 1);
        assert!(page.items.iter().all(|item| item.category == "artwork"));
    }

    #[test]
    fn category_all_disables_category_filter() {
        let api = MockApi::default();
        let every = block_on(api.list_items(&ItemFilter::default().category("all").limit(100))).unwrap();
        let metal = block_on(api.list_items(&ItemFilter::default().category("metal").limit(100))).unwrap();
        assert_eq!(every.total, 9 + 6 + 4 + 4);
        assert_eq!(metal.total, 3 + 2);
    }

    #[test]
    fn unknown_item_rejects_with_not_found() {
        let api = MockApi::default();
        let err = block_on(api.get_item(9999)).unwrap_err();
        assert_eq!(err, ApiError::NotFound("Item".into()));
        assert_eq!(err.to_string(), "Item not found");
    }

    #[test]
    fn buying_marks_item_sold_once() {
        let api = MockApi::default();
        let sold = block_on(api.buy_item(101)).unwrap();
        assert_eq!(sold.status, ItemStatus::Sold);
        assert!(matches!(block_on(api.buy_item(101)), Err(ApiError::Validation(_))));

        let sold_page = block_on(api.list_items(&ItemFilter::default().status(ItemStatus::Sold).limit(100))).unwrap();
        assert!(sold_page.items.iter().any(|item| item.id == 101));
    }

    #[test]
    fn created_items_show_up_in_my_items() {
        let api = MockApi::default();
        let draft = ItemDraft {
            title: "Aluminium Cans".into(),
            category: "metal".into(),
            price: 70,
            medium: None,
            waste_used_kg: None,
        };
        let created = block_on(api.create_item(&draft)).unwrap();
        assert_eq!(created.id, 305);
        let mine = block_on(api.my_items()).unwrap();
        assert_eq!(mine.len(), 5);
        assert!(mine.iter().any(|item| item.id == created.id));
    }

    #[test]
    fn login_issues_a_token_that_me_accepts() {
        let api = MockApi::default();
        let auth = block_on(api.login(&credentials("ravi@scrapcrafters.in"))).unwrap();
        assert_eq!(auth.user.name, "ravi");
        assert_eq!(auth.user.role, Role::User);
        assert_eq!(block_on(api.me(&auth.token)).unwrap(), auth.user);
        assert_eq!(block_on(api.me("forged")).unwrap_err(), ApiError::Unauthenticated);
    }

    #[test]
    fn login_requires_email_and_password() {
        let api = MockApi::default();
        let err = block_on(api.login(&Credentials { email: " ".into(), password: "x".into() })).unwrap_err();
        assert_eq!(err.to_string(), "Email and password are required");
    }

    #[test]
    fn register_keeps_requested_role() {
        let api = MockApi::default();
        let form = RegisterForm {
            name: "GreenArt Studio".into(),
            email: "studio@greenart.in".into(),
            password: "secret".into(),
            role: Role::Organisation,
        };
        let auth = block_on(api.register(&form)).unwrap();
        assert_eq!(auth.user.role, Role::Organisation);
        assert_eq!(auth.user.id, 2);
    }

    #[test]
    fn task_lifecycle() {
        let api = MockApi::default();
        let open = block_on(api.list_tasks(TaskScope::Open)).unwrap();
        assert_eq!(open.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);

        assert_eq!(block_on(api.assign_task(1)).unwrap().status, TaskStatus::Assigned);
        assert_eq!(block_on(api.progress_task(1)).unwrap().status, TaskStatus::Collected);
        assert_eq!(block_on(api.progress_task(1)).unwrap().status, TaskStatus::Delivered);
        assert!(block_on(api.progress_task(1)).is_err());
        assert!(block_on(api.cancel_task(1)).is_err());
        assert!(block_on(api.list_tasks(TaskScope::Open)).unwrap().is_empty());
    }

    #[test]
    fn cancel_open_task() {
        let api = MockApi::default();
        assert_eq!(block_on(api.cancel_task(4)).unwrap().status, TaskStatus::Cancelled);
        assert!(matches!(block_on(api.assign_task(4)), Err(ApiError::Validation(_))));
    }

    #[test]
    fn stats_follow_my_listings() {
        let api = MockApi::default();
        block_on(api.donate_item(301)).unwrap();
        let stats = block_on(api.user_stats(1)).unwrap();
        assert_eq!(stats.total_listings, 4);
        assert_eq!(stats.total_sold, 1);
        assert_eq!(stats.total_donated, 2);
    }
}
