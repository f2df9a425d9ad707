// ============================================================================
// AUTH SERVICE - Login / registro / logout sobre MarketplaceApi + TokenStore
// ============================================================================

use std::rc::Rc;
use crate::error::{ApiError, ApiResult};
use crate::models::{AuthResponse, Credentials, RegisterForm, User};
use crate::services::api::ApiHandle;
use crate::services::token_store::TokenStore;

#[derive(Clone)]
pub struct AuthService {
    api: ApiHandle,
    store: Rc<dyn TokenStore>,
}

impl PartialEq for AuthService {
    fn eq(&self, other: &Self) -> bool {
        self.api == other.api && Rc::ptr_eq(&self.store, &other.store)
    }
}

impl AuthService {
    pub fn new(api: ApiHandle, store: Rc<dyn TokenStore>) -> Self {
        Self { api, store }
    }

    /// Usuario guardado de una sesión anterior (sin validar)
    pub fn saved_user(&self) -> Option<User> {
        self.store.user()
    }

    pub async fn login(&self, credentials: &Credentials) -> ApiResult<User> {
        log::info!("🔐 [AUTH] Login de {}", credentials.email);
        let response = self.api.login(credentials).await?;
        self.persist(response)
    }

    pub async fn register(&self, form: &RegisterForm) -> ApiResult<User> {
        log::info!("📝 [AUTH] Registro de {} ({})", form.email, form.role);
        let response = self.api.register(form).await?;
        self.persist(response)
    }

    /// Revalidar el token guardado. Si falla, la sesión local se borra.
    pub async fn current_user(&self) -> ApiResult<User> {
        let token = self.store.token().ok_or(ApiError::Unauthenticated)?;
        match self.api.me(&token).await {
            Ok(user) => {
                self.store.update_user(&user)?;
                Ok(user)
            }
            Err(e) => {
                log::warn!("⚠️ [AUTH] Sesión guardada inválida: {}", e);
                self.forget_if_current(&token);
                Err(e)
            }
        }
    }

    /// Borrar la sesión solo si `token` sigue siendo el guardado: un login
    /// posterior no debe perderse por una revalidación que llega tarde
    fn forget_if_current(&self, token: &str) {
        if self.store.token().as_deref() == Some(token) {
            self.store.clear();
        } else {
            log::debug!("ℹ️ [AUTH] Token ya reemplazado, se conserva la sesión nueva");
        }
    }

    pub fn logout(&self) {
        log::info!("👋 [AUTH] Logout");
        self.store.clear();
    }

    fn persist(&self, response: AuthResponse) -> ApiResult<User> {
        self.store.save(&response.token, &response.user)?;
        log::info!("✅ [AUTH] Sesión iniciada: {} ({})", response.user.email, response.user.role);
        Ok(response.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use crate::models::Role;
    use crate::services::mock_api::MockApi;
    use crate::services::token_store::MemoryTokenStore;

    fn service() -> (AuthService, Rc<MemoryTokenStore>) {
        let store = Rc::new(MemoryTokenStore::default());
        let service = AuthService::new(ApiHandle::new(MockApi::default()), store.clone());
        (service, store)
    }

    #[test]
    fn login_persists_token_and_user() {
        let (auth, store) = service();
        let user = block_on(auth.login(&Credentials {
            email: "priya@scrapcrafters.in".into(),
            password: "secret".into(),
        }))
        .unwrap();
        assert_eq!(store.user(), Some(user.clone()));
        assert!(store.token().is_some());
        assert_eq!(auth.saved_user(), Some(user));
    }

    #[test]
    fn failed_login_surfaces_message_and_stores_nothing() {
        let (auth, store) = service();
        let err = block_on(auth.login(&Credentials { email: String::new(), password: String::new() })).unwrap_err();
        assert_eq!(err.to_string(), "Email and password are required");
        assert!(store.token().is_none());
    }

    #[test]
    fn register_returns_user_with_role() {
        let (auth, _) = service();
        let user = block_on(auth.register(&RegisterForm {
            name: "Arjun".into(),
            email: "arjun@example.in".into(),
            password: "secret".into(),
            role: Role::Artist,
        }))
        .unwrap();
        assert_eq!(user.role, Role::Artist);
    }

    #[test]
    fn current_user_revalidates_saved_session() {
        let (auth, _) = service();
        let user = block_on(auth.login(&Credentials { email: "a@b.in".into(), password: "x".into() })).unwrap();
        assert_eq!(block_on(auth.current_user()).unwrap(), user);
    }

    #[test]
    fn invalid_saved_token_clears_session() {
        let (auth, store) = service();
        store
            .save(
                "expired",
                &User {
                    id: 9,
                    name: "Old".into(),
                    email: "old@example.in".into(),
                    role: Role::Helper,
                    green_coins: 0,
                    is_verified: false,
                    created_at: None,
                },
            )
            .unwrap();
        assert_eq!(block_on(auth.current_user()).unwrap_err(), ApiError::Unauthenticated);
        assert!(store.user().is_none());
    }

    #[test]
    fn mock_session_survives_a_reload() {
        let store = Rc::new(MemoryTokenStore::default());
        let before = AuthService::new(ApiHandle::new(MockApi::default().with_store(store.clone())), store.clone());
        let user = block_on(before.login(&Credentials { email: "meena@example.in".into(), password: "x".into() })).unwrap();

        // Página recargada: catálogo y sesiones mock nuevos, mismo storage
        let after = AuthService::new(ApiHandle::new(MockApi::default().with_store(store.clone())), store.clone());
        assert_eq!(after.saved_user(), Some(user.clone()));
        assert_eq!(block_on(after.current_user()).unwrap(), user);
        assert!(store.token().is_some());
    }

    #[test]
    fn mock_without_store_rejects_tokens_from_a_previous_load() {
        let store = Rc::new(MemoryTokenStore::default());
        let before = AuthService::new(ApiHandle::new(MockApi::default()), store.clone());
        block_on(before.login(&Credentials { email: "a@b.in".into(), password: "x".into() })).unwrap();

        let after = AuthService::new(ApiHandle::new(MockApi::default()), store.clone());
        assert_eq!(block_on(after.current_user()).unwrap_err(), ApiError::Unauthenticated);
        assert!(store.token().is_none());
    }

    #[test]
    fn late_invalidation_keeps_a_newer_login() {
        let (auth, store) = service();
        let user = block_on(auth.login(&Credentials { email: "a@b.in".into(), password: "x".into() })).unwrap();
        let current = store.token().unwrap();

        auth.forget_if_current("mock-token-old");
        assert_eq!(store.token(), Some(current.clone()));
        assert_eq!(store.user(), Some(user));

        auth.forget_if_current(&current);
        assert!(store.token().is_none());
    }

    #[test]
    fn logout_clears_storage() {
        let (auth, store) = service();
        block_on(auth.login(&Credentials { email: "a@b.in".into(), password: "x".into() })).unwrap();
        auth.logout();
        assert!(store.token().is_none());
        assert!(auth.saved_user().is_none());
    }
}
