// ============================================================================
// USE AUTH - Sesión de usuario (login, registro, logout, revalidación)
// ============================================================================

use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use crate::error::ApiResult;
use crate::models::{Credentials, RegisterForm, User};
use crate::services::AuthService;
use crate::state::AuthSession;

pub enum AuthAction {
    Begin,
    SignedIn(User),
    Failed(String),
    SignedOut,
    /// Resultado de revalidar el token; `started_at` es la revisión al lanzarla
    Revalidated { started_at: u64, user: Option<User> },
}

impl Reducible for AuthSession {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AuthAction::Begin => next.begin_request(),
            AuthAction::SignedIn(user) => next.signed_in(user),
            AuthAction::Failed(message) => next.failed(message),
            AuthAction::SignedOut => next.signed_out(),
            AuthAction::Revalidated { started_at, user } => {
                if !next.revalidated(started_at, user) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub session: UseReducerHandle<AuthSession>,
    pub login: Callback<Credentials>,
    pub register: Callback<RegisterForm>,
    pub logout: Callback<()>,
    pub refresh_user: Callback<()>,
}

impl UseAuthHandle {
    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }
}

/// Lanza una petición de autenticación y deja el resultado en la sesión.
/// `on_authenticated` solo se emite si la petición tuvo éxito.
fn authenticate<Fut>(
    session: UseReducerHandle<AuthSession>,
    on_authenticated: Callback<User>,
    request: Fut,
) where
    Fut: std::future::Future<Output = ApiResult<User>> + 'static,
{
    session.dispatch(AuthAction::Begin);
    spawn_local(async move {
        match request.await {
            Ok(user) => {
                session.dispatch(AuthAction::SignedIn(user.clone()));
                on_authenticated.emit(user);
            }
            Err(e) => {
                log::error!("❌ [AUTH] {}", e);
                session.dispatch(AuthAction::Failed(e.to_string()));
            }
        }
    });
}

#[hook]
pub fn use_auth(service: AuthService, on_authenticated: Callback<User>) -> UseAuthHandle {
    let session = {
        let service = service.clone();
        use_reducer(move || AuthSession::restored(service.saved_user()))
    };

    let refresh_user = {
        let session = session.clone();
        let service = service.clone();
        Callback::from(move |_: ()| {
            let started_at = session.revision();
            let session = session.clone();
            let service = service.clone();
            spawn_local(async move {
                let user = service.current_user().await.ok();
                session.dispatch(AuthAction::Revalidated { started_at, user });
            });
        })
    };

    // Revalidar la sesión guardada al montar
    {
        let refresh_user = refresh_user.clone();
        let has_saved_user = session.user.is_some();
        use_effect_with((), move |_| {
            if has_saved_user {
                log::info!("🔄 [AUTH] Revalidando sesión guardada");
                refresh_user.emit(());
            }
            || ()
        });
    }

    let login = {
        let session = session.clone();
        let service = service.clone();
        let on_authenticated = on_authenticated.clone();
        Callback::from(move |credentials: Credentials| {
            let service = service.clone();
            authenticate(session.clone(), on_authenticated.clone(), async move {
                service.login(&credentials).await
            });
        })
    };

    let register = {
        let session = session.clone();
        let service = service.clone();
        Callback::from(move |form: RegisterForm| {
            let service = service.clone();
            authenticate(session.clone(), on_authenticated.clone(), async move {
                service.register(&form).await
            });
        })
    };

    let logout = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            service.logout();
            session.dispatch(AuthAction::SignedOut);
        })
    };

    UseAuthHandle {
        session,
        login,
        register,
        logout,
        refresh_user,
    }
}
