// ============================================================================
// APP - Shell: navegación, sesión, carrito y selección de vista
// ============================================================================

use yew::prelude::*;
use crate::config::AppConfig;
use crate::hooks::{use_auth, use_cart, use_navigation, CartAction};
use crate::models::{Credentials, RegisterForm, User};
use crate::services::{ApiHandle, AuthService};
use crate::state::{resolve_view, AuthSession, Cart, HistoryLimit, NavRequest, Page, View};
use crate::components::pages::{
    ArtworkDetailPage, ArtworksPage, AuthPage, CartPage, CollaborationsPage, DashboardPage,
    LandingPage, OrderSummaryPage, SoldDonatedPage,
};

/// Estado compartido que recibe cada página por props
#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub api: ApiHandle,
    pub session: AuthSession,
    pub cart: Cart,
    pub can_go_back: bool,
    pub navigate: Callback<NavRequest>,
    pub cart_actions: Callback<CartAction>,
    pub login: Callback<Credentials>,
    pub register: Callback<RegisterForm>,
    pub logout: Callback<()>,
}

impl AppContext {
    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn go(&self, page: Page) {
        self.navigate.emit(NavRequest::To(page));
    }

    pub fn back(&self) {
        self.navigate.emit(NavRequest::Back);
    }

    /// Callback de click que navega a `page`
    pub fn link(&self, page: Page) -> Callback<MouseEvent> {
        let navigate = self.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(NavRequest::To(page.clone())))
    }

    pub fn back_link(&self) -> Callback<MouseEvent> {
        self.navigate.reform(|_: MouseEvent| NavRequest::Back)
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: AppConfig,
    pub api: ApiHandle,
    pub auth: AuthService,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let navigation = use_navigation(HistoryLimit::from_config(props.config.history_limit));

    // Tras login/registro: al dashboard del rol
    let on_authenticated = {
        let navigation = navigation.clone();
        Callback::from(move |user: User| {
            navigation.navigate(NavRequest::To(Page::Dashboard(user.role)));
        })
    };

    let auth = use_auth(props.auth.clone(), on_authenticated);
    let cart = use_cart();

    // Landing con sesión iniciada -> dashboard
    {
        let navigation = navigation.clone();
        let user = auth.user().cloned();
        let current = navigation.current().clone();
        use_effect_with((user, current), move |(user, _)| {
            if let Some(page) = navigation.landing_redirect(user.as_ref()) {
                log::info!("↪️ [APP] Sesión activa, redirigiendo a {}", page.route_id());
                navigation.navigate(NavRequest::To(page));
            }
            || ()
        });
    }

    let logout = {
        let auth_logout = auth.logout.clone();
        let navigation = navigation.clone();
        Callback::from(move |_: ()| {
            auth_logout.emit(());
            navigation.reset(Page::Landing);
        })
    };

    let ctx = AppContext {
        api: props.api.clone(),
        session: (*auth.session).clone(),
        cart: cart.cart().clone(),
        can_go_back: navigation.can_go_back(),
        navigate: navigation.callback(),
        cart_actions: cart.dispatcher(),
        login: auth.login.clone(),
        register: auth.register.clone(),
        logout,
    };

    let content = match resolve_view(navigation.current(), auth.user()) {
        View::Landing => html! { <LandingPage ctx={ctx.clone()} /> },
        View::Auth => html! { <AuthPage ctx={ctx.clone()} /> },
        View::Artworks => html! { <ArtworksPage ctx={ctx.clone()} /> },
        View::ArtworkDetail { artwork_id } => {
            html! { <ArtworkDetailPage ctx={ctx.clone()} {artwork_id} /> }
        }
        View::Cart => html! { <CartPage ctx={ctx.clone()} /> },
        View::OrderSummary => html! { <OrderSummaryPage ctx={ctx.clone()} /> },
        View::Dashboard { role, user } => {
            html! { <DashboardPage ctx={ctx.clone()} {role} {user} /> }
        }
        View::SoldDonated { user } => html! { <SoldDonatedPage ctx={ctx.clone()} {user} /> },
        View::Collaborations => html! { <CollaborationsPage ctx={ctx.clone()} /> },
    };

    html! {
        <div class="app">
            <header class="app-header">
                <button class="brand" onclick={ctx.link(Page::Landing)}>
                    {"♻️ Scrap Crafters"}
                </button>
                <nav class="app-nav">
                    <button onclick={ctx.link(Page::Artworks)}>{"Artworks"}</button>
                    <button onclick={ctx.link(Page::Collaborations)}>{"Collaborations"}</button>
                    <button class="cart-link" onclick={ctx.link(Page::Cart)}>
                        {format!("🛒 {}", ctx.cart.len())}
                    </button>
                    if let Some(user) = ctx.user() {
                        <button onclick={ctx.link(Page::Dashboard(user.role))}>{&user.name}</button>
                    } else {
                        <button onclick={ctx.link(Page::Auth)}>{"Sign in"}</button>
                    }
                </nav>
            </header>
            <main class="app-main" key={navigation.current().route_id()}>
                {content}
            </main>
        </div>
    }
}
