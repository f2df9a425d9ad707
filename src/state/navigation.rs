// ============================================================================
// NAVIGATION - Página actual + pila de historial + resolución de vistas
// ============================================================================
// Sin dependencias de Yew: el hook use_navigation envuelve este estado y se
// encarga del scroll y del re-render.
// ============================================================================

use std::collections::{BTreeMap, VecDeque};
use std::num::NonZeroUsize;
use crate::models::{ItemId, Role, User};

/// Parámetros "planos" de una ruta (superficie string, p.ej. `artworkId=101`)
pub type PageParams = BTreeMap<String, String>;

pub const ARTWORK_ID_PARAM: &str = "artworkId";

/// Páginas de la app; cada variante lleva sus propios parámetros
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    Auth,
    Artworks,
    /// `artwork_id` ausente = la vista de detalle muestra "no encontrada"
    ArtworkDetail { artwork_id: Option<ItemId> },
    Cart,
    OrderSummary,
    Dashboard(Role),
    SoldDonated,
    Collaborations,
}

impl Default for Page {
    fn default() -> Self {
        Page::Landing
    }
}

impl Page {
    pub fn artwork(artwork_id: ItemId) -> Self {
        Page::ArtworkDetail { artwork_id: Some(artwork_id) }
    }

    pub fn route_id(&self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Auth => "auth",
            Page::Artworks => "artworks",
            Page::ArtworkDetail { .. } => "artwork-detail",
            Page::Cart => "cart",
            Page::OrderSummary => "order-summary",
            Page::Dashboard(role) => role.as_str(),
            Page::SoldDonated => "sold-donated",
            Page::Collaborations => "collaborations",
        }
    }

    pub fn params(&self) -> PageParams {
        let mut params = PageParams::new();
        if let Page::ArtworkDetail { artwork_id: Some(id) } = self {
            params.insert(ARTWORK_ID_PARAM.to_string(), id.to_string());
        }
        params
    }

    /// Parsear un id de página + parámetros. Ids desconocidos -> Landing.
    pub fn from_route(id: &str, params: &PageParams) -> Page {
        match id {
            "landing" => Page::Landing,
            "auth" => Page::Auth,
            "artworks" => Page::Artworks,
            "artwork-detail" => Page::ArtworkDetail {
                artwork_id: params
                    .get(ARTWORK_ID_PARAM)
                    .and_then(|raw| raw.trim().parse().ok()),
            },
            "cart" => Page::Cart,
            "order-summary" => Page::OrderSummary,
            "sold-donated" => Page::SoldDonated,
            "collaborations" => Page::Collaborations,
            other => match Role::parse(other) {
                Some(role) => Page::Dashboard(role),
                None => {
                    log::warn!("⚠️ [NAV] Página desconocida '{}', usando landing", other);
                    Page::Landing
                }
            },
        }
    }

    /// Requiere usuario autenticado para mostrar su vista
    pub fn is_role_gated(&self) -> bool {
        matches!(self, Page::Dashboard(_) | Page::SoldDonated)
    }
}

/// Petición de navegación: adelante a una página o atrás
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavRequest {
    Back,
    To(Page),
}

impl NavRequest {
    pub fn from_route(id: &str, params: &PageParams) -> Self {
        if id == "back" {
            NavRequest::Back
        } else {
            NavRequest::To(Page::from_route(id, params))
        }
    }
}

impl From<Page> for NavRequest {
    fn from(page: Page) -> Self {
        NavRequest::To(page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryLimit {
    Unbounded,
    /// Al llenarse se descarta la entrada más antigua
    Bounded(NonZeroUsize),
}

impl HistoryLimit {
    /// 0 = sin límite
    pub fn from_config(limit: usize) -> Self {
        match NonZeroUsize::new(limit) {
            Some(limit) => HistoryLimit::Bounded(limit),
            None => HistoryLimit::Unbounded,
        }
    }
}

/// Pila LIFO de páginas anteriores
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStack {
    entries: VecDeque<Page>,
    limit: HistoryLimit,
}

impl HistoryStack {
    pub fn new(limit: HistoryLimit) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// Apilar; devuelve la entrada descartada si se superó el límite
    pub fn push(&mut self, page: Page) -> Option<Page> {
        self.entries.push_back(page);
        match self.limit {
            HistoryLimit::Bounded(limit) if self.entries.len() > limit.get() => self.entries.pop_front(),
            _ => None,
        }
    }

    pub fn pop(&mut self) -> Option<Page> {
        self.entries.pop_back()
    }

    pub fn peek(&self) -> Option<&Page> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn limit(&self) -> HistoryLimit {
        self.limit
    }

    /// De la más antigua a la más reciente
    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.entries.iter()
    }
}

/// Resultado de una navegación (el scroll arriba se hace siempre)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    Forward { from: Page, to: Page },
    Back { to: Page },
    /// "Atrás" con historial vacío: no cambia nada
    NoHistory,
}

/// Estado de navegación: única fuente de verdad de qué página se ve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    current: Page,
    history: HistoryStack,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(HistoryLimit::Unbounded)
    }
}

impl Navigation {
    pub fn new(limit: HistoryLimit) -> Self {
        Self {
            current: Page::Landing,
            history: HistoryStack::new(limit),
        }
    }

    pub fn current(&self) -> &Page {
        &self.current
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn navigate(&mut self, request: NavRequest) -> NavOutcome {
        match request {
            NavRequest::Back => self.back(),
            NavRequest::To(page) => self.go(page),
        }
    }

    /// Navegación hacia adelante: la página actual pasa al historial
    pub fn go(&mut self, page: Page) -> NavOutcome {
        let from = std::mem::replace(&mut self.current, page.clone());
        if let Some(evicted) = self.history.push(from.clone()) {
            log::debug!("🗑️ [NAV] Historial lleno, descartando {:?}", evicted);
        }
        log::info!(
            "🧭 [NAV] {} -> {} (historial: {})",
            from.route_id(),
            page.route_id(),
            self.history.len()
        );
        NavOutcome::Forward { from, to: page }
    }

    pub fn back(&mut self) -> NavOutcome {
        match self.history.pop() {
            Some(previous) => {
                log::info!(
                    "🔙 [NAV] {} -> {} (historial: {})",
                    self.current.route_id(),
                    previous.route_id(),
                    self.history.len()
                );
                self.current = previous.clone();
                NavOutcome::Back { to: previous }
            }
            None => {
                log::debug!("ℹ️ [NAV] Historial vacío, se queda en {}", self.current.route_id());
                NavOutcome::NoHistory
            }
        }
    }

    /// Ir a `page` olvidando todo el historial (logout)
    pub fn reset(&mut self, page: Page) {
        log::info!("🧹 [NAV] Reset a {} ({} entradas descartadas)", page.route_id(), self.history.len());
        self.history.clear();
        self.current = page;
    }

    /// Con sesión iniciada, la landing redirige al dashboard del rol
    pub fn landing_redirect(&self, user: Option<&User>) -> Option<Page> {
        match (user, &self.current) {
            (Some(user), Page::Landing) => Some(Page::Dashboard(user.role)),
            _ => None,
        }
    }
}

/// Vista a renderizar para una página dada la sesión actual
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Landing,
    Auth,
    Artworks,
    ArtworkDetail { artwork_id: Option<ItemId> },
    Cart,
    OrderSummary,
    Dashboard { role: Role, user: User },
    SoldDonated { user: User },
    Collaborations,
}

/// Función total de (página, usuario) -> vista. Las páginas con rol sin
/// usuario se sustituyen por la vista de autenticación.
pub fn resolve_view(page: &Page, user: Option<&User>) -> View {
    match (page, user) {
        (Page::Dashboard(role), Some(user)) => View::Dashboard {
            role: *role,
            user: user.clone(),
        },
        (Page::SoldDonated, Some(user)) => View::SoldDonated { user: user.clone() },
        (Page::Dashboard(_) | Page::SoldDonated, None) => {
            log::info!("🔒 [NAV] {} requiere sesión, mostrando auth", page.route_id());
            View::Auth
        }
        (Page::Landing, _) => View::Landing,
        (Page::Auth, _) => View::Auth,
        (Page::Artworks, _) => View::Artworks,
        (Page::ArtworkDetail { artwork_id }, _) => View::ArtworkDetail { artwork_id: *artwork_id },
        (Page::Cart, _) => View::Cart,
        (Page::OrderSummary, _) => View::OrderSummary,
        (Page::Collaborations, _) => View::Collaborations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn user(role: Role) -> User {
        User {
            id: 1,
            name: "Asha".into(),
            email: "asha@example.in".into(),
            role,
            green_coins: 42,
            is_verified: true,
            created_at: None,
        }
    }

    fn params(pairs: &[(&str, &str)]) -> PageParams {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn starts_on_landing_with_empty_history() {
        let nav = Navigation::default();
        assert_eq!(nav.current(), &Page::Landing);
        assert!(nav.history().is_empty());
        assert!(!nav.can_go_back());
    }

    #[test]
    fn back_on_empty_history_is_a_no_op() {
        let mut nav = Navigation::default();
        nav.navigate(NavRequest::Back);
        assert_eq!(nav.navigate(NavRequest::Back), NavOutcome::NoHistory);
        assert_eq!(nav.current(), &Page::Landing);
        assert_eq!(nav.history().len(), 0);
    }

    #[test]
    fn artwork_detail_params_survive_a_round_trip_through_cart() {
        let mut nav = Navigation::default();
        nav.navigate(Page::Artworks.into());
        nav.navigate(Page::artwork(101).into());
        assert_eq!(nav.current().params().get(ARTWORK_ID_PARAM).map(String::as_str), Some("101"));

        nav.navigate(Page::Cart.into());
        nav.navigate(NavRequest::Back);
        assert_eq!(nav.current(), &Page::artwork(101));
    }

    #[test]
    fn forward_then_back_restores_previous_page() {
        let mut nav = Navigation::default();
        nav.navigate(Page::artwork(7).into());
        let before = nav.current().clone();

        let outcome = nav.navigate(Page::Artworks.into());
        assert_eq!(outcome, NavOutcome::Forward { from: before.clone(), to: Page::Artworks });
        assert_eq!(nav.navigate(NavRequest::Back), NavOutcome::Back { to: before.clone() });
        assert_eq!(nav.current(), &before);
    }

    #[test]
    fn bounded_history_evicts_oldest_entry() {
        let mut nav = Navigation::new(HistoryLimit::from_config(2));
        nav.go(Page::Artworks);
        nav.go(Page::Cart);
        nav.go(Page::OrderSummary);
        assert_eq!(nav.history().len(), 2);
        let remembered: Vec<&Page> = nav.history().iter().collect();
        assert_eq!(remembered, vec![&Page::Artworks, &Page::Cart]);
    }

    #[test]
    fn zero_limit_means_unbounded() {
        assert_eq!(HistoryLimit::from_config(0), HistoryLimit::Unbounded);
    }

    #[test]
    fn reset_clears_history_so_back_cannot_reenter_gated_pages() {
        let mut nav = Navigation::default();
        nav.go(Page::Dashboard(Role::Artist));
        nav.go(Page::SoldDonated);
        nav.reset(Page::Landing);
        assert_eq!(nav.current(), &Page::Landing);
        assert_eq!(nav.back(), NavOutcome::NoHistory);
    }

    #[test]
    fn forward_logout_navigation_bounces_back_to_auth() {
        // Sin reset, "atrás" tras cerrar sesión vuelve a una página con rol
        let mut nav = Navigation::default();
        nav.go(Page::Dashboard(Role::Helper));
        nav.go(Page::Landing);
        nav.back();
        assert_eq!(resolve_view(nav.current(), None), View::Auth);
    }

    #[test]
    fn gated_pages_resolve_to_auth_without_user() {
        for page in [
            Page::Dashboard(Role::Artist),
            Page::Dashboard(Role::User),
            Page::Dashboard(Role::Helper),
            Page::Dashboard(Role::Organisation),
            Page::SoldDonated,
        ] {
            assert!(page.is_role_gated());
            assert_eq!(resolve_view(&page, None), View::Auth);
        }
    }

    #[test]
    fn dashboard_resolves_with_user() {
        let artist = user(Role::Artist);
        assert_eq!(
            resolve_view(&Page::Dashboard(Role::Artist), Some(&artist)),
            View::Dashboard { role: Role::Artist, user: artist.clone() }
        );
        assert_eq!(
            resolve_view(&Page::SoldDonated, Some(&artist)),
            View::SoldDonated { user: artist }
        );
    }

    #[test]
    fn public_pages_ignore_session() {
        assert_eq!(resolve_view(&Page::Collaborations, None), View::Collaborations);
        assert_eq!(resolve_view(&Page::Cart, None), View::Cart);
        assert_eq!(
            resolve_view(&Page::ArtworkDetail { artwork_id: None }, None),
            View::ArtworkDetail { artwork_id: None }
        );
    }

    #[test]
    fn route_ids_parse() {
        assert_eq!(Page::from_route("helper", &PageParams::new()), Page::Dashboard(Role::Helper));
        assert_eq!(Page::from_route("sold-donated", &PageParams::new()), Page::SoldDonated);
        assert_eq!(
            Page::from_route("artwork-detail", &params(&[(ARTWORK_ID_PARAM, "101")])),
            Page::artwork(101)
        );
        assert_eq!(
            Page::from_route("artwork-detail", &params(&[(ARTWORK_ID_PARAM, "abc")])),
            Page::ArtworkDetail { artwork_id: None }
        );
        assert_eq!(NavRequest::from_route("back", &PageParams::new()), NavRequest::Back);
    }

    #[test]
    fn unknown_route_falls_back_to_landing() {
        assert_eq!(Page::from_route("admin-panel", &PageParams::new()), Page::Landing);
    }

    #[test]
    fn landing_redirects_signed_in_users_to_their_dashboard() {
        let nav = Navigation::default();
        assert_eq!(nav.landing_redirect(None), None);
        assert_eq!(
            nav.landing_redirect(Some(&user(Role::Organisation))),
            Some(Page::Dashboard(Role::Organisation))
        );

        let mut nav = Navigation::default();
        nav.go(Page::Artworks);
        assert_eq!(nav.landing_redirect(Some(&user(Role::Artist))), None);
    }

    fn any_role() -> impl Strategy<Value = Role> {
        prop::sample::select(Role::ALL.to_vec())
    }

    fn any_page() -> impl Strategy<Value = Page> {
        prop_oneof![
            Just(Page::Landing),
            Just(Page::Auth),
            Just(Page::Artworks),
            proptest::option::of(1u64..500).prop_map(|artwork_id| Page::ArtworkDetail { artwork_id }),
            Just(Page::Cart),
            Just(Page::OrderSummary),
            any_role().prop_map(Page::Dashboard),
            Just(Page::SoldDonated),
            Just(Page::Collaborations),
        ]
    }

    proptest! {
        #[test]
        fn forward_navigation_pushes_exactly_one_entry(pages in prop::collection::vec(any_page(), 0..40)) {
            let mut nav = Navigation::default();
            for page in &pages {
                nav.navigate(NavRequest::To(page.clone()));
            }
            prop_assert_eq!(nav.history().len(), pages.len());
            if let Some(last) = pages.last() {
                prop_assert_eq!(nav.current(), last);
            }
        }

        #[test]
        fn back_pops_exactly_one_entry(pages in prop::collection::vec(any_page(), 1..40)) {
            let mut nav = Navigation::default();
            for page in &pages {
                nav.go(page.clone());
            }
            let expected = nav.history().peek().cloned();
            let before = nav.history().len();
            nav.navigate(NavRequest::Back);
            prop_assert_eq!(nav.history().len(), before - 1);
            prop_assert_eq!(Some(nav.current().clone()), expected);
        }

        #[test]
        fn gated_resolution_ignores_params(role in any_role(), page in any_page()) {
            let gated = Page::Dashboard(role);
            prop_assert_eq!(resolve_view(&gated, None), View::Auth);
            if page.is_role_gated() {
                prop_assert_eq!(resolve_view(&page, None), View::Auth);
            }
        }

        #[test]
        fn route_surface_round_trips(page in any_page()) {
            prop_assert_eq!(Page::from_route(page.route_id(), &page.params()), page);
        }
    }
}
