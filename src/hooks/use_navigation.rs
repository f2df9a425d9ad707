// ============================================================================
// USE NAVIGATION - Hook de Yew sobre state::Navigation
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;
use crate::models::User;
use crate::state::{HistoryLimit, NavRequest, Navigation, Page};
use crate::utils::scroll_to_top;

pub enum NavAction {
    Navigate(NavRequest),
    Reset(Page),
}

impl Reducible for Navigation {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            NavAction::Navigate(request) => {
                next.navigate(request);
            }
            NavAction::Reset(page) => next.reset(page),
        }
        Rc::new(next)
    }
}

#[derive(Clone, PartialEq)]
pub struct UseNavigationHandle {
    state: UseReducerHandle<Navigation>,
}

impl UseNavigationHandle {
    pub fn current(&self) -> &Page {
        self.state.current()
    }

    pub fn history_len(&self) -> usize {
        self.state.history().len()
    }

    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    /// Navegar (adelante o atrás); siempre vuelve el scroll arriba
    pub fn navigate(&self, request: NavRequest) {
        self.state.dispatch(NavAction::Navigate(request));
        scroll_to_top();
    }

    pub fn back(&self) {
        self.navigate(NavRequest::Back);
    }

    /// Ir a `page` descartando el historial
    pub fn reset(&self, page: Page) {
        self.state.dispatch(NavAction::Reset(page));
        scroll_to_top();
    }

    pub fn landing_redirect(&self, user: Option<&User>) -> Option<Page> {
        self.state.landing_redirect(user)
    }

    pub fn callback(&self) -> Callback<NavRequest> {
        let handle = self.clone();
        Callback::from(move |request: NavRequest| handle.navigate(request))
    }
}

#[hook]
pub fn use_navigation(limit: HistoryLimit) -> UseNavigationHandle {
    let state = use_reducer(move || Navigation::new(limit));
    UseNavigationHandle { state }
}
