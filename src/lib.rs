// ============================================================================
// SCRAP CRAFTERS PWA - Marketplace de chatarra y arte reciclado (Yew)
// ============================================================================
// Capas:
// - State: navegación, fetch, carrito y sesión (sin Yew, testeable en nativo)
// - Hooks: envuelven el estado para los componentes
// - Services: MarketplaceApi (mock o REST) + AuthService
// - Components: shell App + una página por vista
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod hooks;
pub mod components;
pub mod utils;

use std::rc::Rc;
use crate::components::{App, AppProps};
use crate::config::AppConfig;
use crate::services::{build_api, AuthService, LocalTokenStore, TokenStore};

/// Montar la app en el body con la configuración de compilación
pub fn start() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!("🚀 Scrap Crafters starting...");
    log::debug!("⚙️ [CONFIG] {:?}", config);

    let store: Rc<dyn TokenStore> = Rc::new(LocalTokenStore);
    let api = build_api(&config, store.clone());
    let auth = AuthService::new(api.clone(), store);

    yew::Renderer::<App>::with_props(AppProps { config, api, auth }).render();
}
