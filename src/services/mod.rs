pub mod api;
pub mod auth_service;
pub mod checkout;
pub mod mock_api;
pub mod mock_data;
pub mod rest_api;
pub mod token_store;

pub use api::{ApiHandle, MarketplaceApi};
pub use auth_service::AuthService;
pub use checkout::{place_order, CheckoutFailure, OrderReceipt};
pub use mock_api::MockApi;
pub use rest_api::RestApi;
pub use token_store::{LocalTokenStore, MemoryTokenStore, TokenStore};

use std::rc::Rc;
use crate::config::AppConfig;

/// Elegir implementación de la API según configuración
pub fn build_api(config: &AppConfig, store: Rc<dyn TokenStore>) -> ApiHandle {
    if config.use_mock_api {
        log::info!("🧪 [API] Usando API mock (latencia {} ms)", config.mock_latency_ms);
        ApiHandle::new(MockApi::new(config.mock_latency_ms).with_store(store))
    } else {
        log::info!("🌐 [API] Usando backend REST en {}", config.api_base_url);
        ApiHandle::new(RestApi::new(config.api_base_url.clone(), store))
    }
}
