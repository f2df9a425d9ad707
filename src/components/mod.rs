pub mod app;
pub mod error_banner;
pub mod loading_spinner;
pub mod item_card;
pub mod pages;

pub use app::{App, AppContext, AppProps};
pub use error_banner::ErrorBanner;
pub use loading_spinner::LoadingSpinner;
pub use item_card::ItemCard;
