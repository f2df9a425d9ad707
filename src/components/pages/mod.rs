// ============================================================================
// PAGES - Una vista por variante de View
// ============================================================================

pub mod landing;
pub mod auth;
pub mod artworks;
pub mod artwork_detail;
pub mod cart;
pub mod order_summary;
pub mod dashboard;
pub mod sold_donated;
pub mod collaborations;

use yew::prelude::*;
use crate::components::app::AppContext;

pub use landing::LandingPage;
pub use auth::AuthPage;
pub use artworks::ArtworksPage;
pub use artwork_detail::ArtworkDetailPage;
pub use cart::CartPage;
pub use order_summary::OrderSummaryPage;
pub use dashboard::DashboardPage;
pub use sold_donated::SoldDonatedPage;
pub use collaborations::CollaborationsPage;

/// Props de las páginas que solo necesitan el contexto
#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub ctx: AppContext,
}
