// ============================================================================
// STATE MODULE - Estado de la app independiente de Yew
// ============================================================================

pub mod navigation;
pub mod fetch_state;
pub mod cart_state;
pub mod auth_state;

pub use navigation::*;
pub use fetch_state::{AutoRun, FetchController, FetchState, RequestTicket, Settlement, SharedFetch};
pub use cart_state::*;
pub use auth_state::*;
