pub mod use_navigation;
pub mod use_fetch;
pub mod use_auth;
pub mod use_cart;

pub use use_navigation::{use_navigation, NavAction, UseNavigationHandle};
pub use use_fetch::{use_fetch, FetchOptions, UseFetchHandle};
pub use use_auth::{use_auth, AuthAction, UseAuthHandle};
pub use use_cart::{use_cart, CartAction, UseCartHandle};
