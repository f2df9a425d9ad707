// ============================================================================
// TOKEN STORE - Persistencia del token y del usuario (localStorage)
// ============================================================================

use std::cell::RefCell;
use crate::error::{ApiError, ApiResult};
use crate::models::User;
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_TOKEN, STORAGE_KEY_USER};

pub trait TokenStore {
    fn save(&self, token: &str, user: &User) -> ApiResult<()>;
    fn update_user(&self, user: &User) -> ApiResult<()>;
    fn token(&self) -> Option<String>;
    fn user(&self) -> Option<User>;
    fn clear(&self);
}

/// localStorage del navegador (`sc_token`, `sc_user`)
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn save(&self, token: &str, user: &User) -> ApiResult<()> {
        save_to_storage(STORAGE_KEY_TOKEN, &token).map_err(ApiError::Storage)?;
        self.update_user(user)
    }

    fn update_user(&self, user: &User) -> ApiResult<()> {
        save_to_storage(STORAGE_KEY_USER, user).map_err(ApiError::Storage)
    }

    fn token(&self) -> Option<String> {
        load_from_storage(STORAGE_KEY_TOKEN)
    }

    fn user(&self) -> Option<User> {
        load_from_storage(STORAGE_KEY_USER)
    }

    fn clear(&self) {
        remove_from_storage(STORAGE_KEY_TOKEN);
        remove_from_storage(STORAGE_KEY_USER);
    }
}

/// En memoria (tests, o navegadores sin storage)
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entry: RefCell<Option<(String, User)>>,
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str, user: &User) -> ApiResult<()> {
        *self.entry.borrow_mut() = Some((token.to_string(), user.clone()));
        Ok(())
    }

    fn update_user(&self, user: &User) -> ApiResult<()> {
        match self.entry.borrow_mut().as_mut() {
            Some((_, saved)) => {
                *saved = user.clone();
                Ok(())
            }
            None => Err(ApiError::Unauthenticated),
        }
    }

    fn token(&self) -> Option<String> {
        self.entry.borrow().as_ref().map(|(token, _)| token.clone())
    }

    fn user(&self) -> Option<User> {
        self.entry.borrow().as_ref().map(|(_, user)| user.clone())
    }

    fn clear(&self) {
        *self.entry.borrow_mut() = None;
    }
}
