use std::{cell::RefCell, rc::Rc};
use web_sys::Storage;

use crate::utils::storage::{self as storage_utils, TOKEN_KEY};

/// Where the session token is persisted between page loads.
pub trait TokenStorage {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

pub type SharedTokenStorage = Rc<dyn TokenStorage>;

pub struct LocalTokenStorage {
    storage: Storage,
}

impl LocalTokenStorage {
    pub fn open() -> Result<Self, String> {
        storage_utils::local_storage().map(|storage| Self { storage })
    }
}

impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Option<String> {
        storage_utils::read_token(&self.storage)
    }

    fn save(&self, token: &str) {
        if self.storage.set_item(TOKEN_KEY, token).is_err() {
            log::warn!("failed to persist session token");
        }
    }

    fn clear(&self) {
        let _ = self.storage.remove_item(TOKEN_KEY);
    }
}

/// Used when local storage is unavailable (private mode, tests).
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStorage {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.token
            .borrow()
            .clone()
            .filter(|token| !token.trim().is_empty())
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

pub fn browser_token_storage() -> SharedTokenStorage {
    match LocalTokenStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(err) => {
            log::warn!("{}; session will not survive a reload", err);
            Rc::new(MemoryTokenStorage::default())
        }
    }
}
