//! LocalStorage 封装模块
//!
//! 直接使用 `web_sys::Storage`，不可用时（隐私模式、无 window）返回错误而不是 panic，
//! 由会话层吸收并降级为未登录。

use skillmatch::{KeyValueStore, StorageError};

/// 浏览器 LocalStorage
///
/// 零大小类型，每次操作都重新获取 `Storage` 句柄。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::operation("get", format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::operation("set", format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::operation("remove", format!("{:?}", e)))
    }
}
