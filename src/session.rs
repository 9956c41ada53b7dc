//! 会话状态管理
//!
//! `SessionStore` 是会话唯一的持有者，变更只能通过 `initialize` / `login` / `logout`
//! （以及技能缓存的两个辅助方法）。存储故障一律在内部吸收并降级为"未登录"。

use crate::config::ClientConfig;
use crate::storage::KeyValueStore;

/// 会话快照（只读）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

/// 会话存储
pub struct SessionStore<S> {
    storage: S,
    token_key: String,
    skills_key: String,
    token: Option<String>,
    is_loading: bool,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// 应用启动时创建：加载中、无令牌
    pub fn new(storage: S, config: &ClientConfig) -> Self {
        Self {
            storage,
            token_key: config.token_key.clone(),
            skills_key: config.skills_key.clone(),
            token: None,
            is_loading: true,
        }
    }

    /// 从持久化存储恢复令牌
    ///
    /// 每次加载只生效一次，之后的调用不做任何事。
    pub fn initialize(&mut self) {
        if !self.is_loading {
            return;
        }

        self.token = match self.storage.get(&self.token_key) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("[Session] storage read failed, starting signed out: {}", e);
                None
            }
        };
        self.is_loading = false;
        log::debug!(
            "[Session] initialized, authenticated = {}",
            self.token.is_some()
        );
    }

    /// 提交认证结果（不发起网络请求）
    ///
    /// 空令牌与 `initialize` 的规则一致，视为没有会话，直接忽略。
    pub fn login(&mut self, token: impl Into<String>) {
        let token = token.into();
        if token.is_empty() {
            log::warn!("[Session] ignoring empty token");
            return;
        }
        if let Err(e) = self.storage.set(&self.token_key, &token) {
            log::warn!("[Session] failed to persist token: {}", e);
        }
        self.token = Some(token);
        log::debug!("[Session] logged in");
    }

    /// 清除令牌与技能缓存，可重复调用
    pub fn logout(&mut self) {
        for key in [&self.token_key, &self.skills_key] {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("[Session] failed to clear `{}`: {}", key, e);
            }
        }
        if self.token.take().is_some() {
            log::debug!("[Session] logged out");
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn snapshot(&self) -> Session {
        Session {
            token: self.token.clone(),
            is_authenticated: self.is_authenticated(),
            is_loading: self.is_loading,
        }
    }

    // =========================================================
    // 技能缓存 (供结果页使用)
    // =========================================================

    pub fn cache_skills(&self, skills: &[String]) {
        let encoded = match serde_json::to_string(skills) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[Session] failed to encode skills: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.skills_key, &encoded) {
            log::warn!("[Session] failed to cache skills: {}", e);
        }
    }

    /// 读取缓存的技能；缺失或损坏时返回空列表
    pub fn cached_skills(&self) -> Vec<String> {
        match self.storage.get(&self.skills_key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("[Session] ignoring corrupt skill cache: {}", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("[Session] failed to read skill cache: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store_with(storage: MemoryStore) -> SessionStore<MemoryStore> {
        SessionStore::new(storage, &ClientConfig::default())
    }

    #[test]
    fn starts_loading_and_signed_out() {
        let session = store_with(MemoryStore::new());
        assert_eq!(
            session.snapshot(),
            Session {
                token: None,
                is_authenticated: false,
                is_loading: true,
            }
        );
    }

    #[test]
    fn initialize_restores_persisted_token() {
        let mut session = store_with(MemoryStore::new().with_entry("token", "abc"));
        session.initialize();
        assert!(!session.is_loading());
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc"));
    }

    #[test]
    fn initialize_without_token_is_signed_out() {
        let mut session = store_with(MemoryStore::new());
        session.initialize();
        assert!(!session.is_loading());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn initialize_runs_once() {
        let storage = MemoryStore::new();
        let mut session = store_with(storage.clone());
        session.initialize();

        // 初始化之后写入的值不会被再次读取
        storage.set("token", "late").unwrap();
        session.initialize();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn unavailable_storage_degrades_to_signed_out() {
        let mut session = store_with(MemoryStore::unavailable());
        session.initialize();
        assert!(!session.is_loading());
        assert!(!session.is_authenticated());

        // 登录仍然在内存中生效
        session.login("t");
        assert!(session.is_authenticated());
        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.cached_skills().is_empty());
    }

    #[test]
    fn login_is_visible_immediately() {
        let storage = MemoryStore::new();
        let mut session = store_with(storage.clone());
        session.initialize();
        session.login("t1");

        let snap = session.snapshot();
        assert_eq!(snap.token.as_deref(), Some("t1"));
        assert!(snap.is_authenticated);
        assert_eq!(storage.get("token").unwrap().as_deref(), Some("t1"));
    }

    #[test]
    fn empty_token_is_never_a_session() {
        let storage = MemoryStore::new();
        let mut session = store_with(storage.clone());
        session.initialize();
        session.login("");
        assert!(!session.is_authenticated());
        assert!(!storage.contains("token"));

        // 重新加载后的状态与内存状态一致
        let mut reloaded = store_with(storage.with_entry("token", ""));
        reloaded.initialize();
        assert_eq!(reloaded.is_authenticated(), session.is_authenticated());
    }

    #[test]
    fn login_then_logout_clears_memory_and_storage() {
        for token in ["a", "b", "long-token-value"] {
            let storage = MemoryStore::new();
            let mut session = store_with(storage.clone());
            session.initialize();
            session.login(token);
            session.cache_skills(&["Python".to_string()]);
            session.logout();

            assert_eq!(session.token(), None);
            assert!(!session.is_authenticated());
            assert!(!storage.contains("token"));
            assert!(!storage.contains("selectedSkills"));
        }
    }

    #[test]
    fn logout_is_idempotent() {
        let mut session = store_with(MemoryStore::new());
        session.initialize();
        session.logout();
        let before = session.snapshot();
        session.logout();
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn skill_cache_round_trips_and_tolerates_corruption() {
        let storage = MemoryStore::new();
        let session = store_with(storage.clone());
        let skills = vec!["Go".to_string(), "C++".to_string()];
        session.cache_skills(&skills);
        assert_eq!(session.cached_skills(), skills);

        storage.set("selectedSkills", "not json").unwrap();
        assert!(session.cached_skills().is_empty());
    }
}
