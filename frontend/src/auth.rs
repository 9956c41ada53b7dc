//! 认证模块
//!
//! 会话由核心 crate 的 `SessionStore` 持有，这里只是把它放进一个响应式信号里，
//! 通过 Context 在组件间共享。路由服务通过注入的认证信号读取状态。

use crate::web::BrowserStorage;
use leptos::prelude::*;
use skillmatch::flow::{SavedSkills, SignedIn};
use skillmatch::{AppRoute, ClientConfig, GuardState, Session, SessionStore};

pub type BrowserSession = SessionStore<BrowserStorage>;

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<BrowserSession>,
}

impl AuthContext {
    /// 创建新的认证上下文（加载中、未登录）
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            session: RwSignal::new(SessionStore::new(BrowserStorage, config)),
        }
    }

    /// 会话快照（响应式）
    pub fn snapshot(&self) -> Session {
        self.session.with(|s| s.snapshot())
    }

    pub fn guard_state(&self) -> GuardState {
        GuardState::of(&self.snapshot())
    }

    pub fn is_loading(&self) -> bool {
        self.session.with(|s| s.is_loading())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.is_authenticated()))
    }

    /// 当前令牌（非响应式，供发起请求时读取）
    pub fn token(&self) -> Option<String> {
        self.session
            .with_untracked(|s| s.token().map(str::to_string))
    }

    /// 缓存的技能列表（非响应式）
    pub fn cached_skills(&self) -> Vec<String> {
        self.session.with_untracked(|s| s.cached_skills())
    }

    /// 提交登录/注册结果，返回下一个路由
    pub fn sign_in(&self, signed_in: SignedIn) -> AppRoute {
        let mut next = signed_in.next();
        self.session.update(|s| next = signed_in.commit(s));
        next
    }

    /// 写入刚保存的技能缓存，返回下一个路由
    pub fn skills_saved(&self, saved: SavedSkills) -> AppRoute {
        self.session.with_untracked(|s| saved.commit(s))
    }

    /// 注销：清除令牌与技能缓存
    pub fn logout(&self) {
        self.session.update(|s| s.logout());
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态：从 LocalStorage 恢复令牌
pub fn init_auth(ctx: &AuthContext) {
    ctx.session.update(|s| s.initialize());
}
