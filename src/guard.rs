//! 路由守卫
//!
//! 三态状态机：`Checking` -> `Denied` | `Allowed`。
//! 重定向只在进入 `Denied` 的那一次转换上发出，重复观察同一状态不会再次触发，
//! 从而避免重定向循环。

use crate::route::AppRoute;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// 会话仍在加载：渲染占位，不跳转
    Checking,
    /// 未认证：跳转登录页
    Denied,
    /// 已认证：渲染真实内容
    Allowed,
}

impl GuardState {
    pub fn from_flags(is_loading: bool, is_authenticated: bool) -> Self {
        match (is_loading, is_authenticated) {
            (true, _) => GuardState::Checking,
            (false, false) => GuardState::Denied,
            (false, true) => GuardState::Allowed,
        }
    }

    pub fn of(session: &Session) -> Self {
        Self::from_flags(session.is_loading, session.is_authenticated)
    }
}

/// 单个受保护页面的守卫实例
#[derive(Debug, Clone)]
pub struct RouteGuard {
    last: Option<GuardState>,
    redirect_to: AppRoute,
}

impl RouteGuard {
    pub fn new() -> Self {
        Self {
            last: None,
            redirect_to: AppRoute::auth_failure_redirect(),
        }
    }

    /// 当前状态（尚未观察过时视为 `Checking`）
    pub fn state(&self) -> GuardState {
        self.last.unwrap_or(GuardState::Checking)
    }

    /// 观察一次会话状态
    ///
    /// 返回 `Some(route)` 表示此刻需要发起一次跳转。
    pub fn observe(&mut self, state: GuardState) -> Option<AppRoute> {
        let previous = self.last.replace(state);
        if state == GuardState::Denied && previous != Some(GuardState::Denied) {
            log::debug!("[Guard] access denied, redirecting to {}", self.redirect_to);
            Some(self.redirect_to)
        } else {
            None
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_from_flags() {
        assert_eq!(GuardState::from_flags(true, false), GuardState::Checking);
        assert_eq!(GuardState::from_flags(true, true), GuardState::Checking);
        assert_eq!(GuardState::from_flags(false, false), GuardState::Denied);
        assert_eq!(GuardState::from_flags(false, true), GuardState::Allowed);
    }

    #[test]
    fn checking_never_redirects() {
        let mut guard = RouteGuard::new();
        for _ in 0..3 {
            assert_eq!(guard.observe(GuardState::Checking), None);
        }
        assert_eq!(guard.state(), GuardState::Checking);
    }

    #[test]
    fn denied_redirects_exactly_once() {
        let mut guard = RouteGuard::new();
        assert_eq!(guard.observe(GuardState::Checking), None);
        assert_eq!(guard.observe(GuardState::Denied), Some(AppRoute::Login));
        // 重新渲染时不再跳转
        assert_eq!(guard.observe(GuardState::Denied), None);
        assert_eq!(guard.observe(GuardState::Denied), None);
    }

    #[test]
    fn allowed_never_redirects() {
        let mut guard = RouteGuard::new();
        assert_eq!(guard.observe(GuardState::Checking), None);
        assert_eq!(guard.observe(GuardState::Allowed), None);
        assert_eq!(guard.observe(GuardState::Allowed), None);
        assert_eq!(guard.state(), GuardState::Allowed);
    }

    #[test]
    fn logout_after_allowed_redirects_again() {
        let mut guard = RouteGuard::new();
        guard.observe(GuardState::Allowed);
        assert_eq!(guard.observe(GuardState::Denied), Some(AppRoute::Login));
        guard.observe(GuardState::Allowed);
        assert_eq!(guard.observe(GuardState::Denied), Some(AppRoute::Login));
    }

    #[test]
    fn first_observation_denied_redirects() {
        let mut guard = RouteGuard::default();
        assert_eq!(guard.observe(GuardState::Denied), Some(AppRoute::Login));
    }
}
