//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    Login,
    Register,
    /// 以下三个需要认证
    SelectSkills,
    Results,
    Profile,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        match path {
            "/" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/select-skills" => Self::SelectSkills,
            "/results" => Self::Results,
            "/profile" => Self::Profile,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::SelectSkills => "/select-skills",
            Self::Results => "/results",
            Self::Profile => "/profile",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::SelectSkills | Self::Results | Self::Profile)
    }

    /// 定义已认证用户是否应该离开此路由（登录、注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取已认证用户离开登录页时的目标
    pub fn auth_success_redirect() -> Self {
        Self::Results
    }

    /// 导航守卫：给定认证状态，返回实际应到达的路由
    pub fn resolve(self, is_authenticated: bool) -> Self {
        if is_authenticated && self.should_redirect_when_authenticated() {
            Self::auth_success_redirect()
        } else {
            self
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [
            AppRoute::Home,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::SelectSkills,
            AppRoute::Results,
            AppRoute::Profile,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
        assert_eq!(AppRoute::from_path("/results/"), AppRoute::Results);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
    }

    #[test]
    fn protected_routes() {
        assert!(AppRoute::Results.requires_auth());
        assert!(AppRoute::SelectSkills.requires_auth());
        assert!(AppRoute::Profile.requires_auth());
        assert!(!AppRoute::Home.requires_auth());
        assert!(!AppRoute::Login.requires_auth());
    }

    #[test]
    fn authenticated_users_skip_login_and_register() {
        assert_eq!(AppRoute::Login.resolve(true), AppRoute::Results);
        assert_eq!(AppRoute::Register.resolve(true), AppRoute::Results);
        assert_eq!(AppRoute::Login.resolve(false), AppRoute::Login);
        // 受保护路由交给 RouteGuard 处理
        assert_eq!(AppRoute::Profile.resolve(false), AppRoute::Profile);
    }
}
