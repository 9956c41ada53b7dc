//! SkillMatch 前端应用
//!
//! 采用 Context-Driven 的架构，业务逻辑全部在核心 crate 中：
//! - `web`: 浏览器实现（LocalStorage、fetch、History 路由）
//! - `auth`: 会话上下文
//! - `api`: API 客户端上下文
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod common;
    pub mod guard;
    pub mod home;
    pub mod login;
    pub mod navigation;
    pub mod profile;
    pub mod register;
    pub mod results;
    pub mod select_skills;
    pub mod skill_selector;
}
mod web;

use crate::api::{client_config, provide_api};
use crate::auth::{AuthContext, init_auth};
use crate::components::guard::Protected;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::navigation::Navigation;
use crate::components::profile::ProfilePage;
use crate::components::register::RegisterPage;
use crate::components::results::ResultsPage;
use crate::components::select_skills::SelectSkillsPage;

use leptos::prelude::*;
use skillmatch::AppRoute;
use web::router::{Link, Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件，需要认证的页面统一包在 `Protected` 里。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::SelectSkills => view! { <Protected><SelectSkillsPage /></Protected> }.into_any(),
        AppRoute::Results => view! { <Protected><ResultsPage /></Protected> }.into_any(),
        AppRoute::Profile => view! { <Protected><ProfilePage /></Protected> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[70vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <Link to=AppRoute::Home class="btn btn-ghost mt-4">"Back to home"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = client_config();
    log::debug!("[App] api base url: {}", config.api_base_url);

    // 1. 创建认证上下文并从 LocalStorage 恢复令牌
    let auth_ctx = AuthContext::new(&config);
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // 2. API 客户端
    provide_api(config);

    // 3. 认证状态信号注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <div class="min-h-screen bg-base-200 font-sans">
                <Navigation />
                <main>
                    <RouterOutlet matcher=route_matcher />
                </main>
            </div>
        </Router>
    }
}
